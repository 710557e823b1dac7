//! Build a sparse matrix and write it as a coordinate text file

use coomat::{write_matrix_file, CooMatrix};
use std::time::Instant;

fn main() -> std::io::Result<()> {
    println!("Writing sparse matrix to 'example_matrix.txt'...");

    // A 1000x1000 matrix with a sparse diagonal band
    let mut matrix = CooMatrix::new(1000, 1000);
    for i in (0..1000).step_by(7) {
        matrix.set_element(i, i, i as i64 + 1);
        if i + 1 < 1000 {
            matrix.set_element(i, i + 1, -(i as i64));
        }
    }

    println!(
        "Matrix: {} x {}, {} non-zeros",
        matrix.num_rows(),
        matrix.num_cols(),
        matrix.nnz()
    );

    let start = Instant::now();
    write_matrix_file("example_matrix.txt", &matrix)?;
    println!("Written in {:?}", start.elapsed());
    println!("\nRun 'cargo run --example read_matrix' to read it back!");
    Ok(())
}
