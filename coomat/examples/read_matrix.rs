//! Read back the matrix written by the write_matrix example

use coomat::{read_matrix_file, Result};
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    let filename = "example_matrix.txt";

    if !Path::new(filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Run 'cargo run --example write_matrix' first");
        return Ok(());
    }

    println!("Reading sparse matrix from '{filename}'...");
    let start = Instant::now();
    let matrix = read_matrix_file(filename)?;
    println!("Loaded in {:?}", start.elapsed());

    println!(
        "Matrix: {} x {}, {} non-zeros",
        matrix.num_rows(),
        matrix.num_cols(),
        matrix.nnz()
    );

    println!("First entries of row 0: {:?}", matrix.row_entries(0));
    println!("matrix[0, 0] = {}", matrix.get_element(0, 0));
    println!("matrix[0, 1] = {}", matrix.get_element(0, 1));
    Ok(())
}
