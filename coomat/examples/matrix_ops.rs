//! Demonstrate the three arithmetic operations on small matrices

use coomat::{CooMatrix, Result};
use std::time::Instant;

fn main() -> Result<()> {
    // A = [2 3]      B = [4]
    //                    [5]
    let mut a = CooMatrix::new(1, 2);
    a.set_element(0, 0, 2);
    a.set_element(0, 1, 3);

    let mut b = CooMatrix::new(2, 1);
    b.set_element(0, 0, 4);
    b.set_element(1, 0, 5);

    let start = Instant::now();
    let product = a.multiply(&b)?;
    println!("A * B computed in {:?}", start.elapsed());
    print!("{product}");

    let mut c = CooMatrix::new(1, 2);
    c.set_element(0, 0, 10);
    c.set_element(0, 1, -3);

    let sum = a.add(&c)?;
    println!("\nA + C:");
    print!("{sum}");

    let difference = a.subtract(&c)?;
    println!("\nA - C:");
    print!("{difference}");

    Ok(())
}
