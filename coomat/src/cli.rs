//! Interactive console menu for matrix arithmetic
//!
//! The menu reads an operation choice and two file paths, loads both
//! matrices, applies the operation, and prints the non-zero entries of the
//! result. It is written against [`BufRead`]/[`Write`] so the whole
//! interaction is unit-testable without a terminal.

use std::io::{self, BufRead, Write};

use coomat_core::{CooMatrix, Result};

use crate::file_io::read_matrix_file;

/// Operations offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Element-wise addition
    Add,
    /// Element-wise subtraction
    Subtract,
    /// Matrix product
    Multiply,
}

impl Operation {
    /// Map a menu choice to an operation
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Operation::Add),
            "2" => Some(Operation::Subtract),
            "3" => Some(Operation::Multiply),
            _ => None,
        }
    }

    /// Apply this operation to two operands
    pub fn apply(self, first: &CooMatrix, second: &CooMatrix) -> Result<CooMatrix> {
        match self {
            Operation::Add => first.add(second),
            Operation::Subtract => first.subtract(second),
            Operation::Multiply => first.multiply(second),
        }
    }
}

/// Print the non-zero entries of a result matrix, one triple per line
pub fn print_result(output: &mut impl Write, matrix: &CooMatrix) -> io::Result<()> {
    writeln!(output, "Result Sparse Matrix:")?;
    for entry in matrix.sorted_entries() {
        writeln!(output, "{entry}")?;
    }
    Ok(())
}

/// Run the interactive menu against arbitrary input/output streams
///
/// Both file paths are prompted and both matrices loaded before the choice
/// is validated; an unrecognized choice then prints `Invalid choice` and
/// returns without error. Load and arithmetic failures propagate to the
/// caller and terminate the run.
pub fn run_menu(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    writeln!(output, "Select an operation:")?;
    writeln!(output, "1. Addition")?;
    writeln!(output, "2. Subtraction")?;
    writeln!(output, "3. Multiplication")?;
    let choice = prompt(input, output, "Enter choice (1/2/3): ")?;

    let first_path = prompt(input, output, "Enter path for first matrix: ")?;
    let second_path = prompt(input, output, "Enter path for second matrix: ")?;

    let first = read_matrix_file(first_path.trim())?;
    let second = read_matrix_file(second_path.trim())?;

    let operation = match Operation::from_choice(&choice) {
        Some(operation) => operation,
        None => {
            writeln!(output, "Invalid choice")?;
            return Ok(());
        }
    };

    let result = operation.apply(&first, &second)?;
    print_result(output, &result)?;
    Ok(())
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, text: &str) -> io::Result<String> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
