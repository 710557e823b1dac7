//! Console front-end for coordinate sparse matrix arithmetic
//!
//! With a subcommand the operation runs non-interactively; without one the
//! classic three-option menu is presented.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use coomat::cli::{print_result, run_menu, Operation};
use coomat::read_matrix_file;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "Sparse matrix arithmetic over coordinate text files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices of identical dimensions
    Add {
        /// Path to the first matrix file
        first: PathBuf,
        /// Path to the second matrix file
        second: PathBuf,
    },
    /// Subtract the second matrix from the first
    Sub {
        /// Path to the first matrix file
        first: PathBuf,
        /// Path to the second matrix file
        second: PathBuf,
    },
    /// Multiply two matrices with compatible inner dimensions
    Mul {
        /// Path to the first matrix file
        first: PathBuf,
        /// Path to the second matrix file
        second: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            let (operation, first, second) = match command {
                Commands::Add { first, second } => (Operation::Add, first, second),
                Commands::Sub { first, second } => (Operation::Subtract, first, second),
                Commands::Mul { first, second } => (Operation::Multiply, first, second),
            };
            let lhs = read_matrix_file(&first)?;
            let rhs = read_matrix_file(&second)?;
            let result = operation.apply(&lhs, &rhs)?;
            print_result(&mut io::stdout().lock(), &result)?;
        }
        None => {
            run_menu(&mut io::stdin().lock(), &mut io::stdout().lock())?;
        }
    }
    Ok(())
}
