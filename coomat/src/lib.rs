//! coomat - sparse matrix arithmetic over coordinate text files
//!
//! This library loads sparse matrices from a simple coordinate text format
//! and performs addition, subtraction, and multiplication on them.
//!
//! ## Architecture
//!
//! The workspace follows a core/implementation separation:
//!
//! - **coomat-core**: the matrix type, its arithmetic, and the text format
//!   grammar (no I/O)
//! - **coomat**: file loading and saving, JSON import/export, and the
//!   console front-end
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coomat::{read_matrix_file, Result};
//!
//! fn example() -> Result<()> {
//!     let first = read_matrix_file("first.txt")?;
//!     let second = read_matrix_file("second.txt")?;
//!
//!     let product = first.multiply(&second)?;
//!     for entry in product.sorted_entries() {
//!         println!("{entry}");
//!     }
//!     Ok(())
//! }
//! ```

// Re-export the core API
pub use coomat_core::{
    parse_dimension_line, parse_entry_line, parse_matrix, CooMatrix, CoomatError, Result, Triplet,
    COLS_KEY, ROWS_KEY,
};

// Implementation modules
#[cfg(feature = "cli")]
pub mod cli;
pub mod file_io;
#[cfg(feature = "serde")]
pub mod json;

// Public exports
pub use file_io::{read_matrix_file, write_matrix_file};

#[cfg(feature = "serde")]
pub use json::{from_json, to_json, JsonMatrix};
