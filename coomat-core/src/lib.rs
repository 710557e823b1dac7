#![no_std]

//! coomat core - coordinate sparse matrix definitions
//!
//! This crate provides the coordinate-keyed sparse matrix type, its
//! arithmetic, and the text format grammar. No I/O lives here; file and
//! console surfaces belong to the `coomat` crate.
//!
//! ```
//! use coomat_core::CooMatrix;
//!
//! let mut matrix = CooMatrix::new(3, 3);
//! matrix.set_element(0, 1, 5);
//! assert_eq!(matrix.get_element(0, 1), 5);
//! assert_eq!(matrix.get_element(2, 2), 0);
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod parse;

pub use error::*;
pub use format::*;
pub use matrix::*;
pub use parse::{parse_dimension_line, parse_entry_line, parse_matrix};
