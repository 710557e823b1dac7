//! File loading and saving for coordinate matrix text files

use std::fs;
use std::io;
use std::path::Path;

use coomat_core::parse::parse_matrix;
use coomat_core::{CooMatrix, CoomatError, Result};

/// Load a matrix from a coordinate text file
///
/// Reads the whole file and parses it with
/// [`parse_matrix`](coomat_core::parse::parse_matrix). Every failure,
/// including an unreadable file, reports uniformly as
/// [`CoomatError::MalformedInput`].
pub fn read_matrix_file<P: AsRef<Path>>(path: P) -> Result<CooMatrix> {
    let text = fs::read_to_string(path).map_err(|_| CoomatError::MalformedInput)?;
    parse_matrix(&text)
}

/// Write a matrix in the coordinate text format
///
/// Entries are written in row-major order; reading the file back yields an
/// identical matrix.
pub fn write_matrix_file<P: AsRef<Path>>(path: P, matrix: &CooMatrix) -> io::Result<()> {
    fs::write(path, matrix.to_text())
}
