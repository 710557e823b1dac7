//! Pure parsing for the coordinate matrix text format
//!
//! This module provides parsing functions for the text grammar defined in
//! [`crate::format`] with no I/O dependencies. Callers hand in text; file
//! loading lives in the `coomat` crate.
//!
//! Every grammar violation is reported uniformly as
//! [`CoomatError::MalformedInput`] with no sub-classification.

use crate::error::{CoomatError, Result};
use crate::format::Triplet;
use crate::matrix::CooMatrix;

/// Parse a `key=<integer>` dimension line
///
/// The line is split on `=` and the token between the first and second
/// `=` is parsed as the dimension. The key text itself is not validated.
pub fn parse_dimension_line(line: &str) -> Result<usize> {
    let token = line.split('=').nth(1).ok_or(CoomatError::MalformedInput)?;
    token.trim().parse().map_err(|_| CoomatError::MalformedInput)
}

/// Parse one `(<row>, <col>, <value>)` entry line
///
/// The line must start with `(` and end with `)`; the interior, split on
/// `,`, must yield exactly three integer tokens.
pub fn parse_entry_line(line: &str) -> Result<Triplet> {
    let interior = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(CoomatError::MalformedInput)?;

    let mut tokens = interior.split(',');
    let row = parse_index(tokens.next())?;
    let col = parse_index(tokens.next())?;
    let value = parse_value(tokens.next())?;
    if tokens.next().is_some() {
        return Err(CoomatError::MalformedInput);
    }

    Ok(Triplet::new(row, col, value))
}

fn parse_index(token: Option<&str>) -> Result<usize> {
    token
        .ok_or(CoomatError::MalformedInput)?
        .trim()
        .parse()
        .map_err(|_| CoomatError::MalformedInput)
}

fn parse_value(token: Option<&str>) -> Result<i64> {
    token
        .ok_or(CoomatError::MalformedInput)?
        .trim()
        .parse()
        .map_err(|_| CoomatError::MalformedInput)
}

/// Parse a complete matrix description
///
/// Blank lines are ignored. The first two non-blank lines declare the
/// dimensions; every further non-blank line is an entry triple, applied
/// through [`CooMatrix::set_element`] in order. Later duplicate
/// coordinates overwrite earlier ones, and zero values leave no entry.
pub fn parse_matrix(input: &str) -> Result<CooMatrix> {
    let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

    let num_rows = parse_dimension_line(lines.next().ok_or(CoomatError::MalformedInput)?)?;
    let num_cols = parse_dimension_line(lines.next().ok_or(CoomatError::MalformedInput)?)?;

    let mut matrix = CooMatrix::new(num_rows, num_cols);
    for line in lines {
        let entry = parse_entry_line(line)?;
        matrix.set_element(entry.row, entry.col, entry.value);
    }
    Ok(matrix)
}
