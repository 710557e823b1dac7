//! Coordinate-keyed sparse matrix storage
//!
//! Only non-zero elements are stored, keyed by `(row, col)`. The entry map
//! never holds a zero value: writing zero through [`CooMatrix::set_element`]
//! removes the coordinate instead, so the map size always equals the
//! non-zero count.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::format::{Triplet, COLS_KEY, ROWS_KEY};

/// Sparse matrix storing only non-zero elements, keyed by coordinate
///
/// Dimensions are fixed for the lifetime of an instance; the entry map is
/// mutated only through [`CooMatrix::set_element`]. Arithmetic operations
/// (see [`crate::ops`]) never mutate their operands and return fresh
/// instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooMatrix {
    num_rows: usize,
    num_cols: usize,
    entries: HashMap<(usize, usize), i64>,
}

impl CooMatrix {
    /// Create an empty matrix with the given dimensions
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            entries: HashMap::new(),
        }
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Number of non-zero elements stored
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix stores no non-zero elements
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the element at the specified position
    ///
    /// Returns `0` for any coordinate without a stored entry. No bounds
    /// checking is performed against the declared dimensions; coordinates
    /// outside them are treated like any other absent coordinate.
    pub fn get_element(&self, row: usize, col: usize) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Set the element at the specified position
    ///
    /// A non-zero value inserts or overwrites the entry; zero removes any
    /// stored entry at the coordinate. This is the single enforcement point
    /// of the no-explicit-zeros invariant - every other write routes
    /// through it.
    pub fn set_element(&mut self, row: usize, col: usize, value: i64) {
        if value != 0 {
            self.entries.insert((row, col), value);
        } else {
            self.entries.remove(&(row, col));
        }
    }

    /// Iterate over all stored entries in arbitrary order
    pub fn entries(&self) -> impl Iterator<Item = Triplet> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| Triplet::new(row, col, value))
    }

    /// All stored entries in row-major order
    pub fn sorted_entries(&self) -> Vec<Triplet> {
        let mut entries: Vec<Triplet> = self.entries().collect();
        entries.sort_unstable_by_key(|t| (t.row, t.col));
        entries
    }

    /// Non-zero entries of one row as `(col, value)` pairs in column order
    pub fn row_entries(&self, row: usize) -> Vec<(usize, i64)> {
        let mut cols: Vec<(usize, i64)> = self
            .entries
            .iter()
            .filter(|&(&(r, _), _)| r == row)
            .map(|(&(_, col), &value)| (col, value))
            .collect();
        cols.sort_unstable_by_key(|&(col, _)| col);
        cols
    }

    /// Non-zero entries of one column as `(row, value)` pairs in row order
    pub fn col_entries(&self, col: usize) -> Vec<(usize, i64)> {
        let mut rows: Vec<(usize, i64)> = self
            .entries
            .iter()
            .filter(|&(&(_, c), _)| c == col)
            .map(|(&(row, _), &value)| (row, value))
            .collect();
        rows.sort_unstable_by_key(|&(row, _)| row);
        rows
    }

    /// Transpose the matrix, swapping row and column coordinates
    pub fn transpose(&self) -> CooMatrix {
        let mut result = CooMatrix::new(self.num_cols, self.num_rows);
        for entry in self.entries() {
            result.set_element(entry.col, entry.row, entry.value);
        }
        result
    }

    /// Render the matrix in the coordinate text format
    ///
    /// Two dimension lines followed by one triple per entry in row-major
    /// order. Parsing the output with [`crate::parse::parse_matrix`]
    /// reproduces the dimensions and the exact entry map.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for CooMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{ROWS_KEY}={}", self.num_rows)?;
        writeln!(f, "{COLS_KEY}={}", self.num_cols)?;
        for entry in self.sorted_entries() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_new_matrix_is_empty() {
        let matrix = CooMatrix::new(4, 5);
        assert_eq!(matrix.dimensions(), (4, 5));
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_unset_elements_read_as_zero() {
        let matrix = CooMatrix::new(3, 3);
        assert_eq!(matrix.get_element(0, 0), 0);
        assert_eq!(matrix.get_element(2, 2), 0);
        // Coordinates outside the declared dimensions behave the same
        assert_eq!(matrix.get_element(100, 100), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut matrix = CooMatrix::new(3, 3);
        matrix.set_element(1, 2, 42);
        assert_eq!(matrix.get_element(1, 2), 42);
        assert_eq!(matrix.nnz(), 1);

        matrix.set_element(1, 2, -7);
        assert_eq!(matrix.get_element(1, 2), -7);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut matrix = CooMatrix::new(3, 3);
        matrix.set_element(0, 0, 9);
        assert_eq!(matrix.nnz(), 1);

        matrix.set_element(0, 0, 0);
        assert_eq!(matrix.get_element(0, 0), 0);
        assert_eq!(matrix.nnz(), 0);

        // Writing zero to an absent coordinate is a no-op
        matrix.set_element(2, 1, 0);
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut matrix = CooMatrix::new(2, 2);
        matrix.set_element(0, 1, 3);
        let snapshot = matrix.clone();
        matrix.set_element(0, 1, 3);
        assert_eq!(matrix, snapshot);
    }

    #[test]
    fn test_sorted_entries_row_major() {
        let mut matrix = CooMatrix::new(3, 3);
        matrix.set_element(2, 0, 1);
        matrix.set_element(0, 2, 2);
        matrix.set_element(0, 1, 3);
        assert_eq!(
            matrix.sorted_entries(),
            vec![
                Triplet::new(0, 1, 3),
                Triplet::new(0, 2, 2),
                Triplet::new(2, 0, 1),
            ]
        );
    }

    #[test]
    fn test_row_and_col_entries() {
        let mut matrix = CooMatrix::new(3, 3);
        matrix.set_element(1, 2, 5);
        matrix.set_element(1, 0, 6);
        matrix.set_element(0, 2, 7);

        assert_eq!(matrix.row_entries(1), vec![(0, 6), (2, 5)]);
        assert_eq!(matrix.row_entries(2), vec![]);
        assert_eq!(matrix.col_entries(2), vec![(0, 7), (1, 5)]);
    }

    #[test]
    fn test_transpose() {
        let mut matrix = CooMatrix::new(2, 3);
        matrix.set_element(0, 2, 4);
        matrix.set_element(1, 0, -1);

        let transposed = matrix.transpose();
        assert_eq!(transposed.dimensions(), (3, 2));
        assert_eq!(transposed.get_element(2, 0), 4);
        assert_eq!(transposed.get_element(0, 1), -1);
        assert_eq!(transposed.nnz(), 2);
    }

    #[test]
    fn test_to_text_format() {
        let mut matrix = CooMatrix::new(2, 2);
        matrix.set_element(1, 0, -3);
        matrix.set_element(0, 1, 5);
        assert_eq!(matrix.to_text(), "rows=2\ncols=2\n(0, 1, 5)\n(1, 0, -3)\n");
    }
}
