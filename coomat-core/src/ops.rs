//! Arithmetic over coordinate sparse matrices: add, subtract, multiply
//!
//! All operations validate operand shapes first, allocate a fresh result,
//! and route every write through [`CooMatrix::set_element`] so the
//! no-explicit-zeros invariant holds on the result.

use crate::error::{CoomatError, Result};
use crate::matrix::CooMatrix;

impl CooMatrix {
    /// Element-wise addition: `C = A + B`
    ///
    /// Both operands must have identical dimensions.
    ///
    /// Iteration is driven solely by `self`'s stored entries: for each
    /// `(r, c) -> v` the result receives `v + other.get_element(r, c)`. A
    /// coordinate that is zero in `self` is never visited, so a non-zero
    /// entry held only by `other` is silently omitted from the result.
    /// Callers needing full element-wise addition must put the operand
    /// that covers every coordinate of interest on the `self` side.
    ///
    /// # Errors
    ///
    /// Returns [`CoomatError::DimensionMismatch`] if the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<CooMatrix> {
        if self.dimensions() != other.dimensions() {
            return Err(CoomatError::DimensionMismatch);
        }

        let mut result = CooMatrix::new(self.num_rows(), self.num_cols());
        for entry in self.entries() {
            let sum = entry.value + other.get_element(entry.row, entry.col);
            result.set_element(entry.row, entry.col, sum);
        }
        Ok(result)
    }

    /// Element-wise subtraction: `C = A - B`
    ///
    /// Same contract as [`CooMatrix::add`], including the asymmetry: only
    /// coordinates with a stored entry in `self` reach the result.
    ///
    /// # Errors
    ///
    /// Returns [`CoomatError::DimensionMismatch`] if the dimensions differ.
    pub fn subtract(&self, other: &Self) -> Result<CooMatrix> {
        if self.dimensions() != other.dimensions() {
            return Err(CoomatError::DimensionMismatch);
        }

        let mut result = CooMatrix::new(self.num_rows(), self.num_cols());
        for entry in self.entries() {
            let difference = entry.value - other.get_element(entry.row, entry.col);
            result.set_element(entry.row, entry.col, difference);
        }
        Ok(result)
    }

    /// Matrix product: `C = A * B`
    ///
    /// Requires `self.num_cols() == other.num_rows()`; the result is
    /// `self.num_rows() x other.num_cols()`.
    ///
    /// Walks `self`'s stored entries and sweeps every column of `other`
    /// for each, skipping the accumulation whenever the probed right-hand
    /// element is zero. Sparsity of `self` drives the outer loop; `other`
    /// is probed densely column by column, so the cost is
    /// `O(nnz(self) * other.num_cols())`.
    ///
    /// # Errors
    ///
    /// Returns [`CoomatError::DimensionMismatch`] if the inner dimensions
    /// are incompatible.
    pub fn multiply(&self, other: &Self) -> Result<CooMatrix> {
        if self.num_cols() != other.num_rows() {
            return Err(CoomatError::DimensionMismatch);
        }

        let mut result = CooMatrix::new(self.num_rows(), other.num_cols());
        for entry in self.entries() {
            for col in 0..other.num_cols() {
                let rhs = other.get_element(entry.col, col);
                if rhs == 0 {
                    continue;
                }
                let accumulated = result.get_element(entry.row, col) + entry.value * rhs;
                result.set_element(entry.row, col, accumulated);
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: usize, cols: usize, entries: &[(usize, usize, i64)]) -> CooMatrix {
        let mut m = CooMatrix::new(rows, cols);
        for &(row, col, value) in entries {
            m.set_element(row, col, value);
        }
        m
    }

    #[test]
    fn test_add() {
        let a = matrix(2, 2, &[(0, 0, 1), (1, 1, 2)]);
        let b = matrix(2, 2, &[(0, 0, 3), (1, 1, -2)]);

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.get_element(0, 0), 4);
        // 2 + (-2) cancels and must not leave a stored zero
        assert_eq!(sum.get_element(1, 1), 0);
        assert_eq!(sum.nnz(), 1);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = CooMatrix::new(2, 3);
        let b = CooMatrix::new(3, 2);
        assert_eq!(a.add(&b), Err(CoomatError::DimensionMismatch));

        let c = CooMatrix::new(2, 2);
        assert_eq!(a.add(&c), Err(CoomatError::DimensionMismatch));
    }

    #[test]
    fn test_add_is_driven_by_left_operand() {
        // Documents the known limitation: entries held only by the right
        // operand never reach the result.
        let a = CooMatrix::new(1, 1);
        let b = matrix(1, 1, &[(0, 0, 5)]);

        let sum = a.add(&b).unwrap();
        assert!(sum.is_empty());
        assert_eq!(sum.get_element(0, 0), 0);
    }

    #[test]
    fn test_add_does_not_mutate_operands() {
        let a = matrix(2, 2, &[(0, 1, 7)]);
        let b = matrix(2, 2, &[(0, 1, 1)]);
        let a_before = a.clone();
        let b_before = b.clone();

        a.add(&b).unwrap();
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_subtract() {
        let a = matrix(2, 2, &[(0, 0, 5), (0, 1, 3)]);
        let b = matrix(2, 2, &[(0, 0, 2), (0, 1, 3)]);

        let difference = a.subtract(&b).unwrap();
        assert_eq!(difference.get_element(0, 0), 3);
        // Equal values cancel to zero and are not stored
        assert_eq!(difference.nnz(), 1);
    }

    #[test]
    fn test_subtract_dimension_mismatch() {
        let a = CooMatrix::new(1, 2);
        let b = CooMatrix::new(2, 1);
        assert_eq!(a.subtract(&b), Err(CoomatError::DimensionMismatch));
    }

    #[test]
    fn test_subtract_is_driven_by_left_operand() {
        let a = CooMatrix::new(1, 1);
        let b = matrix(1, 1, &[(0, 0, 5)]);
        assert!(a.subtract(&b).unwrap().is_empty());
    }

    #[test]
    fn test_multiply() {
        // [2 3] * [4; 5] = [23]
        let a = matrix(1, 2, &[(0, 0, 2), (0, 1, 3)]);
        let b = matrix(2, 1, &[(0, 0, 4), (1, 0, 5)]);

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (1, 1));
        assert_eq!(product.get_element(0, 0), 23);
        assert_eq!(product.nnz(), 1);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let a = CooMatrix::new(2, 3);
        let b = CooMatrix::new(2, 3);
        assert_eq!(a.multiply(&b), Err(CoomatError::DimensionMismatch));
    }

    #[test]
    fn test_multiply_by_zero_matrix() {
        let a = matrix(2, 2, &[(0, 0, 1), (1, 1, 2)]);
        let b = CooMatrix::new(2, 2);

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (2, 2));
        assert!(product.is_empty());
    }

    #[test]
    fn test_multiply_identity() {
        let a = matrix(2, 2, &[(0, 1, 3), (1, 0, -4)]);
        let identity = matrix(2, 2, &[(0, 0, 1), (1, 1, 1)]);

        let product = a.multiply(&identity).unwrap();
        assert_eq!(product, a);
    }

    #[test]
    fn test_multiply_accumulates_across_entries() {
        // Two entries of A land in the same result cell
        let a = matrix(1, 2, &[(0, 0, 1), (0, 1, 1)]);
        let b = matrix(2, 2, &[(0, 0, 2), (1, 0, 3)]);

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.get_element(0, 0), 5);
        assert_eq!(product.get_element(0, 1), 0);
    }
}
