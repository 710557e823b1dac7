//! JSON import/export for sparse matrices
//!
//! Available behind the `serde` feature (on by default). The document
//! shape is the dimensions plus the non-zero entry list, so a matrix
//! survives a JSON round trip exactly.

use coomat_core::{CooMatrix, CoomatError, Result, Triplet};
use serde::{Deserialize, Serialize};

/// JSON document shape for a sparse matrix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonMatrix {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Non-zero entries in row-major order
    pub entries: Vec<Triplet>,
}

impl From<&CooMatrix> for JsonMatrix {
    fn from(matrix: &CooMatrix) -> Self {
        Self {
            rows: matrix.num_rows(),
            cols: matrix.num_cols(),
            entries: matrix.sorted_entries(),
        }
    }
}

impl From<&JsonMatrix> for CooMatrix {
    fn from(document: &JsonMatrix) -> Self {
        let mut matrix = CooMatrix::new(document.rows, document.cols);
        for entry in &document.entries {
            matrix.set_element(entry.row, entry.col, entry.value);
        }
        matrix
    }
}

/// Render a matrix as a JSON document
pub fn to_json(matrix: &CooMatrix) -> serde_json::Result<String> {
    serde_json::to_string(&JsonMatrix::from(matrix))
}

/// Parse a matrix from a JSON document
///
/// Zero-valued entries are dropped on import through the element setter.
/// Malformed JSON reports as [`CoomatError::MalformedInput`], matching the
/// text parser's uniform error collapsing.
pub fn from_json(input: &str) -> Result<CooMatrix> {
    let document: JsonMatrix =
        serde_json::from_str(input).map_err(|_| CoomatError::MalformedInput)?;
    Ok(CooMatrix::from(&document))
}
