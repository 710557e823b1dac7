//! Error types for coomat operations

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoomatError {
    /// Text input violates the matrix file grammar
    MalformedInput,
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch,
}

impl core::fmt::Display for CoomatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            CoomatError::MalformedInput => "Input file has wrong format",
            CoomatError::DimensionMismatch => "Matrix dimensions do not match",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for CoomatError {}

/// Result type for coomat operations
pub type Result<T> = core::result::Result<T, CoomatError>;
