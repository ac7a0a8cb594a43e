//! Crate errors.

use thiserror::Error;

/// Result type alias using [`MatrixError`].
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Matrix Error.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum MatrixError {
    /// Row index outside `[0, rows)`.
    #[error("row index {index} out of bounds for matrix with {rows} rows")]
    RowOutOfBounds { index: usize, rows: usize },

    /// Column index outside `[0, cols)`.
    #[error("column index {index} out of bounds for matrix with {cols} columns")]
    ColumnOutOfBounds { index: usize, cols: usize },

    /// Error building matrix.
    #[error("error building matrix, given data has {0} entries which does not match rows x cols = {1}")]
    Build(usize, usize),
}

/// Fraction parsing error.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum FractionError {
    /// Numerator or denominator is not an integer.
    #[error("invalid number: {0:?}")]
    Invalid(String),

    /// Denominator is zero.
    #[error("denominator cannot be zero")]
    ZeroDenominator,
}
