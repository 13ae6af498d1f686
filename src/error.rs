//! Error types for linalgebra

use thiserror::Error;

/// Main error type for vector, hyperplane and linear system operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinAlgError {
    /// Operands or elements have differing dimensions
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Operation is undefined for the zero vector
    #[error("Cannot {0} the zero vector")]
    ZeroVector(&'static str),

    /// A normal vector has no nonzero coordinate
    #[error("No nonzero elements found")]
    DegenerateLine,

    /// Cross product requested outside three dimensions
    #[error("Cross product is only defined in 3 dimensions, got {0}")]
    CrossProductDimension(usize),

    /// A vector was built without coordinates
    #[error("The coordinates must be nonempty")]
    EmptyVector,

    /// A coordinate could not be represented as a decimal
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// A result coordinate falls outside the supported range
    #[error("Result of {0} is out of range")]
    Overflow(&'static str),

    /// Row index outside the linear system
    #[error("Row index {index} out of range for a system of {len} equations")]
    RowIndexOutOfRange { index: usize, len: usize },

    /// Malformed equation text
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for linalgebra operations
pub type Result<T> = std::result::Result<T, LinAlgError>;
