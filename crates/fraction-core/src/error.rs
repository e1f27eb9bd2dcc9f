//! Error types for fraction-core

use thiserror::Error;

/// Core error type for fraction operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FractionError {
    /// Construction with a zero denominator
    #[error("Invalid argument: denominator of {numerator}/0 must not be zero")]
    InvalidArgument { numerator: i64 },

    /// Indexed access outside `{0, 1}`
    #[error("Index out of bounds: {index} (a fraction has index 0 = numerator, 1 = denominator)")]
    IndexOutOfBounds { index: usize },

    /// Result does not fit the 32-bit numerator/denominator storage
    #[error("Overflow: {operation} does not fit in 32-bit terms")]
    Overflow { operation: &'static str },
}

impl FractionError {
    /// Stable machine-readable code, used by the CLI's JSON output
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::IndexOutOfBounds { .. } => "INDEX_OUT_OF_BOUNDS",
            Self::Overflow { .. } => "OVERFLOW",
        }
    }
}

/// Result type alias for fraction-core operations
pub type Result<T> = std::result::Result<T, FractionError>;
