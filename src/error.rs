//! Error types for Squarely
//!
//! Uses `thiserror` for library errors.

use thiserror::Error;

/// Result type alias for Squarely operations
pub type SquarelyResult<T> = Result<T, SquarelyError>;

/// Main error type for Squarely operations
///
/// Only the checked entry points construct errors; plain [`crate::square`]
/// is total over every implementing type and never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquarelyError {
    /// Squaring the value does not fit the input type
    #[error("squaring {value} overflows {type_name}")]
    Overflow {
        value: String,
        type_name: &'static str,
    },
}
