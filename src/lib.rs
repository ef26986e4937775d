//! Squarely - sentinel-guarded squaring for primitive numeric types
//!
//! Squarely exposes one piece of arithmetic: [`square`], which returns
//! `x * x` for non-negative input and the fixed sentinel `10` for any
//! negative input. Negative values are treated as out-of-domain and mapped
//! to the sentinel rather than computed.
//!
//! The [`Square`] trait is implemented for every primitive integer and
//! float type, so the result always has the same type as the input.
//! [`checked_square`] is the overflow-aware variant for callers that need
//! to detect when a square does not fit the input type.

pub mod arith;
pub mod error;

// Re-exports for convenience
pub use arith::{checked_square, square, Square};
pub use error::{SquarelyError, SquarelyResult};
