//! Arithmetic submodule
//!
//! Hosts the [`Square`] trait and the free-function entry points. Everything
//! here is re-exported from the crate root.

mod square;

pub use square::{checked_square, square, Square};
