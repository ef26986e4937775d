//! Sentinel-guarded squaring
//!
//! The domain rule: non-negative input squares to `x * x`; negative input is
//! out of domain and maps to the fixed sentinel `10` in the input type.
//!
//! Plain squaring is total: integer overflow wraps, so no input value can
//! panic. Callers that need to observe overflow use the checked variants.

use crate::error::{SquarelyError, SquarelyResult};

/// Sentinel-guarded squaring over a primitive numeric type.
///
/// Implementations preserve the numeric type class of the input: integer in,
/// integer out; float in, float out. All implementors are `Copy` primitives,
/// so every operation is a pure function with no shared state.
pub trait Square: Copy {
    /// The value returned for any negative input, rendered in `Self`.
    const SENTINEL: Self;

    /// Returns `self * self` for non-negative input, [`Self::SENTINEL`] for
    /// negative input.
    ///
    /// Never panics. Integer squares that exceed the type's range wrap;
    /// float squares follow IEEE 754 (overflow to infinity, `NaN` in gives
    /// `NaN` out).
    fn square(self) -> Self;

    /// Like [`Square::square`], but reports when the square does not fit
    /// the input type instead of wrapping or overflowing to infinity.
    ///
    /// The negative branch never fails: the sentinel is returned without
    /// computing a square.
    fn checked_square(self) -> SquarelyResult<Self>;
}

/// Returns the square of `x`, except that negative input yields the fixed
/// sentinel `10`.
///
/// # Examples
///
/// ```
/// assert_eq!(squarely::square(3), 9);
/// assert_eq!(squarely::square(2.5), 6.25);
/// assert_eq!(squarely::square(-1), 10);
/// ```
pub fn square<T: Square>(x: T) -> T {
    x.square()
}

/// Overflow-aware [`square`].
///
/// # Examples
///
/// ```
/// assert_eq!(squarely::checked_square(3i8), Ok(9));
/// assert!(squarely::checked_square(i8::MAX).is_err());
/// ```
pub fn checked_square<T: Square>(x: T) -> SquarelyResult<T> {
    x.checked_square()
}

fn overflow<T: std::fmt::Display>(value: T, type_name: &'static str) -> SquarelyError {
    SquarelyError::Overflow {
        value: value.to_string(),
        type_name,
    }
}

macro_rules! impl_square_signed {
    ($($t:ty),+ $(,)?) => {$(
        impl Square for $t {
            const SENTINEL: Self = 10;

            fn square(self) -> Self {
                if self < 0 {
                    Self::SENTINEL
                } else {
                    self.wrapping_mul(self)
                }
            }

            fn checked_square(self) -> SquarelyResult<Self> {
                if self < 0 {
                    return Ok(Self::SENTINEL);
                }
                self.checked_mul(self)
                    .ok_or_else(|| overflow(self, stringify!($t)))
            }
        }
    )+};
}

macro_rules! impl_square_unsigned {
    ($($t:ty),+ $(,)?) => {$(
        impl Square for $t {
            // Unreachable: unsigned values are never negative.
            const SENTINEL: Self = 10;

            fn square(self) -> Self {
                self.wrapping_mul(self)
            }

            fn checked_square(self) -> SquarelyResult<Self> {
                self.checked_mul(self)
                    .ok_or_else(|| overflow(self, stringify!($t)))
            }
        }
    )+};
}

macro_rules! impl_square_float {
    ($($t:ty),+ $(,)?) => {$(
        impl Square for $t {
            const SENTINEL: Self = 10.0;

            fn square(self) -> Self {
                // `-0.0 < 0.0` is false, so negative zero squares to 0.0.
                // NaN fails the comparison too and squares to NaN.
                if self < 0.0 {
                    Self::SENTINEL
                } else {
                    self * self
                }
            }

            fn checked_square(self) -> SquarelyResult<Self> {
                if self < 0.0 {
                    return Ok(Self::SENTINEL);
                }
                let squared = self * self;
                if self.is_finite() && !squared.is_finite() {
                    return Err(overflow(self, stringify!($t)));
                }
                Ok(squared)
            }
        }
    )+};
}

impl_square_signed!(i8, i16, i32, i64, i128, isize);
impl_square_unsigned!(u8, u16, u32, u64, u128, usize);
impl_square_float!(f32, f64);
