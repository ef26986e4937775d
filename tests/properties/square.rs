//! Property tests for sentinel-guarded squaring.

use proptest::prelude::*;

use squarely::{checked_square, square};

// Largest i64 whose square still fits in i64 is 3037000499.
const I64_SQUARE_MAX: i64 = 3_037_000_499;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Non-negative integers square to their product.
    #[test]
    fn property_non_negative_squares_to_product(x in 0i64..=I64_SQUARE_MAX) {
        prop_assert_eq!(square(x), x * x);
    }

    /// PROPERTY: Every negative integer maps to the sentinel, regardless of
    /// magnitude.
    #[test]
    fn property_negative_maps_to_sentinel(x in i64::MIN..0i64) {
        prop_assert_eq!(square(x), 10);
    }

    /// PROPERTY: Every negative float maps to the sentinel.
    #[test]
    fn property_negative_float_maps_to_sentinel(x in f64::MIN..-f64::MIN_POSITIVE) {
        prop_assert_eq!(square(x), 10.0);
    }

    /// PROPERTY: Repeated calls with the same input return the same output.
    #[test]
    fn property_square_is_deterministic(x in any::<i64>()) {
        prop_assert_eq!(square(x), square(x));
    }

    /// PROPERTY: `square` never panics, even where `x * x` would overflow.
    #[test]
    fn property_square_never_panics_on_integers(x in any::<i64>()) {
        let _ = square(x);
        let _ = square(x as i32);
        let _ = square(x as u64);
    }

    /// PROPERTY: `square` never panics on any float bit pattern, NaN and
    /// infinities included.
    #[test]
    fn property_square_never_panics_on_floats(bits in any::<u64>()) {
        let _ = square(f64::from_bits(bits));
        let _ = checked_square(f64::from_bits(bits));
    }

    /// PROPERTY: Where `checked_square` succeeds, it agrees with `square`.
    #[test]
    fn property_checked_agrees_with_unchecked(x in any::<i64>()) {
        if let Ok(squared) = checked_square(x) {
            prop_assert_eq!(squared, square(x));
        }
    }

    /// PROPERTY: `checked_square` fails exactly when a non-negative square
    /// leaves the type's range.
    #[test]
    fn property_checked_square_overflow_boundary(x in any::<i64>()) {
        let expect_err = x > I64_SQUARE_MAX;
        prop_assert_eq!(checked_square(x).is_err(), expect_err);
    }
}
