use super::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting that two floating point numbers are the same
/// after normalization with [`to_eq_bits`].
///
/// # Panics
///
/// This macro panics if the normalized numbers differ. The message lists
/// both numbers on separate lines.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert_eq!(
            $crate::to_eq_bits(f1),
            $crate::to_eq_bits(f2),
            "numbers differ after normalization:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

/// Test macro for asserting that two colors are equal.
///
/// Equality ignores the last known hue, so this macro reports the hex8
/// strings first and the full states second.
///
/// # Panics
///
/// This macro panics if the colors differ.
#[macro_export]
macro_rules! assert_same_color {
    ($c1:expr, $c2:expr $(,)?) => {
        let (c1, c2) = (&$c1, &$c2);
        assert_eq!(c1.hex8(), c2.hex8(), "colors differ in RGB or alpha");
        assert_eq!(c1, c2, "colors differ:\n{:?}\n{:?}", c1.state(), c2.state());
    };
}

/// Test macro for asserting that a quantity is within a tolerance of another.
///
/// # Panics
///
/// This macro panics if the absolute difference exceeds the tolerance.
#[cfg(test)]
macro_rules! assert_within {
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {
        let (f1, f2, tolerance) = ($f1, $f2, $tolerance);
        assert!(
            (f1 - f2).abs() <= tolerance,
            "quantities differ by more than {:?}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_within;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize a number for hashing and equality testing.
///
/// Not-a-number becomes zero, the number is scaled and rounded to a fixed
/// number of decimals, and negative zero becomes positive zero. The result
/// is the bit string. It is public only for [`assert_close_enough`].
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    if f.is_nan() {
        return (0.0 as Float).to_bits();
    }

    let scaled = (f * <Float as FloatExt>::ROUNDING_FACTOR).round();
    // -0.0 == 0.0 holds, so this also clears the sign.
    if scaled == 0.0 {
        (0.0 as Float).to_bits()
    } else {
        scaled.to_bits()
    }
}
