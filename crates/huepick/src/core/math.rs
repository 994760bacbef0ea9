use crate::Float;

/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

// ----------------------------------------------------------------------------------------------------------

/// Round to two decimals.
///
/// Saturation, brightness, lightness, and slider ratios all use this
/// precision, i.e., the value times 100 rounded to an integer and divided by
/// 100 again.
#[inline]
pub fn round2(value: Float) -> Float {
    (value * 100.0).round() / 100.0
}

/// Clamp the value to the range between the two bounds.
///
/// Unlike [`Float::clamp`], this function does not panic when the bounds are
/// reversed. If `max < min`, the roles of the two bounds are swapped, so that
/// the result always falls between them. Not-a-number becomes the lower
/// bound.
#[inline]
pub fn clamp(value: Float, min: Float, max: Float) -> Float {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    if value.is_nan() || value < low {
        low
    } else if high < value {
        high
    } else {
        value
    }
}

/// Normalize the hue to `0..360`.
///
/// Full rotations are removed, negative hues wrap around, and a hue that
/// rounds up to 360 becomes 0. Infinities and not-a-number become 0, too.
#[inline]
pub(crate) fn wrap_hue(hue: Float) -> Float {
    if !hue.is_finite() {
        return 0.0;
    }

    // Also drops the sign of negative zero.
    let hue = hue.rem_euclid(360.0);
    if hue >= 360.0 || hue == 0.0 {
        0.0
    } else {
        hue
    }
}

/// Round a hue computed from RGB.
///
/// Hues derived from RGB coordinates round *up* to the next integer degree,
/// capped at 360 and then wrapped into `0..360`. All other hue roundings use
/// plain rounding.
#[inline]
pub(crate) fn ceil_hue(hue: Float) -> Float {
    wrap_hue(hue.ceil().min(360.0))
}
