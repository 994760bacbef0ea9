use super::math::wrap_hue;
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(rgb: [u8; 3]) -> [Float; 3] {
    [rgb[0] as Float, rgb[1] as Float, rgb[2] as Float]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function rounds each coordinate to the nearest integer. Even if the
/// coordinates are out of gamut, the conversion automatically clamps them to
/// the range `0x00..=0xff`.
#[inline]
pub(crate) fn to_24bit(rgb: &[Float; 3]) -> [u8; 3] {
    #[inline]
    fn convert(value: Float) -> u8 {
        if value.is_nan() {
            0
        } else {
            value.round().clamp(0.0, 255.0) as u8
        }
    }

    [convert(rgb[0]), convert(rgb[1]), convert(rgb[2])]
}

/// Clamp RGB coordinates to `0..=255`, replacing not-a-numbers with zero.
#[inline]
pub(crate) fn clamp_rgb(rgb: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 255.0)
        }
    }

    [convert(rgb[0]), convert(rgb[1]), convert(rgb[2])]
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the maximum, minimum, and hue fraction for RGB coordinates in
/// unit range. The hue fraction is in `0..1` and zero for grays.
fn max_min_hue(r: Float, g: Float, b: Float) -> (Float, Float, Float) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let hue = if d == 0.0 {
        0.0
    } else if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (max, min, hue / 6.0)
}

/// Determine whether the RGB coordinates describe a gray, i.e., a color
/// without hue.
#[inline]
pub(crate) fn is_achromatic(rgb: &[Float; 3]) -> bool {
    rgb[0] == rgb[1] && rgb[1] == rgb[2]
}

/// Convert RGB coordinates in `0..=255` to HSV.
///
/// The result has hue in degrees `0..360` and saturation as well as value in
/// unit range. Nothing is rounded. Grays have hue 0.
pub(crate) fn rgb_to_hsv(rgb: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = clamp_rgb(rgb).map(|c| c / 255.0);
    let (max, min, hue) = max_min_hue(r, g, b);
    let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

    [hue * 360.0, saturation, max]
}

/// Convert RGB coordinates in `0..=255` to HSL.
///
/// The result has hue in degrees `0..360` and saturation as well as lightness
/// in unit range. Nothing is rounded. Grays have hue and saturation 0.
pub(crate) fn rgb_to_hsl(rgb: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = clamp_rgb(rgb).map(|c| c / 255.0);
    let (max, min, hue) = max_min_hue(r, g, b);
    let lightness = (max + min) / 2.0;

    let d = max - min;
    let saturation = if d == 0.0 {
        0.0
    } else if lightness > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    [hue * 360.0, saturation, lightness]
}

/// Convert HSV with hue in degrees and saturation as well as value in unit
/// range to RGB coordinates in `0..=255`. The result is not rounded.
pub(crate) fn hsv_to_rgb(hsv: &[Float; 3]) -> [Float; 3] {
    let h = wrap_hue(hsv[0]) / 60.0;
    let s = hsv[1].clamp(0.0, 1.0);
    let v = hsv[2].clamp(0.0, 1.0);

    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let [r, g, b] = match (i as usize) % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    [r * 255.0, g * 255.0, b * 255.0]
}

/// Convert HSL with hue in degrees and saturation as well as lightness in unit
/// range to RGB coordinates in `0..=255`. The result is not rounded.
pub(crate) fn hsl_to_rgb(hsl: &[Float; 3]) -> [Float; 3] {
    let h = wrap_hue(hsl[0]) / 360.0;
    let s = hsl[1].clamp(0.0, 1.0);
    let l = hsl[2].clamp(0.0, 1.0);

    if s == 0.0 {
        return [l * 255.0, l * 255.0, l * 255.0];
    }

    #[inline]
    fn hue_to_rgb(p: Float, q: Float, t: Float) -> Float {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_rgb(p, q, h) * 255.0,
        hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0,
    ]
}

// ====================================================================================================================
