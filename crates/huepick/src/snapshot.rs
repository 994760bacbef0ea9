//! Rounded color snapshots for widgets.
//!
//! Unlike [`Color`](crate::Color), which is mutated one channel at a time,
//! widgets exchange complete snapshots of the current color. A new snapshot
//! results from [`parse_color`], which picks the most trustworthy
//! representation among the provided ones and carries the hue across
//! achromatic colors with help of the previous hue.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::{
    clamp, clamp_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, round2, to_24bit, wrap_hue,
};
use crate::format::{alpha_byte, hex_string};
use crate::input::to_unit;
use crate::{Basis, Color, ColorInput, Float, Hsla, Hsva, Rgba};

/// The representations a widget provides to [`parse_color`].
///
/// All fields are optional. If more than one representation is present,
/// [`parse_color`] uses the first one in the order `hsl`, `hex`, `hex8`,
/// `hsv`, `rgba`, `rgb`, and `raw`. Empty hex strings count as missing.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorData {
    pub hex: Option<String>,
    pub hex8: Option<String>,
    pub hsl: Option<Hsla>,
    pub hsv: Option<Hsva>,
    pub rgba: Option<Rgba>,
    pub rgb: Option<Rgba>,
    pub raw: Option<ColorInput>,
    pub old_hue: Option<Float>,
    pub source: Option<String>,
}

impl ColorData {
    /// Create new color data from raw input.
    pub fn from_input<I: Into<ColorInput>>(input: I) -> Self {
        Self {
            raw: Some(input.into()),
            ..Self::default()
        }
    }

    /// Update this data with the given source.
    #[must_use = "method returns new color data and does not mutate the original value"]
    pub fn with_source(self, source: &str) -> Self {
        Self {
            source: Some(source.to_owned()),
            ..self
        }
    }

    /// Select the input with the highest precedence.
    fn select(&self) -> ColorInput {
        fn non_empty(hex: Option<&String>) -> Option<&String> {
            hex.filter(|h| !h.is_empty())
        }

        if let Some(hsl) = self.hsl {
            hsl.into()
        } else if let Some(hex) = non_empty(self.hex.as_ref()) {
            hex.as_str().into()
        } else if let Some(hex8) = non_empty(self.hex8.as_ref()) {
            hex8.as_str().into()
        } else if let Some(hsv) = self.hsv {
            hsv.into()
        } else if let Some(rgba) = self.rgba {
            rgba.into()
        } else if let Some(rgb) = self.rgb {
            rgb.into()
        } else if let Some(raw) = &self.raw {
            raw.clone()
        } else {
            "#000000".into()
        }
    }
}

/// A rounded snapshot of a color.
///
/// Hues are integral, HSL and HSV channels have two decimals, RGB
/// coordinates are integral, and all alphas are percentages.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorSnapshot {
    pub hsl: Hsla,
    pub hsv: Hsva,
    pub hex: String,
    pub hex8: String,
    pub rgb: Rgba,
    pub old_hue: Float,
    pub source: Option<String>,
    pub alpha: Float,
}

/// Pick the first value that is neither zero nor not-a-number.
fn first_nonzero(values: &[Option<Float>]) -> Float {
    values
        .iter()
        .flatten()
        .find(|v| **v != 0.0 && !v.is_nan())
        .copied()
        .unwrap_or(0.0)
}

/// Parse the color data into a rounded snapshot.
///
/// This function determines the representation to trust with
/// [`ColorData`]'s precedence order and falls back to opaque black for
/// missing or malformed input. Then it restores hue for achromatic colors,
/// with the following fallbacks, where *or* picks the first nonzero value:
///
///  1. If the HSL saturation is 0, the hue is the raw input's hue *or* the
///     `hsl` field's hue *or* `old_hue` *or* 0.
///  2. If the hue is 0, it is the raw input's hue *or* `old_hue` *or* the
///     data's own `old_hue` *or* 0.
///  3. If the HSV value is 0, the HSV saturation is the raw input's
///     saturation *or* the `hsv` field's saturation *or* 0.
///
/// The snapshot's `old_hue` is the raw input's hue *or* `old_hue` *or* the
/// computed hue.
///
/// # Examples
///
/// ```
/// # use huepick::{parse_color, ColorData, Hsva};
/// let snapshot = parse_color(&ColorData::from_input(Hsva::new(200.0, 0.0, 0.5)), None);
/// assert_eq!(snapshot.hsv.h, 200.0);
/// assert_eq!(snapshot.hex, "#808080");
/// ```
pub fn parse_color(data: &ColorData, old_hue: Option<Float>) -> ColorSnapshot {
    let input = data.select();
    let (basis, alpha) = input.to_basis().unwrap_or_else(|error| {
        log::warn!("invalid color data {:?} falls back to black: {}", input, error);
        (Basis::Rgb([0.0, 0.0, 0.0]), 1.0)
    });

    let rgb = match basis {
        Basis::Rgb(rgb) => clamp_rgb(&rgb),
        Basis::Hsv(hsv) => hsv_to_rgb(&hsv),
        Basis::Hsl(hsl) => hsl_to_rgb(&hsl),
    };
    let [mut hue, hsl_s, l] = rgb_to_hsl(&rgb);
    let [_, mut hsv_s, v] = rgb_to_hsv(&rgb);

    let raw = data.raw.as_ref();
    let raw_hue = raw.and_then(ColorInput::hue);

    if hsl_s == 0.0 {
        hue = first_nonzero(&[raw_hue, data.hsl.map(|hsl| hsl.h), old_hue]);
    }
    if hue == 0.0 {
        hue = first_nonzero(&[raw_hue, old_hue, data.old_hue]);
    }
    if v == 0.0 {
        hsv_s = first_nonzero(&[
            raw.and_then(ColorInput::saturation),
            data.hsv.map(|hsv| to_unit(hsv.s)),
        ]);
    }

    let percent = alpha * 100.0;
    let rgb = to_24bit(&rgb);
    let hue_unrounded = hue;
    let hue = wrap_hue(hue.round());

    ColorSnapshot {
        hsl: Hsla {
            h: hue,
            s: round2(hsl_s),
            l: round2(l),
            a: Some(percent),
        },
        hsv: Hsva {
            h: hue,
            s: round2(hsv_s),
            v: round2(v),
            a: Some(percent),
        },
        hex: hex_string(&rgb, false),
        hex8: hex_string(&[rgb[0], rgb[1], rgb[2], alpha_byte(percent)], false),
        rgb: Rgba {
            r: rgb[0] as Float,
            g: rgb[1] as Float,
            b: rgb[2] as Float,
            a: Some(percent),
        },
        old_hue: first_nonzero(&[raw_hue, old_hue, Some(hue_unrounded)]),
        source: data.source.clone(),
        alpha: clamp(
            first_nonzero(&[raw.and_then(ColorInput::alpha), Some(percent)]),
            0.0,
            100.0,
        ),
    }
}

impl ColorSnapshot {
    /// Create a new snapshot from the given color.
    pub fn from_color(color: &Color) -> Self {
        let [h, s, v, a] = color.to_hsb();
        parse_color(
            &ColorData::from_input(Hsva::new(h, s, v).with_alpha(a * 100.0)),
            Some(color.hue()),
        )
    }

    /// Create the snapshot after the hue slider changed.
    pub fn with_hue(&self, hue: Float) -> Self {
        let input = Hsva { h: hue, ..self.hsv };
        parse_color(&ColorData::from_input(input).with_source("hue"), Some(hue))
    }

    /// Create the snapshot after the saturation panel changed.
    pub fn with_saturation_brightness(&self, saturation: Float, brightness: Float) -> Self {
        let input = Hsva {
            s: saturation,
            v: brightness,
            ..self.hsv
        };
        parse_color(
            &ColorData::from_input(input).with_source("saturation"),
            Some(self.hsv.h),
        )
    }

    /// Create the snapshot after the lightness slider changed.
    pub fn with_lightness(&self, lightness: Float) -> Self {
        let input = Hsla {
            l: lightness,
            ..self.hsl
        };
        parse_color(
            &ColorData::from_input(input).with_source("light"),
            Some(self.hsl.h),
        )
    }

    /// Create the snapshot after the alpha slider changed. The alpha is a
    /// percentage.
    pub fn with_alpha(&self, alpha: Float) -> Self {
        let input = Hsla {
            a: Some(alpha),
            ..self.hsl
        };
        parse_color(
            &ColorData::from_input(input).with_source("alpha"),
            Some(self.hsl.h),
        )
    }

    /// Convert this snapshot into a color.
    pub fn to_color(&self) -> Color {
        Color::from_input(self.hsv)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse_color, ColorData, ColorSnapshot};
    use crate::{assert_close_enough, Color, Hsla, Hsva, Rgba};

    #[test]
    fn test_precedence() {
        let data = ColorData {
            hex: Some("#FF0000".to_owned()),
            rgb: Some(Rgba::new(0.0, 255.0, 0.0)),
            ..ColorData::default()
        };
        assert_eq!(parse_color(&data, None).hex, "#FF0000");

        let data = ColorData {
            hsl: Some(Hsla::new(240.0, 1.0, 0.5)),
            ..data
        };
        assert_eq!(parse_color(&data, None).hex, "#0000FF");

        let data = ColorData {
            hex: Some(String::new()),
            hex8: Some("#0000ff80".to_owned()),
            raw: Some("red".into()),
            ..ColorData::default()
        };
        let snapshot = parse_color(&data, None);
        assert_eq!(snapshot.hex, "#0000FF");
        assert_eq!(snapshot.hex8, "#0000FF80");
        assert_eq!(snapshot.rgb, Rgba::new(0.0, 0.0, 255.0).with_alpha(snapshot.alpha));

        let snapshot = parse_color(&ColorData::default(), None);
        assert_eq!(snapshot.hex8, "#000000FF");
        assert_eq!(snapshot.alpha, 100.0);
    }

    #[test]
    fn test_malformed() {
        let data = ColorData::from_input("rgb(1, 2").with_source("hex");
        let snapshot = parse_color(&data, None);
        assert_eq!(snapshot.hex8, "#000000FF");
        assert_eq!(snapshot.source.as_deref(), Some("hex"));
    }

    #[test]
    fn test_old_hue() {
        let snapshot = parse_color(&ColorData::from_input("#000000"), Some(42.0));
        assert_eq!(snapshot.hsl.h, 42.0);
        assert_eq!(snapshot.hsv.h, 42.0);
        assert_eq!(snapshot.old_hue, 42.0);

        let data = ColorData {
            hex: Some("#808080".to_owned()),
            old_hue: Some(77.0),
            ..ColorData::default()
        };
        let snapshot = parse_color(&data, None);
        assert_eq!(snapshot.hsl.h, 77.0);
        assert_eq!(snapshot.old_hue, 77.0);

        let snapshot = parse_color(&ColorData::from_input(Hsva::new(120.0, 0.8, 0.0)), None);
        assert_eq!(snapshot.hsv, Hsva::new(120.0, 0.8, 0.0).with_alpha(100.0));
        assert_eq!(snapshot.hex, "#000000");
    }

    #[test]
    fn test_rounding() {
        let snapshot = parse_color(&ColorData::from_input("#336699"), None);
        assert_eq!(snapshot.hsl, Hsla::new(210.0, 0.5, 0.4).with_alpha(100.0));
        assert_eq!(snapshot.hsv, Hsva::new(210.0, 0.67, 0.6).with_alpha(100.0));
        assert_eq!(snapshot.rgb, Rgba::new(51.0, 102.0, 153.0).with_alpha(100.0));
        assert_close_enough!(snapshot.old_hue, 210.0);
    }

    #[test]
    fn test_hue_through_gray() {
        let snapshot = parse_color(&ColorData::from_input(Hsva::new(200.0, 0.5, 0.5)), None);
        assert_eq!(snapshot.hsv.h, 200.0);
        assert_eq!(snapshot.hex, "#406A80");

        let gray = snapshot.with_saturation_brightness(0.0, 0.5);
        assert_eq!(gray.hsv.h, 200.0);
        assert_eq!(gray.hsv.s, 0.0);
        assert_eq!(gray.source.as_deref(), Some("saturation"));

        let back = gray.with_saturation_brightness(0.5, 0.5);
        assert_eq!(back.hsv.h, 200.0);
        assert_eq!(back.hex, "#406A80");
    }

    #[test]
    fn test_handlers() {
        let red = parse_color(&ColorData::from_input("#FF0000"), None);

        let green = red.with_hue(120.0);
        assert_eq!(green.hex, "#00FF00");
        assert_eq!(green.old_hue, 120.0);

        let dark = red.with_lightness(0.25);
        assert_eq!(dark.hex, "#800000");

        let faded = red.with_alpha(50.0);
        assert_eq!(faded.alpha, 50.0);
        assert_eq!(faded.hex8, "#FF000080");

        let color = Color::from_input(Hsva::new(200.0, 0.0, 0.5));
        let snapshot = ColorSnapshot::from_color(&color);
        assert_eq!(snapshot.hsv.h, 200.0);
        assert_eq!(snapshot.to_color().hue(), 200.0);
    }
}
