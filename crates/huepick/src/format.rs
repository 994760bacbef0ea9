//! Text formats for colors.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::{round2, to_name, wrap_hue};
use crate::error::ColorFormatError;
use crate::{Color, Float};

/// The text formats for [`Color::to_string_as`].
///
/// Hexadecimal formats use uppercase digits and a leading `#`. Formats with
/// a CSS function switch to the variant with trailing `a` for translucent
/// colors and then include the alpha fraction rounded to two decimals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorFormat {
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    Rgb,
    /// `rgb(r%, g%, b%)` or `rgba(r%, g%, b%, a)`.
    Prgb,
    /// `#RRGGBB`.
    #[default]
    Hex,
    /// `#RRGGBB`, too.
    Hex6,
    /// `#RGB` if every coordinate repeats its digit, `#RRGGBB` otherwise.
    Hex3,
    /// `#RGBA` if every coordinate repeats its digit, `#RRGGBBAA` otherwise.
    Hex4,
    /// `#RRGGBBAA`.
    Hex8,
    /// The CSS color name, `transparent`, or `#RRGGBB` as fallback.
    Name,
    /// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`.
    Hsl,
    /// `hsv(h, s%, v%)` or `hsva(h, s%, v%, a)`.
    Hsv,
}

impl ColorFormat {
    /// Get this format's name.
    pub const fn name(&self) -> &'static str {
        use ColorFormat::*;

        match self {
            Rgb => "rgb",
            Prgb => "prgb",
            Hex => "hex",
            Hex6 => "hex6",
            Hex3 => "hex3",
            Hex4 => "hex4",
            Hex8 => "hex8",
            Name => "name",
            Hsl => "hsl",
            Hsv => "hsv",
        }
    }
}

const FORMATS: [ColorFormat; 10] = [
    ColorFormat::Rgb,
    ColorFormat::Prgb,
    ColorFormat::Hex,
    ColorFormat::Hex6,
    ColorFormat::Hex3,
    ColorFormat::Hex4,
    ColorFormat::Hex8,
    ColorFormat::Name,
    ColorFormat::Hsl,
    ColorFormat::Hsv,
];

impl FromStr for ColorFormat {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FORMATS
            .iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(ColorFormatError::UnknownFormat)
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the byte's two hexadecimal digits are the same.
#[inline]
fn is_doubled(byte: u8) -> bool {
    byte >> 4 == byte & 0xf
}

/// Format the bytes as hashed hexadecimal string, with one digit per byte if
/// allowed and possible.
pub(crate) fn hex_string(bytes: &[u8], allow_short: bool) -> String {
    let mut s = String::with_capacity(1 + 2 * bytes.len());
    s.push('#');

    if allow_short && bytes.iter().all(|b| is_doubled(*b)) {
        for b in bytes {
            s.push_str(&format!("{:X}", b & 0xf));
        }
    } else {
        for b in bytes {
            s.push_str(&format!("{:02X}", b));
        }
    }

    s
}

/// Convert an alpha percentage to a byte.
#[inline]
pub(crate) fn alpha_byte(alpha: Float) -> u8 {
    (alpha / 100.0 * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert a unit fraction to an integer percentage.
#[inline]
fn percent(value: Float) -> Float {
    (value * 100.0).round()
}

/// Render the color in the given format.
pub(crate) fn render(color: &Color, format: ColorFormat) -> String {
    use ColorFormat::*;

    let state = color.state();
    let [r, g, b] = state.rgb;
    let alpha = round2(state.alpha / 100.0);
    let opaque = 1.0 <= alpha;

    match format {
        Rgb if opaque => format!("rgb({}, {}, {})", r, g, b),
        Rgb => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        Prgb => {
            let [pr, pg, pb] = [r, g, b].map(|c| percent(c as Float / 255.0));
            if opaque {
                format!("rgb({}%, {}%, {}%)", pr, pg, pb)
            } else {
                format!("rgba({}%, {}%, {}%, {})", pr, pg, pb, alpha)
            }
        }
        Hex | Hex6 => hex_string(&state.rgb, false),
        Hex3 => hex_string(&state.rgb, true),
        Hex4 => hex_string(&[r, g, b, alpha_byte(state.alpha)], true),
        Hex8 => hex_string(&[r, g, b, alpha_byte(state.alpha)], false),
        Name => {
            if state.alpha == 0.0 {
                "transparent".to_owned()
            } else if state.alpha < 100.0 {
                hex_string(&state.rgb, false)
            } else {
                to_name(state.rgb)
                    .map_or_else(|| hex_string(&state.rgb, false), str::to_owned)
            }
        }
        Hsl | Hsv => {
            let (s, l) = if format == Hsl {
                (state.hsl_saturation, state.lightness)
            } else {
                (state.saturation, state.brightness)
            };
            let name = format.name();
            let (h, s, l) = (wrap_hue(state.hue.round()), percent(s), percent(l));

            if opaque {
                format!("{}({}, {}%, {}%)", name, h, s, l)
            } else {
                format!("{}a({}, {}%, {}%, {})", name, h, s, l, alpha)
            }
        }
    }
}
