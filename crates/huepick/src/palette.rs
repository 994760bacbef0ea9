//! The compact picker's swatch palette.

use crate::format::ColorFormat;
use crate::{Color, Float};

/// A palette entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Swatch {
    /// A color given as hexadecimal string.
    Hex(&'static str),
    /// The fully transparent color.
    Transparent,
    /// The entry that switches to the full picker.
    More,
}

impl Swatch {
    /// Classify the palette entry. The names `transparent` and `advance`
    /// denote the special entries, everything else is a color.
    pub fn parse(entry: &'static str) -> Self {
        match entry {
            "transparent" => Self::Transparent,
            "advance" | "more" => Self::More,
            _ => Self::Hex(entry),
        }
    }

    /// Get the swatch's color. Picking a color replaces the current color
    /// wholesale, while [`Swatch::More`] has no color.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Hex(hex) => Some(Color::from_input(*hex)),
            Self::Transparent => Some(Color::from_input("transparent")),
            Self::More => None,
        }
    }

    /// Get the CSS background for rendering the swatch.
    pub fn background(&self) -> Option<String> {
        match self {
            Self::Hex(hex) => Some(Color::from_input(*hex).to_string_as(ColorFormat::Rgb)),
            Self::Transparent => Some("transparent".to_owned()),
            Self::More => None,
        }
    }
}

/// Render the coordinates with an alpha percentage as CSS `rgba()`.
///
/// ```
/// # use huepick::rgba_css;
/// assert_eq!(rgba_css(255, 0, 0, 50.0), "rgba(255,0,0,0.5)");
/// ```
pub fn rgba_css(r: u8, g: u8, b: u8, alpha: Float) -> String {
    format!("rgba({},{},{},{})", r, g, b, alpha / 100.0)
}

/// The default palette with six rows of nine swatches each.
pub const DEFAULT_PALETTE: [[Swatch; 9]; 6] = {
    use Swatch::*;

    [
        [
            Hex("#fcc02e"),
            Hex("#f67c01"),
            Hex("#e64a19"),
            Hex("#d81b43"),
            Hex("#8e24aa"),
            Hex("#512da7"),
            Hex("#1f87e8"),
            Hex("#008781"),
            Hex("#05a045"),
        ],
        [
            Hex("#fed835"),
            Hex("#fb8c00"),
            Hex("#f5511e"),
            Hex("#eb1d4e"),
            Hex("#9c28b1"),
            Hex("#5d35b0"),
            Hex("#2097f3"),
            Hex("#029688"),
            Hex("#4cb050"),
        ],
        [
            Hex("#ffeb3c"),
            Hex("#ffa727"),
            Hex("#fe5722"),
            Hex("#eb4165"),
            Hex("#aa47bc"),
            Hex("#673bb7"),
            Hex("#42a5f6"),
            Hex("#26a59a"),
            Hex("#83c683"),
        ],
        [
            Hex("#fff176"),
            Hex("#ffb74e"),
            Hex("#ff8a66"),
            Hex("#f1627e"),
            Hex("#b968c7"),
            Hex("#7986cc"),
            Hex("#64b5f6"),
            Hex("#80cbc4"),
            Hex("#a5d6a7"),
        ],
        [
            Hex("#fff59c"),
            Hex("#ffcc80"),
            Hex("#ffab91"),
            Hex("#fb879e"),
            Hex("#cf93d9"),
            Hex("#9ea8db"),
            Hex("#90caf8"),
            Hex("#b2dfdc"),
            Hex("#c8e6ca"),
        ],
        [
            Transparent,
            Hex("#ffffff"),
            Hex("#dedede"),
            Hex("#a9a9a9"),
            Hex("#4b4b4b"),
            Hex("#353535"),
            Hex("#212121"),
            Hex("#000000"),
            More,
        ],
    ]
};
