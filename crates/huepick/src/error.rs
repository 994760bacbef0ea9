//! Utility module with huepick's errors.

use thiserror::Error;

use crate::{Channel, Float};

/// An erroneous color format.
///
/// Only unit variants, since the attendant loss of information is rather
/// limited and callers mostly fall back to opaque black anyways.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ColorFormatError {
    /// A color format that is neither a CSS color name, hexadecimal digits,
    /// nor one of the `rgb()`, `hsl()`, and `hsv()` functions.
    #[error("color format should be a color name, `#` hex, `rgb()`, `hsl()`, or `hsv()`")]
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    #[error("color format should contain only valid ASCII characters")]
    UnexpectedCharacters,

    /// A functional color format without the opening parenthesis. For
    /// example, `rgb 0 0 0)` is missing the opening parenthesis.
    #[error("color format should include an opening parenthesis but has none")]
    NoOpeningParenthesis,

    /// A functional color format without the closing parenthesis. For
    /// example, `hsl(1 2 3` is missing the closing parenthesis.
    #[error("color format should include a closing parenthesis but has none")]
    NoClosingParenthesis,

    /// A color format that is missing a coordinate. For example,
    /// `rgb(1, 2)` is missing the third coordinate.
    #[error("color format should have 3 coordinates but is missing one")]
    MissingCoordinate,

    /// A color format with more than three coordinates plus alpha. For
    /// example, `rgba(1, 2, 3, 4, 5)` has one coordinate too many.
    #[error("color format should have 3 coordinates plus alpha but has more")]
    TooManyCoordinates,

    /// A hexadecimal color format with a malformed digit. For example, `#efg`
    /// has a malformed third digit.
    #[error("color format coordinates should be hexadecimal integers but are not")]
    MalformedHex,

    /// A functional color format with a malformed number. For example,
    /// `rgb(1 0..1 0)` has a malformed second coordinate.
    #[error("color format coordinates should be floating point numbers but are not")]
    MalformedFloat,
}

// ====================================================================================================================

/// An out-of-range error.
///
/// This error indicates a channel value outside the channel's valid range,
/// which is `0..=255` for red, green, and blue, `0..=360` for hue, `0..=1` for
/// saturation, brightness, and lightness, and `0..=100` for alpha.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("{value} does not fit into range {}..={} for {channel}", channel.min(), channel.max())]
pub struct OutOfRangeError {
    pub channel: Channel,
    pub value: Float,
}

impl OutOfRangeError {
    /// Create a new out-of-range error.
    pub fn new(channel: Channel, value: Float) -> Self {
        Self { channel, value }
    }
}

// ====================================================================================================================

/// The errors surfaced by the color model's fallible operations.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ColorError {
    /// Text or object input that does not describe a color.
    #[error("invalid color input: {0}")]
    InvalidColorInput(#[from] ColorFormatError),

    /// A channel value outside the channel's range.
    #[error(transparent)]
    OutOfRangeValue(#[from] OutOfRangeError),
}

// ====================================================================================================================

/// An error loading or saving a picker configuration.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Text that is not a valid TOML configuration.
    #[error("could not parse picker configuration")]
    Parse(#[from] toml::de::Error),

    /// A configuration that cannot be written as TOML.
    #[error("could not write picker configuration")]
    Write(#[from] toml::ser::Error),

    /// A configuration whose default color is not a color.
    #[error("default color {0:?} is invalid")]
    InvalidDefaultColor(String, #[source] ColorFormatError),
}

#[cfg(test)]
mod test {
    use super::{ColorError, ColorFormatError, OutOfRangeError};
    use crate::Channel;

    #[test]
    fn test_messages() {
        assert_eq!(
            ColorFormatError::NoClosingParenthesis.to_string(),
            "color format should include a closing parenthesis but has none"
        );

        let error = OutOfRangeError::new(Channel::Red, 300.0);
        assert_eq!(error.to_string(), "300 does not fit into range 0..=255 for red");

        let error: ColorError = ColorFormatError::MalformedHex.into();
        assert_eq!(
            error.to_string(),
            "invalid color input: color format coordinates should be hexadecimal integers but are not"
        );
    }
}
