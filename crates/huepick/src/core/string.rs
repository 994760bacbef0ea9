use super::names::from_name;
use crate::error::ColorFormatError;
use crate::{Basis, Float};

/// Parse a color in hexadecimal format with or without leading hash. If
/// successful, this function returns the 24-bit coordinates and the alpha
/// byte, which is `0xff` for three and six digit formats. It transparently
/// handles single-digit coordinates.
fn parse_hex(s: &str) -> Result<([u8; 3], u8), ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = if s.len() <= 4 { 1 } else { 2 };
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    let alpha = if digits.len() == 4 || digits.len() == 8 {
        parse_coordinate(digits, 3)?
    } else {
        0xff
    };

    Ok(([c1, c2, c3], alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// The color functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Function {
    Rgb,
    Hsl,
    Hsv,
}

// Longest prefix first.
const FUNCTIONS: [(&str, Function); 6] = [
    ("rgba", Function::Rgb),
    ("rgb", Function::Rgb),
    ("hsla", Function::Hsl),
    ("hsl", Function::Hsl),
    ("hsva", Function::Hsv),
    ("hsv", Function::Hsv),
];

/// A number with an optional percent sign.
#[derive(Clone, Copy, Debug)]
struct Number {
    value: Float,
    percent: bool,
}

impl Number {
    fn parse(s: Option<&str>) -> Result<Self, ColorFormatError> {
        let s = s.ok_or(ColorFormatError::MissingCoordinate)?;
        let (s, percent) = match s.strip_suffix('%') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let value = s.parse().map_err(|_| ColorFormatError::MalformedFloat)?;
        Ok(Self { value, percent })
    }

    /// Interpret as RGB coordinate in `0..=255`.
    fn to_rgb(self) -> Float {
        if self.percent {
            self.value * 255.0 / 100.0
        } else {
            self.value
        }
    }

    /// Interpret as unit fraction. Without percent sign, values up to 1 are
    /// fractions and larger values are percentages.
    fn to_unit(self) -> Float {
        if self.percent || 1.0 < self.value {
            self.value / 100.0
        } else {
            self.value
        }
    }

    /// Interpret as alpha fraction. Out-of-range values become opaque.
    fn to_alpha(self) -> Float {
        let alpha = if self.percent {
            self.value / 100.0
        } else {
            self.value
        };

        if alpha.is_nan() || !(0.0..=1.0).contains(&alpha) {
            1.0
        } else {
            alpha
        }
    }
}

/// Parse the `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`, and `hsva()`
/// functions. Arguments may be separated by commas, white space, or a slash
/// before alpha.
fn parse_function(s: &str) -> Result<(Basis, Float), ColorFormatError> {
    // Munge function name
    let (function, rest) = FUNCTIONS
        .iter()
        .filter_map(|(p, f)| s.strip_prefix(p).map(|r| (*f, r)))
        .next() // Take first, i.e., longest result
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.trim_end()
                .strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    // Munge coordinates.
    let mut iter = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|t| !t.is_empty());
    let c1 = Number::parse(iter.next())?;
    let c2 = Number::parse(iter.next())?;
    let c3 = Number::parse(iter.next())?;
    let alpha = match iter.next() {
        Some(t) => Number::parse(Some(t))?.to_alpha(),
        None => 1.0,
    };
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    let basis = match function {
        Function::Rgb => Basis::Rgb([c1.to_rgb(), c2.to_rgb(), c3.to_rgb()]),
        Function::Hsl => Basis::Hsl([c1.value, c2.to_unit(), c3.to_unit()]),
        Function::Hsv => Basis::Hsv([c1.value, c2.to_unit(), c3.to_unit()]),
    };

    Ok((basis, alpha))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color basis and alpha fraction.
///
/// This function recognizes `transparent`, the CSS color names, hexadecimal
/// colors with 3, 4, 6, or 8 digits and optional leading hash, as well as the
/// `rgb()`, `hsl()`, and `hsv()` functions and their variants with trailing
/// `a`. Before trying to parse either of these formats, this function trims
/// leading and trailing white space and converts ASCII letters to lowercase.
pub(crate) fn parse(s: &str) -> Result<(Basis, Float), ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.is_empty() {
        return Err(ColorFormatError::UnknownFormat);
    } else if s == "transparent" {
        return Ok((Basis::Rgb([0.0, 0.0, 0.0]), 0.0));
    } else if let Some([r, g, b]) = from_name(s) {
        return Ok((Basis::Rgb([r as Float, g as Float, b as Float]), 1.0));
    }

    if s.starts_with('#') || s.bytes().all(|b| b.is_ascii_hexdigit()) {
        let ([r, g, b], alpha) = parse_hex(s)?;
        Ok((
            Basis::Rgb([r as Float, g as Float, b as Float]),
            alpha as Float / 255.0,
        ))
    } else {
        parse_function(s)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::parse;
    use crate::error::ColorFormatError;
    use crate::{Basis, Float};

    fn rgb(s: &str) -> ([Float; 3], Float) {
        match parse(s) {
            Ok((Basis::Rgb(rgb), alpha)) => (rgb, alpha),
            other => panic!("{} should parse as RGB, not {:?}", s, other),
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(rgb("#FF0000"), ([255.0, 0.0, 0.0], 1.0));
        assert_eq!(rgb("  #f00 "), ([255.0, 0.0, 0.0], 1.0));
        assert_eq!(rgb("00ff00"), ([0.0, 255.0, 0.0], 1.0));
        assert_eq!(rgb("#0000ff00"), ([0.0, 0.0, 255.0], 0.0));
        assert_eq!(rgb("#000f"), ([0.0, 0.0, 0.0], 1.0));

        assert_eq!(rgb("#ff00"), ([255.0, 255.0, 0.0], 0.0));
        assert_eq!(parse("#ffgg00"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse("#ff000"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#efg"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse("#💩00"), Err(ColorFormatError::UnexpectedCharacters));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(rgb("Red"), ([255.0, 0.0, 0.0], 1.0));
        assert_eq!(rgb("rebeccapurple"), ([102.0, 51.0, 153.0], 1.0));
        assert_eq!(rgb("transparent"), ([0.0, 0.0, 0.0], 0.0));
        assert_eq!(parse("notacolor"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse(""), Err(ColorFormatError::UnknownFormat));
    }

    #[test]
    fn test_parse_functions() {
        assert_eq!(rgb("rgb(255, 128, 0)"), ([255.0, 128.0, 0.0], 1.0));
        assert_eq!(rgb("RGBA(255 128 0 / 0.5)"), ([255.0, 128.0, 0.0], 0.5));
        assert_eq!(rgb("rgba(100%, 0%, 0%, 50%)"), ([255.0, 0.0, 0.0], 0.5));
        assert_eq!(rgb("rgba(1, 2, 3, 7)"), ([1.0, 2.0, 3.0], 1.0));

        assert_eq!(
            parse("hsl(120, 100%, 50%)"),
            Ok((Basis::Hsl([120.0, 1.0, 0.5]), 1.0))
        );
        assert_eq!(
            parse("hsva(200, 0.5, 40, 0.25)"),
            Ok((Basis::Hsv([200.0, 0.5, 0.4]), 0.25))
        );

        assert_eq!(parse("rgb 1 2 3)"), Err(ColorFormatError::NoOpeningParenthesis));
        assert_eq!(parse("rgb(1 2 3"), Err(ColorFormatError::NoClosingParenthesis));
        assert_eq!(parse("rgb(1, 2)"), Err(ColorFormatError::MissingCoordinate));
        assert_eq!(
            parse("rgb(1, 2, 3, 4, 5)"),
            Err(ColorFormatError::TooManyCoordinates)
        );
        assert_eq!(parse("rgb(1, x, 3)"), Err(ColorFormatError::MalformedFloat));
        assert_eq!(parse("lab(1, 2, 3)"), Err(ColorFormatError::UnknownFormat));
    }
}
