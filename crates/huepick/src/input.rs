//! Partial color inputs.
//!
//! A picker receives colors as text or as channel objects. The object forms
//! [`Rgba`], [`Hsla`], and [`Hsva`] each carry an optional alpha, which is a
//! percentage in `0..=100` just like [`Color::alpha`](crate::Color::alpha).
//! Saturation, lightness, and value components of objects follow the usual
//! picker convention: values up to 1 are fractions, larger values are
//! percentages.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::{clamp, parse};
use crate::error::ColorFormatError;
use crate::{Basis, Float};

/// Red, green, and blue in `0..=255` with optional alpha percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    pub r: Float,
    pub g: Float,
    pub b: Float,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub a: Option<Float>,
}

impl Rgba {
    /// Create a new opaque RGB input.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b, a: None }
    }

    /// Update this input with the given alpha percentage.
    #[must_use = "method returns a new input and does not mutate the original value"]
    pub const fn with_alpha(self, a: Float) -> Self {
        Self { a: Some(a), ..self }
    }
}

/// Hue in degrees, HSL saturation, and lightness with optional alpha
/// percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsla {
    pub h: Float,
    pub s: Float,
    pub l: Float,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub a: Option<Float>,
}

impl Hsla {
    /// Create a new opaque HSL input.
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l, a: None }
    }

    /// Update this input with the given alpha percentage.
    #[must_use = "method returns a new input and does not mutate the original value"]
    pub const fn with_alpha(self, a: Float) -> Self {
        Self { a: Some(a), ..self }
    }
}

/// Hue in degrees, HSV saturation, and value (brightness) with optional alpha
/// percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsva {
    pub h: Float,
    pub s: Float,
    pub v: Float,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub a: Option<Float>,
}

impl Hsva {
    /// Create a new opaque HSV input.
    pub const fn new(h: Float, s: Float, v: Float) -> Self {
        Self { h, s, v, a: None }
    }

    /// Update this input with the given alpha percentage.
    #[must_use = "method returns a new input and does not mutate the original value"]
    pub const fn with_alpha(self, a: Float) -> Self {
        Self { a: Some(a), ..self }
    }
}

// ====================================================================================================================

/// Any color input accepted by [`Color::from_input`](crate::Color::from_input).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ColorInput {
    Text(String),
    Rgb(Rgba),
    Hsl(Hsla),
    Hsv(Hsva),
}

/// Interpret a saturation, lightness, or value component.
#[inline]
pub(crate) fn to_unit(value: Float) -> Float {
    if 1.0 < value {
        value / 100.0
    } else {
        value
    }
}

/// Interpret an optional alpha percentage as fraction. Missing and
/// not-a-number alphas are opaque.
#[inline]
fn to_alpha_fraction(alpha: Option<Float>) -> Float {
    match alpha {
        Some(a) if !a.is_nan() => clamp(a, 0.0, 100.0) / 100.0,
        _ => 1.0,
    }
}

impl ColorInput {
    /// Determine the basis and alpha fraction for this input.
    ///
    /// # Errors
    ///
    /// This method fails only for text that does not describe a color.
    pub fn to_basis(&self) -> Result<(Basis, Float), ColorFormatError> {
        match self {
            Self::Text(text) => parse(text),
            Self::Rgb(Rgba { r, g, b, a }) => Ok((Basis::Rgb([*r, *g, *b]), to_alpha_fraction(*a))),
            Self::Hsl(Hsla { h, s, l, a }) => Ok((
                Basis::Hsl([*h, to_unit(*s), to_unit(*l)]),
                to_alpha_fraction(*a),
            )),
            Self::Hsv(Hsva { h, s, v, a }) => Ok((
                Basis::Hsv([*h, to_unit(*s), to_unit(*v)]),
                to_alpha_fraction(*a),
            )),
        }
    }

    /// Determine the hue carried by this input, if any. Only HSL and HSV
    /// objects carry hue.
    pub fn hue(&self) -> Option<Float> {
        match self {
            Self::Hsl(Hsla { h, .. }) | Self::Hsv(Hsva { h, .. }) => Some(*h),
            _ => None,
        }
    }

    /// Determine the saturation carried by this input, if any. Only HSL and
    /// HSV objects carry saturation.
    pub fn saturation(&self) -> Option<Float> {
        match self {
            Self::Hsl(Hsla { s, .. }) | Self::Hsv(Hsva { s, .. }) => Some(to_unit(*s)),
            _ => None,
        }
    }

    /// Determine the alpha percentage carried by this input, if any. Only
    /// objects carry alpha percentages.
    pub fn alpha(&self) -> Option<Float> {
        match self {
            Self::Text(_) => None,
            Self::Rgb(Rgba { a, .. }) | Self::Hsl(Hsla { a, .. }) | Self::Hsv(Hsva { a, .. }) => *a,
        }
    }
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Rgba> for ColorInput {
    fn from(value: Rgba) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hsla> for ColorInput {
    fn from(value: Hsla) -> Self {
        Self::Hsl(value)
    }
}

impl From<Hsva> for ColorInput {
    fn from(value: Hsva) -> Self {
        Self::Hsv(value)
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(value: [u8; 3]) -> Self {
        Self::Rgb(Rgba::new(
            value[0] as Float,
            value[1] as Float,
            value[2] as Float,
        ))
    }
}
