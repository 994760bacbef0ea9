use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::{
    ceil_hue, clamp, from_24bit, hsl_to_rgb, hsv_to_rgb, is_achromatic, parse, rgb_to_hsl,
    rgb_to_hsv, round2, to_24bit, to_eq_bits, wrap_hue,
};
use crate::error::{ColorError, ColorFormatError, OutOfRangeError};
use crate::format::{render, ColorFormat};
use crate::input::ColorInput;
use crate::Float;

/// The independent channels a color state is derived from.
///
/// Hue is in degrees, RGB coordinates are in `0..=255`, and all other
/// components are in unit range. Out-of-range components are clamped during
/// derivation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Basis {
    Rgb([Float; 3]),
    Hsv([Float; 3]),
    Hsl([Float; 3]),
}

/// The fully derived state of a color.
///
/// All representations are mutually consistent: RGB, HSV, and HSL describe
/// the same color within rounding tolerance. Hue is shared between HSV and
/// HSL. For achromatic colors, it is the last known hue.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorState {
    pub rgb: [u8; 3],
    pub hue: Float,
    pub saturation: Float,
    pub brightness: Float,
    pub hsl_saturation: Float,
    pub lightness: Float,
    pub alpha: Float,
    pub last_known_hue: Float,
}

/// Derive the full color state from a basis.
///
/// This function is the only place where dependent representations are
/// computed. The alpha is a percentage and the last known hue becomes the hue
/// of achromatic colors computed from RGB. In detail:
///
///   * An RGB basis is clamped and rounded to integers first. HSV and HSL
///     follow from the rounded coordinates, with the hue rounded *up* to the
///     next integer degree and the other channels rounded to two decimals.
///   * An HSV basis is kept as is, modulo clamping and wrapping the hue. RGB
///     and HSL follow from it.
///   * An HSL basis keeps saturation and lightness. RGB follows from it, and
///     HSV from the unrounded RGB. If the result is achromatic, the hue of the
///     basis is kept.
///
/// # Examples
///
/// ```
/// # use huepick::{derive_all, Basis};
/// let state = derive_all(Basis::Rgb([128.0, 128.0, 128.0]), 100.0, 200.0);
/// assert_eq!(state.rgb, [128, 128, 128]);
/// assert_eq!(state.hue, 200.0);
/// assert_eq!(state.saturation, 0.0);
/// assert_eq!(state.brightness, 0.5);
/// ```
pub fn derive_all(basis: Basis, alpha: Float, last_known_hue: Float) -> ColorState {
    let alpha = clamp(alpha, 0.0, 100.0);

    let (rgb, hue, saturation, brightness, hsl_saturation, lightness) = match basis {
        Basis::Rgb(coordinates) => {
            let rgb = to_24bit(&coordinates);
            let float = from_24bit(rgb);
            let [h, s, v] = rgb_to_hsv(&float);
            let [_, hs, l] = rgb_to_hsl(&float);

            let hue = if is_achromatic(&float) {
                wrap_hue(last_known_hue)
            } else {
                ceil_hue(h)
            };

            (rgb, hue, round2(s), round2(v), round2(hs), round2(l))
        }
        Basis::Hsv([h, s, v]) => {
            let hue = wrap_hue(h);
            let s = clamp(s, 0.0, 1.0);
            let v = clamp(v, 0.0, 1.0);
            let float = hsv_to_rgb(&[hue, s, v]);
            let [_, hs, l] = rgb_to_hsl(&float);

            (to_24bit(&float), hue, s, v, round2(hs), round2(l))
        }
        Basis::Hsl([h, s, l]) => {
            let given = wrap_hue(h);
            let s = clamp(s, 0.0, 1.0);
            let l = clamp(l, 0.0, 1.0);
            let float = hsl_to_rgb(&[given, s, l]);
            let rgb = to_24bit(&float);
            let [hv, sv, v] = rgb_to_hsv(&float);

            let hue = if is_achromatic(&from_24bit(rgb)) {
                given
            } else {
                ceil_hue(hv)
            };

            (rgb, hue, round2(sv), round2(v), s, l)
        }
    };

    ColorState {
        rgb,
        hue,
        saturation,
        brightness,
        hsl_saturation,
        lightness,
        alpha,
        last_known_hue: hue,
    }
}

// ====================================================================================================================

/// A color channel.
///
/// Channels give programmatic callers uniform access to a [`Color`] through
/// [`Color::get`], [`Color::set`], and [`Color::try_set`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Channel {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Brightness,
    HslSaturation,
    Lightness,
    Alpha,
}

impl Channel {
    /// Get the smallest valid value for this channel.
    pub const fn min(&self) -> Float {
        0.0
    }

    /// Get the largest valid value for this channel.
    pub const fn max(&self) -> Float {
        use Channel::*;

        match self {
            Red | Green | Blue => 255.0,
            Hue => 360.0,
            Saturation | Brightness | HslSaturation | Lightness => 1.0,
            Alpha => 100.0,
        }
    }

    /// Get this channel's human-readable name.
    pub const fn name(&self) -> &'static str {
        use Channel::*;

        match self {
            Red => "red",
            Green => "green",
            Blue => "blue",
            Hue => "hue",
            Saturation => "saturation",
            Brightness => "brightness",
            HslSaturation => "HSL saturation",
            Lightness => "lightness",
            Alpha => "alpha",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// A color picker's color.
///
/// A color maintains one value across RGB, HSV (also called HSB), and HSL
/// with an alpha percentage. Every setter changes exactly one channel and
/// recomputes the dependent representations through [`derive_all`], so that
/// all representations are consistent at all times. Setters clamp
/// out-of-range values. When a color becomes achromatic, it keeps the last
/// known hue, which lets saturation return to the original hue after passing
/// through gray.
///
/// # Examples
///
/// ```
/// # use huepick::{Color, Hsva};
/// let mut color = Color::from_input(Hsva::new(200.0, 0.5, 0.5));
/// color.set_saturation(0.0);
/// assert_eq!(color.hue(), 200.0);
///
/// color.set_saturation(0.5);
/// assert_eq!(color.hue(), 200.0);
/// assert_eq!(color.hex(), "#406A80");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Color {
    state: ColorState,
}

impl Color {
    /// Create a new color from the given input.
    ///
    /// Text input is parsed as a CSS color name, hexadecimal color, or one of
    /// the `rgb()`, `hsl()`, and `hsv()` functions. If the text cannot be
    /// parsed, this method logs a warning and falls back to opaque black.
    pub fn from_input<I: Into<ColorInput>>(input: I) -> Self {
        let input = input.into();
        Self::try_from_input(input.clone()).unwrap_or_else(|error| {
            log::warn!("invalid color input {:?} falls back to black: {}", input, error);
            Self::default()
        })
    }

    /// Try creating a new color from the given input.
    ///
    /// # Errors
    ///
    /// This method fails with [`ColorError::InvalidColorInput`] for text that
    /// does not describe a color.
    pub fn try_from_input<I: Into<ColorInput>>(input: I) -> Result<Self, ColorError> {
        let (basis, alpha) = input.into().to_basis()?;
        Ok(Self::from_basis(basis, alpha * 100.0))
    }

    /// Create a new color from the given basis and alpha percentage.
    pub fn from_basis(basis: Basis, alpha: Float) -> Self {
        Self {
            state: derive_all(basis, alpha, 0.0),
        }
    }

    /// Access this color's derived state.
    #[inline]
    pub fn state(&self) -> &ColorState {
        &self.state
    }

    #[inline]
    fn derive(&mut self, basis: Basis) {
        self.state = derive_all(basis, self.state.alpha, self.state.last_known_hue);
        log::trace!("derived {:?}", self.state);
    }

    #[inline]
    fn hsv_basis(&self) -> [Float; 3] {
        [self.state.hue, self.state.saturation, self.state.brightness]
    }

    #[inline]
    fn hsl_basis(&self) -> [Float; 3] {
        [self.state.hue, self.state.hsl_saturation, self.state.lightness]
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the red coordinate.
    #[inline]
    pub fn red(&self) -> u8 {
        self.state.rgb[0]
    }

    /// Get the green coordinate.
    #[inline]
    pub fn green(&self) -> u8 {
        self.state.rgb[1]
    }

    /// Get the blue coordinate.
    #[inline]
    pub fn blue(&self) -> u8 {
        self.state.rgb[2]
    }

    /// Get the hue in degrees `0..360`.
    #[inline]
    pub fn hue(&self) -> Float {
        self.state.hue
    }

    /// Get the HSV saturation.
    #[inline]
    pub fn saturation(&self) -> Float {
        self.state.saturation
    }

    /// Get the brightness, i.e., HSV value.
    #[inline]
    pub fn brightness(&self) -> Float {
        self.state.brightness
    }

    /// Get the HSL saturation.
    #[inline]
    pub fn hsl_saturation(&self) -> Float {
        self.state.hsl_saturation
    }

    /// Get the HSL lightness.
    #[inline]
    pub fn lightness(&self) -> Float {
        self.state.lightness
    }

    /// Get the alpha percentage `0..=100`.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.state.alpha
    }

    /// Get the hue used for achromatic colors.
    #[inline]
    pub fn last_known_hue(&self) -> Float {
        self.state.last_known_hue
    }

    /// Determine whether this color is achromatic.
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        is_achromatic(&from_24bit(self.state.rgb))
    }

    // ----------------------------------------------------------------------------------------------------------------

    #[inline]
    fn set_rgb_coordinate(&mut self, index: usize, value: Float) {
        let mut rgb = from_24bit(self.state.rgb);
        rgb[index] = clamp(value, 0.0, 255.0).round();
        self.derive(Basis::Rgb(rgb));
    }

    /// Set the red coordinate, which is clamped to `0..=255` and rounded.
    pub fn set_red(&mut self, value: Float) {
        self.set_rgb_coordinate(0, value)
    }

    /// Set the green coordinate, which is clamped to `0..=255` and rounded.
    pub fn set_green(&mut self, value: Float) {
        self.set_rgb_coordinate(1, value)
    }

    /// Set the blue coordinate, which is clamped to `0..=255` and rounded.
    pub fn set_blue(&mut self, value: Float) {
        self.set_rgb_coordinate(2, value)
    }

    /// Set the hue.
    ///
    /// The hue is rounded to two decimals and wrapped into `0..360`. If both
    /// saturation and brightness are 0, they become 1 first, since the hue
    /// would not be visible otherwise.
    pub fn set_hue(&mut self, value: Float) {
        let hue = wrap_hue(round2(value));
        let [_, mut s, mut v] = self.hsv_basis();
        if s == 0.0 && v == 0.0 {
            s = 1.0;
            v = 1.0;
        }

        self.derive(Basis::Hsv([hue, s, v]));
    }

    /// Set the HSV saturation, which is clamped to `0..=1` and rounded to two
    /// decimals.
    pub fn set_saturation(&mut self, value: Float) {
        let [h, _, v] = self.hsv_basis();
        self.derive(Basis::Hsv([h, round2(clamp(value, 0.0, 1.0)), v]));
    }

    /// Set the brightness, which is clamped to `0..=1` and rounded to two
    /// decimals.
    pub fn set_brightness(&mut self, value: Float) {
        let [h, s, _] = self.hsv_basis();
        self.derive(Basis::Hsv([h, s, round2(clamp(value, 0.0, 1.0))]));
    }

    /// Set HSV saturation and brightness at once. Both are clamped to `0..=1`
    /// and rounded to two decimals.
    pub fn set_saturation_brightness(&mut self, saturation: Float, brightness: Float) {
        let h = self.state.hue;
        let s = round2(clamp(saturation, 0.0, 1.0));
        let v = round2(clamp(brightness, 0.0, 1.0));
        self.derive(Basis::Hsv([h, s, v]));
    }

    /// Set the HSL saturation, which is clamped to `0..=1` and rounded to two
    /// decimals.
    pub fn set_hsl_saturation(&mut self, value: Float) {
        let [h, _, l] = self.hsl_basis();
        self.derive(Basis::Hsl([h, round2(clamp(value, 0.0, 1.0)), l]));
    }

    /// Set the lightness, which is clamped to `0..=1` and rounded to two
    /// decimals.
    ///
    /// Unlike the other HSV and HSL setters, this method recomputes hue,
    /// saturation, and brightness from the resulting RGB coordinates. Only
    /// achromatic results keep the current hue.
    pub fn set_lightness(&mut self, value: Float) {
        let [h, s, _] = self.hsl_basis();
        self.derive(Basis::Hsl([h, s, round2(clamp(value, 0.0, 1.0))]));
    }

    /// Set the alpha percentage, which is clamped to `0..=100`.
    pub fn set_alpha(&mut self, value: Float) {
        self.state.alpha = clamp(value, 0.0, 100.0);
    }

    /// Reset this color from the given text.
    ///
    /// Unlike the per-channel setters, this method is a hard set that replaces
    /// all representations, alpha, and the last known hue. If the text cannot
    /// be parsed, the color becomes opaque black.
    pub fn set_hex(&mut self, text: &str) {
        *self = Self::from_input(text);
        log::debug!("hard set color to {}", self.hex8());
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the value of the given channel.
    pub fn get(&self, channel: Channel) -> Float {
        use Channel::*;

        match channel {
            Red => self.red() as Float,
            Green => self.green() as Float,
            Blue => self.blue() as Float,
            Hue => self.hue(),
            Saturation => self.saturation(),
            Brightness => self.brightness(),
            HslSaturation => self.hsl_saturation(),
            Lightness => self.lightness(),
            Alpha => self.alpha(),
        }
    }

    /// Set the value of the given channel, clamping out-of-range values.
    pub fn set(&mut self, channel: Channel, value: Float) {
        use Channel::*;

        match channel {
            Red => self.set_red(value),
            Green => self.set_green(value),
            Blue => self.set_blue(value),
            Hue => self.set_hue(value),
            Saturation => self.set_saturation(value),
            Brightness => self.set_brightness(value),
            HslSaturation => self.set_hsl_saturation(value),
            Lightness => self.set_lightness(value),
            Alpha => self.set_alpha(value),
        }
    }

    /// Set the value of the given channel, rejecting out-of-range values.
    ///
    /// # Errors
    ///
    /// This method fails with [`ColorError::OutOfRangeValue`] if the value is
    /// not-a-number or outside the channel's range.
    pub fn try_set(&mut self, channel: Channel, value: Float) -> Result<(), ColorError> {
        if value.is_nan() || value < channel.min() || channel.max() < value {
            return Err(OutOfRangeError::new(channel, value).into());
        }

        self.set(channel, value);
        Ok(())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get this color as `#RRGGBB` with uppercase digits.
    pub fn hex(&self) -> String {
        render(self, ColorFormat::Hex)
    }

    /// Get this color as `#RRGGBBAA` with uppercase digits.
    ///
    /// The alpha byte is `round(alpha / 100 × 255)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huepick::{Color, Rgba};
    /// let red = Color::from_input(Rgba::new(255.0, 0.0, 0.0).with_alpha(50.0));
    /// assert_eq!(red.hex8(), "#FF000080");
    /// ```
    pub fn hex8(&self) -> String {
        render(self, ColorFormat::Hex8)
    }

    /// Get the alpha as a fraction `0..=1`.
    #[inline]
    pub fn alpha_fraction(&self) -> Float {
        self.state.alpha / 100.0
    }

    /// Get red, green, blue, and alpha fraction.
    pub fn to_rgb(&self) -> [Float; 4] {
        let [r, g, b] = from_24bit(self.state.rgb);
        [r, g, b, self.alpha_fraction()]
    }

    /// Get hue, saturation, brightness, and alpha fraction.
    pub fn to_hsb(&self) -> [Float; 4] {
        let [h, s, v] = self.hsv_basis();
        [h, s, v, self.alpha_fraction()]
    }

    /// Get hue, HSL saturation, lightness, and alpha fraction.
    pub fn to_hsl(&self) -> [Float; 4] {
        let [h, s, l] = self.hsl_basis();
        [h, s, l, self.alpha_fraction()]
    }

    /// Format this color in the given format.
    ///
    /// # Examples
    ///
    /// ```
    /// # use huepick::{Color, ColorFormat};
    /// let color = Color::from_input("rgba(255, 136, 0, 0.6)");
    /// assert_eq!(color.to_string_as(ColorFormat::Rgb), "rgba(255, 136, 0, 0.6)");
    /// assert_eq!(color.to_string_as(ColorFormat::Hex4), "#F809");
    /// assert_eq!(color.to_string_as(ColorFormat::Hex8), "#FF880099");
    /// ```
    pub fn to_string_as(&self, format: ColorFormat) -> String {
        render(self, format)
    }

    /// Normalize this color's state for equality testing and hashing.
    fn to_eq_bits(&self) -> ([u8; 3], [crate::Bits; 6]) {
        let s = &self.state;
        (
            s.rgb,
            [
                to_eq_bits(s.hue),
                to_eq_bits(s.saturation),
                to_eq_bits(s.brightness),
                to_eq_bits(s.hsl_saturation),
                to_eq_bits(s.lightness),
                to_eq_bits(s.alpha),
            ],
        )
    }
}

impl Default for Color {
    /// Create an instance of opaque black.
    fn default() -> Self {
        Self::from_basis(Basis::Rgb([0.0, 0.0, 0.0]), 100.0)
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower case.
    /// That makes parsing effectively case-insensitive.
    ///
    /// ```
    /// # use huepick::Color;
    /// # use huepick::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#000080")?;
    /// assert_eq!(navy.hue(), 240.0);
    ///
    /// let rose: Color = str::parse("hsl(350, 100%, 88%)")?;
    /// assert_eq!(rose.hex(), "#FFC2CC");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(basis, alpha)| Self::from_basis(basis, alpha * 100.0))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_eq_bits().hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Both equality testing and hashing normalize the derived state by
    /// zeroing out not-a-numbers, reducing resolution, and dropping the sign
    /// of negative zeros. The last known hue does not participate, since it
    /// only matters for future mutations.
    fn eq(&self, other: &Self) -> bool {
        self.to_eq_bits() == other.to_eq_bits()
    }
}

impl Eq for Color {}

impl std::fmt::Display for Color {
    /// Format this color as `#RRGGBB` if it is opaque and as `rgba()`
    /// otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let format = if self.state.alpha < 100.0 {
            ColorFormat::Rgb
        } else {
            ColorFormat::Hex
        };

        f.write_str(&render(self, format))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use rand::Rng;

    use super::{derive_all, Basis, Channel, Color};
    use crate::core::{assert_within, from_24bit, rgb_to_hsl, rgb_to_hsv};
    use crate::error::{ColorError, OutOfRangeError};
    use crate::{ColorFormat, Float, Hsla, Hsva, Rgba};

    #[test]
    fn test_default() {
        let black = Color::default();
        assert_eq!(black.hex8(), "#000000FF");
        assert_eq!(black.to_rgb(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(black.to_hsb(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_invalid_input() {
        let color = Color::from_input("not a color");
        assert_eq!(color, Color::default());
        assert!(matches!(
            Color::try_from_input("#12"),
            Err(ColorError::InvalidColorInput(_))
        ));

        let mut color = Color::from_input("red");
        color.set_hex("rgb(1, 2");
        assert_eq!(color.hex8(), "#000000FF");
    }

    #[test]
    fn test_hex_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let hex = format!(
                "#{:02X}{:02X}{:02X}",
                rng.random::<u8>(),
                rng.random::<u8>(),
                rng.random::<u8>()
            );
            let color = Color::from_input(hex.to_lowercase());
            assert_eq!(color.to_string_as(ColorFormat::Hex), hex);
        }
    }

    #[test]
    fn test_hue_preservation() {
        let mut color = Color::from_input(Hsva::new(200.0, 0.5, 0.5));
        assert_eq!(color.hue(), 200.0);

        color.set_saturation(0.0);
        assert!(color.is_achromatic());
        assert_eq!(color.hue(), 200.0);

        color.set_saturation(0.5);
        assert_eq!(color.hue(), 200.0);
        assert_eq!(color.saturation(), 0.5);

        // RGB mutations that stay gray keep the hue as well.
        color.set_saturation(0.0);
        color.set_red(color.red() as Float);
        assert_eq!(color.hue(), 200.0);
        color.set_brightness(0.0);
        assert_eq!(color.hue(), 200.0);
    }

    #[test]
    fn test_cross_space_consistency() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let rgb: [u8; 3] = [rng.random(), rng.random(), rng.random()];
            let color = Color::from_input(rgb);
            assert_eq!(color.state().rgb, rgb);

            let [h, s, v] = rgb_to_hsv(&from_24bit(rgb));
            let difference = (color.hue() - h).abs();
            assert_within!(difference.min(360.0 - difference), 0.0, 1.0);
            assert_within!(color.saturation(), s, 0.01);
            assert_within!(color.brightness(), v, 0.01);

            let [_, s, l] = rgb_to_hsl(&from_24bit(rgb));
            assert_within!(color.hsl_saturation(), s, 0.01);
            assert_within!(color.lightness(), l, 0.01);
        }
    }

    #[test]
    fn test_clamping() {
        let mut color = Color::default();
        color.set_red(400.0);
        assert_eq!(color.red(), 255);
        color.set_red(-10.0);
        assert_eq!(color.red(), 0);

        color.set_saturation(3.0);
        assert_eq!(color.saturation(), 1.0);
        color.set_alpha(-5.0);
        assert_eq!(color.alpha(), 0.0);
        color.set_alpha(Float::NAN);
        assert_eq!(color.alpha(), 0.0);
    }

    #[test]
    fn test_infinite_hue() {
        let color = Color::from_input("hsv(inf, 50%, 50%)");
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.to_string_as(ColorFormat::Hsv), "hsv(0, 50%, 50%)");
        crate::assert_same_color!(color, Color::from_input(Hsva::new(0.0, 0.5, 0.5)));

        let color = Color::from_input(Hsva::new(Float::INFINITY, 0.5, 0.5));
        assert_eq!(color.hue(), 0.0);
        let color = Color::from_input(Hsla::new(Float::NEG_INFINITY, 0.5, 0.5));
        assert_eq!(color.hue(), 0.0);
    }

    #[test]
    fn test_alpha_percentage() {
        let mut color = Color::from_input("#FF0000");
        color.set_alpha(50.0);
        assert_eq!(color.alpha(), 50.0);
        assert_eq!(color.to_rgb()[3], 0.5);
        assert_eq!(color.to_string_as(ColorFormat::Rgb), "rgba(255, 0, 0, 0.5)");

        let color = Color::from_input(Rgba::new(255.0, 0.0, 0.0).with_alpha(50.0));
        assert_eq!(color.to_string_as(ColorFormat::Hex8), "#FF000080");
        assert_eq!(format!("{}", color), "rgba(255, 0, 0, 0.5)");
    }

    #[test]
    fn test_single_channel_setters() {
        let mut color = Color::from_input("#FF0000");

        color.set_green(255.0);
        assert_eq!(color.hex(), "#FFFF00");
        assert_eq!(color.hue(), 60.0);
        assert_eq!(color.lightness(), 0.5);

        color.set_hue(240.0);
        assert_eq!(color.hex(), "#0000FF");
        assert_eq!((color.saturation(), color.brightness()), (1.0, 1.0));

        color.set_hue(-120.0);
        assert_eq!(color.hue(), 240.0);

        color.set_brightness(0.5);
        assert_eq!(color.hex(), "#000080");
        assert_eq!(color.hue(), 240.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.lightness(), 0.25);
    }

    #[test]
    fn test_hue_on_black() {
        let mut color = Color::default();
        color.set_hue(120.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.brightness(), 1.0);
        assert_eq!(color.hex(), "#00FF00");
    }

    #[test]
    fn test_lightness() {
        let mut color = Color::from_input("#FF0000");
        color.set_lightness(0.25);
        assert_eq!(color.hex(), "#800000");
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.brightness(), 0.5);
        assert_eq!(color.hsl_saturation(), 1.0);

        let mut color = Color::from_input(Hsla::new(90.0, 0.0, 0.5));
        assert_eq!(color.hue(), 90.0);
        color.set_lightness(1.0);
        assert_eq!(color.hex(), "#FFFFFF");
        assert_eq!(color.hue(), 90.0);
    }

    #[test]
    fn test_hard_set() {
        let mut color = Color::from_input(Hsva::new(200.0, 0.5, 0.5));
        color.set_alpha(20.0);
        color.set_hex("#808080");
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.alpha(), 100.0);
        assert_eq!(color.lightness(), 0.5);
    }

    #[test]
    fn test_channels() {
        let mut color = Color::default();
        color.set(Channel::Blue, 300.0);
        assert_eq!(color.get(Channel::Blue), 255.0);

        assert_eq!(
            color.try_set(Channel::Alpha, 150.0),
            Err(ColorError::OutOfRangeValue(OutOfRangeError::new(
                Channel::Alpha,
                150.0
            )))
        );
        assert_eq!(color.alpha(), 100.0);

        assert_eq!(color.try_set(Channel::Saturation, 0.5), Ok(()));
        assert_eq!(color.get(Channel::Saturation), 0.5);
        assert!(color.try_set(Channel::Hue, Float::NAN).is_err());
    }

    #[test]
    fn test_derive_all() {
        let state = derive_all(Basis::Hsv([400.0, 2.0, -1.0]), 150.0, 0.0);
        assert_eq!(state.hue, 40.0);
        assert_eq!(state.saturation, 1.0);
        assert_eq!(state.brightness, 0.0);
        assert_eq!(state.rgb, [0, 0, 0]);
        assert_eq!(state.alpha, 100.0);
        assert_eq!(state.last_known_hue, 40.0);

        let state = derive_all(Basis::Rgb([0.0, 0.0, 255.0]), 50.0, 10.0);
        assert_eq!(state.hue, 240.0);
        assert_eq!(state.last_known_hue, 240.0);
    }

    #[test]
    fn test_equality() {
        let c1 = Color::from_input("#336699");
        let c2 = Color::from_input("rgb(51, 102, 153)");
        assert_eq!(c1, c2);

        let mut c3 = c2;
        c3.set_alpha(99.0);
        assert_ne!(c1, c3);
    }
}
