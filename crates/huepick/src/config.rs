//! Picker configuration.
//!
//! With the `serde` feature enabled, a [`PickerConfig`] can be loaded from
//! and saved as TOML. Missing entries fall back on their defaults:
//!
//! ```toml
//! default_color = "#000000"
//! format = "hex"
//! disable_alpha = false
//! disable_history = false
//! history_capacity = 8
//! orientation = "horizontal"
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::ColorFormat;
use crate::history::{History, DEFAULT_HISTORY_CAPACITY};
use crate::pointer::Orientation;
use crate::Color;

/// The configuration of a color picker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerConfig {
    /// The color picked before the user interacts with the picker.
    pub default_color: String,
    /// The format for reporting picked colors.
    pub format: ColorFormat,
    /// Whether the picker ignores alpha.
    pub disable_alpha: bool,
    /// Whether the picker keeps no history.
    pub disable_history: bool,
    /// The number of colors kept in the history.
    pub history_capacity: usize,
    /// The orientation of hue and alpha sliders.
    pub orientation: Orientation,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_color: "#000000".to_owned(),
            format: ColorFormat::default(),
            disable_alpha: false,
            disable_history: false,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            orientation: Orientation::default(),
        }
    }
}

impl PickerConfig {
    /// Create the initial color. If the default color is invalid, the
    /// initial color is opaque black.
    pub fn initial_color(&self) -> Color {
        let mut color = Color::from_input(self.default_color.as_str());
        if self.disable_alpha {
            color.set_alpha(100.0);
        }
        color
    }

    /// Create an empty history as configured.
    pub fn history(&self) -> History {
        if self.disable_history {
            History::with_capacity(0)
        } else {
            History::with_capacity(self.history_capacity)
        }
    }

    /// Render the color in the configured format.
    pub fn render(&self, color: &Color) -> String {
        color.to_string_as(self.format)
    }
}

#[cfg(feature = "serde")]
impl PickerConfig {
    /// Load a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// This method fails if the text is not valid TOML, does not match the
    /// configuration's structure, or has an invalid default color.
    pub fn from_toml_str(text: &str) -> Result<Self, crate::error::ConfigError> {
        use crate::error::ConfigError;
        use std::str::FromStr;

        let config: Self = toml::from_str(text)?;
        if let Err(error) = Color::from_str(&config.default_color) {
            return Err(ConfigError::InvalidDefaultColor(config.default_color, error));
        }

        log::debug!("loaded picker configuration {:?}", config);
        Ok(config)
    }

    /// Save this configuration as TOML text.
    ///
    /// # Errors
    ///
    /// This method fails if the configuration cannot be serialized.
    pub fn to_toml_string(&self) -> Result<String, crate::error::ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
