//! # Huepick: The Headless Color Picker
//!
//! Huepick is the engine of a graphical color picker without the graphics. It
//! provides two things:
//!
//!   * A **color model** that keeps RGB, HSV, and HSL representations of the
//!     same color consistent while the user edits one channel at a time.
//!   * **Pointer math** that turns pointer positions on hue sliders, alpha
//!     sliders, saturation panels, and rotation dials into channel values.
//!
//! Any user interface toolkit can render the controls and forward pointer
//! events, while huepick determines the picked color.
//!
//!
//! ## One Color, Three Representations
//!
//! A [`Color`] derives all of its representations from a single
//! authoritative basis. Editing red, green, or blue makes RGB authoritative,
//! editing hue, saturation, or brightness makes HSV authoritative, and editing
//! lightness makes HSL authoritative. The other representations are then
//! recomputed, with RGB coordinates rounded to whole integers in `0..=255` and
//! saturation, brightness, and lightness rounded to two decimals.
//!
//! Hue needs special care. For achromatic colors, i.e., black, white, and all
//! grays, hue is undefined and a naive conversion from RGB produces 0. That
//! makes for a poor user experience: Dragging the brightness all the way down
//! and back up again would lose the hue. Hence, a color tracks its **last
//! known hue** and reuses it whenever the color becomes achromatic.
//!
//! ```
//! # use huepick::Color;
//! let mut color = Color::from_input("#3399FF");
//! assert_eq!(color.hue(), 210.0);
//!
//! color.set_brightness(0.0);
//! assert_eq!(color.hex(), "#000000");
//! assert_eq!(color.hue(), 210.0);
//!
//! color.set_brightness(1.0);
//! assert_eq!(color.hex(), "#3399FF");
//! ```
//!
//! Alpha is a percentage `0..=100` throughout the public API. Only CSS text
//! and the trailing digits of `#RRGGBBAA` use the fraction or byte,
//! respectively.
//!
//!
//! ## Inputs and Outputs
//!
//! [`Color::from_input`] accepts any [`ColorInput`], i.e., CSS color names,
//! hexadecimal strings with 3, 4, 6, or 8 digits, the `rgb()`, `hsl()`, and
//! `hsv()` functions including their `a`-suffixed variants, as well as the
//! [`Rgba`], [`Hsla`], and [`Hsva`] objects. It never fails but logs a warning
//! and falls back on opaque black. [`Color::try_from_input`] and
//! [`Color::from_str`](std::str::FromStr) report errors instead.
//! [`Color::to_string_as`] renders colors in any of the [`ColorFormat`]s.
//!
//! For pickers that prefer replacing the entire color after each change,
//! [`parse_color`] computes a [`ColorSnapshot`] with all representations at
//! once.
//!
//!
//! ## Pointer Math
//!
//! The [`pointer`] module maps pointer positions to channel values. Its
//! [`DragCapture`](pointer::DragCapture) tracks a drag from pointer down to
//! pointer up and commits every intermediate value to a color. An
//! [`ObservableColor`] then notifies all other controls of the change.
//!
//!
//! ## Features
//!
//!   * `f64` (default) selects `f64` as [`Float`], otherwise it is `f32`.
//!   * `serde` enables serialization of inputs, snapshots, histories, and the
//!     [`PickerConfig`], which can then be loaded from TOML.
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade but does
//! not install a logger.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod config;
mod core;
pub mod error;
mod format;
mod history;
mod input;
mod object;
mod observe;
mod palette;
pub mod pointer;
mod snapshot;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use config::PickerConfig;
pub use core::{clamp, round2};
pub use format::ColorFormat;
pub use history::{History, DEFAULT_HISTORY_CAPACITY};
pub use input::{ColorInput, Hsla, Hsva, Rgba};
pub use object::{derive_all, Basis, Channel, Color, ColorState};
pub use observe::{ObservableColor, Subscription};
pub use palette::{rgba_css, Swatch, DEFAULT_PALETTE};
pub use snapshot::{parse_color, ColorData, ColorSnapshot};
