//! Pointer math for color picker controls.
//!
//! This module maps pointer positions to the values of a picker's controls,
//! i.e., the [`angle`] of a rotation dial, the hue and alpha of
//! [sliders](hue_at), and the saturation and brightness of the
//! [panel](saturation_brightness_at). All mappings clamp the pointer to the
//! control's bounds first, so that pointers outside the control still produce
//! valid values. That matters because a drag, once started, continues until
//! the pointer is released, no matter where the pointer goes.
//! [`DragCapture`] implements just that life cycle.
//!
//! ```
//! # use huepick::Color;
//! # use huepick::pointer::{DragCapture, HueSlider, Orientation, Point, Rect, Size};
//! let slider = HueSlider::new(Size::new(10.0, 10.0), Orientation::Horizontal);
//! let mut capture = DragCapture::new(slider, Rect::new(0.0, 0.0, 370.0, 10.0));
//! let mut color = Color::from_input("#FF0000");
//!
//! assert!(capture.pointer_down_on(Point::new(5.0, 5.0), &mut color));
//! assert!(capture.pointer_move_on(Point::new(125.0, 500.0), &mut color));
//! assert!(capture.pointer_up_on(Point::new(245.0, -30.0), &mut color));
//! assert_eq!(color.hex(), "#0000FF");
//! ```

mod angle;
mod capture;
mod panel;
mod slider;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Color, Float};

pub use crate::core::clamp;
pub use angle::{angle, angle_in, normalize_angle, AngleDial};
pub use capture::{CaptureState, DragCapture, PointerEvent};
pub use panel::{saturation_brightness_at, saturation_brightness_position, SaturationPanel};
pub use slider::{alpha_at, alpha_position, hue_at, hue_position, AlphaSlider, HueSlider};

/// A pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: Float,
    pub y: Float,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }
}

/// The size of a drag handle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: Float,
    pub height: Float,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: Float, height: Float) -> Self {
        Self { width, height }
    }
}

/// A control's bounding box in the same coordinates as pointer positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub left: Float,
    pub top: Float,
    pub width: Float,
    pub height: Float,
}

impl Rect {
    /// Create a new bounding box.
    pub const fn new(left: Float, top: Float, width: Float, height: Float) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Get this bounding box's center.
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Determine whether the point falls within this bounding box, edges
    /// included.
    pub fn contains(&self, point: Point) -> bool {
        self.left <= point.x
            && point.x <= self.left + self.width
            && self.top <= point.y
            && point.y <= self.top + self.height
    }

    /// Get the point's offset from this bounding box's top-left corner.
    pub fn offset_of(&self, point: Point) -> Point {
        Point::new(point.x - self.left, point.y - self.top)
    }
}

/// A slider's orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

// ====================================================================================================================

/// A mapping from pointer positions to a control's value.
pub trait PointerMapping {
    /// The control's value.
    type Output: Copy + std::fmt::Debug;

    /// Map the pointer position within the bounding box to a value.
    fn map(&self, bounds: &Rect, pointer: Point) -> Self::Output;
}

/// A control that commits its value to a color.
pub trait ColorControl: PointerMapping {
    /// Apply the value to the color, calling exactly one setter.
    fn apply(&self, value: Self::Output, color: &mut Color);
}
