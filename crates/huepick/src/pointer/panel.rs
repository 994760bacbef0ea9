use super::{ColorControl, Point, PointerMapping, Rect};
use crate::core::{clamp, round2};
use crate::{Color, Float};

/// Determine the saturation and brightness selected by the pointer on a
/// saturation panel.
///
/// Saturation grows from left to right and brightness from bottom to top.
/// The pointer is clamped into the panel and both results are rounded to two
/// decimals. A degenerate axis without extent yields 0.
///
/// ```
/// # use huepick::pointer::{saturation_brightness_at, Point, Rect};
/// let bounds = Rect::new(10.0, 10.0, 200.0, 100.0);
/// let (s, v) = saturation_brightness_at(&bounds, Point::new(60.0, 35.0));
/// assert_eq!(s, 0.25);
/// assert_eq!(v, 0.75);
/// ```
pub fn saturation_brightness_at(bounds: &Rect, pointer: Point) -> (Float, Float) {
    let offset = bounds.offset_of(pointer);

    let saturation = if 0.0 < bounds.width {
        round2(clamp(offset.x, 0.0, bounds.width) / bounds.width)
    } else {
        0.0
    };

    let brightness = if 0.0 < bounds.height {
        let top = clamp(offset.y, 0.0, bounds.height);
        round2(clamp(1.0 - top / bounds.height, 0.0, 1.0))
    } else {
        0.0
    };

    (saturation, brightness)
}

/// Determine the offset of the panel's cursor for saturation and brightness,
/// relative to the panel's top-left corner.
pub fn saturation_brightness_position(bounds: &Rect, saturation: Float, brightness: Float) -> Point {
    Point::new(saturation * bounds.width, (1.0 - brightness) * bounds.height)
}

/// A saturation and brightness panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaturationPanel;

impl PointerMapping for SaturationPanel {
    type Output = (Float, Float);

    fn map(&self, bounds: &Rect, pointer: Point) -> Self::Output {
        saturation_brightness_at(bounds, pointer)
    }
}

impl ColorControl for SaturationPanel {
    fn apply(&self, value: Self::Output, color: &mut Color) {
        color.set_saturation_brightness(value.0, value.1);
    }
}
