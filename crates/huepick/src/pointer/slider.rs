use super::{ColorControl, Orientation, Point, PointerMapping, Rect, Size};
use crate::core::{clamp, round2};
use crate::{Color, Float};

/// Determine the extent of the slider track and handle along the slider's
/// axis as well as the pointer's offset along that axis.
#[inline]
fn axis(bounds: &Rect, handle: Size, pointer: Point, orientation: Orientation) -> [Float; 3] {
    let offset = bounds.offset_of(pointer);
    match orientation {
        Orientation::Horizontal => [bounds.width, handle.width, offset.x],
        Orientation::Vertical => [bounds.height, handle.height, offset.y],
    }
}

/// Determine the ratio `0..=1` of the handle's center along the track, with
/// the pointer clamped so that the handle stays inside the track. Degenerate
/// tracks no longer than the handle have no ratio.
fn ratio(bounds: &Rect, handle: Size, pointer: Point, orientation: Orientation) -> Option<Float> {
    let [extent, handle, offset] = axis(bounds, handle, pointer, orientation);
    let span = extent - handle;
    if span.is_nan() || span <= 0.0 {
        return None;
    }

    let half = handle / 2.0;
    let offset = clamp(offset, half, extent - half);
    Some((offset - half) / span)
}

/// Determine the hue `0..=360` selected by the pointer on a hue slider.
///
/// Horizontal sliders start with hue 0 on the left, vertical sliders with
/// hue 0 at the bottom. Pointers outside the slider are clamped to the
/// nearest position, and hues are rounded to whole degrees. A degenerate
/// slider, whose track is no longer than its handle, always yields 0.
///
/// ```
/// # use huepick::pointer::{hue_at, Orientation, Point, Rect, Size};
/// let bounds = Rect::new(0.0, 0.0, 370.0, 10.0);
/// let handle = Size::new(10.0, 10.0);
/// let hue = hue_at(&bounds, handle, Point::new(185.0, 5.0), Orientation::Horizontal);
/// assert_eq!(hue, 180.0);
/// ```
pub fn hue_at(bounds: &Rect, handle: Size, pointer: Point, orientation: Orientation) -> Float {
    ratio(bounds, handle, pointer, orientation).map_or(0.0, |r| match orientation {
        Orientation::Horizontal => (r * 360.0).round(),
        Orientation::Vertical => ((1.0 - r) * 360.0).round(),
    })
}

/// Determine the offset of the hue slider handle's center for the hue.
///
/// The offset is measured from the slider's left or top edge, depending on
/// orientation. It inverts [`hue_at`], with hue 360 at the far end.
pub fn hue_position(bounds: &Rect, handle: Size, hue: Float, orientation: Orientation) -> Float {
    let (extent, handle) = match orientation {
        Orientation::Horizontal => (bounds.width, handle.width),
        Orientation::Vertical => (bounds.height, handle.height),
    };
    let half = handle / 2.0;
    let span = extent - handle;

    match orientation {
        Orientation::Horizontal if hue == 360.0 => extent - half,
        Orientation::Horizontal => hue.rem_euclid(360.0) * span / 360.0 + half,
        Orientation::Vertical if hue == 360.0 => half,
        Orientation::Vertical => (360.0 - hue.rem_euclid(360.0)) * span / 360.0 + half,
    }
}

/// Determine the alpha fraction `0..=1` selected by the pointer on an alpha
/// slider.
///
/// Horizontal sliders start with full transparency on the left, vertical
/// sliders start with full transparency at the bottom. The result is rounded
/// to two decimals. A degenerate slider always yields 0.
pub fn alpha_at(bounds: &Rect, handle: Size, pointer: Point, orientation: Orientation) -> Float {
    ratio(bounds, handle, pointer, orientation).map_or(0.0, |r| match orientation {
        Orientation::Horizontal => round2(r),
        Orientation::Vertical => round2(1.0 - r),
    })
}

/// Determine the offset of the alpha slider handle's center for the alpha
/// fraction, rounded to whole units. It inverts [`alpha_at`].
pub fn alpha_position(bounds: &Rect, handle: Size, alpha: Float, orientation: Orientation) -> Float {
    let (extent, handle, alpha) = match orientation {
        Orientation::Horizontal => (bounds.width, handle.width, alpha),
        Orientation::Vertical => (bounds.height, handle.height, 1.0 - alpha),
    };

    (alpha * (extent - handle) + handle / 2.0).round()
}

// ====================================================================================================================

/// A hue slider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HueSlider {
    pub handle: Size,
    pub orientation: Orientation,
}

impl HueSlider {
    /// Create a new hue slider.
    pub const fn new(handle: Size, orientation: Orientation) -> Self {
        Self {
            handle,
            orientation,
        }
    }
}

impl PointerMapping for HueSlider {
    type Output = Float;

    fn map(&self, bounds: &Rect, pointer: Point) -> Self::Output {
        hue_at(bounds, self.handle, pointer, self.orientation)
    }
}

impl ColorControl for HueSlider {
    fn apply(&self, value: Self::Output, color: &mut Color) {
        color.set_hue(value);
    }
}

/// An alpha slider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AlphaSlider {
    pub handle: Size,
    pub orientation: Orientation,
}

impl AlphaSlider {
    /// Create a new alpha slider.
    pub const fn new(handle: Size, orientation: Orientation) -> Self {
        Self {
            handle,
            orientation,
        }
    }
}

impl PointerMapping for AlphaSlider {
    type Output = Float;

    fn map(&self, bounds: &Rect, pointer: Point) -> Self::Output {
        alpha_at(bounds, self.handle, pointer, self.orientation)
    }
}

impl ColorControl for AlphaSlider {
    fn apply(&self, value: Self::Output, color: &mut Color) {
        // Fractions carry two decimals, so percentages are whole numbers.
        color.set_alpha((value * 100.0).round());
    }
}

#[cfg(test)]
mod test {
    use super::{alpha_at, alpha_position, hue_at, hue_position, AlphaSlider, HueSlider};
    use crate::pointer::{ColorControl, Orientation, Point, PointerMapping, Rect, Size};
    use crate::Color;

    const HANDLE: Size = Size::new(10.0, 10.0);

    #[test]
    fn test_hue_horizontal() {
        let bounds = Rect::new(100.0, 50.0, 370.0, 10.0);
        let at = |x| hue_at(&bounds, HANDLE, Point::new(x, 55.0), Orientation::Horizontal);

        assert_eq!(at(105.0), 0.0);
        assert_eq!(at(0.0), 0.0);
        assert_eq!(at(195.0), 90.0);
        assert_eq!(at(465.0), 360.0);
        assert_eq!(at(1000.0), 360.0);

        assert_eq!(hue_position(&bounds, HANDLE, 0.0, Orientation::Horizontal), 5.0);
        assert_eq!(hue_position(&bounds, HANDLE, 90.0, Orientation::Horizontal), 95.0);
        assert_eq!(hue_position(&bounds, HANDLE, 360.0, Orientation::Horizontal), 365.0);
        assert_eq!(hue_position(&bounds, HANDLE, 450.0, Orientation::Horizontal), 95.0);
    }

    #[test]
    fn test_hue_vertical() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 370.0);
        let at = |y| hue_at(&bounds, HANDLE, Point::new(5.0, y), Orientation::Vertical);

        assert_eq!(at(365.0), 0.0);
        assert_eq!(at(500.0), 0.0);
        assert_eq!(at(5.0), 360.0);
        assert_eq!(at(-20.0), 360.0);
        assert_eq!(at(95.0), 270.0);

        assert_eq!(hue_position(&bounds, HANDLE, 0.0, Orientation::Vertical), 365.0);
        assert_eq!(hue_position(&bounds, HANDLE, 270.0, Orientation::Vertical), 95.0);
        assert_eq!(hue_position(&bounds, HANDLE, 360.0, Orientation::Vertical), 5.0);
    }

    #[test]
    fn test_alpha() {
        let bounds = Rect::new(0.0, 0.0, 210.0, 10.0);
        let at = |x| alpha_at(&bounds, HANDLE, Point::new(x, 5.0), Orientation::Horizontal);

        assert_eq!(at(-5.0), 0.0);
        assert_eq!(at(55.0), 0.25);
        assert_eq!(at(105.0), 0.5);
        assert_eq!(at(300.0), 1.0);
        assert_eq!(alpha_position(&bounds, HANDLE, 0.25, Orientation::Horizontal), 55.0);

        let bounds = Rect::new(0.0, 0.0, 10.0, 210.0);
        let at = |y| alpha_at(&bounds, HANDLE, Point::new(5.0, y), Orientation::Vertical);

        assert_eq!(at(5.0), 1.0);
        assert_eq!(at(155.0), 0.25);
        assert_eq!(at(205.0), 0.0);
        assert_eq!(at(19.0), 0.93);
        assert_eq!(at(41.0), 0.82);
        assert_eq!(at(69.0), 0.68);
        assert_eq!(alpha_position(&bounds, HANDLE, 0.25, Orientation::Vertical), 155.0);
    }

    #[test]
    fn test_degenerate() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let pointer = Point::new(7.0, 7.0);

        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            assert_eq!(hue_at(&bounds, HANDLE, pointer, orientation), 0.0);
            assert_eq!(alpha_at(&bounds, HANDLE, pointer, orientation), 0.0);
        }

        let empty = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(hue_at(&empty, Size::default(), pointer, Orientation::Horizontal), 0.0);
    }

    #[test]
    fn test_controls() {
        let bounds = Rect::new(0.0, 0.0, 370.0, 10.0);
        let mut color = Color::from_input("#FF0000");

        let slider = HueSlider::new(HANDLE, Orientation::Horizontal);
        let hue = slider.map(&bounds, Point::new(125.0, 5.0));
        assert_eq!(hue, 120.0);
        slider.apply(hue, &mut color);
        assert_eq!(color.hex(), "#00FF00");

        let bounds = Rect::new(0.0, 0.0, 210.0, 10.0);
        let slider = AlphaSlider::new(HANDLE, Orientation::Horizontal);
        let alpha = slider.map(&bounds, Point::new(105.0, 5.0));
        slider.apply(alpha, &mut color);
        assert_eq!(color.alpha(), 50.0);
        assert_eq!(color.hex8(), "#00FF0080");

        let bounds = Rect::new(0.0, 0.0, 10.0, 210.0);
        let slider = AlphaSlider::new(HANDLE, Orientation::Vertical);
        let alpha = slider.map(&bounds, Point::new(5.0, 19.0));
        slider.apply(alpha, &mut color);
        assert_eq!(color.alpha(), 93.0);
    }
}
