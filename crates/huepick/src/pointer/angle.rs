use super::{Point, PointerMapping, Rect};
use crate::Float;

#[cfg(feature = "f64")]
use std::f64::consts::PI;
#[cfg(not(feature = "f64"))]
use std::f32::consts::PI;

/// Determine the dial angle of the pointer around the center.
///
/// The angle is measured in whole degrees clockwise from straight up, i.e.,
/// straight up is 0, straight right is 90, straight down is 180, and straight
/// left is 270. Since screen coordinates grow downwards, a pointer below the
/// center has a larger y coordinate. If the pointer sits exactly on the
/// center, the angle is undefined and this function returns `None`.
///
/// ```
/// # use huepick::pointer::{angle, Point};
/// let center = Point::new(100.0, 100.0);
/// assert_eq!(angle(center, Point::new(150.0, 50.0)), Some(45.0));
/// assert_eq!(angle(center, Point::new(50.0, 150.0)), Some(225.0));
/// assert_eq!(angle(center, center), None);
/// ```
pub fn angle(center: Point, pointer: Point) -> Option<Float> {
    let dx = (center.x - pointer.x).abs();
    let dy = (center.y - pointer.y).abs();
    let hypotenuse = (dx * dx + dy * dy).sqrt();
    if hypotenuse == 0.0 || hypotenuse.is_nan() {
        return None;
    }

    let radians = (dy / hypotenuse).acos();
    let angle = (180.0 / (PI / radians)).floor();

    let (x, y) = (pointer.x, pointer.y);
    let (cx, cy) = (center.x, center.y);

    let angle = if cx < x && cy < y {
        180.0 - angle
    } else if x == cx && cy < y {
        180.0
    } else if cx < x && y == cy {
        90.0
    } else if x < cx && cy < y {
        180.0 + angle
    } else if x < cx && y == cy {
        270.0
    } else if x < cx && y < cy {
        360.0 - angle
    } else {
        angle
    };

    Some(angle % 360.0)
}

/// Determine the dial angle of the pointer around the bounding box's center.
#[inline]
pub fn angle_in(bounds: &Rect, pointer: Point) -> Option<Float> {
    angle(bounds.center(), pointer)
}

/// Normalize a dial angle.
///
/// Values outside `0..=360` are rejected in favor of the previous angle,
/// and 360 becomes 0.
pub fn normalize_angle(value: Float, previous: Float) -> Float {
    let value = if (0.0..=360.0).contains(&value) {
        value
    } else {
        previous
    };

    if value == 360.0 {
        0.0
    } else {
        value
    }
}

/// A rotation dial.
///
/// The dial maps pointers to angles around its bounding box's center. It
/// does not commit to a color, since angles drive gradients and not colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AngleDial;

impl PointerMapping for AngleDial {
    type Output = Option<Float>;

    fn map(&self, bounds: &Rect, pointer: Point) -> Self::Output {
        angle_in(bounds, pointer)
    }
}

#[cfg(test)]
mod test {
    use super::{angle, angle_in, normalize_angle, AngleDial};
    use crate::pointer::{Point, PointerMapping, Rect};
    use crate::Float;

    #[test]
    fn test_angle() {
        let center = Point::new(100.0, 100.0);

        for (x, y, expected) in [
            (100.0, 50.0, 0.0),
            (150.0, 50.0, 45.0),
            (150.0, 100.0, 90.0),
            (150.0, 150.0, 135.0),
            (100.0, 150.0, 180.0),
            (50.0, 150.0, 225.0),
            (50.0, 100.0, 270.0),
            (50.0, 50.0, 315.0),
            (160.0, 90.0, 80.0),
        ] {
            assert_eq!(angle(center, Point::new(x, y)), Some(expected), "({}, {})", x, y);
        }

        assert_eq!(angle(center, center), None);
    }

    #[test]
    fn test_angle_range() {
        let center = Point::new(0.0, 0.0);
        for step in 0..720 {
            let theta = (step as Float) / 2.0;
            let radians = theta.to_radians();
            let pointer = Point::new(50.0 * radians.sin(), -50.0 * radians.cos());
            let value = angle(center, pointer);
            assert!(
                value.is_some_and(|v| (0.0..360.0).contains(&v)),
                "{} yields {:?}",
                theta,
                value
            );
        }
    }

    #[test]
    fn test_angle_dial() {
        let bounds = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert_eq!(angle_in(&bounds, Point::new(150.0, 100.0)), Some(90.0));
        assert_eq!(AngleDial.map(&bounds, Point::new(100.0, 200.0)), Some(180.0));
        assert_eq!(AngleDial.map(&bounds, Point::new(100.0, 100.0)), None);
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(90.0, 45.0), 90.0);
        assert_eq!(normalize_angle(360.0, 45.0), 0.0);
        assert_eq!(normalize_angle(0.0, 45.0), 0.0);
        assert_eq!(normalize_angle(361.0, 45.0), 45.0);
        assert_eq!(normalize_angle(-1.0, 45.0), 45.0);
        assert_eq!(normalize_angle(Float::NAN, 45.0), 45.0);
    }
}
