use super::{ColorControl, Point, PointerMapping, Rect};
use crate::Color;

/// The state of a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaptureState {
    #[default]
    Idle,
    Dragging,
}

/// A pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

/// A pointer drag on a control.
///
/// A drag starts with a pointer down event inside the control's bounds. It
/// then captures the pointer, i.e., all move events produce values, even when
/// the pointer is outside the control, until the pointer up event produces the
/// final value and ends the drag. Pointer down events during a drag are
/// ignored, as are move and up events outside a drag.
#[derive(Clone, Debug)]
pub struct DragCapture<M> {
    mapping: M,
    bounds: Rect,
    state: CaptureState,
}

impl<M: PointerMapping> DragCapture<M> {
    /// Create a new idle drag capture for the control mapping and bounds.
    pub const fn new(mapping: M, bounds: Rect) -> Self {
        Self {
            mapping,
            bounds,
            state: CaptureState::Idle,
        }
    }

    /// Get the control mapping.
    pub const fn mapping(&self) -> &M {
        &self.mapping
    }

    /// Get the control's bounds.
    pub const fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Update the control's bounds after a layout change. The new bounds
    /// apply to subsequent events, including those of an ongoing drag.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Get the current state.
    pub const fn state(&self) -> CaptureState {
        self.state
    }

    /// Determine whether a drag is ongoing.
    pub fn is_dragging(&self) -> bool {
        self.state == CaptureState::Dragging
    }

    /// Handle a pointer down event, which starts a drag if the pointer is
    /// inside the control's bounds.
    pub fn pointer_down(&mut self, pointer: Point) -> Option<M::Output> {
        if self.is_dragging() {
            log::debug!("ignoring pointer down at {:?} during drag", pointer);
            return None;
        } else if !self.bounds.contains(pointer) {
            return None;
        }

        self.state = CaptureState::Dragging;
        let value = self.mapping.map(&self.bounds, pointer);
        log::debug!("start drag at {:?} with {:?}", pointer, value);
        Some(value)
    }

    /// Handle a pointer move event, which produces a value during a drag.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<M::Output> {
        if !self.is_dragging() {
            return None;
        }

        let value = self.mapping.map(&self.bounds, pointer);
        log::trace!("drag to {:?} with {:?}", pointer, value);
        Some(value)
    }

    /// Handle a pointer up event, which produces the final value and ends a
    /// drag.
    pub fn pointer_up(&mut self, pointer: Point) -> Option<M::Output> {
        if !self.is_dragging() {
            return None;
        }

        self.state = CaptureState::Idle;
        let value = self.mapping.map(&self.bounds, pointer);
        log::debug!("end drag at {:?} with {:?}", pointer, value);
        Some(value)
    }

    /// Handle the pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> Option<M::Output> {
        match event {
            PointerEvent::Down(pointer) => self.pointer_down(pointer),
            PointerEvent::Move(pointer) => self.pointer_move(pointer),
            PointerEvent::Up(pointer) => self.pointer_up(pointer),
        }
    }
}

impl<M: ColorControl> DragCapture<M> {
    #[inline]
    fn commit(&self, value: Option<M::Output>, color: &mut Color) -> bool {
        value.is_some_and(|v| {
            self.mapping.apply(v, color);
            true
        })
    }

    /// Handle a pointer down event and apply any resulting value to the
    /// color. This method returns `true` if it updated the color.
    pub fn pointer_down_on(&mut self, pointer: Point, color: &mut Color) -> bool {
        let value = self.pointer_down(pointer);
        self.commit(value, color)
    }

    /// Handle a pointer move event and apply any resulting value to the
    /// color.
    pub fn pointer_move_on(&mut self, pointer: Point, color: &mut Color) -> bool {
        let value = self.pointer_move(pointer);
        self.commit(value, color)
    }

    /// Handle a pointer up event and apply any resulting value to the color.
    pub fn pointer_up_on(&mut self, pointer: Point, color: &mut Color) -> bool {
        let value = self.pointer_up(pointer);
        self.commit(value, color)
    }

    /// Handle the pointer event and apply any resulting value to the color.
    pub fn handle_on(&mut self, event: PointerEvent, color: &mut Color) -> bool {
        let value = self.handle(event);
        self.commit(value, color)
    }
}

#[cfg(test)]
mod test {
    use super::{CaptureState, DragCapture, PointerEvent};
    use crate::pointer::{Orientation, Point, Rect, SaturationPanel, Size};
    use crate::pointer::{AlphaSlider, HueSlider};
    use crate::Color;

    #[test]
    fn test_life_cycle() {
        let slider = HueSlider::new(Size::new(10.0, 10.0), Orientation::Horizontal);
        let mut capture = DragCapture::new(slider, Rect::new(0.0, 0.0, 370.0, 10.0));
        assert_eq!(capture.state(), CaptureState::Idle);

        assert_eq!(capture.pointer_move(Point::new(50.0, 5.0)), None);
        assert_eq!(capture.pointer_up(Point::new(50.0, 5.0)), None);
        assert_eq!(capture.pointer_down(Point::new(50.0, 50.0)), None);
        assert!(!capture.is_dragging());

        assert_eq!(capture.pointer_down(Point::new(95.0, 5.0)), Some(90.0));
        assert!(capture.is_dragging());
        assert_eq!(capture.pointer_down(Point::new(185.0, 5.0)), None);
        assert!(capture.is_dragging());

        assert_eq!(capture.pointer_move(Point::new(185.0, 5.0)), Some(180.0));
        assert_eq!(capture.pointer_move(Point::new(-100.0, 80.0)), Some(0.0));
        assert_eq!(capture.pointer_move(Point::new(900.0, -80.0)), Some(360.0));

        assert_eq!(capture.pointer_up(Point::new(275.0, 300.0)), Some(270.0));
        assert_eq!(capture.state(), CaptureState::Idle);
        assert_eq!(capture.pointer_move(Point::new(185.0, 5.0)), None);
    }

    #[test]
    fn test_events() {
        let mut capture = DragCapture::new(SaturationPanel, Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut color = Color::from_input("#00FF00");

        assert!(!capture.handle_on(PointerEvent::Move(Point::new(10.0, 10.0)), &mut color));
        assert!(capture.handle_on(PointerEvent::Down(Point::new(100.0, 0.0)), &mut color));
        assert!(capture.handle_on(PointerEvent::Move(Point::new(50.0, 150.0)), &mut color));
        assert_eq!(color.hex(), "#000000");
        assert_eq!(color.hue(), 120.0);

        assert!(capture.handle_on(PointerEvent::Up(Point::new(50.0, 0.0)), &mut color));
        assert_eq!(color.hex(), "#80FF80");
        assert_eq!(color.hue(), 120.0);
        assert!(!capture.is_dragging());
    }

    #[test]
    fn test_relayout() {
        let slider = AlphaSlider::new(Size::new(10.0, 10.0), Orientation::Horizontal);
        let mut capture = DragCapture::new(slider, Rect::new(0.0, 0.0, 110.0, 10.0));
        let mut color = Color::default();

        assert!(capture.pointer_down_on(Point::new(55.0, 5.0), &mut color));
        assert_eq!(color.alpha(), 50.0);

        capture.set_bounds(Rect::new(0.0, 0.0, 210.0, 10.0));
        assert!(capture.pointer_up_on(Point::new(55.0, 5.0), &mut color));
        assert_eq!(color.alpha(), 25.0);
        assert_eq!(capture.bounds().width, 210.0);
    }
}
