//! Change notification for colors.
//!
//! An [`ObservableColor`] wraps a [`Color`] and synchronously notifies its
//! listeners after every update. That suffices for wiring the controls of a
//! picker to each other: After a drag on the hue slider updates the color,
//! the saturation panel, the alpha slider, and any text inputs all receive
//! the new color before the next pointer event.

use crate::Color;

/// A token for removing a listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(&Color)>;

/// A color with listeners.
///
/// ```
/// # use huepick::{Color, ObservableColor};
/// # use std::cell::RefCell;
/// # use std::rc::Rc;
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let mut color = ObservableColor::new(Color::from_input("#FF0000"));
/// let subscription = color.subscribe(move |c| sink.borrow_mut().push(c.hex()));
/// color.update(|c| c.set_hue(120.0));
/// assert!(color.unsubscribe(subscription));
/// color.update(|c| c.set_hue(240.0));
///
/// assert_eq!(*seen.borrow(), vec!["#00FF00".to_string()]);
/// assert_eq!(color.color().hex(), "#0000FF");
/// ```
#[derive(Default)]
pub struct ObservableColor {
    color: Color,
    listeners: Vec<(Subscription, Listener)>,
    next_id: u64,
}

impl ObservableColor {
    /// Create a new observable color without listeners.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Get the current color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Get the number of listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Register a listener, which is invoked after every update.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&Color) + 'static,
    {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((subscription, Box::new(listener)));
        log::debug!("added listener {:?}", subscription);
        subscription
    }

    /// Remove a listener. This method returns `false` if the listener was
    /// removed before.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let count = self.listeners.len();
        self.listeners.retain(|(s, _)| *s != subscription);
        count != self.listeners.len()
    }

    /// Apply the mutation to the color and then notify all listeners in
    /// subscription order.
    pub fn update<F>(&mut self, mutation: F)
    where
        F: FnOnce(&mut Color),
    {
        mutation(&mut self.color);
        log::trace!("notifying {} listeners of {}", self.listeners.len(), self.color.hex8());
        for (_, listener) in &mut self.listeners {
            listener(&self.color);
        }
    }

    /// Consume this observable color and return the color.
    pub fn into_inner(self) -> Color {
        self.color
    }
}

impl std::fmt::Debug for ObservableColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableColor")
            .field("color", &self.color)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl From<Color> for ObservableColor {
    fn from(value: Color) -> Self {
        Self::new(value)
    }
}
