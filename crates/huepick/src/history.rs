//! A bounded history of picked colors.

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Color;

/// The default number of colors in a history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 8;

/// A bounded history of recently picked colors as `#RRGGBBAA` strings.
///
/// Recording a color that is already part of the history moves it to the
/// most recent position instead of adding a duplicate. Once the history is
/// full, recording a new color evicts the oldest one.
///
/// ```
/// # use huepick::{Color, History};
/// let mut history = History::with_capacity(2);
/// history.record(&Color::from_input("red"));
/// history.record(&Color::from_input("lime"));
/// history.record(&Color::from_input("red"));
/// history.record(&Color::from_input("blue"));
///
/// let entries: Vec<_> = history.iter().collect();
/// assert_eq!(entries, vec!["#FF0000FF", "#0000FFFF"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct History {
    capacity: usize,
    entries: VecDeque<String>,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create a new empty history with the given capacity. A history with
    /// capacity 0 records nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Get the capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record the color.
    pub fn record(&mut self, color: &Color) {
        self.push(color.hex8());
    }

    /// Record the color given as hexadecimal string.
    pub fn push<S: Into<String>>(&mut self, hex: S) {
        if self.capacity == 0 {
            return;
        }

        let hex = hex.into();
        self.entries.retain(|entry| *entry != hex);
        while self.capacity <= self.entries.len() {
            self.entries.pop_front();
        }

        log::trace!("recording {} in history", hex);
        self.entries.push_back(hex);
    }

    /// Restore previously persisted entries, oldest first. Duplicates and
    /// entries beyond the capacity are dropped as if recorded one by one.
    pub fn restore<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.clear();
        for entry in entries {
            self.push(entry);
        }
    }

    /// Get an iterator over the entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Get the most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether this history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod test {
    use super::{History, DEFAULT_HISTORY_CAPACITY};
    use crate::Color;

    #[test]
    fn test_eviction() {
        let mut history = History::default();
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
        assert!(history.is_empty());

        for red in 0..10_u8 {
            history.record(&Color::from_input([red, 0, 0]));
        }

        assert_eq!(history.len(), 8);
        assert_eq!(history.iter().next(), Some("#020000FF"));
        assert_eq!(history.latest(), Some("#090000FF"));
    }

    #[test]
    fn test_dedupe() {
        let mut history = History::with_capacity(3);
        history.push("#FF0000FF");
        history.push("#00FF00FF");
        history.push("#FF0000FF");

        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["#00FF00FF", "#FF0000FF"]);

        history.push("#0000FFFF");
        history.push("#000000FF");
        assert_eq!(
            history.iter().collect::<Vec<_>>(),
            vec!["#FF0000FF", "#0000FFFF", "#000000FF"]
        );

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }

    #[test]
    fn test_restore() {
        let mut history = History::with_capacity(2);
        history.restore(["#111111FF", "#222222FF", "#111111FF", "#333333FF"]);
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["#111111FF", "#333333FF"]);

        let mut disabled = History::with_capacity(0);
        disabled.record(&Color::default());
        assert!(disabled.is_empty());
    }
}
