// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixed capacity, in memory, circular history log.
//!
//! ```text
//!  capacity = 3, after add("a") add("b") add("c") add("d")
//!
//!  slot:    0     1     2
//!         ┌─────┬─────┬─────┐
//!         │ "c" │ "d" │ "b" │      last_entry = 1
//!         └─────┴─────┴─────┘
//! ```
//!
//! The write cursor (`last_entry`) starts at slot 0 and is advanced *before* each
//! write, so the first line lands in slot 1. The read cursor (`current_entry`) is
//! `None` while not browsing. Recall only moves the read cursor, it never reorders
//! or removes entries.

/// Default number of lines kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    last_entry: usize,
    current_entry: Option<usize>,
}

impl Default for History {
    fn default() -> Self { Self::new(DEFAULT_HISTORY_CAPACITY) }
}

impl History {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: vec![String::new(); capacity],
            last_entry: 0,
            current_entry: None,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize { self.entries.len() }

    /// Reinitializes the log with `capacity` empty slots. Prior entries are
    /// discarded.
    pub fn set_capacity(&mut self, capacity: usize) { *self = Self::new(capacity); }

    /// Writes `line` into the next slot, overwriting the oldest entry once full.
    /// No-op when the capacity is 0.
    pub fn add(&mut self, line: impl Into<String>) {
        let capacity = self.capacity();
        if capacity == 0 {
            return;
        }
        self.last_entry = (self.last_entry + 1) % capacity;
        self.entries[self.last_entry] = line.into();
    }

    /// Advances the read cursor, wrapping to slot 0 past the end. When not browsing,
    /// starts at slot 0. Returns `None` only when the capacity is 0.
    pub fn recall_next(&mut self) -> Option<&str> {
        let capacity = self.capacity();
        if capacity == 0 {
            return None;
        }
        let next = match self.current_entry {
            None => 0,
            Some(current) => (current + 1) % capacity,
        };
        self.current_entry = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Retreats the read cursor, wrapping to the last slot past the start. When not
    /// browsing, starts at the last slot. Returns `None` only when the capacity is 0.
    pub fn recall_prev(&mut self) -> Option<&str> {
        let capacity = self.capacity();
        if capacity == 0 {
            return None;
        }
        let prev = match self.current_entry {
            None | Some(0) => capacity - 1,
            Some(current) => current - 1,
        };
        self.current_entry = Some(prev);
        self.entries.get(prev).map(String::as_str)
    }

    /// Stops browsing. Called at the start of every line read.
    pub fn reset_browsing(&mut self) { self.current_entry = None; }

    #[must_use]
    pub fn current_entry(&self) -> Option<usize> { self.current_entry }

    /// The slot most recently written.
    #[must_use]
    pub fn last_entry(&self) -> usize { self.last_entry }

    /// Raw slot contents, in slot order. Unwritten slots are empty strings.
    #[must_use]
    pub fn slots(&self) -> &[String] { &self.entries }

    /// Non empty entries from oldest to newest.
    pub fn iter_chronological(&self) -> impl Iterator<Item = &str> {
        let capacity = self.capacity();
        (1..=capacity)
            .map(move |offset| (self.last_entry + offset) % capacity)
            .filter_map(|slot| self.entries.get(slot))
            .filter(|it| !it.is_empty())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capacity_three_overwrites_oldest() {
        let mut history = History::new(3);
        for line in ["a", "b", "c", "d"] {
            history.add(line);
        }

        assert_eq!(history.slots(), &["c", "d", "b"]);
        assert_eq!(history.last_entry(), 1);
        assert!(!history.slots().iter().any(|it| it == "a"));
        assert_eq!(
            history.iter_chronological().collect::<Vec<_>>(),
            vec!["b", "c", "d"]
        );
    }

    #[test]
    fn test_recall_next_wraps_modulo_capacity() {
        let mut history = History::new(3);
        for line in ["a", "b", "c", "d"] {
            history.add(line);
        }

        assert_eq!(history.recall_next(), Some("c"));
        assert_eq!(history.recall_next(), Some("d"));
        assert_eq!(history.recall_next(), Some("b"));
        assert_eq!(history.recall_next(), Some("c"));
        assert_eq!(history.current_entry(), Some(0));
    }

    #[test]
    fn test_recall_prev_wraps_modulo_capacity() {
        let mut history = History::new(3);
        for line in ["a", "b", "c", "d"] {
            history.add(line);
        }

        assert_eq!(history.recall_prev(), Some("b"));
        assert_eq!(history.recall_prev(), Some("d"));
        assert_eq!(history.recall_prev(), Some("c"));
        assert_eq!(history.recall_prev(), Some("b"));
        assert_eq!(history.current_entry(), Some(2));
    }

    #[test]
    fn test_recall_does_not_reorder() {
        let mut history = History::new(2);
        history.add("x");
        let before = history.slots().to_vec();
        history.recall_next();
        history.recall_prev();
        history.recall_prev();
        assert_eq!(history.slots(), before.as_slice());
    }

    #[test]
    fn test_zero_capacity() {
        let mut history = History::new(0);
        history.add("ignored");
        assert_eq!(history.capacity(), 0);
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.recall_prev(), None);
        assert_eq!(history.iter_chronological().count(), 0);
    }

    #[test]
    fn test_set_capacity_discards_entries() {
        let mut history = History::new(3);
        history.add("a");
        history.recall_next();
        history.set_capacity(5);
        assert_eq!(history.capacity(), 5);
        assert_eq!(history.current_entry(), None);
        assert_eq!(history.iter_chronological().count(), 0);
    }

    #[test]
    fn test_reset_browsing() {
        let mut history = History::new(3);
        history.add("a");
        history.recall_next();
        history.reset_browsing();
        assert_eq!(history.current_entry(), None);
        assert_eq!(history.recall_next(), Some(""));
    }
}
