// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The text being edited, as a sequence of Unicode scalar values plus a cursor.
//!
//! Positions are scalar indices, not byte offsets. One scalar occupies one terminal
//! column; combining characters and wide glyphs are not accounted for.

use std::fmt::{Display, Formatter};

/// Invariant: `0 <= cursor <= len()`. Every mutating method re-establishes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl EditBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn len(&self) -> usize { self.chars.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.chars.is_empty() }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    /// Moves the cursor, clamping to `len()`.
    pub fn set_cursor(&mut self, pos: usize) { self.cursor = pos.min(self.len()); }

    #[must_use]
    pub fn content_as_text(&self) -> String { self.chars.iter().collect() }

    #[must_use]
    pub fn text_before_cursor(&self) -> String {
        self.chars[..self.cursor].iter().collect()
    }

    /// Inserts `ch` at `pos` (clamped to `len()`).
    pub fn insert_char(&mut self, pos: usize, ch: char) {
        let pos = pos.min(self.len());
        self.chars.insert(pos, ch);
    }

    /// Inserts `text` at `pos` (clamped to `len()`). Returns the number of scalars
    /// inserted, so the caller can advance the cursor past them.
    pub fn insert_str(&mut self, pos: usize, text: &str) -> usize {
        let pos = pos.min(self.len());
        let before = self.len();
        self.chars.splice(pos..pos, text.chars());
        self.len() - before
    }

    /// Removes the scalar at `pos`. No-op if `pos >= len()`.
    pub fn remove_at(&mut self, pos: usize) -> Option<char> {
        if pos >= self.len() {
            return None;
        }
        let removed = self.chars.remove(pos);
        self.clamp_cursor();
        Some(removed)
    }

    /// Drops everything from `pos` to the end.
    pub fn truncate_from(&mut self, pos: usize) {
        self.chars.truncate(pos);
        self.clamp_cursor();
    }

    /// Drops everything before `pos`. The cursor goes to 0.
    pub fn truncate_until(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        self.chars.drain(..pos);
        self.cursor = 0;
    }

    /// Swaps the scalar before `pos` with the one at `pos`. At the end of the buffer
    /// the last two scalars are swapped instead. Returns `false` when nothing moved.
    pub fn transpose_at(&mut self, pos: usize) -> bool {
        if pos == 0 || self.len() < 2 {
            return false;
        }
        let pos = pos.min(self.len() - 1);
        self.chars.swap(pos - 1, pos);
        true
    }

    /// Replaces the whole content and puts the cursor at the end.
    pub fn replace_all(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.len();
    }

    pub fn reset(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Returns `len` scalars starting at `start`, clamped to the content.
    #[must_use]
    pub fn slice_as_text(&self, start: usize, len: usize) -> String {
        let start = start.min(self.len());
        let end = start.saturating_add(len).min(self.len());
        self.chars[start..end].iter().collect()
    }

    fn clamp_cursor(&mut self) { self.cursor = self.cursor.min(self.len()); }
}

impl Display for EditBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn buffer_with(text: &str) -> EditBuffer {
        let mut it = EditBuffer::new();
        it.replace_all(text);
        it
    }

    #[test]
    fn test_insert_grows_by_scalar_count() {
        let mut buf = buffer_with("héllo");
        let inserted = buf.insert_str(1, "日本");
        assert_eq!(inserted, 2);
        assert_eq!(buf.len(), 7);
        assert_eq!(buf.content_as_text(), "h日本éllo");

        buf.insert_char(buf.len(), '!');
        assert_eq!(buf.to_string(), "h日本éllo!");
    }

    #[test]
    fn test_insert_then_remove_is_identity() {
        let mut buf = buffer_with("abc");
        buf.insert_char(1, 'x');
        assert_eq!(buf.remove_at(1), Some('x'));
        assert_eq!(buf.content_as_text(), "abc");
    }

    #[test]
    fn test_remove_past_end_is_noop() {
        let mut buf = buffer_with("abc");
        assert_eq!(buf.remove_at(3), None);
        assert_eq!(buf.remove_at(10), None);
        assert_eq!(buf.content_as_text(), "abc");
    }

    #[test]
    fn test_remove_keeps_cursor_in_bounds() {
        let mut buf = buffer_with("ab");
        assert_eq!(buf.cursor(), 2);
        buf.remove_at(1);
        assert_eq!(buf.cursor(), 1);
    }

    #[test_case("abcd", 0, "abcd" ; "at zero is noop")]
    #[test_case("abcd", 2, "acbd" ; "middle swaps previous and current")]
    #[test_case("abcd", 4, "abdc" ; "at end swaps last pair")]
    #[test_case("a", 1, "a" ; "single char is noop")]
    fn test_transpose(text: &str, pos: usize, expected: &str) {
        let mut buf = buffer_with(text);
        buf.transpose_at(pos);
        assert_eq!(buf.content_as_text(), expected);
    }

    #[test]
    fn test_transpose_middle_twice_is_identity() {
        let mut buf = buffer_with("abcd");
        buf.transpose_at(2);
        buf.transpose_at(2);
        assert_eq!(buf.content_as_text(), "abcd");
    }

    #[test]
    fn test_truncate_from() {
        let mut buf = buffer_with("hello world");
        buf.truncate_from(5);
        assert_eq!(buf.content_as_text(), "hello");
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn test_truncate_until_resets_cursor() {
        let mut buf = buffer_with("hello world");
        buf.set_cursor(6);
        buf.truncate_until(6);
        assert_eq!(buf.content_as_text(), "world");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut buf = buffer_with("abc");
        buf.set_cursor(99);
        assert_eq!(buf.cursor(), 3);
        assert_eq!(buf.text_before_cursor(), "abc");
        buf.set_cursor(1);
        assert_eq!(buf.text_before_cursor(), "a");
    }

    #[test]
    fn test_slice_as_text() {
        let buf = buffer_with("abcdef");
        assert_eq!(buf.slice_as_text(2, 3), "cde");
        assert_eq!(buf.slice_as_text(4, 10), "ef");
        assert_eq!(buf.slice_as_text(9, 1), "");
    }

    #[test]
    fn test_reset() {
        let mut buf = buffer_with("abc");
        buf.reset();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }
}
