// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A tiny terminal emulator, just enough to check what the renderer leaves on screen.
//!
//! It models the VT100 "deferred wrap": printing into the last column leaves the
//! cursor there with a pending wrap flag, and the *next* printable character moves
//! to the start of the following row. Any cursor movement clears the flag. `\n` is a
//! bare line feed (raw mode has output post processing off), so it moves down one row
//! and keeps the column. Rows grow without bound; there is no scrolling.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualScreen {
    pub cols: usize,
    pub rows: Vec<Vec<char>>,
    pub row: usize,
    pub col: usize,
    pub pending_wrap: bool,
}

impl VirtualScreen {
    pub fn new(cols: usize) -> Self {
        Self {
            cols,
            rows: vec![vec![' '; cols]],
            row: 0,
            col: 0,
            pending_wrap: false,
        }
    }

    fn ensure_row(&mut self, row: usize) {
        while self.rows.len() <= row {
            self.rows.push(vec![' '; self.cols]);
        }
    }

    pub fn print(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\n' => {
                    self.row += 1;
                    self.pending_wrap = false;
                    self.ensure_row(self.row);
                }
                '\r' => {
                    self.col = 0;
                    self.pending_wrap = false;
                }
                _ => self.put_char(ch),
            }
        }
    }

    fn put_char(&mut self, ch: char) {
        if self.pending_wrap {
            self.row += 1;
            self.col = 0;
            self.pending_wrap = false;
        }
        self.ensure_row(self.row);
        self.rows[self.row][self.col] = ch;
        if self.col + 1 == self.cols {
            self.pending_wrap = true;
        } else {
            self.col += 1;
        }
    }

    pub fn move_to_column(&mut self, col: usize) {
        self.col = col.min(self.cols - 1);
        self.pending_wrap = false;
    }

    pub fn move_rows(&mut self, rel_y: isize) {
        self.row = self.row.saturating_add_signed(rel_y);
        self.pending_wrap = false;
        self.ensure_row(self.row);
    }

    /// ED 0: from the cursor (inclusive) to the end of the screen.
    pub fn erase_to_end(&mut self) {
        self.ensure_row(self.row);
        for cell in &mut self.rows[self.row][self.col..] {
            *cell = ' ';
        }
        for row in &mut self.rows[self.row + 1..] {
            row.fill(' ');
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new(self.cols);
    }

    /// Rows with trailing blanks trimmed, trailing empty rows dropped.
    pub fn lines(&self) -> Vec<String> {
        let mut acc: Vec<String> = self
            .rows
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        while acc.last().is_some_and(String::is_empty) {
            acc.pop();
        }
        acc
    }

    pub fn cursor(&self) -> (usize, usize) { (self.col, self.row) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deferred_wrap() {
        let mut screen = VirtualScreen::new(4);
        screen.print("abcd");
        assert_eq!(screen.cursor(), (3, 0));
        assert!(screen.pending_wrap);
        screen.print("e");
        assert_eq!(screen.lines(), vec!["abcd", "e"]);
        assert_eq!(screen.cursor(), (1, 1));
    }

    #[test]
    fn test_line_feed_keeps_column() {
        let mut screen = VirtualScreen::new(10);
        screen.print("ab\ncd");
        assert_eq!(screen.lines(), vec!["ab", "  cd"]);
    }

    #[test]
    fn test_erase_to_end() {
        let mut screen = VirtualScreen::new(5);
        screen.print("hello\r\nworld");
        screen.move_rows(-1);
        screen.move_to_column(2);
        screen.erase_to_end();
        assert_eq!(screen.lines(), vec!["he"]);
    }
}
