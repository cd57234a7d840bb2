// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Redraws the prompt and the edit buffer, and puts the cursor where the user
//! expects it, when the text wraps across several rows.
//!
//! All vertical movement is relative, so the block can start on any screen row. The
//! renderer only has to remember how far below the prompt row it left the cursor
//! ([`RenderState::y`]) and how many rows the block spans ([`RenderState::lines`]).
//!
//! ```text
//!  cols = 10, prompt = "$ ", content = "abcdefghijkl", cursor = 9
//!
//!       0 1 2 3 4 5 6 7 8 9
//!  y=0  $ _ a b c d e f g h     <- first row fits cols - prompt_len = 8
//!  y=1  i j k l                 <- lines = 1
//!           ^ cursor: offset 2 + 9 = 11, x = 11 % 10 = 1, y = 11 / 10 = 1
//! ```
//!
//! When the last row is filled exactly, the terminal cursor sits in the last column
//! with a pending wrap. A line feed is emitted so the cursor has a real row to land
//! on, and that empty row is counted in `lines`.

use crate::{DriverError, EditBuffer, TerminalDriver};

/// Where the last redraw left things.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    /// Rows printed below the prompt row.
    pub lines: usize,
    /// Cursor row, relative to the prompt row.
    pub y: usize,
    /// Terminal width used for the layout.
    pub cols: usize,
    /// The last row is the empty one added after an exactly full row.
    pub trailing_blank_row: bool,
}

/// Column and row (relative to the prompt row) of the cursor.
#[must_use]
pub fn cursor_placement(prompt_len: usize, cursor: usize, cols: usize) -> (usize, usize) {
    let offset = prompt_len + cursor;
    (offset % cols, offset / cols)
}

fn signed(n: usize) -> isize { isize::try_from(n).unwrap_or(isize::MAX) }

#[derive(Debug)]
pub struct Renderer {
    state: RenderState,
}

impl Renderer {
    #[must_use]
    pub fn new(cols: usize) -> Self {
        Self {
            state: RenderState {
                cols: cols.max(1),
                ..RenderState::default()
            },
        }
    }

    #[must_use]
    pub fn state(&self) -> RenderState { self.state }

    /// Starts a fresh block at the current cursor position. Used at the start of a
    /// read, after the screen is cleared, and after candidates are listed.
    pub fn reset(&mut self, cols: usize) { *self = Self::new(cols); }

    /// Repaints the whole block.
    ///
    /// # Errors
    ///
    /// Any [`DriverError`] from the terminal.
    pub fn redraw(
        &mut self,
        term: &mut dyn TerminalDriver,
        prompt: &str,
        buffer: &EditBuffer,
    ) -> Result<(), DriverError> {
        let cols = self.state.cols;
        let prompt_len = prompt.chars().count();
        let len = buffer.len();

        // Move to the start of the prompt row.
        term.move_cursor(0, -signed(self.state.y))?;
        term.write_text(prompt)?;

        let first_row_capacity = cols.saturating_sub(prompt_len);
        let first_row_len = len.min(first_row_capacity);
        term.write_text(&buffer.slice_as_text(0, first_row_len))?;
        let mut wrap_cursor = first_row_len == first_row_capacity;

        let mut lines = 0;
        let mut printed = first_row_len;
        while printed < len {
            let row_len = (len - printed).min(cols);
            term.write_text(&buffer.slice_as_text(printed, row_len))?;
            wrap_cursor = row_len == cols;
            printed += row_len;
            lines += 1;
        }

        // Leave the pending wrap before erasing, otherwise the erase would take out
        // the character in the last column.
        if wrap_cursor {
            term.write_text("\n")?;
            term.move_cursor(0, 0)?;
            lines += 1;
        }
        term.erase_to_screen_end()?;

        let (x, new_y) = cursor_placement(prompt_len, buffer.cursor(), cols);
        term.move_cursor(x, signed(new_y) - signed(lines))?;
        term.flush()?;

        self.state.lines = lines;
        self.state.y = new_y;
        self.state.trailing_blank_row = wrap_cursor;

        if crate::DEBUG_LINE_EDITOR {
            tracing::debug! {
                message = "redraw",
                state = ?self.state,
                cursor = buffer.cursor(),
                len = len,
            };
        }

        Ok(())
    }

    /// Moves to column 0 of a fresh row just below the block. The block is left on
    /// screen as is. The next redraw starts a new block from there.
    ///
    /// # Errors
    ///
    /// Any [`DriverError`] from the terminal.
    pub fn move_below_block(
        &mut self,
        term: &mut dyn TerminalDriver,
    ) -> Result<(), DriverError> {
        term.move_cursor(0, signed(self.state.lines) - signed(self.state.y))?;
        if !self.state.trailing_blank_row {
            term.write_text("\n")?;
            term.move_cursor(0, 0)?;
        }
        term.flush()?;
        self.reset(self.state.cols);
        Ok(())
    }

    /// Lists `candidates` one per row under the block, then redraws the prompt and
    /// buffer below them.
    ///
    /// # Errors
    ///
    /// Any [`DriverError`] from the terminal.
    pub fn print_candidates(
        &mut self,
        term: &mut dyn TerminalDriver,
        candidates: &[String],
        prompt: &str,
        buffer: &EditBuffer,
    ) -> Result<(), DriverError> {
        self.move_below_block(term)?;
        for candidate in candidates {
            term.write_text(candidate)?;
            term.write_text("\n")?;
            term.move_cursor(0, 0)?;
        }
        self.redraw(term, prompt, buffer)
    }

    /// Clears the screen and redraws at the top.
    ///
    /// # Errors
    ///
    /// Any [`DriverError`] from the terminal.
    pub fn clear_screen(
        &mut self,
        term: &mut dyn TerminalDriver,
        prompt: &str,
        buffer: &EditBuffer,
    ) -> Result<(), DriverError> {
        term.clear_screen()?;
        self.reset(self.state.cols);
        self.redraw(term, prompt, buffer)
    }
}
