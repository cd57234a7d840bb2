// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal driver backed by crossterm. On Windows this drives the console API,
//! elsewhere it emits ANSI sequences through crossterm's command types.

use crate::{DriverError, SavedMode, TerminalDriver};
use crossterm::{cursor::{MoveDown, MoveTo, MoveToColumn, MoveUp},
                queue,
                terminal::{self, Clear, ClearType}};
use std::{fmt::{Debug, Formatter},
          io::{self, Write}};

pub struct CrosstermTerminal {
    output: Box<dyn Write>,
}

impl Debug for CrosstermTerminal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrosstermTerminal").finish_non_exhaustive()
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self { Self::new(Box::new(io::stdout())) }
}

impl CrosstermTerminal {
    #[must_use]
    pub fn new(output: Box<dyn Write>) -> Self { Self { output } }
}

/// Crossterm commands take `u16`.
fn clamp_u16(n: usize) -> u16 { u16::try_from(n).unwrap_or(u16::MAX) }

impl TerminalDriver for CrosstermTerminal {
    fn enter_raw_mode(&mut self) -> Result<SavedMode, DriverError> {
        terminal::enable_raw_mode().map_err(DriverError::EnterRawMode)?;
        Ok(SavedMode::Console)
    }

    fn restore(&mut self, saved: SavedMode) -> Result<(), DriverError> {
        match saved {
            SavedMode::Console => {
                terminal::disable_raw_mode().map_err(DriverError::Restore)
            }
            _ => Ok(()),
        }
    }

    fn columns(&mut self) -> Result<usize, DriverError> {
        let (cols, _rows) = terminal::size().map_err(DriverError::WindowSize)?;
        Ok(usize::from(cols))
    }

    fn move_cursor(&mut self, abs_x: usize, rel_y: isize) -> Result<(), DriverError> {
        queue!(self.output, MoveToColumn(clamp_u16(abs_x)))
            .map_err(DriverError::Output)?;
        let rows = clamp_u16(rel_y.unsigned_abs());
        match rel_y.cmp(&0) {
            std::cmp::Ordering::Greater => {
                queue!(self.output, MoveDown(rows)).map_err(DriverError::Output)
            }
            std::cmp::Ordering::Less => {
                queue!(self.output, MoveUp(rows)).map_err(DriverError::Output)
            }
            std::cmp::Ordering::Equal => Ok(()),
        }
    }

    fn erase_to_screen_end(&mut self) -> Result<(), DriverError> {
        queue!(self.output, Clear(ClearType::FromCursorDown)).map_err(DriverError::Output)
    }

    fn clear_screen(&mut self) -> Result<(), DriverError> {
        queue!(self.output, MoveTo(0, 0), Clear(ClearType::All))
            .map_err(DriverError::Output)
    }

    fn write_text(&mut self, text: &str) -> Result<(), DriverError> {
        self.output
            .write_all(text.as_bytes())
            .map_err(DriverError::Output)
    }

    fn flush(&mut self) -> Result<(), DriverError> {
        self.output.flush().map_err(DriverError::Output)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::test_fixtures::StdoutMock;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_sequences() {
        let stdout_mock = StdoutMock::default();
        let mut terminal = CrosstermTerminal::new(Box::new(stdout_mock.clone()));

        terminal.move_cursor(0, 2).unwrap();
        terminal.move_cursor(3, 0).unwrap();
        terminal.erase_to_screen_end().unwrap();
        terminal.flush().unwrap();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[1G\x1b[2B\x1b[4G\x1b[J"
        );
    }
}
