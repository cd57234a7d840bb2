// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::DriverError;
use std::fmt::Debug;

/// Terminal attributes captured by [`TerminalDriver::enter_raw_mode`], handed back
/// to [`TerminalDriver::restore`].
#[derive(Debug, Clone)]
pub enum SavedMode {
    /// Original termios settings.
    #[cfg(unix)]
    Termios(rustix::termios::Termios),
    /// Crossterm keeps the original console mode itself.
    Console,
    /// Nothing was changed.
    Inert,
}

/// Everything the editor needs from a terminal.
///
/// Coordinates: `abs_x` is a 0 based column, `rel_y` is a row offset from the
/// current row (negative is up). The editor never asks for an absolute row, so it
/// works wherever the prompt happens to be on screen.
///
/// Output may be buffered; [`TerminalDriver::flush`] is called once per redraw.
pub trait TerminalDriver: Debug {
    /// Raw mode: no echo, no canonical line buffering, no signal keys, no output post
    /// processing, reads return after 1 byte.
    ///
    /// # Errors
    ///
    /// [`DriverError::EnterRawMode`] if the attributes can't be read or set.
    fn enter_raw_mode(&mut self) -> Result<SavedMode, DriverError>;

    /// # Errors
    ///
    /// [`DriverError::Restore`] if the attributes can't be set.
    fn restore(&mut self, saved: SavedMode) -> Result<(), DriverError>;

    /// Width of the terminal. `0` means unknown.
    ///
    /// # Errors
    ///
    /// [`DriverError::WindowSize`] if the size query fails.
    fn columns(&mut self) -> Result<usize, DriverError>;

    /// # Errors
    ///
    /// [`DriverError::Output`] if writing fails.
    fn move_cursor(&mut self, abs_x: usize, rel_y: isize) -> Result<(), DriverError>;

    /// # Errors
    ///
    /// [`DriverError::Output`] if writing fails.
    fn erase_to_screen_end(&mut self) -> Result<(), DriverError>;

    /// Clears the screen and homes the cursor.
    ///
    /// # Errors
    ///
    /// [`DriverError::Output`] if writing fails.
    fn clear_screen(&mut self) -> Result<(), DriverError>;

    /// Writes text as is. `"\n"` moves down one row without returning the carriage.
    ///
    /// # Errors
    ///
    /// [`DriverError::Output`] if writing fails.
    fn write_text(&mut self, text: &str) -> Result<(), DriverError>;

    /// # Errors
    ///
    /// [`DriverError::Output`] if writing fails.
    fn flush(&mut self) -> Result<(), DriverError>;
}

/// [`crate::PosixTerminal`] on Unix, [`crate::CrosstermTerminal`] elsewhere. The
/// choice is made at compile time, since the termios backend only builds on Unix.
#[must_use]
pub fn default_terminal() -> Box<dyn TerminalDriver> {
    #[cfg(unix)]
    {
        Box::new(crate::PosixTerminal::default())
    }

    #[cfg(not(unix))]
    {
        Box::new(crate::CrosstermTerminal::default())
    }
}
