// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr tcgetwinsize isatty

//! Unix/Linux/macOS terminal driver using rustix's safe termios API, with cursor
//! movement written as raw CSI sequences.

use super::ansi::{CsiSequence, EraseDisplayMode, move_cursor_sequences};
use crate::{DriverError, SavedMode, TerminalDriver};
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions}};
use std::{fmt::{Debug, Formatter},
          fs::File,
          io::{self, Write}};

/// Represents either stdin or `/dev/tty` for terminal operations.
///
/// stdin is used when it is a tty (normal terminal usage). When it is redirected
/// (e.g. piped input) the controlling terminal is opened via `/dev/tty`.
enum TerminalFd {
    Stdin(io::Stdin),
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// # Errors
///
/// Returns an error if stdin is not a tty and `/dev/tty` cannot be opened.
fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        Ok(TerminalFd::Stdin(stdin))
    } else {
        let file = File::options().read(true).write(true).open("/dev/tty")?;
        Ok(TerminalFd::DevTty(file))
    }
}

/// POSIX driver. Terminal attributes go through termios on the controlling terminal,
/// output goes to `output` (stdout unless replaced for testing).
pub struct PosixTerminal {
    output: Box<dyn Write>,
}

impl Debug for PosixTerminal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PosixTerminal").finish_non_exhaustive()
    }
}

impl Default for PosixTerminal {
    fn default() -> Self { Self::new(Box::new(io::stdout())) }
}

impl PosixTerminal {
    #[must_use]
    pub fn new(output: Box<dyn Write>) -> Self { Self { output } }

    fn emit(&mut self, seq: CsiSequence) -> Result<(), DriverError> {
        write!(self.output, "{seq}").map_err(DriverError::Output)
    }
}

impl TerminalDriver for PosixTerminal {
    fn enter_raw_mode(&mut self) -> Result<SavedMode, DriverError> {
        let fd = get_terminal_fd().map_err(DriverError::EnterRawMode)?;

        let original = termios::tcgetattr(&fd)
            .map_err(|errno| DriverError::EnterRawMode(errno.into()))?;

        // make_raw() matches cfmakeraw: clears ICANON, ECHO, ISIG, IEXTEN, OPOST and
        // the input translations, sets CS8, VMIN=1, VTIME=0.
        let mut raw = original.clone();
        raw.make_raw();

        // Flush is TCSAFLUSH: pending input typed before the prompt is dropped.
        termios::tcsetattr(&fd, OptionalActions::Flush, &raw)
            .map_err(|errno| DriverError::EnterRawMode(errno.into()))?;

        Ok(SavedMode::Termios(original))
    }

    fn restore(&mut self, saved: SavedMode) -> Result<(), DriverError> {
        let SavedMode::Termios(original) = saved else {
            return Ok(());
        };
        let fd = get_terminal_fd().map_err(DriverError::Restore)?;
        termios::tcsetattr(&fd, OptionalActions::Flush, &original)
            .map_err(|errno| DriverError::Restore(errno.into()))
    }

    fn columns(&mut self) -> Result<usize, DriverError> {
        let fd = get_terminal_fd().map_err(DriverError::WindowSize)?;
        let winsize = termios::tcgetwinsize(&fd)
            .map_err(|errno| DriverError::WindowSize(errno.into()))?;
        Ok(usize::from(winsize.ws_col))
    }

    fn move_cursor(&mut self, abs_x: usize, rel_y: isize) -> Result<(), DriverError> {
        for seq in move_cursor_sequences(abs_x, rel_y) {
            self.emit(seq)?;
        }
        Ok(())
    }

    fn erase_to_screen_end(&mut self) -> Result<(), DriverError> {
        self.emit(CsiSequence::EraseDisplay(EraseDisplayMode::ToEnd))
    }

    fn clear_screen(&mut self) -> Result<(), DriverError> {
        self.emit(CsiSequence::CursorHome)?;
        self.emit(CsiSequence::EraseDisplay(EraseDisplayMode::All))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::StdoutMock;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_sequences() {
        let stdout_mock = StdoutMock::default();
        let mut terminal = PosixTerminal::new(Box::new(stdout_mock.clone()));

        terminal.write_text("$ ").unwrap();
        terminal.move_cursor(2, -1).unwrap();
        terminal.erase_to_screen_end().unwrap();
        terminal.clear_screen().unwrap();
        terminal.flush().unwrap();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "$ \x1b[3G\x1b[1A\x1b[0J\x1b[H\x1b[2J"
        );
    }

    #[test]
    fn test_restore_of_foreign_mode_is_noop() {
        let mut terminal = PosixTerminal::new(Box::new(StdoutMock::default()));
        assert!(terminal.restore(SavedMode::Inert).is_ok());
    }
}
