// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::VirtualScreen;
use crate::{DriverError, SavedMode, TerminalDriver};
use std::{io,
          sync::{Arc, Mutex, MutexGuard}};

#[derive(Debug)]
pub struct MockTerminalState {
    pub screen: VirtualScreen,
    /// What [`TerminalDriver::columns`] reports. May differ from the screen width to
    /// exercise the fallback.
    pub reported_columns: usize,
    pub is_raw: bool,
    pub raw_mode_enter_count: usize,
    pub restore_count: usize,
    pub flush_count: usize,
    pub fail_raw_mode: bool,
    pub fail_restore: bool,
    pub fail_writes: bool,
}

/// [`TerminalDriver`] that draws onto a [`VirtualScreen`]. Clones share state, so a
/// test can hand one clone to a session and inspect the other.
#[derive(Debug, Clone)]
pub struct MockTerminal {
    state: Arc<Mutex<MockTerminalState>>,
}

impl MockTerminal {
    pub fn new(cols: usize) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockTerminalState {
                screen: VirtualScreen::new(cols),
                reported_columns: cols,
                is_raw: false,
                raw_mode_enter_count: 0,
                restore_count: 0,
                flush_count: 0,
                fail_raw_mode: false,
                fail_restore: false,
                fail_writes: false,
            })),
        }
    }

    pub fn state(&self) -> MutexGuard<'_, MockTerminalState> { self.state.lock().unwrap() }

    pub fn lines(&self) -> Vec<String> { self.state().screen.lines() }

    pub fn cursor(&self) -> (usize, usize) { self.state().screen.cursor() }

    fn output(&mut self) -> Result<MutexGuard<'_, MockTerminalState>, DriverError> {
        let state = self.state();
        if state.fail_writes {
            return Err(DriverError::Output(io::Error::other("mock write failure")));
        }
        Ok(state)
    }
}

impl TerminalDriver for MockTerminal {
    fn enter_raw_mode(&mut self) -> Result<SavedMode, DriverError> {
        let mut state = self.state();
        if state.fail_raw_mode {
            return Err(DriverError::EnterRawMode(io::Error::other("not a tty")));
        }
        state.is_raw = true;
        state.raw_mode_enter_count += 1;
        Ok(SavedMode::Inert)
    }

    fn restore(&mut self, _saved: SavedMode) -> Result<(), DriverError> {
        let mut state = self.state();
        state.restore_count += 1;
        if state.fail_restore {
            return Err(DriverError::Restore(io::Error::other("mock restore failure")));
        }
        state.is_raw = false;
        Ok(())
    }

    fn columns(&mut self) -> Result<usize, DriverError> { Ok(self.state().reported_columns) }

    fn move_cursor(&mut self, abs_x: usize, rel_y: isize) -> Result<(), DriverError> {
        let mut state = self.output()?;
        state.screen.move_to_column(abs_x);
        state.screen.move_rows(rel_y);
        Ok(())
    }

    fn erase_to_screen_end(&mut self) -> Result<(), DriverError> {
        self.output()?.screen.erase_to_end();
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), DriverError> {
        self.output()?.screen.clear();
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DriverError> {
        self.output()?.screen.print(text);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DriverError> {
        self.output()?.flush_count += 1;
        Ok(())
    }
}
