// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DriverError, SavedMode, TerminalDriver};
use std::ops::{Deref, DerefMut};

/// RAII guard that holds a [`TerminalDriver`] in raw mode and restores it when
/// dropped. This covers early returns, `?` propagation and panics alike.
///
/// Use [`RawModeGuard::finish`] on the happy path to observe restore errors;
/// [`Drop`] can only log them.
///
/// ```no_run
/// use r3bl_line_editor::{RawModeGuard, default_terminal};
///
/// # fn main() -> Result<(), r3bl_line_editor::DriverError> {
/// let mut terminal = default_terminal();
/// let mut guard = RawModeGuard::new(terminal.as_mut())?;
/// guard.write_text("raw!")?;
/// guard.finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RawModeGuard<'a> {
    driver: &'a mut dyn TerminalDriver,
    saved: Option<SavedMode>,
}

impl<'a> RawModeGuard<'a> {
    /// Enters raw mode.
    ///
    /// # Errors
    ///
    /// Whatever [`TerminalDriver::enter_raw_mode`] returns. The terminal is
    /// untouched in that case.
    pub fn new(driver: &'a mut dyn TerminalDriver) -> Result<Self, DriverError> {
        let saved = driver.enter_raw_mode()?;
        Ok(Self {
            driver,
            saved: Some(saved),
        })
    }

    /// Restores the terminal now.
    ///
    /// # Errors
    ///
    /// Whatever [`TerminalDriver::restore`] returns.
    pub fn finish(mut self) -> Result<(), DriverError> {
        match self.saved.take() {
            Some(saved) => self.driver.restore(saved),
            None => Ok(()),
        }
    }
}

impl<'a> Deref for RawModeGuard<'a> {
    type Target = dyn TerminalDriver + 'a;

    fn deref(&self) -> &Self::Target { &*self.driver }
}

impl DerefMut for RawModeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut *self.driver }
}

impl Drop for RawModeGuard<'_> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take()
            && let Err(err) = self.driver.restore(saved)
        {
            tracing::warn!(
                message = "failed to restore terminal on drop",
                error = ?err
            );
        }
    }
}
