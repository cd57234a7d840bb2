// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod ansi;
pub mod crossterm_terminal;
#[cfg(unix)]
pub mod posix_terminal;
pub mod raw_mode_guard;
pub mod term_check;
pub mod terminal_driver;

// Re-export.
pub use crossterm_terminal::*;
#[cfg(unix)]
pub use posix_terminal::*;
pub use raw_mode_guard::*;
pub use term_check::*;
pub use terminal_driver::*;
