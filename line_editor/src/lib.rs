// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios readline

//! # `r3bl_line_editor`
//!
//! A synchronous line editor for shells and REPLs. It reads one line of input from
//! the keyboard while letting the user move the cursor, insert and delete text,
//! recall previous lines, and complete words with <kbd>Tab</kbd>. Lines longer than
//! the terminal width wrap across rows, and the cursor stays exactly where the
//! user expects it.
//!
//! ```no_run
//! use r3bl_line_editor::{LineSession, LineSessionConfig, ReadlineEvent,
//!                        SimpleCompleter};
//!
//! # fn main() -> miette::Result<()> {
//! let mut session = LineSession::new(LineSessionConfig::default())
//!     .with_completer(SimpleCompleter::new(["cat", "catch", "dog"]));
//!
//! loop {
//!     match session.read_line("$ ")? {
//!         ReadlineEvent::Line(line) => {
//!             session.add_history(&line);
//!             println!("you typed: {line}");
//!         }
//!         ReadlineEvent::Cancelled => continue,
//!         ReadlineEvent::Eof => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//!  bytes ─► CharReader ─► KeyDispatcher ─► Operation
//!                                            │
//!          ┌─────────────────┬───────────────┼──────────────────┐
//!          ▼                 ▼               ▼                  ▼
//!     EditBuffer          History     CompletionEngine     (terminate)
//!          │                 │               │
//!          └─────────────────┴───────┬───────┘
//!                                    ▼
//!                         Renderer ─► TerminalDriver
//! ```
//!
//! - [`LineSession`] owns every piece of state. There are no globals.
//! - [`TerminalDriver`] is the seam to the real terminal. [`PosixTerminal`] uses
//!   [`rustix`] termios and raw CSI output, [`CrosstermTerminal`] uses [`crossterm`]
//!   (and the console API on Windows). [`default_terminal`] picks one.
//! - Raw mode is held by a [`RawModeGuard`] so the terminal is restored on every
//!   exit path, including panics.
//! - When `TERM` names a terminal that can't handle escape sequences (`dumb`,
//!   `cons25`), the session skips editing and reads a plain line instead.
//!
//! # Key bindings
//!
//! | Key                   | Action                                  |
//! |-----------------------|-----------------------------------------|
//! | `Ctrl+A`, `Home`      | Move to start of line                   |
//! | `Ctrl+E`, `End`       | Move to end of line                     |
//! | `Ctrl+B`, `Left`      | Move left                               |
//! | `Ctrl+F`, `Right`     | Move right                              |
//! | `Ctrl+H`, `Backspace` | Delete before cursor                    |
//! | `Delete`              | Delete under cursor                     |
//! | `Ctrl+D`              | Delete under cursor, or end of input    |
//! | `Ctrl+K`              | Delete to end of line                   |
//! | `Ctrl+U`              | Delete to start of line                 |
//! | `Ctrl+T`              | Transpose characters                    |
//! | `Ctrl+L`              | Clear screen                            |
//! | `Ctrl+P`, `Up`/`Down` | Recall history                          |
//! | `Tab`                 | Complete, a second press lists matches  |
//! | `Ctrl+C`              | Cancel the line                         |
//! | `Enter`, `Ctrl+O`     | Submit the line                         |
//!
//! [`rustix`]: https://docs.rs/rustix
//! [`crossterm`]: crossterm

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Per keystroke and per redraw debug logging.
pub const DEBUG_LINE_EDITOR: bool = true;

// Attach modules (re-exported below to provide clean public API).
pub mod completion;
pub mod config;
pub mod edit_buffer;
pub mod error;
pub mod history;
pub mod input;
pub mod key_dispatcher;
pub mod line_session;
pub mod log;
pub mod renderer;
pub mod terminal;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use completion::*;
pub use config::*;
pub use edit_buffer::*;
pub use error::*;
pub use history::*;
pub use input::*;
pub use key_dispatcher::*;
pub use line_session::*;
pub use log::*;
pub use renderer::*;
pub use terminal::*;
