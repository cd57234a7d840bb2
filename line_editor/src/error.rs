// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;
use std::io;

/// Everything that can go wrong while reading a line. Note that the user cancelling
/// the line (`Ctrl+C`) or closing the input (`Ctrl+D`) are *not* errors, they are
/// reported as [`crate::ReadlineEvent`] variants.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ReadlineError {
    /// Reading from the input stream failed. The error is passed through unmodified.
    #[error("failed to read input")]
    #[diagnostic(
        code(r3bl_line_editor::input_read),
        help("The input stream (stdin or /dev/tty) returned an error")
    )]
    Io(#[from] io::Error),

    /// A terminal primitive failed. Raw mode has already been restored by the time
    /// this surfaces, so the caller can keep using the terminal.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Driver(#[from] DriverError),
}

/// Failures of the [`crate::TerminalDriver`] primitives.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum DriverError {
    #[error("failed to enter raw mode")]
    #[diagnostic(
        code(r3bl_line_editor::driver::enter_raw_mode),
        help("Is stdin (or /dev/tty) connected to a terminal?")
    )]
    EnterRawMode(#[source] io::Error),

    #[error("failed to restore terminal attributes")]
    #[diagnostic(
        code(r3bl_line_editor::driver::restore),
        help("Run `reset` or `stty sane` if the terminal is left in a bad state")
    )]
    Restore(#[source] io::Error),

    #[error("failed to query terminal window size")]
    #[diagnostic(code(r3bl_line_editor::driver::window_size))]
    WindowSize(#[source] io::Error),

    #[error("failed to write to terminal")]
    #[diagnostic(code(r3bl_line_editor::driver::output))]
    Output(#[source] io::Error),
}
