// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test only doubles for the terminal and its output stream.

// Attach.
pub mod mock_terminal;
pub mod stdout_mock;
pub mod virtual_screen;

// Re-export.
pub use mock_terminal::*;
pub use stdout_mock::*;
pub use virtual_screen::*;
