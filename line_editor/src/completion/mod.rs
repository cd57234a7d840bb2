// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod completer;
pub mod completion_engine;
pub mod filename_completer;
pub mod simple_completer;

// Re-export.
pub use completer::*;
pub use completion_engine::*;
pub use filename_completer::*;
pub use simple_completer::*;
