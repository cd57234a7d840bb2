// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Default log file, relative to the current directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "line_editor_log.txt";

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] to use. [`LevelFilter::OFF`] disables logging.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` is the log file path, eg: `/tmp/line_editor.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Log to `filename` (or [`DEFAULT_LOG_FILE_NAME`]) at `DEBUG` level.
    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<Option<String>> for TracingConfig {
    /// `Some(path)` logs to that file, `None` disables logging.
    fn from(maybe_path: Option<String>) -> Self {
        match maybe_path {
            Some(path) => Self::new_file(Some(path)),
            None => Self {
                writer_config: WriterConfig::None,
                level_filter: LevelFilter::OFF,
            },
        }
    }
}
