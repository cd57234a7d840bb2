// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TracingConfig;
use tracing_core::LevelFilter;

/// Global default subscriber, which once set, can't be unset or changed. Great for
/// apps.
///
/// Logging is **DISABLED** by **default**: pass a config with a level other than
/// [`LevelFilter::OFF`] to turn it on. `Option<String>` converts to a file logger
/// (`Some(path)`) or to disabled logging (`None`).
///
/// # Errors
///
/// If the log file can't be opened, or a global subscriber is already installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, active until the returned guard is dropped. Great for
/// tests. Returns `None` when logging is disabled.
///
/// # Errors
///
/// If the log file can't be opened.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<tracing::subscriber::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
