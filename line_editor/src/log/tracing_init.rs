// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

impl TracingConfig {
    /// Installs the layers as the global default subscriber. This can only happen once
    /// per process.
    ///
    /// # Errors
    ///
    /// If a layer can't be created, or a global subscriber is already set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| miette::miette!("failed to install tracing subscriber: {err}"))
    }

    /// Installs the layers for the current thread only, until the guard is dropped.
    /// Great for tests.
    ///
    /// # Errors
    ///
    /// If a layer can't be created.
    pub fn install_thread_local(self) -> miette::Result<tracing::subscriber::DefaultGuard> {
        let layers = try_create_layers(self)?;
        Ok(tracing::subscriber::set_default(
            tracing_subscriber::registry().with(layers),
        ))
    }
}

/// Returns the layers. This does not initialize the tracing system.
///
/// # Errors
///
/// If the log file can't be opened.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![];

    // Set the level filter from the tracing configuration.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    ) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// If the log file can't be opened.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, log_file_path)
        | WriterConfig::File(log_file_path) => {
            let file = rolling_file_appender_impl::try_create(log_file_path.as_str())?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}
