// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # [`init_tracing`]
//!
//! Convenience setup for a [`tracing_subscriber`] registry. The [`TracingConfig`] picks
//! the log level, whether output goes to `stdout` or `stderr`, and whether it is also
//! written to a log file.
//!
//! This crate only ever emits events through [`tracing`]. A host application that
//! already installs its own subscriber never needs to call anything in here.

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::rolling_file_appender_impl;
use crate::{DisplayPreference, TracingConfig, TracingScope, WriterConfig};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Note that
/// [`tracing_subscriber::fmt::format::Pretty`] and
/// [`tracing_subscriber::fmt::format::Compact`] are mutually exclusive.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Initialize the tracing system with the provided [`TracingConfig`]. Depending on its
/// [`TracingScope`] this sets either:
/// 1. The global default subscriber, which once set, can't be unset or changed.
/// 2. A thread local subscriber, which stays active until the returned guard is dropped.
///
/// # Return
/// 1. [`TracingScope::ThreadLocal`] returns a [`tracing::dispatcher::DefaultGuard`].
///    Dropping it resets the tracing system to its previous state for that thread.
/// 2. [`TracingScope::Global`] returns [`None`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if the scope is
/// [`TracingScope::Global`] and a global subscriber is already set.
pub fn init_tracing(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let scope = tracing_config.scope;
    let layers = try_create_layers(&tracing_config)?;
    let registry = tracing_subscriber::registry().with(layers);

    match scope {
        TracingScope::Global => {
            registry.try_init().into_diagnostic()?;
            Ok(None)
        }
        TracingScope::ThreadLocal => Ok(Some(registry.set_default())),
    }
}

/// Returns the layers. This does not initialize the tracing system.
///
/// For example, once you have the layers, you can run the following:
/// `try_create_layers(..).map(|layers|
/// tracing_subscriber::registry().with(layers).init());`
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // The level filter applies to every layer, including ones without a filter of
    // their own.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
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

/// This erases the concrete type of the writer, and returns a boxed layer. Returns
/// [`None`] if the [`WriterConfig`] has no display component.
///
/// # Errors
///
/// Never fails today. The [`miette::Result`] keeps the signature in line with
/// [`try_create_file_layer`].
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(true);

    Ok(match writer_config {
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
    })
}

/// This erases the concrete type of the writer, and returns a boxed layer. Returns
/// [`None`] if the [`WriterConfig`] has no file component. Log files never contain ANSI
/// escape sequences.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
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

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::{LoopAroundList, assert_eq2};

    fn thread_local_config(writer_config: WriterConfig) -> TracingConfig {
        TracingConfig {
            scope: TracingScope::ThreadLocal,
            writer_config,
            level_filter: LevelFilter::TRACE,
        }
    }

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                WriterConfig::Display(DisplayPreference::Stdout),
            )
            .unwrap();
        assert!(layer.is_some());

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, WriterConfig::None).unwrap();
        assert!(layer.is_none());
    }

    #[test]
    fn test_try_create_file_layer() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("my_temp_log_file.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, WriterConfig::File(file_path.clone()))
                .unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_both_layers() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("my_temp_log_file.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let layers = try_create_layers(&thread_local_config(
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, file_path.clone()),
        ))
        .unwrap();
        assert_eq2!(layers.len(), 3);
        assert!(std::path::Path::new(&file_path).exists());

        let layers = try_create_layers(&thread_local_config(WriterConfig::None)).unwrap();
        assert_eq2!(layers.len(), 1);
    }

    #[test]
    fn test_thread_local_file_logging_captures_cursor_moves() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("cursor.log");
        let file_path_str = file_path.to_str().unwrap().to_string();

        let guard = init_tracing(thread_local_config(WriterConfig::File(file_path_str)))
            .unwrap();
        assert!(guard.is_some());

        let mut list = LoopAroundList::try_from_vec(2, vec!['a', 'b', 'c']).unwrap();
        list.set_cursor(-1).unwrap();
        tracing::info!("done moving");
        drop(guard);

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("done moving"));
        assert!(contents.contains("cursor"));
    }
}
