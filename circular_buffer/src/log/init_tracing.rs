// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # [`init_tracing()`]
//!
//! Convenience method to set up a [`tracing_subscriber`] registry from a
//! [`TracingConfig`]. The circular buffer only ever emits `trace` (evictions) and `debug`
//! (rejected operations) events, so you need a level filter of at least
//! [`LevelFilter::DEBUG`] to see anything.

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, TracingScope, WriterConfig,
            try_create_file_appender};
use crate::CommonResult;

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
///    - Docs for [Global default tracing
///      subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
/// 2. A thread local subscriber.
///    - Docs for [Thread local tracing
///      subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// # Return
/// 1. For [`TracingScope::ThreadLocal`] you get a [`dispatcher::DefaultGuard`]. Drop it
///    when you're done, which resets the tracing system to its previous state for that
///    thread.
/// 2. For [`TracingScope::Global`] you get [`None`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global default subscriber
/// has already been set.
pub fn init_tracing(
    tracing_config: TracingConfig,
) -> CommonResult<Option<dispatcher::DefaultGuard>> {
    let scope = tracing_config.scope;
    let layers = try_create_layers(&tracing_config)?;
    let registry = tracing_subscriber::registry().with(layers);

    match scope {
        TracingScope::Global => {
            registry.try_init().map_err(|error| {
                miette::miette!("Failed to set global tracing subscriber: {error}")
            })?;
            Ok(None)
        }
        TracingScope::ThreadLocal => Ok(Some(registry.set_default())),
    }
}

/// Returns the layers. This does not initialize the tracing system. Don't forget to do
/// this manually, by calling `init` on the returned layers.
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
) -> CommonResult<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add
    // more layers, like OpenTelemetry, which don't have a level filter.
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

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
///
/// # Errors
///
/// This currently never fails, the [`Result`] keeps the signature symmetric with
/// [`try_create_file_layer`].
#[allow(clippy::unnecessary_wraps)]
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!();

    // Configure the writer based on the desired log target, and return it.
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
            DisplayPreference::Captured(captured_logs) => Some(Box::new(
                fmt_layer
                    .with_ansi(false)
                    .with_writer(move || captured_logs.clone())
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::File(_) | WriterConfig::None => None,
    })
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file path has no parent folder or no file name.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!();

    // Configure the writer based on the desired log target, and return it.
    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, log_file_path)
        | WriterConfig::File(log_file_path) => {
            let file = try_create_file_appender(log_file_path.as_str())?;
            Some(Box::new(
                fmt_layer
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::Display(_) | WriterConfig::None => None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use tempfile::{TempDir, tempdir};

    use super::*;
    use crate::{CapturedLogs, CircularBufferError, CircularBufferStack};

    fn install_captured(level_filter: LevelFilter) -> (CapturedLogs, dispatcher::DefaultGuard) {
        let captured_logs = CapturedLogs::new();
        let guard = init_tracing(
            TracingConfig::new_display(DisplayPreference::Captured(captured_logs.clone()))
                .with_level_filter(level_filter)
                .with_scope(TracingScope::ThreadLocal),
        )
        .unwrap()
        .unwrap();
        (captured_logs, guard)
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
    fn test_no_writer_only_has_level_filter_layer() {
        let config = TracingConfig {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::DEBUG,
            scope: TracingScope::ThreadLocal,
        };
        let layers = try_create_layers(&config).unwrap();
        assert_eq!(layers.len(), 1);
    }

    fn temp_log_file_path(dir: &TempDir) -> String {
        let file_path = dir.path().join("my_temp_log_file.log");
        file_path.to_str().unwrap().to_string()
    }

    #[test]
    #[serial]
    fn test_try_create_both_layers() {
        let dir = tempdir().unwrap();
        let file_path = temp_log_file_path(&dir);

        let config = TracingConfig::new_file_and_display(
            Some(file_path.clone()),
            DisplayPreference::Stdout,
        )
        .with_scope(TracingScope::ThreadLocal);

        let layers = try_create_layers(&config).unwrap();
        assert_eq!(layers.len(), 3);
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    #[serial]
    fn test_try_create_file_layer() {
        let dir = tempdir().unwrap();
        let file_path = temp_log_file_path(&dir);

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, WriterConfig::File(file_path.clone()))
                .unwrap();
        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    #[serial]
    fn test_rejected_guarded_insert_is_written_to_log_file() {
        let dir = tempdir().unwrap();
        let file_path = temp_log_file_path(&dir);

        let guard = init_tracing(
            TracingConfig::new_file(Some(file_path.clone()))
                .with_scope(TracingScope::ThreadLocal),
        )
        .unwrap()
        .unwrap();

        let mut buffer = CircularBufferStack::<u32, 1>::new();
        buffer.guarded_insert(1).unwrap();
        assert_eq!(
            buffer.guarded_insert(2),
            Err(CircularBufferError::Overflow { capacity: 1 })
        );
        drop(guard);

        let output = std::fs::read_to_string(&file_path).unwrap();
        assert!(
            output.contains("circular buffer rejected guarded insert"),
            "{output}"
        );
        assert!(output.contains("capacity=1"), "{output}");
    }

    #[test]
    #[serial]
    fn test_rejected_guarded_insert_is_logged_at_debug() {
        let (captured_logs, guard) = install_captured(LevelFilter::DEBUG);

        let mut buffer = CircularBufferStack::<u32, 2>::new();
        buffer.guarded_insert(1).unwrap();
        buffer.guarded_insert(2).unwrap();
        assert_eq!(
            buffer.guarded_insert(3),
            Err(CircularBufferError::Overflow { capacity: 2 })
        );
        drop(guard);

        let output = captured_logs.contents();
        assert!(output.contains("DEBUG"), "{output}");
        assert!(
            output.contains("circular buffer rejected guarded insert"),
            "{output}"
        );
        assert!(output.contains("capacity=2"), "{output}");
    }

    #[test]
    #[serial]
    fn test_rejected_remove_front_is_logged_at_debug() {
        let (captured_logs, guard) = install_captured(LevelFilter::DEBUG);

        let mut buffer = CircularBufferStack::<u32, 2>::new();
        assert_eq!(buffer.remove_front(), Err(CircularBufferError::Underflow));
        drop(guard);

        assert!(
            captured_logs
                .contents()
                .contains("circular buffer rejected remove front")
        );
    }

    #[test]
    #[serial]
    fn test_eviction_is_logged_at_trace_only() {
        let (debug_logs, guard) = install_captured(LevelFilter::DEBUG);
        let mut buffer = CircularBufferStack::<u32, 1>::new();
        buffer.overwrite_insert(1);
        buffer.overwrite_insert(2);
        drop(guard);
        assert!(debug_logs.is_empty(), "{}", debug_logs.contents());

        let (trace_logs, guard) = install_captured(LevelFilter::TRACE);
        buffer.overwrite_insert(3);
        drop(guard);
        let output = trace_logs.contents();
        assert!(
            output.contains("circular buffer evicted its oldest element"),
            "{output}"
        );
    }

    #[test]
    #[serial]
    fn test_level_filter_suppresses_debug_events() {
        let (captured_logs, guard) = install_captured(LevelFilter::INFO);
        let mut buffer = CircularBufferStack::<u32, 1>::new();
        buffer.guarded_insert(1).unwrap();
        assert!(buffer.guarded_insert(2).is_err());
        drop(guard);
        assert!(captured_logs.is_empty(), "{}", captured_logs.contents());
    }
}
