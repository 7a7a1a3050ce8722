// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use tracing_core::LevelFilter;

use super::CapturedLogs;

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout, stderr, or an in memory [`CapturedLogs`] sink,
/// 3. both.
///
/// This configuration also allows you to set the log level, and whether the subscriber
/// is installed globally or just for the current thread.
///
/// You can use [`crate::init_tracing()`] to initialize the tracing system with this
/// configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
    pub scope: TracingScope,
}

/// - `String` is the path of the log file. Eg: `/tmp/circular_buffer.log`.
/// - [`DisplayPreference`] is the preferred display to use for logging.
#[derive(Debug, Clone)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Clone)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
    Captured(CapturedLogs),
}

impl Debug for DisplayPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayPreference::Stdout => write!(f, "Stdout"),
            DisplayPreference::Stderr => write!(f, "Stderr"),
            DisplayPreference::Captured(_) => write!(f, "Captured"),
        }
    }
}

/// 1. [`TracingScope::Global`] sets the global default subscriber, which once set,
///    can't be unset or changed. This is great for apps.
/// 2. [`TracingScope::ThreadLocal`] sets a subscriber for the current thread only, until
///    the returned guard is dropped. This is great for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingScope {
    #[default]
    Global,
    ThreadLocal,
}

impl TracingConfig {
    /// Log to both the given [`DisplayPreference`] and a file, at `DEBUG` level.
    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
            scope: TracingScope::default(),
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
            scope: TracingScope::default(),
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
            scope: TracingScope::default(),
        }
    }

    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: TracingScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

pub const DEFAULT_LOG_FILE_NAME: &str = "circular_buffer_debug.log";

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_file_uses_default_name() {
        let config = TracingConfig::new_file(None);
        match config.get_writer_config() {
            WriterConfig::File(path) => assert_eq!(path, DEFAULT_LOG_FILE_NAME),
            other => panic!("unexpected writer config: {other:?}"),
        }
        assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(config.scope, TracingScope::Global);
    }

    #[test]
    fn test_builder_overrides() {
        let config = TracingConfig::new_display(DisplayPreference::Stderr)
            .with_level_filter(LevelFilter::TRACE)
            .with_scope(TracingScope::ThreadLocal);
        assert_eq!(config.get_level_filter(), LevelFilter::TRACE);
        assert_eq!(config.scope, TracingScope::ThreadLocal);
        assert_eq!(
            format!("{:?}", config.get_writer_config()),
            "Display(Stderr)"
        );
    }
}
