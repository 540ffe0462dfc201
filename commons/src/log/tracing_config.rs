// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Everything [`crate::init_tracing`] needs to know to set up a subscriber.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub scope: TracingScope,
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Where the subscriber is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingScope {
    /// Process wide. Can only be set once, this is what a host application wants.
    #[default]
    Global,
    /// Only for the current thread, until the returned guard is dropped. This is what
    /// tests want.
    ThreadLocal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WriterConfig {
    #[default]
    None,
    Display(DisplayPreference),
    /// Path of the log file. Its parent folder must exist.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

impl TracingConfig {
    /// Log to `stderr` only, for the whole process.
    #[must_use]
    pub fn new_display(level_filter: LevelFilter) -> Self {
        Self {
            scope: TracingScope::Global,
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

impl WriterConfig {
    #[must_use]
    pub fn from_parts(display: Option<DisplayPreference>, file_path: Option<String>) -> Self {
        match (display, file_path) {
            (None, None) => WriterConfig::None,
            (Some(display), None) => WriterConfig::Display(display),
            (None, Some(path)) => WriterConfig::File(path),
            (Some(display), Some(path)) => WriterConfig::DisplayAndFile(display, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_writer_config_from_parts() {
        assert_eq2!(WriterConfig::from_parts(None, None), WriterConfig::None);
        assert_eq2!(
            WriterConfig::from_parts(Some(DisplayPreference::Stdout), None),
            WriterConfig::Display(DisplayPreference::Stdout)
        );
        assert_eq2!(
            WriterConfig::from_parts(None, Some("a.log".into())),
            WriterConfig::File("a.log".into())
        );
        assert_eq2!(
            WriterConfig::from_parts(Some(DisplayPreference::Stderr), Some("a.log".into())),
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "a.log".into())
        );
    }

    #[test]
    fn test_new_display() {
        let it = TracingConfig::new_display(LevelFilter::WARN);
        assert_eq2!(it.scope, TracingScope::Global);
        assert_eq2!(it.get_level_filter(), LevelFilter::WARN);
        assert_eq2!(
            it.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stderr)
        );
    }
}
