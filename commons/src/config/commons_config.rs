// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_core::LevelFilter;

use crate::{CommonError, CommonErrorType, CommonResult, DisplayPreference,
            TracingConfig, TracingScope, WriterConfig};

/// Host supplied settings for this crate, read from JSON. Every key is optional.
///
/// ```json
/// {
///   "defaultLanguage": "en",
///   "log": { "level": "info", "display": "stderr", "filePath": null }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonsConfig {
    /// Always lower case once loaded.
    pub default_language: String,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogSettings {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace` (any case).
    pub level: String,
    pub display: LogDisplay,
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogDisplay {
    Stdout,
    #[default]
    Stderr,
    None,
}

impl Default for CommonsConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            log: LogSettings::default(),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            display: LogDisplay::default(),
            file_path: None,
        }
    }
}

impl CommonsConfig {
    /// # Errors
    ///
    /// Returns [`CommonErrorType::ParsingError`] if `json` is not valid JSON or has a
    /// value of the wrong type.
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let mut it: Self = serde_json::from_str(json).map_err(|err| {
            CommonError::new_report(
                CommonErrorType::ParsingError,
                Some(format!("Malformed configuration: {err}")),
            )
        })?;
        it.default_language = it.default_language.to_lowercase();
        Ok(it)
    }

    /// # Errors
    ///
    /// Returns [`CommonErrorType::IOError`] if the file can't be read, and
    /// [`CommonErrorType::ParsingError`] if its contents are malformed.
    pub fn try_load_from_path(path: impl AsRef<Path>) -> CommonResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");

        let json = std::fs::read_to_string(path).map_err(|err| {
            CommonError::new_report(
                CommonErrorType::IOError,
                Some(format!("Can't read {}: {err}", path.display())),
            )
        })?;

        Self::try_from_json_str(&json)
    }

    /// Turns the `log` section into a [`TracingConfig`] for [`crate::init_tracing`].
    ///
    /// # Errors
    ///
    /// Returns [`CommonErrorType::InvalidValue`] if the level is not a known log level.
    pub fn to_tracing_config(&self, scope: TracingScope) -> CommonResult<TracingConfig> {
        let level_filter = self.log.level.parse::<LevelFilter>().map_err(|_| {
            CommonError::new_report(
                CommonErrorType::InvalidValue,
                Some(format!("Unknown log level {:?}", self.log.level)),
            )
        })?;

        let display = match self.log.display {
            LogDisplay::Stdout => Some(DisplayPreference::Stdout),
            LogDisplay::Stderr => Some(DisplayPreference::Stderr),
            LogDisplay::None => None,
        };

        Ok(TracingConfig {
            scope,
            writer_config: WriterConfig::from_parts(display, self.log.file_path.clone()),
            level_filter,
        })
    }
}
