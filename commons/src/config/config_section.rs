// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde_json::Value;

use crate::{CommonError, CommonErrorType, CommonResult};

/// A read only view into a nested JSON object, addressed with dotted paths such as
/// `"messages.join"`. Child sections remember where they came from, so error messages
/// always name the full path from the root.
///
/// ```
/// use plugin_commons::ConfigSection;
///
/// let root = ConfigSection::try_from_json_str(r#"{ "messages": { "join": "Hi" } }"#).unwrap();
/// assert_eq!(root.get_string("messages.join"), Some("Hi"));
///
/// let messages = root.section("messages").unwrap();
/// assert_eq!(messages.get_string("join"), Some("Hi"));
/// assert!(messages.get_string_not_null("leave").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSection {
    root_path: String,
    value: Value,
}

impl ConfigSection {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            root_path: String::new(),
            value,
        }
    }

    /// # Errors
    ///
    /// Returns [`CommonErrorType::ParsingError`] if `json` is not valid JSON.
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let value = serde_json::from_str(json).map_err(|err| {
            CommonError::new_report(
                CommonErrorType::ParsingError,
                Some(format!("Malformed configuration: {err}")),
            )
        })?;
        Ok(Self::new(value))
    }

    /// Dotted path of this section from the root, empty for the root itself.
    #[must_use]
    pub fn root_path(&self) -> &str { &self.root_path }

    /// The nested section at `path`, or [`None`] if there is no object there.
    #[must_use]
    pub fn section(&self, path: &str) -> Option<ConfigSection> {
        let value = self.lookup(path).filter(|it| it.is_object())?;
        Some(Self {
            root_path: self.full_path(path),
            value: value.clone(),
        })
    }

    /// The string at `path`, or [`None`] if it is missing or not a string.
    #[must_use]
    pub fn get_string(&self, path: &str) -> Option<&str> {
        self.lookup(path).and_then(Value::as_str)
    }

    /// # Errors
    ///
    /// Returns [`CommonErrorType::NotFound`] if there is no string at `path`.
    pub fn get_string_not_null(&self, path: &str) -> CommonResult<&str> {
        match self.get_string(path) {
            Some(it) => Ok(it),
            None => CommonError::new_error_result(
                CommonErrorType::NotFound,
                &format!(
                    "The configuration key {} is not present",
                    self.full_path(path)
                ),
            ),
        }
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.value, |acc, key| acc.as_object()?.get(key))
    }

    fn full_path(&self, path: &str) -> String {
        if self.root_path.is_empty() {
            path.to_string()
        } else {
            format!("{}.{path}", self.root_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{assert_eq2, assert_err_type};

    fn sample() -> ConfigSection {
        ConfigSection::new(json!({
            "prefix": "[Server]",
            "messages": {
                "join": "Welcome %player%",
                "count": 3,
                "errors": { "noPermission": "Nope" }
            }
        }))
    }

    #[test]
    fn test_get_string() {
        let root = sample();
        assert_eq2!(root.get_string("prefix"), Some("[Server]"));
        assert_eq2!(root.get_string("messages.join"), Some("Welcome %player%"));
        assert_eq2!(
            root.get_string("messages.errors.noPermission"),
            Some("Nope")
        );
        assert_eq2!(root.get_string("messages.count"), None);
        assert_eq2!(root.get_string("messages"), None);
        assert_eq2!(root.get_string("prefix.deeper"), None);
        assert_eq2!(root.get_string("missing"), None);
    }

    #[test]
    fn test_sections_track_their_path() {
        let root = sample();
        assert_eq2!(root.root_path(), "");
        assert!(root.section("prefix").is_none());
        assert!(root.section("missing").is_none());

        let errors = root.section("messages.errors").unwrap();
        assert_eq2!(errors.root_path(), "messages.errors");
        assert_eq2!(errors.get_string("noPermission"), Some("Nope"));

        let messages = root.section("messages").unwrap();
        let nested = messages.section("errors").unwrap();
        assert_eq2!(nested.root_path(), "messages.errors");
        assert_eq2!(nested, errors);
    }

    #[test]
    fn test_get_string_not_null() {
        let root = sample();
        assert_eq2!(root.get_string_not_null("prefix").unwrap(), "[Server]");

        let errors = root.section("messages.errors").unwrap();
        let report = errors.get_string_not_null("notFound").unwrap_err();
        assert_eq2!(
            CommonError::type_of(&report),
            Some(CommonErrorType::NotFound)
        );
        assert!(
            report
                .to_string()
                .contains("The configuration key messages.errors.notFound is not present")
        );
    }

    #[test]
    fn test_malformed_json() {
        assert_err_type!(
            ConfigSection::try_from_json_str("[1, 2"),
            CommonErrorType::ParsingError
        );
    }
}
