// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum::IntoEnumIterator;

/// Finds the variant of `E` whose name matches `name`, ignoring case, whitespace and
/// underscores. Useful for turning a free form configuration value into an enum.
///
/// The variant names come from [`AsRef<str>`], which is what [`strum_macros::AsRefStr`]
/// derives.
///
/// ```
/// use plugin_commons::{TimeUnit, match_enum_by_name};
///
/// assert_eq!(match_enum_by_name::<TimeUnit>(" mINutes "), Some(TimeUnit::Minutes));
/// assert_eq!(match_enum_by_name::<TimeUnit>("fortnights"), None);
/// ```
pub fn match_enum_by_name<E>(name: &str) -> Option<E>
where
    E: IntoEnumIterator + AsRef<str>,
{
    let needle = strip_separators(name);
    E::iter().find(|variant| strip_separators(variant.as_ref()).eq_ignore_ascii_case(&needle))
}

fn strip_separators(text: &str) -> String {
    text.chars()
        .filter(|it| !it.is_whitespace() && *it != '_')
        .collect()
}
