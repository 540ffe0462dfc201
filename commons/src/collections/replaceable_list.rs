// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::multi_replace;

/// A list of strings that can produce a copy of itself with a batch of replacements
/// applied to every entry. The list itself is never changed by [`Self::replace`].
///
/// ```
/// use plugin_commons::ReplaceableList;
///
/// let list = ReplaceableList::from(["Hello {name}", "Bye {name}"]);
/// assert_eq!(list.replace(&[("{name}", "Steve")]), vec!["Hello Steve", "Bye Steve"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplaceableList {
    pub items: Vec<String>,
}

impl ReplaceableList {
    #[must_use]
    pub fn new(items: Vec<String>) -> Self { Self { items } }

    /// Returns a new list with [`multi_replace`] applied to every entry, in order.
    #[must_use]
    pub fn replace(&self, targets_and_replacements: &[(&str, &str)]) -> Vec<String> {
        self.items
            .iter()
            .map(|item| multi_replace(item, targets_and_replacements))
            .collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ReplaceableList {
    fn from(items: [S; N]) -> Self { Self::new(items.into_iter().map(Into::into).collect()) }
}

impl<S: Into<String>> FromIterator<S> for ReplaceableList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_replace() {
        let list = ReplaceableList::from(["A B C D", "F G H I", "A B C D", "F G H I"]);
        let replaced = list.replace(&[
            ("A", "1"),
            ("B C", "2-3"),
            ("D", "4"),
            ("F G I", "Not here"),
            ("H", "5"),
        ]);
        assert_eq2!(replaced, vec!["1 2-3 4", "F G 5 I", "1 2-3 4", "F G 5 I"]);

        // The original list is untouched.
        assert_eq2!(list.items[0], "A B C D");
    }

    #[test]
    fn test_replace_with_nothing() {
        let list: ReplaceableList = vec!["x", "y"].into_iter().collect();
        assert_eq2!(list.replace(&[]), vec!["x", "y"]);
    }
}
