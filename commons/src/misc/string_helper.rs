// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::LazyLock;

use regex::Regex;
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

use crate::{CommonError, CommonErrorType, CommonResult};

static PLAYER_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]{3,16}$").expect("player name regex is valid")
});

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid regex is valid")
});

static NON_WORD_CHARACTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("non word regex is valid"));

/// Collapses a chain of [`str::replace`] calls into one call. The pairs are applied in
/// order, so a later target can match text produced by an earlier replacement.
///
/// ```
/// use plugin_commons::multi_replace;
///
/// let it = multi_replace("A B C", &[("A", "1"), ("B", "2"), ("1 2", "x")]);
/// assert_eq!(it, "x C");
/// ```
#[must_use]
pub fn multi_replace(input: &str, targets_and_replacements: &[(&str, &str)]) -> String {
    targets_and_replacements.iter().fold(
        input.to_string(),
        |acc, (target, replacement)| acc.replace(target, replacement),
    )
}

/// Joins `words` with single spaces, starting at `offset`. Handy for turning the tail of
/// a command's argument list back into a sentence.
///
/// # Errors
///
/// Returns [`CommonErrorType::IndexOutOfBounds`] if `offset` is not less than the
/// number of words.
pub fn build_string_from_offset<S: AsRef<str>>(
    words: &[S],
    offset: usize,
) -> CommonResult<String> {
    let Some(tail) = words.get(offset..).filter(|it| !it.is_empty()) else {
        return CommonError::new_error_result(
            CommonErrorType::IndexOutOfBounds,
            &format!(
                "The offset {offset} is out of bounds (len {})",
                words.len()
            ),
        );
    };

    Ok(tail
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" "))
}

/// Splits `input` into lines of at most `max_line_length` characters, breaking only
/// between words. A single word longer than the limit gets a line of its own. Runs of
/// whitespace collapse to a single space.
#[must_use]
pub fn word_wrap(input: &str, max_line_length: usize) -> Vec<String> {
    let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return vec![];
    }

    let options = Options::new(max_line_length.max(1))
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::wrap(&normalized, options)
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Whether `text` is a valid player name: 3 to 16 ASCII letters, digits or underscores.
#[must_use]
pub fn is_player_name(text: &str) -> bool { PLAYER_NAME_REGEX.is_match(text) }

/// Whether `text` is a UUID in its lowercase, hyphenated form.
#[must_use]
pub fn is_uuid(text: &str) -> bool { UUID_REGEX.is_match(text) }

#[must_use]
pub fn contains_non_word_character(text: &str) -> bool {
    NON_WORD_CHARACTER_REGEX.is_match(text)
}
