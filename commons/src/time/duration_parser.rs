// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use nom::{IResult, Parser, combinator::all_consuming};

use crate::{CommonError, CommonErrorType, CommonResult, TimeUnit};

/// Every recognized unit suffix, along with the unit it stands for and a multiplier
/// applied before conversion (weeks are counted as seven days).
const UNIT_SUFFIXES: &[(&str, TimeUnit, i64)] = &[
    ("ms", TimeUnit::Milliseconds, 1),
    ("millis", TimeUnit::Milliseconds, 1),
    ("milliseconds", TimeUnit::Milliseconds, 1),
    ("s", TimeUnit::Seconds, 1),
    ("sec", TimeUnit::Seconds, 1),
    ("secs", TimeUnit::Seconds, 1),
    ("second", TimeUnit::Seconds, 1),
    ("seconds", TimeUnit::Seconds, 1),
    ("m", TimeUnit::Minutes, 1),
    ("min", TimeUnit::Minutes, 1),
    ("mins", TimeUnit::Minutes, 1),
    ("minute", TimeUnit::Minutes, 1),
    ("minutes", TimeUnit::Minutes, 1),
    ("h", TimeUnit::Hours, 1),
    ("hour", TimeUnit::Hours, 1),
    ("hours", TimeUnit::Hours, 1),
    ("d", TimeUnit::Days, 1),
    ("day", TimeUnit::Days, 1),
    ("days", TimeUnit::Days, 1),
    ("w", TimeUnit::Days, 7),
    ("week", TimeUnit::Days, 7),
    ("weeks", TimeUnit::Days, 7),
];

/// Parses a human written duration such as `"1h 30m"` or `"2 weeks"` (the latter needs
/// no space: `"2weeks"`) into a number of `output_unit`.
///
/// The input is split on whitespace and every part must look like `<integer><suffix>`.
/// When several suffixes match, the longest one wins, so `"5ms"` is milliseconds rather
/// than seconds. Parts without a known suffix are skipped. Values may be negative. The
/// parts are summed, saturating at the bounds of [`i64`].
///
/// ```
/// use plugin_commons::{TimeUnit, parse_duration};
///
/// assert_eq!(parse_duration("1h 30m", TimeUnit::Minutes).unwrap(), 90);
/// assert_eq!(parse_duration("1W", TimeUnit::Days).unwrap(), 7);
/// assert_eq!(parse_duration("1500ms", TimeUnit::Seconds).unwrap(), 1);
/// ```
///
/// # Errors
///
/// Returns [`CommonErrorType::ParsingError`] if a part ends in a known suffix but the
/// rest of it is not an integer, eg: `"1.5h"` or `"ms"`.
pub fn parse_duration(input: &str, output_unit: TimeUnit) -> CommonResult<i64> {
    let input = input.to_lowercase();
    let mut acc = 0_i64;

    for part in input.split_whitespace() {
        let Some((suffix, unit, multiplier)) = UNIT_SUFFIXES
            .iter()
            .filter(|(suffix, _, _)| part.ends_with(suffix))
            .max_by_key(|(suffix, _, _)| suffix.len())
        else {
            tracing::warn!(part, "skipping duration part without a known unit suffix");
            continue;
        };

        let value_text = &part[..part.len() - suffix.len()];
        let value = parse_signed_integer(value_text).ok_or_else(|| {
            CommonError::new_report(
                CommonErrorType::ParsingError,
                Some(format!(
                    "The value {value_text:?} of the duration part {part:?} is not an integer"
                )),
            )
        })?;

        let converted = output_unit.convert(value.saturating_mul(*multiplier), *unit);
        acc = acc.saturating_add(converted);
    }

    Ok(acc)
}

fn parse_signed_integer(input: &str) -> Option<i64> {
    let result: IResult<&str, i64> =
        all_consuming(nom::character::complete::i64).parse(input);
    result.ok().map(|(_, value)| value)
}
