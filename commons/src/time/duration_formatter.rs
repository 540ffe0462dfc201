// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use chrono::TimeDelta;

use crate::{CommonError, CommonErrorType, CommonResult, TimeUnit};

/// Renders durations as human readable text, eg: `"1 day 2 hours 5 seconds"`.
///
/// The unit labels come from the `pluralize` function that is passed in, which receives
/// the unit and whether the amount is anything other than exactly one. This lets the
/// caller plug in translated labels.
///
/// ```
/// use chrono::TimeDelta;
/// use plugin_commons::{DurationFormatter, TimeUnit};
///
/// let formatter = DurationFormatter::new(|unit: TimeUnit, is_plural: bool| {
///     unit.english_label(is_plural).to_string()
/// });
/// let duration = TimeDelta::hours(26) + TimeDelta::seconds(5);
/// assert_eq!(formatter.format_duration(duration).unwrap(), "1 day 2 hours 5 seconds");
/// assert_eq!(
///     formatter.format_duration(TimeDelta::milliseconds(300)).unwrap(),
///     "< 1 second"
/// );
/// ```
#[derive(Clone)]
pub struct DurationFormatter<F> {
    pluralize: F,
}

impl<F> std::fmt::Debug for DurationFormatter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DurationFormatter").finish_non_exhaustive()
    }
}

impl<F> DurationFormatter<F>
where
    F: Fn(TimeUnit, bool) -> String,
{
    pub fn new(pluralize: F) -> Self { Self { pluralize } }

    /// Lists the whole days, hours, minutes and seconds in `duration`, largest first,
    /// skipping the ones that are zero. Anything shorter than a second renders as
    /// `"< 1 <second label>"`.
    ///
    /// # Errors
    ///
    /// Returns [`CommonErrorType::InvalidArguments`] if `duration` is zero or negative.
    pub fn format_duration(&self, duration: TimeDelta) -> CommonResult<String> {
        if duration <= TimeDelta::zero() {
            return CommonError::new_error_result(
                CommonErrorType::InvalidArguments,
                "The duration to convert to a string must be positive",
            );
        }

        let parts = [
            (duration.num_days(), TimeUnit::Days),
            (duration.num_hours() % 24, TimeUnit::Hours),
            (duration.num_minutes() % 60, TimeUnit::Minutes),
            (duration.num_seconds() % 60, TimeUnit::Seconds),
        ];

        let rendered = parts
            .into_iter()
            .filter(|(amount, _)| *amount > 0)
            .map(|(amount, unit)| self.render(amount, unit))
            .collect::<Vec<_>>();

        if rendered.is_empty() {
            return Ok(format!("< 1 {}", (self.pluralize)(TimeUnit::Seconds, false)));
        }

        Ok(rendered.join(" "))
    }

    /// Same as [`Self::format_duration`] for a [`std::time::Duration`].
    ///
    /// # Errors
    ///
    /// Returns [`CommonErrorType::InvalidArguments`] if `duration` is zero or too large
    /// to be represented.
    pub fn format_std_duration(
        &self,
        duration: std::time::Duration,
    ) -> CommonResult<String> {
        match TimeDelta::from_std(duration) {
            Ok(delta) => self.format_duration(delta),
            Err(err) => CommonError::new_error_result(
                CommonErrorType::InvalidArguments,
                &format!("The duration {duration:?} is out of range: {err}"),
            ),
        }
    }

    /// `"<seconds> <label>"`, with the label pluralized to fit the amount.
    pub fn pluralize_seconds(&self, seconds: i64) -> String {
        self.render(seconds, TimeUnit::Seconds)
    }

    fn render(&self, amount: i64, unit: TimeUnit) -> String {
        format!("{amount} {}", (self.pluralize)(unit, amount != 1))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, assert_err_type};

    fn english() -> DurationFormatter<impl Fn(TimeUnit, bool) -> String> {
        DurationFormatter::new(|unit: TimeUnit, is_plural: bool| {
            unit.english_label(is_plural).to_string()
        })
    }

    #[test_case(TimeDelta::seconds(1), "1 second")]
    #[test_case(TimeDelta::seconds(59), "59 seconds")]
    #[test_case(TimeDelta::seconds(60), "1 minute")]
    #[test_case(TimeDelta::seconds(61), "1 minute 1 second")]
    #[test_case(TimeDelta::hours(2) + TimeDelta::seconds(30), "2 hours 30 seconds")]
    #[test_case(TimeDelta::days(3), "3 days")]
    #[test_case(
        TimeDelta::days(1) + TimeDelta::hours(1) + TimeDelta::minutes(1) + TimeDelta::seconds(1),
        "1 day 1 hour 1 minute 1 second"
    )]
    #[test_case(TimeDelta::milliseconds(1), "< 1 second")]
    #[test_case(TimeDelta::milliseconds(1_999), "1 second")]
    fn test_format_duration(duration: TimeDelta, expected: &str) {
        assert_eq2!(english().format_duration(duration).unwrap(), expected);
    }

    #[test]
    fn test_non_positive_durations_are_rejected() {
        let formatter = english();
        assert_err_type!(
            formatter.format_duration(TimeDelta::zero()),
            CommonErrorType::InvalidArguments
        );
        assert_err_type!(
            formatter.format_duration(TimeDelta::seconds(-5)),
            CommonErrorType::InvalidArguments
        );
        assert_err_type!(
            formatter.format_std_duration(std::time::Duration::ZERO),
            CommonErrorType::InvalidArguments
        );
    }

    #[test]
    fn test_format_std_duration() {
        assert_eq2!(
            english()
                .format_std_duration(std::time::Duration::from_secs(3_661))
                .unwrap(),
            "1 hour 1 minute 1 second"
        );
    }

    #[test]
    fn test_pluralize_seconds() {
        let formatter = english();
        assert_eq2!(formatter.pluralize_seconds(1), "1 second");
        assert_eq2!(formatter.pluralize_seconds(0), "0 seconds");
        assert_eq2!(formatter.pluralize_seconds(42), "42 seconds");
    }

    #[test]
    fn test_custom_pluralizer_sees_units_and_plurality() {
        let formatter = DurationFormatter::new(|unit: TimeUnit, is_plural: bool| {
            format!("{}{}", unit.as_ref(), if is_plural { "+" } else { "" })
        });
        assert_eq2!(
            formatter
                .format_duration(TimeDelta::days(2) + TimeDelta::minutes(1))
                .unwrap(),
            "2 Days+ 1 Minutes"
        );
    }
}
