// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter};

/// Granularity of a duration value, from finest to coarsest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, AsRefStr, Display,
)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        match self {
            TimeUnit::Milliseconds => 1,
            TimeUnit::Seconds => 1_000,
            TimeUnit::Minutes => 60_000,
            TimeUnit::Hours => 3_600_000,
            TimeUnit::Days => 86_400_000,
        }
    }

    /// Converts `value`, measured in `source_unit`, into this unit.
    ///
    /// Converting to a finer unit saturates at [`i64::MIN`] / [`i64::MAX`]. Converting
    /// to a coarser unit truncates toward zero, so `TimeUnit::Seconds.convert(-1_500,
    /// TimeUnit::Milliseconds)` is `-1`.
    ///
    /// ```
    /// use plugin_commons::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Milliseconds.convert(2, TimeUnit::Minutes), 120_000);
    /// assert_eq!(TimeUnit::Hours.convert(119, TimeUnit::Minutes), 1);
    /// assert_eq!(TimeUnit::Milliseconds.convert(i64::MAX, TimeUnit::Days), i64::MAX);
    /// ```
    #[must_use]
    pub const fn convert(self, value: i64, source_unit: TimeUnit) -> i64 {
        let source_millis = source_unit.as_millis();
        let target_millis = self.as_millis();
        if source_millis >= target_millis {
            value.saturating_mul(source_millis / target_millis)
        } else {
            value / (target_millis / source_millis)
        }
    }

    /// English label for this unit, eg: `"day"` or `"days"`. Handy as the pluralizer of
    /// a [`crate::DurationFormatter`] when no translations are needed.
    #[must_use]
    pub const fn english_label(self, is_plural: bool) -> &'static str {
        match (self, is_plural) {
            (TimeUnit::Milliseconds, false) => "millisecond",
            (TimeUnit::Milliseconds, true) => "milliseconds",
            (TimeUnit::Seconds, false) => "second",
            (TimeUnit::Seconds, true) => "seconds",
            (TimeUnit::Minutes, false) => "minute",
            (TimeUnit::Minutes, true) => "minutes",
            (TimeUnit::Hours, false) => "hour",
            (TimeUnit::Hours, true) => "hours",
            (TimeUnit::Days, false) => "day",
            (TimeUnit::Days, true) => "days",
        }
    }
}
