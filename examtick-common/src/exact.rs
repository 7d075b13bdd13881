//! Exact exam timestamp labels
//!
//! Renders an absolute exam time as e.g. "Mon, Jan 5, 09:30 AM", next to the
//! relative countdown.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Hour convention for exact timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockFormat {
    /// 12-hour clock with AM/PM
    #[default]
    TwelveHour,
    /// 24-hour clock
    TwentyFourHour,
}

impl ClockFormat {
    /// Pick a convention from a "use 24-hour time" preference
    #[must_use]
    pub fn from_24_hour(use_24_hour_time: bool) -> Self {
        if use_24_hour_time {
            Self::TwentyFourHour
        } else {
            Self::TwelveHour
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Self::TwelveHour => "%a, %b %-d, %I:%M %p",
            Self::TwentyFourHour => "%a, %b %-d, %H:%M",
        }
    }
}

/// Format an exam time in the local timezone
#[must_use]
pub fn format_exact(target: DateTime<Utc>, clock: ClockFormat) -> String {
    format_exact_in(target, &Local, clock)
}

/// Format an exam time in an explicit timezone
#[must_use]
pub fn format_exact_in<Tz>(target: DateTime<Utc>, tz: &Tz, clock: ClockFormat) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    target.with_timezone(tz).format(clock.pattern()).to_string()
}
