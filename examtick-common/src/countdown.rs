//! Countdown computation and formatting
//!
//! Turns the gap between "now" and an exam's start into a [`TimeLeft`], then
//! renders it as a label whose granularity depends on the [`PressureMode`].
//! Every function here is pure; "now" is always passed in explicitly, with
//! thin wall-clock wrappers for callers that don't care.

use chrono::{DateTime, Utc};

use crate::pressure_mode::PressureMode;
use crate::time::{
    HOURS_PER_DAY, MILLIS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};

/// Label shown once the exam has started
pub const EXAM_PASSED_LABEL: &str = "Exam passed";

/// Brutal mode switches from a day count to an hour count at or below this
/// many days
pub const BRUTAL_HOURS_THRESHOLD_DAYS: u64 = 14;

/// Non-negative time remaining until a target, split into clock fields
///
/// `hours < 24`, `minutes < 60` and `seconds < 60` always hold, and the
/// fields add back up to `total_seconds`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub total_seconds: u64,
}

impl TimeLeft {
    /// Nothing left: the target is now or in the past
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        total_seconds: 0,
    };

    /// Decompose a whole number of seconds
    #[must_use]
    pub fn from_total_seconds(total_seconds: u64) -> Self {
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
            total_seconds,
        }
    }

    /// Whether no time remains
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }
}

/// Compute the time left between `now` and `target`
///
/// Returns [`TimeLeft::ZERO`] when `target <= now`; the result is never
/// negative. Sub-second remainders are floored away.
#[must_use]
pub fn compute_time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    if target <= now {
        return TimeLeft::ZERO;
    }

    let diff_millis = (target - now).num_milliseconds();
    let total_seconds = (diff_millis / MILLIS_PER_SECOND).max(0) as u64;

    TimeLeft::from_total_seconds(total_seconds)
}

/// [`compute_time_left`] against the wall clock
#[must_use]
pub fn time_left_until(target: DateTime<Utc>) -> TimeLeft {
    compute_time_left(target, Utc::now())
}

/// Whether the exam at `target` has passed as of `now`
///
/// Strict: a target exactly at `now` has not passed yet, even though
/// [`compute_time_left`] already reports zero for it.
#[must_use]
pub fn is_passed(target: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now > target
}

/// [`is_passed`] against the wall clock
#[must_use]
pub fn has_passed(target: DateTime<Utc>) -> bool {
    is_passed(target, Utc::now())
}

/// Render a countdown label for the given mode
///
/// "Exam passed" wins over every mode once no time is left.
///
/// | mode      | range                  | label                               |
/// |-----------|------------------------|-------------------------------------|
/// | Calm      | 0 days                 | `Today`                             |
/// | Calm      | 1 day                  | `1 day left`                        |
/// | Calm      | 2+ days                | `N days left`                       |
/// | Realistic | 0 days, 0 hours        | `M minutes left`                    |
/// | Realistic | 0 days, 1+ hours       | `H hours left`                      |
/// | Realistic | 1 day                  | `1 day H hours left`                |
/// | Realistic | 2+ days                | `N days H hours left`               |
/// | Brutal    | more than 14 days      | `N days left`                       |
/// | Brutal    | 1 to 14 days           | `N*24+H hours left`                 |
/// | Brutal    | 0 days, 0 hours        | `M minutes left`                    |
/// | Brutal    | 0 days, 1+ hours       | `H hours M minutes left`            |
#[must_use]
pub fn format_countdown(time_left: &TimeLeft, mode: PressureMode) -> String {
    if time_left.is_zero() {
        return EXAM_PASSED_LABEL.to_string();
    }

    match mode {
        PressureMode::Calm => format_calm(time_left),
        PressureMode::Realistic => format_realistic(time_left),
        PressureMode::Brutal => format_brutal(time_left),
    }
}

/// Render a countdown label for a mode given as a string
///
/// Accepts either the stored or the display spelling. A string that names
/// no mode falls back to a bare day count, without Calm's "Today" and
/// "1 day" cases.
#[must_use]
pub fn format_countdown_for(time_left: &TimeLeft, mode: &str) -> String {
    match PressureMode::parse(mode) {
        Some(mode) => format_countdown(time_left, mode),
        None if time_left.is_zero() => EXAM_PASSED_LABEL.to_string(),
        None => format!("{} days left", time_left.days),
    }
}

fn format_calm(t: &TimeLeft) -> String {
    match t.days {
        0 => "Today".to_string(),
        1 => "1 day left".to_string(),
        days => format!("{days} days left"),
    }
}

// Hours-only once under a day; minutes are intentionally not shown there.
fn format_realistic(t: &TimeLeft) -> String {
    match (t.days, t.hours) {
        (0, 0) => format!("{} minutes left", t.minutes),
        (0, hours) => format!("{hours} hours left"),
        (1, hours) => format!("1 day {hours} hours left"),
        (days, hours) => format!("{days} days {hours} hours left"),
    }
}

fn format_brutal(t: &TimeLeft) -> String {
    if t.days > BRUTAL_HOURS_THRESHOLD_DAYS {
        return format!("{} days left", t.days);
    }
    if t.days >= 1 {
        let total_hours = t.days * HOURS_PER_DAY + t.hours;
        return format!("{total_hours} hours left");
    }
    if t.hours == 0 {
        format!("{} minutes left", t.minutes)
    } else {
        format!("{} hours {} minutes left", t.hours, t.minutes)
    }
}
