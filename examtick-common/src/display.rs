//! Countdown snapshots for display
//!
//! A display layer re-renders on a timer; each tick it takes a fresh
//! [`CountdownView`] for the current instant. The view holds no state
//! between ticks.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::countdown::TimeLeft;
use crate::exact::{ClockFormat, format_exact};
use crate::exam::Exam;

/// How often a countdown is re-rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshCadence {
    /// List cards: once a minute
    Card,
    /// Single-exam detail view: once a second
    Detail,
}

impl RefreshCadence {
    /// Time between re-renders
    #[must_use]
    pub fn interval(&self) -> Duration {
        match self {
            Self::Card => Duration::from_secs(60),
            Self::Detail => Duration::from_secs(1),
        }
    }
}

/// Everything needed to draw one exam's countdown at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownView {
    pub label: String,
    pub passed: bool,
    pub exact: String,
    pub time_left: TimeLeft,
}

impl CountdownView {
    /// Snapshot an exam's countdown as of `now`
    #[must_use]
    pub fn for_exam(exam: &Exam, now: DateTime<Utc>, clock: ClockFormat) -> Self {
        let time_left = exam.time_left(now);
        Self {
            label: exam.format_time_left(&time_left),
            passed: exam.is_passed(now),
            exact: format_exact(exam.date_time, clock),
            time_left,
        }
    }
}
