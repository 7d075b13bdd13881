//! Time constants for countdown calculations
//!
//! Shared by the countdown engine and the exact-timestamp formatter.

/// Milliseconds per second
pub const MILLIS_PER_SECOND: i64 = 1000;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds per hour
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Seconds per day
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Hours per day
pub const HOURS_PER_DAY: u64 = 24;
