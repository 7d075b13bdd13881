//! Command-line argument parsing

use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use clap::{ArgGroup, Parser};
use examtick_common::PressureMode;

/// Accepted non-RFC 3339 layouts, read as local time
const LOCAL_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Get default settings path help text for current platform
fn default_config_help() -> String {
    #[cfg(target_os = "linux")]
    return "Settings file path (default: ~/.config/examtick/settings.json)".to_string();

    #[cfg(target_os = "macos")]
    return "Settings file path (default: ~/Library/Application Support/examtick/settings.json)"
        .to_string();

    #[cfg(target_os = "windows")]
    return "Settings file path (default: %APPDATA%\\examtick\\settings.json)".to_string();

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    return "Settings file path (overrides platform default)".to_string();
}

/// Parse an exam start time
///
/// Accepts RFC 3339 (`2026-06-10T09:00:00Z`, `2026-06-10T09:00:00+02:00`)
/// or a local `2026-06-10 09:00`.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, String> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in LOCAL_TIMESTAMP_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| format!("'{s}' does not exist in the local timezone"));
        }
    }

    Err(format!(
        "'{s}' is not a timestamp (expected RFC 3339 or YYYY-MM-DD HH:MM)"
    ))
}

/// Exam countdowns in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["at", "file"])))]
pub struct Args {
    /// Exam start time for a one-off countdown
    #[arg(short, long, value_parser = parse_timestamp)]
    pub at: Option<DateTime<Utc>>,

    /// Title for the --at countdown
    #[arg(short, long, default_value = "Exam")]
    pub title: String,

    /// JSON file holding an array of exam records
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Pressure mode for --at (calm, realistic, brutal); defaults to the saved preference
    #[arg(short, long)]
    pub mode: Option<PressureMode>,

    /// Also list archived exams
    #[arg(long, default_value = "false")]
    pub all: bool,

    /// Use 24-hour time for exact timestamps
    #[arg(long = "24h", default_value = "false")]
    pub use_24_hour_time: bool,

    /// Keep refreshing until interrupted
    #[arg(short, long, default_value = "false")]
    pub watch: bool,

    /// Refresh every second instead of every minute (requires --watch)
    #[arg(long, default_value = "false", requires = "watch")]
    pub detail: bool,

    /// Store the effective mode and clock preference as the new defaults
    #[arg(long, default_value = "false")]
    pub save: bool,

    /// Settings file path (overrides platform default)
    #[arg(short, long, help = default_config_help())]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub debug: bool,
}
