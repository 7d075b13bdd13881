//! Where the exams to display come from
//!
//! Either a JSON file of stored records (read-only) or a single one-off
//! exam built from command-line flags.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use examtick_common::{CreateExamInput, Exam, PressureMode};

use crate::errors::CliError;

/// Read a JSON array of exam records
///
/// Accepts both the app's snake_case records and the companion API's
/// camelCase ones. A record with an unrecognized pressure mode still loads
/// and counts down in whole days.
pub fn load_exams(path: &Path) -> Result<Vec<Exam>, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a one-off exam from flags
pub fn adhoc_exam(
    title: &str,
    at: DateTime<Utc>,
    mode: PressureMode,
    now: DateTime<Utc>,
) -> Result<Exam, CliError> {
    let input = CreateExamInput {
        title: title.to_string(),
        subject: None,
        date_time: at,
        location: None,
        pressure_mode: mode,
    };
    Ok(Exam::new(input, now)?)
}
