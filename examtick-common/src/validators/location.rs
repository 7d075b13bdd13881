//! Exam location validation
//!
//! The location is optional free text (e.g. a room or building). Blank
//! locations are treated as absent by the exam model.

use std::fmt;

/// Maximum length for exam locations in characters
pub const MAX_LOCATION_LENGTH: usize = 120;

/// Validation error for exam locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// Location exceeds maximum length
    TooLong,
    /// Location contains control characters
    InvalidCharacters,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(f, "location exceeds {MAX_LOCATION_LENGTH} characters"),
            Self::InvalidCharacters => f.write_str("location contains control characters"),
        }
    }
}

impl std::error::Error for LocationError {}

/// Validate an exam location
///
/// # Errors
///
/// Returns a `LocationError` variant describing the validation failure.
pub fn validate_location(location: &str) -> Result<(), LocationError> {
    let location = location.trim();
    if location.chars().count() > MAX_LOCATION_LENGTH {
        return Err(LocationError::TooLong);
    }
    if location.chars().any(char::is_control) {
        return Err(LocationError::InvalidCharacters);
    }
    Ok(())
}
