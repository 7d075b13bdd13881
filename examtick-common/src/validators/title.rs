//! Exam title validation
//!
//! The title is the only required text field on an exam.

use std::fmt;

/// Maximum length for exam titles in characters
pub const MAX_TITLE_LENGTH: usize = 120;

/// Validation error for exam titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    /// Title is empty or whitespace only
    Empty,
    /// Title exceeds maximum length
    TooLong,
    /// Title contains control characters
    InvalidCharacters,
}

impl fmt::Display for TitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("title is required"),
            Self::TooLong => write!(f, "title exceeds {MAX_TITLE_LENGTH} characters"),
            Self::InvalidCharacters => f.write_str("title contains control characters"),
        }
    }
}

impl std::error::Error for TitleError {}

/// Validate an exam title
///
/// Checks:
/// - Not empty after trimming whitespace
/// - Does not exceed maximum length (120 characters, after trimming)
/// - No control characters (titles are single-line)
///
/// # Errors
///
/// Returns a `TitleError` variant describing the validation failure.
pub fn validate_title(title: &str) -> Result<(), TitleError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TitleError::Empty);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(TitleError::TooLong);
    }
    if title.chars().any(char::is_control) {
        return Err(TitleError::InvalidCharacters);
    }
    Ok(())
}
