//! Exam subject validation
//!
//! The subject is optional free text (e.g. "Mathematics"). Blank subjects are
//! treated as absent by the exam model, so empty strings pass here.

use std::fmt;

/// Maximum length for exam subjects in characters
pub const MAX_SUBJECT_LENGTH: usize = 120;

/// Validation error for exam subjects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    /// Subject exceeds maximum length
    TooLong,
    /// Subject contains control characters
    InvalidCharacters,
}

impl fmt::Display for SubjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(f, "subject exceeds {MAX_SUBJECT_LENGTH} characters"),
            Self::InvalidCharacters => f.write_str("subject contains control characters"),
        }
    }
}

impl std::error::Error for SubjectError {}

/// Validate an exam subject
///
/// # Errors
///
/// Returns a `SubjectError` variant describing the validation failure.
pub fn validate_subject(subject: &str) -> Result<(), SubjectError> {
    let subject = subject.trim();
    if subject.chars().count() > MAX_SUBJECT_LENGTH {
        return Err(SubjectError::TooLong);
    }
    if subject.chars().any(char::is_control) {
        return Err(SubjectError::InvalidCharacters);
    }
    Ok(())
}
