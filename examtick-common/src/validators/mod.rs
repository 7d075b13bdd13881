//! Input validation functions
//!
//! Validators for the free-text fields of an exam record. They check
//! shape only; normalization (trimming, blank-to-absent) happens in the
//! exam model.

mod location;
mod subject;
mod title;

pub use location::{LocationError, MAX_LOCATION_LENGTH, validate_location};
pub use subject::{MAX_SUBJECT_LENGTH, SubjectError, validate_subject};
pub use title::{MAX_TITLE_LENGTH, TitleError, validate_title};
