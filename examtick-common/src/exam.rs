//! Exam records
//!
//! The record shape exchanged with storage and transport layers, plus the
//! create/update inputs and the list views the home screen uses. Nothing in
//! here persists anything; callers own the collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::countdown::{
    TimeLeft, compute_time_left, format_countdown, format_countdown_for, is_passed,
};
use crate::pressure_mode::{PressureMode, StoredMode};
use crate::validators::{
    LocationError, SubjectError, TitleError, validate_location, validate_subject, validate_title,
};

/// Validation failure for exam input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExamInputError {
    #[error("invalid title: {0}")]
    Title(#[from] TitleError),

    #[error("invalid subject: {0}")]
    Subject(#[from] SubjectError),

    #[error("invalid location: {0}")]
    Location(#[from] LocationError),
}

/// A tracked exam
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// When the exam starts
    #[serde(alias = "dateTime")]
    pub date_time: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Unrecognized stored values are kept and fall back to a day count
    #[serde(default, alias = "pressureMode")]
    pub pressure_mode: StoredMode,

    /// Archived exams are kept but no longer count as active
    #[serde(default)]
    pub archived: bool,

    /// Owning user, when the record came from the companion API
    #[serde(default, alias = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields supplied when creating an exam
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExamInput {
    pub title: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(alias = "dateTime")]
    pub date_time: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "pressureMode")]
    pub pressure_mode: PressureMode,
}

/// Partial update; `None` leaves a field unchanged
///
/// For `subject` and `location`, `Some("")` clears the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateExamInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, alias = "dateTime")]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "pressureMode")]
    pub pressure_mode: Option<PressureMode>,
    #[serde(default)]
    pub archived: Option<bool>,
}

/// Trim an optional text field, mapping blank to `None`
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl Exam {
    /// Create a new active exam from validated input
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn new(input: CreateExamInput, now: DateTime<Utc>) -> Result<Self, ExamInputError> {
        validate_title(&input.title)?;
        if let Some(subject) = &input.subject {
            validate_subject(subject)?;
        }
        if let Some(location) = &input.location {
            validate_location(location)?;
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: input.title.trim().to_string(),
            subject: normalize_optional(input.subject),
            date_time: input.date_time,
            location: normalize_optional(input.location),
            pressure_mode: input.pressure_mode.into(),
            archived: false,
            user_id: None,
            created_at: Some(now),
            updated_at: Some(now),
        })
    }

    /// Apply a partial update
    ///
    /// Either every present field is applied or, on a validation error,
    /// none is. `updated_at` is bumped on success.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn apply(
        &mut self,
        update: UpdateExamInput,
        now: DateTime<Utc>,
    ) -> Result<(), ExamInputError> {
        if let Some(title) = &update.title {
            validate_title(title)?;
        }
        if let Some(subject) = &update.subject {
            validate_subject(subject)?;
        }
        if let Some(location) = &update.location {
            validate_location(location)?;
        }

        if let Some(title) = update.title {
            self.title = title.trim().to_string();
        }
        if update.subject.is_some() {
            self.subject = normalize_optional(update.subject);
        }
        if let Some(date_time) = update.date_time {
            self.date_time = date_time;
        }
        if update.location.is_some() {
            self.location = normalize_optional(update.location);
        }
        if let Some(mode) = update.pressure_mode {
            self.pressure_mode = mode.into();
        }
        if let Some(archived) = update.archived {
            self.archived = archived;
        }
        self.updated_at = Some(now);
        Ok(())
    }

    /// Mark the exam archived
    pub fn archive(&mut self, now: DateTime<Utc>) {
        self.set_archived(true, now);
    }

    /// Return the exam to the active list
    pub fn unarchive(&mut self, now: DateTime<Utc>) {
        self.set_archived(false, now);
    }

    fn set_archived(&mut self, archived: bool, now: DateTime<Utc>) {
        self.archived = archived;
        self.updated_at = Some(now);
    }

    /// Time left until the exam starts
    #[must_use]
    pub fn time_left(&self, now: DateTime<Utc>) -> TimeLeft {
        compute_time_left(self.date_time, now)
    }

    /// Whether the exam has already started
    #[must_use]
    pub fn is_passed(&self, now: DateTime<Utc>) -> bool {
        is_passed(self.date_time, now)
    }

    /// Countdown label in the exam's own pressure mode
    #[must_use]
    pub fn countdown_label(&self, now: DateTime<Utc>) -> String {
        self.format_time_left(&self.time_left(now))
    }

    /// Format an already computed countdown in the exam's pressure mode
    ///
    /// Unrecognized modes read `"<days> days left"`.
    #[must_use]
    pub fn format_time_left(&self, time_left: &TimeLeft) -> String {
        match &self.pressure_mode {
            StoredMode::Known(mode) => format_countdown(time_left, *mode),
            StoredMode::Unrecognized(raw) => format_countdown_for(time_left, raw),
        }
    }
}

/// Non-archived exams, soonest first
#[must_use]
pub fn active_exams(exams: &[Exam]) -> Vec<&Exam> {
    let mut active: Vec<&Exam> = exams.iter().filter(|e| !e.archived).collect();
    active.sort_by_key(|e| e.date_time);
    active
}

/// Archived exams, most recent first
#[must_use]
pub fn archived_exams(exams: &[Exam]) -> Vec<&Exam> {
    let mut archived: Vec<&Exam> = exams.iter().filter(|e| e.archived).collect();
    archived.sort_by(|a, b| b.date_time.cmp(&a.date_time));
    archived
}

/// The soonest active exam that has not started yet
#[must_use]
pub fn next_exam(exams: &[Exam], now: DateTime<Utc>) -> Option<&Exam> {
    active_exams(exams).into_iter().find(|e| !e.is_passed(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()
    }

    fn input(title: &str, days: i64) -> CreateExamInput {
        CreateExamInput {
            title: title.to_string(),
            subject: None,
            date_time: now() + Duration::days(days),
            location: None,
            pressure_mode: PressureMode::Calm,
        }
    }

    fn exam(title: &str, days: i64) -> Exam {
        Exam::new(input(title, days), now()).unwrap()
    }

    // =========================================================================
    // Creation
    // =========================================================================

    #[test]
    fn test_new_sets_defaults() {
        let e = exam("Algebra", 3);
        assert!(!e.archived);
        assert_eq!(e.created_at, Some(now()));
        assert_eq!(e.updated_at, Some(now()));
        assert!(Uuid::parse_str(&e.id).is_ok());
        assert_eq!(e.user_id, None);
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(exam("A", 1).id, exam("A", 1).id);
    }

    #[test]
    fn test_new_normalizes_text() {
        let mut i = input("  Algebra  ", 3);
        i.subject = Some("   ".to_string());
        i.location = Some(" Room 4 ".to_string());
        let e = Exam::new(i, now()).unwrap();
        assert_eq!(e.title, "Algebra");
        assert_eq!(e.subject, None);
        assert_eq!(e.location.as_deref(), Some("Room 4"));
    }

    #[test]
    fn test_new_rejects_empty_title() {
        assert_eq!(
            Exam::new(input("  ", 3), now()),
            Err(ExamInputError::Title(TitleError::Empty))
        );
    }

    #[test]
    fn test_new_rejects_bad_subject() {
        let mut i = input("Algebra", 3);
        i.subject = Some("a\u{7}b".to_string());
        assert_eq!(
            Exam::new(i, now()),
            Err(ExamInputError::Subject(SubjectError::InvalidCharacters))
        );
    }

    #[test]
    fn test_new_rejects_long_location() {
        let mut i = input("Algebra", 3);
        i.location = Some("a".repeat(121));
        assert_eq!(
            Exam::new(i, now()),
            Err(ExamInputError::Location(LocationError::TooLong))
        );

        let mut i = input("Algebra", 3);
        i.location = Some("a".repeat(120));
        assert!(Exam::new(i, now()).is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = ExamInputError::Title(TitleError::Empty);
        assert_eq!(err.to_string(), "invalid title: title is required");
    }

    #[test]
    fn test_error_source_is_field_error() {
        use std::error::Error;

        let err = ExamInputError::from(LocationError::TooLong);
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("location exceeds 120 characters"));
    }

    // =========================================================================
    // Updates
    // =========================================================================

    #[test]
    fn test_apply_partial_update() {
        let mut e = exam("Algebra", 3);
        let later = now() + Duration::hours(1);
        e.apply(
            UpdateExamInput {
                pressure_mode: Some(PressureMode::Brutal),
                location: Some("Hall B".to_string()),
                ..Default::default()
            },
            later,
        )
        .unwrap();

        assert_eq!(e.title, "Algebra");
        assert_eq!(e.pressure_mode, PressureMode::Brutal);
        assert_eq!(e.location.as_deref(), Some("Hall B"));
        assert_eq!(e.created_at, Some(now()));
        assert_eq!(e.updated_at, Some(later));
    }

    #[test]
    fn test_apply_clears_optional_with_empty_string() {
        let mut i = input("Algebra", 3);
        i.subject = Some("Maths".to_string());
        let mut e = Exam::new(i, now()).unwrap();

        e.apply(
            UpdateExamInput {
                subject: Some(String::new()),
                ..Default::default()
            },
            now(),
        )
        .unwrap();
        assert_eq!(e.subject, None);
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut e = exam("Algebra", 3);
        let before = e.clone();
        let result = e.apply(
            UpdateExamInput {
                pressure_mode: Some(PressureMode::Brutal),
                title: Some(String::new()),
                ..Default::default()
            },
            now() + Duration::hours(1),
        );
        assert_eq!(result, Err(ExamInputError::Title(TitleError::Empty)));
        assert_eq!(e, before);
    }

    #[test]
    fn test_archive_and_unarchive() {
        let mut e = exam("Algebra", 3);
        let later = now() + Duration::minutes(5);
        e.archive(later);
        assert!(e.archived);
        assert_eq!(e.updated_at, Some(later));
        e.unarchive(later);
        assert!(!e.archived);
    }

    // =========================================================================
    // Countdown helpers
    // =========================================================================

    #[test]
    fn test_countdown_label_uses_own_mode() {
        let mut e = exam("Algebra", 3);
        assert_eq!(e.countdown_label(now()), "3 days left");
        e.pressure_mode = PressureMode::Brutal.into();
        assert_eq!(e.countdown_label(now()), "72 hours left");
        assert_eq!(
            e.countdown_label(now() + Duration::days(4)),
            "Exam passed"
        );
    }

    #[test]
    fn test_countdown_label_unrecognized_mode_falls_back() {
        let mut e = exam("Algebra", 1);
        e.pressure_mode = StoredMode::Unrecognized("panic".to_string());
        // No singular special case on the fallback path
        assert_eq!(e.countdown_label(now()), "1 days left");
        assert_eq!(
            e.countdown_label(now() + Duration::hours(6)),
            "0 days left"
        );
        assert_eq!(
            e.countdown_label(now() + Duration::days(2)),
            "Exam passed"
        );
    }

    // =========================================================================
    // List views
    // =========================================================================

    #[test]
    fn test_active_sorted_ascending() {
        let mut archived = exam("Old", 1);
        archived.archived = true;
        let exams = vec![exam("Late", 9), archived, exam("Soon", 2), exam("Mid", 5)];

        let titles: Vec<&str> = active_exams(&exams)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Soon", "Mid", "Late"]);
    }

    #[test]
    fn test_archived_sorted_descending() {
        let mut a = exam("A", -10);
        let mut b = exam("B", -2);
        let mut c = exam("C", -5);
        a.archive(now());
        b.archive(now());
        c.archive(now());
        let exams = vec![a, exam("Active", 1), b, c];

        let titles: Vec<&str> = archived_exams(&exams)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_next_exam_skips_passed_and_archived() {
        let mut archived = exam("Archived", 1);
        archived.archive(now());
        let exams = vec![exam("Past", -1), archived, exam("Later", 7), exam("Next", 2)];

        assert_eq!(
            next_exam(&exams, now()).map(|e| e.title.as_str()),
            Some("Next")
        );
    }

    #[test]
    fn test_next_exam_none_when_all_passed() {
        let exams = vec![exam("Past", -1), exam("Older", -3)];
        assert!(next_exam(&exams, now()).is_none());
        assert!(next_exam(&[], now()).is_none());
    }

    #[test]
    fn test_next_exam_at_start_instant() {
        // An exam starting exactly now is not passed, so it is still next
        let mut e = exam("Now", 0);
        e.date_time = now();
        let exams = vec![e];
        assert_eq!(
            next_exam(&exams, now()).map(|e| e.title.as_str()),
            Some("Now")
        );
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn test_deserialize_app_record() {
        let json = r#"{
            "id": "1718000000000",
            "title": "Biology",
            "subject": "Cells",
            "date_time": "2026-06-10T08:00:00.000Z",
            "pressure_mode": "Realistic",
            "archived": false,
            "created_at": "2026-05-01T10:00:00.000Z",
            "updated_at": "2026-05-01T10:00:00.000Z"
        }"#;
        let e: Exam = serde_json::from_str(json).unwrap();
        assert_eq!(e.id, "1718000000000");
        assert_eq!(e.pressure_mode, PressureMode::Realistic);
        assert_eq!(e.location, None);
        assert_eq!(
            e.date_time,
            Utc.with_ymd_and_hms(2026, 6, 10, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "id": "ex_1",
            "userId": "user_9",
            "title": "History",
            "dateTime": "2026-06-10T08:00:00Z",
            "pressureMode": "brutal",
            "archived": true
        }"#;
        let e: Exam = serde_json::from_str(json).unwrap();
        assert_eq!(e.user_id.as_deref(), Some("user_9"));
        assert_eq!(e.pressure_mode, PressureMode::Brutal);
        assert!(e.archived);
        assert_eq!(e.created_at, None);
    }

    #[test]
    fn test_deserialize_unrecognized_mode() {
        let json = r#"{
            "id": "x",
            "title": "Art",
            "date_time": "2026-06-10T08:00:00Z",
            "pressure_mode": "panic"
        }"#;
        let e: Exam = serde_json::from_str(json).unwrap();
        assert_eq!(
            e.pressure_mode,
            StoredMode::Unrecognized("panic".to_string())
        );

        let back = serde_json::to_value(&e).unwrap();
        assert_eq!(back["pressure_mode"], "panic");
    }

    #[test]
    fn test_missing_mode_defaults_to_calm() {
        let json = r#"{"id":"x","title":"Art","date_time":"2026-06-10T08:00:00Z"}"#;
        let e: Exam = serde_json::from_str(json).unwrap();
        assert_eq!(e.pressure_mode, PressureMode::Calm);
        assert!(!e.archived);
    }
}
