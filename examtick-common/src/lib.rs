//! examtick Common Library
//!
//! Countdown engine, pressure modes and exam record types shared by the
//! examtick front ends.

pub mod countdown;
pub mod display;
pub mod exact;
pub mod exam;
pub mod pressure_mode;
pub mod time;
pub mod validators;

pub use countdown::{
    EXAM_PASSED_LABEL, TimeLeft, compute_time_left, format_countdown, format_countdown_for,
    has_passed, is_passed, time_left_until,
};
pub use display::{CountdownView, RefreshCadence};
pub use exact::{ClockFormat, format_exact, format_exact_in};
pub use exam::{
    CreateExamInput, Exam, ExamInputError, UpdateExamInput, active_exams, archived_exams,
    next_exam,
};
pub use pressure_mode::{ParsePressureModeError, PressureMode, StoredMode};
