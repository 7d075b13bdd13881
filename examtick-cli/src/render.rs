//! Text rendering of countdown lists

use chrono::{DateTime, Utc};
use examtick_common::{ClockFormat, CountdownView, Exam, active_exams, archived_exams, next_exam};

use crate::constants::{MSG_ARCHIVED_HEADER, MSG_NO_EXAMS, NEXT_MARKER};

/// What to include and how to show exact times
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub clock: ClockFormat,
    pub include_archived: bool,
}

/// One exam as `<marker> <title> [<mode>] <label> (<exact>)`
pub fn render_line(exam: &Exam, view: &CountdownView, is_next: bool) -> String {
    let marker = if is_next { NEXT_MARKER } else { " " };
    format!(
        "{} {} [{}] {} ({})",
        marker, exam.title, exam.pressure_mode, view.label, view.exact
    )
}

/// Render every active exam, soonest first, then optionally the archive
pub fn render_exams(exams: &[Exam], now: DateTime<Utc>, options: RenderOptions) -> Vec<String> {
    let next = next_exam(exams, now);
    let mut lines = Vec::new();

    let active = active_exams(exams);
    if active.is_empty() {
        lines.push(MSG_NO_EXAMS.to_string());
    }
    for exam in active {
        let view = CountdownView::for_exam(exam, now, options.clock);
        // Ids from the app are millisecond timestamps and can collide
        let is_next = next.is_some_and(|n| std::ptr::eq(n, exam));
        lines.push(render_line(exam, &view, is_next));
    }

    if options.include_archived {
        let archived = archived_exams(exams);
        if !archived.is_empty() {
            lines.push(String::new());
            lines.push(MSG_ARCHIVED_HEADER.to_string());
            for exam in archived {
                let view = CountdownView::for_exam(exam, now, options.clock);
                lines.push(render_line(exam, &view, false));
            }
        }
    }

    lines
}
