//! Progress snapshot of a student within a study program

use crate::core::models::{Student, StudyProgram};
use chrono::NaiveDate;
use serde::Serialize;

/// All derived progress metrics of a student at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    /// Date the snapshot was taken for
    pub as_of: NaiveDate,
    /// Whole months since the study start
    pub months_elapsed: u32,
    /// Mean grade, `0.0` when nothing is graded
    pub average_grade: f64,
    /// Credits of passed modules
    pub earned_credits: u32,
    /// Earned credits per elapsed month
    pub credits_per_month: f64,
    /// Elapsed share of the program duration in percent
    pub time_progress_percent: f64,
    /// Earned share of the program credits in percent
    pub credit_progress_percent: f64,
}

impl ProgressSnapshot {
    /// Compute a snapshot for `student` against `program`
    #[must_use]
    pub fn compute(student: &Student, program: &StudyProgram, as_of: NaiveDate) -> Self {
        Self {
            as_of,
            months_elapsed: student.months_since_start(as_of),
            average_grade: student.average_grade(),
            earned_credits: student.earned_credits(),
            credits_per_month: student.credits_per_month(as_of),
            time_progress_percent: student
                .time_progress_percent(i64::from(program.duration_months), as_of),
            credit_progress_percent: student
                .credit_progress_percent(i64::from(program.total_ects)),
        }
    }

    /// Credits still missing to reach `program.total_ects`
    #[must_use]
    pub const fn remaining_credits(&self, program: &StudyProgram) -> u32 {
        program.total_ects.saturating_sub(self.earned_credits)
    }
}
