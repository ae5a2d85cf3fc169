//! Student aggregate and its derived progress metrics

use super::{Enrollment, Goal};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Profile row of a student, without enrollments or goals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    /// Student identifier
    pub student_id: String,
    /// Display name
    pub name: String,
    /// Study start date
    pub start_date: NaiveDate,
}

/// A student together with their enrollments and goals
///
/// All metrics below are pure reads over the student's own enrollments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Student identifier
    pub student_id: String,

    /// Display name
    pub name: String,

    /// Study start date; anchors all elapsed-time metrics
    pub start_date: NaiveDate,

    /// Enrollments (order carries no meaning)
    pub enrollments: Vec<Enrollment>,

    /// Goals in evaluation/display order
    pub goals: Vec<Goal>,
}

impl Student {
    /// Create a student with no enrollments and no goals
    #[must_use]
    pub const fn new(student_id: String, name: String, start_date: NaiveDate) -> Self {
        Self {
            student_id,
            name,
            start_date,
            enrollments: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Add an enrollment
    pub fn add_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }

    /// Append a goal (evaluated after the existing ones)
    pub fn add_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    /// Whole calendar months between the start date and `as_of`
    ///
    /// Counts month boundaries only and ignores the day of month, so
    /// Jan 31 → Feb 1 is one month. Never negative.
    #[must_use]
    pub fn months_since_start(&self, as_of: NaiveDate) -> u32 {
        let years = i64::from(as_of.year()) - i64::from(self.start_date.year());
        let months = i64::from(as_of.month()) - i64::from(self.start_date.month());
        u32::try_from((years * 12 + months).max(0)).unwrap_or(u32::MAX)
    }

    /// Mean of all recorded grades, `0.0` when nothing is graded yet
    #[must_use]
    pub fn average_grade(&self) -> f64 {
        let grades: Vec<f64> = self.enrollments.iter().filter_map(|e| e.grade).collect();
        if grades.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = grades.len() as f64;
        grades.iter().sum::<f64>() / count
    }

    /// Sum of credits over passed enrollments
    #[must_use]
    pub fn earned_credits(&self) -> u32 {
        self.enrollments.iter().map(Enrollment::earned_ects).sum()
    }

    /// Elapsed share of `duration_months` in percent, clamped to `[0, 100]`
    ///
    /// Returns `0.0` for a non-positive duration.
    #[must_use]
    pub fn time_progress_percent(&self, duration_months: i64, as_of: NaiveDate) -> f64 {
        if duration_months <= 0 {
            return 0.0;
        }
        let months = f64::from(self.months_since_start(as_of));
        #[allow(clippy::cast_precision_loss)]
        let duration = duration_months as f64;
        clamp_percent(months / duration * 100.0)
    }

    /// Earned share of `total_ects` in percent, clamped to `[0, 100]`
    ///
    /// Returns `0.0` for a non-positive total.
    #[must_use]
    pub fn credit_progress_percent(&self, total_ects: i64) -> f64 {
        if total_ects <= 0 {
            return 0.0;
        }
        let earned = f64::from(self.earned_credits());
        #[allow(clippy::cast_precision_loss)]
        let total = total_ects as f64;
        clamp_percent(earned / total * 100.0)
    }

    /// Earned credits per elapsed month; the month count is floored at 1
    #[must_use]
    pub fn credits_per_month(&self, as_of: NaiveDate) -> f64 {
        let months = self.months_since_start(as_of).max(1);
        f64::from(self.earned_credits()) / f64::from(months)
    }
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
