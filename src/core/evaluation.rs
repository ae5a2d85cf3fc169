//! Goal rules
//!
//! Each goal variant turns a student's progress into a [`GoalEvaluation`].
//! Evaluation is a pure read: the same student, program and `as_of` date
//! always give the same result.

use crate::core::models::{
    EvaluationCriterion, Goal, GoalEvaluation, Status, Student, StudyProgram,
};
use chrono::NaiveDate;

/// Grade average may exceed the target by this much before turning red
pub const GRADE_TOLERANCE: f64 = 0.3;

/// Credit progress may lag time progress by this many percentage points before turning red
pub const DEADLINE_TOLERANCE_PERCENT: f64 = 10.0;

/// Share of the target pace that still counts as yellow
pub const PACE_TOLERANCE_FACTOR: f64 = 0.8;

/// Status of a grade average against its target (lower grades are better)
#[must_use]
pub fn grade_status(average: f64, target: f64) -> Status {
    if average <= target {
        Status::Green
    } else if average <= target + GRADE_TOLERANCE {
        Status::Yellow
    } else {
        Status::Red
    }
}

/// Status of the gap between credit progress and time progress, in percentage points
#[must_use]
pub fn deadline_status(delta: f64) -> Status {
    if delta >= 0.0 {
        Status::Green
    } else if delta >= -DEADLINE_TOLERANCE_PERCENT {
        Status::Yellow
    } else {
        Status::Red
    }
}

/// Status of a credits-per-month pace against its target
#[must_use]
pub fn pace_status(pace: f64, target: f64) -> Status {
    if pace >= target {
        Status::Green
    } else if pace >= target * PACE_TOLERANCE_FACTOR {
        Status::Yellow
    } else {
        Status::Red
    }
}

impl Goal {
    /// Evaluate this goal for `student` within `program` as of a given date
    #[must_use]
    pub fn evaluate(
        &self,
        student: &Student,
        program: &StudyProgram,
        as_of: NaiveDate,
    ) -> GoalEvaluation {
        let (status, criteria) = match *self {
            Self::GradeAverage { target_avg } => {
                let avg = student.average_grade();
                (
                    grade_status(avg, target_avg),
                    vec![EvaluationCriterion::new("Average grade", avg, target_avg)],
                )
            }
            Self::Deadline { duration_months } => {
                let credit_pct = student.credit_progress_percent(i64::from(program.total_ects));
                let time_pct = student.time_progress_percent(i64::from(duration_months), as_of);
                let delta = credit_pct - time_pct;
                (
                    deadline_status(delta),
                    vec![
                        EvaluationCriterion::new("Credit progress %", credit_pct, time_pct),
                        EvaluationCriterion::new("Progress delta", delta, 0.0),
                    ],
                )
            }
            Self::CpPace {
                target_cp_per_month,
            } => {
                let pace = student.credits_per_month(as_of);
                (
                    pace_status(pace, target_cp_per_month),
                    vec![EvaluationCriterion::new(
                        "Credits per month",
                        pace,
                        target_cp_per_month,
                    )],
                )
            }
        };

        GoalEvaluation {
            title: self.title().to_string(),
            status,
            criteria,
        }
    }
}

/// Evaluate every goal of `student` in stored order
///
/// Goals of the same kind are not merged; each one yields its own result.
#[must_use]
pub fn evaluate_all_goals(
    student: &Student,
    program: &StudyProgram,
    as_of: NaiveDate,
) -> Vec<GoalEvaluation> {
    student
        .goals
        .iter()
        .map(|goal| goal.evaluate(student, program, as_of))
        .collect()
}

/// Worst status across evaluations, `None` when there are none
#[must_use]
pub fn overall_status(evaluations: &[GoalEvaluation]) -> Option<Status> {
    evaluations.iter().map(|e| e.status).min()
}
