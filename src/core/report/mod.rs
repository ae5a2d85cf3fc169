//! Report generation for the goal monitoring view
//!
//! Renders a student's goal evaluations and progress snapshot as Markdown or
//! HTML through `askama` templates.

pub mod formats;

use crate::core::evaluation::overall_status;
use crate::core::metrics::ProgressSnapshot;
use crate::core::models::{GoalEvaluation, Student, StudyProgram};
use chrono::NaiveDate;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Text shown when there is nothing to evaluate
pub const NO_DATA_LABEL: &str = "No student / no data";

/// One line of the monitoring table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    /// Status label (`GREEN`, `YELLOW`, `RED`, or `—` for the placeholder)
    pub status: String,
    /// Goal title the criterion belongs to
    pub goal: String,
    /// Criterion name
    pub criterion: String,
    /// Measured value, two decimals
    pub value: String,
    /// Target value, two decimals
    pub target: String,
}

impl OverviewRow {
    /// Row shown in place of an empty table
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            status: "—".to_string(),
            goal: String::new(),
            criterion: NO_DATA_LABEL.to_string(),
            value: String::new(),
            target: String::new(),
        }
    }

    /// Lower-case status for CSS classes
    #[must_use]
    pub fn status_class(&self) -> String {
        match self.status.as_str() {
            "GREEN" | "YELLOW" | "RED" => self.status.to_lowercase(),
            _ => "none".to_string(),
        }
    }
}

/// Flatten evaluations into one row per criterion
///
/// Returns a single placeholder row when `evaluations` is empty.
#[must_use]
pub fn overview_rows(evaluations: &[GoalEvaluation]) -> Vec<OverviewRow> {
    let rows: Vec<OverviewRow> = evaluations
        .iter()
        .flat_map(|evaluation| {
            evaluation.criteria.iter().map(move |c| OverviewRow {
                status: evaluation.status.to_string(),
                goal: evaluation.title.clone(),
                criterion: c.name.clone(),
                value: format!("{:.2}", c.value),
                target: format!("{:.2}", c.target),
            })
        })
        .collect();

    if rows.is_empty() {
        vec![OverviewRow::placeholder()]
    } else {
        rows
    }
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Evaluated student
    pub student: &'a Student,
    /// Program the goals are measured against
    pub program: &'a StudyProgram,
    /// Goal evaluations in goal order
    pub evaluations: &'a [GoalEvaluation],
    /// Derived progress metrics
    pub snapshot: &'a ProgressSnapshot,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        student: &'a Student,
        program: &'a StudyProgram,
        evaluations: &'a [GoalEvaluation],
        snapshot: &'a ProgressSnapshot,
    ) -> Self {
        Self {
            student,
            program,
            evaluations,
            snapshot,
        }
    }

    /// Evaluation date
    #[must_use]
    pub const fn as_of(&self) -> NaiveDate {
        self.snapshot.as_of
    }

    /// Worst status across all goals, or `—` without goals
    #[must_use]
    pub fn overall_label(&self) -> String {
        overall_status(self.evaluations).map_or_else(|| "—".to_string(), |s| s.to_string())
    }

    /// Table rows, placeholder included
    #[must_use]
    pub fn rows(&self) -> Vec<OverviewRow> {
        overview_rows(self.evaluations)
    }

    /// Enrollment lines in module order
    #[must_use]
    pub fn enrollment_lines(&self) -> Vec<EnrollmentLine> {
        self.student
            .enrollments
            .iter()
            .map(|e| EnrollmentLine {
                module: e.module.display_label(),
                grade: e.grade.map_or_else(|| "—".to_string(), |g| format!("{g:.2}")),
                passed: e
                    .date_passed
                    .map_or_else(|| "—".to_string(), |d| d.format("%Y-%m-%d").to_string()),
            })
            .collect()
    }
}

/// One enrollment as shown in reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentLine {
    /// Module label, e.g. `"M1 – Algorithms (5 ECTS)"`
    pub module: String,
    /// Grade with one decimal, or `—`
    pub grade: String,
    /// Pass date, or `—`
    pub passed: String,
}

/// Pre-formatted values shared by all report templates
#[derive(Debug, Clone)]
pub struct ReportView {
    /// Student id
    pub student_id: String,
    /// Student name
    pub name: String,
    /// Study start, ISO date
    pub start_date: String,
    /// Program name
    pub program_name: String,
    /// Credits required by the program
    pub total_ects: u32,
    /// Planned program duration
    pub duration_months: u32,
    /// Evaluation date, ISO
    pub as_of: String,
    /// Worst goal status
    pub overall: String,
    /// Whole months since start
    pub months_elapsed: u32,
    /// Average grade, two decimals
    pub average_grade: String,
    /// Credits earned so far
    pub earned_credits: u32,
    /// Credits still missing
    pub remaining_credits: u32,
    /// Pace, two decimals
    pub credits_per_month: String,
    /// Elapsed time in percent
    pub time_progress: String,
    /// Earned credits in percent
    pub credit_progress: String,
    /// Monitoring table
    pub rows: Vec<OverviewRow>,
    /// Enrollment table
    pub enrollments: Vec<EnrollmentLine>,
    /// Crate version in the footer
    pub version: &'static str,
}

impl ReportView {
    /// Format everything a template needs from `ctx`
    #[must_use]
    pub fn from_context(ctx: &ReportContext) -> Self {
        let snapshot = ctx.snapshot;
        Self {
            student_id: ctx.student.student_id.clone(),
            name: ctx.student.name.clone(),
            start_date: ctx.student.start_date.format("%Y-%m-%d").to_string(),
            program_name: ctx.program.name.clone(),
            total_ects: ctx.program.total_ects,
            duration_months: ctx.program.duration_months,
            as_of: ctx.as_of().format("%Y-%m-%d").to_string(),
            overall: ctx.overall_label(),
            months_elapsed: snapshot.months_elapsed,
            average_grade: format!("{:.2}", snapshot.average_grade),
            earned_credits: snapshot.earned_credits,
            remaining_credits: snapshot.remaining_credits(ctx.program),
            credits_per_month: format!("{:.2}", snapshot.credits_per_month),
            time_progress: format!("{:.1}", snapshot.time_progress_percent),
            credit_progress: format!("{:.1}", snapshot.credit_progress_percent),
            rows: ctx.rows(),
            enrollments: ctx.enrollment_lines(),
            version: crate::core::get_version(),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
