//! Dashboard service
//!
//! Ties the storage capability, input validation and goal evaluation together.
//! The CLI data-entry commands and the monitoring commands both go through
//! [`Dashboard`].

use crate::core::evaluation::evaluate_all_goals;
use crate::core::input::{require, InputError};
use crate::core::metrics::ProgressSnapshot;
use crate::core::models::{
    Goal, GoalError, GoalEvaluation, Module, Student, StudentSummary, StudyProgram,
};
use crate::core::storage::{StorageError, StudentStore};
use crate::debug;
use chrono::NaiveDate;
use thiserror::Error;

/// Failures surfaced to the dashboard's callers
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Storage failed (including constraint violations)
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Goal parameters were rejected
    #[error("invalid goal: {0}")]
    Goal(#[from] GoalError),

    /// User input could not be parsed
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// The referenced student does not exist
    #[error("student '{0}' not found")]
    StudentNotFound(String),
}

/// Result alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Goal targets as entered by the user; `None` means "no such goal"
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GoalTargets {
    /// Target grade average
    pub target_avg: Option<f64>,
    /// Planned duration in months
    pub duration_months: Option<i64>,
    /// Target credits per month
    pub target_cp_per_month: Option<f64>,
}

impl GoalTargets {
    /// Validate the targets into goals ordered grade average, deadline, pace
    ///
    /// # Errors
    /// Returns the first [`GoalError`] encountered.
    pub fn into_goals(self) -> std::result::Result<Vec<Goal>, GoalError> {
        let mut goals = Vec::new();
        if let Some(target_avg) = self.target_avg {
            goals.push(Goal::grade_average(target_avg)?);
        }
        if let Some(months) = self.duration_months {
            goals.push(Goal::deadline(months)?);
        }
        if let Some(pace) = self.target_cp_per_month {
            goals.push(Goal::cp_pace(pace)?);
        }
        Ok(goals)
    }
}

/// Everything the monitoring view shows for one student
#[derive(Debug, Clone, PartialEq)]
pub struct GoalOverview {
    /// Loaded aggregate
    pub student: Student,
    /// One evaluation per goal, in goal order
    pub evaluations: Vec<GoalEvaluation>,
    /// Derived progress metrics
    pub snapshot: ProgressSnapshot,
}

/// Dashboard over a student store and the active study program
pub struct Dashboard<S: StudentStore> {
    store: S,
    program: StudyProgram,
}

impl<S: StudentStore> Dashboard<S> {
    /// Create a dashboard
    #[must_use]
    pub const fn new(store: S, program: StudyProgram) -> Self {
        Self { store, program }
    }

    /// Active study program
    #[must_use]
    pub const fn program(&self) -> &StudyProgram {
        &self.program
    }

    /// Create or update a student profile
    ///
    /// # Errors
    /// Returns an input error for an empty id or name, or a storage error.
    pub fn save_student(
        &mut self,
        student_id: &str,
        name: &str,
        start_date: NaiveDate,
    ) -> Result<()> {
        let student_id = require("student id", student_id)?;
        let name = require("name", name)?;
        self.store.upsert_student(&student_id, &name, start_date)?;
        Ok(())
    }

    /// Create or update a catalogue module
    ///
    /// # Errors
    /// Returns an input error for an empty id, or a storage error.
    pub fn save_module(&mut self, module_id: &str, title: &str, ects: u32) -> Result<()> {
        let module_id = require("module id", module_id)?;
        self.store.upsert_module(&module_id, title.trim(), ects)?;
        Ok(())
    }

    /// Record a grade and/or pass date for a student's module
    ///
    /// # Errors
    /// Returns an input error for an empty id, or [`StorageError::Integrity`]
    /// (wrapped) if the student or module is unknown.
    pub fn record_enrollment(
        &mut self,
        student_id: &str,
        module_id: &str,
        grade: Option<f64>,
        date_passed: Option<NaiveDate>,
    ) -> Result<()> {
        let student_id = require("student id", student_id)?;
        let module_id = require("module id", module_id)?;
        self.store
            .upsert_enrollment(&student_id, &module_id, grade, date_passed)?;
        Ok(())
    }

    /// Replace a student's goals with the given targets
    ///
    /// Returns the goals that were stored.
    ///
    /// # Errors
    /// Returns a goal error for invalid targets (nothing is stored then),
    /// [`DashboardError::StudentNotFound`] for an unknown student, or a storage error.
    pub fn update_goals(&mut self, student_id: &str, targets: GoalTargets) -> Result<Vec<Goal>> {
        let goals = targets.into_goals()?;
        let student_id = self.existing_student_id(student_id)?;
        self.store.replace_goals(&student_id, &goals)?;
        Ok(goals)
    }

    /// Remove all goals of a student
    ///
    /// # Errors
    /// Returns [`DashboardError::StudentNotFound`] for an unknown student, or a storage error.
    pub fn clear_goals(&mut self, student_id: &str) -> Result<()> {
        let student_id = self.existing_student_id(student_id)?;
        self.store.replace_goals(&student_id, &[])?;
        Ok(())
    }

    /// All students
    ///
    /// # Errors
    /// Returns a storage error if the query fails.
    pub fn students(&self) -> Result<Vec<StudentSummary>> {
        Ok(self.store.list_students()?)
    }

    /// All catalogue modules
    ///
    /// # Errors
    /// Returns a storage error if the query fails.
    pub fn modules(&self) -> Result<Vec<Module>> {
        Ok(self.store.list_modules()?)
    }

    /// One catalogue module
    ///
    /// # Errors
    /// Returns a storage error if the query fails.
    pub fn module(&self, module_id: &str) -> Result<Option<Module>> {
        Ok(self.store.get_module_by_id(module_id.trim())?)
    }

    /// Full student aggregate
    ///
    /// # Errors
    /// Returns a storage error if the query fails.
    pub fn student(&self, student_id: &str) -> Result<Option<Student>> {
        Ok(self.store.load_aggregate(student_id.trim())?)
    }

    /// Evaluate all goals of a student as of `as_of`
    ///
    /// # Errors
    /// Returns a storage error if loading fails.
    pub fn overview(&self, student_id: &str, as_of: NaiveDate) -> Result<Option<GoalOverview>> {
        let student_id = student_id.trim();
        let Some(student) = self.store.load_aggregate(student_id)? else {
            debug!("No student '{student_id}' to evaluate");
            return Ok(None);
        };

        let evaluations = evaluate_all_goals(&student, &self.program, as_of);
        let snapshot = ProgressSnapshot::compute(&student, &self.program, as_of);
        debug!(
            "Evaluated {} goal(s) for {student_id} as of {as_of}",
            evaluations.len()
        );

        Ok(Some(GoalOverview {
            student,
            evaluations,
            snapshot,
        }))
    }

    /// Trimmed id of a stored student
    fn existing_student_id(&self, student_id: &str) -> Result<String> {
        let student_id = student_id.trim();
        if self.store.load_aggregate(student_id)?.is_some() {
            Ok(student_id.to_string())
        } else {
            Err(DashboardError::StudentNotFound(student_id.to_string()))
        }
    }
}
