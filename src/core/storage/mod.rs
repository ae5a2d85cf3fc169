//! Persistence boundary for students, modules, enrollments and goals
//!
//! The dashboard depends on the [`StudentStore`] capability only.
//! [`SqliteStore`] is the bundled implementation.

mod sqlite;

pub use sqlite::SqliteStore;

use crate::core::models::{Goal, Module, Student, StudentSummary};
use chrono::NaiveDate;
use thiserror::Error;

/// Storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// A key, foreign-key or check constraint was violated
    #[error("integrity violation: {message}")]
    Integrity {
        /// Message reported by the database
        message: String,
    },

    /// Any other database error
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The database file or its directory could not be prepared
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Returns true if this error is a constraint violation the user can fix
    #[must_use]
    pub const fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity { .. })
    }
}

/// Result alias for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage capability the dashboard needs
///
/// Absence is reported as `Ok(None)`, never as an error.
pub trait StudentStore {
    /// Insert a student or update name and start date of an existing one
    ///
    /// # Errors
    /// Returns an error if the write fails.
    fn upsert_student(&mut self, student_id: &str, name: &str, start_date: NaiveDate)
        -> Result<()>;

    /// Load a student with all enrollments (joined with their modules) and goals
    ///
    /// Goal rows with an unknown type are skipped.
    ///
    /// # Errors
    /// Returns an error if a query fails.
    fn load_aggregate(&self, student_id: &str) -> Result<Option<Student>>;

    /// All students ordered by id
    ///
    /// # Errors
    /// Returns an error if the query fails.
    fn list_students(&self) -> Result<Vec<StudentSummary>>;

    /// Insert a module or update title and credits of an existing one
    ///
    /// # Errors
    /// Returns an error if the write fails.
    fn upsert_module(&mut self, module_id: &str, title: &str, ects: u32) -> Result<()>;

    /// Look up one module
    ///
    /// # Errors
    /// Returns an error if the query fails.
    fn get_module_by_id(&self, module_id: &str) -> Result<Option<Module>>;

    /// All modules ordered by id
    ///
    /// # Errors
    /// Returns an error if the query fails.
    fn list_modules(&self) -> Result<Vec<Module>>;

    /// Insert or update the enrollment of a student in a module
    ///
    /// # Errors
    /// Returns [`StorageError::Integrity`] if the student or module does not exist.
    fn upsert_enrollment(
        &mut self,
        student_id: &str,
        module_id: &str,
        grade: Option<f64>,
        date_passed: Option<NaiveDate>,
    ) -> Result<()>;

    /// Replace all goals of a student with `goals`, keeping their order
    ///
    /// # Errors
    /// Returns [`StorageError::Integrity`] if `goals` is non-empty and the student
    /// does not exist, or if `goals` holds two goals of the same kind. The
    /// previous goals are kept then.
    fn replace_goals(&mut self, student_id: &str, goals: &[Goal]) -> Result<()>;
}
