//! SQLite implementation of [`StudentStore`]

use super::{Result, StorageError, StudentStore};
use crate::core::models::{Enrollment, Goal, GoalKind, Module, Student, StudentSummary};
use crate::{debug, info};
use chrono::NaiveDate;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::fs;
use std::path::Path;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Student store backed by a single SQLite connection
pub struct SqliteStore {
    conn: Connection,
}

/// Map constraint violations to [`StorageError::Integrity`]
fn write_error(err: rusqlite::Error) -> StorageError {
    if err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
        StorageError::Integrity {
            message: err.to_string(),
        }
    } else {
        StorageError::Sqlite(err)
    }
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and apply the schema
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created or the
    /// database cannot be opened or initialized.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        info!("Database connected: {}", path.display());
        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    ///
    /// # Errors
    /// Returns an error if the schema cannot be applied.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wrap an existing connection, enabling foreign keys and creating missing tables
    ///
    /// # Errors
    /// Returns an error if the schema cannot be applied.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// Underlying connection
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    fn enrollments_for(&self, student_id: &str) -> Result<Vec<Enrollment>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.module_id, m.title, m.ects, e.grade, e.date_passed
             FROM enrollment e
             JOIN module m ON m.module_id = e.module_id
             WHERE e.student_id = ?1
             ORDER BY m.module_id",
        )?;

        let rows = stmt.query_map([student_id], |row| {
            Ok(Enrollment::new(
                Module::new(row.get(0)?, row.get(1)?, row.get(2)?),
                row.get(3)?,
                row.get(4)?,
            ))
        })?;

        let enrollments = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(enrollments)
    }

    fn goals_for(&self, student_id: &str) -> Result<Vec<Goal>> {
        let mut stmt = self.conn.prepare(
            "SELECT goal_type, value FROM student_goals
             WHERE student_id = ?1
             ORDER BY rowid",
        )?;

        let rows = stmt.query_map([student_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?;

        let mut goals = Vec::new();
        for row in rows {
            let (goal_type, value) = row?;
            match goal_type.parse::<GoalKind>() {
                Ok(kind) => goals.push(Goal::from_stored(kind, value)),
                Err(_) => {
                    debug!("Skipping unknown goal type '{goal_type}' of student {student_id}");
                }
            }
        }
        Ok(goals)
    }
}

impl StudentStore for SqliteStore {
    fn upsert_student(
        &mut self,
        student_id: &str,
        name: &str,
        start_date: NaiveDate,
    ) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO student (student_id, name, start_date)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(student_id) DO UPDATE SET
                   name = excluded.name,
                   start_date = excluded.start_date",
                params![student_id, name, start_date],
            )
            .map_err(write_error)?;
        info!("Student saved: {student_id}");
        Ok(())
    }

    fn load_aggregate(&self, student_id: &str) -> Result<Option<Student>> {
        let profile = self
            .conn
            .query_row(
                "SELECT student_id, name, start_date FROM student WHERE student_id = ?1",
                [student_id],
                |row| Ok(Student::new(row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some(mut student) = profile else {
            return Ok(None);
        };
        student.enrollments = self.enrollments_for(student_id)?;
        student.goals = self.goals_for(student_id)?;
        Ok(Some(student))
    }

    fn list_students(&self) -> Result<Vec<StudentSummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT student_id, name, start_date FROM student ORDER BY student_id")?;

        let rows = stmt.query_map([], |row| {
            Ok(StudentSummary {
                student_id: row.get(0)?,
                name: row.get(1)?,
                start_date: row.get(2)?,
            })
        })?;

        let students = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(students)
    }

    fn upsert_module(&mut self, module_id: &str, title: &str, ects: u32) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO module (module_id, title, ects)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(module_id) DO UPDATE SET
                   title = excluded.title,
                   ects = excluded.ects",
                params![module_id, title, ects],
            )
            .map_err(write_error)?;
        info!("Module saved: {module_id} ({ects} ECTS)");
        Ok(())
    }

    fn get_module_by_id(&self, module_id: &str) -> Result<Option<Module>> {
        let module = self
            .conn
            .query_row(
                "SELECT module_id, title, ects FROM module WHERE module_id = ?1",
                [module_id],
                |row| Ok(Module::new(row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;
        Ok(module)
    }

    fn list_modules(&self) -> Result<Vec<Module>> {
        let mut stmt = self
            .conn
            .prepare("SELECT module_id, title, ects FROM module ORDER BY module_id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Module::new(row.get(0)?, row.get(1)?, row.get(2)?))
        })?;

        let modules = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(modules)
    }

    fn upsert_enrollment(
        &mut self,
        student_id: &str,
        module_id: &str,
        grade: Option<f64>,
        date_passed: Option<NaiveDate>,
    ) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO enrollment (student_id, module_id, grade, date_passed)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(student_id, module_id) DO UPDATE SET
                   grade = excluded.grade,
                   date_passed = excluded.date_passed",
                params![student_id, module_id, grade, date_passed],
            )
            .map_err(write_error)?;
        info!("Enrollment saved: {student_id} / {module_id}");
        Ok(())
    }

    fn replace_goals(&mut self, student_id: &str, goals: &[Goal]) -> Result<()> {
        let tx = self.conn.transaction().map_err(write_error)?;
        tx.execute(
            "DELETE FROM student_goals WHERE student_id = ?1",
            [student_id],
        )
        .map_err(write_error)?;

        for goal in goals {
            tx.execute(
                "INSERT INTO student_goals (student_id, goal_type, value) VALUES (?1, ?2, ?3)",
                params![student_id, goal.kind().as_str(), goal.value()],
            )
            .map_err(write_error)?;
        }

        tx.commit().map_err(write_error)?;
        info!("Goals replaced for {student_id}: {} goal(s)", goals.len());
        Ok(())
    }
}
