//! Study program model

use serde::{Deserialize, Serialize};

/// The study program all goals are evaluated against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyProgram {
    /// Program identifier
    pub program_id: String,

    /// Program name (e.g., "B.Sc. Computer Science")
    pub name: String,

    /// Credits required to finish the program
    pub total_ects: u32,

    /// Planned duration in months
    pub duration_months: u32,
}

impl StudyProgram {
    /// Create a new study program
    #[must_use]
    pub const fn new(
        program_id: String,
        name: String,
        total_ects: u32,
        duration_months: u32,
    ) -> Self {
        Self {
            program_id,
            name,
            total_ects,
            duration_months,
        }
    }
}
