//! Module model

use serde::{Deserialize, Serialize};

/// A catalogue module a student can enroll in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Module identifier (e.g., "DLBDSIPWP01")
    pub module_id: String,

    /// Module title (e.g., "Introduction to Programming with Python")
    pub title: String,

    /// Credit weight in ECTS
    pub ects: u32,
}

impl Module {
    /// Create a new module
    ///
    /// # Arguments
    /// * `module_id` - Unique module identifier
    /// * `title` - Human-readable title
    /// * `ects` - Credit weight
    #[must_use]
    pub const fn new(module_id: String, title: String, ects: u32) -> Self {
        Self {
            module_id,
            title,
            ects,
        }
    }

    /// Label used in module pickers, e.g. `"MATH01 – Linear Algebra (5 ECTS)"`
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} – {} ({} ECTS)", self.module_id, self.title, self.ects)
    }
}
