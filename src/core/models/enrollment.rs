//! Enrollment model

use super::Module;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student's enrollment in a module
///
/// The module is embedded as a snapshot so credit weight and title are
/// available without another lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Module snapshot
    pub module: Module,

    /// Grade, lower is better (German scale 1.0 – 5.0)
    pub grade: Option<f64>,

    /// Date the module was passed; `None` while in progress
    pub date_passed: Option<NaiveDate>,
}

impl Enrollment {
    /// Create a new enrollment
    #[must_use]
    pub const fn new(module: Module, grade: Option<f64>, date_passed: Option<NaiveDate>) -> Self {
        Self {
            module,
            grade,
            date_passed,
        }
    }

    /// Whether the module has been passed
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.date_passed.is_some()
    }

    /// Credits this enrollment contributes (zero until passed)
    #[must_use]
    pub const fn earned_ects(&self) -> u32 {
        if self.is_passed() {
            self.module.ects
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module() -> Module {
        Module::new("STAT1".to_string(), "Statistics".to_string(), 5)
    }

    #[test]
    fn test_in_progress_enrollment_earns_nothing() {
        let enrollment = Enrollment::new(module(), Some(1.7), None);
        assert!(!enrollment.is_passed());
        assert_eq!(enrollment.earned_ects(), 0);
    }

    #[test]
    fn test_passed_enrollment_earns_module_credits() {
        let passed = NaiveDate::from_ymd_opt(2024, 3, 1);
        let enrollment = Enrollment::new(module(), None, passed);
        assert!(enrollment.is_passed());
        assert_eq!(enrollment.earned_ects(), 5);
    }
}
