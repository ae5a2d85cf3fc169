//! Enrollment command handler

use super::{fail, CliDashboard};
use study_dashboard::core::input::{parse_date, parse_grade};
use study_dashboard::error;

/// Record a grade and pass date for one module of a student
///
/// # Arguments
/// * `grade` - Grade text; empty means ungraded, a decimal comma is accepted
/// * `passed` - Pass date text; empty means not passed
pub fn run(dashboard: &mut CliDashboard, student: &str, module: &str, grade: &str, passed: &str) {
    let grade = parse_grade(grade).unwrap_or_else(|e| fail(&e.to_string()));
    let date_passed = parse_date(passed).unwrap_or_else(|e| fail(&e.to_string()));

    if let Err(e) = dashboard.record_enrollment(student, module, grade, date_passed) {
        error!("Enrollment {student}/{module} failed: {e}");
        fail(&format!(
            "Failed to save enrollment (do student '{student}' and module '{module}' exist?): {e}"
        ));
    }
    println!("✓ Enrollment saved: {} / {}", student.trim(), module.trim());
}
