//! Student command handler

use super::{date_or_today, fail, CliDashboard};
use crate::args::StudentSubcommand;
use study_dashboard::core::models::Student;
use study_dashboard::{error, verbose};

/// Dispatch student subcommands
pub fn run(subcommand: StudentSubcommand, dashboard: &mut CliDashboard) {
    match subcommand {
        StudentSubcommand::Save { id, name, start } => {
            save(dashboard, &id, &name, start.as_deref());
        }
        StudentSubcommand::List => list(dashboard),
        StudentSubcommand::Show { id } => show(dashboard, &id),
    }
}

fn save(dashboard: &mut CliDashboard, id: &str, name: &str, start: Option<&str>) {
    let start_date = date_or_today(start).unwrap_or_else(|e| fail(&e));
    if let Err(e) = dashboard.save_student(id, name, start_date) {
        error!("Saving student {id} failed: {e}");
        fail(&format!("Failed to save student: {e}"));
    }
    println!("✓ Student saved: {} ({})", id.trim(), start_date);
}

fn list(dashboard: &CliDashboard) {
    let students = dashboard.students().unwrap_or_else(|e| fail(&e.to_string()));
    if students.is_empty() {
        println!("No students yet. Add one with `studydash student save`.");
        return;
    }

    println!("{:<12} {:<28} {}", "ID", "Name", "Start");
    for s in &students {
        println!("{:<12} {:<28} {}", s.student_id, s.name, s.start_date);
    }
    verbose!("{} student(s)", students.len());
}

fn show(dashboard: &CliDashboard, id: &str) {
    match dashboard.student(id) {
        Ok(Some(student)) => print_student(&student),
        Ok(None) => fail(&format!("Student '{id}' not found")),
        Err(e) => fail(&e.to_string()),
    }
}

fn print_student(student: &Student) {
    println!("{} ({})", student.name, student.student_id);
    println!("  Study start: {}", student.start_date);

    println!("\nEnrollments:");
    if student.enrollments.is_empty() {
        println!("  —  No enrollments");
    }
    for e in &student.enrollments {
        let grade = e.grade.map_or_else(|| "—".to_string(), |g| format!("{g:.2}"));
        let passed = e
            .date_passed
            .map_or_else(|| "—".to_string(), |d| d.to_string());
        println!("  {:<40} grade {:<5} passed {}", e.module.display_label(), grade, passed);
    }

    println!("\nGoals:");
    if student.goals.is_empty() {
        println!("  —  No goals");
    }
    for goal in &student.goals {
        println!("  {:<18} {}", goal.title(), goal.value());
    }
}
