//! Overview command handler
//!
//! Prints the goal monitoring table: one row per criterion with status,
//! value and target.

use super::{date_or_today, fail, CliDashboard};
use study_dashboard::core::evaluation::overall_status;
use study_dashboard::core::report::{overview_rows, OverviewRow};
use study_dashboard::verbose;

/// Print the monitoring table for `student` as of `as_of` (default today)
pub fn run(dashboard: &CliDashboard, student: &str, as_of: Option<&str>) {
    let as_of = date_or_today(as_of).unwrap_or_else(|e| fail(&e));
    let overview = dashboard
        .overview(student, as_of)
        .unwrap_or_else(|e| fail(&e.to_string()));

    let Some(overview) = overview else {
        print_table(&[OverviewRow::placeholder()]);
        return;
    };

    println!(
        "{} ({}) as of {as_of}",
        overview.student.name, overview.student.student_id
    );
    print_table(&overview_rows(&overview.evaluations));

    if let Some(status) = overall_status(&overview.evaluations) {
        println!("\nOverall: {status}");
    }
    let snapshot = &overview.snapshot;
    verbose!(
        "{} month(s), {} ECTS, average {:.2}, {:.2} ECTS/month",
        snapshot.months_elapsed,
        snapshot.earned_credits,
        snapshot.average_grade,
        snapshot.credits_per_month
    );
}

fn print_table(rows: &[OverviewRow]) {
    println!("{:<8} {:<20} {:>10} {:>10}", "Status", "Criterion", "Value", "Target");
    for row in rows {
        println!(
            "{:<8} {:<20} {:>10} {:>10}",
            row.status, row.criterion, row.value, row.target
        );
    }
}
