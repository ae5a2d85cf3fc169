//! Goals command handler

use super::{fail, CliDashboard};
use crate::args::GoalsSubcommand;
use study_dashboard::core::dashboard::GoalTargets;
use study_dashboard::error;

/// Dispatch goals subcommands
pub fn run(subcommand: GoalsSubcommand, dashboard: &mut CliDashboard) {
    match subcommand {
        GoalsSubcommand::Set {
            student,
            duration,
            avg,
            pace,
        } => {
            let targets = GoalTargets {
                target_avg: avg,
                duration_months: duration,
                target_cp_per_month: pace,
            };
            match dashboard.update_goals(&student, targets) {
                Ok(goals) if goals.is_empty() => println!("✓ Goals cleared for {student}"),
                Ok(goals) => {
                    println!("✓ {} goal(s) saved for {student}", goals.len());
                    for goal in &goals {
                        println!("  {:<18} {}", goal.title(), goal.value());
                    }
                }
                Err(e) => {
                    error!("Updating goals of {student} failed: {e}");
                    fail(&e.to_string());
                }
            }
        }
        GoalsSubcommand::Clear { student } => {
            if let Err(e) = dashboard.clear_goals(&student) {
                fail(&e.to_string());
            }
            println!("✓ Goals cleared for {student}");
        }
    }
}
