//! Module catalogue command handler

use super::{fail, CliDashboard};
use crate::args::ModuleSubcommand;
use study_dashboard::core::input::parse_ects;
use study_dashboard::error;

/// Dispatch module subcommands
pub fn run(subcommand: ModuleSubcommand, dashboard: &mut CliDashboard) {
    match subcommand {
        ModuleSubcommand::Save { id, title, ects } => save(dashboard, &id, &title, &ects),
        ModuleSubcommand::List => list(dashboard),
    }
}

fn save(dashboard: &mut CliDashboard, id: &str, title: &str, ects: &str) {
    let ects = parse_ects(ects).unwrap_or_else(|e| fail(&e.to_string()));
    if let Err(e) = dashboard.save_module(id, title, ects) {
        error!("Saving module {id} failed: {e}");
        fail(&format!("Failed to save module: {e}"));
    }
    println!("✓ Module saved: {} ({ects} ECTS)", id.trim());
}

fn list(dashboard: &CliDashboard) {
    let modules = dashboard.modules().unwrap_or_else(|e| fail(&e.to_string()));
    if modules.is_empty() {
        println!("No modules yet. Add one with `studydash module save`.");
        return;
    }
    for module in &modules {
        println!("{}", module.display_label());
    }
}
