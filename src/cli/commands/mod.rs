//! CLI command handlers for `studydash`.
//!
//! Each command is implemented in its own submodule. Handlers print a
//! `✓`/`✗` line and exit with status 1 on failure.

pub mod config;
pub mod enroll;
pub mod goals;
pub mod module;
pub mod overview;
pub mod report;
pub mod student;

use chrono::{Local, NaiveDate};
use std::path::Path;
use study_dashboard::config::Config;
use study_dashboard::core::dashboard::Dashboard;
use study_dashboard::core::input::parse_date;
use study_dashboard::core::storage::SqliteStore;
use study_dashboard::error;

/// Dashboard as used by the CLI
pub type CliDashboard = Dashboard<SqliteStore>;

/// Open the configured database and attach the configured program
pub fn open_dashboard(config: &Config) -> Result<CliDashboard, String> {
    let db_path = Path::new(&config.database.path);
    let store = SqliteStore::open(db_path).map_err(|e| {
        error!("Failed to open database {}: {e}", db_path.display());
        format!("Failed to open database {}: {e}", db_path.display())
    })?;
    Ok(Dashboard::new(store, config.program.to_study_program()))
}

/// Today's local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an optional date argument, falling back to today
pub fn date_or_today(text: Option<&str>) -> Result<NaiveDate, String> {
    match text {
        None => Ok(today()),
        Some(text) => parse_date(text)
            .map(|date| date.unwrap_or_else(today))
            .map_err(|e| e.to_string()),
    }
}

/// Print an error and exit with status 1
pub fn fail(message: &str) -> ! {
    eprintln!("✗ {message}");
    std::process::exit(1);
}
