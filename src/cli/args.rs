//! CLI argument definitions for `studydash`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use study_dashboard::config::ConfigOverrides;
use study_dashboard::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `db_path`, `total_ects`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum StudentSubcommand {
    /// Create or update a student profile.
    Save {
        /// Student id
        #[arg(long)]
        id: String,
        /// Display name
        #[arg(long)]
        name: String,
        /// Study start date (YYYY-MM-DD or DD.MM.YYYY); defaults to today
        #[arg(long, value_name = "DATE")]
        start: Option<String>,
    },
    /// List all students.
    List,
    /// Show a student's profile, enrollments and goals.
    Show {
        /// Student id
        #[arg(value_name = "STUDENT")]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ModuleSubcommand {
    /// Create or update a catalogue module.
    Save {
        /// Module id
        #[arg(long)]
        id: String,
        /// Module title
        #[arg(long, default_value = "")]
        title: String,
        /// Credit value; empty counts as 0
        #[arg(long, default_value = "")]
        ects: String,
    },
    /// List all modules.
    List,
}

#[derive(Debug, Subcommand)]
pub enum GoalsSubcommand {
    /// Replace a student's goals.
    ///
    /// Each given target creates one goal; omitted targets are dropped.
    Set {
        /// Student id
        #[arg(value_name = "STUDENT")]
        student: String,
        /// Planned study duration in months (deadline goal)
        #[arg(long, value_name = "MONTHS", allow_negative_numbers = true)]
        duration: Option<i64>,
        /// Target grade average (grade goal)
        #[arg(long, value_name = "GRADE", allow_negative_numbers = true)]
        avg: Option<f64>,
        /// Target credits per month (pace goal)
        #[arg(long, value_name = "ECTS", allow_negative_numbers = true)]
        pace: Option<f64>,
    },
    /// Remove all goals of a student.
    Clear {
        /// Student id
        #[arg(value_name = "STUDENT")]
        student: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage student profiles.
    Student {
        #[command(subcommand)]
        subcommand: StudentSubcommand,
    },
    /// Manage the module catalogue.
    Module {
        #[command(subcommand)]
        subcommand: ModuleSubcommand,
    },
    /// Record a grade and/or pass date for a student's module.
    Enroll {
        /// Student id
        #[arg(long)]
        student: String,
        /// Module id
        #[arg(long)]
        module: String,
        /// Grade, decimal comma allowed (e.g., 2,3)
        #[arg(long, default_value = "")]
        grade: String,
        /// Pass date (YYYY-MM-DD, DD.MM.YYYY or DD.MM.YY)
        #[arg(long, value_name = "DATE", default_value = "")]
        passed: String,
    },
    /// Manage a student's goals.
    Goals {
        #[command(subcommand)]
        subcommand: GoalsSubcommand,
    },
    /// Show the goal monitoring table for a student.
    Overview {
        /// Student id
        #[arg(value_name = "STUDENT")]
        student: String,
        /// Evaluation date; defaults to today
        #[arg(long, value_name = "DATE")]
        as_of: Option<String>,
    },
    /// Generate a goal report for a student.
    Report {
        /// Student id
        #[arg(value_name = "STUDENT")]
        student: String,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,

        /// Output file path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Evaluation date; defaults to today
        #[arg(long, value_name = "DATE")]
        as_of: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studydash",
    about = "Study progress dashboard",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config database path
    #[arg(long = "config-db-path", value_name = "PATH")]
    pub config_db_path: Option<PathBuf>,

    /// Override config database path (short form)
    #[arg(long = "db", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--db`) take precedence over long-form flags
    /// (e.g., `--config-db-path`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            db_path: path_string(self.db.as_ref())
                .or_else(|| path_string(self.config_db_path.as_ref())),
            reports_dir: path_string(self.reports_dir.as_ref())
                .or_else(|| path_string(self.config_reports_dir.as_ref())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_db_path: None,
            db: None,
            config_reports_dir: None,
            reports_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.db_path.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli {
            config_level: Some(LogLevelArg::Debug),
            config_log_file: Some(PathBuf::from("/tmp/test.log")),
            config_verbose: Some(true),
            db: Some(PathBuf::from("/tmp/dash.db")),
            reports_dir: Some(PathBuf::from("/output")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.db_path, Some("/tmp/dash.db".to_string()));
        assert_eq!(overrides.reports_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let cli = Cli {
            config_db_path: Some(PathBuf::from("/long/dash.db")),
            db: Some(PathBuf::from("/short/dash.db")),
            config_reports_dir: Some(PathBuf::from("/long/out")),
            reports_dir: Some(PathBuf::from("/short/out")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.db_path, Some("/short/dash.db".to_string()));
        assert_eq!(overrides.reports_dir, Some("/short/out".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let cli = Cli {
            config_db_path: Some(PathBuf::from("/long/dash.db")),
            config_reports_dir: Some(PathBuf::from("/long/out")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.db_path, Some("/long/dash.db".to_string()));
        assert_eq!(overrides.reports_dir, Some("/long/out".to_string()));
    }

    #[test]
    fn test_parse_goals_set() {
        let cli = Cli::try_parse_from([
            "studydash", "goals", "set", "s1", "--duration", "36", "--avg", "2.5",
        ])
        .unwrap();

        match cli.command {
            Command::Goals {
                subcommand:
                    GoalsSubcommand::Set {
                        student,
                        duration,
                        avg,
                        pace,
                    },
            } => {
                assert_eq!(student, "s1");
                assert_eq!(duration, Some(36));
                assert_eq!(avg, Some(2.5));
                assert!(pace.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_enroll_defaults() {
        let cli = Cli::try_parse_from([
            "studydash", "--db", "x.db", "enroll", "--student", "s1", "--module", "M1",
        ])
        .unwrap();

        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        match cli.command {
            Command::Enroll { grade, passed, .. } => {
                assert!(grade.is_empty());
                assert!(passed.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
