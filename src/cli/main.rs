//! Command-line interface entry point for `studydash`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use study_dashboard::config::Config;
use study_dashboard::info;
use study_dashboard::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Student { subcommand } => {
            commands::student::run(subcommand, &mut open_dashboard(&config));
        }
        Command::Module { subcommand } => {
            commands::module::run(subcommand, &mut open_dashboard(&config));
        }
        Command::Enroll {
            student,
            module,
            grade,
            passed,
        } => commands::enroll::run(
            &mut open_dashboard(&config),
            &student,
            &module,
            &grade,
            &passed,
        ),
        Command::Goals { subcommand } => {
            commands::goals::run(subcommand, &mut open_dashboard(&config));
        }
        Command::Overview { student, as_of } => {
            commands::overview::run(&open_dashboard(&config), &student, as_of.as_deref());
        }
        Command::Report {
            student,
            format,
            output,
            as_of,
        } => commands::report::run(
            &open_dashboard(&config),
            &student,
            &format,
            output.as_deref(),
            as_of.as_deref(),
            &config,
        ),
    }
}

/// Open the database for commands that need it, exiting on failure
fn open_dashboard(config: &Config) -> commands::CliDashboard {
    commands::open_dashboard(config).unwrap_or_else(|e| commands::fail(&e))
}
