//! Config command handler

use super::fail;
use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use study_dashboard::config::Config;
use study_dashboard::info;

/// Keys accepted by `config get/set/unset`
const KEYS: [&str; 9] = [
    "level",
    "file",
    "verbose",
    "db_path",
    "reports_dir",
    "program_id",
    "program_name",
    "total_ects",
    "duration_months",
];

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show(config: &Config, key: Option<&str>) {
    let Some(key) = key else {
        println!("\n=== Configuration ({}) ===\n", Config::get_config_file_path().display());
        print!("{config}");
        return;
    };

    match config.get(key) {
        Some(value) => println!("{value}"),
        None => fail(&format!(
            "Unknown config key: '{key}' (known keys: {})",
            KEYS.join(", ")
        )),
    }
}

fn persist(config: &Config) {
    if let Err(e) = config.save() {
        fail(&format!("Failed to save config: {e}"));
    }
}

fn set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        fail(&e);
    }
    persist(config);
    info!("Config key '{key}' set");
    println!("✓ Set {key} = {value}");
}

fn unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        fail(&e);
    }
    persist(config);
    println!("✓ Reset {key} to default");
}

fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            fail(&format!("Failed to remove config file: {e}"));
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
