//! Core domain, storage and reporting for the study dashboard

pub mod config;
pub mod dashboard;
pub mod evaluation;
pub mod input;
pub mod metrics;
pub mod models;
pub mod report;
pub mod storage;

/// Returns the current version of the `study-dashboard` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
