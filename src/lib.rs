//! Library for the study dashboard: goal evaluation over a student's
//! enrollments, SQLite persistence and report rendering.

pub mod core;
pub mod logger;

pub use self::core::config;
pub use self::core::get_version;
