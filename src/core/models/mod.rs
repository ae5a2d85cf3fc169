//! Data models for the study dashboard

pub mod enrollment;
pub mod evaluation;
pub mod goal;
pub mod module;
pub mod program;
pub mod student;

pub use enrollment::Enrollment;
pub use evaluation::{EvaluationCriterion, GoalEvaluation, Status};
pub use goal::{Goal, GoalError, GoalKind};
pub use module::Module;
pub use program::StudyProgram;
pub use student::{Student, StudentSummary};
