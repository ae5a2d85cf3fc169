//! Goal evaluation results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level health indicator, ordered worst (`Red`) to best (`Green`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Off track
    Red,
    /// At risk
    Yellow,
    /// On track
    Green,
}

impl Status {
    /// Upper-case label, e.g. `"GREEN"`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comparable metric line of an evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationCriterion {
    /// Metric name (e.g., "Average grade")
    pub name: String,
    /// Measured value
    pub value: f64,
    /// Value the goal asks for
    pub target: f64,
}

impl EvaluationCriterion {
    /// Create a criterion
    #[must_use]
    pub fn new(name: &str, value: f64, target: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
            target,
        }
    }
}

/// Outcome of evaluating one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalEvaluation {
    /// Title of the evaluated goal
    pub title: String,
    /// Overall status
    pub status: Status,
    /// Metric lines in display order
    pub criteria: Vec<EvaluationCriterion>,
}
