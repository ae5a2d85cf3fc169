//! Goal model
//!
//! A student declares at most one goal per kind. The constructors validate
//! user input; evaluation trusts already-constructed values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rejected goal parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GoalError {
    /// Deadline duration must be at least one month
    #[error("duration in months must be > 0 (got {0})")]
    NonPositiveDuration(i64),

    /// Target grade average must be positive and finite
    #[error("target grade average must be > 0 (got {0})")]
    NonPositiveAverage(f64),

    /// Target pace must be non-negative and finite
    #[error("target credits per month must not be negative (got {0})")]
    NegativePace(f64),
}

/// Persisted tag of a goal variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    /// Grade average goal
    GradeAverage,
    /// Deadline / plan goal
    Deadline,
    /// Credits-per-month goal
    CpPace,
}

impl GoalKind {
    /// Tag stored in the `goal_type` column
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GradeAverage => "grade_average",
            Self::Deadline => "deadline",
            Self::CpPace => "cp_pace",
        }
    }
}

impl FromStr for GoalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grade_average" => Ok(Self::GradeAverage),
            "deadline" => Ok(Self::Deadline),
            "cp_pace" => Ok(Self::CpPace),
            _ => Err(format!("Unknown goal type: {s}")),
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A goal a student measures their progress against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Goal {
    /// Keep the grade average at or below `target_avg`
    GradeAverage {
        /// Target average (lower is better)
        target_avg: f64,
    },
    /// Keep credit progress in step with the elapsed share of `duration_months`
    Deadline {
        /// Planned months until graduation
        duration_months: u32,
    },
    /// Earn at least `target_cp_per_month` credits per month
    CpPace {
        /// Target credits per month
        target_cp_per_month: f64,
    },
}

impl Goal {
    /// Grade average goal
    ///
    /// # Errors
    /// Returns [`GoalError::NonPositiveAverage`] unless `target_avg` is finite and > 0.
    pub fn grade_average(target_avg: f64) -> Result<Self, GoalError> {
        if !target_avg.is_finite() || target_avg <= 0.0 {
            return Err(GoalError::NonPositiveAverage(target_avg));
        }
        Ok(Self::GradeAverage { target_avg })
    }

    /// Deadline goal
    ///
    /// # Errors
    /// Returns [`GoalError::NonPositiveDuration`] unless `duration_months` is > 0.
    pub fn deadline(duration_months: i64) -> Result<Self, GoalError> {
        u32::try_from(duration_months)
            .ok()
            .filter(|months| *months > 0)
            .map(|duration_months| Self::Deadline { duration_months })
            .ok_or(GoalError::NonPositiveDuration(duration_months))
    }

    /// Credit pace goal
    ///
    /// # Errors
    /// Returns [`GoalError::NegativePace`] unless `target_cp_per_month` is finite and >= 0.
    pub fn cp_pace(target_cp_per_month: f64) -> Result<Self, GoalError> {
        if !target_cp_per_month.is_finite() || target_cp_per_month < 0.0 {
            return Err(GoalError::NegativePace(target_cp_per_month));
        }
        Ok(Self::CpPace {
            target_cp_per_month,
        })
    }

    /// Rebuild a goal from a stored `(kind, value)` row without validation
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_stored(kind: GoalKind, value: f64) -> Self {
        match kind {
            GoalKind::GradeAverage => Self::GradeAverage { target_avg: value },
            GoalKind::Deadline => Self::Deadline {
                duration_months: value.round().max(0.0) as u32,
            },
            GoalKind::CpPace => Self::CpPace {
                target_cp_per_month: value,
            },
        }
    }

    /// Variant tag
    #[must_use]
    pub const fn kind(&self) -> GoalKind {
        match self {
            Self::GradeAverage { .. } => GoalKind::GradeAverage,
            Self::Deadline { .. } => GoalKind::Deadline,
            Self::CpPace { .. } => GoalKind::CpPace,
        }
    }

    /// The single numeric parameter, as stored in the `value` column
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::GradeAverage { target_avg } => target_avg,
            Self::Deadline { duration_months } => f64::from(duration_months),
            Self::CpPace {
                target_cp_per_month,
            } => target_cp_per_month,
        }
    }

    /// Display title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::GradeAverage { .. } => "Grade average",
            Self::Deadline { .. } => "Deadline / plan",
            Self::CpPace { .. } => "Credit pace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_accept_valid_input() {
        assert_eq!(
            Goal::grade_average(2.5),
            Ok(Goal::GradeAverage { target_avg: 2.5 })
        );
        assert_eq!(
            Goal::deadline(36),
            Ok(Goal::Deadline {
                duration_months: 36
            })
        );
        assert_eq!(
            Goal::cp_pace(0.0),
            Ok(Goal::CpPace {
                target_cp_per_month: 0.0
            })
        );
    }

    #[test]
    fn test_constructors_reject_invalid_input() {
        assert_eq!(Goal::deadline(0), Err(GoalError::NonPositiveDuration(0)));
        assert_eq!(Goal::deadline(-3), Err(GoalError::NonPositiveDuration(-3)));
        assert_eq!(
            Goal::grade_average(0.0),
            Err(GoalError::NonPositiveAverage(0.0))
        );
        assert!(Goal::grade_average(f64::NAN).is_err());
        assert_eq!(Goal::cp_pace(-0.5), Err(GoalError::NegativePace(-0.5)));
        assert!(Goal::cp_pace(f64::INFINITY).is_err());
    }

    #[test]
    fn test_kind_tags_round_trip() {
        for kind in [GoalKind::GradeAverage, GoalKind::Deadline, GoalKind::CpPace] {
            assert_eq!(kind.as_str().parse::<GoalKind>(), Ok(kind));
        }
        assert!("weekly_hours".parse::<GoalKind>().is_err());
    }

    #[test]
    fn test_from_stored_rounds_deadline_months() {
        let goal = Goal::from_stored(GoalKind::Deadline, 35.6);
        assert_eq!(
            goal,
            Goal::Deadline {
                duration_months: 36
            }
        );
        assert!((goal.value() - 36.0).abs() < f64::EPSILON);
    }
}
