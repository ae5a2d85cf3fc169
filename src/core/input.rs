//! Parsing of grade, date and credit text as typed by a user

use chrono::NaiveDate;
use thiserror::Error;

/// Unparsable user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Grade text is not a number
    #[error("invalid grade '{0}' (examples: 3,3 or 3.3)")]
    InvalidGrade(String),

    /// Date text matches none of the accepted formats
    #[error("invalid date '{0}' (examples: 17.02.2026 or 2026-02-17)")]
    InvalidDate(String),

    /// Credit text is not a non-negative integer
    #[error("invalid ECTS value '{0}'")]
    InvalidEcts(String),

    /// A required field was left empty
    #[error("{0} must not be empty")]
    Missing(&'static str),
}

/// Accepted date formats, tried in order. The two-digit year goes first
/// because `%Y` would also accept `26` as the year 0026.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%y", "%d.%m.%Y"];

/// Parse an optional grade; accepts a decimal comma and stray spaces
///
/// # Errors
/// Returns [`InputError::InvalidGrade`] when the text is not a finite number.
pub fn parse_grade(text: &str) -> Result<Option<f64>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let normalized: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized
        .parse::<f64>()
        .ok()
        .filter(|grade| grade.is_finite())
        .map(Some)
        .ok_or_else(|| InputError::InvalidGrade(trimmed.to_string()))
}

/// Parse an optional date in ISO (`2026-02-17`) or German (`17.02.2026`, `17.02.26`) form
///
/// # Errors
/// Returns [`InputError::InvalidDate`] when no format matches.
pub fn parse_date(text: &str) -> Result<Option<NaiveDate>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .map(Some)
        .ok_or_else(|| InputError::InvalidDate(trimmed.to_string()))
}

/// Parse a credit value; empty text counts as zero
///
/// # Errors
/// Returns [`InputError::InvalidEcts`] for anything but a non-negative integer.
pub fn parse_ects(text: &str) -> Result<u32, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| InputError::InvalidEcts(trimmed.to_string()))
}

/// Trim a required text field
///
/// # Errors
/// Returns [`InputError::Missing`] with `field` when the trimmed text is empty.
pub fn require(field: &'static str, text: &str) -> Result<String, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(InputError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grade_accepts_comma_and_dot() {
        assert_eq!(parse_grade("3,3"), Ok(Some(3.3)));
        assert_eq!(parse_grade(" 1.7 "), Ok(Some(1.7)));
        assert_eq!(parse_grade("2, 0"), Ok(Some(2.0)));
        assert_eq!(parse_grade(""), Ok(None));
        assert_eq!(parse_grade("   "), Ok(None));
    }

    #[test]
    fn test_parse_grade_rejects_text() {
        assert_eq!(
            parse_grade("gut"),
            Err(InputError::InvalidGrade("gut".to_string()))
        );
        assert!(parse_grade("NaN").is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 2, 17);
        assert_eq!(parse_date("2026-02-17"), Ok(expected));
        assert_eq!(parse_date("17.02.2026"), Ok(expected));
        assert_eq!(parse_date("17.02.26"), Ok(expected));
        assert_eq!(parse_date(""), Ok(None));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("31.02.2026").is_err());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn test_parse_ects() {
        assert_eq!(parse_ects("5"), Ok(5));
        assert_eq!(parse_ects(""), Ok(0));
        assert!(parse_ects("-5").is_err());
        assert!(parse_ects("2.5").is_err());
    }

    #[test]
    fn test_require_trims() {
        assert_eq!(require("name", "  Kim "), Ok("Kim".to_string()));
        assert_eq!(require("name", " "), Err(InputError::Missing("name")));
    }
}
