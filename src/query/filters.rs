//! Filter presets for listing views

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::ordering::eq_ignore_case;
use crate::record::Employee;

/// Rating at or above which an employee counts as a high performer
pub const HIGH_PERFORMER_RATING: f64 = 4.0;

/// Returned when a filter description cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter: '{0}' (expected all, active, high-performers, min-rating:<r> or dept:<name>)")]
pub struct ParseFilterError(pub String);

/// A preset narrowing of the record set
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterPreset {
    /// No narrowing
    #[default]
    All,
    /// Active employees only
    ActiveOnly,
    /// Rating at or above the threshold
    MinRating(f64),
    /// Department equal to the name, ignoring case
    Department(String),
}

impl FilterPreset {
    /// Rating >= 4.0
    pub fn high_performers() -> Self {
        FilterPreset::MinRating(HIGH_PERFORMER_RATING)
    }

    /// Checks if a record passes the filter
    pub fn matches<K>(&self, record: &Employee<K>) -> bool {
        match self {
            FilterPreset::All => true,
            FilterPreset::ActiveOnly => record.is_active(),
            FilterPreset::MinRating(threshold) => record.performance_rating() >= *threshold,
            FilterPreset::Department(name) => eq_ignore_case(record.department(), name),
        }
    }
}

impl fmt::Display for FilterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterPreset::All => write!(f, "all"),
            FilterPreset::ActiveOnly => write!(f, "active"),
            FilterPreset::MinRating(r) => write!(f, "min-rating:{}", r),
            FilterPreset::Department(d) => write!(f, "dept:{}", d),
        }
    }
}

impl FilterPreset {
    /// Parses a filter description, with `high-performers` meaning
    /// a rating at or above `high_performer_rating`
    pub fn parse_with(s: &str, high_performer_rating: f64) -> Result<Self, ParseFilterError> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        if lower.starts_with("dept:") {
            let dept = trimmed["dept:".len()..].trim();
            if dept.is_empty() {
                return Err(ParseFilterError(s.to_string()));
            }
            return Ok(FilterPreset::Department(dept.to_string()));
        }

        if let Some(rating) = lower.strip_prefix("min-rating:") {
            return rating
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|r| r.is_finite())
                .map(FilterPreset::MinRating)
                .ok_or_else(|| ParseFilterError(s.to_string()));
        }

        match lower.as_str() {
            "" | "all" => Ok(FilterPreset::All),
            "active" => Ok(FilterPreset::ActiveOnly),
            "high-performers" => Ok(FilterPreset::MinRating(high_performer_rating)),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

impl FromStr for FilterPreset {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterPreset::parse_with(s, HIGH_PERFORMER_RATING)
    }
}
