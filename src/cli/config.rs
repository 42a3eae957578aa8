//! CLI configuration
//!
//! Optional JSON file; every field has a default, so `{}` is a valid
//! config and running without `--config` uses the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::Severity;
use crate::query::HIGH_PERFORMER_RATING;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Insert the ten sample employees at startup (default: true)
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    /// Minimum log severity written to stderr (default: "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// How many records `top-paid` shows (default: 5)
    #[serde(default = "default_top_paid_count")]
    pub top_paid_count: usize,

    /// Rating threshold for `top-performers` (default: 4.5)
    #[serde(default = "default_top_performer_rating")]
    pub top_performer_rating: f64,

    /// Rating threshold for the `high-performers` filter (default: 4.0)
    #[serde(default = "default_high_performer_rating")]
    pub high_performer_rating: f64,

    /// Rating threshold for `raise` (default: 4.5)
    #[serde(default = "default_raise_min_rating")]
    pub raise_min_rating: f64,

    /// Raise percentage for `raise` (default: 10)
    #[serde(default = "default_raise_percentage")]
    pub raise_percentage: f64,
}

fn default_seed_sample_data() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_top_paid_count() -> usize {
    5
}
fn default_top_performer_rating() -> f64 {
    4.5
}
fn default_high_performer_rating() -> f64 {
    HIGH_PERFORMER_RATING
}
fn default_raise_min_rating() -> f64 {
    4.5
}
fn default_raise_percentage() -> f64 {
    10.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed_sample_data(),
            log_level: default_log_level(),
            top_paid_count: default_top_paid_count(),
            top_performer_rating: default_top_performer_rating(),
            high_performer_rating: default_high_performer_rating(),
            raise_min_rating: default_raise_min_rating(),
            raise_percentage: default_raise_percentage(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        self.log_severity()?;

        let ratings = [
            ("top_performer_rating", self.top_performer_rating),
            ("high_performer_rating", self.high_performer_rating),
            ("raise_min_rating", self.raise_min_rating),
        ];
        for (name, value) in ratings {
            if !value.is_finite() {
                return Err(CliError::config_error(format!("{} must be a finite number", name)));
            }
        }

        if !self.raise_percentage.is_finite() || self.raise_percentage <= -100.0 {
            return Err(CliError::config_error(
                "raise_percentage must be a finite number greater than -100",
            ));
        }

        Ok(())
    }

    /// Minimum log severity
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level.parse::<Severity>().map_err(CliError::config_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_json(r#"{"top_paid_count": 3, "log_level": "info"}"#).unwrap();
        assert_eq!(config.top_paid_count, 3);
        assert_eq!(config.log_severity().unwrap(), Severity::Info);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let err = Config::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(err.message().contains("loud"));
    }

    #[test]
    fn test_rejects_bad_percentage() {
        assert!(Config::from_json(r#"{"raise_percentage": -100}"#).is_err());
        assert!(Config::from_json(r#"{"raise_percentage": -20}"#).is_ok());
    }

    #[test]
    fn test_rejects_unknown_field() {
        assert!(Config::from_json(r#"{"data_dir": "/tmp"}"#).is_err());
    }
}
