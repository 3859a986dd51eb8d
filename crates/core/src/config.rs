//! Review configuration from environment variables or a JSON file

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MAX_TURNING_POINTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// A move is critical when some theme moves by more than this
    pub critical_threshold: f64,

    /// Turning points kept in the insights, largest impact first
    pub max_turning_points: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
            max_turning_points: DEFAULT_MAX_TURNING_POINTS,
        }
    }
}

impl ReviewConfig {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            critical_threshold: threshold,
            ..Self::default()
        }
    }

    /// Reads `REVIEW_CRITICAL_THRESHOLD` and `REVIEW_MAX_TURNING_POINTS`.
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let critical_threshold = env::var("REVIEW_CRITICAL_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.critical_threshold);

        let max_turning_points = env::var("REVIEW_MAX_TURNING_POINTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_turning_points);

        Self {
            critical_threshold,
            max_turning_points,
        }
    }

    /// Loads a JSON file; missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.critical_threshold.is_finite() || self.critical_threshold < 0.0 {
            return Err(Error::Config(format!(
                "critical_threshold must be a non-negative number, got {}",
                self.critical_threshold
            )));
        }
        if self.max_turning_points == 0 {
            return Err(Error::Config("max_turning_points must be at least 1".to_string()));
        }
        Ok(())
    }
}
