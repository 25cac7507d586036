//! Service configuration with JSON file persistence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::confidence::ConfidenceThresholds;
use crate::core::constants::DEFAULT_LINE_PROJECTION_KM;

/// Errors raised while loading, saving or validating configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    IoError { message: String },
    ParseError { message: String },
    InvalidParameter { parameter: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError { message } => write!(f, "config I/O error: {}", message),
            ConfigError::ParseError { message } => write!(f, "config parse error: {}", message),
            ConfigError::InvalidParameter { parameter, reason } => {
                write!(f, "invalid config parameter '{}': {}", parameter, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunable parameters of the triangulation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangulationConfig {
    /// Dispersion thresholds used by the confidence scorer
    pub confidence_thresholds: ConfidenceThresholds,
    /// Distance bearing lines are projected to in reports (km)
    pub line_projection_km: f64,
}

impl Default for TriangulationConfig {
    fn default() -> Self {
        Self {
            confidence_thresholds: ConfidenceThresholds::default(),
            line_projection_km: DEFAULT_LINE_PROJECTION_KM,
        }
    }
}

impl TriangulationConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!(
                "failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file (pretty-printed)
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!(
                "failed to write config file '{}': {}",
                path.as_ref().display(),
                e
            ),
        })
    }

    /// Check parameter sanity
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.confidence_thresholds;
        let ordered = 0.0 < t.very_high && t.very_high < t.high && t.high < t.medium;
        if !ordered {
            return Err(ConfigError::InvalidParameter {
                parameter: "confidence_thresholds".to_string(),
                reason: "thresholds must be positive and strictly increasing".to_string(),
            });
        }

        if !(self.line_projection_km.is_finite() && self.line_projection_km > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "line_projection_km".to_string(),
                reason: "must be a positive finite distance".to_string(),
            });
        }

        Ok(())
    }
}
