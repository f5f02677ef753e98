//! Value types for timestamped records and their associations.
//!
//! Records and associations are plain serializable structs with named
//! fields; timestamps are `f64` seconds, identifiers are opaque strings
//! (usually relative file paths) the matcher never interprets.

use serde::{Deserialize, Serialize};

use crate::error::{FramesyncError, Result};

/// A single entry of a record list: a timestamp and an opaque identifier.
///
/// Ordering within a sequence is defined by `timestamp`; any trailing
/// fields of the source line beyond the identifier are dropped at parse
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampedRecord {
    pub timestamp: f64,
    pub identifier: String,
}

impl TimestampedRecord {
    pub fn new(timestamp: f64, identifier: impl Into<String>) -> Self {
        Self {
            timestamp,
            identifier: identifier.into(),
        }
    }
}

/// One matched pair of records, one from each input sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub ts_a: f64,
    pub id_a: String,
    pub ts_b: f64,
    pub id_b: String,
}

/// Matching configuration.
///
/// Easily serializable and loadable from JSON while keeping complexity
/// minimal.
///
/// # Example
///
/// ```rust
/// use framesync::MatchConfig;
///
/// let config = MatchConfig::default();
/// assert_eq!(config.tolerance, 0.02);
///
/// let config = MatchConfig::from_json(r#"{ "tolerance": 0.05 }"#).unwrap();
/// assert_eq!(config.tolerance, 0.05);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum acceptable `|ts_a - ts_b|` for a match, in the same time
    /// units as the record timestamps (seconds for TUM-style lists).
    #[serde(default = "MatchConfig::default_tolerance")]
    pub tolerance: f64,
}

impl MatchConfig {
    const fn default_tolerance() -> f64 {
        crate::associate::DEFAULT_TOLERANCE
    }

    /// Build a config with the given tolerance, rejecting values the
    /// matcher cannot meaningfully compare against.
    pub fn new(tolerance: f64) -> Result<Self> {
        let config = Self { tolerance };
        config.validate()?;
        Ok(config)
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        assert!(
            tolerance.is_finite() && tolerance >= 0.0,
            "Tolerance must be a finite non-negative number"
        );
        self.tolerance = tolerance;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() {
            return Err(FramesyncError::InvalidInput(
                "tolerance must be finite (not NaN or infinity)".to_string(),
            ));
        }
        if self.tolerance < 0.0 {
            return Err(FramesyncError::InvalidInput(
                "tolerance must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        use serde::de::Error;

        let config: MatchConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e.to_string()));
        }
        Ok(config)
    }

    /// Save configuration as a JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::default_tolerance(),
        }
    }
}
