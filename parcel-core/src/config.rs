//! Resolver configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default similarity threshold. A match qualifies when
/// `edit distance / query length` is at most this value.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Default number of autocomplete suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Tuning for [`crate::AddressResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// 0.0 only accepts exact substrings; 1.0 accepts everything.
    pub threshold: f64,
    /// Maximum suggestions returned in suggest mode.
    pub suggestion_limit: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl ResolverConfig {
    pub fn new(threshold: f64, suggestion_limit: usize) -> Result<Self, ConfigError> {
        let config = Self {
            threshold,
            suggestion_limit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object; missing keys take their defaults.
    ///
    /// ```rust
    /// use parcel_core::ResolverConfig;
    ///
    /// let config = ResolverConfig::from_json(r#"{"threshold": 0.2}"#).unwrap();
    /// assert_eq!(config.threshold, 0.2);
    /// assert_eq!(config.suggestion_limit, 5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if self.suggestion_limit == 0 {
            return Err(ConfigError::InvalidSuggestionLimit);
        }
        Ok(())
    }
}
