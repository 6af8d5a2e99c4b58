//! Generator configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_RESAMPLES, DEFAULT_WIDTH, MIN_HEIGHT,
    MIN_WIDTH,
};
use crate::error::{CarveError, Result};

/// Grid size and search limits for a [`PathCarver`](crate::PathCarver).
///
/// Missing fields in a config file take their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarveConfig {
    pub width: usize,
    pub height: usize,
    pub max_attempts: u32,
    /// Endpoint redraws per attempt when start and end coincide
    pub max_resamples: u32,
    /// Step placements tried per attempt before it is abandoned
    pub step_budget: Option<u64>,
}

impl Default for CarveConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_resamples: DEFAULT_MAX_RESAMPLES,
            step_budget: None,
        }
    }
}

impl CarveConfig {
    pub fn new(width: usize, height: usize, max_attempts: u32) -> Self {
        Self {
            width,
            height,
            max_attempts,
            ..Self::default()
        }
    }

    pub fn with_max_resamples(mut self, max_resamples: u32) -> Self {
        self.max_resamples = max_resamples;
        self
    }

    pub fn with_step_budget(mut self, budget: u64) -> Self {
        self.step_budget = Some(budget);
        self
    }

    /// Reject configurations no attempt could run under
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(CarveError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_attempts == 0 {
            return Err(CarveError::InvalidAttemptLimit);
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| CarveError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| CarveError::Config {
            reason: format!("{}: {}", path.display(), e),
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CarveConfig::default();
        assert_eq!((config.width, config.height), (10, 10));
        assert_eq!(config.max_attempts, 1000);
        assert_eq!(config.max_resamples, 32);
        assert_eq!(config.step_budget, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = CarveConfig::new(6, 4, 7)
            .with_max_resamples(2)
            .with_step_budget(500);
        assert_eq!(config.width, 6);
        assert_eq!(config.height, 4);
        assert_eq!(config.max_attempts, 7);
        assert_eq!(config.max_resamples, 2);
        assert_eq!(config.step_budget, Some(500));
    }

    #[test]
    fn test_validate_dimensions() {
        for (w, h) in [(0, 5), (1, 1), (2, 10), (5, 0)] {
            assert_eq!(
                CarveConfig::new(w, h, 1).validate(),
                Err(CarveError::InvalidDimensions { width: w, height: h })
            );
        }
        assert!(CarveConfig::new(3, 1, 1).validate().is_ok());
        assert!(CarveConfig::new(3, 3, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_attempts() {
        assert_eq!(
            CarveConfig::new(5, 5, 0).validate(),
            Err(CarveError::InvalidAttemptLimit)
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CarveConfig::from_json_str(r#"{"width": 20, "step_budget": 100}"#).unwrap();
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 10);
        assert_eq!(config.max_attempts, 1000);
        assert_eq!(config.step_budget, Some(100));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CarveConfig::from_json_str("{width: }"),
            Err(CarveError::Config { .. })
        ));
        assert!(matches!(
            CarveConfig::from_json_str(r#"{"width": "wide"}"#),
            Err(CarveError::Config { .. })
        ));
    }

    #[test]
    fn test_json_is_validated() {
        assert_eq!(
            CarveConfig::from_json_str(r#"{"width": 2}"#),
            Err(CarveError::InvalidDimensions { width: 2, height: 10 })
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = CarveConfig::load("/nonexistent/pathcarve.json").unwrap_err();
        match err {
            CarveError::Config { reason } => assert!(reason.contains("pathcarve.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_roundtrip_file() {
        let path = std::env::temp_dir().join(format!("pc-config-{}.json", std::process::id()));
        let config = CarveConfig::new(8, 6, 50).with_step_budget(10_000);
        fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
        let loaded = CarveConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
