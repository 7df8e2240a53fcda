//! Simulation settings, loaded from JSON with every field defaulted.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{Algorithm, SeedPolicy, TutorialLength};
use crate::error::ConfigError;

/// What happens to the board on `reset()` or when the tutorial ends
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridPolicy {
    /// Restore the board generated at initialization or last resize
    #[default]
    Reseed,
    /// Kill every cell
    Blank,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    /// Milliseconds between generations while running
    pub tick_interval_ms: u64,
    pub algorithm: Algorithm,
    pub seed: SeedPolicy,
    pub reset_policy: GridPolicy,
    pub tutorial_complete_policy: GridPolicy,
    pub tutorial: TutorialLength,
    /// Welcome delay before the tutorial run starts by itself; 0 waits for
    /// an explicit start
    pub tutorial_autostart_ms: u64,
    /// Start in Idle instead of the tutorial
    pub skip_tutorial: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 17,
            cols: 17,
            tick_interval_ms: 500,
            algorithm: Algorithm::default(),
            seed: SeedPolicy::default(),
            reset_policy: GridPolicy::Reseed,
            tutorial_complete_policy: GridPolicy::Blank,
            tutorial: TutorialLength::default(),
            tutorial_autostart_ms: 2000,
            skip_tutorial: false,
        }
    }
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        }
        if let SeedPolicy::Random { density } = self.seed {
            if !(0.0..=1.0).contains(&density) {
                return Err(ConfigError::Invalid(format!(
                    "seed density must be within 0..=1, got {density}"
                )));
            }
        }
        if self.tutorial.min_ticks > self.tutorial.max_ticks || self.tutorial.cells_per_tick == 0 {
            return Err(ConfigError::Invalid(format!(
                "bad tutorial length {:?}",
                self.tutorial
            )));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Delay before the tutorial starts on its own, `None` when disabled
    pub fn tutorial_autostart(&self) -> Option<Duration> {
        (self.tutorial_autostart_ms > 0).then(|| Duration::from_millis(self.tutorial_autostart_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(500));
        assert_eq!(config.reset_policy, GridPolicy::Reseed);
        assert_eq!(config.tutorial_complete_policy, GridPolicy::Blank);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json_str(r#"{"rows": 20, "reset_policy": "blank"}"#).unwrap();
        assert_eq!(config.rows, 20);
        assert_eq!(config.cols, 17);
        assert_eq!(config.reset_policy, GridPolicy::Blank);
        assert_eq!(config.tutorial, TutorialLength::default());
    }

    #[test]
    fn test_nested_fields() {
        let config = Config::from_json_str(
            r#"{"seed": {"kind": "random", "density": 0.2}, "tutorial": {"max_ticks": 40}, "algorithm": "parallel"}"#,
        )
        .unwrap();
        assert_eq!(config.seed, SeedPolicy::Random { density: 0.2 });
        assert_eq!(config.tutorial.max_ticks, 40);
        assert_eq!(config.tutorial.min_ticks, 10);
        assert_eq!(config.algorithm, Algorithm::Parallel);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            Config::from_json_str(r#"{"rows": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{"tick_interval_ms": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{"seed": {"kind": "random", "density": 1.5}}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json_str(r#"{"tutorial": {"min_ticks": 30, "max_ticks": 20}}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_tutorial_autostart() {
        assert_eq!(Config::default().tutorial_autostart(), Some(Duration::from_secs(2)));
        let config = Config::from_json_str(r#"{"tutorial_autostart_ms": 0}"#).unwrap();
        assert_eq!(config.tutorial_autostart(), None);
    }

    #[test]
    fn test_nan_density_rejected() {
        let config = Config { seed: SeedPolicy::Random { density: f64::NAN }, ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Config::from_json_str("{rows:"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/torus_life.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
