//! Error types for the simulation engine and its configuration.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Grid dimensions must both be at least 1.
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimension {
        rows: usize,
        cols: usize,
    },

    /// Pattern does not fit the grid even at anchor (0, 0).
    #[error("pattern '{pattern}' ({height}x{width}) does not fit a {rows}x{cols} grid")]
    PatternTooLarge {
        pattern: String,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },

    /// No pattern with this name in the library.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// Settings rejected by [`Config::validate`](crate::config::Config::validate).
    #[error("{0}")]
    InvalidConfig(String),
}

/// Errors raised while loading a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::InvalidConfig(err.to_string())
    }
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidDimension { rows: 0, cols: 4 };
        assert_eq!(err.to_string(), "invalid grid dimensions: 0x4");

        let err = EngineError::PatternTooLarge {
            pattern: "pulsar".into(),
            height: 13,
            width: 13,
            rows: 10,
            cols: 10,
        };
        assert!(err.to_string().contains("pulsar"));
        assert!(err.to_string().contains("10x10"));
    }

    #[test]
    fn test_config_error_converts() {
        let err = EngineError::from(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        assert_eq!(err.to_string(), "invalid config: tick_interval_ms must be positive");
    }
}
