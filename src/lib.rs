// Domain layer - Core business logic
pub mod domain;

// Application layer - Run control, scheduling and notifications
pub mod application;

// Settings and error types
pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, Pattern, PatternLibrary, RuleSet, presets};
pub use application::{Command, Notifier, RunController, RunMode, Snapshot};
pub use config::Config;
pub use error::{ConfigError, EngineError};
