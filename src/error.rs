//! Error types

use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value {value} for `{field}`")]
    Invalid { field: &'static str, value: f64 },
}

/// Errors raised when seeding rotation state from outside the simulation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StateError {
    #[error("angle must be finite, got {0}")]
    NonFinite(f64),
}
