//! Error types
//!
//! The simulation itself never fails; loading a configuration is the only
//! fallible surface of the crate.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::GameConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed fine but breaks a simulation invariant
    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Convenience result alias for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;
