//! Error types for Lumina

use thiserror::Error;

/// The main error type for Lumina operations
#[derive(Debug, Error)]
pub enum LuminaError {
    #[error("Invalid config: {field} {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(String),

    #[error("Invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl LuminaError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        LuminaError::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for Lumina operations
pub type Result<T> = std::result::Result<T, LuminaError>;

impl From<toml::de::Error> for LuminaError {
    fn from(err: toml::de::Error) -> Self {
        LuminaError::ConfigParse(err.to_string())
    }
}

impl From<toml::ser::Error> for LuminaError {
    fn from(err: toml::ser::Error) -> Self {
        LuminaError::ConfigSerialize(err.to_string())
    }
}
