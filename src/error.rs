//! Error types for envelope-api

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing configuration keys: {}", .0.join(", "))]
    MissingConfig(Vec<String>),

    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn missing_config<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::MissingConfig(keys.into_iter().map(Into::into).collect())
    }

    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Keys reported missing, if this is a configuration validation failure.
    pub fn missing_keys(&self) -> &[String] {
        match self {
            Error::MissingConfig(keys) => keys,
            _ => &[],
        }
    }
}
