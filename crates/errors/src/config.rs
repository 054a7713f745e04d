//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("invalid config file: {message}")]
    ParseFailed { message: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::ReadFailed { .. } => Some("Check that the config file exists and is readable."),
            Self::ParseFailed { .. } => Some("The config file must be valid TOML."),
            Self::InvalidValue { .. } => {
                Some("Boolean settings accept true/false/1/0/on/off/yes/no.")
            }
        }
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::ReadFailed { .. } => "config.read_failed",
            Self::ParseFailed { .. } => "config.parse_failed",
            Self::InvalidValue { .. } => "config.invalid_value",
        };
        Some(code)
    }
}
