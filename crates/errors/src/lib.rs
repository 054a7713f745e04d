#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for the toxpkg build orchestrator
//!
//! This crate provides fine-grained error types organized by domain.
//! All error types implement Clone for easier handling.

use std::borrow::Cow;

use thiserror::Error;

pub mod build;
pub mod config;
pub mod resolve;
pub mod version;

// Re-export all error types at the root
pub use build::BuildError;
pub use config::ConfigError;
pub use resolve::ResolveError;
pub use version::VersionError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("version error: {0}")]
    Version(#[from] VersionError),

    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("build error: {0}")]
    Build(#[from] BuildError),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("I/O error: {message}")]
    Io {
        kind: std::io::ErrorKind,
        message: String,
        path: Option<std::path::PathBuf>,
    },
}

impl Error {
    /// Create an internal error with a message
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an Io error with an associated path
    pub fn io_with_path(err: &std::io::Error, path: impl Into<std::path::PathBuf>) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
            path: Some(path.into()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
            path: None,
        }
    }
}

/// Behavior every error exposed to end users must implement.
pub trait UserFacingError {
    /// Short message suitable for CLI output.
    fn user_message(&self) -> Cow<'_, str>;

    /// Optional remediation hint.
    fn user_hint(&self) -> Option<&'static str> {
        None
    }

    /// Whether retrying the same operation is likely to succeed.
    fn is_retryable(&self) -> bool {
        false
    }

    /// Stable error code for analytics / structured reporting.
    fn user_code(&self) -> Option<&'static str> {
        None
    }
}

impl UserFacingError for Error {
    fn user_message(&self) -> Cow<'_, str> {
        match self {
            Error::Version(err) => err.user_message(),
            Error::Resolve(err) => err.user_message(),
            Error::Config(err) => err.user_message(),
            Error::Build(err) => err.user_message(),
            Error::Io { message, .. } => Cow::Owned(message.clone()),
            Error::Internal(_) => Cow::Owned(self.to_string()),
        }
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Error::Version(err) => err.user_hint(),
            Error::Resolve(err) => err.user_hint(),
            Error::Config(err) => err.user_hint(),
            Error::Build(err) => err.user_hint(),
            _ => None,
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            Error::Version(err) => err.is_retryable(),
            Error::Resolve(err) => err.is_retryable(),
            Error::Config(err) => err.is_retryable(),
            Error::Build(err) => err.is_retryable(),
            _ => false,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Error::Version(err) => err.user_code(),
            Error::Resolve(err) => err.user_code(),
            Error::Config(err) => err.user_code(),
            Error::Build(err) => err.user_code(),
            Error::Internal(_) => Some("internal"),
            Error::Io { .. } => Some("io"),
        }
    }
}
