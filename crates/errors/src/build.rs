//! Build lifecycle error types
//!
//! One variant per lifecycle stage; the message carries the external
//! tool's diagnostic output verbatim.

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error("configure failed: {message}")]
    ConfigureFailed { message: String },

    #[error("compile failed: {message}")]
    CompileFailed { message: String },

    #[error("tests failed: {message}")]
    TestFailed { message: String },

    #[error("install failed: {message}")]
    InstallFailed { message: String },
}

impl BuildError {
    /// Name of the lifecycle stage this error originated from.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            Self::ConfigureFailed { .. } => "configure",
            Self::CompileFailed { .. } => "compile",
            Self::TestFailed { .. } => "test",
            Self::InstallFailed { .. } => "install",
        }
    }
}

impl UserFacingError for BuildError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigureFailed { .. } => {
                Some("Check that cmake is installed and every requirement has been fetched.")
            }
            Self::TestFailed { .. } => {
                Some("The full test runner output is included above the failure.")
            }
            _ => None,
        }
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::ConfigureFailed { .. } => "build.configure_failed",
            Self::CompileFailed { .. } => "build.compile_failed",
            Self::TestFailed { .. } => "build.test_failed",
            Self::InstallFailed { .. } => "build.install_failed",
        };
        Some(code)
    }
}
