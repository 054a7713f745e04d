//! Version resolution error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum VersionError {
    #[error("version marker for {part} not found in build manifest")]
    MarkerNotFound { part: String },

    #[error("version component {part} is not a non-negative integer: {value:?}")]
    InvalidComponent { part: String, value: String },
}

impl UserFacingError for VersionError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        Some(
            "CMakeLists.txt must define set(PROJECT_VERSION_MAJOR \"N\"), _MINOR and _PATCH \
             with integer values.",
        )
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::MarkerNotFound { .. } => "version.marker_not_found",
            Self::InvalidComponent { .. } => "version.invalid_component",
        };
        Some(code)
    }
}
