//! Requirement resolution error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("duplicate requirement: {name}")]
    DuplicateRequirement { name: String },
}

impl UserFacingError for ResolveError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::DuplicateRequirement { .. } => {
                Some("A conditional requirement rule reuses a name already in the base set.")
            }
        }
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Self::DuplicateRequirement { .. } => Some("resolve.duplicate_requirement"),
        }
    }
}
