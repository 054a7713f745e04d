//! External dependency requirements

use semver::VersionReq;
use serde::Serialize;
use std::fmt;

/// When a requirement must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    /// Needed by consumers of the packaged artifact.
    Host,
    /// Needed only while building and testing the package itself.
    Build,
}

impl RequirementKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Build => "build",
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named dependency with a version constraint that the external
/// resolver must satisfy before configuration runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub name: String,
    pub constraint: VersionReq,
    pub kind: RequirementKind,
}

impl Requirement {
    #[must_use]
    pub fn new(name: impl Into<String>, constraint: VersionReq, kind: RequirementKind) -> Self {
        Self {
            name: name.into(),
            constraint,
            kind,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.constraint)
    }
}
