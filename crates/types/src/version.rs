//! Package version resolved from the canonical build manifest
//!
//! The version is derived from a single authoritative source file
//! (`CMakeLists.txt`); nothing else in the system declares a version.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved package version: three non-negative integers.
///
/// Created once per invocation by the version resolver and immutable
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PackageVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl PackageVersion {
    #[must_use]
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// One of the three version components tracked in the build manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionPart {
    Major,
    Minor,
    Patch,
}

impl VersionPart {
    /// All parts, in the order they appear in a rendered version.
    pub const ALL: [Self; 3] = [Self::Major, Self::Minor, Self::Patch];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
            Self::Patch => "PATCH",
        }
    }

    /// The marker this part is declared under in `CMakeLists.txt`.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Major => "PROJECT_VERSION_MAJOR",
            Self::Minor => "PROJECT_VERSION_MINOR",
            Self::Patch => "PROJECT_VERSION_PATCH",
        }
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
