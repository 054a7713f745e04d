//! Target platform identifier driving conditional logic

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use toxpkg_errors::{ConfigError, Error};

/// Target operating system for the build.
///
/// Supplied by the invoking environment (or `--platform`); read-only input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Macos,
    Windows,
}

impl Platform {
    /// Detect the platform toxpkg itself is running on.
    #[must_use]
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Macos
        } else {
            Self::Linux
        }
    }

    #[must_use]
    pub fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Macos => "macos",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "macos" | "darwin" => Ok(Self::Macos),
            "windows" => Ok(Self::Windows),
            _ => Err(ConfigError::InvalidValue {
                field: "platform".to_string(),
                value: s.to_string(),
            }
            .into()),
        }
    }
}
