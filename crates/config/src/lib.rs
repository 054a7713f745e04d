#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for toxpkg
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (`./toxpkg.toml`)
//! - Environment variables (`TOXPKG_*`)
//! - CLI flags (applied by the binary, highest precedence)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use toxpkg_errors::{ConfigError, Error};
use toxpkg_types::BuildOptions;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,
}

/// Build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Build shared libraries.
    #[serde(default)]
    pub shared: bool,
    /// Build and run the test suites.
    #[serde(default)]
    pub with_tests: bool,
    /// Parallel build jobs; 0 = auto-detect.
    #[serde(default = "default_build_jobs")]
    pub jobs: usize,
    /// Out-of-source build directory override.
    #[serde(default)]
    pub build_dir: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            shared: false,
            with_tests: false,
            jobs: default_build_jobs(),
            build_dir: None,
        }
    }
}

impl BuildConfig {
    /// The option set this configuration selects.
    #[must_use]
    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            shared: self.shared,
            with_tests: self.with_tests,
        }
    }

    /// Number of parallel jobs with auto-detection resolved.
    #[must_use]
    pub fn effective_jobs(&self) -> usize {
        if self.jobs == 0 {
            num_cpus::get()
        } else {
            self.jobs
        }
    }
}

impl Config {
    /// Default location of the config file, relative to the working directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathBuf::from("toxpkg.toml")
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseFailed {
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    /// Load from an explicit path, or from the default path if it exists,
    /// or fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given path cannot be loaded.
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::load_from_file(path).await,
            None => {
                let default = Self::default_path();
                if fs::metadata(&default).await.is_ok() {
                    Self::load_from_file(&default).await
                } else {
                    debug!("no configuration file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Merge environment variable overrides into this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains a value that
    /// cannot be parsed into the expected type.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        self.apply_env(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides from an arbitrary lookup function.
    ///
    /// Split out of [`Config::merge_env`] so overrides can be exercised
    /// without touching process-global state.
    ///
    /// # Errors
    ///
    /// Returns an error if a looked-up value cannot be parsed.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), Error> {
        if let Some(value) = lookup("TOXPKG_SHARED") {
            self.build.shared = parse_bool("TOXPKG_SHARED", &value)?;
        }

        if let Some(value) = lookup("TOXPKG_WITH_TESTS") {
            self.build.with_tests = parse_bool("TOXPKG_WITH_TESTS", &value)?;
        }

        if let Some(value) = lookup("TOXPKG_BUILD_JOBS") {
            self.build.jobs = value.parse().map_err(|_| ConfigError::InvalidValue {
                field: "TOXPKG_BUILD_JOBS".to_string(),
                value,
            })?;
        }

        Ok(())
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, Error> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        }
        .into()),
    }
}

// Default value functions for serde
fn default_build_jobs() -> usize {
    0 // auto-detect
}
