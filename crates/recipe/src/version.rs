//! Package version resolution from `CMakeLists.txt`
//!
//! The contract here is deliberately narrow: extract three integer fields
//! matching a fixed marker pattern. This is not a CMake parser, and the
//! pattern matching stays behind this module so the authoritative file
//! format can change without touching callers.

use regex::Regex;
use std::path::Path;
use tokio::fs;
use toxpkg_errors::{Error, VersionError};
use toxpkg_types::{PackageVersion, VersionPart};
use tracing::debug;

/// Resolve the package version from the contents of `CMakeLists.txt`.
///
/// Searches for `set(PROJECT_VERSION_<PART> "<value>")` for MAJOR, MINOR
/// and PATCH; values are trimmed of surrounding whitespace and must parse
/// as non-negative integers.
///
/// # Errors
///
/// Returns [`VersionError::MarkerNotFound`] if a marker is absent and
/// [`VersionError::InvalidComponent`] if a captured value is not a
/// non-negative integer. Both are fatal: the caller must abort before any
/// build stage runs.
pub fn resolve_version(contents: &str) -> Result<PackageVersion, Error> {
    let major = extract_component(contents, VersionPart::Major)?;
    let minor = extract_component(contents, VersionPart::Minor)?;
    let patch = extract_component(contents, VersionPart::Patch)?;

    let version = PackageVersion::new(major, minor, patch);
    debug!(%version, "resolved package version");
    Ok(version)
}

/// Resolve the package version by reading `path`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, otherwise as
/// [`resolve_version`].
pub async fn resolve_version_from(path: &Path) -> Result<PackageVersion, Error> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(&e, path))?;
    resolve_version(&contents)
}

fn extract_component(contents: &str, part: VersionPart) -> Result<u64, Error> {
    let pattern = format!(r#"set\({} "(.*)"\)"#, part.marker());
    let re = Regex::new(&pattern)
        .map_err(|e| Error::internal(format!("invalid version marker pattern: {e}")))?;

    let captures = re.captures(contents).ok_or_else(|| {
        Error::from(VersionError::MarkerNotFound {
            part: part.as_str().to_string(),
        })
    })?;

    let raw = captures.get(1).map_or("", |m| m.as_str()).trim();
    raw.parse::<u64>().map_err(|_| {
        VersionError::InvalidComponent {
            part: part.as_str().to_string(),
            value: raw.to_string(),
        }
        .into()
    })
}
