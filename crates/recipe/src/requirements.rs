//! Requirement resolution
//!
//! Merges the fixed base requirement set with platform- and
//! option-conditional entries. Output order is deterministic: base first,
//! then platform-conditional, then option-conditional.

use semver::VersionReq;
use toxpkg_errors::{Error, ResolveError};
use toxpkg_types::{BuildOptions, Platform, Requirement, RequirementKind};
use tracing::debug;

/// Platform- and option-independent requirements, always included.
const BASE_REQUIREMENTS: &[(&str, &str)] = &[
    ("libsodium", "=1.0.20"),
    ("opus", "=1.4"),
    ("libvpx", "=1.14.1"),
];

/// Threading compatibility shim, needed on Windows regardless of options.
const WINDOWS_THREADS: (&str, &str) = ("pthreads4w", "=3.0.0");

/// Test framework, needed only by the build/test stage itself.
const TEST_FRAMEWORK: (&str, &str) = ("gtest", "=1.15.0");

/// Resolve the full requirement set for a platform and option set.
///
/// # Errors
///
/// Returns [`ResolveError::DuplicateRequirement`] if a conditional rule
/// would introduce a name already present. The conditional additions are
/// currently disjoint from the base set, but the check keeps future rule
/// additions from silently overwriting an entry.
pub fn resolve_requirements(
    platform: Platform,
    options: &BuildOptions,
) -> Result<Vec<Requirement>, Error> {
    let mut requirements = Vec::new();

    for (name, constraint) in BASE_REQUIREMENTS {
        push_unique(
            &mut requirements,
            pinned(name, constraint, RequirementKind::Host)?,
        )?;
    }

    if platform.is_windows() {
        let (name, constraint) = WINDOWS_THREADS;
        push_unique(
            &mut requirements,
            pinned(name, constraint, RequirementKind::Host)?,
        )?;
    }

    if options.with_tests {
        let (name, constraint) = TEST_FRAMEWORK;
        push_unique(
            &mut requirements,
            pinned(name, constraint, RequirementKind::Build)?,
        )?;
    }

    debug!(
        platform = %platform,
        count = requirements.len(),
        "resolved requirement set"
    );
    Ok(requirements)
}

fn pinned(name: &str, constraint: &str, kind: RequirementKind) -> Result<Requirement, Error> {
    let constraint = VersionReq::parse(constraint).map_err(|e| {
        Error::internal(format!("invalid pinned constraint {constraint} for {name}: {e}"))
    })?;
    Ok(Requirement::new(name, constraint, kind))
}

fn push_unique(requirements: &mut Vec<Requirement>, req: Requirement) -> Result<(), Error> {
    if requirements.iter().any(|r| r.name == req.name) {
        return Err(ResolveError::DuplicateRequirement { name: req.name }.into());
    }
    requirements.push(req);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use toxpkg_errors::ResolveError;

    #[test]
    fn push_unique_rejects_name_collision() {
        let mut requirements = Vec::new();
        push_unique(
            &mut requirements,
            pinned("libsodium", "=1.0.20", RequirementKind::Host).unwrap(),
        )
        .unwrap();

        let err = push_unique(
            &mut requirements,
            pinned("libsodium", "=2.0.0", RequirementKind::Build).unwrap(),
        )
        .unwrap_err();

        match err {
            Error::Resolve(ResolveError::DuplicateRequirement { name }) => {
                assert_eq!(name, "libsodium");
            }
            other => panic!("expected DuplicateRequirement, got {other:?}"),
        }
        assert_eq!(requirements.len(), 1);
    }
}
