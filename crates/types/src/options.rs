//! User-facing build options

use serde::{Deserialize, Serialize};

/// The option surface of a build invocation.
///
/// Passed explicitly into every component; immutable during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Build shared libraries instead of static ones.
    #[serde(default)]
    pub shared: bool,
    /// Build and run the package's test suites.
    #[serde(default)]
    pub with_tests: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            shared: false,
            with_tests: false,
        }
    }
}
