//! Toolchain variable generation
//!
//! A pure function of platform and options: the same inputs always yield
//! the same variable map.

use toxpkg_types::{BuildOptions, Platform, ToolchainVariables};

/// Timeout applied to every test execution, independent of options.
pub const TEST_TIMEOUT_SECONDS: &str = "300";

/// Generate the toolchain variables handed to CMake.
///
/// `AUTOTEST`, `BUILD_MISC_TESTS` and `UNITTEST` are three orthogonal
/// downstream test categories toggled together by `options.with_tests`.
/// Exactly one of `ENABLE_SHARED` / `ENABLE_STATIC` is true. The three
/// Windows-only keys never appear on other platforms.
#[must_use]
pub fn generate_variables(platform: Platform, options: &BuildOptions) -> ToolchainVariables {
    let mut vars = ToolchainVariables::new();

    vars.set("AUTOTEST", options.with_tests);
    vars.set("BUILD_MISC_TESTS", options.with_tests);
    vars.set("UNITTEST", options.with_tests);
    vars.set("TEST_TIMEOUT_SECONDS", TEST_TIMEOUT_SECONDS);

    vars.set("ENABLE_SHARED", options.shared);
    vars.set("ENABLE_STATIC", !options.shared);

    // The AV component is always built, whatever the other options say.
    vars.set("MUST_BUILD_TOXAV", true);

    if platform.is_windows() {
        vars.set("MSVC_STATIC_SODIUM", true);
        vars.set("CMAKE_WINDOWS_EXPORT_ALL_SYMBOLS", options.shared);
        vars.set("FLAT_OUTPUT_STRUCTURE", options.shared);
    }

    vars
}
