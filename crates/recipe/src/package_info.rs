//! Package identity and consumer link information

use toxpkg_types::Platform;

/// Static identity of the package this orchestrator builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub license: &'static str,
}

/// Metadata for the toxcore package.
pub const METADATA: PackageMetadata = PackageMetadata {
    name: "toxcore",
    url: "https://tox.chat",
    description: "The future of online communications.",
    license: "GPL-3.0-only",
};

/// System libraries consumers must link against, per platform.
///
/// On Windows the packaged library depends on the system networking and
/// socket libraries; elsewhere nothing extra is needed.
#[must_use]
pub fn system_libs(platform: Platform) -> &'static [&'static str] {
    if platform.is_windows() {
        &["Ws2_32", "Iphlpapi"]
    } else {
        &[]
    }
}
