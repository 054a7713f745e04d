#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Recipe logic for building the toxcore native library
//!
//! This crate holds the pure decision logic of the orchestrator: deriving
//! the package version from the canonical `CMakeLists.txt`, resolving the
//! platform- and option-conditional requirement set, and generating the
//! toolchain variables handed to CMake. Nothing in here invokes an
//! external tool.

pub mod package_info;
pub mod requirements;
pub mod toolchain;
pub mod version;

pub use package_info::{system_libs, PackageMetadata, METADATA};
pub use requirements::resolve_requirements;
pub use toolchain::generate_variables;
pub use version::{resolve_version, resolve_version_from};
