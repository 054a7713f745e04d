#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Build lifecycle orchestration for toxpkg
//!
//! This crate sequences configure → compile → test → install against CMake
//! and propagates stage failures. The external tools are reached through
//! the [`CommandRunner`] trait so the state machine can be exercised
//! without invoking CMake.

pub mod cmake;
mod command;
mod orchestrator;

pub use cmake::BuildContext;
pub use command::{CommandOutput, CommandRunner, ProcessRunner};
pub use orchestrator::{BuildOrchestrator, BuildReport, BuildStage, TestSummary};
