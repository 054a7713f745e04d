//! CMake stage commands
//!
//! Builds the argument lists for each lifecycle stage and runs them
//! through a [`CommandRunner`]. Out-of-source builds: configure runs in
//! the build directory with the source directory as its first argument.

use crate::command::{CommandOutput, CommandRunner};
use std::path::PathBuf;
use tokio::fs;
use toxpkg_errors::Error;
use toxpkg_types::{ToolchainVariables, VariableValue};

/// Arguments always passed to configuration, ahead of the toolchain
/// variables.
const DEFAULT_CONFIGURE_ARGS: &[&str] = &["-DCMAKE_BUILD_TYPE=Release"];

/// Where to build and how parallel to be.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Source directory containing `CMakeLists.txt`
    pub source_dir: PathBuf,
    /// Build directory (out-of-source by default)
    pub build_dir: PathBuf,
    /// Number of parallel jobs
    pub jobs: usize,
}

impl BuildContext {
    /// Create a context with the default `<source>/build` build directory.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        let build_dir = source_dir.join("build");
        Self {
            source_dir,
            build_dir,
            jobs: 1,
        }
    }

    /// Override the build directory.
    #[must_use]
    pub fn with_build_dir(mut self, build_dir: PathBuf) -> Self {
        self.build_dir = build_dir;
        self
    }

    /// Set the number of parallel jobs.
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }
}

/// Run `cmake` configuration with the generated toolchain variables.
///
/// # Errors
///
/// Returns an error if the build directory cannot be created or the
/// command cannot be started.
pub async fn configure(
    runner: &dyn CommandRunner,
    ctx: &BuildContext,
    vars: &ToolchainVariables,
) -> Result<CommandOutput, Error> {
    fs::create_dir_all(&ctx.build_dir)
        .await
        .map_err(|e| Error::io_with_path(&e, &ctx.build_dir))?;

    let mut args = vec![ctx.source_dir.display().to_string()];
    args.extend(DEFAULT_CONFIGURE_ARGS.iter().map(ToString::to_string));
    args.extend(variable_args(vars));

    runner.run("cmake", &args, &ctx.build_dir).await
}

/// Run `cmake --build`.
///
/// # Errors
///
/// Returns an error if the command cannot be started.
pub async fn compile(
    runner: &dyn CommandRunner,
    ctx: &BuildContext,
) -> Result<CommandOutput, Error> {
    let mut args = vec!["--build".to_string(), ".".to_string()];
    if ctx.jobs > 1 {
        args.push("--parallel".to_string());
        args.push(ctx.jobs.to_string());
    }

    runner.run("cmake", &args, &ctx.build_dir).await
}

/// Run `ctest`, always requesting full output on failure.
///
/// # Errors
///
/// Returns an error if the command cannot be started.
pub async fn test(runner: &dyn CommandRunner, ctx: &BuildContext) -> Result<CommandOutput, Error> {
    let args = vec!["--output-on-failure".to_string()];
    runner.run("ctest", &args, &ctx.build_dir).await
}

/// Run `cmake --install`.
///
/// # Errors
///
/// Returns an error if the command cannot be started.
pub async fn install(
    runner: &dyn CommandRunner,
    ctx: &BuildContext,
) -> Result<CommandOutput, Error> {
    let args = vec!["--install".to_string(), ".".to_string()];
    runner.run("cmake", &args, &ctx.build_dir).await
}

/// Render toolchain variables as `-D<KEY>=<VALUE>` arguments.
fn variable_args(vars: &ToolchainVariables) -> Vec<String> {
    vars.iter()
        .map(|(key, value)| format!("-D{key}={}", cmake_value(value)))
        .collect()
}

fn cmake_value(value: &VariableValue) -> String {
    match value {
        VariableValue::Bool(true) => "ON".to_string(),
        VariableValue::Bool(false) => "OFF".to_string(),
        VariableValue::String(s) => s.clone(),
    }
}
