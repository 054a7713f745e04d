//! Lifecycle orchestration
//!
//! A linear state machine with early exit:
//! Configure → Compile → (Test when requested) → Install. The first
//! failing stage maps to its [`BuildError`] variant with the external
//! tool's diagnostics attached, and no further stage runs.

use crate::cmake::{self, BuildContext};
use crate::command::{CommandOutput, CommandRunner, ProcessRunner};
use std::fmt;
use toxpkg_errors::{BuildError, Error};
use toxpkg_types::ToolchainVariables;
use tracing::{info, warn};

/// One discrete step of the build lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    Configure,
    Compile,
    Test,
    Install,
}

impl BuildStage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Configure => "configure",
            Self::Compile => "compile",
            Self::Test => "test",
            Self::Install => "install",
        }
    }
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed ctest pass/fail summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Record of a completed lifecycle run.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Stages that ran, in order.
    pub stages: Vec<BuildStage>,
    /// Test summary when the test stage ran and ctest printed one.
    pub tests: Option<TestSummary>,
}

/// Sequences the build lifecycle against the external build system.
///
/// The orchestrator only sequences calls and observes exit status; the
/// on-disk state the configure and install stages touch belongs to CMake.
pub struct BuildOrchestrator {
    runner: Box<dyn CommandRunner>,
}

impl BuildOrchestrator {
    /// Create an orchestrator that runs real processes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            runner: Box::new(ProcessRunner),
        }
    }

    /// Create an orchestrator with a custom command runner.
    #[must_use]
    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Drive configure → compile → (test) → install.
    ///
    /// # Errors
    ///
    /// Returns the failing stage's [`BuildError`] variant carrying the
    /// tool's diagnostic output; later stages are not attempted. Test
    /// failures carry the runner's full output, not a bare flag.
    pub async fn run(
        &self,
        ctx: &BuildContext,
        vars: &ToolchainVariables,
        with_tests: bool,
    ) -> Result<BuildReport, Error> {
        let mut report = BuildReport::default();

        info!(stage = %BuildStage::Configure, "stage started");
        let output = cmake::configure(self.runner.as_ref(), ctx, vars).await?;
        check_stage(BuildStage::Configure, &output)?;
        report.stages.push(BuildStage::Configure);

        info!(stage = %BuildStage::Compile, "stage started");
        let output = cmake::compile(self.runner.as_ref(), ctx).await?;
        check_stage(BuildStage::Compile, &output)?;
        report.stages.push(BuildStage::Compile);

        if with_tests {
            info!(stage = %BuildStage::Test, "stage started");
            let output = cmake::test(self.runner.as_ref(), ctx).await?;
            check_stage(BuildStage::Test, &output)?;
            report.tests = parse_test_summary(&output.stdout);
            if report.tests.is_none() {
                warn!("ctest completed without printing a summary line");
            }
            report.stages.push(BuildStage::Test);
        }

        info!(stage = %BuildStage::Install, "stage started");
        let output = cmake::install(self.runner.as_ref(), ctx).await?;
        check_stage(BuildStage::Install, &output)?;
        report.stages.push(BuildStage::Install);

        info!(stages = report.stages.len(), "build lifecycle finished");
        Ok(report)
    }
}

impl Default for BuildOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_stage(stage: BuildStage, output: &CommandOutput) -> Result<(), Error> {
    if output.success {
        return Ok(());
    }

    let message = failure_message(stage, output);
    let err = match stage {
        BuildStage::Configure => BuildError::ConfigureFailed { message },
        BuildStage::Compile => BuildError::CompileFailed { message },
        BuildStage::Test => BuildError::TestFailed { message },
        BuildStage::Install => BuildError::InstallFailed { message },
    };
    Err(err.into())
}

fn failure_message(stage: BuildStage, output: &CommandOutput) -> String {
    // Test diagnostics must surface the runner's full output.
    let detail = match stage {
        BuildStage::Test => output.combined_output(),
        _ => {
            if output.stderr.is_empty() {
                output.stdout.clone()
            } else {
                output.stderr.clone()
            }
        }
    };

    match output.exit_code {
        Some(code) => format!("exit status {code}: {detail}"),
        // Killed externally; treat the same as a failure, cause unknown.
        None => {
            if detail.is_empty() {
                "terminated without an exit status (unknown cause)".to_string()
            } else {
                format!("terminated without an exit status (unknown cause): {detail}")
            }
        }
    }
}

/// Parse the ctest summary line:
/// `"X% tests passed, Y tests failed out of Z"`.
fn parse_test_summary(output: &str) -> Option<TestSummary> {
    for line in output.lines() {
        if !line.contains("% tests passed") {
            continue;
        }
        let failed = line
            .split("tests passed, ")
            .nth(1)?
            .split_whitespace()
            .next()?
            .parse()
            .ok()?;
        let total = line
            .split("out of ")
            .nth(1)?
            .trim()
            .parse()
            .ok()?;
        let passed = usize::checked_sub(total, failed)?;
        return Some(TestSummary {
            total,
            passed,
            failed,
        });
    }
    None
}
