//! Command execution behind a trait seam

use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use toxpkg_errors::Error;
use tracing::debug;

/// Captured result of one external command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the command succeeded
    pub success: bool,
    /// Exit code; `None` when the process died without reporting one
    pub exit_code: Option<i32>,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

impl CommandOutput {
    /// Stdout and stderr merged, for failure reporting.
    #[must_use]
    pub fn combined_output(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (true, _) => self.stderr.clone(),
            (_, true) => self.stdout.clone(),
            _ => format!("{}\n{}", self.stdout, self.stderr),
        }
    }
}

/// Trait for running external build tools.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `working_dir` and wait for completion.
    ///
    /// # Errors
    ///
    /// Returns an error only if the command could not be started; a
    /// non-zero exit is reported through [`CommandOutput`].
    async fn run(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Path,
    ) -> Result<CommandOutput, Error>;
}

/// Runs commands as real child processes.
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Path,
    ) -> Result<CommandOutput, Error> {
        debug!(
            program,
            working_dir = %working_dir.display(),
            "executing: {program} {}",
            args.join(" ")
        );

        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()
            .await
            .map_err(|e| Error::io_with_path(&e, working_dir))?;

        Ok(CommandOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
