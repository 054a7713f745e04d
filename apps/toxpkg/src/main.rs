//! toxpkg - build orchestrator for the toxcore native library
//!
//! This is the CLI application that resolves the package version,
//! requirement set and toolchain variables, and drives the CMake
//! lifecycle.

mod cli;
mod display;
mod error;

use crate::cli::{Cli, Commands, OptionArgs};
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use toxpkg_builder::{BuildContext, BuildOrchestrator};
use toxpkg_config::Config;
use toxpkg_recipe as recipe;
use toxpkg_types::{BuildOptions, Platform};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.debug);

    if let Err(e) = run(cli).await {
        error!("command failed: {e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = Config::load_or_default(cli.global.config.as_deref()).await?;
    config.merge_env()?;
    let platform = cli.global.platform.unwrap_or_else(Platform::host);
    let renderer = OutputRenderer::new(cli.global.json);

    match cli.command {
        Commands::Version { source } => {
            let version = recipe::resolve_version_from(&manifest_path(&source)).await?;
            renderer.render_version(version);
        }

        Commands::Deps { options } => {
            let options = merge_options(&config, &options);
            let requirements = recipe::resolve_requirements(platform, &options)?;
            renderer.render_requirements(&requirements);
        }

        Commands::Vars { options } => {
            let options = merge_options(&config, &options);
            let vars = recipe::generate_variables(platform, &options);
            renderer.render_variables(&vars);
        }

        Commands::Info { source } => {
            let version = recipe::resolve_version_from(&manifest_path(&source)).await?;
            renderer.render_info(
                &recipe::METADATA,
                version,
                platform,
                recipe::system_libs(platform),
            );
        }

        Commands::Build {
            source,
            options,
            build_dir,
            jobs,
        } => {
            let options = merge_options(&config, &options);

            // Version resolution is fatal before any external invocation.
            let version = recipe::resolve_version_from(&manifest_path(&source)).await?;
            info!(%version, %platform, "starting build");

            let requirements = recipe::resolve_requirements(platform, &options)?;
            for req in &requirements {
                info!(requirement = %req, kind = %req.kind, "requires");
            }

            let vars = recipe::generate_variables(platform, &options);

            let jobs = match jobs {
                Some(0) | None => config.build.effective_jobs(),
                Some(jobs) => jobs,
            };
            let mut ctx = BuildContext::new(source).with_jobs(jobs);
            if let Some(dir) = build_dir.or_else(|| config.build.build_dir.clone()) {
                ctx = ctx.with_build_dir(dir);
            }

            let orchestrator = BuildOrchestrator::new();
            let report = orchestrator.run(&ctx, &vars, options.with_tests).await?;
            renderer.render_report(version, &report);
        }
    }

    Ok(())
}

/// Combine config-file/environment options with CLI flags.
///
/// Flags only enable options; the baseline comes from the config layer.
fn merge_options(config: &Config, args: &OptionArgs) -> BuildOptions {
    let mut options = config.build.options();
    options.shared |= args.shared;
    options.with_tests |= args.with_tests;
    options
}

fn manifest_path(source: &Path) -> PathBuf {
    source.join("CMakeLists.txt")
}
