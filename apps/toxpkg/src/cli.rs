//! Command line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toxpkg_types::Platform;

/// toxpkg - build orchestrator for the toxcore native library
#[derive(Parser)]
#[command(name = "toxpkg")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build orchestrator for the toxcore native library")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Target platform (defaults to the host)
    #[arg(long, global = true, value_enum)]
    pub platform: Option<Platform>,
}

/// Options shared by the commands that evaluate the recipe
#[derive(Parser)]
pub struct OptionArgs {
    /// Build shared libraries
    #[arg(long)]
    pub shared: bool,

    /// Build and run the test suites
    #[arg(long)]
    pub with_tests: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the package version from the source tree
    Version {
        /// Source directory containing CMakeLists.txt
        source: PathBuf,
    },

    /// Resolve the dependency set for a platform and option set
    #[command(alias = "reqs")]
    Deps {
        #[command(flatten)]
        options: OptionArgs,
    },

    /// Show the toolchain variables handed to CMake
    Vars {
        #[command(flatten)]
        options: OptionArgs,
    },

    /// Show package metadata and consumer link information
    Info {
        /// Source directory containing CMakeLists.txt
        source: PathBuf,
    },

    /// Run the configure, compile, test and install lifecycle
    #[command(alias = "b")]
    Build {
        /// Source directory containing CMakeLists.txt
        source: PathBuf,

        #[command(flatten)]
        options: OptionArgs,

        /// Build directory (default: <source>/build)
        #[arg(long, value_name = "DIR")]
        build_dir: Option<PathBuf>,

        /// Number of parallel build jobs (0 = auto)
        #[arg(short, long)]
        jobs: Option<usize>,
    },
}
