//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use harvest::PlatformKey;

/// Harvest - builds third-party native libraries into 3rdparty/
#[derive(Parser)]
#[command(name = "harvest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository root containing external/ and 3rdparty/ (defaults to the
    /// current directory)
    #[arg(long, global = true, env = "HARVEST_ROOT")]
    pub root: Option<PathBuf>,

    /// Target platform instead of the host (macos, linux, windows)
    #[arg(long, global = true)]
    pub platform: Option<PlatformKey>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build libraries and harvest their headers and static libraries
    Build(BuildArgs),

    /// List known libraries and how each is built
    List,

    /// Show the resolved directory layout
    Paths(PathsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Libraries to build, in order
    #[arg(required_unless_present = "all")]
    pub libraries: Vec<String>,

    /// Build every known library
    #[arg(long, conflicts_with = "libraries")]
    pub all: bool,

    /// Print the build plans as JSON without running anything
    #[arg(long)]
    pub plan: bool,

    /// Number of parallel make jobs
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

#[derive(Args)]
pub struct PathsArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
