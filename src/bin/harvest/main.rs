//! Harvest CLI - builds third-party native libraries

use anyhow::Result;
use clap::Parser;
use harvest::builder::errors::exit_code_of;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(exit_code_of(&e));
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("harvest=debug")
    } else {
        EnvFilter::new("harvest=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let global = commands::GlobalOptions {
        root: cli.root,
        platform: cli.platform,
    };

    // Execute command
    match cli.command {
        Commands::Build(args) => commands::build::execute(&global, args),
        Commands::List => commands::list::execute(&global),
        Commands::Paths(args) => commands::paths::execute(&global, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
