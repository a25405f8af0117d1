//! Development tasks for the house generator.
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Catalog, Explore, Generate};

/// Development tasks for the house generator
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the house generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate a full house and print the result
    Generate(Generate),

    /// Seed anchors only, then discover rooms one at a time
    Explore(Explore),

    /// List the tile catalog
    Catalog(Catalog),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate(cmd) => cmd.execute(),
        Command::Explore(cmd) => cmd.execute(),
        Command::Catalog(cmd) => cmd.execute(),
    }
}
