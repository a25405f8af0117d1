//! Lazy discovery walk: seed anchors, then open rooms one at a time.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use game_core::{PcgRng, RngSource};

use super::content_factory;

/// Seed anchors only, then discover rooms one at a time
#[derive(Parser)]
pub struct Explore {
    /// Seed for the engine's random source
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Number of discovery attempts
    #[arg(short = 'n', long, default_value_t = 10)]
    steps: usize,

    /// Data directory (defaults to the bundled house)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Explore {
    pub fn execute(self) -> Result<()> {
        let factory = content_factory(self.data_dir);
        let mut engine = factory
            .build_engine(self.seed)
            .with_context(|| format!("Failed to load content from {}", factory.data_dir().display()))?;

        let anchors = engine.seed_anchors();
        println!("{}", style("=== House Exploration ===").bold().green());
        println!("{} {}", style("Seed:").bold().cyan(), self.seed);
        println!("{} {}", style("Anchors:").bold().cyan(), anchors);
        println!();

        // The walker picks doors with its own stream so the engine's draws
        // match a plain `discover` sequence.
        let mut walker = PcgRng::new(self.seed.wrapping_add(1));
        let mut discovered = 0;

        for step in 1..=self.steps {
            let frontier: Vec<_> = engine.frontier().iter().collect();
            if frontier.is_empty() {
                println!("  {}", style("No unexplored doors left").dim());
                break;
            }

            let target = frontier[walker.next_index(frontier.len())];
            let floor = engine.floor_of(target);
            if engine.discover(target) {
                discovered += 1;
                let placement = engine
                    .placement_at(target)
                    .context("discovered position has no placement")?;
                println!(
                    "  {:>3}. {} {} {:<22} doors {}",
                    step,
                    style(format!("{:<12}", target.to_string())).cyan(),
                    style(format!("{:<8}", floor)).dim(),
                    placement.tile().name,
                    placement.rotated_doors()
                );
            } else {
                println!(
                    "  {:>3}. {} {} {}",
                    step,
                    style(format!("{:<12}", target.to_string())).cyan(),
                    style(format!("{:<8}", floor)).dim(),
                    style("nothing fits").red()
                );
            }
        }

        println!();
        println!("{}", style("Result:").bold().yellow());
        println!("  Discovered: {}", discovered);
        println!("  Placed: {}", engine.placed_count());
        println!("  Open Doors: {}", engine.frontier().len());
        println!("  Remaining Tiles: {}", engine.remaining_count());
        let connections = engine.validate_connections();
        println!(
            "  Connections: {} open, {} sealed, {} mismatched",
            connections.open,
            connections.sealed,
            connections.mismatches.len()
        );

        Ok(())
    }
}
