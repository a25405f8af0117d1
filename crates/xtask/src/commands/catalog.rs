//! Print the tile catalog.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use game_core::{FloorLayer, TileOracle};

use super::content_factory;

/// List the tile catalog
#[derive(Parser)]
pub struct Catalog {
    /// Data directory (defaults to the bundled house)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Only list tiles allowed on this floor
    #[arg(short, long, value_enum)]
    floor: Option<FloorArg>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FloorArg {
    Ground,
    Upper,
    Basement,
}

impl From<FloorArg> for FloorLayer {
    fn from(arg: FloorArg) -> Self {
        match arg {
            FloorArg::Ground => FloorLayer::Ground,
            FloorArg::Upper => FloorLayer::Upper,
            FloorArg::Basement => FloorLayer::Basement,
        }
    }
}

impl Catalog {
    pub fn execute(self) -> Result<()> {
        let factory = content_factory(self.data_dir);
        let catalog = factory
            .load_catalog()
            .with_context(|| format!("Failed to load tiles from {}", factory.data_dir().display()))?;

        let floor = self.floor.map(FloorLayer::from);
        let tiles: Vec<_> = catalog
            .all_tiles()
            .into_iter()
            .filter(|tile| floor.is_none_or(|floor| tile.allows(floor)))
            .collect();

        println!("{}", style("=== Tile Catalog ===").bold().green());
        println!("{} {}", style("Tiles:").bold().cyan(), tiles.len());
        println!();

        for tile in &tiles {
            let floors: Vec<String> = [FloorLayer::Ground, FloorLayer::Upper, FloorLayer::Basement]
                .into_iter()
                .filter(|floor| tile.allows(*floor))
                .map(|floor| floor.to_string())
                .collect();
            println!(
                "  {:<20} {:<22} doors {:<5} {}",
                style(&tile.id).cyan(),
                tile.name,
                tile.doors.to_string(),
                style(floors.join(", ")).dim()
            );
        }

        Ok(())
    }
}
