//! Run eager generation and print the resulting house.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;

use game_core::{
    ConnectionReport, DoorMask, FloorLayer, GenerationReport, GridStore, PlacementEngine, Position,
};

use super::content_factory;

/// Generate a full house and print the result
#[derive(Parser)]
pub struct Generate {
    /// Seed for the random source
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Data directory with tiles.ron, layout.ron and generation.toml
    /// (defaults to the bundled house)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Also draw each floor as a box-drawing map
    #[arg(long)]
    map: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Report, placed rooms and connection summary
    Summary,
    /// Full JSON output
    Json,
}

#[derive(Serialize)]
struct PlacedRoom {
    x: i32,
    y: i32,
    floor: String,
    tile: String,
    name: String,
    rotation: u8,
    doors: String,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    seed: u64,
    report: &'a GenerationReport,
    rooms: Vec<PlacedRoom>,
    open_connections: usize,
    sealed_connections: usize,
    mismatched_connections: usize,
}

impl Generate {
    pub fn execute(self) -> Result<()> {
        let factory = content_factory(self.data_dir);
        let mut engine = factory
            .build_engine(self.seed)
            .with_context(|| format!("Failed to load content from {}", factory.data_dir().display()))?;

        let report = engine.generate()?;
        let connections = engine.validate_connections();
        let rooms = placed_rooms(&engine);

        match self.format {
            OutputFormat::Summary => {
                print_summary(self.seed, &report, &rooms, &connections);
                if self.map {
                    for floor in [FloorLayer::Upper, FloorLayer::Ground, FloorLayer::Basement] {
                        print_floor_map(&engine, floor);
                    }
                }
            }
            OutputFormat::Json => {
                let output = JsonOutput {
                    seed: self.seed,
                    report: &report,
                    rooms,
                    open_connections: connections.open,
                    sealed_connections: connections.sealed,
                    mismatched_connections: connections.mismatches.len(),
                };
                let json = serde_json::to_string_pretty(&output)
                    .context("Failed to serialize generation output to JSON")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}

fn placed_rooms(engine: &PlacementEngine) -> Vec<PlacedRoom> {
    engine
        .snapshot_grid()
        .iter()
        .map(|(position, placement)| PlacedRoom {
            x: position.x,
            y: position.y,
            floor: engine.floor_of(*position).to_string(),
            tile: placement.tile().id.to_string(),
            name: placement.tile().name.clone(),
            rotation: placement.rotation(),
            doors: placement.rotated_doors().to_string(),
        })
        .collect()
}

fn print_summary(
    seed: u64,
    report: &GenerationReport,
    rooms: &[PlacedRoom],
    connections: &ConnectionReport,
) {
    println!("{}", style("=== House Generation ===").bold().green());
    println!("{} {}", style("Seed:").bold().cyan(), seed);
    println!("{} {}", style("Outcome:").bold().cyan(), report.outcome);
    println!();

    println!("{}", style("Statistics:").bold().yellow());
    println!("  Iterations: {}", report.iterations);
    println!("  Anchors Placed: {}", report.anchors_placed);
    println!("  Rooms Placed: {}", report.tiles_placed);
    println!("  Positions Retired: {}", report.positions_retired);
    println!("  Remaining Tiles: {}", report.remaining);
    println!();

    println!("{}", style("Rooms:").bold().yellow());
    for room in rooms {
        println!(
            "  ({:>3}, {:>3}) {:<8} {:<22} rot {} doors {}",
            room.x, room.y, room.floor, room.name, room.rotation, room.doors
        );
    }
    println!();

    if !report.stranded.is_empty() {
        println!("{}", style("Unplaced:").bold().yellow());
        for name in &report.stranded {
            println!("  {}", name);
        }
        println!();
    }

    println!("{}", style("Connections:").bold().yellow());
    println!("  Open: {}", connections.open);
    println!("  Sealed: {}", connections.sealed);
    if connections.is_consistent() {
        println!("  Mismatched: {}", style(0).green());
    } else {
        println!(
            "  Mismatched: {}",
            style(connections.mismatches.len()).red().bold()
        );
        for mismatch in &connections.mismatches {
            println!("    {} -> {}", mismatch.from, mismatch.to);
        }
    }
    println!();
}

fn print_floor_map(engine: &PlacementEngine, floor: FloorLayer) {
    let grid = engine.snapshot_grid();
    let positions: Vec<Position> = grid
        .positions()
        .filter(|position| engine.floor_of(*position) == floor)
        .collect();
    if positions.is_empty() {
        return;
    }

    let min_x = positions.iter().map(|p| p.x).min().unwrap_or(0);
    let max_x = positions.iter().map(|p| p.x).max().unwrap_or(0);
    let min_y = positions.iter().map(|p| p.y).min().unwrap_or(0);
    let max_y = positions.iter().map(|p| p.y).max().unwrap_or(0);

    println!("{}", style(format!("Floor map: {}", floor)).bold().yellow());
    for y in (min_y..=max_y).rev() {
        let row: String = (min_x..=max_x)
            .map(|x| cell_glyph(grid, Position::new(x, y)))
            .collect();
        println!("  {:>4} {}", y, row);
    }
    println!();
}

fn cell_glyph(grid: &GridStore, position: Position) -> char {
    let Some(placement) = grid.get(&position) else {
        return ' ';
    };

    const GLYPHS: [char; 16] = [
        '■', '╵', '╶', '└', '╷', '│', '┌', '├', '╴', '┘', '─', '┴', '┐', '┤', '┬', '┼',
    ];
    GLYPHS[usize::from((placement.rotated_doors() & DoorMask::all()).bits())]
}
