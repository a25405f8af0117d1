//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod catalog;
mod explore;
mod generate;

pub use catalog::Catalog;
pub use explore::Explore;
pub use generate::Generate;

use std::path::PathBuf;

use game_content::ContentFactory;

/// Factory over `data_dir`, or the bundled house data when none is given.
fn content_factory(data_dir: Option<PathBuf>) -> ContentFactory {
    match data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    }
}
