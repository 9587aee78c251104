pub mod catalogue;
pub mod config;
pub mod deck;
pub mod error;
pub mod rng;
pub mod terrain;
pub mod tile;

pub use catalogue::{TileDefinition, TileKind, CATALOGUE, STARTING_TILE};
pub use config::{DeckConfig, DeckConfigLoader};
pub use deck::{build_deck, build_deck_seeded, build_deck_with_rng};
pub use error::{CatalogueError, TileError};
pub use terrain::Terrain;
pub use tile::{Meeple, MeepleSpot, Side, SideSet, Tile};
