use thiserror::Error;

use crate::tile::Side;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("tile has no cloister to place a meeple on")]
    NoCloister,
    #[error("tile already carries a meeple of player {player}")]
    Occupied { player: u8 },
    #[error("connection group {group} is empty")]
    EmptyGroup { group: usize },
    #[error("side {side:?} belongs to more than one connection group")]
    OverlappingGroups { side: Side },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("tile type '{name}' is malformed: {source}")]
    InvalidTile {
        name: &'static str,
        #[source]
        source: TileError,
    },
    #[error("tile type '{name}' has replication count {count}, expected 1..=9")]
    InvalidCount { name: &'static str, count: u8 },
    #[error("tile type '{name}' is defined more than once")]
    DuplicateName { name: &'static str },
}
