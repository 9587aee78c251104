//! Deck construction.
//!
//! Every call builds fresh [`Tile`] values, so two decks never share state
//! and tiles of the same type can carry different meeples.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalogue::{total_count, TileKind, CATALOGUE, STARTING_TILE};
use crate::rng::DeckRng;
use crate::tile::Tile;

/// Builds the starting tile and the remaining tiles, shuffled when asked.
///
/// Shuffling draws from a fresh entropy-seeded source; use
/// [`build_deck_seeded`] or [`build_deck_with_rng`] for reproducible order.
pub fn build_deck(shuffled: bool) -> (Tile, Vec<Tile>) {
    if shuffled {
        let mut rng = DeckRng::from_entropy();
        build_deck_with_rng(Some(&mut rng))
    } else {
        build_deck_with_rng::<DeckRng>(None)
    }
}

pub fn build_deck_seeded(seed: u64) -> (Tile, Vec<Tile>) {
    let mut rng = DeckRng::seeded(seed);
    build_deck_with_rng(Some(&mut rng))
}

/// Builds a deck, permuting the non-starting tiles with `rng` if given.
pub fn build_deck_with_rng<R: Rng + ?Sized>(rng: Option<&mut R>) -> (Tile, Vec<Tile>) {
    let mut tiles = Vec::with_capacity(total_count());
    for (index, def) in CATALOGUE.iter().enumerate() {
        let kind = TileKind(index as u8);
        tiles.extend((0..def.count).map(|_| def.instantiate(kind)));
    }

    if let Some(rng) = rng {
        tiles.shuffle(rng);
        debug!("shuffled deck of {} tiles", tiles.len());
    } else {
        debug!("built deck of {} tiles in catalogue order", tiles.len());
    }

    let start_tile = STARTING_TILE.instantiate(TileKind::START);
    (start_tile, tiles)
}
