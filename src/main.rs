use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use serde::Serialize;

use carcassonne_deck::{
    catalogue::{total_count, validate_catalogue},
    DeckConfig, DeckConfigLoader, Tile,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Build and print a tile deck")]
struct Cli {
    /// Path to a deck config YAML file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible shuffle (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Keep tiles in catalogue order
    #[arg(long)]
    ordered: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Only validate the catalogue and report the tile count
    #[arg(long)]
    check: bool,
}

#[derive(Serialize)]
struct DeckListing<'a> {
    start_tile: &'a Tile,
    tiles: &'a [Tile],
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.check {
        validate_catalogue().context("tile catalogue is malformed")?;
        println!("Catalogue ok: {} tiles plus the starting tile.", total_count());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => DeckConfigLoader::new(".").load(path)?,
        None => DeckConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.ordered {
        config.shuffled = false;
    }
    info!("building deck with {:?}", config);

    let (start_tile, tiles) = config.build();
    match cli.format {
        Format::Text => {
            println!("start {} {start_tile}", start_tile.glyphs());
            for (index, tile) in tiles.iter().enumerate() {
                println!("{index:>5} {} {tile}", tile.glyphs());
            }
        }
        Format::Json => {
            let listing = DeckListing {
                start_tile: &start_tile,
                tiles: &tiles,
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }
    Ok(())
}
