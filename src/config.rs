use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;

use crate::deck::build_deck_with_rng;
use crate::rng::DeckRng;
use crate::tile::Tile;

fn default_shuffled() -> bool {
    true
}

/// How a game session wants its deck prepared.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeckConfig {
    #[serde(default = "default_shuffled")]
    pub shuffled: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            shuffled: default_shuffled(),
            seed: None,
        }
    }
}

impl DeckConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: DeckConfig =
            serde_yaml::from_str(text).context("Failed to parse deck config")?;
        Ok(config)
    }

    pub fn build(&self) -> (Tile, Vec<Tile>) {
        if !self.shuffled {
            if self.seed.is_some() {
                warn!("deck seed is ignored because shuffling is disabled");
            }
            return build_deck_with_rng::<DeckRng>(None);
        }
        let mut rng = DeckRng::from_seed_option(self.seed);
        debug!("shuffling deck with seed {:?}", rng.seed());
        build_deck_with_rng(Some(&mut rng))
    }
}

pub struct DeckConfigLoader {
    base_dir: PathBuf,
}

impl DeckConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<DeckConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read deck config {}", path.display()))?;
        let config: DeckConfig = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!("loaded deck config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
