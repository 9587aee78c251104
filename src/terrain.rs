use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of region occupying one edge of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Terrain {
    Road,
    Grass,
    City,
}

impl Terrain {
    pub const ALL: [Terrain; 3] = [Terrain::Road, Terrain::Grass, Terrain::City];

    pub fn name(self) -> &'static str {
        match self {
            Terrain::Road => "Road",
            Terrain::Grass => "Grass",
            Terrain::City => "City",
        }
    }

    /// Single character used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Terrain::Road => 'r',
            Terrain::Grass => '~',
            Terrain::City => 'c',
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
