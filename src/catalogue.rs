use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::CatalogueError;
use crate::terrain::Terrain::{self, City, Grass, Road};
use crate::tile::Side::{self, Down, Left, Right, Up};
use crate::tile::{SideSet, Tile};

/// Identifies the catalogue entry a tile was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKind(pub u8);

impl TileKind {
    pub const START: TileKind = TileKind(u8::MAX);

    pub fn name(self) -> &'static str {
        if self == TileKind::START {
            return STARTING_TILE.name;
        }
        CATALOGUE
            .get(self.0 as usize)
            .map_or("unknown", |def| def.name)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Serialize for TileKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TileDefinition {
    pub name: &'static str,
    pub sides: [Terrain; 4],
    pub cloister: bool,
    pub emblem: bool,
    pub connections: &'static [&'static [Side]],
    pub count: u8,
}

impl TileDefinition {
    pub fn instantiate(&self, kind: TileKind) -> Tile {
        let connections = self
            .connections
            .iter()
            .map(|group| SideSet::from_sides(group))
            .collect();
        Tile::new(kind, self.sides, self.cloister, self.emblem, connections)
    }
}

pub const STARTING_TILE: TileDefinition = TileDefinition {
    name: "start",
    sides: [Road, Grass, Road, City],
    cloister: false,
    emblem: false,
    connections: &[&[Left, Right]],
    count: 1,
};

/// Every non-starting tile type of the base game, in deck order.
pub const CATALOGUE: &[TileDefinition] = &[
    TileDefinition {
        name: "A",
        sides: [Grass, Road, Grass, Grass],
        cloister: true,
        emblem: false,
        connections: &[],
        count: 2,
    },
    TileDefinition {
        name: "B",
        sides: [Grass, Grass, Grass, Grass],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 4,
    },
    TileDefinition {
        name: "C",
        sides: [City, City, City, City],
        cloister: false,
        emblem: true,
        connections: &[&[Left, Down, Right, Up]],
        count: 1,
    },
    TileDefinition {
        name: "D",
        sides: [Road, Grass, Road, City],
        cloister: false,
        emblem: false,
        connections: &[&[Left, Right]],
        count: 3,
    },
    TileDefinition {
        name: "E",
        sides: [Grass, Grass, Grass, City],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 5,
    },
    TileDefinition {
        name: "F",
        sides: [City, Grass, City, Grass],
        cloister: false,
        emblem: true,
        connections: &[&[Left, Right]],
        count: 2,
    },
    TileDefinition {
        name: "G",
        sides: [City, Grass, City, Grass],
        cloister: false,
        emblem: false,
        connections: &[&[Left, Right]],
        count: 1,
    },
    TileDefinition {
        name: "H",
        sides: [Grass, City, Grass, City],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 3,
    },
    TileDefinition {
        name: "I",
        sides: [Grass, Grass, City, City],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 2,
    },
    TileDefinition {
        name: "J",
        sides: [Grass, Road, Road, City],
        cloister: false,
        emblem: false,
        connections: &[&[Down, Right]],
        count: 3,
    },
    TileDefinition {
        name: "K",
        sides: [Road, Road, Grass, City],
        cloister: false,
        emblem: false,
        connections: &[&[Left, Down]],
        count: 3,
    },
    TileDefinition {
        name: "L",
        sides: [Road, Road, Road, City],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 3,
    },
    TileDefinition {
        name: "M",
        sides: [City, Grass, Grass, City],
        cloister: false,
        emblem: true,
        connections: &[&[Left, Up]],
        count: 2,
    },
    TileDefinition {
        name: "N",
        sides: [City, Grass, Grass, City],
        cloister: false,
        emblem: false,
        connections: &[&[Left, Up]],
        count: 3,
    },
    TileDefinition {
        name: "O",
        sides: [City, Road, Road, City],
        cloister: false,
        emblem: true,
        connections: &[&[Left, Up], &[Down, Right]],
        count: 2,
    },
    TileDefinition {
        name: "P",
        sides: [City, Road, Road, City],
        cloister: false,
        emblem: false,
        connections: &[&[Left, Up], &[Down, Right]],
        count: 3,
    },
    // Q through T join side 2 into the city group even though it is not a
    // city edge. Kept as shipped.
    TileDefinition {
        name: "Q",
        sides: [City, Grass, Grass, City],
        cloister: false,
        emblem: true,
        connections: &[&[Left, Right, Up]],
        count: 1,
    },
    TileDefinition {
        name: "R",
        sides: [City, Grass, Grass, City],
        cloister: false,
        emblem: false,
        connections: &[&[Left, Right, Up]],
        count: 3,
    },
    TileDefinition {
        name: "S",
        sides: [City, Road, Road, City],
        cloister: false,
        emblem: true,
        connections: &[&[Left, Right, Up]],
        count: 2,
    },
    TileDefinition {
        name: "T",
        sides: [City, Road, Road, City],
        cloister: false,
        emblem: false,
        connections: &[&[Left, Right, Up]],
        count: 1,
    },
    TileDefinition {
        name: "U",
        sides: [Grass, Road, Grass, Road],
        cloister: false,
        emblem: false,
        connections: &[&[Down, Up]],
        count: 8,
    },
    TileDefinition {
        name: "V",
        sides: [Road, Road, Grass, Grass],
        cloister: false,
        emblem: false,
        connections: &[&[Left, Down]],
        count: 9,
    },
    TileDefinition {
        name: "W",
        sides: [Road, Road, Road, Grass],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 4,
    },
    TileDefinition {
        name: "X",
        sides: [Road, Road, Road, Road],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 1,
    },
    TileDefinition {
        name: "TierA",
        sides: [Road, Road, Road, Grass],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 1,
    },
    TileDefinition {
        name: "TierB",
        sides: [Road, Grass, Grass, City],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 1,
    },
    TileDefinition {
        name: "TierC",
        sides: [Grass, Grass, Road, City],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 1,
    },
    TileDefinition {
        name: "TierD",
        sides: [Grass, Road, Grass, Grass],
        cloister: true,
        emblem: false,
        connections: &[],
        count: 1,
    },
    TileDefinition {
        name: "TierE",
        sides: [Road, Grass, City, City],
        cloister: false,
        emblem: false,
        connections: &[&[Right, Up]],
        count: 1,
    },
    TileDefinition {
        name: "TierF",
        sides: [Road, Grass, Road, Grass],
        cloister: true,
        emblem: false,
        connections: &[],
        count: 1,
    },
    TileDefinition {
        name: "TierG",
        sides: [Grass, Road, Road, City],
        cloister: false,
        emblem: false,
        connections: &[&[Down, Right]],
        count: 1,
    },
    TileDefinition {
        name: "TierH",
        sides: [Grass, Road, Grass, City],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 1,
    },
    TileDefinition {
        name: "TierI",
        sides: [Road, Road, Road, Road],
        cloister: false,
        emblem: false,
        connections: &[&[Left, Up], &[Down, Right]],
        count: 1,
    },
    TileDefinition {
        name: "TierJ",
        sides: [Grass, Road, City, City],
        cloister: false,
        emblem: false,
        connections: &[&[Right, Up]],
        count: 1,
    },
    TileDefinition {
        name: "TierK",
        sides: [Grass, Road, Grass, Grass],
        cloister: false,
        emblem: false,
        connections: &[],
        count: 1,
    },
    TileDefinition {
        name: "TierL",
        sides: [Road, Road, Grass, City],
        cloister: false,
        emblem: false,
        connections: &[&[Left, Down]],
        count: 1,
    },
];

pub fn definition(name: &str) -> Option<&'static TileDefinition> {
    CATALOGUE.iter().find(|def| def.name == name)
}

/// Kind assigned to tiles built from the catalogue entry called `name`.
pub fn kind_of(name: &str) -> Option<TileKind> {
    CATALOGUE
        .iter()
        .position(|def| def.name == name)
        .map(|index| TileKind(index as u8))
}

/// Number of non-starting tiles in a full deck.
pub fn total_count() -> usize {
    CATALOGUE.iter().map(|def| def.count as usize).sum()
}

pub fn validate_catalogue() -> Result<(), CatalogueError> {
    let mut names = HashSet::new();
    let entries = std::iter::once((TileKind::START, &STARTING_TILE)).chain(
        CATALOGUE
            .iter()
            .enumerate()
            .map(|(index, def)| (TileKind(index as u8), def)),
    );
    for (kind, def) in entries {
        if !names.insert(def.name) {
            return Err(CatalogueError::DuplicateName { name: def.name });
        }
        if !(1..=9).contains(&def.count) {
            return Err(CatalogueError::InvalidCount {
                name: def.name,
                count: def.count,
            });
        }
        def.instantiate(kind)
            .validate()
            .map_err(|source| CatalogueError::InvalidTile {
                name: def.name,
                source,
            })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_well_formed() {
        assert_eq!(validate_catalogue(), Ok(()));
    }

    #[test]
    fn catalogue_has_36_types_and_83_tiles() {
        assert_eq!(CATALOGUE.len(), 36);
        assert_eq!(total_count(), 83);
        let tier: usize = CATALOGUE
            .iter()
            .filter(|def| def.name.starts_with("Tier"))
            .map(|def| def.count as usize)
            .sum();
        assert_eq!((total_count() - tier, tier), (71, 12));
    }

    #[test]
    fn counts_stay_within_one_to_nine() {
        let max = CATALOGUE.iter().map(|def| def.count).max().unwrap();
        let min = CATALOGUE.iter().map(|def| def.count).min().unwrap();
        assert_eq!((min, max), (1, 9));
        assert_eq!(definition("V").unwrap().count, 9);
    }

    #[test]
    fn only_q_to_t_mix_terrain_in_a_group() {
        let mixed: Vec<&str> = CATALOGUE
            .iter()
            .filter(|def| !def.instantiate(TileKind(0)).mixed_terrain_groups().is_empty())
            .map(|def| def.name)
            .collect();
        assert_eq!(mixed, vec!["Q", "R", "S", "T"]);
    }

    #[test]
    fn kinds_resolve_to_names() {
        assert_eq!(kind_of("C"), Some(TileKind(2)));
        assert_eq!(TileKind(2).name(), "C");
        assert_eq!(TileKind::START.name(), "start");
        assert_eq!(TileKind(200).name(), "unknown");
        assert_eq!(kind_of("Z"), None);
    }

    #[test]
    fn starting_tile_matches_d_shape() {
        let start = STARTING_TILE.instantiate(TileKind::START);
        let d = definition("D").unwrap().instantiate(TileKind::START);
        assert_eq!(start, d);
    }
}
