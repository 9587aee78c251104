use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalogue::TileKind;
use crate::error::TileError;
use crate::terrain::Terrain;

/// Edge of a tile. The discriminant is the index into [`Tile::sides`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Left = 0,
    Down = 1,
    Right = 2,
    Up = 3,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Down, Side::Right, Side::Up];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Side> {
        Side::ALL.get(index).copied()
    }

    /// The side of the neighbouring tile this edge touches.
    pub fn opposite(self) -> Side {
        Side::ALL[(self.index() + 2) % 4]
    }

    /// Where this edge ends up after a quarter turn of the tile
    /// (Left→Down→Right→Up→Left).
    pub fn rotated(self) -> Side {
        Side::ALL[(self.index() + 1) % 4]
    }

    fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Left => "Left",
            Side::Down => "Down",
            Side::Right => "Right",
            Side::Up => "Up",
        };
        f.pad(name)
    }
}

/// Set of sides merged into one region on a tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Side>", from = "Vec<Side>")]
pub struct SideSet(u8);

impl SideSet {
    pub const EMPTY: SideSet = SideSet(0);

    pub fn from_sides(sides: &[Side]) -> Self {
        sides.iter().copied().collect()
    }

    pub fn single(side: Side) -> Self {
        SideSet(side.bit())
    }

    pub fn contains(self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }

    pub fn insert(&mut self, side: Side) {
        self.0 |= side.bit();
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_disjoint(self, other: SideSet) -> bool {
        self.0 & other.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Side> {
        Side::ALL.into_iter().filter(move |side| self.contains(*side))
    }

    pub fn rotated(self) -> Self {
        self.iter().map(Side::rotated).collect()
    }
}

impl FromIterator<Side> for SideSet {
    fn from_iter<I: IntoIterator<Item = Side>>(iter: I) -> Self {
        let mut set = SideSet::EMPTY;
        for side in iter {
            set.insert(side);
        }
        set
    }
}

impl From<Vec<Side>> for SideSet {
    fn from(value: Vec<Side>) -> Self {
        value.into_iter().collect()
    }
}

impl From<SideSet> for Vec<Side> {
    fn from(value: SideSet) -> Self {
        value.iter().collect()
    }
}

impl fmt::Display for SideSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, side) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{side}")?;
        }
        f.write_str("}")
    }
}

/// Legacy index of a cloister placement in the `(side, player)` pair encoding.
pub const CLOISTER_INDEX: i16 = 4;

/// Where on a tile a meeple stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeepleSpot {
    Side(Side),
    Cloister,
}

impl MeepleSpot {
    /// Index in the `(side, player)` pair encoding: `0..=3` for sides,
    /// [`CLOISTER_INDEX`] for the cloister.
    pub fn legacy_index(self) -> i16 {
        match self {
            MeepleSpot::Side(side) => side.index() as i16,
            MeepleSpot::Cloister => CLOISTER_INDEX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meeple {
    pub spot: MeepleSpot,
    pub player: u8,
}

impl Meeple {
    pub fn on_side(side: Side, player: u8) -> Self {
        Self {
            spot: MeepleSpot::Side(side),
            player,
        }
    }

    pub fn on_cloister(player: u8) -> Self {
        Self {
            spot: MeepleSpot::Cloister,
            player,
        }
    }

    /// `(side, player)` pair form. Every `u8` player stays non-negative,
    /// so `-1` is only ever produced for an empty slot.
    pub fn to_legacy_pair(self) -> (i16, i16) {
        (self.spot.legacy_index(), i16::from(self.player))
    }
}

/// One square game piece.
///
/// `sides` and `connections` are fixed at construction. The meeple slot is
/// only changed through [`Tile::place_meeple`] and [`Tile::take_meeple`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    kind: TileKind,
    sides: [Terrain; 4],
    pub cloister: bool,
    pub emblem: bool,
    connections: Vec<SideSet>,
    meeple: Option<Meeple>,
}

impl Tile {
    pub fn new(
        kind: TileKind,
        sides: [Terrain; 4],
        cloister: bool,
        emblem: bool,
        connections: Vec<SideSet>,
    ) -> Self {
        Self {
            kind,
            sides,
            cloister,
            emblem,
            connections,
            meeple: None,
        }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn sides(&self) -> &[Terrain; 4] {
        &self.sides
    }

    pub fn side(&self, side: Side) -> Terrain {
        self.sides[side.index()]
    }

    pub fn connections(&self) -> &[SideSet] {
        &self.connections
    }

    pub fn meeple(&self) -> Option<Meeple> {
        self.meeple
    }

    /// Meeple slot in the `(side, player)` encoding, `(-1, -1)` when empty.
    pub fn meeple_pair(&self) -> (i16, i16) {
        self.meeple.map_or((-1, -1), Meeple::to_legacy_pair)
    }

    pub fn place_meeple(&mut self, meeple: Meeple) -> Result<(), TileError> {
        if let Some(existing) = self.meeple {
            return Err(TileError::Occupied {
                player: existing.player,
            });
        }
        if meeple.spot == MeepleSpot::Cloister && !self.cloister {
            return Err(TileError::NoCloister);
        }
        self.meeple = Some(meeple);
        Ok(())
    }

    pub fn take_meeple(&mut self) -> Option<Meeple> {
        self.meeple.take()
    }

    /// Region containing `side`: its connection group, or the side alone.
    pub fn region_of(&self, side: Side) -> SideSet {
        self.connections
            .iter()
            .copied()
            .find(|group| group.contains(side))
            .unwrap_or_else(|| SideSet::single(side))
    }

    pub fn is_connected(&self, side: Side) -> bool {
        self.region_of(side).len() > 1
    }

    /// Copy of this tile turned a quarter, each edge moving one step along
    /// Left→Down→Right→Up. A meeple on a side turns with it; one on the
    /// cloister stays put.
    pub fn rotated(&self) -> Tile {
        let mut sides = self.sides;
        sides.rotate_right(1);
        let meeple = self.meeple.map(|meeple| match meeple.spot {
            MeepleSpot::Side(side) => Meeple::on_side(side.rotated(), meeple.player),
            MeepleSpot::Cloister => meeple,
        });
        Tile {
            kind: self.kind,
            sides,
            cloister: self.cloister,
            emblem: self.emblem,
            connections: self.connections.iter().map(|group| group.rotated()).collect(),
            meeple,
        }
    }

    /// Compact edge strip in side order, e.g. `r~rc` for the starting tile.
    pub fn glyphs(&self) -> String {
        self.sides.iter().map(|terrain| terrain.glyph()).collect()
    }

    pub fn validate(&self) -> Result<(), TileError> {
        let mut seen = SideSet::EMPTY;
        for (index, group) in self.connections.iter().enumerate() {
            if group.is_empty() {
                return Err(TileError::EmptyGroup { group: index });
            }
            if let Some(side) = group.iter().find(|side| seen.contains(*side)) {
                return Err(TileError::OverlappingGroups { side });
            }
            for side in group.iter() {
                seen.insert(side);
            }
        }
        Ok(())
    }

    /// Connection groups whose sides do not all share one terrain.
    pub fn mixed_terrain_groups(&self) -> Vec<SideSet> {
        self.connections
            .iter()
            .copied()
            .filter(|group| {
                let mut terrains = group.iter().map(|side| self.side(side));
                match terrains.next() {
                    Some(first) => terrains.any(|terrain| terrain != first),
                    None => false,
                }
            })
            .collect()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile({} [{:<5} {:<5} {:<5} {:<5}]",
            self.kind, self.sides[0], self.sides[1], self.sides[2], self.sides[3]
        )?;
        for group in &self.connections {
            write!(f, " {group}")?;
        }
        if self.cloister {
            f.write_str(" Cloister")?;
        }
        if self.emblem {
            f.write_str(" Emblem")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{definition, STARTING_TILE};
    use Terrain::*;

    fn crossing() -> Tile {
        Tile::new(
            TileKind::START,
            [City, Road, Road, City],
            false,
            true,
            vec![
                SideSet::from_sides(&[Side::Left, Side::Up]),
                SideSet::from_sides(&[Side::Down, Side::Right]),
            ],
        )
    }

    #[test]
    fn side_indices_follow_compass_order() {
        for (index, side) in Side::ALL.iter().enumerate() {
            assert_eq!(side.index(), index);
            assert_eq!(Side::from_index(index), Some(*side));
        }
        assert_eq!(Side::from_index(4), None);
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Up.opposite(), Side::Down);
        assert_eq!(Side::Up.rotated(), Side::Left);
    }

    #[test]
    fn side_set_membership() {
        let set = SideSet::from_sides(&[Side::Right, Side::Left]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Side::Left));
        assert!(!set.contains(Side::Up));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Side::Left, Side::Right]);
        assert!(set.is_disjoint(SideSet::single(Side::Down)));
        assert_eq!(set.to_string(), "{Left,Right}");
    }

    #[test]
    fn side_set_serializes_as_list() {
        let set = SideSet::from_sides(&[Side::Down, Side::Up]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"Down\",\"Up\"]");
        let back: SideSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn new_tile_has_no_meeple() {
        let tile = crossing();
        assert_eq!(tile.meeple(), None);
        assert_eq!(tile.meeple_pair(), (-1, -1));
    }

    #[test]
    fn meeple_can_be_placed_and_taken() {
        let mut tile = crossing();
        tile.place_meeple(Meeple::on_side(Side::Left, 1)).unwrap();
        assert_eq!(tile.meeple_pair(), (0, 1));

        let err = tile.place_meeple(Meeple::on_side(Side::Down, 2)).unwrap_err();
        assert_eq!(err, TileError::Occupied { player: 1 });

        assert_eq!(tile.take_meeple(), Some(Meeple::on_side(Side::Left, 1)));
        assert_eq!(tile.meeple(), None);
    }

    #[test]
    fn cloister_meeple_needs_cloister() {
        let mut plain = crossing();
        assert_eq!(
            plain.place_meeple(Meeple::on_cloister(0)),
            Err(TileError::NoCloister)
        );

        let mut monastery = definition("A").unwrap().instantiate(TileKind(0));
        monastery.place_meeple(Meeple::on_cloister(3)).unwrap();
        assert_eq!(monastery.meeple_pair(), (CLOISTER_INDEX, 3));
    }

    #[test]
    fn region_of_falls_back_to_single_side() {
        let tile = STARTING_TILE.instantiate(TileKind::START);
        assert_eq!(
            tile.region_of(Side::Right),
            SideSet::from_sides(&[Side::Left, Side::Right])
        );
        assert_eq!(tile.region_of(Side::Up), SideSet::single(Side::Up));
        assert!(tile.is_connected(Side::Left));
        assert!(!tile.is_connected(Side::Down));
    }

    #[test]
    fn rotation_moves_sides_groups_and_meeple() {
        let mut tile = STARTING_TILE.instantiate(TileKind::START);
        tile.place_meeple(Meeple::on_side(Side::Up, 0)).unwrap();

        let turned = tile.rotated();
        assert_eq!(turned.sides(), &[City, Road, Grass, Road]);
        assert_eq!(
            turned.connections(),
            &[SideSet::from_sides(&[Side::Down, Side::Up])]
        );
        assert_eq!(turned.meeple(), Some(Meeple::on_side(Side::Left, 0)));

        let full_turn = turned.rotated().rotated().rotated();
        assert_eq!(full_turn, tile);
    }

    #[test]
    fn rotation_keeps_cloister_meeple() {
        let mut tile = definition("TierF").unwrap().instantiate(TileKind(0));
        tile.place_meeple(Meeple::on_cloister(2)).unwrap();
        assert_eq!(tile.rotated().meeple(), Some(Meeple::on_cloister(2)));
    }

    #[test]
    fn validate_rejects_overlapping_groups() {
        let tile = Tile::new(
            TileKind::START,
            [Road, Road, Road, Road],
            false,
            false,
            vec![
                SideSet::from_sides(&[Side::Left, Side::Down]),
                SideSet::from_sides(&[Side::Down, Side::Right]),
            ],
        );
        assert_eq!(
            tile.validate(),
            Err(TileError::OverlappingGroups { side: Side::Down })
        );
    }

    #[test]
    fn validate_rejects_empty_group() {
        let tile = Tile::new(
            TileKind::START,
            [Grass; 4],
            false,
            false,
            vec![SideSet::EMPTY],
        );
        assert_eq!(tile.validate(), Err(TileError::EmptyGroup { group: 0 }));
    }

    #[test]
    fn mixed_terrain_groups_are_reported() {
        assert!(crossing().mixed_terrain_groups().is_empty());
        let odd = Tile::new(
            TileKind::START,
            [City, Grass, Grass, City],
            false,
            false,
            vec![SideSet::from_sides(&[Side::Left, Side::Right, Side::Up])],
        );
        assert_eq!(odd.mixed_terrain_groups().len(), 1);
    }

    #[test]
    fn legacy_pair_keeps_high_player_indices() {
        let mut tile = STARTING_TILE.instantiate(TileKind::START);
        tile.place_meeple(Meeple::on_side(Side::Left, 255)).unwrap();
        assert_eq!(tile.meeple_pair(), (0, 255));
        assert_eq!(Meeple::on_side(Side::Up, 200).to_legacy_pair(), (3, 200));
        assert_eq!(Meeple::on_cloister(128).to_legacy_pair(), (CLOISTER_INDEX, 128));
    }

    #[test]
    fn glyph_strip_follows_side_order() {
        let start = STARTING_TILE.instantiate(TileKind::START);
        assert_eq!(start.glyphs(), "r~rc");
        assert_eq!(start.rotated().glyphs(), "cr~r");
    }

    #[test]
    fn display_lists_features() {
        let rendered = crossing().to_string();
        assert!(rendered.starts_with("Tile(start [City  Road  Road  City ]"));
        assert!(rendered.contains("{Left,Up}"));
        assert!(rendered.ends_with(" Emblem)"));
    }
}
