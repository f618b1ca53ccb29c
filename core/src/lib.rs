use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use scoreboard::*;
pub use sprite::*;
pub use types::*;
pub use viewport::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod scoreboard;
mod sprite;
mod types;
mod viewport;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Mine counts that do not fit are accepted here and reduced when mines are placed.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn size(&self) -> (Coord, Coord) {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

/// Preset board configurations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Easy => BoardConfig::new_unchecked(8, 8, 10),
            Self::Medium => BoardConfig::new_unchecked(16, 16, 40),
            Self::Hard => BoardConfig::new_unchecked(16, 30, 99),
        }
    }
}

/// Fixed set of mine positions for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_locations((rows, cols): (Coord, Coord), mines: &[Location]) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        let mut mine_mask: Array2<bool> = Array2::default((usize::from(rows), usize::from(cols)));

        for &location in mines {
            if location.row >= rows || location.col >= cols {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[location.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> (Coord, Coord) {
        types::dim_to_size(self.mine_mask.dim())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, location: Location) -> bool {
        self[location]
    }

    pub fn adjacent_mine_count(&self, location: Location) -> u8 {
        self.mine_mask
            .iter_neighbors(location)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Location> for MineLayout {
    type Output = bool;

    fn index(&self, location: Location) -> &Self::Output {
        &self.mine_mask[location.to_nd_index()]
    }
}

impl IndexMut<Location> for MineLayout {
    fn index_mut(&mut self, location: Location) -> &mut Self::Output {
        &mut self.mine_mask[location.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
    Won,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_presets() {
        assert_eq!(Difficulty::Easy.config(), BoardConfig::new_unchecked(8, 8, 10));
        assert_eq!(Difficulty::Medium.config(), BoardConfig::new_unchecked(16, 16, 40));
        assert_eq!(Difficulty::Hard.config(), BoardConfig::new_unchecked(16, 30, 99));
        assert_eq!(BoardConfig::default(), Difficulty::Medium.config());
    }

    #[test]
    fn config_rejects_empty_dimensions() {
        assert_eq!(BoardConfig::new(0, 5, 1), Err(GameError::InvalidDimensions));
        assert_eq!(BoardConfig::new(5, 0, 1), Err(GameError::InvalidDimensions));
        assert_eq!(BoardConfig::new(1, 1, 3).map(|c| c.total_cells()), Ok(1));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = Difficulty::Hard.config();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"rows":16,"cols":30,"mines":99}"#);
        assert_eq!(serde_json::from_str::<BoardConfig>(&json).unwrap(), config);
    }

    #[test]
    fn layout_counts_adjacent_mines() {
        let layout =
            MineLayout::from_mine_locations((3, 3), &[Location::new(0, 0), Location::new(1, 1)])
                .unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.adjacent_mine_count(Location::new(0, 1)), 2);
        assert_eq!(layout.adjacent_mine_count(Location::new(2, 2)), 1);
        assert_eq!(layout.adjacent_mine_count(Location::new(1, 1)), 1);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        assert_eq!(
            MineLayout::from_mine_locations((2, 2), &[Location::new(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }
}
