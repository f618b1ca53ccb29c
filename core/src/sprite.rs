use serde::{Deserialize, Serialize};

use crate::*;

/// Artwork a renderer draws for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Covered,
    Mine,
    Empty,
    Number(u8),
    Flag,
}

impl Sprite {
    pub const fn for_cell(cell: Cell) -> Self {
        if cell.is_revealed() {
            if cell.is_mine() {
                Self::Mine
            } else if cell.adjacent_mines() == 0 {
                Self::Empty
            } else {
                Self::Number(cell.adjacent_mines())
            }
        } else if cell.is_flagged() {
            Self::Flag
        } else {
            Self::Covered
        }
    }

    /// Sprite for an integer cell code, unknown codes draw as covered.
    pub const fn for_code(code: i8) -> Self {
        match code {
            ..=8 => Self::Covered,
            9 => Self::Mine,
            10 => Self::Empty,
            11..=18 => Self::Number((code - REVEALED_OFFSET) as u8),
            19..=28 => Self::Flag,
            _ => Self::Covered,
        }
    }

    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Covered => "emptyTile.jpg",
            Self::Mine => "bomb.jpg",
            Self::Empty => "empty floor.jpg",
            Self::Number(1) => "oneTile.jpg",
            Self::Number(2) => "twoTile.jpg",
            Self::Number(3) => "threeTile.jpg",
            Self::Number(4) => "fourTile.jpg",
            Self::Number(5) => "fiveTile.jpg",
            Self::Number(6) => "sixTile.jpg",
            Self::Number(7) => "sevenTile.jpg",
            Self::Number(8) => "eightTile.jpg",
            Self::Number(_) => "emptyTile.jpg",
            Self::Flag => "flagTile.jpg",
        }
    }
}

impl From<Cell> for Sprite {
    fn from(cell: Cell) -> Self {
        Self::for_cell(cell)
    }
}
