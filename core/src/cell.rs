use serde::{Deserialize, Serialize};

/// Offset added to the base code of an uncovered cell.
pub const REVEALED_OFFSET: i8 = 10;

/// Offset added to the base code of a flagged cell.
pub const FLAGGED_OFFSET: i8 = 20;

/// Base code of a mine, before any visibility offset.
pub const MINE_CODE: i8 = -1;

/// Player-visible state and content of one grid position.
///
/// A cell is never flagged and revealed at the same time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mine: bool,
    flagged: bool,
    revealed: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub(crate) const fn with_mine() -> Self {
        Self {
            mine: true,
            flagged: false,
            revealed: false,
            adjacent_mines: 0,
        }
    }

    pub(crate) const fn with_count(adjacent_mines: u8) -> Self {
        Self {
            mine: false,
            flagged: false,
            revealed: false,
            adjacent_mines,
        }
    }

    pub const fn is_mine(self) -> bool {
        self.mine
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Covered and not flagged, the only state a reveal acts on.
    pub const fn is_hidden(self) -> bool {
        !self.revealed && !self.flagged
    }

    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub(crate) fn uncover(&mut self) {
        debug_assert!(!self.flagged);
        self.revealed = true;
    }

    pub(crate) fn set_flag(&mut self, flagged: bool) {
        debug_assert!(!self.revealed);
        self.flagged = flagged;
    }

    /// Shows the cell regardless of its flag, used when the game is lost.
    pub(crate) fn expose(&mut self) {
        self.flagged = false;
        self.revealed = true;
    }

    /// Integer encoding understood by code-based renderers.
    ///
    /// `-1` covered mine, `0..=8` covered count, `+10` once uncovered, `+20` while flagged.
    pub const fn code(self) -> i8 {
        let base = if self.mine {
            MINE_CODE
        } else {
            self.adjacent_mines as i8
        };
        if self.revealed {
            base + REVEALED_OFFSET
        } else if self.flagged {
            base + FLAGGED_OFFSET
        } else {
            base
        }
    }

    /// Parses an integer code, `None` for values outside the encoding.
    pub const fn from_code(code: i8) -> Option<Self> {
        let (base, revealed, flagged) = match code {
            -1..=8 => (code, false, false),
            9..=18 => (code - REVEALED_OFFSET, true, false),
            19..=28 => (code - FLAGGED_OFFSET, false, true),
            _ => return None,
        };
        let mut cell = if base == MINE_CODE {
            Self::with_mine()
        } else {
            Self::with_count(base as u8)
        };
        cell.revealed = revealed;
        cell.flagged = flagged;
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_offsets() {
        let mut mine = Cell::with_mine();
        assert_eq!(mine.code(), -1);
        mine.set_flag(true);
        assert_eq!(mine.code(), 19);
        mine.expose();
        assert_eq!(mine.code(), 9);

        let mut three = Cell::with_count(3);
        assert_eq!(three.code(), 3);
        three.set_flag(true);
        assert_eq!(three.code(), 23);
        three.set_flag(false);
        three.uncover();
        assert_eq!(three.code(), 13);
    }

    #[test]
    fn every_code_parses_back() {
        for code in -1..=28 {
            let cell = Cell::from_code(code).unwrap();
            assert_eq!(cell.code(), code);
            assert!(!(cell.is_flagged() && cell.is_revealed()));
        }
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        assert_eq!(Cell::from_code(-2), None);
        assert_eq!(Cell::from_code(29), None);
    }

    #[test]
    fn default_cell_is_hidden_zero() {
        let cell = Cell::default();
        assert!(cell.is_hidden());
        assert_eq!(cell.code(), 0);
    }
}
