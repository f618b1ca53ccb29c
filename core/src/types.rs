use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single grid axis, used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine, flag and total-cell counts.
pub type CellCount = u16;

/// Position of a cell on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub row: Coord,
    pub col: Coord,
}

impl Location {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }
}

impl From<(Coord, Coord)> for Location {
    fn from((row, col): (Coord, Coord)) -> Self {
        Self::new(row, col)
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Location {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row.into(), self.col.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub(crate) fn dim_to_size(dim: (usize, usize)) -> (Coord, Coord) {
    (
        Coord::try_from(dim.0).unwrap_or(Coord::MAX),
        Coord::try_from(dim.1).unwrap_or(Coord::MAX),
    )
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, location: Location) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, location: Location) -> NeighborIter {
        NeighborIter::new(location, dim_to_size(self.dim()))
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `location`, returning a value only when it remains in bounds.
fn apply_delta(
    location: Location,
    delta: (isize, isize),
    bounds: (Coord, Coord),
) -> Option<Location> {
    let (dr, dc) = delta;
    let (rows, cols) = bounds;

    let row = location.row.checked_add_signed(dr.try_into().ok()?)?;
    if row >= rows {
        return None;
    }

    let col = location.col.checked_add_signed(dc.try_into().ok()?)?;
    if col >= cols {
        return None;
    }

    Some(Location::new(row, col))
}

/// Iterates the up to 8 cells surrounding a center, clipped to the grid.
#[derive(Debug)]
pub struct NeighborIter {
    center: Location,
    bounds: (Coord, Coord),
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Location, bounds: (Coord, Coord)) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Location;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
