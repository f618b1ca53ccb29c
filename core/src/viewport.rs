use serde::{Deserialize, Serialize};

use crate::*;

/// Drawing area the board is fitted into, in world units (y pointing up).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub world_width: f32,
    pub world_height: f32,
    pub margin: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            world_width: 1280.,
            world_height: 728.,
            margin: 80.,
        }
    }
}

/// Placement of a grid inside a [`Viewport`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Side of one square cell
    pub scale: f32,
    pub x_indent: f32,
    pub y_indent: f32,
    pub margin: f32,
}

impl Viewport {
    /// Largest uniform cell size that fits the grid, centered on the free axis.
    pub fn layout(&self, (rows, cols): (Coord, Coord)) -> Layout {
        let game_width = self.world_width - 2. * self.margin;
        let game_height = self.world_height - 2. * self.margin;
        let (rows, cols) = (f32::from(rows), f32::from(cols));

        let scale = (game_width / cols).min(game_height / rows);
        Layout {
            scale,
            x_indent: (game_width - scale * cols) / 2.,
            y_indent: (game_height - scale * rows) / 2.,
            margin: self.margin,
        }
    }

    /// Grid cell under a pointer, with `y` measured down from the top edge.
    pub fn locate(&self, size: (Coord, Coord), x: f32, y: f32) -> Option<Location> {
        let layout = self.layout(size);
        let row = (self.world_height - y - layout.y_indent - layout.margin) / layout.scale;
        let col = (x - layout.x_indent - layout.margin) / layout.scale;

        // also rejects NaN
        if !(row >= 0. && col >= 0.) {
            return None;
        }

        let (row, col) = (row.floor(), col.floor());
        if row >= f32::from(size.0) || col >= f32::from(size.1) {
            return None;
        }
        Some(Location::new(row as Coord, col as Coord))
    }
}

impl Layout {
    /// Bottom-left corner of a cell in world units.
    pub fn cell_origin(&self, location: Location) -> (f32, f32) {
        (
            f32::from(location.col) * self.scale + self.x_indent + self.margin,
            f32::from(location.row) * self.scale + self.y_indent + self.margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easy_board_is_centered_horizontally() {
        let layout = Viewport::default().layout((8, 8));

        assert_eq!(layout.scale, 71.);
        assert_eq!(layout.x_indent, 276.);
        assert_eq!(layout.y_indent, 0.);
        assert_eq!(layout.cell_origin(Location::new(0, 0)), (356., 80.));
        assert_eq!(layout.cell_origin(Location::new(1, 2)), (498., 151.));
    }

    #[test]
    fn pointer_maps_to_cell_with_flipped_rows() {
        let viewport = Viewport::default();

        // bottom-left cell, pointer y counted from the top
        assert_eq!(viewport.locate((8, 8), 360., 643.), Some(Location::new(0, 0)));
        // top-right cell
        assert_eq!(viewport.locate((8, 8), 920., 85.), Some(Location::new(7, 7)));
    }

    #[test]
    fn pointer_outside_grid_is_ignored() {
        let viewport = Viewport::default();

        assert_eq!(viewport.locate((8, 8), 10., 10.), None);
        assert_eq!(viewport.locate((8, 8), 1000., 300.), None);
        assert_eq!(viewport.locate((8, 8), 360., 700.), None);
        assert_eq!(viewport.locate((8, 8), f32::NAN, 300.), None);
    }

    #[test]
    fn every_cell_origin_locates_back() {
        let viewport = Viewport::default();
        let size = (16, 30);
        let layout = viewport.layout(size);

        for row in 0..size.0 {
            for col in 0..size.1 {
                let location = Location::new(row, col);
                let (x, y) = layout.cell_origin(location);
                let center = (x + layout.scale / 2., y + layout.scale / 2.);
                let pointer_y = viewport.world_height - center.1;
                assert_eq!(viewport.locate(size, center.0, pointer_y), Some(location));
            }
        }
    }
}
