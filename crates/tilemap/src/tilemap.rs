use crate::errors::*;
use crate::hashmap_tilemap::*;
use crate::TileTrait;

/// The position of a cell in a tile map, counted from the top left.
///
/// Rows run along y and columns along x.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, derive_more::Display)]
#[display(fmt = "({}, {})", row, col)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub const fn new(row: usize, col: usize) -> CellCoord {
        CellCoord { row, col }
    }
}

/// A fixed-size grid of tiles, `rows` by `cols`.
pub struct Tilemap<T: TileTrait> {
    rows: usize,
    cols: usize,
    hm: HashmapTilemap<T>,
}

impl<T: TileTrait> Tilemap<T> {
    /// Make a map where every cell holds `default_tile`.
    pub fn new(rows: usize, cols: usize, default_tile: T) -> Tilemap<T> {
        Tilemap {
            rows,
            cols,
            hm: HashmapTilemap::new(default_tile),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, coordinate: CellCoord) -> bool {
        coordinate.row < self.rows && coordinate.col < self.cols
    }

    /// Get a tile from this tilemap, returning the default tile if no value was set, or `None` if the coordinate is
    /// off the map.
    pub fn get(&self, coordinate: CellCoord) -> Option<&T> {
        self.in_bounds(coordinate).then(|| self.hm.get(coordinate))
    }

    /// Set a tile in this tilemap.
    pub fn set(&mut self, coordinate: CellCoord, tile: T) -> Result<()> {
        if !self.in_bounds(coordinate) {
            return Err(TilemapError::OutOfBounds {
                cell: coordinate,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.hm.set(coordinate, tile);
        Ok(())
    }

    /// Iterate over all non-default tiles in this tilemap in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &T)> {
        self.hm.iter()
    }

    /// Iterate over every cell, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellCoord, &T)> {
        let cols = self.cols;
        (0..self.rows)
            .flat_map(move |row| (0..cols).map(move |col| CellCoord::new(row, col)))
            .map(move |c| (c, self.hm.get(c)))
    }

    pub fn default_tile(&self) -> &T {
        self.hm.default_tile()
    }
}
