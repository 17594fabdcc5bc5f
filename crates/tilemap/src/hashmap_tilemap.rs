//! A [HashmapTilemap] is a sparse tilemap backed by a hashmap.
//!
//! This tilemap has no redeeming features, save for being obviously correct.  The public tilemap type proxies to it
//! and adds the map's bounds.  This map is `O(n)` memory on number of non-default tiles stored.
use std::collections::HashMap;

use crate::{CellCoord, TileTrait};

#[derive(Default)]
pub(crate) struct HashmapTilemap<T: TileTrait> {
    tiles: HashMap<CellCoord, T>,
    default_tile: T,
}

impl<T: TileTrait> HashmapTilemap<T> {
    pub(crate) fn new(default_tile: T) -> HashmapTilemap<T> {
        HashmapTilemap {
            tiles: Default::default(),
            default_tile,
        }
    }

    /// Get a given tile, if one was set.  Otherwise, return the default tile.
    pub(crate) fn get(&self, coordinate: CellCoord) -> &T {
        self.tiles.get(&coordinate).unwrap_or(&self.default_tile)
    }

    /// Set a tile.
    pub(crate) fn set(&mut self, coordinate: CellCoord, tile: T) {
        if tile == self.default_tile {
            self.tiles.remove(&coordinate);
        } else {
            self.tiles.insert(coordinate, tile);
        }
    }

    /// Iterate over all non-default tiles in this tilemap
    pub(crate) fn iter(&self) -> impl Iterator<Item = (CellCoord, &T)> {
        self.tiles.iter().map(|(x, y)| (*x, y))
    }

    pub(crate) fn default_tile(&self) -> &T {
        &self.default_tile
    }
}
