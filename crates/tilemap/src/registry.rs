//! Map tile symbols to the collision geometry they produce.
use std::collections::HashMap;

use log::*;
use tessera_physics::{Polygon, Transform, V2};

use crate::{CellCoord, TileTrait};

/// The collision box of a single cell: an optional convex area and the layer it occupies.
///
/// A box with no area still claims its layer but can never collide.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionBox {
    pub area: Option<Polygon>,
    pub layer: i32,
}

impl CollisionBox {
    pub fn new(area: Option<Polygon>, layer: i32) -> CollisionBox {
        CollisionBox { area, layer }
    }

    pub fn translate(&mut self, offset: V2) {
        if let Some(a) = self.area.as_mut() {
            a.translate(offset);
        }
    }

    #[must_use = "This doesn't mutate the box in-place"]
    pub fn translated(&self, offset: V2) -> CollisionBox {
        let mut ret = self.clone();
        ret.translate(offset);
        ret
    }
}

type Factory = Box<dyn Fn(CellCoord) -> Option<CollisionBox> + Send + Sync>;

enum Entry {
    Fixed(CollisionBox),
    Factory(Factory),
}

/// Knows how to build a cell-local [CollisionBox] for each tile symbol.
///
/// Entries are either fixed boxes, cloned into every cell using the symbol, or closures which are handed the cell
/// and may return different geometry per cell, or none at all.  All geometry is in cell-local coordinates, with the
/// cell's corner at the origin; the tile physics moves it into place.
pub struct CollisionRegistry<T: TileTrait> {
    entries: HashMap<T, Entry>,
}

impl<T: TileTrait> Default for CollisionRegistry<T> {
    fn default() -> Self {
        CollisionRegistry {
            entries: Default::default(),
        }
    }
}

impl<T: TileTrait> CollisionRegistry<T> {
    pub fn new() -> CollisionRegistry<T> {
        Default::default()
    }

    /// Register a fixed box for `tile`, replacing any earlier entry.
    pub fn register(&mut self, tile: T, collision_box: CollisionBox) {
        if let Some(_old) = self.entries.insert(tile, Entry::Fixed(collision_box)) {
            debug!("Replaced an existing collision registration");
        }
    }

    /// Register a closure for `tile`, replacing any earlier entry.
    pub fn register_factory(
        &mut self,
        tile: T,
        factory: impl Fn(CellCoord) -> Option<CollisionBox> + Send + Sync + 'static,
    ) {
        if let Some(_old) = self.entries.insert(tile, Entry::Factory(Box::new(factory))) {
            debug!("Replaced an existing collision registration");
        }
    }

    pub fn contains(&self, tile: &T) -> bool {
        self.entries.contains_key(tile)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the cell-local box for `tile` at `cell`.
    ///
    /// `None` if the symbol is unknown or its factory declined.
    pub fn instantiate(&self, tile: &T, cell: CellCoord) -> Option<CollisionBox> {
        match self.entries.get(tile)? {
            Entry::Fixed(b) => Some(b.clone()),
            Entry::Factory(f) => f(cell),
        }
    }
}
