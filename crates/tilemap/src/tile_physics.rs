//! Collision queries against a grid of tiles.
//!
//! Each cell gets at most one [CollisionBox], placed in world space when the index is built.  A query first asks the
//! grid which cells could possibly be touched, then runs the exact test against those cells' boxes on the requested
//! layer.
use log::*;
use smallvec::SmallVec;
use tessera_physics::{Aabb, Circle, Polygon, V2};

use crate::errors::*;
use crate::{CellCoord, CellRange, CollisionBox, CollisionRegistry, GridGeometry, TileMapConfig, TileTrait, Tilemap};

/// Something the tile physics can be asked about.
#[derive(Debug, Copy, Clone)]
pub enum CollisionQuery<'a> {
    Polygon(&'a Polygon),
    Circle(&'a Circle),
}

impl<'a> From<&'a Polygon> for CollisionQuery<'a> {
    fn from(p: &'a Polygon) -> Self {
        CollisionQuery::Polygon(p)
    }
}

impl<'a> From<&'a Circle> for CollisionQuery<'a> {
    fn from(c: &'a Circle) -> Self {
        CollisionQuery::Circle(c)
    }
}

impl<'a> CollisionQuery<'a> {
    pub fn get_bounding_box(&self) -> Aabb {
        match self {
            CollisionQuery::Polygon(p) => p.get_bounding_box(),
            CollisionQuery::Circle(c) => c.get_bounding_box(),
        }
    }

    fn collides_with(&self, area: &Polygon) -> bool {
        match self {
            CollisionQuery::Polygon(p) => p.collides_with_polygon(area),
            CollisionQuery::Circle(c) => c.collides_with_polygon(area),
        }
    }
}

/// The answer to a tile query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileCollisionResult {
    /// True iff `cells` is non-empty.
    pub collided: bool,
    /// Every colliding cell, row by row.
    pub cells: SmallVec<[CellCoord; 8]>,
}

#[derive(Debug)]
pub struct TilePhysics {
    rows: usize,
    cols: usize,
    geometry: GridGeometry,
    /// Row-major, `rows * cols` long.
    boxes: Vec<Option<CollisionBox>>,
    /// Union of the cell box and every collision area, in cell-local coordinates.
    local_extent: Aabb,
}

impl TilePhysics {
    /// Place a collision box in every cell whose tile the registry knows about.
    ///
    /// Cells with unknown tiles are logged and left empty.
    pub fn build<T: TileTrait>(
        tilemap: &Tilemap<T>,
        geometry: GridGeometry,
        registry: &CollisionRegistry<T>,
    ) -> TilePhysics {
        let mut boxes = Vec::with_capacity(tilemap.rows() * tilemap.cols());
        let mut local_extent = geometry.local_cell_box();
        let mut misses = 0usize;

        for (cell, tile) in tilemap.iter_cells() {
            let local = registry.instantiate(tile, cell);
            match local.as_ref() {
                None => {
                    debug!("No collision box for tile {:?} at {}", tile, cell);
                    misses += 1;
                }
                Some(CollisionBox { area: Some(a), .. }) => {
                    let b = a.get_bounding_box();
                    local_extent = local_extent.expand_to(*b.get_p1()).expand_to(*b.get_p2());
                }
                Some(_) => {}
            }
            boxes.push(local.map(|b| b.translated(geometry.cell_position(cell))));
        }

        info!(
            "Built tile physics: {}x{} cells, {} with collision boxes, {} without configuration",
            tilemap.rows(),
            tilemap.cols(),
            boxes.len() - misses,
            misses
        );

        TilePhysics {
            rows: tilemap.rows(),
            cols: tilemap.cols(),
            geometry,
            boxes,
            local_extent,
        }
    }

    pub fn from_config(config: &TileMapConfig) -> Result<TilePhysics> {
        let tilemap = config.tilemap()?;
        let geometry = config.geometry()?;
        let registry = config.registry();
        Ok(TilePhysics::build(&tilemap, geometry, &registry))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols).then(|| cell.row * self.cols + cell.col)
    }

    /// The world-space box of `cell`, if it has one.
    pub fn collision_box(&self, cell: CellCoord) -> Option<&CollisionBox> {
        self.boxes.get(self.index(cell)?)?.as_ref()
    }

    /// Cells whose collision boxes could touch `bounds`.
    pub fn cell_range(&self, bounds: &Aabb) -> Option<CellRange> {
        self.geometry
            .cells_touching(bounds, &self.local_extent, self.rows, self.cols)
    }

    /// Find every cell on `layer` whose area collides with the query shape.
    pub fn is_collision<'a>(&self, query: impl Into<CollisionQuery<'a>>, layer: i32) -> TileCollisionResult {
        let query = query.into();
        let mut result = TileCollisionResult::default();

        let range = match self.cell_range(&query.get_bounding_box()) {
            Some(r) => r,
            None => return result,
        };

        for cell in range.iter() {
            let hit = match self.collision_box(cell) {
                Some(CollisionBox {
                    area: Some(area),
                    layer: l,
                }) if *l == layer => query.collides_with(area),
                _ => false,
            };

            if hit {
                result.cells.push(cell);
            }
        }

        result.collided = !result.cells.is_empty();
        result
    }

    /// Move the whole map, origin and boxes alike.
    pub fn translate(&mut self, offset: V2) {
        self.geometry.translate(offset);
        for b in self.boxes.iter_mut().flatten() {
            b.translate(offset);
        }
    }
}
