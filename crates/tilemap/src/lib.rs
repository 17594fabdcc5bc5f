//! Tile maps, and collision queries against them.
//!
//! A [Tilemap] says which tile symbol sits in each cell, a [GridGeometry] says where the cells are, and a
//! [CollisionRegistry] says what each symbol collides as.  [TilePhysics] combines the three into an index which
//! answers "which cells on this layer does this shape touch?".
mod config;
mod errors;
mod geometry;
mod hashmap_tilemap;
mod registry;
mod tile_physics;
mod tile_trait;
mod tilemap;


pub use config::*;
pub use errors::*;
pub use geometry::*;
pub use registry::*;
pub use tile_physics::*;
pub use tile_trait::*;
pub use tilemap::*;
