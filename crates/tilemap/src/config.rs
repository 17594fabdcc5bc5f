//! JSON tile map configuration.
//!
//! ```json
//! {
//!     "tile_width": 32, "tile_height": 32,
//!     "x_advance": 0, "y_advance": 0,
//!     "origin": { "x": 0, "y": 0 },
//!     "map": [["wall", "floor"], ["floor", "wall"]],
//!     "tiles": [
//!         { "tile_name": "wall", "collision_layer": 1,
//!           "collision_box": [{"x": 0, "y": 0}, {"x": 32, "y": 0}, {"x": 32, "y": 32}, {"x": 0, "y": 32}] },
//!         { "tile_name": "floor", "collision_layer": 0 }
//!     ]
//! }
//! ```
//!
//! Collision boxes are given in cell-local coordinates.  Rows of `map` run down the y axis.
use log::*;
use tessera_physics::{Polygon, V2};

use crate::errors::*;
use crate::{CellCoord, CollisionBox, CollisionRegistry, GridGeometry, Tilemap};

#[derive(Debug, Copy, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointConfig {
    pub x: f64,
    pub y: f64,
}

impl From<PointConfig> for V2 {
    fn from(p: PointConfig) -> V2 {
        V2::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TileConfig {
    pub tile_name: String,
    #[serde(default)]
    pub collision_layer: i32,
    #[serde(default)]
    pub collision_box: Option<Vec<PointConfig>>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TileMapConfig {
    pub tile_width: f64,
    pub tile_height: f64,
    #[serde(default)]
    pub x_advance: f64,
    #[serde(default)]
    pub y_advance: f64,
    #[serde(default)]
    pub origin: PointConfig,
    pub map: Vec<Vec<String>>,
    #[serde(default)]
    pub tiles: Vec<TileConfig>,
}

impl TileMapConfig {
    /// Parse a configuration, rejecting maps whose rows differ in length.
    pub fn from_json(json: &str) -> Result<TileMapConfig> {
        let config: TileMapConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let expected = self.cols();
        for (row, tiles) in self.map.iter().enumerate() {
            if tiles.len() != expected {
                return Err(TilemapError::RowWidth {
                    row,
                    expected,
                    got: tiles.len(),
                });
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.map.len()
    }

    pub fn cols(&self) -> usize {
        self.map.first().map(|r| r.len()).unwrap_or(0)
    }

    pub fn geometry(&self) -> Result<GridGeometry> {
        Ok(
            GridGeometry::new(self.tile_width, self.tile_height, self.x_advance, self.y_advance)?
                .with_origin(self.origin.into()),
        )
    }

    pub fn tilemap(&self) -> Result<Tilemap<String>> {
        self.validate()?;
        let mut tilemap = Tilemap::new(self.rows(), self.cols(), String::new());
        for (row, tiles) in self.map.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                tilemap.set(CellCoord::new(row, col), tile.clone())?;
            }
        }
        Ok(tilemap)
    }

    /// Build the registry for the configured tiles.
    ///
    /// Tiles whose collision box isn't a usable polygon are logged and left out, so cells using them get no
    /// collision at all.
    pub fn registry(&self) -> CollisionRegistry<String> {
        let mut registry = CollisionRegistry::new();

        for tile in self.tiles.iter() {
            let area = match tile.collision_box.as_ref() {
                None => None,
                Some(points) => {
                    let points = points.iter().map(|p| V2::from(*p)).collect::<Vec<_>>();
                    match Polygon::new(points) {
                        Ok(p) => Some(p),
                        Err(e) => {
                            warn!(
                                "Ignoring tile {}: its collision box is not a usable polygon: {}",
                                tile.tile_name, e
                            );
                            continue;
                        }
                    }
                }
            };

            if registry.contains(&tile.tile_name) {
                warn!(
                    "Tile {} is configured more than once; the last entry wins",
                    tile.tile_name
                );
            }

            registry.register(
                tile.tile_name.clone(),
                CollisionBox::new(area, tile.collision_layer),
            );
        }

        registry
    }
}
