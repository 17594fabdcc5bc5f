use tessera_physics::GeometryError;

use crate::CellCoord;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TilemapError {
    #[error("Could not parse tile map configuration: {}", _0)]
    Json(#[from] serde_json::Error),

    #[error("Geometry error: {}", _0)]
    Geometry(#[from] GeometryError),

    #[error("Row {row} has {got} tiles but the map is {expected} tiles wide")]
    RowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Tile widths and heights must be positive and finite, and advances must not make a cell's pitch zero or negative")]
    InvalidCellSize,

    #[error("Cell {cell} is outside the {rows}x{cols} map")]
    OutOfBounds {
        cell: CellCoord,
        rows: usize,
        cols: usize,
    },
}

pub type Result<T, E = TilemapError> = std::result::Result<T, E>;
