//! Where cells sit in the world.
//!
//! A cell's box is `cell_width` by `cell_height`.  Cells are laid out on a pitch of `cell_width + x_advance` along x
//! and `cell_height + y_advance` along y, so a positive advance leaves a gap between cells and a negative one makes
//! them overlap.  Cell `(row, col)` starts at `origin + (col * pitch_x, row * pitch_y)`.
use tessera_physics::{Aabb, V2};

use crate::errors::*;
use crate::CellCoord;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridGeometry {
    cell_width: f64,
    cell_height: f64,
    x_advance: f64,
    y_advance: f64,
    origin: V2,
}

/// An inclusive, non-empty block of cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CellRange {
    pub first: CellCoord,
    pub last: CellCoord,
}

impl CellRange {
    pub fn contains(&self, cell: CellCoord) -> bool {
        (self.first.row..=self.last.row).contains(&cell.row)
            && (self.first.col..=self.last.col).contains(&cell.col)
    }

    /// Iterate over the cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = CellCoord> {
        let cols = self.first.col..=self.last.col;
        (self.first.row..=self.last.row)
            .flat_map(move |row| cols.clone().map(move |col| CellCoord::new(row, col)))
    }
}

impl GridGeometry {
    pub fn new(cell_width: f64, cell_height: f64, x_advance: f64, y_advance: f64) -> Result<GridGeometry> {
        let geometry = GridGeometry {
            cell_width,
            cell_height,
            x_advance,
            y_advance,
            origin: V2::ZERO,
        };

        let all_finite = [cell_width, cell_height, x_advance, y_advance]
            .iter()
            .all(|x| x.is_finite());
        if !all_finite
            || cell_width <= 0.0
            || cell_height <= 0.0
            || geometry.pitch_x() <= 0.0
            || geometry.pitch_y() <= 0.0
        {
            return Err(TilemapError::InvalidCellSize);
        }

        Ok(geometry)
    }

    #[must_use = "This doesn't mutate the geometry in-place"]
    pub fn with_origin(self, origin: V2) -> GridGeometry {
        GridGeometry { origin, ..self }
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    pub fn origin(&self) -> &V2 {
        &self.origin
    }

    pub fn pitch_x(&self) -> f64 {
        self.cell_width + self.x_advance
    }

    pub fn pitch_y(&self) -> f64 {
        self.cell_height + self.y_advance
    }

    /// Offset from the map's origin to the corner of `cell`.
    pub fn cell_offset(&self, cell: CellCoord) -> V2 {
        V2::new(
            cell.col as f64 * self.pitch_x(),
            cell.row as f64 * self.pitch_y(),
        )
    }

    /// World position of the corner of `cell`.
    pub fn cell_position(&self, cell: CellCoord) -> V2 {
        self.origin + self.cell_offset(cell)
    }

    /// The cell's own box, in cell-local coordinates.
    pub fn local_cell_box(&self) -> Aabb {
        Aabb::around(V2::ZERO, V2::new(self.cell_width, self.cell_height))
    }

    pub(crate) fn translate(&mut self, offset: V2) {
        self.origin += offset;
    }

    /// Find the cells of a `rows` by `cols` map whose content, bounded by `local_extent` in cell-local coordinates,
    /// could touch `bounds`.
    ///
    /// Returns `None` when `bounds` lies entirely off the map.
    pub fn cells_touching(
        &self,
        bounds: &Aabb,
        local_extent: &Aabb,
        rows: usize,
        cols: usize,
    ) -> Option<CellRange> {
        let (first_col, last_col) = axis_range(
            bounds.get_p1().x - self.origin.x,
            bounds.get_p2().x - self.origin.x,
            local_extent.get_p1().x,
            local_extent.get_p2().x,
            self.pitch_x(),
            cols,
        )?;
        let (first_row, last_row) = axis_range(
            bounds.get_p1().y - self.origin.y,
            bounds.get_p2().y - self.origin.y,
            local_extent.get_p1().y,
            local_extent.get_p2().y,
            self.pitch_y(),
            rows,
        )?;

        Some(CellRange {
            first: CellCoord::new(first_row, first_col),
            last: CellCoord::new(last_row, last_col),
        })
    }
}

/// Cell `i` covers `[i * pitch + local_low, i * pitch + local_high]`.  Return the inclusive range of `i` in `0..count`
/// for which that meets `[low, high]`.
///
/// Rounding is outward, so this may include one extra index per side but never drops one.
fn axis_range(
    low: f64,
    high: f64,
    local_low: f64,
    local_high: f64,
    pitch: f64,
    count: usize,
) -> Option<(usize, usize)> {
    if count == 0 {
        return None;
    }

    let slack = tessera_physics::tolerance::EPSILON;
    let first = ((low - local_high) / pitch - slack).floor();
    let last = ((high - local_low) / pitch + slack).floor();

    if last < 0.0 || first > (count - 1) as f64 || first > last || last.is_nan() || first.is_nan() {
        return None;
    }

    // The float to usize casts saturate, and both values are non-negative here after the max.
    let first = first.max(0.0) as usize;
    let last = (last as usize).min(count - 1);
    Some((first, last))
}
