//! Shape descriptors: the static footprint of an item.

use crate::error::{GridError, GridResult};
use crate::grid::Cell;
use serde::{Deserialize, Serialize};

/// Relative cell position within a shape, measured from the anchor (top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellOffset {
    pub dx: i32,
    pub dy: i32,
}

impl CellOffset {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Ordered set of occupied offsets. Always contains `(0, 0)`; offsets are
/// non-negative but need not be contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeDescriptor {
    offsets: Vec<CellOffset>,
    width: u32,
    height: u32,
}

impl ShapeDescriptor {
    /// Build a shape from `(dx, dy)` pairs. Duplicates are dropped, order is kept.
    pub fn new(offsets: impl IntoIterator<Item = (i32, i32)>) -> GridResult<Self> {
        let mut unique: Vec<CellOffset> = Vec::new();
        for (dx, dy) in offsets {
            if dx < 0 || dy < 0 {
                return Err(GridError::InvalidShape(format!(
                    "negative offset ({}, {})",
                    dx, dy
                )));
            }
            let offset = CellOffset::new(dx, dy);
            if !unique.contains(&offset) {
                unique.push(offset);
            }
        }

        if !unique.contains(&CellOffset::ORIGIN) {
            return Err(GridError::InvalidShape(
                "shape must include the anchor offset (0, 0)".to_string(),
            ));
        }

        Ok(Self::from_offsets(unique))
    }

    /// Build a shape from ascii rows, `#` marking an occupied cell and `.` an
    /// empty one. The top-left character must be `#`.
    ///
    /// ```
    /// use effigy_grid_core::ShapeDescriptor;
    /// let l = ShapeDescriptor::from_rows(&["##", "#."]).unwrap();
    /// assert_eq!(l.cell_count(), 3);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> GridResult<Self> {
        let mut offsets = Vec::new();
        for (dy, row) in rows.iter().enumerate() {
            for (dx, ch) in row.as_ref().chars().enumerate() {
                match ch {
                    '#' => offsets.push((dx as i32, dy as i32)),
                    '.' | ' ' => {}
                    other => {
                        return Err(GridError::InvalidShape(format!(
                            "unexpected character '{}' in shape row {}",
                            other, dy
                        )));
                    }
                }
            }
        }
        Self::new(offsets)
    }

    /// One cell.
    pub fn single() -> Self {
        Self::from_offsets(vec![CellOffset::ORIGIN])
    }

    /// Two cells side by side.
    pub fn domino() -> Self {
        Self::from_offsets(vec![CellOffset::ORIGIN, CellOffset::new(1, 0)])
    }

    /// `{(0,0), (1,0), (0,1)}`.
    pub fn l_tromino() -> Self {
        Self::from_offsets(vec![
            CellOffset::ORIGIN,
            CellOffset::new(1, 0),
            CellOffset::new(0, 1),
        ])
    }

    /// 2×2 block.
    pub fn square() -> Self {
        Self::from_offsets(vec![
            CellOffset::ORIGIN,
            CellOffset::new(1, 0),
            CellOffset::new(0, 1),
            CellOffset::new(1, 1),
        ])
    }

    fn from_offsets(offsets: Vec<CellOffset>) -> Self {
        // Offsets are non-negative, so `as u32` is lossless and `+ 1` fits.
        let width = offsets.iter().map(|o| o.dx as u32 + 1).max().unwrap_or(1);
        let height = offsets.iter().map(|o| o.dy as u32 + 1).max().unwrap_or(1);
        Self {
            offsets,
            width,
            height,
        }
    }

    pub fn offsets(&self) -> &[CellOffset] {
        &self.offsets
    }

    pub fn cell_count(&self) -> usize {
        self.offsets.len()
    }

    /// Bounding box width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Bounding box height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// World cells covered when the anchor sits at `anchor`. Cells whose
    /// coordinates overflow `i32` are skipped; they lie outside every grid.
    pub fn cells_at(&self, anchor: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.offsets.iter().filter_map(move |&o| anchor.offset(o))
    }
}
