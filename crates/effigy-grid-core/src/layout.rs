//! Mapping between pointer positions and grid cells.
//!
//! UI glue uses this to turn raw pointer coordinates into the cell-indexed
//! input events the engine consumes.

use crate::grid::{Cell, GridDimensions};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// On-screen geometry of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Top-left corner of cell (0, 0).
    pub origin: Point,
    /// Edge length of one cell.
    pub cell_size: f64,
    /// Spacing between neighbouring cells.
    pub gap: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            cell_size: 48.0,
            gap: 4.0,
        }
    }
}

impl GridLayout {
    pub fn new(origin: Point, cell_size: f64, gap: f64) -> Self {
        Self {
            origin,
            cell_size,
            gap,
        }
    }

    fn pitch(&self) -> f64 {
        self.cell_size + self.gap
    }

    /// Rectangle covered by `cell`.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let pitch = self.pitch();
        let min = self.origin + Vec2::new(cell.x as f64 * pitch, cell.y as f64 * pitch);
        Rect::from_origin_size(min, (self.cell_size, self.cell_size))
    }

    /// Centre of `cell`.
    pub fn cell_center(&self, cell: Cell) -> Point {
        self.cell_rect(cell).center()
    }

    /// Bounds of the whole grid.
    pub fn bounds(&self, dims: GridDimensions) -> Rect {
        let pitch = self.pitch();
        let size = (
            (dims.width as f64 * pitch - self.gap).max(0.0),
            (dims.height as f64 * pitch - self.gap).max(0.0),
        );
        Rect::from_origin_size(self.origin, size)
    }

    /// Cell under `point`, or `None` outside the grid or inside a gap.
    pub fn cell_at(&self, point: Point, dims: GridDimensions) -> Option<Cell> {
        let pitch = self.pitch();
        if pitch <= 0.0 {
            return None;
        }
        let local = point - self.origin;
        let cell = Cell::new(
            (local.x / pitch).floor() as i32,
            (local.y / pitch).floor() as i32,
        );
        if !dims.contains(cell) {
            return None;
        }
        let rect = self.cell_rect(cell);
        (point.x < rect.x1 && point.y < rect.y1).then_some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMS: GridDimensions = GridDimensions::new(6, 4);

    #[test]
    fn test_cell_rect() {
        let layout = GridLayout::new(Point::new(10.0, 20.0), 40.0, 5.0);
        let rect = layout.cell_rect(Cell::new(2, 1));
        assert!((rect.x0 - 100.0).abs() < f64::EPSILON);
        assert!((rect.y0 - 65.0).abs() < f64::EPSILON);
        assert!((rect.width() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cell_at_round_trip() {
        let layout = GridLayout::default();
        for cell in DIMS.cells() {
            assert_eq!(layout.cell_at(layout.cell_center(cell), DIMS), Some(cell));
        }
    }

    #[test]
    fn test_cell_at_outside_and_gap() {
        let layout = GridLayout::new(Point::ZERO, 40.0, 10.0);
        assert_eq!(layout.cell_at(Point::new(-1.0, 5.0), DIMS), None);
        assert_eq!(layout.cell_at(Point::new(5.0, 500.0), DIMS), None);
        // x = 45 falls in the gap between column 0 and column 1.
        assert_eq!(layout.cell_at(Point::new(45.0, 5.0), DIMS), None);
        assert_eq!(layout.cell_at(Point::new(55.0, 5.0), DIMS), Some(Cell::new(1, 0)));
    }

    #[test]
    fn test_bounds() {
        let layout = GridLayout::new(Point::ZERO, 40.0, 10.0);
        let bounds = layout.bounds(DIMS);
        assert!((bounds.width() - 290.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 190.0).abs() < f64::EPSILON);
    }
}
