//! Grid coordinates and the occupancy store.
//!
//! The store is the single source of truth for which item covers which cell.
//! Only the placement executor mutates it; everyone else reads.

use crate::item::ItemId;
use crate::shape::CellOffset;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A cell coordinate. Signed so that candidate anchors hanging off the
/// top or left edge are representable (and rejected by bounds checks).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell reached by applying a shape offset to this anchor, or `None`
    /// if a coordinate leaves the `i32` range.
    pub fn offset(self, offset: CellOffset) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(offset.dx)?,
            self.y.checked_add(offset.dy)?,
        ))
    }
}

// Row-major: y first, then x.
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Fixed width and height of a grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self::new(6, 4)
    }
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check whether a cell lies inside `0 <= x < width`, `0 <= y < height`.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as i64) < self.width as i64
            && (cell.y as i64) < self.height as i64
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of an in-bounds cell.
    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    fn cell_at_index(&self, index: usize) -> Cell {
        let width = self.width as usize;
        Cell::new((index % width) as i32, (index / width) as i32)
    }

    /// Iterate every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).map(|i| self.cell_at_index(i))
    }
}

/// W×H table of nullable item references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyStore {
    dimensions: GridDimensions,
    cells: Vec<Option<ItemId>>,
}

impl OccupancyStore {
    /// Create an empty store.
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![None; dimensions.cell_count()],
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// The item covering `cell`, or `None` for empty or out-of-bounds cells.
    pub fn occupant(&self, cell: Cell) -> Option<ItemId> {
        self.dimensions
            .index(cell)
            .and_then(|i| self.cells[i])
    }

    /// Check if any cell is covered by `id`.
    pub fn contains_item(&self, id: ItemId) -> bool {
        self.cells.iter().any(|c| *c == Some(id))
    }

    /// All cells covered by `id`, found by scanning the whole table.
    pub fn cells_of(&self, id: ItemId) -> Vec<Cell> {
        self.occupied_cells()
            .filter(|&(_, occupant)| occupant == id)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Every occupied cell with its occupant, in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Cell, ItemId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|id| (self.dimensions.cell_at_index(i), id)))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Mark a cell as covered by `id`. Returns false for out-of-bounds cells.
    pub(crate) fn set(&mut self, cell: Cell, id: ItemId) -> bool {
        match self.dimensions.index(cell) {
            Some(i) => {
                self.cells[i] = Some(id);
                true
            }
            None => false,
        }
    }

    /// Clear every cell covered by `id` and return how many were cleared.
    ///
    /// Scans the full table instead of trusting the item's shape so that a
    /// stray cell left by earlier inconsistency is also released.
    pub(crate) fn clear_item(&mut self, id: ItemId) -> usize {
        let mut cleared = 0;
        for slot in self.cells.iter_mut().filter(|c| **c == Some(id)) {
            *slot = None;
            cleared += 1;
        }
        cleared
    }
}
