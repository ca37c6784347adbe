//! Per-cell validity feedback while a drag is in progress.

use crate::grid::{Cell, OccupancyStore};
use crate::item::{ItemId, PlaceableItem};
use crate::validator::can_place;
use std::collections::BTreeMap;

/// Feedback style for one highlighted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFeedback {
    /// Part of the dragged item's footprint at a legal anchor.
    Valid,
    /// Part of the dragged item's footprint at an illegal anchor.
    Invalid,
    /// Covered by some other placed item.
    OccupiedByOther,
}

/// Cell → feedback map for the current hover tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    cells: BTreeMap<Cell, CellFeedback>,
    candidate: Option<Cell>,
    candidate_valid: Option<bool>,
}

impl HighlightSet {
    pub fn get(&self, cell: Cell) -> Option<CellFeedback> {
        self.cells.get(&cell).copied()
    }

    /// Highlighted cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellFeedback)> + '_ {
        self.cells.iter().map(|(&c, &f)| (c, f))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Anchor the footprint pass was computed for, if it ran.
    pub fn candidate(&self) -> Option<Cell> {
        self.candidate
    }

    /// Verdict of the footprint pass, if it ran.
    pub fn candidate_valid(&self) -> Option<bool> {
        self.candidate_valid
    }

    /// Number of cells carrying `feedback`.
    pub fn count(&self, feedback: CellFeedback) -> usize {
        self.cells.values().filter(|&&f| f == feedback).count()
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.candidate = None;
        self.candidate_valid = None;
    }
}

/// Recomputes the highlight set from scratch on every hover tick.
#[derive(Debug, Clone, Default)]
pub struct PreviewController {
    highlights: HighlightSet,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    /// Rebuild highlights for `item` hovering at `candidate`.
    ///
    /// Board context first (every cell owned by another item), then the
    /// item's footprint, which overwrites context marks where they overlap.
    /// An absent or off-grid anchor skips the footprint pass.
    pub fn update_preview(
        &mut self,
        store: &OccupancyStore,
        item: &PlaceableItem,
        candidate: Option<Cell>,
        ignore: Option<ItemId>,
    ) -> &HighlightSet {
        self.highlights.clear();

        for (cell, occupant) in store.occupied_cells() {
            if occupant != item.id {
                self.highlights
                    .cells
                    .insert(cell, CellFeedback::OccupiedByOther);
            }
        }

        let dims = store.dimensions();
        if let Some(anchor) = candidate.filter(|&a| dims.contains(a)) {
            let valid = can_place(store, &item.shape, anchor, ignore);
            let feedback = if valid {
                CellFeedback::Valid
            } else {
                CellFeedback::Invalid
            };
            for cell in item.shape.cells_at(anchor).filter(|&c| dims.contains(c)) {
                self.highlights.cells.insert(cell, feedback);
            }
            self.highlights.candidate = Some(anchor);
            self.highlights.candidate_valid = Some(valid);
        }

        &self.highlights
    }

    /// Drop all highlights (drag ended).
    pub fn clear(&mut self) {
        self.highlights.clear();
    }
}
