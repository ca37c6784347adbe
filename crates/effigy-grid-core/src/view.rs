//! Presentation layer seam.
//!
//! The engine keeps a view in sync with the occupancy store without knowing
//! which UI framework draws it.

use crate::grid::Cell;
use crate::item::{ItemId, PlaceableItem};
use crate::preview::HighlightSet;

/// Receives visual updates from the engine.
pub trait GridView {
    /// Create or move the representation of `item` so it covers `cells`.
    fn show_item(&mut self, item: &PlaceableItem, anchor: Cell, cells: &[Cell]);

    /// Remove the representation of an item.
    fn hide_item(&mut self, id: ItemId);

    /// Replace all cell highlights with `highlights`.
    fn paint_highlights(&mut self, highlights: &HighlightSet);

    /// Remove all cell highlights.
    fn clear_highlights(&mut self);
}

/// View that draws nothing (headless use and tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl GridView for NullView {
    fn show_item(&mut self, _item: &PlaceableItem, _anchor: Cell, _cells: &[Cell]) {}

    fn hide_item(&mut self, _id: ItemId) {}

    fn paint_highlights(&mut self, _highlights: &HighlightSet) {}

    fn clear_highlights(&mut self) {}
}
