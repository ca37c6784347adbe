//! The placement engine: the API consumed by input glue and by inventory
//! and storage collaborators.
//!
//! The engine is built once by its owner and passed by reference to whoever
//! needs it. All work happens synchronously inside each call.

use crate::catalog::ItemCatalog;
use crate::config::EngineConfig;
use crate::drag::{DragController, DragOutcome, DragState};
use crate::error::GridResult;
use crate::executor::{PlacementExecutor, PlacementListener, PlacementSnapshot};
use crate::grid::{Cell, GridDimensions, OccupancyStore};
use crate::item::{ItemId, PlaceableItem};
use crate::palette::HighlightPalette;
use crate::preview::{HighlightSet, PreviewController};
use crate::validator::can_place;
use crate::view::{GridView, NullView};

/// Grid placement engine.
#[derive(Debug)]
pub struct PlacementEngine {
    config: EngineConfig,
    executor: PlacementExecutor,
    drag: DragController,
    preview: PreviewController,
}

impl PlacementEngine {
    /// Create a headless engine.
    pub fn new(config: EngineConfig) -> GridResult<Self> {
        Self::with_view(config, Box::new(NullView))
    }

    /// Create an engine that keeps `view` in sync.
    pub fn with_view(config: EngineConfig, view: Box<dyn GridView>) -> GridResult<Self> {
        config.validate()?;
        let executor = PlacementExecutor::with_view(config.dimensions(), view);
        Ok(Self {
            config,
            executor,
            drag: DragController::new(),
            preview: PreviewController::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.config.dimensions()
    }

    pub fn palette(&self) -> &HighlightPalette {
        &self.config.palette
    }

    /// Read-only view of the occupancy store.
    pub fn store(&self) -> &OccupancyStore {
        self.executor.store()
    }

    pub fn executor(&self) -> &PlacementExecutor {
        &self.executor
    }

    /// Register a `PlacementChanged` listener.
    pub fn subscribe(&mut self, listener: PlacementListener) {
        self.executor.subscribe(listener);
    }

    // --- Placement -------------------------------------------------------

    /// Place or relocate `item` with its anchor at `(x, y)`.
    pub fn try_place_item(&mut self, item: &PlaceableItem, x: i32, y: i32) -> bool {
        self.executor.try_place(item, Cell::new(x, y))
    }

    /// Take an item off the grid. No-op if it is not placed.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        self.executor.remove(id)
    }

    /// Read-only probe: would `try_place_item` succeed? The item's own
    /// current cells do not count as blocking.
    pub fn can_place_item(&self, item: &PlaceableItem, x: i32, y: i32) -> bool {
        can_place(self.executor.store(), &item.shape, Cell::new(x, y), Some(item.id))
    }

    pub fn placed_items(&self) -> PlacementSnapshot {
        self.executor.placed_items()
    }

    // --- Drag sessions ---------------------------------------------------

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Highlights for the current hover tick (empty when idle).
    pub fn highlights(&self) -> &HighlightSet {
        self.preview.highlights()
    }

    /// Start inserting an item from external storage. Returns the outcome of
    /// a drag that was still active and had to be cancelled.
    pub fn begin_drag_from_storage(&mut self, item: PlaceableItem) -> Option<DragOutcome> {
        let forced = self.drag.begin_from_storage(&mut self.executor, item);
        self.refresh_preview();
        forced
    }

    /// Start inserting the catalog item `id`. Returns false for unknown ids.
    pub fn begin_drag_from_catalog(&mut self, catalog: &dyn ItemCatalog, id: ItemId) -> bool {
        match catalog.get(id) {
            Some(item) => {
                self.begin_drag_from_storage(item);
                true
            }
            None => {
                log::debug!("Drag from catalog ignored: unknown item {}", id);
                false
            }
        }
    }

    /// Pointer pressed on a cell. Begins a grid drag if the cell is
    /// occupied; returns whether a drag began.
    pub fn on_pointer_down_at_cell(&mut self, x: i32, y: i32) -> bool {
        let began = self
            .drag
            .begin_from_grid(&mut self.executor, Cell::new(x, y), self.config.preserve_grab_offset)
            .is_some();
        if began {
            self.refresh_preview();
        }
        began
    }

    /// Pointer moved over a cell. Off-grid coordinates count as leaving the grid.
    pub fn on_pointer_enter_cell(&mut self, x: i32, y: i32) {
        self.hover(Some(Cell::new(x, y)));
    }

    /// Pointer left the grid area.
    pub fn on_pointer_exit_grid(&mut self) {
        self.hover(None);
    }

    /// Pointer released over a cell: commit at that cell or revert.
    pub fn on_pointer_up_at_cell(&mut self, x: i32, y: i32) -> Option<DragOutcome> {
        if !self.drag.is_dragging() {
            return None;
        }
        let dims = self.dimensions();
        self.drag.hover(Some(Cell::new(x, y)), dims);
        self.finish(|drag, executor| drag.commit(executor))
    }

    /// Pointer released away from the grid: always a failed commit.
    pub fn on_pointer_up_outside(&mut self) -> Option<DragOutcome> {
        if !self.drag.is_dragging() {
            return None;
        }
        let dims = self.dimensions();
        self.drag.hover(None, dims);
        self.finish(|drag, executor| drag.commit(executor))
    }

    /// Abort the active drag without attempting placement.
    pub fn cancel_drag(&mut self) -> Option<DragOutcome> {
        self.finish(|drag, executor| drag.cancel(executor))
    }

    fn hover(&mut self, pointer: Option<Cell>) {
        let dims = self.dimensions();
        if self.drag.hover(pointer, dims).is_some() {
            self.refresh_preview();
        }
    }

    fn refresh_preview(&mut self) {
        let Some(session) = self.drag.session() else {
            return;
        };
        let highlights = self.preview.update_preview(
            self.executor.store(),
            session.item(),
            session.hovered(),
            session.ignore(),
        );
        self.executor.view_mut().paint_highlights(highlights);
    }

    fn finish(
        &mut self,
        resolve: impl FnOnce(&mut DragController, &mut PlacementExecutor) -> Option<DragOutcome>,
    ) -> Option<DragOutcome> {
        let outcome = resolve(&mut self.drag, &mut self.executor)?;
        self.preview.clear();
        self.executor.view_mut().clear_highlights();
        Some(outcome)
    }
}
