//! Placement executor: the only writer of the occupancy store.

use crate::grid::{Cell, GridDimensions, OccupancyStore};
use crate::item::{ItemId, PlaceableItem};
use crate::validator::can_place;
use crate::view::{GridView, NullView};
use std::collections::HashMap;
use std::fmt;

/// An item together with the anchor it is placed at.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub item: PlaceableItem,
    pub anchor: Cell,
}

/// Point-in-time copy of everything on the grid, in placement order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementSnapshot {
    items: Vec<PlacedItem>,
}

impl PlacementSnapshot {
    pub fn iter(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|p| p.item.id == id)
    }

    pub fn anchor_of(&self, id: ItemId) -> Option<Cell> {
        self.items.iter().find(|p| p.item.id == id).map(|p| p.anchor)
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|p| p.item.id).collect()
    }
}

/// Callback fired after every successful place or remove.
pub type PlacementListener = Box<dyn FnMut(&PlacementSnapshot)>;

/// Applies placements and removals, keeping the store, the placed-item
/// index and the view in step.
pub struct PlacementExecutor {
    store: OccupancyStore,
    /// Placed items keyed by ID.
    placed: HashMap<ItemId, PlacedItem>,
    /// Placement order, oldest first.
    order: Vec<ItemId>,
    view: Box<dyn GridView>,
    listeners: Vec<PlacementListener>,
}

impl fmt::Debug for PlacementExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacementExecutor")
            .field("store", &self.store)
            .field("order", &self.order)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl PlacementExecutor {
    /// Create an executor over an empty grid with no view.
    pub fn new(dimensions: GridDimensions) -> Self {
        Self::with_view(dimensions, Box::new(NullView))
    }

    /// Create an executor that mirrors placements into `view`.
    pub fn with_view(dimensions: GridDimensions, view: Box<dyn GridView>) -> Self {
        Self {
            store: OccupancyStore::new(dimensions),
            placed: HashMap::new(),
            order: Vec::new(),
            view,
            listeners: Vec::new(),
        }
    }

    /// Read-only access to the occupancy store.
    pub fn store(&self) -> &OccupancyStore {
        &self.store
    }

    pub(crate) fn view_mut(&mut self) -> &mut dyn GridView {
        self.view.as_mut()
    }

    /// Register a `PlacementChanged` listener.
    pub fn subscribe(&mut self, listener: PlacementListener) {
        self.listeners.push(listener);
    }

    /// Place `item` with its anchor at `anchor`.
    ///
    /// An item that is already on the grid is relocated: its old cells are
    /// cleared before the new ones are written. Validation ignores the
    /// item's own cells so overlapping moves are allowed. Returns false and
    /// changes nothing if the target is out of bounds or collides.
    pub fn try_place(&mut self, item: &PlaceableItem, anchor: Cell) -> bool {
        if !can_place(&self.store, &item.shape, anchor, Some(item.id)) {
            return false;
        }

        let previous = self.placed.get(&item.id).map(|p| p.anchor);
        self.store.clear_item(item.id);

        let cells: Vec<Cell> = item.shape.cells_at(anchor).collect();
        for &cell in &cells {
            self.store.set(cell, item.id);
        }

        if previous.is_none() {
            self.order.push(item.id);
        }
        self.placed.insert(
            item.id,
            PlacedItem {
                item: item.clone(),
                anchor,
            },
        );
        self.view.show_item(item, anchor, &cells);

        match previous {
            Some(from) => log::debug!("Moved {} ({}) {:?} -> {:?}", item.name, item.id, from, anchor),
            None => log::debug!("Placed {} ({}) at {:?}", item.name, item.id, anchor),
        }

        debug_assert!(self.is_consistent());
        self.notify();
        true
    }

    /// Take an item off the grid.
    ///
    /// Clears every cell the store attributes to `id`, not just the cells its
    /// shape implies. Removing an item that is not placed is a no-op.
    /// Returns true if anything changed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let cleared = self.store.clear_item(id);
        let was_placed = self.placed.remove(&id).is_some();
        if cleared == 0 && !was_placed {
            return false;
        }

        self.order.retain(|&placed_id| placed_id != id);
        self.view.hide_item(id);
        log::debug!("Removed {} ({} cells cleared)", id, cleared);

        debug_assert!(self.is_consistent());
        self.notify();
        true
    }

    /// Snapshot of all placed items, detached from the live store.
    pub fn placed_items(&self) -> PlacementSnapshot {
        PlacementSnapshot {
            items: self
                .order
                .iter()
                .filter_map(|id| self.placed.get(id).cloned())
                .collect(),
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.placed.get(&id)
    }

    pub fn anchor_of(&self, id: ItemId) -> Option<Cell> {
        self.placed.get(&id).map(|p| p.anchor)
    }

    pub fn is_placed(&self, id: ItemId) -> bool {
        self.placed.contains_key(&id)
    }

    /// Check the occupancy invariants: each placed item covers exactly the
    /// cells its shape implies at its anchor, and every occupied cell
    /// belongs to a placed item.
    pub fn is_consistent(&self) -> bool {
        for (id, placed) in &self.placed {
            let expected: Vec<Cell> = placed.item.shape.cells_at(placed.anchor).collect();
            if expected.iter().any(|&c| self.store.occupant(c) != Some(*id)) {
                return false;
            }
            if self.store.cells_of(*id).len() != expected.len() {
                return false;
            }
        }
        self.store
            .occupied_cells()
            .all(|(_, occupant)| self.placed.contains_key(&occupant))
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.placed_items();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
