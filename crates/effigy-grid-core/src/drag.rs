//! Drag sessions: relocating an item within the grid or inserting one from
//! external storage.
//!
//! `Idle -> Dragging -> {Committed | Reverted | Cancelled} -> Idle`. Only one
//! session exists at a time; beginning a new one force-cancels the old one.

use crate::executor::PlacementExecutor;
use crate::grid::{Cell, GridDimensions};
use crate::item::{ItemId, PlaceableItem};
use crate::shape::CellOffset;

/// Where the dragged item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    /// Picked up from the grid; `anchor` is the revert target.
    Grid { anchor: Cell },
    /// Brought in from external storage; nothing to restore.
    Storage,
}

/// State of an in-progress drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    item: PlaceableItem,
    origin: DragOrigin,
    /// Pointer cell minus item anchor at pick-up time.
    grab_offset: CellOffset,
    /// Candidate anchor under the pointer (None = pointer outside the grid).
    hovered: Option<Cell>,
}

impl DragSession {
    pub fn item(&self) -> &PlaceableItem {
        &self.item
    }

    pub fn origin(&self) -> DragOrigin {
        self.origin
    }

    pub fn hovered(&self) -> Option<Cell> {
        self.hovered
    }

    pub fn grab_offset(&self) -> CellOffset {
        self.grab_offset
    }

    pub fn is_from_grid(&self) -> bool {
        matches!(self.origin, DragOrigin::Grid { .. })
    }

    /// Item whose own cells validation should ignore.
    pub fn ignore(&self) -> Option<ItemId> {
        self.is_from_grid().then_some(self.item.id)
    }

    /// Candidate anchor for a pointer over `pointer`.
    pub fn candidate_for(&self, pointer: Cell) -> Cell {
        Cell::new(
            pointer.x - self.grab_offset.dx,
            pointer.y - self.grab_offset.dy,
        )
    }
}

/// Drag state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// How a drag session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The item now sits at `anchor`.
    Committed { item: ItemId, anchor: Cell },
    /// Release over an invalid target. `restored` is true when the item is
    /// back at its grid origin; always false for storage drags.
    Reverted { item: ItemId, restored: bool },
    /// Explicit abort, same restore rules as `Reverted`.
    Cancelled { item: ItemId, restored: bool },
}

impl DragOutcome {
    pub fn item(&self) -> ItemId {
        match *self {
            DragOutcome::Committed { item, .. }
            | DragOutcome::Reverted { item, .. }
            | DragOutcome::Cancelled { item, .. } => item,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, DragOutcome::Committed { .. })
    }
}

/// Drives drag sessions against a placement executor.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Start dragging the item covering `pressed`.
    ///
    /// The item stays in the store until commit. With `keep_grab_offset` the
    /// pointer keeps its position relative to the anchor; otherwise the
    /// pointer cell is the candidate anchor. Returns `None` if `pressed` is
    /// empty or off-grid. Any active session is cancelled first and its
    /// outcome returned in the tuple.
    pub fn begin_from_grid(
        &mut self,
        executor: &mut PlacementExecutor,
        pressed: Cell,
        keep_grab_offset: bool,
    ) -> Option<(Option<DragOutcome>, &DragSession)> {
        let id = executor.store().occupant(pressed)?;
        let placed = executor.get(id)?.clone();

        let forced = self.force_cancel(executor);
        let grab_offset = if keep_grab_offset {
            CellOffset::new(pressed.x - placed.anchor.x, pressed.y - placed.anchor.y)
        } else {
            CellOffset::ORIGIN
        };

        log::debug!(
            "Drag begin (grid) {} from {:?}, grab offset {:?}",
            placed.item.name,
            placed.anchor,
            grab_offset
        );
        let mut session = DragSession {
            item: placed.item,
            origin: DragOrigin::Grid {
                anchor: placed.anchor,
            },
            grab_offset,
            hovered: None,
        };
        session.hovered = Some(session.candidate_for(pressed));
        self.state = DragState::Dragging(session);
        self.session().map(|s| (forced, s))
    }

    /// Start dragging an item supplied by external storage.
    ///
    /// An item that is already on the grid is dragged from its current
    /// anchor instead, so its own cells never block the drop and a failed
    /// drop leaves it where it was. Returns the outcome of any session that
    /// had to be cancelled first.
    pub fn begin_from_storage(
        &mut self,
        executor: &mut PlacementExecutor,
        item: PlaceableItem,
    ) -> Option<DragOutcome> {
        let forced = self.force_cancel(executor);
        let origin = match executor.anchor_of(item.id) {
            Some(anchor) => {
                log::debug!("Drag begin (storage) {}: already placed at {:?}", item.name, anchor);
                DragOrigin::Grid { anchor }
            }
            None => {
                log::debug!("Drag begin (storage) {}", item.name);
                DragOrigin::Storage
            }
        };
        self.state = DragState::Dragging(DragSession {
            item,
            origin,
            grab_offset: CellOffset::ORIGIN,
            hovered: None,
        });
        forced
    }

    /// Record the pointer cell (`None` = outside the grid). Hover never
    /// touches the store.
    pub fn hover(&mut self, pointer: Option<Cell>, dims: GridDimensions) -> Option<&DragSession> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };
        let candidate = pointer
            .filter(|&p| dims.contains(p))
            .map(|p| session.candidate_for(p));
        session.hovered = candidate;
        Some(&*session)
    }

    /// Release: try to place at the last hovered anchor, reverting on
    /// failure. Returns `None` when no drag is active.
    pub fn commit(&mut self, executor: &mut PlacementExecutor) -> Option<DragOutcome> {
        let session = self.take()?;
        let id = session.item.id;

        if let Some(anchor) = session.hovered {
            if executor.try_place(&session.item, anchor) {
                log::info!("Drag committed: {} at {:?}", session.item.name, anchor);
                return Some(DragOutcome::Committed { item: id, anchor });
            }
        }

        let restored = revert(executor, &session);
        log::debug!("Drag reverted: {} (restored: {})", session.item.name, restored);
        Some(DragOutcome::Reverted { item: id, restored })
    }

    /// Abort without attempting placement.
    pub fn cancel(&mut self, executor: &mut PlacementExecutor) -> Option<DragOutcome> {
        let session = self.take()?;
        let restored = revert(executor, &session);
        log::debug!("Drag cancelled: {} (restored: {})", session.item.name, restored);
        Some(DragOutcome::Cancelled {
            item: session.item.id,
            restored,
        })
    }

    fn force_cancel(&mut self, executor: &mut PlacementExecutor) -> Option<DragOutcome> {
        if self.is_dragging() {
            log::warn!("Drag begun while another drag is active; cancelling the previous one");
        }
        let outcome = self.cancel(executor);
        if let Some(outcome) = outcome {
            log::debug!("Forced cancel: {:?}", outcome);
        }
        outcome
    }

    fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }
}

/// Put a grid-origin item back where it started.
///
/// Removal is deferred to commit, so after a failed commit the item is
/// normally still at its origin and nothing is written. Only if something
/// else moved or removed it meanwhile is the original anchor placed again.
/// This relies on a single active drag: nothing else can claim the origin.
fn revert(executor: &mut PlacementExecutor, session: &DragSession) -> bool {
    let DragOrigin::Grid { anchor } = session.origin else {
        return false;
    };
    if executor.anchor_of(session.item.id) == Some(anchor) {
        return true;
    }
    if executor.try_place(&session.item, anchor) {
        return true;
    }
    log::warn!(
        "Could not restore {} ({}) to {:?}",
        session.item.name,
        session.item.id,
        anchor
    );
    false
}
