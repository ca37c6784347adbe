//! Placement validation.

use crate::grid::{Cell, OccupancyStore};
use crate::item::ItemId;
use crate::shape::ShapeDescriptor;

/// Check whether `shape` can sit with its anchor at `anchor`.
///
/// Every offset cell must be in bounds and either empty or covered by
/// `ignore`. Stops at the first failing cell. Never mutates the store, so it
/// is safe to call on every hover tick.
pub fn can_place(
    store: &OccupancyStore,
    shape: &ShapeDescriptor,
    anchor: Cell,
    ignore: Option<ItemId>,
) -> bool {
    let dims = store.dimensions();
    for &offset in shape.offsets() {
        let Some(cell) = anchor.offset(offset).filter(|&c| dims.contains(c)) else {
            log::trace!("placement rejected: {:?} + {:?} out of bounds", anchor, offset);
            return false;
        };
        if let Some(occupant) = store.occupant(cell) {
            if Some(occupant) != ignore {
                log::trace!("placement rejected: {:?} occupied by {}", cell, occupant);
                return false;
            }
        }
    }
    true
}
