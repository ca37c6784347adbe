//! End-to-end placement and drag scenarios on the default 6×4 grid.

use effigy_grid_core::{
    Cell, CellFeedback, DragOutcome, EngineConfig, PlaceableItem, PlacementEngine,
    PlacementSnapshot, ShapeDescriptor, Tier,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn engine() -> PlacementEngine {
    PlacementEngine::new(EngineConfig::default()).unwrap()
}

fn effigy(name: &str, shape: ShapeDescriptor) -> PlaceableItem {
    PlaceableItem::new(name, Tier::Common, shape)
}

/// Occupied cells per item, rebuilt from each item's shape and anchor.
fn footprints(engine: &PlacementEngine) -> Vec<HashSet<Cell>> {
    engine
        .placed_items()
        .iter()
        .map(|p| p.item.shape.cells_at(p.anchor).collect())
        .collect()
}

fn assert_invariants(engine: &PlacementEngine) {
    assert!(engine.executor().is_consistent());
    let prints = footprints(engine);
    for (i, a) in prints.iter().enumerate() {
        for b in &prints[i + 1..] {
            assert!(a.is_disjoint(b), "placed items overlap");
        }
    }
}

#[test]
fn single_cell_on_empty_grid() {
    let mut engine = engine();
    let s = effigy("S", ShapeDescriptor::single());

    assert!(engine.try_place_item(&s, 0, 0));
    assert_eq!(engine.store().occupant(Cell::new(0, 0)), Some(s.id));
    let empty = engine
        .dimensions()
        .cells()
        .filter(|&c| engine.store().occupant(c).is_none())
        .count();
    assert_eq!(empty, 23);
}

#[test]
fn l_tromino_past_bottom_edge_is_rejected() {
    let engine = engine();
    let l = effigy("L", ShapeDescriptor::l_tromino());
    assert!(!engine.can_place_item(&l, 4, 3));
    assert!(engine.can_place_item(&l, 4, 2));
}

#[test]
fn square_in_last_cell_is_rejected() {
    let engine = engine();
    let dims = engine.dimensions();
    let sq = effigy("Q", ShapeDescriptor::square());
    assert!(!engine.can_place_item(&sq, dims.width as i32 - 1, dims.height as i32 - 1));
}

#[test]
fn collision_with_existing_item() {
    let mut engine = engine();
    let a = effigy("A", ShapeDescriptor::single());
    let b = effigy("B", ShapeDescriptor::domino());
    assert!(engine.try_place_item(&a, 2, 2));

    assert!(engine.can_place_item(&b, 0, 2));
    assert!(!engine.can_place_item(&b, 1, 2));
    assert!(!engine.can_place_item(&b, 2, 2));
    assert!(engine.can_place_item(&b, 3, 2));
    assert_invariants(&engine);
}

#[test]
fn remove_twice_equals_remove_once() {
    let mut engine = engine();
    let l = effigy("L", ShapeDescriptor::l_tromino());
    let s = effigy("S", ShapeDescriptor::single());
    engine.try_place_item(&l, 0, 0);
    engine.try_place_item(&s, 5, 3);

    engine.remove_item(l.id);
    let once = engine.store().clone();
    engine.remove_item(l.id);
    assert_eq!(engine.store(), &once);
    assert_eq!(engine.placed_items().ids(), vec![s.id]);
}

#[test]
fn relocation_round_trip_restores_occupancy() {
    let mut engine = engine();
    let x = effigy("X", ShapeDescriptor::l_tromino());
    let other = effigy("O", ShapeDescriptor::domino());
    engine.try_place_item(&x, 1, 1);
    engine.try_place_item(&other, 4, 0);
    let before = engine.store().clone();

    assert!(engine.try_place_item(&x, 2, 1));
    assert_ne!(engine.store(), &before);
    assert!(engine.try_place_item(&x, 1, 1));
    assert_eq!(engine.store(), &before);
    assert_invariants(&engine);
}

#[test]
fn probing_never_mutates() {
    let mut engine = engine();
    let a = effigy("A", ShapeDescriptor::square());
    engine.try_place_item(&a, 1, 1);
    let before = engine.store().clone();
    let probe = effigy("P", ShapeDescriptor::domino());

    for y in -1..5 {
        for x in -1..7 {
            let first = engine.can_place_item(&probe, x, y);
            assert_eq!(engine.can_place_item(&probe, x, y), first);
        }
    }
    assert_eq!(engine.store(), &before);
}

#[test]
fn drag_onto_own_footprint_is_valid_and_changes_nothing() {
    let mut engine = engine();
    let x = effigy("X", ShapeDescriptor::square());
    engine.try_place_item(&x, 0, 0);
    let before = engine.store().clone();

    assert!(engine.on_pointer_down_at_cell(0, 0));
    engine.on_pointer_enter_cell(0, 0);
    assert_eq!(engine.highlights().candidate_valid(), Some(true));
    assert_eq!(engine.highlights().count(CellFeedback::Valid), 4);

    let outcome = engine.on_pointer_up_at_cell(0, 0).unwrap();
    assert_eq!(outcome, DragOutcome::Committed { item: x.id, anchor: Cell::new(0, 0) });
    assert_eq!(engine.store(), &before);
}

#[test]
fn drag_onto_other_item_reverts_to_origin() {
    let mut engine = engine();
    let x = effigy("X", ShapeDescriptor::single());
    let y = effigy("Y", ShapeDescriptor::single());
    engine.try_place_item(&x, 0, 0);
    engine.try_place_item(&y, 5, 3);

    assert!(engine.on_pointer_down_at_cell(0, 0));
    engine.on_pointer_enter_cell(5, 3);

    let highlights = engine.highlights();
    assert_eq!(highlights.get(Cell::new(5, 3)), Some(CellFeedback::Invalid));
    assert_eq!(highlights.candidate_valid(), Some(false));

    // A wider item shows the other item as context where the footprint
    // does not cover it.
    engine.cancel_drag();
    let wide = effigy("W", ShapeDescriptor::domino());
    engine.begin_drag_from_storage(wide);
    engine.on_pointer_enter_cell(3, 3);
    assert_eq!(engine.highlights().get(Cell::new(5, 3)), Some(CellFeedback::OccupiedByOther));
    assert_eq!(engine.highlights().get(Cell::new(0, 0)), Some(CellFeedback::OccupiedByOther));
    engine.cancel_drag();

    assert!(engine.on_pointer_down_at_cell(0, 0));
    engine.on_pointer_enter_cell(5, 3);
    let outcome = engine.on_pointer_up_at_cell(5, 3).unwrap();
    assert_eq!(outcome, DragOutcome::Reverted { item: x.id, restored: true });
    assert_eq!(engine.placed_items().anchor_of(x.id), Some(Cell::new(0, 0)));
    assert!(engine.highlights().is_empty());
    assert_invariants(&engine);
}

#[test]
fn storage_drag_notifies_collaborators() {
    let mut engine = engine();
    let log: Rc<RefCell<Vec<PlacementSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    engine.subscribe(Box::new(move |snapshot: &PlacementSnapshot| sink.borrow_mut().push(snapshot.clone())));

    let relic = effigy("Relic", ShapeDescriptor::l_tromino());
    engine.begin_drag_from_storage(relic.clone());
    engine.on_pointer_enter_cell(5, 0);
    assert_eq!(engine.highlights().candidate_valid(), Some(false));
    engine.on_pointer_enter_cell(2, 1);
    assert_eq!(engine.highlights().candidate_valid(), Some(true));
    assert!(log.borrow().is_empty());

    let outcome = engine.on_pointer_up_at_cell(2, 1).unwrap();
    assert!(outcome.is_committed());

    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].anchor_of(relic.id), Some(Cell::new(2, 1)));
}

#[test]
fn second_drag_force_cancels_first() {
    let mut engine = engine();
    let x = effigy("X", ShapeDescriptor::single());
    let y = effigy("Y", ShapeDescriptor::single());
    engine.try_place_item(&x, 0, 0);
    engine.try_place_item(&y, 1, 0);

    assert!(engine.on_pointer_down_at_cell(0, 0));
    engine.on_pointer_enter_cell(3, 3);
    assert!(engine.on_pointer_down_at_cell(1, 0));

    let outcome = engine.on_pointer_up_at_cell(3, 3).unwrap();
    assert_eq!(outcome, DragOutcome::Committed { item: y.id, anchor: Cell::new(3, 3) });
    assert_eq!(engine.placed_items().anchor_of(x.id), Some(Cell::new(0, 0)));
    assert_invariants(&engine);
}

#[test]
fn random_walk_keeps_invariants() {
    let mut engine = engine();
    let items = [
        effigy("a", ShapeDescriptor::single()),
        effigy("b", ShapeDescriptor::domino()),
        effigy("c", ShapeDescriptor::l_tromino()),
        effigy("d", ShapeDescriptor::square()),
        effigy("e", ShapeDescriptor::new([(0, 0), (2, 0), (1, 1)]).unwrap()),
    ];

    // Small LCG so the walk is deterministic.
    let mut seed: u32 = 0x2545_f491;
    let mut next = |bound: u32| {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (seed >> 16) % bound
    };

    for _ in 0..500 {
        let item = &items[next(items.len() as u32) as usize];
        let x = next(8) as i32 - 1;
        let y = next(6) as i32 - 1;
        match next(4) {
            0 => {
                engine.remove_item(item.id);
            }
            1 => {
                engine.begin_drag_from_storage(item.clone());
                engine.on_pointer_enter_cell(x, y);
                let shown_valid = engine.highlights().candidate_valid() == Some(true);
                let outcome = engine.on_pointer_up_at_cell(x, y).unwrap();
                // Green preview if and only if the drop lands.
                assert_eq!(outcome.is_committed(), shown_valid);
            }
            _ => {
                engine.try_place_item(item, x, y);
            }
        }
        assert_invariants(&engine);
    }
}
