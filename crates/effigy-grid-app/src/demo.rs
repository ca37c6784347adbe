//! Scripted pointer session exercising both drag sources.

use crate::render::push_board;
use crate::AppError;
use effigy_grid_core::{
    Cell, DragOutcome, GridLayout, MemoryCatalog, PlaceableItem, PlacementEngine,
    PlacementSnapshot, Tier,
};
use kurbo::Point;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Raw pointer input in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerStep {
    Down(Point),
    Move(Point),
    Up(Point),
    Cancel,
}

/// Aggregate bonus from everything on the grid: tier weight times cell count.
pub fn bonus_score(snapshot: &PlacementSnapshot) -> u32 {
    snapshot
        .iter()
        .map(|placed| {
            let weight = match placed.item.tier {
                Tier::Common => 1,
                Tier::Uncommon => 2,
                Tier::Rare => 3,
                Tier::Epic => 5,
                Tier::Legendary => 8,
            };
            weight * placed.item.shape.cell_count() as u32
        })
        .sum()
}

/// Result of a demo run.
#[derive(Debug, Clone, Default)]
pub struct DemoReport {
    pub boards: String,
    pub outcomes: Vec<DragOutcome>,
    pub score: u32,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.boards)?;
        for outcome in &self.outcomes {
            writeln!(f, "{:?}", outcome)?;
        }
        writeln!(f, "bonus score: {}", self.score)
    }
}

/// Feed one pointer step to the engine, translating positions to cells.
fn apply_step(
    engine: &mut PlacementEngine,
    layout: &GridLayout,
    step: PointerStep,
) -> Option<DragOutcome> {
    let dims = engine.dimensions();
    match step {
        PointerStep::Down(point) => {
            if let Some(cell) = layout.cell_at(point, dims) {
                engine.on_pointer_down_at_cell(cell.x, cell.y);
            }
            None
        }
        PointerStep::Move(point) => {
            match layout.cell_at(point, dims) {
                Some(cell) => engine.on_pointer_enter_cell(cell.x, cell.y),
                None => engine.on_pointer_exit_grid(),
            }
            None
        }
        PointerStep::Up(point) => match layout.cell_at(point, dims) {
            Some(cell) => engine.on_pointer_up_at_cell(cell.x, cell.y),
            None => engine.on_pointer_up_outside(),
        },
        PointerStep::Cancel => engine.cancel_drag(),
    }
}

fn run_steps(
    engine: &mut PlacementEngine,
    layout: &GridLayout,
    steps: &[PointerStep],
    outcomes: &mut Vec<DragOutcome>,
) {
    for &step in steps {
        outcomes.extend(apply_step(engine, layout, step));
    }
}

/// Run a short session: place an item, insert one from storage, try an
/// invalid move, drop an item off the grid, then make a valid move.
pub fn run_demo(
    engine: &mut PlacementEngine,
    catalog: &MemoryCatalog,
    layout: &GridLayout,
) -> Result<DemoReport, AppError> {
    let items: Vec<PlaceableItem> = catalog.iter().take(3).cloned().collect();
    let [first, second, third] = items.as_slice() else {
        return Err(AppError::CatalogTooSmall(3));
    };

    let score = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&score);
    engine.subscribe(Box::new(move |snapshot: &PlacementSnapshot| {
        let total = bonus_score(snapshot);
        log::info!("{} items placed, bonus score {}", snapshot.len(), total);
        *sink.borrow_mut() = total;
    }));

    let dims = engine.dimensions();
    let at = |x: i32, y: i32| layout.cell_center(Cell::new(x, y));
    let corner = (dims.width as i32 - 1, dims.height as i32 - 1);
    let mut report = DemoReport::default();

    if !engine.try_place_item(first, 0, 0) {
        log::warn!("{} does not fit at the origin", first.name);
    }
    push_board(&mut report.boards, "initial", engine);

    engine.begin_drag_from_storage(second.clone());
    run_steps(engine, layout, &[PointerStep::Move(at(2, 1))], &mut report.outcomes);
    push_board(&mut report.boards, "inserting from storage", engine);
    run_steps(engine, layout, &[PointerStep::Up(at(2, 1))], &mut report.outcomes);

    run_steps(
        engine,
        layout,
        &[PointerStep::Down(at(0, 0)), PointerStep::Move(at(2, 1))],
        &mut report.outcomes,
    );
    push_board(&mut report.boards, "blocked move", engine);
    run_steps(engine, layout, &[PointerStep::Up(at(2, 1))], &mut report.outcomes);

    engine.begin_drag_from_storage(third.clone());
    let away = Point::new(-100.0, -100.0);
    run_steps(
        engine,
        layout,
        &[PointerStep::Move(away), PointerStep::Up(away)],
        &mut report.outcomes,
    );

    run_steps(
        engine,
        layout,
        &[
            PointerStep::Down(at(0, 0)),
            PointerStep::Move(at(corner.0, corner.1)),
            PointerStep::Up(at(corner.0, corner.1)),
        ],
        &mut report.outcomes,
    );
    push_board(&mut report.boards, "final", engine);

    report.score = *score.borrow();
    Ok(report)
}
