//! Text rendering of the board.

use effigy_grid_core::{
    tier_color, Cell, CellFeedback, GridView, HighlightSet, ItemId, PlaceableItem,
    PlacementEngine, RgbaColor,
};

/// View that reports every visual change through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogView;

impl GridView for LogView {
    fn show_item(&mut self, item: &PlaceableItem, anchor: Cell, cells: &[Cell]) {
        let frame: RgbaColor = tier_color(item.tier).into();
        log::info!(
            "show {} at ({}, {}) covering {} cells, frame {}",
            item.name,
            anchor.x,
            anchor.y,
            cells.len(),
            frame.to_hex()
        );
    }

    fn hide_item(&mut self, id: ItemId) {
        log::info!("hide {}", id);
    }

    fn paint_highlights(&mut self, highlights: &HighlightSet) {
        log::debug!(
            "highlights: {} valid, {} invalid, {} occupied",
            highlights.count(CellFeedback::Valid),
            highlights.count(CellFeedback::Invalid),
            highlights.count(CellFeedback::OccupiedByOther)
        );
    }

    fn clear_highlights(&mut self) {
        log::debug!("highlights cleared");
    }
}

/// Render the board, one character per cell.
///
/// Placed items show the upper-cased first letter of their name, empty cells
/// `.`. While a drag is active the footprint overrides the cell with `+`
/// (valid) or `x` (invalid).
pub fn render_board(engine: &PlacementEngine) -> String {
    let dims = engine.dimensions();
    let snapshot = engine.placed_items();
    let highlights = engine.highlights();
    let mut out = String::new();

    for y in 0..dims.height as i32 {
        for x in 0..dims.width as i32 {
            let cell = Cell::new(x, y);
            let glyph = match highlights.get(cell) {
                Some(CellFeedback::Valid) => '+',
                Some(CellFeedback::Invalid) => 'x',
                _ => engine
                    .store()
                    .occupant(cell)
                    .and_then(|id| snapshot.iter().find(|p| p.item.id == id))
                    .and_then(|p| p.item.name.chars().next())
                    .map(|c| c.to_ascii_uppercase())
                    .unwrap_or('.'),
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// Append a titled board to `report`.
pub(crate) fn push_board(report: &mut String, title: &str, engine: &PlacementEngine) {
    report.push_str(&format!("-- {} --\n", title));
    report.push_str(&render_board(engine));
}
