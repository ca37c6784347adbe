//! Effigy Grid application shell
//!
//! Stands in for real UI glue: it translates pointer positions into the
//! engine's cell-indexed input, mirrors changes into the log and renders the
//! board as text.

mod demo;
mod render;

pub use demo::{bonus_score, run_demo, DemoReport, PointerStep};
pub use render::{render_board, LogView};

use effigy_grid_core::GridError;
use thiserror::Error;

/// Catalog bundled with the binary.
pub const DEFAULT_CATALOG: &str = include_str!("../assets/catalog.json");

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("Catalog needs at least {0} items for the demo")]
    CatalogTooSmall(usize),
}
