//! Effigy Grid Core
//!
//! Spatial placement engine for shaped inventory items on a fixed grid:
//! occupancy tracking, placement validation, drag sessions and preview
//! highlighting. Framework-agnostic; UI glue feeds it cell-indexed input.

pub mod catalog;
pub mod config;
pub mod drag;
pub mod engine;
pub mod error;
pub mod executor;
pub mod grid;
pub mod item;
pub mod layout;
pub mod palette;
pub mod preview;
pub mod shape;
pub mod validator;
pub mod view;

pub use catalog::{ItemCatalog, ItemDefinition, MemoryCatalog};
pub use config::EngineConfig;
pub use drag::{DragController, DragOrigin, DragOutcome, DragSession, DragState};
pub use engine::PlacementEngine;
pub use error::{GridError, GridResult};
pub use executor::{PlacedItem, PlacementExecutor, PlacementListener, PlacementSnapshot};
pub use grid::{Cell, GridDimensions, OccupancyStore};
pub use item::{ItemId, PlaceableItem, Tier};
pub use layout::GridLayout;
pub use palette::{tier_color, HighlightPalette, RgbaColor};
pub use preview::{CellFeedback, HighlightSet, PreviewController};
pub use shape::{CellOffset, ShapeDescriptor};
pub use validator::can_place;
pub use view::{GridView, NullView};
