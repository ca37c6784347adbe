//! Terminal entry point.
//!
//! Usage: `effigy-grid [config.json] [catalog.json]`

use effigy_grid_app::{run_demo, AppError, LogView, DEFAULT_CATALOG};
use effigy_grid_core::{EngineConfig, GridLayout, MemoryCatalog, PlacementEngine};

fn main() -> Result<(), AppError> {
    env_logger::init();
    log::info!("Starting effigy grid demo");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let catalog = match args.next() {
        Some(path) => MemoryCatalog::load(path)?,
        None => MemoryCatalog::from_json(DEFAULT_CATALOG)?,
    };

    let mut engine = PlacementEngine::with_view(config, Box::new(LogView))?;
    let report = run_demo(&mut engine, &catalog, &GridLayout::default())?;
    print!("{}", report);
    Ok(())
}
