//! Engine configuration.

use crate::error::{GridError, GridResult};
use crate::grid::GridDimensions;
use crate::palette::HighlightPalette;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Keep the pointer's offset from the anchor when dragging a placed item.
    pub preserve_grab_offset: bool,
    /// Highlight colours shown while dragging.
    pub palette: HighlightPalette,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 6,
            height: 4,
            preserve_grab_offset: false,
            palette: HighlightPalette::default(),
        }
    }
}

impl EngineConfig {
    pub fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.width, self.height)
    }

    pub fn validate(&self) -> GridResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(GridError::InvalidConfig("grid dimensions too large".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> GridResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> GridResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> GridResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
