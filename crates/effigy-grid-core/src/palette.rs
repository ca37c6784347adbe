//! Colours for cell feedback and item tiers.

use crate::item::Tier;
use crate::preview::CellFeedback;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable colour representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbbaa` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<Color> for RgbaColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<RgbaColor> for Color {
    fn from(color: RgbaColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Overlay colours used while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightPalette {
    pub valid: RgbaColor,
    pub invalid: RgbaColor,
    pub occupied: RgbaColor,
}

impl Default for HighlightPalette {
    fn default() -> Self {
        Self {
            // green-500, red-500, slate-500 at partial opacity
            valid: RgbaColor::new(34, 197, 94, 160),
            invalid: RgbaColor::new(239, 68, 68, 160),
            occupied: RgbaColor::new(100, 116, 139, 120),
        }
    }
}

impl HighlightPalette {
    pub fn rgba_for(&self, feedback: CellFeedback) -> RgbaColor {
        match feedback {
            CellFeedback::Valid => self.valid,
            CellFeedback::Invalid => self.invalid,
            CellFeedback::OccupiedByOther => self.occupied,
        }
    }

    pub fn color_for(&self, feedback: CellFeedback) -> Color {
        self.rgba_for(feedback).into()
    }
}

/// Frame colour for an item tier.
pub fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Common => Color::from_rgba8(156, 163, 175, 255),
        Tier::Uncommon => Color::from_rgba8(34, 197, 94, 255),
        Tier::Rare => Color::from_rgba8(59, 130, 246, 255),
        Tier::Epic => Color::from_rgba8(168, 85, 247, 255),
        Tier::Legendary => Color::from_rgba8(245, 158, 11, 255),
    }
}
