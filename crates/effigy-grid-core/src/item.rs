//! Placeable items (effigies).
//!
//! Items are created by the catalog; the engine only records where they sit.

use crate::shape::ShapeDescriptor;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier for items.
pub type ItemId = Uuid;

/// Visual tier of an item. Irrelevant to placement, used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Tier {
    /// Single-letter tag for compact text rendering.
    pub fn tag(self) -> char {
        match self {
            Tier::Common => 'c',
            Tier::Uncommon => 'u',
            Tier::Rare => 'r',
            Tier::Epic => 'e',
            Tier::Legendary => 'l',
        }
    }
}

/// An item that can occupy cells on the grid.
///
/// Cloning is cheap: the shape is shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceableItem {
    pub id: ItemId,
    pub name: String,
    pub tier: Tier,
    pub shape: Arc<ShapeDescriptor>,
}

impl PlaceableItem {
    /// Create an item with a fresh id.
    pub fn new(name: impl Into<String>, tier: Tier, shape: ShapeDescriptor) -> Self {
        Self::with_id(Uuid::new_v4(), name, tier, Arc::new(shape))
    }

    /// Create an item with a known id (catalog entries).
    pub fn with_id(
        id: ItemId,
        name: impl Into<String>,
        tier: Tier,
        shape: Arc<ShapeDescriptor>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tier,
            shape,
        }
    }
}
