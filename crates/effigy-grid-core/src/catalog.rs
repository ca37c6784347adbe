//! Item catalog: id → shape and presentation metadata.
//!
//! Lookups are synchronous; the engine never waits on a catalog.

use crate::error::{GridError, GridResult};
use crate::item::{ItemId, PlaceableItem, Tier};
use crate::shape::ShapeDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// Source of item definitions.
pub trait ItemCatalog {
    /// Look up an item by ID.
    fn get(&self, id: ItemId) -> Option<PlaceableItem>;
}

/// Serialized form of one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    #[serde(default = "Uuid::new_v4")]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub tier: Tier,
    /// Shape as ascii rows (`#` occupied, `.` empty).
    pub rows: Vec<String>,
}

impl ItemDefinition {
    pub fn build(&self) -> GridResult<PlaceableItem> {
        let shape = ShapeDescriptor::from_rows(&self.rows).map_err(|e| match e {
            GridError::InvalidShape(msg) => {
                GridError::InvalidShape(format!("{}: {}", self.name, msg))
            }
            other => other,
        })?;
        Ok(PlaceableItem::with_id(
            self.id,
            self.name.clone(),
            self.tier,
            Arc::new(shape),
        ))
    }
}

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    items: HashMap<ItemId, PlaceableItem>,
    /// Insertion order.
    order: Vec<ItemId>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Fails if the ID is already present.
    pub fn insert(&mut self, item: PlaceableItem) -> GridResult<()> {
        if self.items.contains_key(&item.id) {
            return Err(GridError::Catalog(format!("duplicate item id {}", item.id)));
        }
        self.order.push(item.id);
        self.items.insert(item.id, item);
        Ok(())
    }

    pub fn from_definitions(definitions: &[ItemDefinition]) -> GridResult<Self> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.insert(definition.build()?)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON array of item definitions.
    pub fn from_json(json: &str) -> GridResult<Self> {
        let definitions: Vec<ItemDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(&definitions)
    }

    /// Load a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> GridResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// First item with the given name.
    pub fn by_name(&self, name: &str) -> Option<&PlaceableItem> {
        self.iter().find(|item| item.name == name)
    }

    /// Items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PlaceableItem> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemCatalog for MemoryCatalog {
    fn get(&self, id: ItemId) -> Option<PlaceableItem> {
        self.items.get(&id).cloned()
    }
}
