use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use inventoria_core::{CustomId, InventoryId, ItemStore, StoreError};

/// In-memory implementation of the [`ItemStore`] trait using DashMap.
///
/// Each inventory owns a set of persisted custom ids. Inserts are an
/// atomic check-and-insert against that set, mirroring the relational
/// store's `(inventory_id, custom_id)` unique index: when two writers race
/// with the same candidate, exactly one insert wins and the other observes
/// [`StoreError::DuplicateCustomId`]. Keys are case-sensitive.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inventories: DashMap<String, DashSet<String>>,
}

impl InMemoryItemStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn exists(&self, inventory: &InventoryId, id: &CustomId) -> Result<bool, StoreError> {
        Ok(self
            .inventories
            .get(inventory.as_str())
            .is_some_and(|items| items.contains(id.as_str())))
    }

    async fn live_count(&self, inventory: &InventoryId) -> Result<u64, StoreError> {
        Ok(self
            .inventories
            .get(inventory.as_str())
            .map_or(0, |items| items.len() as u64))
    }

    async fn insert(&self, inventory: &InventoryId, id: &CustomId) -> Result<(), StoreError> {
        let items = self
            .inventories
            .entry(inventory.as_str().to_owned())
            .or_default();
        // DashSet::insert returns false when the value was already present,
        // which is exactly the unique-constraint violation.
        if items.insert(id.as_str().to_owned()) {
            Ok(())
        } else {
            Err(StoreError::DuplicateCustomId {
                inventory_id: inventory.as_str().to_owned(),
                custom_id: id.as_str().to_owned(),
            })
        }
    }
}
