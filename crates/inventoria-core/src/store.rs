use crate::error::StoreError;
use crate::id::{CustomId, InventoryId};
use async_trait::async_trait;

/// The item namespace the generation engine checks candidates against.
///
/// The backing store is assumed ACID-transactional and is the final
/// authority on uniqueness: `exists` is only an optimistic pre-check, and
/// `insert` must enforce the `(inventory_id, custom_id)` constraint
/// atomically. Both lookups and inserts are case-sensitive.
#[async_trait]
pub trait ItemStore: Send + Sync + 'static {
    /// Uniqueness oracle: whether a candidate id is already taken within
    /// the inventory's namespace. A point lookup.
    async fn exists(&self, inventory: &InventoryId, id: &CustomId) -> Result<bool, StoreError>;

    /// Number of live items in the inventory; feeds Sequence elements.
    async fn live_count(&self, inventory: &InventoryId) -> Result<u64, StoreError>;

    /// Persists an item under the given custom id.
    ///
    /// Returns [`StoreError::DuplicateCustomId`] when the id lost a race
    /// to a concurrent writer.
    async fn insert(&self, inventory: &InventoryId, id: &CustomId) -> Result<(), StoreError>;
}
