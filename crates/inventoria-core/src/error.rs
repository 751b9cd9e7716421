use thiserror::Error;

/// Errors surfaced by [`ItemStore`](crate::store::ItemStore) implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The `(inventory_id, custom_id)` uniqueness constraint rejected an
    /// insert. Treated as a collision by the orchestrator and retried.
    #[error("custom id '{custom_id}' already exists in inventory '{inventory_id}'")]
    DuplicateCustomId {
        inventory_id: String,
        custom_id: String,
    },
    /// The store could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
