//! Storage backends for the Inventoria item namespace.
//!
//! Currently provides the in-memory reference implementation used by tests
//! and local development. Production deployments implement
//! [`ItemStore`](inventoria_core::ItemStore) over the hosted relational
//! store, whose `(inventory_id, custom_id)` unique index is the final
//! authority these semantics mirror.

pub mod memory;

pub use memory::InMemoryItemStore;
