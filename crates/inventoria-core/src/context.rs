use crate::id::InventoryId;
use jiff::Timestamp;

/// A fresh per-attempt snapshot of everything a generation pass may read.
///
/// The sequence count is re-read from the store before every attempt rather
/// than cached: the count can move between attempts when writers race, and a
/// stale snapshot would keep regenerating the colliding candidate.
#[derive(Clone, Debug)]
pub struct GenerationContext {
    /// Inventory whose namespace the candidate will be checked against.
    pub inventory_id: InventoryId,
    /// Live item count in the inventory at snapshot time.
    pub current_sequence_count: u64,
    /// Timestamp the DateTime elements render from.
    pub now: Timestamp,
}

impl GenerationContext {
    pub fn new(inventory_id: InventoryId, current_sequence_count: u64, now: Timestamp) -> Self {
        Self {
            inventory_id,
            current_sequence_count,
            now,
        }
    }
}
