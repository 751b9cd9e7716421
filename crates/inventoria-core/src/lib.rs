//! Core types and traits for the Inventoria custom identifier subsystem.
//!
//! This crate provides the shared data model (format specifications and
//! their elements), the identifier newtypes, and the traits through which
//! the generation engine talks to the item namespace and the clock.

pub mod clock;
pub mod context;
pub mod error;
pub mod format;
pub mod id;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use context::GenerationContext;
pub use error::StoreError;
pub use format::{
    CaseTransform, DateTimePattern, ElementDescriptor, ElementType, FormatSpec, OptionSet,
};
pub use id::{CustomId, InventoryId};
pub use store::ItemStore;
