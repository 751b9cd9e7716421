//! Format compilation for Inventoria custom identifiers.
//!
//! This crate turns a declarative [`FormatSpec`](inventoria_core::FormatSpec)
//! into an executable [`Generator`]: the validator rejects malformed
//! descriptors, the compiler lowers each element into its value producer,
//! and the formatter applies per-element post-processing (padding, case).
//! A separate deterministic [`preview`] path renders editor previews
//! without touching the real generation path's entropy or sequence state.

pub mod compile;
pub mod element;
pub mod error;
pub mod formatter;
pub mod preview;
pub mod validate;

pub use compile::{compile, Generator};
pub use error::{CompileError, ValidationError};
pub use preview::preview;
pub use validate::validate;
