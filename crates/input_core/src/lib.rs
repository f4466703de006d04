//! # input_core
//!
//! UI-agnostic raw value layer for form fields.
//!
//! This crate provides:
//! - [`InputId`]: an opaque identifier for a field
//! - [`InputValueStore`]: the central store for raw field values
//! - [`InputStore`]: the accessor trait through which higher layers read and
//!   write raw values, so the store can be swapped out in tests or decorated
//!
//! "Raw" means exactly what the control holds. Anything layered on top, such
//! as placeholder text that must read back as empty, is the caller's concern.

mod id;
mod state;
mod store;
mod traits;

pub use id::InputId;
pub use store::InputValueStore;
pub use traits::InputStore;
