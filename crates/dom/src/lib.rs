//! # dom
//!
//! Minimal mutable document model for form fields.
//!
//! The tree is an arena keyed by [`Id`]. Elements carry attributes, a class
//! list (the `class` attribute), inline style, and the `disabled` flag; the
//! document tracks the single active (focused) element. Field values are not
//! stored here; they live in `input_core`, keyed by the same ids.

mod document;
mod types;

pub use document::Document;
pub use types::{DomError, Id, NodeId, NodeKind};
