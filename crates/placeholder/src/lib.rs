//! # placeholder
//!
//! Placeholder text emulation for platforms whose form fields cannot show it
//! natively.
//!
//! - [`FieldController`]: per-field state machine. Shows the placeholder
//!   text in an empty, unfocused field and removes it on focus. Masked
//!   (password) fields get a plaintext decoy element instead.
//! - [`FieldGroupCoordinator`]: attaches controllers to fields, keeps at most
//!   one per field, and forwards form submit/reset to them.
//! - [`Page`]: the host. It owns the document, raw values, listeners and the
//!   virtual clock, and dispatches user interaction to the controllers.
//!
//! ```
//! use dom::Document;
//! use placeholder::{Options, Page};
//!
//! let mut doc = Document::new();
//! let email = doc.create_element("input", &[("placeholder", "Your e-mail")]);
//! doc.append_child(doc.root(), email).unwrap();
//!
//! let mut page = Page::new(doc);
//! page.placehold(&[email], &Options::new());
//!
//! assert_eq!(page.raw_value(email), "Your e-mail");
//! assert_eq!(page.val(email), "");
//!
//! page.focus(email);
//! assert_eq!(page.raw_value(email), "");
//! ```

mod conf;
mod controller;
mod coordinator;
mod deferred;
mod event;
mod listeners;
mod page;
mod scheduler;
mod selector;
mod value;

pub use conf::{
    Conf, ConfigError, DEFAULT_ATTR, DEFAULT_COLOR, DEFAULT_CSS_CLASS, Options,
};
pub use controller::{ControllerKey, FieldController};
pub use coordinator::{FieldGroupCoordinator, collect_fields};
pub use deferred::{CancellationCheck, DEFAULT_DEFERRED_DELAY};
pub use event::{Event, EventId, EventKind};
pub use listeners::{HostHandler, NAMESPACE};
pub use page::{Page, Placeholder};
pub use selector::{
    DEFAULT_ELEMENTS, FieldSelector, SelectorError, input_type, is_masked, is_text_field,
};
pub use value::{install_value_hook, value_hook_installed};

#[cfg(test)]
mod tests;
