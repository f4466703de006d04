//! # placehold
//!
//! Placeholder text for form fields, emulated on platforms that cannot show
//! it natively. Masked fields get a plaintext decoy while empty.
//!
//! This crate re-exports the workspace members:
//! - [`dom`]: the document the fields live in
//! - [`input_core`]: raw field values
//! - [`placeholder`]: controllers, coordinator, and the [`Page`] host
//!
//! ```
//! use placehold::{Document, Options, Page};
//!
//! let mut doc = Document::new();
//! let form = doc.create_element("form", &[]);
//! let pass = doc.create_element("input", &[("type", "password"), ("placeholder", "Password")]);
//! doc.append_child(doc.root(), form).unwrap();
//! doc.append_child(form, pass).unwrap();
//!
//! let mut page = Page::new(doc);
//! page.placehold(&[form], &Options::new());
//!
//! let decoy = page.decoy_of(pass).unwrap();
//! assert_eq!(page.raw_value(decoy), "Password");
//! assert!(page.document().is_disabled(pass));
//! ```

pub use dom;
pub use input_core;
pub use placeholder;

pub use dom::{Document, Id};
pub use placeholder::{
    CancellationCheck, Conf, Event, EventKind, FieldController, FieldGroupCoordinator,
    FieldSelector, Options, Page, Placeholder,
};
