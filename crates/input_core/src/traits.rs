//! Accessor trait for raw field values.
//!
//! Higher layers talk to raw values only through [`InputStore`], which keeps
//! them independent of the concrete store and lets tests substitute one.

use crate::id::InputId;

/// Raw get/set access to field values.
pub trait InputStore {
    /// Raw value, or `None` if the field has no entry.
    fn get(&self, id: InputId) -> Option<&str>;

    /// Overwrite the raw value.
    fn set(&mut self, id: InputId, value: String);

    /// Seed a value if the field has no entry yet.
    fn ensure_initial(&mut self, id: InputId, initial: String);

    /// Append user-typed text.
    fn insert_text(&mut self, id: InputId, s: &str);

    /// Restore the seeded default (form reset).
    fn restore_default(&mut self, id: InputId);

    /// Forget the field.
    fn remove(&mut self, id: InputId);
}

impl InputStore for crate::store::InputValueStore {
    #[inline]
    fn get(&self, id: InputId) -> Option<&str> {
        crate::store::InputValueStore::get(self, id)
    }

    #[inline]
    fn set(&mut self, id: InputId, value: String) {
        crate::store::InputValueStore::set(self, id, value)
    }

    #[inline]
    fn ensure_initial(&mut self, id: InputId, initial: String) {
        crate::store::InputValueStore::ensure_initial(self, id, initial)
    }

    #[inline]
    fn insert_text(&mut self, id: InputId, s: &str) {
        crate::store::InputValueStore::insert_text(self, id, s)
    }

    #[inline]
    fn restore_default(&mut self, id: InputId) {
        crate::store::InputValueStore::restore_default(self, id)
    }

    #[inline]
    fn remove(&mut self, id: InputId) {
        crate::store::InputValueStore::remove(self, id)
    }
}
