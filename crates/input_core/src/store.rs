//! Central store for raw field values.

use crate::id::InputId;
use crate::state::InputState;
use std::collections::HashMap;

/// Central store for raw field values and their reset defaults.
///
/// # Example
///
/// ```
/// use input_core::{InputId, InputValueStore};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
///
/// store.ensure_initial(id, "Hello".to_string());
/// store.insert_text(id, " World");
///
/// assert_eq!(store.get(id), Some("Hello World"));
/// store.restore_default(id);
/// assert_eq!(store.get(id), Some("Hello"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns the raw value for this field, if any.
    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// Set/overwrite the raw value. The reset default is kept.
    pub fn set(&mut self, id: InputId, value: String) {
        self.values.entry(id).or_default().value = value;
    }

    /// Ensure an entry exists; if missing, inserts `initial` as both the
    /// current value and the reset default.
    pub fn ensure_initial(&mut self, id: InputId, initial: String) {
        self.values.entry(id).or_insert_with(|| InputState {
            default_value: initial.clone(),
            value: initial,
        });
    }

    /// Append typed text at the end of the value.
    pub fn insert_text(&mut self, id: InputId, s: &str) {
        if s.is_empty() {
            return;
        }
        self.values.entry(id).or_default().value.push_str(s);
    }

    /// Restore the value captured by [`ensure_initial`](Self::ensure_initial).
    pub fn restore_default(&mut self, id: InputId) {
        if let Some(st) = self.values.get_mut(&id) {
            st.value.clone_from(&st.default_value);
        }
    }

    /// Drop the entry for a field that no longer exists.
    pub fn remove(&mut self, id: InputId) {
        self.values.remove(&id);
    }
}
