//! Generic identifier for fields in an [`InputValueStore`](crate::InputValueStore).
//!
//! Plain `u64` so the store never depends on a particular document model.

/// Opaque, copyable key for one field's raw value.
///
/// ```ignore
/// impl From<dom::Id> for InputId {
///     fn from(id: dom::Id) -> Self {
///         InputId::from_raw(id.0 as u64)
///     }
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for InputId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}
