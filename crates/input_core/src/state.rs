/// Per-field entry managed by [`InputValueStore`](crate::InputValueStore).
#[derive(Clone, Debug, Default)]
pub(crate) struct InputState {
    /// Raw text currently held by the control.
    pub value: String,

    /// Value restored by a form reset.
    pub default_value: String,
}
