//! Namespaced event listener registry.
//!
//! Listeners are bound per node and event kind under a namespace string, so
//! one party can remove everything it bound without disturbing the others.
//! Placeholder machinery binds under [`NAMESPACE`] and additionally records
//! the owning controller, so destroying one controller never unbinds a
//! sibling's listeners on a shared form.

use crate::controller::ControllerKey;
use crate::event::{Event, EventKind};
use dom::Id;

/// Namespace of every listener bound by this crate.
pub const NAMESPACE: &str = "placehold";

pub type HostHandler = Box<dyn FnMut(&Event)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ListenerId(u64);

/// What a listener does when its event fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    /// Application handler; may veto the default action.
    Host,
    /// Focus/blur on a managed field.
    Field(ControllerKey),
    /// Focus on a masked field's decoy.
    Decoy(ControllerKey),
    /// Submit/reset on a form, forwarded to every controller in the form.
    Form,
}

enum Action {
    Host(HostHandler),
    Field(ControllerKey),
    Decoy(ControllerKey),
    Form,
}

impl Action {
    fn route(&self) -> Route {
        match self {
            Action::Host(_) => Route::Host,
            Action::Field(key) => Route::Field(*key),
            Action::Decoy(key) => Route::Decoy(*key),
            Action::Form => Route::Form,
        }
    }

    fn owner(&self) -> Option<ControllerKey> {
        match self {
            Action::Field(key) | Action::Decoy(key) => Some(*key),
            _ => None,
        }
    }
}

struct Listener {
    id: ListenerId,
    node: Id,
    kind: EventKind,
    namespace: String,
    action: Action,
}

#[derive(Default)]
pub(crate) struct ListenerRegistry {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl ListenerRegistry {
    pub(crate) fn bind_host(
        &mut self,
        node: Id,
        kind: EventKind,
        namespace: &str,
        handler: HostHandler,
    ) -> ListenerId {
        self.push(node, kind, namespace, Action::Host(handler))
    }

    pub(crate) fn bind_field(&mut self, node: Id, kind: EventKind, key: ControllerKey) {
        self.push(node, kind, NAMESPACE, Action::Field(key));
    }

    pub(crate) fn bind_decoy(&mut self, decoy: Id, key: ControllerKey) {
        self.push(decoy, EventKind::Focus, NAMESPACE, Action::Decoy(key));
    }

    pub(crate) fn bind_form(&mut self, form: Id, kind: EventKind) {
        self.push(form, kind, NAMESPACE, Action::Form);
    }

    fn push(&mut self, node: Id, kind: EventKind, namespace: &str, action: Action) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            node,
            kind,
            namespace: namespace.to_string(),
            action,
        });
        id
    }

    /// Remove every listener on `node` bound under `namespace`.
    pub(crate) fn unbind(&mut self, node: Id, namespace: &str) -> usize {
        let before = self.listeners.len();
        self.listeners
            .retain(|l| !(l.node == node && l.namespace == namespace));
        before - self.listeners.len()
    }

    /// Remove every listener owned by a controller.
    pub(crate) fn unbind_owner(&mut self, key: ControllerKey) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.action.owner() != Some(key));
        before - self.listeners.len()
    }

    pub(crate) fn unbind_form(&mut self, form: Id) {
        self.listeners
            .retain(|l| !(l.node == form && matches!(l.action, Action::Form)));
    }

    /// Snapshot of the listeners an event on `node` reaches, in bind order.
    ///
    /// Handlers may bind or unbind while the event is dispatched; callers
    /// re-check [`is_bound`](Self::is_bound) before running each entry.
    pub(crate) fn matching(&self, node: Id, kind: EventKind) -> Vec<(ListenerId, Route)> {
        self.listeners
            .iter()
            .filter(|l| l.node == node && l.kind == kind)
            .map(|l| (l.id, l.action.route()))
            .collect()
    }

    pub(crate) fn is_bound(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|l| l.id == id)
    }

    pub(crate) fn call_host(&mut self, id: ListenerId, event: &Event) {
        let Some(listener) = self.listeners.iter_mut().find(|l| l.id == id) else {
            return;
        };
        if let Action::Host(handler) = &mut listener.action {
            handler(event);
        }
    }

    pub(crate) fn count_on(&self, node: Id, namespace: &str) -> usize {
        self.listeners
            .iter()
            .filter(|l| l.node == node && l.namespace == namespace)
            .count()
    }
}
