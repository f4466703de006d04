use dom::Id;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Focus,
    Blur,
    Submit,
    Reset,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Submit => "submit",
            Self::Reset => "reset",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u64);

/// A dispatched event.
///
/// Clones share the prevented flag, so a handler that keeps a clone can still
/// veto the default action after dispatch has returned. Deferred checks read
/// the flag when they fire and observe such late vetoes.
#[derive(Clone, Debug)]
pub struct Event {
    id: EventId,
    kind: EventKind,
    target: Id,
    prevented: Rc<Cell<bool>>,
}

impl Event {
    pub(crate) fn new(id: EventId, kind: EventKind, target: Id) -> Self {
        Self {
            id,
            kind,
            target,
            prevented: Rc::new(Cell::new(false)),
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn prevent_default(&self) {
        self.prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.prevented.get()
    }
}
