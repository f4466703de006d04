//! Attaching controllers to fields and forwarding form events to them.

use crate::conf::Conf;
use crate::controller::{ControllerKey, FieldController};
use crate::event::{Event, EventKind};
use crate::page::Env;
use crate::selector::{FieldSelector, is_text_field};
use dom::{Document, Id};
use slotmap::SlotMap;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Owns every live [`FieldController`] of a page.
///
/// Guarantees at most one controller per field, and binds a single
/// submit/reset listener per form no matter how many of its fields are
/// managed.
#[derive(Debug, Default)]
pub struct FieldGroupCoordinator {
    controllers: SlotMap<ControllerKey, FieldController>,
    by_field: HashMap<Id, ControllerKey>,
    forms: HashMap<Id, Vec<ControllerKey>>,
}

impl FieldGroupCoordinator {
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn get(&self, key: ControllerKey) -> Option<&FieldController> {
        self.controllers.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: ControllerKey) -> Option<&mut FieldController> {
        self.controllers.get_mut(key)
    }

    pub fn key_for(&self, field: Id) -> Option<ControllerKey> {
        self.by_field.get(&field).copied()
    }

    pub fn controller_for(&self, field: Id) -> Option<&FieldController> {
        self.key_for(field).and_then(|key| self.controllers.get(key))
    }

    /// Controller whose decoy is `decoy`, if any.
    pub fn key_for_decoy(&self, decoy: Id) -> Option<ControllerKey> {
        self.controllers
            .iter()
            .find(|(_, ctrl)| ctrl.decoy() == Some(decoy))
            .map(|(key, _)| key)
    }

    /// Number of controllers whose form events are routed through `form`.
    pub fn form_members(&self, form: Id) -> usize {
        self.forms.get(&form).map(Vec::len).unwrap_or(0)
    }

    /// Replace the controllers of every field selected by `targets`.
    ///
    /// Existing controllers are destroyed first; new ones are attached only
    /// when `conf.enabled`. Returns the number of controllers attached.
    pub(crate) fn apply(&mut self, env: &mut Env, targets: &[Id], conf: Conf) -> usize {
        let conf = Rc::new(conf);
        let fields: Vec<Id> = collect_fields(&env.doc, targets, &conf.elements)
            .into_iter()
            .filter(|id| {
                let decoy = self.key_for_decoy(*id).is_some();
                if decoy {
                    log::debug!(target: "placeholder.coordinator", "skipping decoy {id}");
                }
                !decoy
            })
            .collect();
        let mut attached = 0;
        for field in fields {
            if self.detach(env, field) {
                log::debug!(target: "placeholder.coordinator", "replaced controller on {field}");
            }
            // Detaching an earlier field may have removed nodes from the document.
            if !env.doc.contains(field) {
                continue;
            }
            if conf.enabled {
                self.attach(env, field, Rc::clone(&conf));
                attached += 1;
            }
        }
        attached
    }

    fn attach(&mut self, env: &mut Env, field: Id, conf: Rc<Conf>) -> ControllerKey {
        let form = env.doc.closest_ancestor(field, "form");
        let key = self
            .controllers
            .insert_with_key(|key| FieldController::attach(env, key, field, form, conf));
        self.by_field.insert(field, key);

        if let Some(form) = form {
            let members = self.forms.entry(form).or_default();
            if members.is_empty() {
                env.listeners.bind_form(form, EventKind::Submit);
                env.listeners.bind_form(form, EventKind::Reset);
            }
            members.push(key);
        }
        key
    }

    /// Destroy the controller on `field`. Returns `false` if there was none.
    pub(crate) fn detach(&mut self, env: &mut Env, field: Id) -> bool {
        match self.key_for(field) {
            Some(key) => self.destroy(env, key),
            None => false,
        }
    }

    pub(crate) fn destroy(&mut self, env: &mut Env, key: ControllerKey) -> bool {
        let Some(ctrl) = self.controllers.remove(key) else {
            return false;
        };
        self.by_field.remove(&ctrl.field());
        if let Some(form) = ctrl.form()
            && let Some(members) = self.forms.get_mut(&form)
        {
            members.retain(|k| *k != key);
            if members.is_empty() {
                self.forms.remove(&form);
                env.listeners.unbind_form(form);
            }
        }
        ctrl.destroy(env, key);
        true
    }

    /// Forward a form's submit or reset to each of its controllers.
    pub(crate) fn on_form_event(&mut self, env: &mut Env, form: Id, event: &Event) {
        let members = self.forms.get(&form).cloned().unwrap_or_default();
        for key in members {
            let Some(ctrl) = self.controllers.get_mut(key) else {
                continue;
            };
            match event.kind() {
                EventKind::Submit => ctrl.on_form_submit(env, key, event),
                EventKind::Reset => ctrl.on_form_reset(env, key, event),
                EventKind::Focus | EventKind::Blur => {}
            }
        }
    }
}

/// Expand targets into distinct fields, in document order per target.
///
/// Forms contribute their descendants matching `elements`; any other target
/// is taken as a field itself.
pub fn collect_fields(doc: &Document, targets: &[Id], elements: &FieldSelector) -> Vec<Id> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for &target in targets {
        if doc.is_element(target, "form") {
            for id in doc.descendants(target) {
                if elements.matches(doc, id) && seen.insert(id) {
                    out.push(id);
                }
            }
        } else if is_text_field(doc, target) {
            if seen.insert(target) {
                out.push(target);
            }
        } else {
            log::warn!(target: "placeholder.coordinator", "skipping {target}: not a text field");
        }
    }
    out
}
