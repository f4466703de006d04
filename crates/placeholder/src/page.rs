//! Host page: document, raw values, listeners, timers, and controllers.
//!
//! `Page` plays the part of the browser. It moves focus, dispatches events to
//! listeners in bind order, performs default actions unless vetoed, and runs
//! cancellation checks once an event's outcome is known.

use crate::conf::{Conf, Options};
use crate::controller::{ControllerKey, FieldController};
use crate::coordinator::FieldGroupCoordinator;
use crate::deferred::{FollowUp, PendingCheck};
use crate::event::{Event, EventId, EventKind};
use crate::listeners::{ListenerRegistry, Route};
use crate::scheduler::Scheduler;
use crate::selector::is_text_field;
use crate::value::{install_value_hook, value_hook_installed};
use dom::{Document, Id};
use input_core::{InputId, InputStore, InputValueStore};
use std::time::Duration;

#[inline]
pub(crate) fn input_id(id: Id) -> InputId {
    InputId::from(id.0)
}

/// State shared by every controller transition.
pub(crate) struct Env {
    pub(crate) doc: Document,
    pub(crate) store: Box<dyn InputStore>,
    pub(crate) listeners: ListenerRegistry,
    pub(crate) scheduler: Scheduler<PendingCheck>,
    pub(crate) after_dispatch: Vec<PendingCheck>,
}

impl Env {
    pub(crate) fn raw(&self, id: Id) -> &str {
        self.store.get(input_id(id)).unwrap_or("")
    }

    pub(crate) fn set_raw(&mut self, id: Id, value: String) {
        self.store.set(input_id(id), value);
    }

    /// Register a follow-up that depends on whether `event` gets vetoed.
    pub(crate) fn check_prevented(
        &mut self,
        conf: &Conf,
        event: &Event,
        controller: ControllerKey,
        proceed: FollowUp,
        cancelled: FollowUp,
    ) {
        let check = PendingCheck {
            event: event.clone(),
            controller,
            proceed,
            cancelled,
        };
        match conf.cancellation.delay() {
            None => self.after_dispatch.push(check),
            Some(delay) => self.scheduler.schedule(delay, check),
        }
    }
}

pub struct Page {
    env: Env,
    groups: FieldGroupCoordinator,
    defaults: Conf,
    next_event: u64,
}

impl Page {
    /// A page on a platform without native placeholder support.
    pub fn new(doc: Document) -> Self {
        Self::with_native_support(doc, false)
    }

    pub fn with_native_support(doc: Document, native_placeholder_support: bool) -> Self {
        Self::with_store(
            doc,
            Box::new(InputValueStore::new()),
            native_placeholder_support,
        )
    }

    /// Use a caller-provided raw value accessor.
    pub fn with_store(
        doc: Document,
        store: Box<dyn InputStore>,
        native_placeholder_support: bool,
    ) -> Self {
        let mut page = Self {
            env: Env {
                doc,
                store,
                listeners: ListenerRegistry::default(),
                scheduler: Scheduler::new(),
                after_dispatch: Vec::new(),
            },
            groups: FieldGroupCoordinator::default(),
            defaults: Conf::defaults(native_placeholder_support),
            next_event: 0,
        };
        page.seed_values();
        page
    }

    pub fn document(&self) -> &Document {
        &self.env.doc
    }

    /// Mutable document access. Call [`seed_values`](Self::seed_values)
    /// after adding fields.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.env.doc
    }

    /// Seed raw values from `value` attributes (textarea: text content),
    /// keeping values that already exist.
    pub fn seed_values(&mut self) {
        let doc = &self.env.doc;
        for id in doc.descendants(doc.root()) {
            if !is_text_field(doc, id) {
                continue;
            }
            let initial = if doc.is_element(id, "textarea") {
                doc.text_content(id)
            } else {
                doc.attr(id, "value").unwrap_or("").to_string()
            };
            self.env.store.ensure_initial(input_id(id), initial);
        }
    }

    pub fn defaults(&self) -> &Conf {
        &self.defaults
    }

    /// Page-wide defaults every later [`placehold`](Self::placehold) merges over.
    pub fn defaults_mut(&mut self) -> &mut Conf {
        &mut self.defaults
    }

    pub fn coordinator(&self) -> &FieldGroupCoordinator {
        &self.groups
    }

    /// Number of live controllers.
    pub fn controllers(&self) -> usize {
        self.groups.len()
    }

    pub fn now(&self) -> Duration {
        self.env.scheduler.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.env.scheduler.pending()
    }

    // =========================================================================
    // Placeholder attachment
    // =========================================================================

    /// Apply placeholder behavior to `targets` (forms or fields).
    ///
    /// Any existing controller on a selected field is destroyed first. With
    /// `enabled = false` the fields are left unmanaged. Returns `targets`.
    pub fn placehold<'t>(&mut self, targets: &'t [Id], options: &Options) -> &'t [Id] {
        let conf = self.defaults.merge(options);
        if conf.enabled {
            install_value_hook();
        }
        let attached = self.groups.apply(&mut self.env, targets, conf);
        log::debug!(
            target: "placeholder.page",
            "placehold on {} targets: {attached} controllers attached",
            targets.len()
        );
        targets
    }

    /// Handle to the controller managing `field`.
    pub fn placeholder(&mut self, field: Id) -> Option<Placeholder<'_>> {
        let key = self.groups.key_for(field)?;
        Some(Placeholder { page: self, key })
    }

    pub fn is_showing_placeholder(&self, field: Id) -> bool {
        self.groups
            .controller_for(field)
            .is_some_and(FieldController::is_showing_placeholder)
    }

    pub fn decoy_of(&self, field: Id) -> Option<Id> {
        self.groups.controller_for(field).and_then(FieldController::decoy)
    }

    // =========================================================================
    // Value accessor
    // =========================================================================

    /// What the control holds, unaware of placeholders.
    pub fn raw_value(&self, id: Id) -> &str {
        self.env.raw(id)
    }

    /// Field value as the application should see it: empty while a
    /// placeholder or decoy is shown.
    pub fn val(&self, id: Id) -> String {
        if value_hook_installed()
            && (self.is_showing_placeholder(id) || self.groups.key_for_decoy(id).is_some())
        {
            return String::new();
        }
        self.env.raw(id).to_string()
    }

    /// Write a field value and re-synchronize its placeholder. Writing to a
    /// decoy writes the field it stands in for.
    pub fn set_val(&mut self, id: Id, value: &str) {
        let hooked = value_hook_installed();
        let field = match self.groups.key_for_decoy(id) {
            Some(key) if hooked => self.groups.get(key).map_or(id, FieldController::field),
            _ => id,
        };
        self.env.set_raw(field, value.to_string());
        if !hooked {
            return;
        }
        if let Some(key) = self.groups.key_for(field)
            && let Some(ctrl) = self.groups.get_mut(key)
        {
            ctrl.after_external_write(&mut self.env, key);
        }
    }

    // =========================================================================
    // User interaction
    // =========================================================================

    /// Move focus to `id`, blurring the previous element first. Returns
    /// `false` if `id` cannot take focus.
    pub fn focus(&mut self, id: Id) -> bool {
        if !self.env.doc.is_focusable(id) {
            return false;
        }
        if let Some(prev) = self.env.doc.active_element() {
            if prev == id {
                return true;
            }
            self.env.doc.set_active_element(None);
            self.fire(prev, EventKind::Blur, |_| {});
            // A blur handler may have hidden or removed the target.
            if !self.env.doc.is_focusable(id) {
                return false;
            }
        }
        self.env.doc.set_active_element(Some(id));
        self.fire(id, EventKind::Focus, |_| {});
        true
    }

    /// Blur `id` if it holds focus.
    pub fn blur(&mut self, id: Id) {
        if self.env.doc.active_element() != Some(id) {
            return;
        }
        self.env.doc.set_active_element(None);
        self.fire(id, EventKind::Blur, |_| {});
    }

    /// Type into the focused field. Returns `false` if `id` is not focused.
    pub fn type_text(&mut self, id: Id, text: &str) -> bool {
        if self.env.doc.active_element() != Some(id) {
            return false;
        }
        self.env.store.insert_text(input_id(id), text);
        true
    }

    /// Submit `form`. Returns the serialized name/value pairs, or `None` if
    /// a listener vetoed the submit.
    pub fn submit(&mut self, form: Id) -> Option<Vec<(String, String)>> {
        let mut data = None;
        self.fire(form, EventKind::Submit, |page| {
            data = Some(page.form_data(form));
        });
        data
    }

    /// Reset `form` to its default values. Returns `false` if vetoed.
    pub fn reset_form(&mut self, form: Id) -> bool {
        let event = self.fire(form, EventKind::Reset, |page| {
            for id in page.form_fields(form) {
                page.env.store.restore_default(input_id(id));
            }
        });
        !event.is_default_prevented()
    }

    /// Bind an application listener. Handlers may veto the default action.
    pub fn on(
        &mut self,
        node: Id,
        kind: EventKind,
        namespace: &str,
        handler: impl FnMut(&Event) + 'static,
    ) {
        self.env
            .listeners
            .bind_host(node, kind, namespace, Box::new(handler));
    }

    /// Unbind every listener on `node` in `namespace`.
    pub fn off(&mut self, node: Id, namespace: &str) -> usize {
        self.env.listeners.unbind(node, namespace)
    }

    pub fn listeners_on(&self, node: Id, namespace: &str) -> usize {
        self.env.listeners.count_on(node, namespace)
    }

    /// Advance the virtual clock, running deferred checks as they fall due.
    pub fn advance(&mut self, by: Duration) {
        let deadline = self.env.scheduler.now().saturating_add(by);
        while let Some(check) = self.env.scheduler.pop_due(deadline) {
            self.run_check(check);
        }
        self.env.scheduler.advance_to(deadline);
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    fn fire(
        &mut self,
        target: Id,
        kind: EventKind,
        default_action: impl FnOnce(&mut Self),
    ) -> Event {
        let event = Event::new(EventId(self.next_event), kind, target);
        self.next_event += 1;
        log::trace!(target: "placeholder.page", "dispatch {kind} on {target}");

        for (listener, route) in self.env.listeners.matching(target, kind) {
            if !self.env.listeners.is_bound(listener) {
                continue;
            }
            match route {
                Route::Host => self.env.listeners.call_host(listener, &event),
                Route::Field(key) => {
                    let Some(ctrl) = self.groups.get_mut(key) else {
                        continue;
                    };
                    match kind {
                        EventKind::Focus => ctrl.on_focus(&mut self.env),
                        EventKind::Blur => ctrl.on_blur(&mut self.env, key, Some(&event)),
                        EventKind::Submit | EventKind::Reset => {}
                    }
                }
                Route::Decoy(key) => {
                    if let Some(ctrl) = self.groups.get_mut(key) {
                        ctrl.on_decoy_focus(&mut self.env, key, &event);
                    }
                }
                Route::Form => self.groups.on_form_event(&mut self.env, target, &event),
            }
        }

        if !event.is_default_prevented() {
            default_action(self);
        }

        let (mine, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.env.after_dispatch)
            .into_iter()
            .partition(|check| check.event.id() == event.id());
        self.env.after_dispatch = rest;
        for check in mine {
            self.run_check(check);
        }
        event
    }

    fn run_check(&mut self, check: PendingCheck) {
        let key = check.controller;
        let Some(ctrl) = self.groups.get(key) else {
            log::debug!(
                target: "placeholder.deferred",
                "dropping check for {} event {:?}: controller gone",
                check.event.kind(),
                check.event.id()
            );
            return;
        };
        let linked_decoy = ctrl.decoy();
        let field = ctrl.field();

        match check.outcome() {
            FollowUp::Nothing => {}
            FollowUp::Reset => {
                if let Some(ctrl) = self.groups.get_mut(key) {
                    ctrl.reset(&mut self.env, key);
                }
            }
            FollowUp::BlurDecoy(decoy) => {
                if linked_decoy == Some(decoy) {
                    self.blur(decoy);
                }
            }
            FollowUp::FocusField(target) => {
                if target == field && linked_decoy.is_none() {
                    self.focus(target);
                }
            }
        }
    }

    fn form_fields(&self, form: Id) -> Vec<Id> {
        let doc = &self.env.doc;
        doc.descendants(form)
            .into_iter()
            .filter(|id| is_text_field(doc, *id))
            .collect()
    }

    fn form_data(&self, form: Id) -> Vec<(String, String)> {
        let doc = &self.env.doc;
        self.form_fields(form)
            .into_iter()
            .filter(|id| !doc.is_disabled(*id))
            .filter_map(|id| {
                let name = doc.attr(id, "name")?.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), self.env.raw(id).to_string()))
            })
            .collect()
    }
}

/// Handle to one field's controller.
///
/// Obtained from [`Page::placeholder`]. [`destroy`](Self::destroy) consumes
/// the handle; the controller cannot be reached afterwards, and
/// `Page::placeholder` returns `None` for the field until placeholders are
/// applied again.
pub struct Placeholder<'p> {
    page: &'p mut Page,
    key: ControllerKey,
}

impl Placeholder<'_> {
    fn controller(&self) -> Option<&FieldController> {
        self.page.groups.get(self.key)
    }

    pub fn field(&self) -> Option<Id> {
        self.controller().map(FieldController::field)
    }

    /// The resolved configuration the controller was built with.
    pub fn conf(&self) -> Option<&Conf> {
        self.controller().map(FieldController::conf)
    }

    pub fn is_showing_placeholder(&self) -> bool {
        self.controller()
            .is_some_and(FieldController::is_showing_placeholder)
    }

    pub fn decoy(&self) -> Option<Id> {
        self.controller().and_then(FieldController::decoy)
    }

    pub fn clear(&mut self) -> &mut Self {
        if let Some(ctrl) = self.page.groups.get_mut(self.key) {
            ctrl.clear(&mut self.page.env);
        }
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        let key = self.key;
        if let Some(ctrl) = self.page.groups.get_mut(key) {
            ctrl.reset(&mut self.page.env, key);
        }
        self
    }

    /// Unbind all listeners and leave the field without placeholder text,
    /// styling, or decoy.
    pub fn destroy(self) {
        self.page.groups.destroy(&mut self.page.env, self.key);
    }
}
