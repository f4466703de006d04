//! Per-field placeholder state machine.
//!
//! A [`FieldController`] owns one field's placeholder state: whether the field
//! currently shows placeholder text, the text color it had before, and for
//! masked fields the decoy element standing in for it while empty.
//!
//! All transitions take the page's [`Env`] explicitly. Controllers live in a
//! slotmap owned by the coordinator; listeners and pending checks refer to
//! them by [`ControllerKey`] only.

use crate::conf::Conf;
use crate::deferred::FollowUp;
use crate::event::{Event, EventKind};
use crate::listeners::NAMESPACE;
use crate::page::{Env, input_id};
use crate::selector::is_masked;
use dom::{DomError, Document, Id};
use slotmap::new_key_type;
use std::rc::Rc;

new_key_type! {
    /// Generational handle to a controller. Stale after the controller is
    /// destroyed, even if its slot is reused.
    pub struct ControllerKey;
}

#[derive(Debug)]
pub struct FieldController {
    field: Id,
    form: Option<Id>,
    conf: Rc<Conf>,
    original_color: Option<String>,
    showing: bool,
    decoy: Option<Id>,
}

impl FieldController {
    /// Bind to `field`: remember its color, listen for focus and blur, and
    /// settle the initial placeholder state.
    pub(crate) fn attach(
        env: &mut Env,
        key: ControllerKey,
        field: Id,
        form: Option<Id>,
        conf: Rc<Conf>,
    ) -> Self {
        let original_color = env.doc.style(field, "color").map(str::to_string);
        env.listeners.bind_field(field, EventKind::Focus, key);
        env.listeners.bind_field(field, EventKind::Blur, key);
        log::debug!(target: "placeholder.controller", "attach {field} (form {form:?})");

        let mut ctrl = Self {
            field,
            form,
            conf,
            original_color,
            showing: false,
            decoy: None,
        };
        ctrl.reset(env, key);
        ctrl
    }

    pub fn field(&self) -> Id {
        self.field
    }

    pub fn form(&self) -> Option<Id> {
        self.form
    }

    pub fn conf(&self) -> &Conf {
        &self.conf
    }

    /// `true` while the field is logically empty and either displays the
    /// placeholder text itself or hides behind a decoy.
    pub fn is_showing_placeholder(&self) -> bool {
        self.showing
    }

    pub fn decoy(&self) -> Option<Id> {
        self.decoy
    }

    /// Attribute text if present and non-empty, else the configured message.
    /// Line breaks are dropped; single-line controls cannot show them.
    pub fn placeholder_text(&self, doc: &Document) -> String {
        let from_attr = if self.conf.attr.is_empty() {
            None
        } else {
            doc.attr(self.field, &self.conf.attr).filter(|s| !s.is_empty())
        };
        from_attr
            .unwrap_or(&self.conf.message)
            .chars()
            .filter(|c| *c != '\r' && *c != '\n')
            .collect()
    }

    // =========================================================================
    // Public operations
    // =========================================================================

    /// Put the field into its real-content state, as a focus would, so that
    /// placeholder text is never taken for data. A decoy is dismissed
    /// without moving focus.
    pub(crate) fn clear(&mut self, env: &mut Env) {
        if self.decoy.is_some() {
            self.remove_decoy(env);
        }
        self.on_focus(env);
    }

    /// Show the placeholder if the field is empty, as a blur would. A field
    /// that holds focus keeps its real empty state instead.
    pub(crate) fn reset(&mut self, env: &mut Env, key: ControllerKey) {
        if env.doc.active_element() == Some(self.field) {
            self.on_focus(env);
        } else {
            self.on_blur(env, key, None);
        }
    }

    /// Unbind and leave the field clean. Consumes the controller.
    pub(crate) fn destroy(mut self, env: &mut Env, key: ControllerKey) {
        let removed = env.listeners.unbind_owner(key);
        self.clear(env);
        log::debug!(
            target: "placeholder.controller",
            "destroy {} ({removed} listeners unbound)",
            self.field
        );
    }

    /// Re-synchronize after the raw value was written from outside.
    pub(crate) fn after_external_write(&mut self, env: &mut Env, key: ControllerKey) {
        if self.decoy.is_some() {
            self.remove_decoy(env);
        }
        self.showing = false;
        settle(self.strip_placeholder(env, self.field));
        if env.doc.active_element() != Some(self.field) {
            self.on_blur(env, key, None);
        }
    }

    // =========================================================================
    // Event transitions
    // =========================================================================

    pub(crate) fn on_focus(&mut self, env: &mut Env) {
        log::trace!(target: "placeholder.controller", "focus {} showing={}", self.field, self.showing);
        if self.showing {
            env.set_raw(self.field, String::new());
        }
        self.showing = false;
        settle(self.strip_placeholder(env, self.field));
    }

    pub(crate) fn on_blur(&mut self, env: &mut Env, key: ControllerKey, event: Option<&Event>) {
        log::trace!(target: "placeholder.controller", "blur {} showing={}", self.field, self.showing);
        let masked = is_masked(&env.doc, self.field);
        let raw = env.raw(self.field);

        if !raw.is_empty() {
            // Non-empty is real content unless it is exactly the text we put there.
            let ours = self.showing && !masked && raw == self.placeholder_text(&env.doc);
            if !ours {
                if self.decoy.is_some() {
                    self.remove_decoy(env);
                }
                self.showing = false;
                settle(self.strip_placeholder(env, self.field));
            }
            return;
        }

        if masked {
            let decoy = match self.decoy {
                Some(decoy) => {
                    // A form reset may have wiped the decoy's text.
                    settle(self.show_placeholder(env, decoy));
                    decoy
                }
                None => match self.create_decoy(env, key) {
                    Ok(decoy) => decoy,
                    Err(err) => {
                        log::warn!(target: "placeholder.controller", "no decoy for {}: {err}", self.field);
                        return;
                    }
                },
            };
            if let Some(event) = event {
                env.check_prevented(
                    &self.conf,
                    event,
                    key,
                    FollowUp::BlurDecoy(decoy),
                    FollowUp::Nothing,
                );
            }
            return;
        }

        self.showing = true;
        settle(self.show_placeholder(env, self.field));
    }

    /// Focus landed on the decoy: hand the field back and, unless vetoed,
    /// move focus to it.
    pub(crate) fn on_decoy_focus(&mut self, env: &mut Env, key: ControllerKey, event: &Event) {
        if self.remove_decoy(env).is_none() {
            return;
        }
        env.check_prevented(
            &self.conf,
            event,
            key,
            FollowUp::FocusField(self.field),
            FollowUp::Nothing,
        );
    }

    /// Submitted data must not contain placeholder text; if the submit is
    /// vetoed, the placeholder comes back.
    pub(crate) fn on_form_submit(&mut self, env: &mut Env, key: ControllerKey, event: &Event) {
        self.clear(env);
        env.check_prevented(&self.conf, event, key, FollowUp::Nothing, FollowUp::Reset);
    }

    /// The form restores its values first; the placeholder follows.
    pub(crate) fn on_form_reset(&mut self, env: &mut Env, key: ControllerKey, event: &Event) {
        env.check_prevented(&self.conf, event, key, FollowUp::Reset, FollowUp::Nothing);
    }

    // =========================================================================
    // Decoy lifecycle
    // =========================================================================

    fn create_decoy(&mut self, env: &mut Env, key: ControllerKey) -> Result<Id, DomError> {
        let decoy = env.doc.clone_element(self.field)?;
        if let Err(err) = self.install_decoy(env, decoy) {
            let _ = env.doc.remove(decoy);
            env.store.remove(input_id(decoy));
            return Err(err);
        }
        self.showing = true;
        self.decoy = Some(decoy);
        env.listeners.bind_decoy(decoy, key);
        log::debug!(target: "placeholder.controller", "decoy {decoy} stands in for {}", self.field);
        Ok(decoy)
    }

    fn install_decoy(&self, env: &mut Env, decoy: Id) -> Result<(), DomError> {
        env.doc.set_attr(decoy, "type", Some("text"))?;
        // Never serialized, never a duplicate id.
        env.doc.remove_attr(decoy, "name")?;
        env.doc.remove_attr(decoy, "id")?;
        self.show_placeholder(env, decoy)?;
        env.doc.insert_after(self.field, decoy)?;
        env.doc.set_hidden(self.field, true)?;
        env.doc.set_disabled(self.field, true)
    }

    /// Detach the decoy and restore the real field. Returns the removed decoy.
    fn remove_decoy(&mut self, env: &mut Env) -> Option<Id> {
        let decoy = self.decoy.take()?;
        env.listeners.unbind(decoy, NAMESPACE);
        if let Err(err) = env.doc.remove(decoy) {
            log::debug!(target: "placeholder.controller", "decoy {decoy} already gone: {err}");
        }
        env.store.remove(input_id(decoy));
        settle(
            env.doc
                .set_hidden(self.field, false)
                .and_then(|()| env.doc.set_disabled(self.field, false)),
        );
        log::debug!(target: "placeholder.controller", "decoy {decoy} removed from {}", self.field);
        Some(decoy)
    }

    // =========================================================================
    // Styling
    // =========================================================================

    fn show_placeholder(&self, env: &mut Env, target: Id) -> Result<(), DomError> {
        let text = self.placeholder_text(&env.doc);
        env.set_raw(target, text);
        if !self.conf.css_class.is_empty() {
            env.doc.add_class(target, &self.conf.css_class)?;
        }
        if !self.conf.color.is_empty() {
            env.doc.set_style(target, "color", &self.conf.color)?;
        }
        Ok(())
    }

    fn strip_placeholder(&self, env: &mut Env, target: Id) -> Result<(), DomError> {
        if !self.conf.css_class.is_empty() {
            env.doc.remove_class(target, &self.conf.css_class)?;
        }
        if !self.conf.color.is_empty() {
            match &self.original_color {
                Some(color) => env.doc.set_style(target, "color", color)?,
                None => env.doc.remove_style(target, "color")?,
            }
        }
        Ok(())
    }
}

/// Transitions are best-effort; a field removed from the document under a
/// live controller is logged, not propagated.
fn settle(result: Result<(), DomError>) {
    if let Err(err) = result {
        log::warn!(target: "placeholder.controller", "placeholder update skipped: {err}");
    }
}
