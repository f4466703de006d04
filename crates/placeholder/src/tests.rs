use super::*;
use dom::{Document, Id};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

fn element(doc: &mut Document, parent: Id, name: &str, attrs: &[(&str, &str)]) -> Id {
    let id = doc.create_element(name, attrs);
    doc.append_child(parent, id).unwrap();
    id
}

/// `<form>` holding one input per attribute list.
fn form_page(fields: &[&[(&str, &str)]]) -> (Page, Id, Vec<Id>) {
    let mut doc = Document::new();
    let root = doc.root();
    let form = element(&mut doc, root, "form", &[]);
    let ids = fields
        .iter()
        .map(|attrs| element(&mut doc, form, "input", attrs))
        .collect();
    (Page::new(doc), form, ids)
}

fn single(attrs: &[(&str, &str)]) -> (Page, Id) {
    let (page, _, ids) = form_page(&[attrs]);
    (page, ids[0])
}

fn deferred() -> Options {
    Options::new().cancellation(CancellationCheck::deferred())
}

fn inputs(page: &Page) -> usize {
    let doc = page.document();
    doc.descendants(doc.root())
        .into_iter()
        .filter(|id| doc.is_element(*id, "input"))
        .count()
}

#[test]
fn attach_shows_attribute_text_on_empty_field() {
    let (mut page, email) = single(&[("placeholder", "Your e-mail")]);
    page.placehold(&[email], &Options::new());

    assert!(page.is_showing_placeholder(email));
    assert_eq!(page.raw_value(email), "Your e-mail");
    assert_eq!(page.val(email), "");
    assert!(page.document().has_class(email, "placeholder"));
    assert_eq!(page.document().style(email, "color"), Some("silver"));
}

#[test]
fn attach_leaves_prefilled_field_alone() {
    let (mut page, name) = single(&[("placeholder", "Name"), ("value", "Ada")]);
    page.placehold(&[name], &Options::new());

    assert!(!page.is_showing_placeholder(name));
    assert_eq!(page.val(name), "Ada");
    assert!(!page.document().has_class(name, "placeholder"));
}

#[test]
fn message_is_used_when_attribute_missing_or_empty() {
    let (mut page, _, ids) = form_page(&[&[], &[("placeholder", "")]]);
    page.placehold(&ids, &Options::new().message("Type here"));

    assert_eq!(page.raw_value(ids[0]), "Type here");
    assert_eq!(page.raw_value(ids[1]), "Type here");
}

#[test]
fn placeholder_text_drops_line_breaks() {
    let (mut page, field) = single(&[("placeholder", "first\r\nsecond")]);
    page.placehold(&[field], &Options::new());

    assert_eq!(page.raw_value(field), "firstsecond");
}

#[test]
fn empty_attr_disables_lookup() {
    let (mut page, field) = single(&[("placeholder", "ignored")]);
    page.placehold(&[field], &Options::new().attr("").message("fallback"));

    assert_eq!(page.raw_value(field), "fallback");
}

#[test]
fn empty_class_and_color_leave_styling_alone() {
    let (mut page, field) = single(&[("placeholder", "Hint"), ("class", "wide")]);
    page.placehold(&[field], &Options::new().css_class("").color(""));

    assert_eq!(page.raw_value(field), "Hint");
    assert_eq!(page.document().attr(field, "class"), Some("wide"));
    assert_eq!(page.document().style(field, "color"), None);
}

#[test]
fn original_color_is_restored_on_focus() {
    let (mut page, field) = single(&[("placeholder", "Hint")]);
    page.document_mut().set_style(field, "color", "navy").unwrap();
    page.placehold(&[field], &Options::new().color("#ff8888"));
    assert_eq!(page.document().style(field, "color"), Some("#ff8888"));

    page.focus(field);
    assert_eq!(page.document().style(field, "color"), Some("navy"));
}

#[test]
fn typed_text_survives_blur() {
    let (mut page, field) = single(&[("placeholder", "Name")]);
    page.placehold(&[field], &Options::new());

    assert!(page.focus(field));
    assert!(page.type_text(field, "Bob"));
    page.blur(field);

    assert!(!page.is_showing_placeholder(field));
    assert_eq!(page.val(field), "Bob");
    assert!(!page.document().has_class(field, "placeholder"));
}

#[test]
fn typing_requires_focus() {
    let (mut page, field) = single(&[]);
    assert!(!page.type_text(field, "x"));
    assert_eq!(page.raw_value(field), "");
}

#[test]
fn text_equal_to_placeholder_typed_by_user_is_content() {
    let (mut page, field) = single(&[("placeholder", "Name")]);
    page.placehold(&[field], &Options::new());

    page.focus(field);
    page.type_text(field, "Name");
    page.blur(field);

    assert!(!page.is_showing_placeholder(field));
    assert_eq!(page.val(field), "Name");
}

#[test]
fn masked_field_gets_exactly_one_decoy() {
    let (mut page, pass) = single(&[
        ("type", "password"),
        ("name", "pw"),
        ("id", "pw"),
        ("placeholder", "Password"),
    ]);
    page.placehold(&[pass], &Options::new());

    let decoy = page.decoy_of(pass).expect("decoy");
    let doc = page.document();
    assert_eq!(inputs(&page), 2);
    assert!(doc.is_hidden(pass));
    assert!(doc.is_disabled(pass));
    assert_eq!(page.raw_value(pass), "");
    assert_eq!(page.raw_value(decoy), "Password");
    assert_eq!(doc.attr(decoy, "type"), Some("text"));
    assert!(!doc.has_attr(decoy, "name"));
    assert!(!doc.has_attr(decoy, "id"));
    assert!(doc.has_class(decoy, "placeholder"));
    assert_eq!(doc.parent(decoy), doc.parent(pass));
    assert_eq!(page.val(decoy), "");
    assert_eq!(page.val(pass), "");

    // Re-running reset must not stack decoys.
    page.placeholder(pass).unwrap().reset().reset();
    assert_eq!(page.decoy_of(pass), Some(decoy));
    assert_eq!(inputs(&page), 2);
}

#[test]
fn decoy_focus_hands_focus_back_to_field() {
    let (mut page, pass) = single(&[("type", "password"), ("placeholder", "Password")]);
    page.placehold(&[pass], &Options::new());
    let decoy = page.decoy_of(pass).unwrap();

    assert!(!page.focus(pass));
    assert!(page.focus(decoy));

    assert!(!page.document().contains(decoy));
    assert_eq!(page.decoy_of(pass), None);
    assert!(!page.document().is_hidden(pass));
    assert!(!page.document().is_disabled(pass));
    assert_eq!(page.document().active_element(), Some(pass));
    assert_eq!(inputs(&page), 1);

    page.blur(pass);
    assert!(page.decoy_of(pass).is_some());
    assert_eq!(inputs(&page), 2);
}

#[test]
fn decoy_focus_in_deferred_mode_waits_for_the_timer() {
    let (mut page, pass) = single(&[("type", "password"), ("placeholder", "Password")]);
    page.placehold(&[pass], &deferred());
    let decoy = page.decoy_of(pass).unwrap();

    page.focus(decoy);
    assert_eq!(page.decoy_of(pass), None);
    assert_eq!(page.document().active_element(), None);
    assert_eq!(page.pending_timers(), 1);

    page.advance(DEFAULT_DEFERRED_DELAY);
    assert_eq!(page.document().active_element(), Some(pass));
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn vetoed_decoy_focus_does_not_move_focus() {
    let (mut page, pass) = single(&[("type", "password"), ("placeholder", "Password")]);
    page.placehold(&[pass], &Options::new());
    let decoy = page.decoy_of(pass).unwrap();
    page.on(decoy, EventKind::Focus, "app", |ev| ev.prevent_default());

    page.focus(decoy);
    assert_eq!(page.decoy_of(pass), None);
    assert_ne!(page.document().active_element(), Some(pass));
}

#[test]
fn masked_field_with_content_keeps_no_decoy() {
    let (mut page, pass) = single(&[("type", "password"), ("placeholder", "Password")]);
    page.placehold(&[pass], &Options::new());
    let decoy = page.decoy_of(pass).unwrap();

    page.focus(decoy);
    page.type_text(pass, "hunter2");
    page.blur(pass);

    assert_eq!(page.decoy_of(pass), None);
    assert_eq!(page.val(pass), "hunter2");
    assert!(!page.is_showing_placeholder(pass));
}

#[test]
fn clear_then_reset_round_trips() {
    let (mut page, field) = single(&[("placeholder", "Name")]);
    page.placehold(&[field], &Options::new());

    let mut handle = page.placeholder(field).unwrap();
    handle.clear();
    assert!(!handle.is_showing_placeholder());
    handle.reset();
    assert!(handle.is_showing_placeholder());

    assert_eq!(page.raw_value(field), "Name");
    assert!(page.document().has_class(field, "placeholder"));
    assert_eq!(page.document().style(field, "color"), Some("silver"));
}

#[test]
fn clear_removes_decoy() {
    let (mut page, pass) = single(&[("type", "password"), ("placeholder", "Password")]);
    page.placehold(&[pass], &Options::new());

    page.placeholder(pass).unwrap().clear();
    assert_eq!(page.decoy_of(pass), None);
    assert!(!page.document().is_disabled(pass));
    assert_eq!(inputs(&page), 1);
}

#[test]
fn reset_keeps_focused_field_empty() {
    let (mut page, field) = single(&[("placeholder", "Name")]);
    page.placehold(&[field], &Options::new());
    page.focus(field);

    page.placeholder(field).unwrap().reset();
    assert_eq!(page.raw_value(field), "");
    assert!(!page.is_showing_placeholder(field));
}

#[test]
fn destroy_leaves_field_clean() {
    let (mut page, form, ids) = form_page(&[
        &[("placeholder", "Name")],
        &[("type", "password"), ("placeholder", "Password")],
    ]);
    page.placehold(&[form], &Options::new());

    for id in &ids {
        page.placeholder(*id).unwrap().destroy();
        assert!(page.placeholder(*id).is_none());
    }

    let doc = page.document();
    for id in &ids {
        assert!(!doc.has_class(*id, "placeholder"));
        assert_eq!(doc.style(*id, "color"), None);
        assert!(!doc.is_hidden(*id));
        assert!(!doc.is_disabled(*id));
        assert_eq!(page.raw_value(*id), "");
        assert_eq!(page.listeners_on(*id, NAMESPACE), 0);
    }
    assert_eq!(inputs(&page), 2);
    assert_eq!(page.listeners_on(form, NAMESPACE), 0);
    assert_eq!(page.controllers(), 0);
}

#[test]
fn destroyed_field_ignores_focus_and_blur() {
    let (mut page, field) = single(&[("placeholder", "Name")]);
    page.placehold(&[field], &Options::new());
    page.placeholder(field).unwrap().destroy();

    page.focus(field);
    page.blur(field);
    assert_eq!(page.raw_value(field), "");
    assert!(!page.document().has_class(field, "placeholder"));
}

#[test]
fn reapplying_replaces_the_controller() {
    let (mut page, field) = single(&[("placeholder", "Name")]);
    page.placehold(&[field], &Options::new());
    let first = page.coordinator().key_for(field).unwrap();

    page.placehold(&[field], &Options::new().css_class("hint"));
    let second = page.coordinator().key_for(field).unwrap();

    assert_ne!(first, second);
    assert!(page.coordinator().get(first).is_none());
    assert_eq!(page.controllers(), 1);
    assert_eq!(page.listeners_on(field, NAMESPACE), 2);
    assert!(page.document().has_class(field, "hint"));
    assert!(!page.document().has_class(field, "placeholder"));
    assert_eq!(page.placeholder(field).unwrap().conf().unwrap().css_class, "hint");
}

#[test]
fn reapplying_to_form_with_decoy_keeps_one_controller_per_field() {
    let (mut page, form, ids) = form_page(&[
        &[("type", "password"), ("placeholder", "Password")],
        &[("placeholder", "Name")],
    ]);
    page.placehold(&[form], &Options::new());
    let old_decoy = page.decoy_of(ids[0]).unwrap();

    page.placehold(&[form], &Options::new().color("red"));

    assert_eq!(page.controllers(), 2);
    assert_eq!(inputs(&page), 3);
    assert!(!page.document().contains(old_decoy));
    assert!(page.placeholder(old_decoy).is_none());
    let decoy = page.decoy_of(ids[0]).unwrap();
    assert_eq!(page.document().style(decoy, "color"), Some("red"));
    assert_eq!(page.listeners_on(old_decoy, NAMESPACE), 0);
}

#[test]
fn decoy_given_as_target_is_not_managed() {
    let (mut page, pass) = single(&[("type", "password"), ("placeholder", "Password")]);
    page.placehold(&[pass], &Options::new());
    let decoy = page.decoy_of(pass).unwrap();

    page.placehold(&[decoy], &Options::new());
    assert_eq!(page.controllers(), 1);
    assert!(page.placeholder(decoy).is_none());
    assert_eq!(page.decoy_of(pass), Some(decoy));
}

#[test]
fn disabled_apply_tears_placeholders_down() {
    let (mut page, form, ids) = form_page(&[
        &[("placeholder", "Name")],
        &[("type", "password"), ("placeholder", "Password")],
    ]);
    page.placehold(&[form], &Options::new());
    assert_eq!(page.controllers(), 2);

    page.placehold(&[form], &Options::new().enabled(false));
    assert_eq!(page.controllers(), 0);
    assert_eq!(inputs(&page), 2);
    assert_eq!(page.raw_value(ids[0]), "");
    assert!(!page.document().is_disabled(ids[1]));
}

#[test]
fn native_support_disables_emulation_by_default() {
    let mut doc = Document::new();
    let root = doc.root();
    let field = element(&mut doc, root, "input", &[("placeholder", "Name")]);
    let mut page = Page::with_native_support(doc, true);

    assert!(!page.defaults().enabled);
    page.placehold(&[field], &Options::new());
    assert_eq!(page.controllers(), 0);
    assert_eq!(page.raw_value(field), "");

    page.placehold(&[field], &Options::new().enabled(true));
    assert_eq!(page.raw_value(field), "Name");
}

#[test]
fn defaults_apply_to_later_calls() {
    let (mut page, field) = single(&[]);
    page.defaults_mut()
        .update(&Options::new().message("Required").css_class("muted"));
    page.placehold(&[field], &Options::new());

    assert_eq!(page.raw_value(field), "Required");
    assert!(page.document().has_class(field, "muted"));
}

#[test]
fn placehold_returns_its_targets() {
    let (mut page, form, _) = form_page(&[&[]]);
    let targets = [form];
    assert_eq!(page.placehold(&targets, &Options::new()), &targets);
}

#[test]
fn forms_expand_to_matching_fields_without_duplicates() {
    let (mut page, form, ids) = form_page(&[
        &[("placeholder", "a")],
        &[("type", "checkbox")],
        &[("type", "email"), ("placeholder", "b")],
    ]);
    let area = {
        let doc = page.document_mut();
        element(doc, form, "textarea", &[("placeholder", "c")])
    };
    page.seed_values();

    page.placehold(&[form, ids[0], form], &Options::new());
    assert_eq!(page.controllers(), 2);
    assert!(page.placeholder(ids[0]).is_some());
    assert!(page.placeholder(ids[1]).is_none());
    assert!(page.placeholder(ids[2]).is_none());
    assert_eq!(page.raw_value(area), "c");

    // Direct targets bypass the selector.
    page.placehold(&[ids[2]], &Options::new());
    assert_eq!(page.raw_value(ids[2]), "b");
    assert_eq!(page.controllers(), 3);
}

#[test]
fn custom_elements_selector() {
    let (mut page, form, ids) = form_page(&[
        &[("placeholder", "a")],
        &[("type", "email"), ("placeholder", "b")],
    ]);
    let elements = FieldSelector::parse("input[type=email]").unwrap();
    page.placehold(&[form], &Options::new().elements(elements));

    assert!(page.placeholder(ids[0]).is_none());
    assert_eq!(page.raw_value(ids[1]), "b");
}

#[test]
fn non_field_targets_are_skipped() {
    let (mut page, form, _) = form_page(&[&[("type", "submit")]]);
    let div = {
        let doc = page.document_mut();
        let root = doc.root();
        element(doc, root, "div", &[])
    };
    let submit = page.document().children(form)[0];
    page.placehold(&[div, submit], &Options::new());
    assert_eq!(page.controllers(), 0);
}

#[test]
fn fields_outside_forms_get_no_form_wiring() {
    let mut doc = Document::new();
    let root = doc.root();
    let field = element(&mut doc, root, "input", &[("placeholder", "Loose")]);
    let mut page = Page::new(doc);
    page.placehold(&[field], &Options::new());

    let ctrl = page.coordinator().controller_for(field).unwrap();
    assert_eq!(ctrl.form(), None);
    assert_eq!(page.raw_value(field), "Loose");
}

#[test]
fn form_listener_is_shared_by_all_controllers() {
    let (mut page, form, ids) = form_page(&[&[], &[], &[]]);
    page.placehold(&[form], &Options::new());

    assert_eq!(page.listeners_on(form, NAMESPACE), 2);
    assert_eq!(page.coordinator().form_members(form), 3);

    page.placeholder(ids[0]).unwrap().destroy();
    assert_eq!(page.listeners_on(form, NAMESPACE), 2);
    assert_eq!(page.coordinator().form_members(form), 2);

    page.placehold(&[form], &Options::new());
    assert_eq!(page.listeners_on(form, NAMESPACE), 2);
    assert_eq!(page.coordinator().form_members(form), 3);

    page.placehold(&[form], &Options::new().enabled(false));
    assert_eq!(page.listeners_on(form, NAMESPACE), 0);
}

#[test]
fn host_namespace_survives_placeholder_teardown() {
    let (mut page, form, _) = form_page(&[&[]]);
    page.on(form, EventKind::Submit, "app", |_| {});
    page.placehold(&[form], &Options::new());
    page.placehold(&[form], &Options::new().enabled(false));

    assert_eq!(page.listeners_on(form, "app"), 1);
    assert_eq!(page.off(form, "app"), 1);
}

#[test]
fn submit_excludes_placeholder_text() {
    let (mut page, form, ids) = form_page(&[
        &[("name", "email"), ("placeholder", "Your e-mail")],
        &[("name", "pw"), ("type", "password"), ("placeholder", "Password")],
        &[("name", "city"), ("value", "Paris"), ("placeholder", "City")],
    ]);
    page.placehold(&[form], &Options::new());

    let data = page.submit(form).unwrap();
    assert_eq!(
        data,
        vec![
            ("email".to_string(), String::new()),
            ("pw".to_string(), String::new()),
            ("city".to_string(), "Paris".to_string()),
        ]
    );
    // Submitted successfully: fields stay cleared.
    assert!(!page.is_showing_placeholder(ids[0]));
    assert_eq!(page.decoy_of(ids[1]), None);
}

#[test]
fn vetoed_submit_restores_placeholders() {
    let (mut page, form, ids) = form_page(&[
        &[("name", "email"), ("placeholder", "Your e-mail")],
        &[("name", "pw"), ("type", "password"), ("placeholder", "Password")],
    ]);
    page.on(form, EventKind::Submit, "app", |ev| ev.prevent_default());
    page.placehold(&[form], &Options::new());

    assert_eq!(page.submit(form), None);
    assert!(page.is_showing_placeholder(ids[0]));
    assert_eq!(page.raw_value(ids[0]), "Your e-mail");
    assert!(page.decoy_of(ids[1]).is_some());
    assert_eq!(inputs(&page), 3);
}

#[test]
fn advancing_by_a_huge_duration_saturates() {
    let (mut page, form, ids) = form_page(&[&[("placeholder", "Name")]]);
    page.on(form, EventKind::Submit, "app", |ev| ev.prevent_default());
    page.placehold(&[form], &deferred());
    page.advance(Duration::from_millis(1));
    assert_eq!(page.submit(form), None);

    page.advance(Duration::MAX);
    assert_eq!(page.now(), Duration::MAX);
    assert_eq!(page.pending_timers(), 0);
    assert!(page.is_showing_placeholder(ids[0]));
}

#[test]
fn late_veto_is_seen_by_deferred_check() {
    let (mut page, form, ids) = form_page(&[&[("name", "q"), ("placeholder", "Search")]]);
    let kept = Rc::new(Cell::new(None));
    let slot = Rc::clone(&kept);
    page.on(form, EventKind::Submit, "app", move |ev| slot.set(Some(ev.clone())));
    page.placehold(&[form], &deferred());

    assert!(page.submit(form).is_some());
    assert_eq!(page.raw_value(ids[0]), "");

    // Vetoed after dispatch returned, but inside the window.
    let event = kept.take().unwrap();
    page.advance(Duration::from_millis(50));
    event.prevent_default();
    page.advance(Duration::from_millis(150));

    assert!(page.is_showing_placeholder(ids[0]));
    assert_eq!(page.now(), Duration::from_millis(200));
}

#[test]
fn stale_deferred_check_is_dropped() {
    let (mut page, form, ids) = form_page(&[&[("placeholder", "Name")]]);
    page.on(form, EventKind::Submit, "app", |ev| ev.prevent_default());
    page.placehold(&[form], &deferred());

    assert_eq!(page.submit(form), None);
    assert_eq!(page.pending_timers(), 1);
    page.placeholder(ids[0]).unwrap().destroy();

    page.advance(DEFAULT_DEFERRED_DELAY);
    assert_eq!(page.pending_timers(), 0);
    assert_eq!(page.raw_value(ids[0]), "");
    assert!(!page.document().has_class(ids[0], "placeholder"));
}

#[test]
fn form_reset_restores_defaults_then_placeholder() {
    let (mut page, form, ids) = form_page(&[
        &[("placeholder", "Name")],
        &[("placeholder", "City"), ("value", "Paris")],
        &[("type", "password"), ("placeholder", "Password")],
    ]);
    page.placehold(&[form], &Options::new());

    page.focus(ids[0]);
    page.type_text(ids[0], "Bob");
    page.focus(ids[1]);
    page.type_text(ids[1], " (FR)");
    page.blur(ids[1]);
    assert_eq!(page.val(ids[0]), "Bob");

    assert!(page.reset_form(form));
    assert!(page.is_showing_placeholder(ids[0]));
    assert_eq!(page.raw_value(ids[0]), "Name");
    assert_eq!(page.val(ids[1]), "Paris");
    let decoy = page.decoy_of(ids[2]).unwrap();
    assert_eq!(page.raw_value(decoy), "Password");
}

#[test]
fn vetoed_form_reset_changes_nothing() {
    let (mut page, form, ids) = form_page(&[&[("placeholder", "Name")]]);
    page.on(form, EventKind::Reset, "app", |ev| ev.prevent_default());
    page.placehold(&[form], &Options::new());
    page.focus(ids[0]);
    page.type_text(ids[0], "Bob");
    page.blur(ids[0]);

    assert!(!page.reset_form(form));
    assert_eq!(page.val(ids[0]), "Bob");
}

#[test]
fn set_val_resynchronizes_placeholder() {
    let (mut page, field) = single(&[("placeholder", "Name")]);
    page.placehold(&[field], &Options::new());

    page.set_val(field, "Ada");
    assert!(!page.is_showing_placeholder(field));
    assert_eq!(page.val(field), "Ada");
    assert!(!page.document().has_class(field, "placeholder"));

    page.set_val(field, "");
    assert!(page.is_showing_placeholder(field));
    assert_eq!(page.raw_value(field), "Name");
}

#[test]
fn set_val_on_focused_field_shows_no_placeholder() {
    let (mut page, field) = single(&[("placeholder", "Name")]);
    page.placehold(&[field], &Options::new());
    page.focus(field);

    page.set_val(field, "");
    assert!(!page.is_showing_placeholder(field));
    assert_eq!(page.raw_value(field), "");
}

#[test]
fn set_val_through_decoy_writes_the_field() {
    let (mut page, pass) = single(&[("type", "password"), ("placeholder", "Password")]);
    page.placehold(&[pass], &Options::new());
    let decoy = page.decoy_of(pass).unwrap();

    page.set_val(decoy, "secret");
    assert_eq!(page.raw_value(pass), "secret");
    assert_eq!(page.decoy_of(pass), None);
    assert!(!page.document().contains(decoy));
    assert_eq!(page.val(pass), "secret");
}

#[test]
fn unmanaged_fields_read_raw_values() {
    let (mut page, _, ids) = form_page(&[&[("placeholder", "a")], &[("value", "b")]]);
    page.placehold(&[ids[0]], &Options::new());

    assert_eq!(page.val(ids[1]), "b");
    page.set_val(ids[1], "c");
    assert_eq!(page.val(ids[1]), "c");
    assert!(value_hook_installed());
}

#[test]
fn focus_refuses_hidden_or_disabled_nodes() {
    let (mut page, _, ids) = form_page(&[&[("disabled", "")], &[]]);
    page.document_mut().set_hidden(ids[1], true).unwrap();

    assert!(!page.focus(ids[0]));
    assert!(!page.focus(ids[1]));
    assert!(!page.focus(Id(999)));
    assert_eq!(page.document().active_element(), None);
}

#[test]
fn host_listeners_run_in_bind_order() {
    let (mut page, field) = single(&[("placeholder", "Name")]);
    let seen = Rc::new(Cell::new(0u32));
    let first = Rc::clone(&seen);
    page.on(field, EventKind::Focus, "app", move |ev| {
        assert_eq!(ev.kind(), EventKind::Focus);
        first.set(first.get() * 10 + 1);
    });
    let second = Rc::clone(&seen);
    page.on(field, EventKind::Focus, "app", move |_| second.set(second.get() * 10 + 2));

    page.focus(field);
    assert_eq!(seen.get(), 12);
}
