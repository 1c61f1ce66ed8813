use super::*;
use crate::dom::MemoryElement;
use crate::widgets::test_support::{Fixture, fixture};

struct Markup {
    root: MemoryElement,
    modal: MemoryElement,
    form: MemoryElement,
    user_id: MemoryElement,
    username: MemoryElement,
    admin: MemoryElement,
    member: MemoryElement,
    save: MemoryElement,
    opener: MemoryElement,
}

fn markup() -> Markup {
    let t = |tag: &str, name: &str| MemoryElement::new(tag).with_attr("data-role-modal-target", name);
    let admin = t("input", "roleInputs").with_attr("value", "admin");
    let member = t("input", "roleInputs").with_attr("value", "member");
    let user_id = t("input", "userIdInput");
    let username = t("span", "username");
    let save = t("button", "saveButton");
    let form = t("form", "form")
        .with_child(user_id.clone())
        .with_child(admin.clone())
        .with_child(member.clone())
        .with_child(save.clone());
    let modal = t("div", "modal").with_class("hidden").with_child(username.clone()).with_child(form.clone());
    let opener = MemoryElement::new("button")
        .with_attr("data-role-modal-params-id", "42")
        .with_attr("data-role-modal-params-username", "ada")
        .with_attr("data-role-modal-params-role", "admin");
    let root = MemoryElement::new("div").with_child(opener.clone()).with_child(modal.clone());
    Markup { root, modal, form, user_id, username, admin, member, save, opener }
}

fn fixture_with_base() -> Fixture {
    let mut fx = fixture();
    fx.env.config.role_change_base = Some("/grylli/admin/users/0/role/".to_owned());
    fx
}

#[test]
fn action_replaces_placeholder_segment() {
    assert_eq!(role_change_action("/grylli/admin/users/0/role/", "42").as_deref(), Some("/grylli/admin/users/42/role/"));
    assert_eq!(role_change_action("/v10/users/0", "7").as_deref(), Some("/v10/users/7"));
    assert_eq!(role_change_action("/users/role", "7"), None);
    assert_eq!(role_change_action("/users/0/role", "7/../x"), None);
}

#[test]
fn open_fills_form_and_shows_modal() {
    let fx = fixture_with_base();
    let m = markup();
    let mut widget = attach(fx.mount(&m.root, NAME), &fx.env).expect("attach");
    widget.connect();

    widget.handle("openModal", &m.opener);
    assert!(!m.modal.has_class("hidden"));
    assert_eq!(m.user_id.value().as_deref(), Some("42"));
    assert_eq!(m.username.text(), "ada");
    assert!(m.admin.is_checked());
    assert!(!m.member.is_checked());
    assert_eq!(m.form.attr("action").as_deref(), Some("/grylli/admin/users/42/role/"));
    assert!(m.save.is_disabled());

    widget.handle("enableSave", &m.member);
    assert!(!m.save.is_disabled());

    widget.handle("closeModal", &m.save);
    assert!(m.modal.has_class("hidden"));
}

#[test]
fn requires_role_change_base() {
    let fx = fixture();
    let m = markup();
    assert!(matches!(attach(fx.mount(&m.root, NAME), &fx.env), Err(AttachError::MissingValue { .. })));
}

#[test]
fn instructions_toggle_uses_label_attributes() {
    let fx = fixture_with_base();
    let m = markup();
    let panel = MemoryElement::new("div").with_attr("data-role-modal-target", "instructions").with_class("hidden");
    let label = MemoryElement::new("span").with_attr("data-role-modal-target", "toggleText").with_text("Show");
    let root = m
        .root
        .with_attr("data-role-modal-show-text", "Show help")
        .with_attr("data-role-modal-hide-text", "Hide help")
        .with_child(panel.clone())
        .with_child(label.clone());
    let mut widget = attach(fx.mount(&root, NAME), &fx.env).expect("attach");

    widget.handle("toggleInstructions", &label);
    assert!(!panel.has_class("hidden"));
    assert_eq!(label.text(), "Hide help");

    widget.handle("toggleInstructions", &label);
    assert!(panel.has_class("hidden"));
    assert_eq!(label.text(), "Show help");
}
