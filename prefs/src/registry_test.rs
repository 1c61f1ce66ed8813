use std::cell::Cell;

use super::*;
use crate::dom::{Element, MemoryElement};
use crate::store::PreferenceBackend;
use crate::widgets::Effect;
use crate::widgets::test_support::{Doc, fixture};

thread_local! {
    static DISCONNECTS: Cell<u32> = const { Cell::new(0) };
}

struct Recorder;

impl Widget<Doc> for Recorder {
    fn disconnect(&mut self) {
        DISCONNECTS.with(|c| c.set(c.get() + 1));
    }

    fn handle(&mut self, _method: &str, _source: &MemoryElement) -> Effect {
        Effect::Reload
    }
}

fn recorder(_host: Host<Doc>, _env: &AttachEnv) -> Result<Box<dyn Widget<Doc>>, AttachError> {
    Ok(Box::new(Recorder))
}

#[test]
fn defaults_cover_every_core_controller() {
    let registry = Registry::<Doc>::with_defaults();
    let names: Vec<_> = registry.names().collect();
    assert_eq!(
        names,
        vec![
            "action-title",
            "apprise-form",
            "apprise-list-toggle",
            "apprise-validate",
            "bootstrap-form",
            "collapse",
            "collapsible-item",
            "email-status",
            "flash-message",
            "forgot-password",
            "forgot-username",
            "insecure-warning",
            "lang",
            "layout-debug",
            "list-toggle",
            "profile-dropdown",
            "profile-title",
            "rate-limit-redirect",
            "redirect-button",
            "reset-password",
            "role-modal",
            "signup-form",
            "smtp-form",
            "tabs",
            "toggle-help",
            "user-form",
            "webhook-form",
            "webhook-list-toggle",
        ]
    );
}

#[test]
fn unknown_controller_is_an_error() {
    let fx = fixture();
    let registry = Registry::<Doc>::with_defaults();
    let el = MemoryElement::new("div");
    assert!(matches!(
        registry.attach("carousel", fx.doc.clone(), el, &fx.env),
        Err(AttachError::UnknownController(name)) if name == "carousel"
    ));
}

#[test]
fn attach_connects_the_widget() {
    let fx = fixture();
    fx.backend.write("__GrylliSidebar", r#"{"admin": false}"#).expect("seed");
    let content = MemoryElement::new("ul").with_attr("data-collapse-target", "content");
    let el = MemoryElement::new("div").with_attr("data-collapse-id-value", "admin").with_child(content.clone());
    fx.doc.append(&el);

    let registry = Registry::<Doc>::with_defaults();
    let attached = registry.attach("collapse", fx.doc.clone(), el.clone(), &fx.env).expect("attach");
    assert_eq!(attached.controller(), "collapse");
    assert!(attached.element().same_node(&el));
    assert!(content.has_class("hidden"));
}

#[test]
fn factory_errors_pass_through() {
    let fx = fixture();
    let registry = Registry::<Doc>::with_defaults();
    let el = MemoryElement::new("div");
    assert!(matches!(
        registry.attach("toggle-help", fx.doc.clone(), el, &fx.env),
        Err(AttachError::MissingTarget { target, .. }) if target == "panel"
    ));
}

#[test]
fn dropping_detaches() {
    let fx = fixture();
    let mut registry = Registry::<Doc>::new();
    registry.register("recorder", recorder);
    let el = MemoryElement::new("div");

    let before = DISCONNECTS.with(Cell::get);
    let mut attached = registry.attach("recorder", fx.doc.clone(), el.clone(), &fx.env).expect("attach");
    assert_eq!(attached.handle("anything", &el), Effect::Reload);
    drop(attached);
    assert_eq!(DISCONNECTS.with(Cell::get), before + 1);
}
