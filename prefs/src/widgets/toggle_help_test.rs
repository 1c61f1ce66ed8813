use super::*;
use crate::dom::MemoryElement;
use crate::widgets::test_support::fixture;

fn markup(extra: &[(&str, &str)]) -> (MemoryElement, MemoryElement, MemoryElement) {
    let panel = MemoryElement::new("div").with_attr("data-toggle-help-target", "panel").with_class("hidden");
    let label = MemoryElement::new("span").with_attr("data-toggle-help-target", "label");
    let mut el = MemoryElement::new("div").with_child(label.clone()).with_child(panel.clone());
    for (k, v) in extra {
        el = el.with_attr(k, v);
    }
    (el, panel, label)
}

#[test]
fn default_labels_follow_panel() {
    let fx = fixture();
    let (el, panel, label) = markup(&[]);
    let mut widget = attach(fx.mount(&el, NAME), &fx.env).expect("attach");
    widget.connect();
    assert_eq!(label.text(), "Show Help");

    widget.handle("toggle", &el);
    assert!(!panel.has_class("hidden"));
    assert_eq!(label.text(), "Hide Help");
}

#[test]
fn custom_labels() {
    let fx = fixture();
    let (el, _, label) = markup(&[("data-toggle-help-show-label-value", "Explain"), ("data-toggle-help-hide-label-value", "Got it")]);
    let mut widget = attach(fx.mount(&el, NAME), &fx.env).expect("attach");
    widget.connect();
    assert_eq!(label.text(), "Explain");
    widget.handle("toggle", &el);
    assert_eq!(label.text(), "Got it");
}

#[test]
fn requires_panel() {
    let fx = fixture();
    let el = MemoryElement::new("div");
    assert!(matches!(attach(fx.mount(&el, NAME), &fx.env), Err(AttachError::MissingTarget { .. })));
}
