use super::*;

fn action(event: &str, controller: &str, method: &str) -> ActionDescriptor {
    ActionDescriptor { event: event.into(), controller: controller.into(), method: method.into() }
}

#[test]
fn parses_explicit_and_default_events() {
    assert_eq!(
        parse_actions("click->collapse#toggle change->theme#change font#change", "change"),
        vec![action("click", "collapse", "toggle"), action("change", "theme", "change"), action("change", "font", "change")]
    );
}

#[test]
fn skips_malformed_entries() {
    assert_eq!(parse_actions("click->#toggle ->x#y nohash click->a#b", "click"), vec![action("click", "a", "b")]);
    assert!(parse_actions("", "click").is_empty());
}

#[test]
fn key_filters_are_dropped() {
    assert_eq!(parse_actions("keydown.esc->role-modal#closeModal", "click"), vec![action(
        "keydown",
        "role-modal",
        "closeModal"
    )]);
}

#[test]
fn default_events_follow_element_kind() {
    assert_eq!(default_event("FORM", None), "submit");
    assert_eq!(default_event("select", None), "change");
    assert_eq!(default_event("input", Some("checkbox")), "change");
    assert_eq!(default_event("input", Some("password")), "input");
    assert_eq!(default_event("input", Some("submit")), "click");
    assert_eq!(default_event("button", None), "click");
}
