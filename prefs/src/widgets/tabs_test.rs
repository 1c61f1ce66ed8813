use super::*;
use crate::dom::MemoryElement;
use crate::widgets::test_support::fixture;

fn tab(name: &str, title: &str) -> MemoryElement {
    MemoryElement::new("a")
        .with_attr("data-tabs-target", "tab")
        .with_attr("data-tabs-name", name)
        .with_attr("data-tabs-title", title)
}

fn strip() -> (MemoryElement, MemoryElement, MemoryElement) {
    let summary = tab("summary", "Overview | Summary");
    let schedule = tab("schedule", "Overview | Schedule");
    let el = MemoryElement::new("nav").with_child(summary.clone()).with_child(schedule.clone());
    (el, summary, schedule)
}

#[test]
fn path_segment_parsing() {
    assert_eq!(tab_from_path("/grylli/overview/schedule/"), Some("schedule"));
    assert_eq!(tab_from_path("/grylli/overview/schedule"), None);
    assert_eq!(tab_from_path("/grylli/overview//"), None);
    assert_eq!(tab_from_path("/grylli/email/"), None);
}

#[test]
fn first_tab_by_default() {
    let fx = fixture();
    let (el, summary, schedule) = strip();
    let mut widget = attach(fx.mount(&el, NAME), &fx.env).expect("attach");
    widget.connect();
    assert!(summary.has_class("text-primary"));
    assert!(!schedule.has_class("font-bold"));
    assert_eq!(fx.doc.title(), "Overview | Summary");
}

#[test]
fn active_value_beats_path() {
    let fx = fixture();
    fx.doc.navigate("/grylli/overview/summary/");
    let (el, _, schedule) = strip();
    let el = el.with_attr("data-tabs-active-tab-value", "schedule");
    let mut widget = attach(fx.mount(&el, NAME), &fx.env).expect("attach");
    widget.connect();
    assert!(schedule.has_class("font-bold"));
}

#[test]
fn path_selects_tab() {
    let fx = fixture();
    fx.doc.navigate("/grylli/overview/schedule/");
    let (el, summary, schedule) = strip();
    let mut widget = attach(fx.mount(&el, NAME), &fx.env).expect("attach");
    widget.connect();
    assert!(schedule.has_class("font-bold"));
    assert!(!summary.has_class("font-bold"));
}

#[test]
fn click_on_tab_child_activates_tab() {
    let fx = fixture();
    let (el, summary, schedule) = strip();
    let icon = MemoryElement::new("span");
    schedule.append(&icon);
    let mut widget = attach(fx.mount(&el, NAME), &fx.env).expect("attach");
    widget.connect();

    widget.handle("activate", &icon);
    assert!(schedule.has_class("text-primary"));
    assert!(!summary.has_class("text-primary"));
    assert_eq!(fx.doc.title(), "Overview | Schedule");
}
