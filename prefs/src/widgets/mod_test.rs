use super::test_support::fixture;
use super::*;
use crate::dom::MemoryElement;

fn element() -> MemoryElement {
    MemoryElement::new("div")
        .with_attr("data-list-toggle-target", "tableView")
        .with_attr("data-list-toggle-storage-key-value", "webhookListView")
        .with_attr("data-list-toggle-open-value", "true")
        .with_attr("data-list-toggle-limit-value", "12")
        .with_attr("data-list-toggle-pages-value", r#"["a","b"]"#)
        .with_attr("data-list-toggle-broken-value", "maybe")
        .with_child(MemoryElement::new("div").with_attr("data-list-toggle-target", "cardView tableBtn"))
}

#[test]
fn targets_include_host_and_descendants() {
    let fx = fixture();
    let host = fx.mount(&element(), "list-toggle");
    assert_eq!(host.targets("tableView").len(), 1);
    assert!(host.targets("tableView")[0].same_node(&host.element));
    assert_eq!(host.targets("tableBtn").len(), 1);
    assert!(host.target("cardBtn").is_none());
}

#[test]
fn required_target_reports_controller_and_name() {
    let fx = fixture();
    let host = fx.mount(&element(), "list-toggle");
    assert_eq!(
        host.required_target("cardBtn").map(|_| ()),
        Err(AttachError::MissingTarget { controller: "list-toggle".into(), target: "cardBtn".into() })
    );
}

#[test]
fn typed_values_parse_or_report() {
    let fx = fixture();
    let host = fx.mount(&element(), "list-toggle");

    assert_eq!(host.value("storageKey").as_deref(), Some("webhookListView"));
    assert_eq!(host.bool_value("open"), Ok(Some(true)));
    assert_eq!(host.u32_value("limit"), Ok(Some(12)));
    assert_eq!(host.json_value::<Vec<String>>("pages"), Ok(Some(vec!["a".into(), "b".into()])));
    assert_eq!(host.bool_value("missing"), Ok(None));
    assert!(matches!(host.bool_value("broken"), Err(AttachError::InvalidValue { expected: "boolean", .. })));
    assert!(host.u32_value("storageKey").is_err());
    assert_eq!(
        host.required_value("label"),
        Err(AttachError::MissingValue { controller: "list-toggle".into(), key: "label".into() })
    );
}

#[test]
fn swap_classes_exchanges_sets() {
    let el = MemoryElement::new("button").with_class("bg-gray-300");
    swap_classes(&el, true, &["bg-blue-600", "text-white"], &["bg-gray-300", "text-black"]);
    assert_eq!(el.classes(), vec!["bg-blue-600", "text-white"]);
    swap_classes(&el, false, &["bg-blue-600", "text-white"], &["bg-gray-300", "text-black"]);
    assert_eq!(el.classes(), vec!["bg-gray-300", "text-black"]);
}

#[test]
fn local_url_keeps_navigation_on_site() {
    assert_eq!(local_url(" /grylli/auth/login "), Some("/grylli/auth/login"));
    assert_eq!(local_url("/grylli/lang/de"), Some("/grylli/lang/de"));
    assert_eq!(local_url("//evil.example/"), None);
    assert_eq!(local_url("https://evil.example/"), None);
    assert_eq!(local_url("/\\evil.example"), None);
    assert_eq!(local_url("javascript:alert(1)"), None);
    assert_eq!(local_url(""), None);
}
