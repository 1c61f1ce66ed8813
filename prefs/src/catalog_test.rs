use super::*;

#[test]
fn font_allow_list_has_twenty_four_entries() {
    assert_eq!(FONTS.len(), 24);
    assert_eq!(font_classes().count(), 24);
}

#[test]
fn font_class_for_known_and_unknown() {
    assert_eq!(font_class("plexmono").as_deref(), Some("font-plexmono"));
    assert_eq!(font_family("baloo2"), Some("Baloo 2"));
    assert_eq!(font_class("bold"), None);
    assert_eq!(font_class("inter evil"), None);
}

#[test]
fn theme_catalog_parses_and_defaults_to_first() {
    let catalog = ThemeCatalog::from_json(r#"["aqua", "dark", "light"]"#).expect("themes");
    assert_eq!(catalog.default_theme(), "aqua");
    assert!(catalog.contains("dark"));
    assert!(!catalog.contains("cyberpunk"));
}

#[test]
fn empty_theme_catalog_defaults_to_light() {
    let catalog = ThemeCatalog::from_names(Vec::new());
    assert_eq!(catalog.default_theme(), "light");
}

#[test]
fn theme_catalog_drops_malformed_names() {
    let catalog = ThemeCatalog::from_names(vec!["dark".into(), "x\" onload=\"y".into(), String::new()]);
    assert_eq!(catalog.names(), ["dark".to_owned()]);
}

#[test]
fn theme_catalog_rejects_non_array() {
    assert!(ThemeCatalog::from_json(r#"{"themes": []}"#).is_err());
}

#[test]
fn theme_options_capitalise_labels() {
    let catalog = ThemeCatalog::from_names(vec!["dark".into(), "cmyk".into()]);
    assert_eq!(
        catalog.options(),
        vec![("dark".to_owned(), "Dark".to_owned()), ("cmyk".to_owned(), "Cmyk".to_owned())]
    );
}

#[test]
fn pattern_catalog_parses_and_labels() {
    let catalog = PatternCatalog::from_json(
        r#"[{"name": "none", "file": "none"}, {"name": "circuit-board_dark", "file": "patterns/circuit.svg"}]"#,
    )
    .expect("patterns");
    assert!(catalog.contains_file("patterns/circuit.svg"));
    assert_eq!(catalog.options()[1].1, "Circuit Board Dark");
}

#[test]
fn pattern_catalog_drops_traversal_and_urls() {
    let catalog = PatternCatalog::from_patterns(vec![
        Pattern { name: "up".into(), file: "../secret.png".into() },
        Pattern { name: "abs".into(), file: "/etc/passwd".into() },
        Pattern { name: "remote".into(), file: "https://evil.test/x.png".into() },
        Pattern { name: "dots".into(), file: "dots.svg".into() },
    ]);
    assert_eq!(catalog.patterns().len(), 1);
    assert!(catalog.contains_file("dots.svg"));
}

#[test]
fn is_theme_name_checks_shape() {
    assert!(is_theme_name("night-owl"));
    assert!(!is_theme_name("dark;"));
    assert!(!is_theme_name(""));
}
