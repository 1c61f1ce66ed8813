use super::*;

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(
        request_failed_message("/grylli/email/status", 502),
        "GET /grylli/email/status failed: 502"
    );
}

#[test]
fn themes_decode_into_loaded_catalog() {
    let Catalog::Loaded(themes) = decode_themes(Ok(r#"["light", "dark", "cupcake"]"#.to_owned())) else {
        panic!("expected loaded catalog");
    };
    assert!(themes.contains("cupcake"));
}

#[test]
fn fetch_or_decode_failure_is_failed() {
    assert!(matches!(decode_themes(Err("offline".to_owned())), Catalog::Failed));
    assert!(matches!(decode_patterns(Ok("{".to_owned())), Catalog::Failed));
}

#[test]
fn patterns_decode_name_and_file() {
    let Catalog::Loaded(patterns) =
        decode_patterns(Ok(r#"[{"name": "tiny-checkers", "file": "patterns/tiny-checkers.svg"}]"#.to_owned()))
    else {
        panic!("expected loaded catalog");
    };
    assert!(patterns.contains_file("patterns/tiny-checkers.svg"));
}

#[test]
fn theme_log_payload_names_theme() {
    assert_eq!(theme_log_payload("dark").to_string(), r#"{"theme":"dark"}"#);
}

#[test]
fn font_load_spec_quotes_family() {
    assert_eq!(font_load_spec("IBM Plex Mono"), "1em \"IBM Plex Mono\"");
}
