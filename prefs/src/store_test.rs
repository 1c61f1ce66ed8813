use std::collections::BTreeMap;
use std::rc::Rc;

use super::*;
use crate::keys;

fn prefs_with(backend: &Rc<MemoryBackend>, cookies: &Rc<MemoryCookies>) -> Preferences {
    Preferences::new(backend.clone(), cookies.clone())
}

// =============================================================
// Totality of reads
// =============================================================

#[test]
fn get_returns_default_when_empty() {
    let prefs = Preferences::in_memory();
    assert_eq!(prefs.get("grylli-font", "inter"), "inter");
}

#[test]
fn get_returns_default_when_backend_unavailable() {
    let backend = Rc::new(MemoryBackend::with_entries([("grylli-font", "lato")]));
    backend.set_available(false);
    let prefs = prefs_with(&backend, &Rc::new(MemoryCookies::new()));
    assert_eq!(prefs.get("grylli-font", "inter"), "inter");
    assert_eq!(prefs.lookup("grylli-font"), None);
}

#[test]
fn get_returns_stored_value() {
    let backend = Rc::new(MemoryBackend::with_entries([("grylli-font", "lato")]));
    let prefs = prefs_with(&backend, &Rc::new(MemoryCookies::new()));
    assert_eq!(prefs.get("grylli-font", "inter"), "lato");
}

#[test]
fn every_known_key_falls_back_on_failing_backend() {
    let prefs = Preferences::new(Rc::new(MemoryBackend::unavailable()), Rc::new(MemoryCookies::new()));
    for key in [
        keys::THEME,
        keys::FONT,
        keys::FONT_SIZE,
        keys::CONTRAST,
        keys::ROUNDED,
        keys::TRACKING,
        keys::LINE_HEIGHT,
        keys::BACKGROUND,
        keys::SIDEBAR_COLLAPSED,
        keys::LIST_VIEW,
    ] {
        assert_eq!(prefs.entry(&key), key.default, "{}", key.name);
    }
}

// =============================================================
// Writes
// =============================================================

#[test]
fn set_on_unavailable_backend_is_swallowed() {
    let prefs = Preferences::new(Rc::new(MemoryBackend::unavailable()), Rc::new(MemoryCookies::new()));
    prefs.set("grylli-font", "lato");
    assert_eq!(prefs.get("grylli-font", "inter"), "inter");
}

#[test]
fn set_then_get_round_trips() {
    let prefs = Preferences::in_memory();
    prefs.set("grylli-contrast", "high");
    assert_eq!(prefs.get("grylli-contrast", "default"), "high");
}

#[test]
fn store_mirrors_cookie_scoped_entries() {
    let backend = Rc::new(MemoryBackend::new());
    let cookies = Rc::new(MemoryCookies::new());
    let prefs = prefs_with(&backend, &cookies);

    prefs.store(&keys::THEME, "dark");

    assert_eq!(prefs.lookup("theme").as_deref(), Some("dark"));
    assert_eq!(cookies.assignments(), vec!["theme=dark; path=/; max-age=31536000; samesite=lax".to_owned()]);
    assert_eq!(prefs.cookie("theme").as_deref(), Some("dark"));
}

#[test]
fn store_does_not_touch_cookies_for_durable_entries() {
    let cookies = Rc::new(MemoryCookies::new());
    let prefs = prefs_with(&Rc::new(MemoryBackend::new()), &cookies);
    prefs.store(&keys::FONT, "lato");
    assert!(cookies.assignments().is_empty());
}

#[test]
fn cookie_write_survives_failed_durable_write() {
    let cookies = Rc::new(MemoryCookies::new());
    let prefs = prefs_with(&Rc::new(MemoryBackend::unavailable()), &cookies);
    prefs.store(&keys::THEME, "dark");
    assert_eq!(prefs.entry(&keys::THEME), "dark");
}

#[test]
fn entry_prefers_cookie_for_session_scope() {
    let backend = Rc::new(MemoryBackend::with_entries([("theme", "light")]));
    let cookies = Rc::new(MemoryCookies::with_cookie("theme", "dracula"));
    let prefs = prefs_with(&backend, &cookies);
    assert_eq!(prefs.entry(&keys::THEME), "dracula");
}

// =============================================================
// JSON entries
// =============================================================

#[test]
fn json_round_trip() {
    let prefs = Preferences::in_memory();
    let mut map = BTreeMap::new();
    map.insert("reminders".to_owned(), false);
    prefs.set_json("__GrylliSidebar", &map);
    let back: BTreeMap<String, bool> = prefs.get_json("__GrylliSidebar").unwrap_or_default();
    assert_eq!(back, map);
}

#[test]
fn malformed_json_reads_as_absent() {
    let backend = Rc::new(MemoryBackend::with_entries([("__GrylliSidebar", "{not json")]));
    let prefs = prefs_with(&backend, &Rc::new(MemoryCookies::new()));
    let value: Option<BTreeMap<String, bool>> = prefs.get_json("__GrylliSidebar");
    assert!(value.is_none());
}

// =============================================================
// Bulk operations
// =============================================================

#[test]
fn get_all_lists_entries() {
    let backend = Rc::new(MemoryBackend::with_entries([("a", "1"), ("b", "2")]));
    let prefs = prefs_with(&backend, &Rc::new(MemoryCookies::new()));
    let all = prefs.get_all();
    assert_eq!(all.len(), 2);
    assert_eq!(all.get("b").map(String::as_str), Some("2"));
}

#[test]
fn get_all_is_empty_when_unavailable() {
    let prefs = Preferences::new(Rc::new(MemoryBackend::unavailable()), Rc::new(MemoryCookies::new()));
    assert!(prefs.get_all().is_empty());
}

#[test]
fn clear_all_empties_store_and_expires_cookies() {
    let backend = Rc::new(MemoryBackend::with_entries([("grylli-font", "lato")]));
    let cookies = Rc::new(MemoryCookies::with_cookie("theme", "dark"));
    let prefs = prefs_with(&backend, &cookies);

    prefs.clear_all();

    assert!(prefs.get_all().is_empty());
    assert_eq!(prefs.cookie("theme"), None);
    assert_eq!(prefs.entry(&keys::THEME), "light");
}
