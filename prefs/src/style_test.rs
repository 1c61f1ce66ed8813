use super::*;
use crate::catalog::Pattern;
use crate::dom::{MemoryDocument, MemoryElement};

fn page() -> MemoryDocument {
    let doc = MemoryDocument::new();
    doc.append(&MemoryElement::new("main").with_attr("id", "main-content"));
    doc
}

fn loaded() -> Applicator {
    let mut app = Applicator::new(ThemeMode::Named, "/grylli");
    app.set_themes(Catalog::Loaded(ThemeCatalog::from_names(vec!["light".into(), "dark".into(), "cupcake".into()])));
    app.set_patterns(Catalog::Loaded(PatternCatalog::from_patterns(vec![
        Pattern { name: "none".into(), file: "none".into() },
        Pattern { name: "dots".into(), file: "patterns/dots.svg".into() },
    ])));
    app
}

fn snapshot(doc: &MemoryDocument) -> (Vec<String>, Option<String>, Option<String>) {
    let root = doc.root();
    (root.classes(), root.attr("data-theme"), root.style("font-size"))
}

// =============================================================
// Category metadata
// =============================================================

#[test]
fn controller_names_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::from_controller(category.controller()), Some(category));
    }
    assert_eq!(Category::from_controller("tabs"), None);
}

#[test]
fn only_sidebar_waits_for_layout() {
    let deferred: Vec<_> = Category::ALL.into_iter().filter(|c| c.phase() == Phase::AfterLayout).collect();
    assert_eq!(deferred, vec![Category::SidebarCollapse]);
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn every_category_is_idempotent() {
    let app = loaded();
    let cases = [
        (Category::Theme, "dark"),
        (Category::Contrast, "high"),
        (Category::FontFamily, "plexmono"),
        (Category::FontSize, "120"),
        (Category::Roundedness, "xl"),
        (Category::LetterSpacing, "wide"),
        (Category::LineHeight, "leading-loose"),
        (Category::Background, "patterns/dots.svg"),
        (Category::SidebarCollapse, "true"),
    ];
    for (category, value) in cases {
        let doc = page();
        doc.append(&MemoryElement::new("aside").with_attr("data-sidebar-target", "desktop"));
        app.apply(&doc, category, value).expect("first apply");
        let once = snapshot(&doc);
        let main_once = doc.query("#main-content").and_then(|m| m.style("background-image"));
        app.apply(&doc, category, value).expect("second apply");
        assert_eq!(snapshot(&doc), once, "{category} changed on reapply");
        assert_eq!(doc.query("#main-content").and_then(|m| m.style("background-image")), main_once);
    }
}

#[test]
fn switching_variant_leaves_only_the_new_class() {
    let app = loaded();
    let doc = page();
    app.apply(&doc, Category::Contrast, "low").expect("low");
    app.apply(&doc, Category::Contrast, "high").expect("high");
    assert_eq!(doc.root().classes(), vec!["contrast-high"]);

    app.apply(&doc, Category::Contrast, "default").expect("default");
    assert!(doc.root().classes().is_empty());
}

#[test]
fn roundedness_default_adds_nothing() {
    let app = loaded();
    let doc = page();
    app.apply(&doc, Category::Roundedness, "none").expect("none");
    app.apply(&doc, Category::Roundedness, "default").expect("default");
    assert!(doc.root().classes().is_empty());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn unknown_font_is_rejected_without_mutation() {
    let app = loaded();
    let doc = page();
    app.apply(&doc, Category::FontFamily, "lato").expect("lato");

    let err = app.apply(&doc, Category::FontFamily, "evil\" onload=\"x").expect_err("rejected");
    assert!(matches!(err, StyleError::Rejected { category: Category::FontFamily, .. }));
    assert_eq!(doc.root().classes(), vec!["font-lato"]);
}

#[test]
fn font_swap_keeps_unrelated_font_utilities() {
    let app = loaded();
    let doc = page();
    doc.root().add_class("font-bold");
    app.apply(&doc, Category::FontFamily, "inter").expect("inter");
    app.apply(&doc, Category::FontFamily, "vt323").expect("vt323");
    assert_eq!(doc.root().classes(), vec!["font-bold", "font-vt323"]);
}

#[test]
fn font_size_accepts_percent_suffix_and_range() {
    let app = loaded();
    assert_eq!(app.validate(Category::FontSize, "120%"), Ok("120".to_owned()));
    assert!(app.validate(Category::FontSize, "49").is_err());
    assert!(app.validate(Category::FontSize, "201").is_err());
    assert!(app.validate(Category::FontSize, "big").is_err());
}

#[test]
fn default_font_size_is_one_hundred_percent() {
    let app = loaded();
    let doc = page();
    let value = app.default_value(Category::FontSize);
    app.apply(&doc, Category::FontSize, &value).expect("default");
    assert_eq!(doc.root().style("font-size").as_deref(), Some("100%"));
}

#[test]
fn levels_canonicalise_to_class_names() {
    let app = loaded();
    assert_eq!(app.validate(Category::LetterSpacing, "tight"), Ok("tracking-tight".to_owned()));
    assert_eq!(app.validate(Category::LetterSpacing, "tracking-wide"), Ok("tracking-wide".to_owned()));
    assert_eq!(app.validate(Category::LineHeight, "loose"), Ok("leading-loose".to_owned()));
    assert!(app.validate(Category::LineHeight, "leading-huge").is_err());
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_before_catalog_checks_shape_only() {
    let app = Applicator::new(ThemeMode::Named, "/grylli");
    assert_eq!(app.default_value(Category::Theme), "light");
    assert!(app.validate(Category::Theme, "synthwave").is_ok());
    assert!(app.validate(Category::Theme, "a b").is_err());
}

#[test]
fn theme_with_catalog_requires_membership_and_fills_select() {
    let app = loaded();
    let doc = page();
    let select = MemoryElement::new("select").with_attr("data-theme-target", "select");
    let knob = MemoryElement::new("span").with_attr("data-theme-target", "knob");
    doc.append(&select);
    doc.append(&knob);

    assert!(app.validate(Category::Theme, "synthwave").is_err());
    app.apply(&doc, Category::Theme, "dark").expect("dark");

    assert_eq!(doc.root().attr("data-theme").as_deref(), Some("dark"));
    assert_eq!(select.value().as_deref(), Some("dark"));
    assert_eq!(select.options().len(), 3);
    assert!(knob.has_class("rotate-180"));

    app.apply(&doc, Category::Theme, "cupcake").expect("cupcake");
    assert!(!knob.has_class("rotate-180"));
}

#[test]
fn class_mode_theme_toggles_dark_class() {
    let app = Applicator::new(ThemeMode::Class, "/grylli");
    let doc = page();
    app.apply(&doc, Category::Theme, "dark").expect("dark");
    assert!(doc.root().has_class("dark"));
    assert_eq!(doc.root().attr("data-theme"), None);

    app.apply(&doc, Category::Theme, "light").expect("light");
    assert!(!doc.root().has_class("dark"));
    assert!(app.validate(Category::Theme, "cupcake").is_err());
}

// =============================================================
// Background
// =============================================================

#[test]
fn background_waits_for_catalog() {
    let app = Applicator::new(ThemeMode::Named, "/grylli");
    let doc = page();
    let err = app.apply(&doc, Category::Background, "none").expect_err("pending");
    assert_eq!(err, StyleError::CatalogPending { category: Category::Background });
    assert_eq!(doc.query("#main-content").and_then(|m| m.style("background-image")), None);
}

#[test]
fn failed_pattern_fetch_leaves_background_alone() {
    let mut app = Applicator::new(ThemeMode::Named, "/grylli");
    app.set_patterns(Catalog::Failed);
    let doc = page();
    assert_eq!(app.apply(&doc, Category::Background, "patterns/dots.svg"), Ok(Applied::Unavailable));
    assert_eq!(doc.query("#main-content").and_then(|m| m.style("background-image")), None);
}

#[test]
fn background_sets_url_and_none() {
    let app = loaded();
    let doc = page();
    let main = doc.query("#main-content").expect("main");

    app.apply(&doc, Category::Background, "patterns/dots.svg").expect("dots");
    assert_eq!(main.style("background-image").as_deref(), Some("url('/grylli/static/patterns/dots.svg')"));

    app.apply(&doc, Category::Background, "none").expect("none");
    assert_eq!(main.style("background-image").as_deref(), Some("none"));

    assert!(app.apply(&doc, Category::Background, "other.svg").is_err());
}

#[test]
fn background_without_main_content_is_missing_target() {
    let app = loaded();
    let doc = MemoryDocument::new();
    let err = app.apply(&doc, Category::Background, "none").expect_err("missing");
    assert!(matches!(err, StyleError::MissingTarget { .. }));
}

// =============================================================
// Sidebar
// =============================================================

#[test]
fn collapsed_sidebar_narrows_and_hides_labels() {
    let app = loaded();
    let doc = page();
    let desktop = MemoryElement::new("aside").with_attr("data-sidebar-target", "desktop").with_class("w-64");
    let label = MemoryElement::new("span").with_attr("data-sidebar-target", "label");
    let icon = MemoryElement::new("svg").with_attr("data-sidebar-target", "icon");
    doc.append(&desktop.clone().with_child(label.clone()).with_child(icon.clone()));

    app.apply(&doc, Category::SidebarCollapse, "true").expect("collapse");
    assert!(desktop.has_class("w-16"));
    assert!(!desktop.has_class("w-64"));
    assert!(label.has_class("hidden"));
    assert!(icon.has_class("rotate-180"));

    app.apply(&doc, Category::SidebarCollapse, "false").expect("expand");
    assert_eq!(desktop.classes(), vec!["w-64"]);
    assert!(!label.has_class("hidden"));
}

#[test]
fn sidebar_without_desktop_target_is_missing_target() {
    let app = loaded();
    let doc = page();
    assert!(matches!(
        app.apply(&doc, Category::SidebarCollapse, "true"),
        Err(StyleError::MissingTarget { .. })
    ));
}

#[test]
fn select_is_mirrored_for_selector_targets() {
    let app = loaded();
    let doc = page();
    let selector = MemoryElement::new("select").with_attr("data-tracking-target", "selector");
    doc.append(&selector);
    app.apply(&doc, Category::LetterSpacing, "tight").expect("tight");
    assert_eq!(selector.value().as_deref(), Some("tracking-tight"));
}
