//! Style Applicator: one rule per preference category.
//!
//! DESIGN
//! ======
//! Every rule has the same shape: validate the value against the category's
//! allow-list, remove every variant the category owns from its element, add
//! the single variant for the value, then mirror the value into the
//! category's `<select>` if the page has one. Removing before adding is what
//! makes a rule idempotent; applying `dark` twice leaves exactly the state of
//! applying it once.
//!
//! Rules never persist. Persisting is the scheduler's job, after a rule has
//! accepted the value.
//!
//! Theme names and background patterns come from fetched catalogs. Until the
//! theme catalog arrives, theme values are checked for shape only; until the
//! pattern catalog arrives, the background rule reports
//! [`StyleError::CatalogPending`] and leaves the page untouched.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::fmt;

use crate::catalog::{self, PatternCatalog, ThemeCatalog};
use crate::config::ThemeMode;
use crate::consts::{
    CONTRAST_CLASSES, DARK_CLASS, FALLBACK_THEME, FONT_SIZE_MAX, FONT_SIZE_MIN, HIDDEN, LEADING_CLASSES,
    MAIN_CONTENT_SELECTOR, ROTATE_180, ROUNDED_CLASSES, SIDEBAR_NARROW, SIDEBAR_WIDE, THEME_ATTR,
    TRACKING_CLASSES,
};
use crate::dom::{Document, Element, target_selector};
use crate::error::StyleError;
use crate::keys::{self, PrefKey};

/// A reconciled preference category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Theme,
    Contrast,
    FontFamily,
    FontSize,
    Roundedness,
    LetterSpacing,
    LineHeight,
    Background,
    SidebarCollapse,
}

/// When a category's rule may run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// As soon as the value is known.
    Immediate,
    /// After layout has settled (two animation frames).
    AfterLayout,
}

impl Category {
    /// Every category, in initial-load order.
    pub const ALL: [Self; 9] = [
        Self::Theme,
        Self::Contrast,
        Self::FontFamily,
        Self::FontSize,
        Self::Roundedness,
        Self::LetterSpacing,
        Self::LineHeight,
        Self::Background,
        Self::SidebarCollapse,
    ];

    /// Preference entry backing the category.
    #[must_use]
    pub const fn key(self) -> &'static PrefKey {
        match self {
            Self::Theme => &keys::THEME,
            Self::Contrast => &keys::CONTRAST,
            Self::FontFamily => &keys::FONT,
            Self::FontSize => &keys::FONT_SIZE,
            Self::Roundedness => &keys::ROUNDED,
            Self::LetterSpacing => &keys::TRACKING,
            Self::LineHeight => &keys::LINE_HEIGHT,
            Self::Background => &keys::BACKGROUND,
            Self::SidebarCollapse => &keys::SIDEBAR_COLLAPSED,
        }
    }

    /// `data-controller` name of the category's picker.
    #[must_use]
    pub const fn controller(self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Contrast => "contrast",
            Self::FontFamily => "font",
            Self::FontSize => "font-size",
            Self::Roundedness => "roundedness",
            Self::LetterSpacing => "tracking",
            Self::LineHeight => "line-height",
            Self::Background => "background",
            Self::SidebarCollapse => "sidebar",
        }
    }

    /// Target name of the picker's `<select>`, if the category has one.
    #[must_use]
    pub const fn select_target(self) -> Option<&'static str> {
        match self {
            Self::LetterSpacing | Self::LineHeight => Some("selector"),
            Self::SidebarCollapse => None,
            _ => Some("select"),
        }
    }

    #[must_use]
    pub fn from_controller(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.controller() == name)
    }

    #[must_use]
    pub const fn phase(self) -> Phase {
        match self {
            Self::SidebarCollapse => Phase::AfterLayout,
            _ => Phase::Immediate,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Theme => "theme",
            Self::Contrast => "contrast",
            Self::FontFamily => "font",
            Self::FontSize => "font size",
            Self::Roundedness => "roundedness",
            Self::LetterSpacing => "letter spacing",
            Self::LineHeight => "line height",
            Self::Background => "background",
            Self::SidebarCollapse => "sidebar collapse",
        })
    }
}

/// Load state of a fetched allow-list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Catalog<T> {
    #[default]
    Pending,
    Loaded(T),
    Failed,
}

/// Result of a rule that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// The document now reflects this canonical value.
    Value(String),
    /// The category cannot be applied on this page load (its catalog fetch
    /// failed). Nothing was changed.
    Unavailable,
}

/// The per-category style rules plus the catalogs they validate against.
#[derive(Clone, Debug, Default)]
pub struct Applicator {
    mode: ThemeMode,
    base_path: String,
    themes: Catalog<ThemeCatalog>,
    patterns: Catalog<PatternCatalog>,
}

impl Applicator {
    #[must_use]
    pub fn new(mode: ThemeMode, base_path: &str) -> Self {
        Self { mode, base_path: base_path.to_owned(), themes: Catalog::Pending, patterns: Catalog::Pending }
    }

    pub fn set_themes(&mut self, themes: Catalog<ThemeCatalog>) {
        self.themes = themes;
    }

    pub fn set_patterns(&mut self, patterns: Catalog<PatternCatalog>) {
        self.patterns = patterns;
    }

    #[must_use]
    pub fn themes(&self) -> &Catalog<ThemeCatalog> {
        &self.themes
    }

    #[must_use]
    pub fn patterns(&self) -> &Catalog<PatternCatalog> {
        &self.patterns
    }

    /// Value a category takes when nothing valid is stored.
    #[must_use]
    pub fn default_value(&self, category: Category) -> String {
        match (category, &self.themes) {
            (Category::Theme, Catalog::Loaded(themes)) if self.mode == ThemeMode::Named => {
                themes.default_theme().to_owned()
            }
            (Category::Theme, _) => FALLBACK_THEME.to_owned(),
            _ => category.key().default.to_owned(),
        }
    }

    /// Check `value` against the category's allow-list and return its
    /// canonical stored form.
    ///
    /// # Errors
    ///
    /// [`StyleError::Rejected`] for a value outside the allow-list,
    /// [`StyleError::CatalogPending`] for a background before its catalog
    /// has loaded.
    pub fn validate(&self, category: Category, value: &str) -> Result<String, StyleError> {
        let value = value.trim();
        let rejected = || StyleError::Rejected { category, value: value.to_owned() };
        let canonical = match category {
            Category::Theme => match (self.mode, &self.themes) {
                (ThemeMode::Class, _) => ["light", DARK_CLASS].contains(&value).then(|| value.to_owned()),
                (ThemeMode::Named, Catalog::Loaded(themes)) => themes.contains(value).then(|| value.to_owned()),
                (ThemeMode::Named, _) => catalog::is_theme_name(value).then(|| value.to_owned()),
            },
            Category::Contrast => ["default", "low", "high"].contains(&value).then(|| value.to_owned()),
            Category::FontFamily => catalog::font_family(value).map(|_| value.to_owned()),
            Category::FontSize => parse_font_size(value).map(|n| n.to_string()),
            Category::Roundedness => ["default", "none", "lg", "xl"].contains(&value).then(|| value.to_owned()),
            Category::LetterSpacing => level_class(value, "tracking", &TRACKING_CLASSES),
            Category::LineHeight => level_class(value, "leading", &LEADING_CLASSES),
            Category::Background => match &self.patterns {
                Catalog::Pending => return Err(StyleError::CatalogPending { category }),
                Catalog::Loaded(patterns) => {
                    (value == "none" || patterns.contains_file(value)).then(|| value.to_owned())
                }
                Catalog::Failed => (value == "none").then(|| value.to_owned()),
            },
            Category::SidebarCollapse => ["true", "false"].contains(&value).then(|| value.to_owned()),
        };
        canonical.ok_or_else(rejected)
    }

    /// Apply `value` to the document.
    ///
    /// On success the document reflects exactly this value for the category.
    /// On error nothing was changed.
    ///
    /// # Errors
    ///
    /// Validation errors from [`Self::validate`], and
    /// [`StyleError::MissingTarget`] when the element a rule mutates is not on
    /// the page.
    pub fn apply<D: Document>(&self, doc: &D, category: Category, value: &str) -> Result<Applied, StyleError> {
        if category == Category::Background && matches!(self.patterns, Catalog::Failed) {
            log::debug!("background patterns unavailable; leaving background untouched");
            return Ok(Applied::Unavailable);
        }
        let value = self.validate(category, value)?;
        let root = doc.root();

        match category {
            Category::Theme => self.apply_theme(doc, &root, &value),
            Category::Contrast => {
                swap_class(&root, &CONTRAST_CLASSES, variant_class("contrast", &value, &["low", "high"]));
            }
            Category::FontFamily => {
                for class in catalog::font_classes() {
                    root.remove_class(&class);
                }
                if let Some(class) = catalog::font_class(&value) {
                    root.add_class(&class);
                }
            }
            Category::FontSize => root.set_style("font-size", &format!("{value}%")),
            Category::Roundedness => {
                swap_class(&root, &ROUNDED_CLASSES, variant_class("rounded", &value, &["none", "lg", "xl"]));
            }
            Category::LetterSpacing => swap_class(&root, &TRACKING_CLASSES, Some(value.clone())),
            Category::LineHeight => swap_class(&root, &LEADING_CLASSES, Some(value.clone())),
            Category::Background => self.apply_background(doc, &value)?,
            Category::SidebarCollapse => apply_sidebar(doc, value == "true")?,
        }

        mirror_select(doc, category, &value);
        log::debug!("applied {category} = {value}");
        Ok(Applied::Value(value))
    }

    fn apply_theme<D: Document>(&self, doc: &D, root: &D::Element, value: &str) {
        match self.mode {
            ThemeMode::Named => root.set_attr(THEME_ATTR, value),
            ThemeMode::Class => root.toggle_class(DARK_CLASS, value == DARK_CLASS),
        }
        for knob in doc.query_all(&target_selector(Category::Theme.controller(), "knob")) {
            knob.toggle_class(ROTATE_180, value == DARK_CLASS);
        }
        if let Catalog::Loaded(themes) = &self.themes {
            if self.mode == ThemeMode::Named {
                populate_select(doc, Category::Theme, &themes.options());
            }
        }
    }

    fn apply_background<D: Document>(&self, doc: &D, value: &str) -> Result<(), StyleError> {
        let target = doc
            .query(MAIN_CONTENT_SELECTOR)
            .ok_or_else(|| StyleError::MissingTarget { selector: MAIN_CONTENT_SELECTOR.to_owned() })?;
        let image = if value == "none" {
            "none".to_owned()
        } else {
            format!("url('{}/static/{value}')", self.base_path)
        };
        target.set_style("background-image", &image);
        if let Catalog::Loaded(patterns) = &self.patterns {
            populate_select(doc, Category::Background, &patterns.options());
        }
        Ok(())
    }
}

fn apply_sidebar<D: Document>(doc: &D, collapsed: bool) -> Result<(), StyleError> {
    let controller = Category::SidebarCollapse.controller();
    let desktop_selector = target_selector(controller, "desktop");
    let desktops = doc.query_all(&desktop_selector);
    if desktops.is_empty() {
        return Err(StyleError::MissingTarget { selector: desktop_selector });
    }
    for desktop in desktops {
        desktop.toggle_class(SIDEBAR_NARROW, collapsed);
        desktop.toggle_class(SIDEBAR_WIDE, !collapsed);
    }
    for label in doc.query_all(&target_selector(controller, "label")) {
        label.toggle_class(HIDDEN, collapsed);
    }
    for icon in doc.query_all(&target_selector(controller, "icon")) {
        icon.toggle_class(ROTATE_180, collapsed);
    }
    Ok(())
}

/// Remove every class in `family`, then add `class` if there is one.
fn swap_class<E: Element>(el: &E, family: &[&str], class: Option<String>) {
    for variant in family {
        el.remove_class(variant);
    }
    if let Some(class) = class {
        el.add_class(&class);
    }
}

/// `<prefix>-<value>` when `value` is one of the non-default variants.
fn variant_class(prefix: &str, value: &str, variants: &[&str]) -> Option<String> {
    variants.contains(&value).then(|| format!("{prefix}-{value}"))
}

/// Accept a bare level (`tight`) or its class (`tracking-tight`) and return
/// the class.
fn level_class(value: &str, prefix: &str, classes: &[&str]) -> Option<String> {
    let class = if value.starts_with(&format!("{prefix}-")) { value.to_owned() } else { format!("{prefix}-{value}") };
    classes.contains(&class.as_str()).then_some(class)
}

/// Parse `120` or `120%` within the accepted range.
fn parse_font_size(value: &str) -> Option<u16> {
    let digits = value.strip_suffix('%').unwrap_or(value);
    match digits.parse::<u16>() {
        Ok(n) if (FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&n) => Some(n),
        _ => None,
    }
}

fn mirror_select<D: Document>(doc: &D, category: Category, value: &str) {
    let Some(target) = category.select_target() else {
        return;
    };
    for select in doc.query_all(&target_selector(category.controller(), target)) {
        select.set_value(value);
    }
}

fn populate_select<D: Document>(doc: &D, category: Category, options: &[(String, String)]) {
    let Some(target) = category.select_target() else {
        return;
    };
    for select in doc.query_all(&target_selector(category.controller(), target)) {
        select.replace_options(options);
    }
}
