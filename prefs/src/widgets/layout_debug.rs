//! `layout-debug`: diagnostics panel for the page layout.
//!
//! Each known section target is filled with a snapshot of one aspect of the
//! page. `export` turns the filled targets into a plain-text report,
//! `clearAll` wipes stored preferences and cookies, and `preview` loads one
//! of a fixed set of pages into the preview frame.

use serde::{Deserialize, Serialize};

use crate::dom::{Document, Element};
use crate::error::AttachError;
use crate::keys::{self, DEBUG_PAGES};
use crate::store::Preferences;

use super::{AttachEnv, Effect, Host, Widget, unknown_method};

pub const NAME: &str = "layout-debug";

pub const REPORT_FILENAME: &str = "grylli_layout_debug.txt";

const REPORT_HEADER: &str = "GRYLLI LAYOUT DEBUG REPORT\n===========================\n\n";

/// Sections longer than this are replaced by a marker in the report.
const SNAPSHOT_LIMIT: usize = 5000;

const CHOOSE_PAGE: &str = "Choose a Page...";

/// Section targets in report order.
pub const SECTIONS: [&str; 10] = [
    "themeDebug",
    "localStorageDebug",
    "cookiesDebug",
    "stimulusControllersDebug",
    "stimulusTargetsDebug",
    "ariaDebug",
    "sidebarDebug",
    "collapseDebug",
    "themeToggleDebug",
    "routeDebug",
];

/// Pages the preview frame may load, with their labels.
pub const PREVIEW_PAGES: [(&str, &str); 5] = [
    ("/grylli/admin/users/", "List Users"),
    ("/grylli/email/", "List Emails"),
    ("/grylli/messages/", "List Messages"),
    ("/grylli/reminders/", "List Reminders"),
    ("/grylli/admin/smtp/", "List SMTP"),
];

/// Pages always present in the saved debug page list.
const PRELOAD_PAGES: [(&str, &str); 4] = [
    ("List Users", "/grylli/admin/users/"),
    ("List Emails", "/grylli/email/"),
    ("List Messages", "/grylli/messages/"),
    ("List Reminders", "/grylli/reminders/"),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugPage {
    pub label: String,
    pub url: String,
}

/// Merge the preload pages into the saved list (by url), sort by label and
/// save the result.
pub fn sync_debug_pages(prefs: &Preferences) -> Vec<DebugPage> {
    let mut pages: Vec<DebugPage> = prefs.get_json(DEBUG_PAGES).unwrap_or_default();
    for (label, url) in PRELOAD_PAGES {
        if !pages.iter().any(|p| p.url == url) {
            pages.push(DebugPage { label: label.to_owned(), url: url.to_owned() });
        }
    }
    pages.sort_by(|a, b| a.label.cmp(&b.label));
    prefs.set_json(DEBUG_PAGES, &pages);
    pages
}

/// Heading for a section target: `localStorageDebug` reads `Local Storage`.
#[must_use]
pub fn section_title(target: &str) -> String {
    let mut spaced = String::with_capacity(target.len() + 4);
    for ch in target.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    let trimmed = spaced.strip_suffix("Debug").unwrap_or(spaced.as_str()).trim_end();
    let words = trimmed.replace("Dom", "DOM").replace("Css", "CSS");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Plain-text report from `(target, text)` pairs. Empty sections are left out.
#[must_use]
pub fn build_report(sections: &[(&str, String)]) -> String {
    let mut out = String::from(REPORT_HEADER);
    for (target, text) in sections.iter().filter(|(_, text)| !text.is_empty()) {
        let content = if text.chars().count() > SNAPSHOT_LIMIT { "[Truncated snapshot]\n" } else { text };
        out.push_str(&format!("## {}\n{content}\n\n", section_title(target)));
    }
    out
}

pub struct LayoutDebug<D: Document> {
    host: Host<D>,
    prefs: Preferences,
}

/// # Errors
///
/// Never fails; every target is optional.
pub fn attach<D: Document + 'static>(host: Host<D>, env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    Ok(Box::new(LayoutDebug { host, prefs: env.prefs.clone() }))
}

impl<D: Document> LayoutDebug<D> {
    fn snapshot(&self, section: &str) -> Option<String> {
        let doc = &self.host.doc;
        let text = match section {
            "themeDebug" => {
                let root = doc.root();
                let dark = root.has_class("dark") || root.attr("data-theme").as_deref() == Some("dark");
                format!(
                    "Theme: {}\n<html> classes: {}\ndata-theme: {}",
                    if dark { "Dark" } else { "Light" },
                    root.classes().join(" "),
                    root.attr("data-theme").unwrap_or_else(|| "not set".to_owned()),
                )
            }
            "localStorageDebug" => {
                let lines: Vec<String> = self.prefs.get_all().iter().map(|(k, v)| format!("{k}: {v}")).collect();
                format!("Local Storage Keys:\n{}", lines.join("\n"))
            }
            "cookiesDebug" => format!("Cookies: {}", self.prefs.cookie_header()),
            "stimulusControllersDebug" => format!("Controllers:\n{}", attr_list(doc, "data-controller")),
            "stimulusTargetsDebug" => format!("Targets:\n{}", attr_list(doc, "data-target")),
            "ariaDebug" => format!("ARIA Roles:\n{}", attr_list(doc, "role")),
            "sidebarDebug" => match doc.query("[data-controller~=\"sidebar\"]") {
                Some(_) => format!("Sidebar found. Collapsed: {}", self.prefs.entry(&keys::SIDEBAR_COLLAPSED) == "true"),
                None => "Sidebar not found.".to_owned(),
            },
            "collapseDebug" => {
                format!("Collapse sections: {}", doc.query_all("[data-controller~=\"collapse\"]").len())
            }
            "themeToggleDebug" => match doc.query("[data-controller~=\"theme\"]") {
                Some(_) => format!(
                    "Theme toggle present. Stored: {}",
                    self.prefs.find_entry(&keys::THEME).unwrap_or_else(|| "not set".to_owned())
                ),
                None => "Theme toggle not found.".to_owned(),
            },
            "routeDebug" => format!("Route: {}\nTitle: {}", doc.path(), doc.title()),
            _ => return None,
        };
        Some(text)
    }

    /// Fill every section target present in the panel.
    fn refresh(&self) {
        for section in SECTIONS {
            let Some(target) = self.host.target(section) else {
                continue;
            };
            if let Some(text) = self.snapshot(section) {
                target.set_text(&text);
            }
        }
    }

    fn fill_page_select(&self) {
        let Some(select) = self.host.target("pageSelect") else {
            return;
        };
        let current = self.host.doc.path();
        let mut options = vec![(String::new(), CHOOSE_PAGE.to_owned())];
        options.extend(
            PREVIEW_PAGES
                .iter()
                .filter(|(url, _)| *url != current)
                .map(|(url, label)| ((*url).to_owned(), (*label).to_owned())),
        );
        select.replace_options(&options);
    }

    fn preview(&self, source: &D::Element) {
        let Some(path) = source.value().filter(|v| !v.is_empty()) else {
            return;
        };
        let Some(frame) = self.host.target("preview") else {
            return;
        };
        if PREVIEW_PAGES.iter().any(|(url, _)| *url == path) {
            frame.set_attr("src", &path);
        } else {
            log::warn!("{NAME}: blocked preview of {path}");
        }
    }

    fn report(&self) -> String {
        let sections: Vec<(&str, String)> = SECTIONS
            .iter()
            .filter_map(|section| self.host.target(section).map(|t| (*section, t.text())))
            .collect();
        build_report(&sections)
    }
}

impl<D: Document> Widget<D> for LayoutDebug<D> {
    fn connect(&mut self) {
        let pages = sync_debug_pages(&self.prefs);
        log::debug!("{NAME}: {} debug pages", pages.len());
        self.fill_page_select();
        self.refresh();
    }

    fn handle(&mut self, method: &str, source: &D::Element) -> Effect {
        match method {
            "refresh" => {
                self.refresh();
                Effect::None
            }
            "preview" => {
                self.preview(source);
                Effect::None
            }
            "export" => Effect::Download { filename: REPORT_FILENAME.to_owned(), text: self.report() },
            "clearAll" => {
                self.prefs.clear_all();
                Effect::Reload
            }
            _ => unknown_method(NAME, method),
        }
    }
}

/// Values of `attr` across the page, comma separated.
fn attr_list<D: Document>(doc: &D, attr: &str) -> String {
    doc.query_all(&format!("[{attr}]")).iter().filter_map(|el| el.attr(attr)).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
#[path = "layout_debug_test.rs"]
mod layout_debug_test;
