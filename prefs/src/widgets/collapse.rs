//! `collapse`: a navigation section whose open state survives navigation.
//!
//! State for every section lives in one JSON object under
//! [`keys::SECTION_STATE`], keyed by the section's `id` value. A section with
//! no entry is open.

use std::collections::BTreeMap;

use crate::consts::{HIDDEN, ROTATE_0, ROTATE_180};
use crate::dom::{Document, Element};
use crate::error::AttachError;
use crate::keys::{self, COLLAPSE_STATE_PREFIX};
use crate::store::Preferences;

use super::{AttachEnv, Effect, Host, Widget, unknown_method};

pub const NAME: &str = "collapse";

pub struct Collapse<D: Document> {
    host: Host<D>,
    prefs: Preferences,
    id: String,
}

/// # Errors
///
/// [`AttachError::MissingValue`] without an `id` value.
pub fn attach<D: Document + 'static>(host: Host<D>, env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    let id = host.required_value("id")?;
    Ok(Box::new(Collapse { host, prefs: env.prefs.clone(), id }))
}

impl<D: Document> Collapse<D> {
    fn stored_open(&self) -> bool {
        section_open(&self.prefs, &self.id)
    }

    fn render(&self, open: bool) {
        let contents = self.host.targets("content");
        let icons = self.host.targets("icon");
        for content in &contents {
            content.toggle_class(HIDDEN, !open);
        }
        for icon in &icons {
            icon.toggle_class(ROTATE_180, open);
            icon.toggle_class(ROTATE_0, !open);
        }
    }

    /// What the page shows now: open unless the first content target is hidden.
    fn shown_open(&self) -> bool {
        self.host.target("content").is_none_or(|c| !c.has_class(HIDDEN))
    }
}

impl<D: Document> Widget<D> for Collapse<D> {
    fn connect(&mut self) {
        self.render(self.stored_open());
    }

    fn on_partial_swap(&mut self) {
        self.render(self.stored_open());
    }

    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        match method {
            "toggle" => {
                let open = !self.shown_open();
                self.render(open);
                set_section_open(&self.prefs, &self.id, open);
                Effect::None
            }
            _ => unknown_method(NAME, method),
        }
    }
}

/// Whether section `id` is open. Missing or malformed state reads as open.
#[must_use]
pub fn section_open(prefs: &Preferences, id: &str) -> bool {
    prefs
        .get_json::<BTreeMap<String, bool>>(keys::SECTION_STATE)
        .and_then(|map| map.get(id).copied())
        .unwrap_or(true)
}

/// Record section `id` as open or closed, keeping other sections' entries.
pub fn set_section_open(prefs: &Preferences, id: &str, open: bool) {
    let mut map = prefs.get_json::<BTreeMap<String, bool>>(keys::SECTION_STATE).unwrap_or_default();
    map.insert(id.to_owned(), open);
    prefs.set_json(keys::SECTION_STATE, &map);
}

/// Pre-paint hints: for each `collapse-state-<id>` entry add `expand-<id>`
/// (value `true`) or `collapse-<id>` (anything else) to `<html>` so
/// stylesheets can hide closed sections before any controller attaches.
pub fn preload_classes<D: Document>(prefs: &Preferences, doc: &D) -> Vec<String> {
    let root = doc.root();
    let mut added = Vec::new();
    for (key, value) in prefs.get_all() {
        let Some(id) = key.strip_prefix(COLLAPSE_STATE_PREFIX) else {
            continue;
        };
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_')) {
            continue;
        }
        let class = if value == "true" { format!("expand-{id}") } else { format!("collapse-{id}") };
        root.remove_class(&format!("expand-{id}"));
        root.remove_class(&format!("collapse-{id}"));
        root.add_class(&class);
        added.push(class);
    }
    added
}

#[cfg(test)]
#[path = "collapse_test.rs"]
mod collapse_test;
