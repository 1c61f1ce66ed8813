//! `list-toggle`: table or card rendering of a list, remembered per list.
//!
//! The storage key comes from the `storageKey` value (default `listView`), so
//! several lists on different pages keep separate choices. An optional
//! instructions panel toggles independently of the view.
//!
//! `apprise-list-toggle` is the same widget under another name.
//! `webhook-list-toggle` defaults to its own key and shows the instructions
//! panel only next to the table.

use crate::consts::{HIDDEN, VIEW_BUTTON_OFF, VIEW_BUTTON_ON};
use crate::dom::{Document, Element};
use crate::error::AttachError;
use crate::keys;
use crate::store::Preferences;

use super::{AttachEnv, Effect, Host, Widget, swap_classes, unknown_method};

pub const NAME: &str = "list-toggle";
pub const APPRISE_NAME: &str = "apprise-list-toggle";
pub const WEBHOOK_NAME: &str = "webhook-list-toggle";

/// Which rendering of the list is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Table,
    Card,
}

impl View {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Card => "card",
        }
    }

    /// Stored value to view. Anything but `card` is the table.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "card" { Self::Card } else { Self::Table }
    }
}

pub struct ListToggle<D: Document> {
    host: Host<D>,
    prefs: Preferences,
    storage_key: String,
    show_label: Option<String>,
    hide_label: Option<String>,
    instructions_follow_view: bool,
}

/// # Errors
///
/// [`AttachError::MissingTarget`] without both view targets.
pub fn attach<D: Document + 'static>(host: Host<D>, env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    host.required_target("tableView")?;
    host.required_target("cardView")?;
    let webhook = host.controller == WEBHOOK_NAME;
    let default_key = if webhook { keys::WEBHOOK_LIST_VIEW } else { keys::LIST_VIEW };
    let storage_key = host.value("storageKey").unwrap_or_else(|| default_key.name.to_owned());
    Ok(Box::new(ListToggle {
        show_label: host.value("showLabel"),
        hide_label: host.value("hideLabel"),
        instructions_follow_view: webhook,
        host,
        prefs: env.prefs.clone(),
        storage_key,
    }))
}

impl<D: Document> ListToggle<D> {
    fn show(&self, view: View) {
        let card = view == View::Card;
        for el in self.host.targets("cardView") {
            el.toggle_class(HIDDEN, !card);
        }
        for el in self.host.targets("tableView") {
            el.toggle_class(HIDDEN, card);
        }
        for btn in self.host.targets("cardBtn") {
            swap_classes(&btn, card, &VIEW_BUTTON_ON, &VIEW_BUTTON_OFF);
        }
        for btn in self.host.targets("tableBtn") {
            swap_classes(&btn, !card, &VIEW_BUTTON_ON, &VIEW_BUTTON_OFF);
        }
        if self.instructions_follow_view {
            for el in self.host.targets("instructions") {
                el.toggle_class(HIDDEN, card);
            }
        }
    }

    fn select(&self, view: View) {
        self.show(view);
        self.prefs.set(&self.storage_key, view.as_str());
    }

    fn update_instruction_label(&self) {
        let (Some(instructions), Some(text)) = (self.host.target("instructions"), self.host.target("toggleText"))
        else {
            return;
        };
        let label = if instructions.has_class(HIDDEN) { &self.show_label } else { &self.hide_label };
        if let Some(label) = label {
            text.set_text(label);
        }
    }
}

impl<D: Document> Widget<D> for ListToggle<D> {
    fn connect(&mut self) {
        let stored = self.prefs.get(&self.storage_key, keys::LIST_VIEW.default);
        self.show(View::parse(&stored));
        self.update_instruction_label();
    }

    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        match method {
            "showTable" => self.select(View::Table),
            "showCard" => self.select(View::Card),
            "toggleInstructions" => {
                if let Some(instructions) = self.host.target("instructions") {
                    let hidden = instructions.has_class(HIDDEN);
                    instructions.toggle_class(HIDDEN, !hidden);
                    self.update_instruction_label();
                }
            }
            _ => return unknown_method(self.host.controller, method),
        }
        Effect::None
    }
}

#[cfg(test)]
#[path = "list_toggle_test.rs"]
mod list_toggle_test;
