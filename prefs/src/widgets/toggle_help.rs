//! `toggle-help`: show or hide a help panel and keep the button label in sync.

use crate::consts::HIDDEN;
use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, unknown_method};

pub const NAME: &str = "toggle-help";

const DEFAULT_SHOW: &str = "Show Help";
const DEFAULT_HIDE: &str = "Hide Help";

pub struct ToggleHelp<D: Document> {
    panel: D::Element,
    label: D::Element,
    show_label: String,
    hide_label: String,
}

/// # Errors
///
/// [`AttachError::MissingTarget`] without `panel` and `label` targets.
pub fn attach<D: Document + 'static>(host: Host<D>, _env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    Ok(Box::new(ToggleHelp::<D> {
        panel: host.required_target("panel")?,
        label: host.required_target("label")?,
        show_label: host.value("showLabel").unwrap_or_else(|| DEFAULT_SHOW.to_owned()),
        hide_label: host.value("hideLabel").unwrap_or_else(|| DEFAULT_HIDE.to_owned()),
    }))
}

impl<D: Document> ToggleHelp<D> {
    fn update_label(&self) {
        let hidden = self.panel.has_class(HIDDEN);
        self.label.set_text(if hidden { &self.show_label } else { &self.hide_label });
    }
}

impl<D: Document> Widget<D> for ToggleHelp<D> {
    fn connect(&mut self) {
        self.update_label();
    }

    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        match method {
            "toggle" => {
                let hidden = self.panel.has_class(HIDDEN);
                self.panel.toggle_class(HIDDEN, !hidden);
                self.update_label();
                Effect::None
            }
            _ => unknown_method(NAME, method),
        }
    }
}

#[cfg(test)]
#[path = "toggle_help_test.rs"]
mod toggle_help_test;
