//! `role-modal`: change a user's role from the user list.
//!
//! The opening element carries `data-role-modal-params-{id,username,role}`.
//! The form action is the page's role-change base URL with its `0` user id
//! segment replaced by the selected id.

use crate::consts::HIDDEN;
use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, unknown_method};

pub const NAME: &str = "role-modal";

const PARAM_ID: &str = "data-role-modal-params-id";
const PARAM_USERNAME: &str = "data-role-modal-params-username";
const PARAM_ROLE: &str = "data-role-modal-params-role";

/// Labels for the instructions toggle. Plain data attributes, not values.
const SHOW_TEXT_ATTR: &str = "data-role-modal-show-text";
const HIDE_TEXT_ATTR: &str = "data-role-modal-hide-text";

pub struct RoleModal<D: Document> {
    host: Host<D>,
    role_change_base: String,
    show_text: Option<String>,
    hide_text: Option<String>,
    showing_instructions: bool,
}

/// # Errors
///
/// [`AttachError::MissingValue`] when the page has no role-change base URL,
/// [`AttachError::MissingTarget`] without `modal` and `form` targets.
pub fn attach<D: Document + 'static>(host: Host<D>, env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    let role_change_base = env.config.role_change_base.clone().ok_or_else(|| AttachError::MissingValue {
        controller: NAME.to_owned(),
        key: "roleChangeBase".to_owned(),
    })?;
    host.required_target("modal")?;
    host.required_target("form")?;
    Ok(Box::new(RoleModal {
        show_text: host.element.attr(SHOW_TEXT_ATTR),
        hide_text: host.element.attr(HIDE_TEXT_ATTR),
        host,
        role_change_base,
        showing_instructions: false,
    }))
}

/// Replace the `0` placeholder segment of `base` with `id`.
///
/// Returns `None` when `id` is not a plain identifier or `base` has no
/// placeholder segment.
#[must_use]
pub fn role_change_action(base: &str, id: &str) -> Option<String> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return None;
    }
    let mut segments: Vec<&str> = base.split('/').collect();
    let slot = segments.iter().position(|s| *s == "0")?;
    segments[slot] = id;
    Some(segments.join("/"))
}

impl<D: Document> RoleModal<D> {
    fn open(&self, source: &D::Element) {
        let Some(id) = source.attr(PARAM_ID) else {
            log::warn!("{NAME}: opener has no user id");
            return;
        };
        let Some(action) = role_change_action(&self.role_change_base, &id) else {
            log::warn!("{NAME}: cannot build role change URL for `{id}`");
            return;
        };
        let username = source.attr(PARAM_USERNAME).unwrap_or_default();
        let role = source.attr(PARAM_ROLE).unwrap_or_default();

        for input in self.host.targets("userIdInput") {
            input.set_value(&id);
        }
        for name in self.host.targets("username") {
            name.set_text(&username);
        }
        for radio in self.host.targets("roleInputs") {
            radio.set_checked(radio.attr("value").as_deref() == Some(role.as_str()));
        }
        for form in self.host.targets("form") {
            form.set_attr("action", &action);
        }
        for button in self.host.targets("saveButton") {
            button.set_disabled(true);
        }
        self.set_modal(true);
    }

    fn set_modal(&self, open: bool) {
        for modal in self.host.targets("modal") {
            modal.toggle_class(HIDDEN, !open);
        }
    }
}

impl<D: Document> Widget<D> for RoleModal<D> {
    fn handle(&mut self, method: &str, source: &D::Element) -> Effect {
        match method {
            "openModal" => self.open(source),
            "closeModal" => self.set_modal(false),
            "enableSave" => {
                for button in self.host.targets("saveButton") {
                    button.set_disabled(false);
                }
            }
            "toggleInstructions" => {
                self.showing_instructions = !self.showing_instructions;
                for panel in self.host.targets("instructions") {
                    panel.toggle_class(HIDDEN, !self.showing_instructions);
                }
                let label = if self.showing_instructions { &self.hide_text } else { &self.show_text };
                if let (Some(label), Some(text)) = (label, self.host.target("toggleText")) {
                    text.set_text(label);
                }
            }
            _ => return unknown_method(NAME, method),
        }
        Effect::None
    }
}

#[cfg(test)]
#[path = "role_modal_test.rs"]
mod role_modal_test;
