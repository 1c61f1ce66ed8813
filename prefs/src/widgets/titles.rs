//! Document-title setters.
//!
//! `action-title` sets the title from its `title` value once the partial load
//! it triggered has arrived, or on an explicit `setTitle`. Attaching alone
//! leaves the title alone: a list page carries one of these per action link.
//! `profile-title` takes the title from the `data-profile-title` attribute of
//! whatever element triggered a partial load inside it.

use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, unknown_method};

pub const ACTION_NAME: &str = "action-title";
pub const PROFILE_NAME: &str = "profile-title";

/// Attribute on a load trigger naming the title of the loaded view.
pub const PROFILE_TITLE_ATTR: &str = "data-profile-title";

pub struct ActionTitle<D: Document> {
    host: Host<D>,
    title: String,
}

/// # Errors
///
/// [`AttachError::MissingValue`] without a `title` value.
pub fn attach_action<D: Document + 'static>(
    host: Host<D>,
    _env: &AttachEnv,
) -> Result<Box<dyn Widget<D>>, AttachError> {
    let title = host.required_value("title")?;
    Ok(Box::new(ActionTitle { host, title }))
}

impl<D: Document> Widget<D> for ActionTitle<D> {
    fn on_after_load(&mut self, trigger: &D::Element) {
        if self.host.element.contains(trigger) {
            self.host.doc.set_title(&self.title);
        }
    }

    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        match method {
            "setTitle" => {
                self.host.doc.set_title(&self.title);
                Effect::None
            }
            _ => unknown_method(ACTION_NAME, method),
        }
    }
}

pub struct ProfileTitle<D: Document> {
    doc: D,
}

/// # Errors
///
/// Never fails; the signature matches the other factories.
pub fn attach_profile<D: Document + 'static>(
    host: Host<D>,
    _env: &AttachEnv,
) -> Result<Box<dyn Widget<D>>, AttachError> {
    Ok(Box::new(ProfileTitle { doc: host.doc }))
}

impl<D: Document> Widget<D> for ProfileTitle<D> {
    fn on_after_load(&mut self, trigger: &D::Element) {
        match trigger.attr(PROFILE_TITLE_ATTR).filter(|t| !t.trim().is_empty()) {
            Some(title) => self.doc.set_title(title.trim()),
            None => log::debug!("{PROFILE_NAME}: trigger has no {PROFILE_TITLE_ATTR}"),
        }
    }

    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        unknown_method(PROFILE_NAME, method)
    }
}

#[cfg(test)]
#[path = "titles_test.rs"]
mod titles_test;
