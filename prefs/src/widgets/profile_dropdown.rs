//! `profile-dropdown`: the account menu. Opens from its button, closes on any
//! click outside its container, and mirrors the state into `aria-expanded`.

use crate::consts::HIDDEN;
use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, unknown_method};

pub const NAME: &str = "profile-dropdown";

pub struct ProfileDropdown<D: Document> {
    button: D::Element,
    menu: D::Element,
    container: D::Element,
}

/// # Errors
///
/// [`AttachError::MissingTarget`] without `button` and `menu` targets. The
/// container defaults to the host element.
pub fn attach<D: Document + 'static>(host: Host<D>, _env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    let button = host.required_target("button")?;
    let menu = host.required_target("menu")?;
    let container = host.target("container").unwrap_or_else(|| host.element.clone());
    Ok(Box::new(ProfileDropdown::<D> { button, menu, container }))
}

impl<D: Document> ProfileDropdown<D> {
    fn set_open(&self, open: bool) {
        self.menu.toggle_class(HIDDEN, !open);
        self.button.set_attr("aria-expanded", if open { "true" } else { "false" });
    }

    fn is_open(&self) -> bool {
        !self.menu.has_class(HIDDEN)
    }
}

impl<D: Document> Widget<D> for ProfileDropdown<D> {
    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        match method {
            "toggle" => {
                self.set_open(!self.is_open());
                Effect::None
            }
            _ => unknown_method(NAME, method),
        }
    }

    fn on_document_click(&mut self, target: &D::Element) {
        if self.is_open() && !self.container.contains(target) {
            self.set_open(false);
        }
    }
}

#[cfg(test)]
#[path = "profile_dropdown_test.rs"]
mod profile_dropdown_test;
