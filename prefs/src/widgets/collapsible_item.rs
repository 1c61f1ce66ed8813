//! `collapsible-item`: an inline disclosure. Starts from the `open` value and
//! is never persisted.

use crate::consts::{HIDDEN, ROTATE_90};
use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, unknown_method};

pub const NAME: &str = "collapsible-item";

pub struct CollapsibleItem<D: Document> {
    host: Host<D>,
    open: bool,
}

/// # Errors
///
/// [`AttachError::InvalidValue`] when `open` is not a boolean.
pub fn attach<D: Document + 'static>(host: Host<D>, _env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    let open = host.bool_value("open")?.unwrap_or(false);
    Ok(Box::new(CollapsibleItem { host, open }))
}

impl<D: Document> CollapsibleItem<D> {
    fn render(&self) {
        if let Some(content) = self.host.target("content") {
            content.toggle_class(HIDDEN, !self.open);
        }
        if let Some(icon) = self.host.target("icon") {
            icon.toggle_class(ROTATE_90, self.open);
        }
    }
}

impl<D: Document> Widget<D> for CollapsibleItem<D> {
    fn connect(&mut self) {
        self.render();
    }

    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        match method {
            "toggle" => {
                self.open = !self.open;
                self.render();
                Effect::None
            }
            _ => unknown_method(NAME, method),
        }
    }
}

#[cfg(test)]
#[path = "collapsible_item_test.rs"]
mod collapsible_item_test;
