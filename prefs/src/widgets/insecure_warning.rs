//! `insecure-warning`: reveal a banner when the page is served over plain
//! HTTP from anywhere but `localhost`.

use crate::consts::HIDDEN;
use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, unknown_method};

pub const NAME: &str = "insecure-warning";

/// Whether a page at `protocol`/`hostname` sends credentials in the clear.
#[must_use]
pub fn is_insecure(protocol: &str, hostname: &str) -> bool {
    protocol == "http:" && hostname != "localhost"
}

pub struct InsecureWarning<D: Document> {
    host: Host<D>,
}

/// # Errors
///
/// Never fails; the banner needs no configuration.
pub fn attach<D: Document + 'static>(host: Host<D>, _env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    Ok(Box::new(InsecureWarning { host }))
}

impl<D: Document> Widget<D> for InsecureWarning<D> {
    fn connect(&mut self) {
        if is_insecure(&self.host.doc.protocol(), &self.host.doc.hostname()) {
            self.host.element.remove_class(HIDDEN);
        }
    }

    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        unknown_method(NAME, method)
    }
}

#[cfg(test)]
#[path = "insecure_warning_test.rs"]
mod insecure_warning_test;
