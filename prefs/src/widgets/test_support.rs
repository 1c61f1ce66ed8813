//! Shared fixtures for widget tests.

use std::rc::Rc;

use crate::config::UiConfig;
use crate::dom::{MemoryDocument, MemoryElement};
use crate::store::{MemoryBackend, MemoryCookies, Preferences};

use super::{AttachEnv, Host};

pub type Doc = Rc<MemoryDocument>;

pub struct Fixture {
    pub doc: Doc,
    pub backend: Rc<MemoryBackend>,
    pub env: AttachEnv,
}

pub fn fixture() -> Fixture {
    fixture_with(MemoryBackend::new())
}

pub fn fixture_with(backend: MemoryBackend) -> Fixture {
    let backend = Rc::new(backend);
    let prefs = Preferences::new(backend.clone(), Rc::new(MemoryCookies::new()));
    Fixture { doc: Rc::new(MemoryDocument::new()), backend, env: AttachEnv { prefs, config: UiConfig::default() } }
}

impl Fixture {
    /// Append `element` to the page and bind `controller` to it.
    pub fn mount(&self, element: &MemoryElement, controller: &'static str) -> Host<Doc> {
        self.doc.append(element);
        Host::new(self.doc.clone(), element.clone(), controller)
    }
}
