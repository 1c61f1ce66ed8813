//! `tabs`: mark one tab active and take the document title from it.

use crate::consts::TAB_ACTIVE_CLASSES;
use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, unknown_method};

pub const NAME: &str = "tabs";

/// Attribute naming a tab.
pub const TAB_NAME_ATTR: &str = "data-tabs-name";

/// Attribute holding the document title for a tab.
pub const TAB_TITLE_ATTR: &str = "data-tabs-title";

pub struct Tabs<D: Document> {
    host: Host<D>,
    active_tab: Option<String>,
}

/// # Errors
///
/// Never fails; a tab list without tabs does nothing.
pub fn attach<D: Document + 'static>(host: Host<D>, _env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    let active_tab = host.value("activeTab");
    Ok(Box::new(Tabs { host, active_tab }))
}

/// Tab name from an `/overview/<name>/` path segment.
#[must_use]
pub fn tab_from_path(path: &str) -> Option<&str> {
    let rest = &path[path.find("/overview/")? + "/overview/".len()..];
    let (name, _) = rest.split_once('/')?;
    (!name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')).then_some(name)
}

impl<D: Document> Tabs<D> {
    fn activate(&self, tab: &D::Element) {
        for other in self.host.targets("tab") {
            for class in TAB_ACTIVE_CLASSES {
                other.remove_class(class);
            }
        }
        for class in TAB_ACTIVE_CLASSES {
            tab.add_class(class);
        }
        if let Some(title) = tab.attr(TAB_TITLE_ATTR).filter(|t| !t.is_empty()) {
            self.host.doc.set_title(&title);
        }
    }

    fn initial_tab(&self) -> Option<D::Element> {
        let tabs = self.host.targets("tab");
        let path = self.host.doc.path();
        let wanted = self.active_tab.as_deref().or_else(|| tab_from_path(&path));
        wanted
            .and_then(|name| tabs.iter().find(|t| t.attr(TAB_NAME_ATTR).as_deref() == Some(name)).cloned())
            .or_else(|| tabs.into_iter().next())
    }
}

impl<D: Document> Widget<D> for Tabs<D> {
    fn connect(&mut self) {
        if let Some(tab) = self.initial_tab() {
            self.activate(&tab);
        }
    }

    fn handle(&mut self, method: &str, source: &D::Element) -> Effect {
        match method {
            "activate" => {
                // Clicks may land on a child of the tab.
                let tab = self.host.targets("tab").into_iter().find(|t| t.contains(source));
                match tab {
                    Some(tab) => self.activate(&tab),
                    None => log::debug!("{NAME}: activate outside any tab"),
                }
                Effect::None
            }
            _ => unknown_method(NAME, method),
        }
    }
}

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;
