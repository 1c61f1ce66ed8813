//! Scoped widget controllers.
//!
//! A widget is bound to one element carrying `data-controller="<name>"`. It
//! reads its configuration from `data-<name>-<key>-value` attributes and finds
//! the elements it drives through `data-<name>-target` attributes inside its
//! subtree. Widgets never take part in reconciliation and never talk to each
//! other; the only shared thing they touch is the preference store, and each
//! store key belongs to exactly one widget kind.
//!
//! Construction is the attach step: a factory validates the typed
//! configuration and the required targets and returns an [`AttachError`]
//! instead of a half-working widget. [`crate::registry::Attached`] then calls
//! [`Widget::connect`] and, when dropped, [`Widget::disconnect`].
//!
//! Anything a widget cannot do through the [`Document`] abstraction
//! (reloading, navigating, downloading, timers, network) is requested from the
//! host: an [`Effect`] returned from [`Widget::start`] or [`Widget::handle`],
//! or a [`FetchSpec`] from [`Widget::fetch`]. A timed step is
//! [`Effect::After`]: the host runs the named method later, and drops the
//! pending timer when the widget detaches.

pub mod collapse;
pub mod collapsible_item;
pub mod email_status;
pub mod flash_message;
pub mod form_validation;
pub mod insecure_warning;
pub mod layout_debug;
pub mod links;
pub mod list_toggle;
pub mod profile_dropdown;
pub mod rate_limit_redirect;
pub mod role_modal;
pub mod smtp_form;
pub mod submit_gate;
pub mod tabs;
pub mod titles;
pub mod toggle_help;
pub mod version;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

#[cfg(test)]
pub(crate) mod test_support;

use serde::de::DeserializeOwned;

use crate::config::UiConfig;
use crate::dom::{Document, Element, target_attr, target_selector, value_attr};
use crate::error::AttachError;
use crate::store::Preferences;

/// Shared services handed to every factory.
#[derive(Clone, Debug)]
pub struct AttachEnv {
    pub prefs: Preferences,
    pub config: UiConfig,
}

/// Side effect a widget asks the host to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Reload the page.
    Reload,
    /// Leave for a same-site path.
    Navigate(String),
    /// Offer `text` to the user as a file download.
    Download { filename: String, text: String },
    /// Run `method` on this widget after `delay_ms`. A newer request for the
    /// same method replaces the pending one.
    After { delay_ms: u32, method: &'static str },
}

/// A resource the host should fetch for a widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchSpec {
    pub url: String,
    /// Repeat every `interval_ms` until detach. `None` fetches once.
    pub interval_ms: Option<u32>,
}

/// Behaviour attached to one element.
pub trait Widget<D: Document> {
    /// Render the initial state.
    fn connect(&mut self) {}

    /// Effect to perform once the host has taken ownership of the widget.
    fn start(&mut self) -> Effect {
        Effect::None
    }

    /// Release held state. Timers and listeners are owned by the host and
    /// dropped with the attachment.
    fn disconnect(&mut self) {}

    /// A partial-page swap settled somewhere on the page.
    fn on_partial_swap(&mut self) {}

    /// A click landed on `target` anywhere in the document.
    fn on_document_click(&mut self, _target: &D::Element) {}

    /// `htmx:afterOnLoad` fired inside the widget for `trigger`.
    fn on_after_load(&mut self, _trigger: &D::Element) {}

    /// Run the action method named in a `data-action` descriptor.
    fn handle(&mut self, method: &str, source: &D::Element) -> Effect;

    /// Resource to fetch after connect.
    fn fetch(&self) -> Option<FetchSpec> {
        None
    }

    /// Body of a finished fetch, or a description of why it failed.
    fn on_fetched(&mut self, _body: Result<String, String>) {}

    /// Method to run when an `input` event bubbles up from inside the widget.
    fn input_action(&self) -> Option<&'static str> {
        None
    }

    /// Delay between the last triggering event and running `method`.
    fn debounce_ms(&self, _method: &str) -> Option<u32> {
        None
    }
}

/// Result for an action method the widget does not define.
pub(crate) fn unknown_method(controller: &str, method: &str) -> Effect {
    log::warn!("{controller}: no action `{method}`");
    Effect::None
}

/// The element a widget is bound to, plus its controller name and document.
#[derive(Clone, Debug)]
pub struct Host<D: Document> {
    pub doc: D,
    pub element: D::Element,
    pub controller: &'static str,
}

impl<D: Document> Host<D> {
    #[must_use]
    pub fn new(doc: D, element: D::Element, controller: &'static str) -> Self {
        Self { doc, element, controller }
    }

    /// Elements in the widget's subtree (the host included) naming `target`.
    #[must_use]
    pub fn targets(&self, target: &str) -> Vec<D::Element> {
        let mut found = Vec::new();
        let own = self.element.attr(&target_attr(self.controller));
        if own.is_some_and(|names| names.split_whitespace().any(|n| n == target)) {
            found.push(self.element.clone());
        }
        found.extend(self.element.query_all(&target_selector(self.controller, target)));
        found
    }

    #[must_use]
    pub fn target(&self, target: &str) -> Option<D::Element> {
        self.targets(target).into_iter().next()
    }

    /// # Errors
    ///
    /// [`AttachError::MissingTarget`] when the subtree has no such target.
    pub fn required_target(&self, target: &str) -> Result<D::Element, AttachError> {
        self.target(target).ok_or_else(|| AttachError::MissingTarget {
            controller: self.controller.to_owned(),
            target: target.to_owned(),
        })
    }

    /// Raw string value. Empty attributes read as absent.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.element.attr(&value_attr(self.controller, key)).filter(|v| !v.is_empty())
    }

    /// # Errors
    ///
    /// [`AttachError::MissingValue`] when the value is absent.
    pub fn required_value(&self, key: &str) -> Result<String, AttachError> {
        self.value(key)
            .ok_or_else(|| AttachError::MissingValue { controller: self.controller.to_owned(), key: key.to_owned() })
    }

    /// Boolean value: `true`/`false`, absent reads as `None`.
    ///
    /// # Errors
    ///
    /// [`AttachError::InvalidValue`] for any other text.
    pub fn bool_value(&self, key: &str) -> Result<Option<bool>, AttachError> {
        self.value(key)
            .map(|raw| match raw.trim() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(self.invalid(key, "boolean", raw.clone())),
            })
            .transpose()
    }

    /// # Errors
    ///
    /// [`AttachError::InvalidValue`] when the value is not an unsigned integer.
    pub fn u32_value(&self, key: &str) -> Result<Option<u32>, AttachError> {
        self.value(key)
            .map(|raw| raw.trim().parse::<u32>().map_err(|_| self.invalid(key, "unsigned integer", raw)))
            .transpose()
    }

    /// # Errors
    ///
    /// [`AttachError::InvalidValue`] when the value is not valid JSON for `T`.
    pub fn json_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AttachError> {
        self.value(key)
            .map(|raw| serde_json::from_str(&raw).map_err(|_| self.invalid(key, "JSON value", raw)))
            .transpose()
    }

    fn invalid(&self, key: &str, expected: &'static str, raw: String) -> AttachError {
        AttachError::InvalidValue { controller: self.controller.to_owned(), key: key.to_owned(), expected, raw }
    }
}

/// `raw` as a navigation target when it stays on this site: a path starting
/// with a single `/`.
#[must_use]
pub fn local_url(raw: &str) -> Option<&str> {
    let url = raw.trim();
    let same_site = url.starts_with('/') && !url.starts_with("//") && !url.contains('\\');
    (same_site && !url.chars().any(char::is_control)).then_some(url)
}

/// Swap a pair of class sets: add `on` and remove `off` when `active`, the
/// reverse otherwise.
pub(crate) fn swap_classes<E: Element>(el: &E, active: bool, on: &[&str], off: &[&str]) {
    for class in on {
        el.toggle_class(class, active);
    }
    for class in off {
        el.toggle_class(class, !active);
    }
}
