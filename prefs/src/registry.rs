//! Controller registry.
//!
//! DESIGN
//! ======
//! The registry is an explicit map from `data-controller` name to factory.
//! There is no global: the client builds one [`Registry`] at startup, adds
//! its browser-only controllers with [`Registry::register`], and asks it to
//! attach every controller name it finds on the page.
//!
//! [`Attached`] owns the widget for as long as its element is on the page.
//! Attaching runs [`Widget::connect`]; dropping runs [`Widget::disconnect`],
//! and the host drops its timers and listeners for the element alongside.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use crate::dom::Document;
use crate::error::AttachError;
use crate::widgets::{
    AttachEnv, Host, Widget, collapse, collapsible_item, email_status, flash_message, form_validation,
    insecure_warning, layout_debug, links, list_toggle, profile_dropdown, rate_limit_redirect, role_modal, smtp_form,
    submit_gate, tabs, titles, toggle_help,
};

/// Builds a widget for one element, validating its configuration.
pub type Factory<D> = fn(Host<D>, &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError>;

pub struct Registry<D: Document + 'static> {
    factories: BTreeMap<&'static str, Factory<D>>,
}

impl<D: Document + 'static> Default for Registry<D> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<D: Document + 'static> Registry<D> {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { factories: BTreeMap::new() }
    }

    /// Every widget this crate provides.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(collapse::NAME, collapse::attach);
        registry.register(collapsible_item::NAME, collapsible_item::attach);
        registry.register(email_status::NAME, email_status::attach);
        registry.register(flash_message::NAME, flash_message::attach);
        registry.register(form_validation::SIGNUP_NAME, form_validation::attach);
        registry.register(form_validation::USER_NAME, form_validation::attach);
        registry.register(form_validation::RESET_NAME, form_validation::attach);
        registry.register(form_validation::BOOTSTRAP_NAME, form_validation::attach);
        registry.register(insecure_warning::NAME, insecure_warning::attach);
        registry.register(layout_debug::NAME, layout_debug::attach);
        registry.register(links::LANG_NAME, links::attach_lang);
        registry.register(links::REDIRECT_BUTTON_NAME, links::attach_redirect_button);
        registry.register(list_toggle::NAME, list_toggle::attach);
        registry.register(list_toggle::APPRISE_NAME, list_toggle::attach);
        registry.register(list_toggle::WEBHOOK_NAME, list_toggle::attach);
        registry.register(profile_dropdown::NAME, profile_dropdown::attach);
        registry.register(rate_limit_redirect::NAME, rate_limit_redirect::attach);
        registry.register(role_modal::NAME, role_modal::attach);
        registry.register(smtp_form::NAME, smtp_form::attach);
        registry.register(submit_gate::WEBHOOK_NAME, submit_gate::attach);
        registry.register(submit_gate::APPRISE_NAME, submit_gate::attach);
        registry.register(submit_gate::APPRISE_VALIDATE_NAME, submit_gate::attach);
        registry.register(submit_gate::FORGOT_USERNAME_NAME, submit_gate::attach);
        registry.register(submit_gate::FORGOT_PASSWORD_NAME, submit_gate::attach);
        registry.register(tabs::NAME, tabs::attach);
        registry.register(titles::ACTION_NAME, titles::attach_action);
        registry.register(titles::PROFILE_NAME, titles::attach_profile);
        registry.register(toggle_help::NAME, toggle_help::attach);
        registry
    }

    /// Add or replace the factory for `name`.
    pub fn register(&mut self, name: &'static str, factory: Factory<D>) {
        if self.factories.insert(name, factory).is_some() {
            log::debug!("controller `{name}` re-registered");
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    /// Build and connect the `name` widget for `element`.
    ///
    /// # Errors
    ///
    /// [`AttachError::UnknownController`] for an unregistered name, otherwise
    /// whatever the factory reports.
    pub fn attach(&self, name: &str, doc: D, element: D::Element, env: &AttachEnv) -> Result<Attached<D>, AttachError> {
        let (&controller, factory) =
            self.factories.get_key_value(name).ok_or_else(|| AttachError::UnknownController(name.to_owned()))?;
        let host = Host::new(doc, element.clone(), controller);
        let mut widget = factory(host, env)?;
        widget.connect();
        log::debug!("attached `{controller}`");
        Ok(Attached { controller, element, widget })
    }
}

/// A connected widget. Dropping it disconnects the widget.
pub struct Attached<D: Document + 'static> {
    controller: &'static str,
    element: D::Element,
    widget: Box<dyn Widget<D>>,
}

impl<D: Document + 'static> Attached<D> {
    #[must_use]
    pub fn controller(&self) -> &'static str {
        self.controller
    }

    /// The element the widget is bound to.
    #[must_use]
    pub fn element(&self) -> &D::Element {
        &self.element
    }
}

impl<D: Document + 'static> Deref for Attached<D> {
    type Target = dyn Widget<D>;

    fn deref(&self) -> &Self::Target {
        self.widget.as_ref()
    }
}

impl<D: Document + 'static> DerefMut for Attached<D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.widget.as_mut()
    }
}

impl<D: Document + 'static> Drop for Attached<D> {
    fn drop(&mut self) {
        self.widget.disconnect();
        log::debug!("detached `{}`", self.controller);
    }
}
