//! `smtp-form`: client-side checks for the mail relay settings form.
//!
//! Fields are found by document id. Each failing field gets its message in
//! the `#<id>-client-error` element next to it; the optional `submit` target
//! is disabled until every check passes.

use crate::consts::DEFAULT_VALIDATE_DEBOUNCE_MS;
use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, swap_classes, unknown_method};

pub const NAME: &str = "smtp-form";

pub const LABEL_ID: &str = "label";
pub const HOST_ID: &str = "smtp_host";
pub const PORT_ID: &str = "smtp_port";
pub const USERNAME_ID: &str = "smtp_username";
pub const PASSWORD_ID: &str = "smtp_password";

const FIELD_IDS: [&str; 5] = [LABEL_ID, HOST_ID, PORT_ID, USERNAME_ID, PASSWORD_ID];

const VALIDATE: &str = "validate";
const SUBMIT_OK: [&str; 1] = ["bg-green-600"];
const SUBMIT_BLOCKED: [&str; 1] = ["bg-red-500"];

/// Field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SmtpFields {
    pub label: String,
    pub host: String,
    pub port: String,
    pub username: String,
}

/// Field id and message of every failing check, in form order.
#[must_use]
pub fn check(fields: &SmtpFields) -> Vec<(&'static str, &'static str)> {
    let mut errors = Vec::new();
    if fields.label.trim().is_empty() {
        errors.push((LABEL_ID, "Label is required."));
    }
    if !is_host(&fields.host) {
        errors.push((HOST_ID, "Enter a valid host."));
    }
    if !is_port(&fields.port) {
        errors.push((PORT_ID, "Enter a valid port (1–65535)."));
    }
    if fields.username.trim().is_empty() {
        errors.push((USERNAME_ID, "Username is required."));
    }
    errors
}

/// Hostname or address: letters, digits, dots and hyphens, at least three.
#[must_use]
pub fn is_host(value: &str) -> bool {
    value.len() > 2 && value.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
}

#[must_use]
pub fn is_port(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit())
        && value.parse::<u32>().is_ok_and(|port| (1..=65_535).contains(&port))
}

pub struct SmtpForm<D: Document> {
    host: Host<D>,
}

/// # Errors
///
/// [`AttachError::MissingTarget`] when one of the relay fields is not on the
/// page.
pub fn attach<D: Document + 'static>(host: Host<D>, _env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    for id in FIELD_IDS {
        if host.doc.query(&format!("#{id}")).is_none() {
            return Err(AttachError::MissingTarget { controller: NAME.to_owned(), target: format!("#{id}") });
        }
    }
    Ok(Box::new(SmtpForm { host }))
}

impl<D: Document> SmtpForm<D> {
    fn field(&self, id: &str) -> String {
        self.host.doc.query(&format!("#{id}")).and_then(|el| el.value()).unwrap_or_default()
    }

    fn validate(&self) -> bool {
        let fields = SmtpFields {
            label: self.field(LABEL_ID),
            host: self.field(HOST_ID),
            port: self.field(PORT_ID),
            username: self.field(USERNAME_ID),
        };
        let errors = check(&fields);

        for id in FIELD_IDS {
            if let Some(slot) = self.host.doc.query(&format!("#{id}-client-error")) {
                let message = errors.iter().find(|(field, _)| *field == id).map_or("", |(_, message)| *message);
                slot.set_text(message);
            }
        }

        let valid = errors.is_empty();
        if let Some(button) = self.host.target("submit") {
            button.set_disabled(!valid);
            swap_classes(&button, valid, &SUBMIT_OK, &SUBMIT_BLOCKED);
        }
        valid
    }
}

impl<D: Document> Widget<D> for SmtpForm<D> {
    fn connect(&mut self) {
        self.validate();
    }

    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        match method {
            VALIDATE => {
                self.validate();
                Effect::None
            }
            _ => unknown_method(NAME, method),
        }
    }

    fn input_action(&self) -> Option<&'static str> {
        Some(VALIDATE)
    }

    fn debounce_ms(&self, method: &str) -> Option<u32> {
        (method == VALIDATE).then_some(DEFAULT_VALIDATE_DEBOUNCE_MS)
    }
}

#[cfg(test)]
#[path = "smtp_form_test.rs"]
mod smtp_form_test;
