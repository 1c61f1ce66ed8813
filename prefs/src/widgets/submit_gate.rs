//! Submit gating for the short forms: webhook and apprise endpoints, and the
//! account recovery pages.
//!
//! Each controller name maps to a [`Gate`]: the fields it checks and, when
//! the form has a submit button, the classes showing whether it can be sent.
//! `forgot-password` has no button; it marks its fields with `aria-invalid`
//! instead.

use crate::consts::DEFAULT_VALIDATE_DEBOUNCE_MS;
use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::form_validation::is_email;
use super::{AttachEnv, Effect, Host, Widget, swap_classes, unknown_method};

pub const WEBHOOK_NAME: &str = "webhook-form";
pub const APPRISE_NAME: &str = "apprise-form";
pub const APPRISE_VALIDATE_NAME: &str = "apprise-validate";
pub const FORGOT_USERNAME_NAME: &str = "forgot-username";
pub const FORGOT_PASSWORD_NAME: &str = "forgot-password";

const VALIDATE: &str = "validate";

/// What a field must hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Filled,
    Email,
}

impl Rule {
    /// Checks the trimmed value.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Self::Filled => !value.is_empty(),
            Self::Email => is_email(value),
        }
    }
}

/// Button classes for a sendable and a blocked form.
#[derive(Debug)]
pub struct SubmitStyle {
    pub ok: &'static [&'static str],
    pub blocked: &'static [&'static str],
}

#[derive(Debug)]
pub struct Gate {
    /// Target name and rule of every checked field.
    pub fields: &'static [(&'static str, Rule)],
    /// The `submit` target and its classes, for forms that gate sending.
    pub submit: Option<SubmitStyle>,
    /// Write `aria-invalid` on each field.
    pub mark_invalid: bool,
}

static ENDPOINT_FORM: Gate = Gate {
    fields: &[("label", Rule::Filled), ("endpoint", Rule::Filled)],
    submit: Some(SubmitStyle { ok: &["bg-green-600"], blocked: &["bg-red-500"] }),
    mark_invalid: false,
};

static APPRISE_FORM: Gate = Gate {
    fields: &[("label", Rule::Filled), ("url", Rule::Filled)],
    submit: Some(SubmitStyle { ok: &["bg-green-600"], blocked: &["bg-red-500"] }),
    mark_invalid: false,
};

static FORGOT_USERNAME: Gate = Gate {
    fields: &[("email", Rule::Email)],
    submit: Some(SubmitStyle {
        ok: &["bg-green-600", "hover:bg-green-700", "cursor-pointer"],
        blocked: &["bg-red-600", "cursor-not-allowed"],
    }),
    mark_invalid: false,
};

static FORGOT_PASSWORD: Gate =
    Gate { fields: &[("username", Rule::Filled), ("email", Rule::Email)], submit: None, mark_invalid: true };

/// The gate a controller name uses.
#[must_use]
pub fn gate(controller: &str) -> Option<&'static Gate> {
    match controller {
        WEBHOOK_NAME => Some(&ENDPOINT_FORM),
        APPRISE_NAME | APPRISE_VALIDATE_NAME => Some(&APPRISE_FORM),
        FORGOT_USERNAME_NAME => Some(&FORGOT_USERNAME),
        FORGOT_PASSWORD_NAME => Some(&FORGOT_PASSWORD),
        _ => None,
    }
}

pub struct SubmitGate<D: Document> {
    host: Host<D>,
    gate: &'static Gate,
}

/// # Errors
///
/// [`AttachError::UnknownController`] for a name without a gate,
/// [`AttachError::MissingTarget`] when a checked field or the submit button
/// is missing.
pub fn attach<D: Document + 'static>(host: Host<D>, _env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    let gate = gate(host.controller).ok_or_else(|| AttachError::UnknownController(host.controller.to_owned()))?;
    for (target, _) in gate.fields {
        host.required_target(target)?;
    }
    if gate.submit.is_some() {
        host.required_target("submit")?;
    }
    Ok(Box::new(SubmitGate { host, gate }))
}

impl<D: Document> SubmitGate<D> {
    /// Re-check every field. Returns whether the form may be sent.
    fn validate(&self) -> bool {
        let mut valid = true;
        for (target, rule) in self.gate.fields {
            for field in self.host.targets(target) {
                let ok = rule.accepts(&field.value().unwrap_or_default());
                if self.gate.mark_invalid {
                    field.set_attr("aria-invalid", if ok { "false" } else { "true" });
                }
                valid &= ok;
            }
        }
        if let Some(style) = &self.gate.submit {
            for button in self.host.targets("submit") {
                button.set_disabled(!valid);
                swap_classes(&button, valid, style.ok, style.blocked);
            }
        }
        valid
    }
}

impl<D: Document> Widget<D> for SubmitGate<D> {
    fn connect(&mut self) {
        self.validate();
    }

    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        match method {
            VALIDATE => {
                self.validate();
                Effect::None
            }
            _ => unknown_method(self.host.controller, method),
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
#[path = "submit_gate_test.rs"]
mod submit_gate_test;
