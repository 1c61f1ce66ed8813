//! `signup-form`, `user-form`, `reset-password` and `bootstrap-form`: live
//! validation of account forms.
//!
//! Every name attaches this widget. Every rule only checks fields the
//! form actually has, so the signup form (no current password, no submit
//! gating) and the account form share one implementation.

use crate::consts::{DEFAULT_VALIDATE_DEBOUNCE_MS, HIDDEN};
use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, swap_classes, unknown_method};

pub const SIGNUP_NAME: &str = "signup-form";
pub const USER_NAME: &str = "user-form";
pub const RESET_NAME: &str = "reset-password";
pub const BOOTSTRAP_NAME: &str = "bootstrap-form";

const VALIDATE: &str = "validate";

const SUBMIT_OK: [&str; 2] = ["bg-green-600", "hover:bg-green-700"];
const SUBMIT_BLOCKED: [&str; 2] = ["bg-red-500", "hover:bg-red-600"];

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Field values read from the form. `None` means the form has no such field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fields {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm: Option<String>,
    pub current_password: Option<String>,
}

/// Result of checking [`Fields`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub email_ok: bool,
    pub complexity_ok: bool,
    pub match_ok: bool,
    pub current_ok: bool,
    /// Every field the form has is filled in.
    pub complete: bool,
}

impl Verdict {
    #[must_use]
    pub fn valid(self) -> bool {
        self.complete && self.email_ok && self.complexity_ok && self.match_ok && self.current_ok
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace, a dot inside the domain.
#[must_use]
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// At least eight characters with lower case, upper case, a digit and a
/// character that is neither letter nor digit.
#[must_use]
pub fn is_complex(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

#[must_use]
pub fn check(fields: &Fields) -> Verdict {
    let email = fields.email.as_deref().map(str::trim);
    let password = fields.password.as_deref().unwrap_or_default();
    let filled = |f: Option<&str>| f.is_none_or(|v| !v.is_empty());
    Verdict {
        email_ok: email.is_none_or(is_email),
        complexity_ok: fields.password.is_none() || is_complex(password),
        match_ok: fields.confirm.as_deref().is_none_or(|c| c == password),
        current_ok: filled(fields.current_password.as_deref()),
        complete: filled(fields.username.as_deref().map(str::trim))
            && filled(email)
            && filled(fields.password.as_deref())
            && filled(fields.confirm.as_deref())
            && filled(fields.current_password.as_deref()),
    }
}

pub struct FormValidation<D: Document> {
    host: Host<D>,
}

/// # Errors
///
/// [`AttachError::MissingTarget`] without a `password` target.
pub fn attach<D: Document + 'static>(host: Host<D>, _env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    host.required_target("password")?;
    Ok(Box::new(FormValidation { host }))
}

impl<D: Document> FormValidation<D> {
    fn field(&self, target: &str) -> Option<String> {
        self.host.target(target).map(|el| el.value().unwrap_or_default())
    }

    fn validate(&self) -> Verdict {
        let verdict = check(&Fields {
            username: self.field("username"),
            email: self.field("email"),
            password: self.field("password"),
            confirm: self.field("confirmPassword"),
            current_password: self.field("currentPassword"),
        });

        let warnings = [
            ("emailWarning", verdict.email_ok),
            ("complexityWarning", verdict.complexity_ok),
            ("mismatchWarning", verdict.match_ok),
            ("currentPasswordWarning", verdict.current_ok),
        ];
        for (target, ok) in warnings {
            for warning in self.host.targets(target) {
                warning.toggle_class(HIDDEN, ok);
            }
        }
        for button in self.host.targets("submitButton") {
            button.set_disabled(!verdict.valid());
            swap_classes(&button, verdict.valid(), &SUBMIT_OK, &SUBMIT_BLOCKED);
        }
        verdict
    }
}

impl<D: Document> Widget<D> for FormValidation<D> {
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
#[path = "form_validation_test.rs"]
mod form_validation_test;
