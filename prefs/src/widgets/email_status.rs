//! `email-status`: keep the on/off toggles of the email list in step with the
//! server by polling the status endpoint.

use serde::Deserialize;

use crate::consts::MIN_POLL_MS;
use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, FetchSpec, Host, Widget, unknown_method};

pub const NAME: &str = "email-status";

/// Title of the toggle button inside each email's form.
pub const TOGGLE_TITLE: &str = "Toggle Email On/Off";

const ON_CLASS: &str = "text-green-600";
const OFF_CLASS: &str = "text-red-500";

/// Email identifier as the server sends it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EmailId {
    Number(u64),
    Text(String),
}

impl EmailId {
    /// The id as it appears in form actions, if it is safe to put in a selector.
    #[must_use]
    pub fn as_token(&self) -> Option<String> {
        let token = match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        };
        (!token.is_empty() && token.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_')))
            .then_some(token)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EmailStatus {
    pub id: EmailId,
    pub is_enabled: bool,
}

/// Decode the status endpoint body.
///
/// # Errors
///
/// Returns the decode error for anything but an array of statuses.
pub fn parse_statuses(body: &str) -> Result<Vec<EmailStatus>, serde_json::Error> {
    serde_json::from_str(body)
}

pub struct EmailStatusWidget<D: Document> {
    host: Host<D>,
    url: String,
    interval_ms: u32,
}

/// # Errors
///
/// [`AttachError::InvalidValue`] for a malformed `interval` value or one
/// shorter than [`MIN_POLL_MS`].
pub fn attach<D: Document + 'static>(host: Host<D>, env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    let interval_ms = match host.u32_value("interval")? {
        Some(ms) if ms < MIN_POLL_MS => {
            return Err(host.invalid("interval", "interval of at least 1000 ms", ms.to_string()));
        }
        Some(ms) => ms,
        None => env.config.email_poll_ms,
    };
    Ok(Box::new(EmailStatusWidget { host, url: env.config.email_status_url(), interval_ms }))
}

impl<D: Document> EmailStatusWidget<D> {
    /// Update every matching toggle. Returns how many buttons changed.
    fn apply(&self, statuses: &[EmailStatus]) -> usize {
        let mut updated = 0;
        for status in statuses {
            let Some(token) = status.id.as_token() else {
                log::warn!("{NAME}: skipping unusable id {:?}", status.id);
                continue;
            };
            let forms = self.host.doc.query_all(&format!("form[action*=\"{token}\"]"));
            let button_selector = format!("button[title=\"{TOGGLE_TITLE}\"]");
            let owned = forms.iter().filter(|form| form.attr("action").is_some_and(|a| action_names(&a, &token)));
            for button in owned.filter_map(|form| form.query(&button_selector)) {
                let on = status.is_enabled;
                button.toggle_class(OFF_CLASS, !on);
                button.toggle_class(ON_CLASS, on);
                button.set_text(if on { "🟢" } else { "🔴" });
                button.set_attr("aria-label", if on { "Email is enabled" } else { "Email is disabled" });
                updated += 1;
            }
        }
        updated
    }
}

impl<D: Document> Widget<D> for EmailStatusWidget<D> {
    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        unknown_method(NAME, method)
    }

    fn fetch(&self) -> Option<FetchSpec> {
        Some(FetchSpec { url: self.url.clone(), interval_ms: Some(self.interval_ms) })
    }

    fn on_fetched(&mut self, body: Result<String, String>) {
        let statuses = match body.map(|b| parse_statuses(&b).map_err(|e| e.to_string())) {
            Ok(Ok(statuses)) => statuses,
            Ok(Err(e)) | Err(e) => {
                log::warn!("{NAME}: status refresh failed: {e}");
                return;
            }
        };
        let updated = self.apply(&statuses);
        log::debug!("{NAME}: refreshed {updated} toggles");
    }
}

/// Whether `token` is a whole path segment of a form action, so id `1` does
/// not claim the form for id `11`.
fn action_names(action: &str, token: &str) -> bool {
    let path = action.split(['?', '#']).next().unwrap_or_default();
    path.split('/').any(|segment| segment == token)
}

#[cfg(test)]
#[path = "email_status_test.rs"]
mod email_status_test;
