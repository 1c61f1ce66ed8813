//! `version-check` badge.
//!
//! The widget half fetches the `status-url` value once after attach and
//! feeds the result into a signal; the component renders it. Dropping the
//! widget unmounts the component.

#[cfg(test)]
#[path = "version_badge_test.rs"]
mod version_badge_test;

use leptos::prelude::*;
use prefs::widgets::version::VersionStatus;

#[cfg(feature = "hydrate")]
use prefs::error::AttachError;
#[cfg(feature = "hydrate")]
use prefs::widgets::{AttachEnv, Effect, FetchSpec, Host, Widget};

#[cfg(feature = "hydrate")]
use crate::dom::{BrowserDocument, DomElement};

/// Text colour for a badge state.
pub fn badge_class(status: Option<&VersionStatus>) -> &'static str {
    match status {
        None => "text-sm opacity-70",
        Some(VersionStatus::UpToDate { .. }) => "text-sm text-success",
        Some(VersionStatus::UpdateAvailable { .. }) => "text-sm text-warning",
        Some(VersionStatus::Unavailable) => "text-sm text-base-content/70",
        Some(VersionStatus::Failed) => "text-sm text-error",
    }
}

/// Release status text, linked to the releases page when an update exists.
#[component]
pub fn VersionBadge(status: RwSignal<Option<VersionStatus>>) -> impl IntoView {
    move || {
        let current = status.get();
        let class = badge_class(current.as_ref());
        let Some(current) = current else {
            return view! { <span class=class>"Checking version..."</span> }.into_any();
        };
        let message = current.message();
        match current.link().map(str::to_owned) {
            Some(href) => view! {
                <a class=class href=href target="_blank" rel="noopener noreferrer">
                    {message}
                </a>
            }
            .into_any(),
            None => view! { <span class=class>{message}</span> }.into_any(),
        }
    }
}

#[cfg(feature = "hydrate")]
pub struct VersionCheck {
    element: DomElement,
    url: String,
    status: RwSignal<Option<VersionStatus>>,
    mounted: Option<Box<dyn std::any::Any>>,
}

/// Factory registered under [`prefs::widgets::version::NAME`].
///
/// # Errors
///
/// [`AttachError::MissingValue`] without a `statusUrl` value.
#[cfg(feature = "hydrate")]
pub fn attach(host: Host<BrowserDocument>, _env: &AttachEnv) -> Result<Box<dyn Widget<BrowserDocument>>, AttachError> {
    let url = host.required_value("statusUrl")?;
    Ok(Box::new(VersionCheck { element: host.element, url, status: RwSignal::new(None), mounted: None }))
}

#[cfg(feature = "hydrate")]
impl Widget<BrowserDocument> for VersionCheck {
    fn connect(&mut self) {
        use wasm_bindgen::JsCast;

        let Some(parent) = self.element.0.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        let status = self.status;
        let handle = leptos::mount::mount_to(parent.clone(), move || view! { <VersionBadge status=status/> });
        self.mounted = Some(Box::new(handle));
    }

    fn disconnect(&mut self) {
        self.mounted = None;
    }

    fn handle(&mut self, method: &str, _source: &DomElement) -> Effect {
        leptos::logging::warn!("{}: no action `{method}`", prefs::widgets::version::NAME);
        Effect::None
    }

    fn fetch(&self) -> Option<FetchSpec> {
        Some(FetchSpec { url: self.url.clone(), interval_ms: None })
    }

    fn on_fetched(&mut self, body: Result<String, String>) {
        let status = VersionStatus::from_response(body.as_deref().map_err(String::as_str));
        self.status.set(Some(status));
    }
}
