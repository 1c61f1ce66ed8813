//! HTTP helpers for the preference runtime.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, so the pure decoding helpers stay
//! testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Catalog`/`Result` outputs instead of panics. A failed catalog
//! fetch becomes [`Catalog::Failed`], which the style rules treat as "keep
//! the default".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use prefs::catalog::{PatternCatalog, ThemeCatalog};
use prefs::style::Catalog;

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(url: &str, status: u16) -> String {
    format!("GET {url} failed: {status}")
}

/// Decode the theme-name list.
#[must_use]
pub fn decode_themes(body: Result<String, String>) -> Catalog<ThemeCatalog> {
    decode(body, "theme", |raw| ThemeCatalog::from_json(raw).map_err(|e| e.to_string()))
}

/// Decode the background pattern list.
#[must_use]
pub fn decode_patterns(body: Result<String, String>) -> Catalog<PatternCatalog> {
    decode(body, "pattern", |raw| PatternCatalog::from_json(raw).map_err(|e| e.to_string()))
}

fn decode<T>(body: Result<String, String>, what: &str, parse: impl Fn(&str) -> Result<T, String>) -> Catalog<T> {
    match body.and_then(|raw| parse(&raw)) {
        Ok(catalog) => Catalog::Loaded(catalog),
        Err(e) => {
            leptos::logging::warn!("{what} catalog unavailable: {e}");
            Catalog::Failed
        }
    }
}

/// JSON body of the theme-change log request.
#[must_use]
pub fn theme_log_payload(theme: &str) -> serde_json::Value {
    serde_json::json!({ "theme": theme })
}

/// CSS font shorthand passed to `document.fonts.load`.
#[must_use]
pub fn font_load_spec(family: &str) -> String {
    format!("1em \"{family}\"")
}

/// GET `url` and return the body text.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(url, resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch and decode the theme catalog.
pub async fn fetch_themes(url: &str) -> Catalog<ThemeCatalog> {
    decode_themes(fetch_text(url).await)
}

/// Fetch and decode the background pattern catalog.
pub async fn fetch_patterns(url: &str) -> Catalog<PatternCatalog> {
    decode_patterns(fetch_text(url).await)
}

/// Tell the server which theme the user picked. Fire-and-forget.
pub async fn log_theme_change(url: &str, theme: &str) {
    #[cfg(feature = "hydrate")]
    {
        let sent = match gloo_net::http::Request::post(url).json(&theme_log_payload(theme)) {
            Ok(request) => request.send().await.map(|_| ()).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        if let Err(e) = sent {
            leptos::logging::debug_warn!("theme change log failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, theme);
    }
}
