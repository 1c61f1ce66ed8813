//! Controllers that only navigate: `redirect-button` and the `lang` picker.
//!
//! Both refuse destinations off this site.

use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, local_url, unknown_method};

pub const REDIRECT_BUTTON_NAME: &str = "redirect-button";
pub const LANG_NAME: &str = "lang";

/// Attribute on the language `<select>` holding the path the code is appended to.
pub const BASE_URL_ATTR: &str = "data-base-url";

pub struct RedirectButton {
    url: String,
}

/// # Errors
///
/// [`AttachError::MissingValue`] without `url`, [`AttachError::InvalidValue`]
/// when it leaves the site.
pub fn attach_redirect_button<D: Document + 'static>(
    host: Host<D>,
    _env: &AttachEnv,
) -> Result<Box<dyn Widget<D>>, AttachError> {
    let raw = host.required_value("url")?;
    let url = local_url(&raw).ok_or_else(|| host.invalid("url", "same-site path", raw.clone()))?.to_owned();
    Ok(Box::new(RedirectButton { url }))
}

impl<D: Document> Widget<D> for RedirectButton {
    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        match method {
            "go" => Effect::Navigate(self.url.clone()),
            _ => unknown_method(REDIRECT_BUTTON_NAME, method),
        }
    }
}

/// Language codes as the locale routes spell them: `en`, `pt-BR`, `zh_Hant`.
#[must_use]
pub fn is_lang_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
}

/// Path of the page in language `code`, when both parts are usable.
#[must_use]
pub fn lang_url(base: &str, code: &str) -> Option<String> {
    if !is_lang_code(code) {
        return None;
    }
    local_url(base).map(|base| format!("{base}{code}"))
}

pub struct Lang<D: Document> {
    select: D::Element,
}

/// # Errors
///
/// [`AttachError::MissingTarget`] without a `select` target.
pub fn attach_lang<D: Document + 'static>(host: Host<D>, _env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    let select = host.required_target("select")?;
    Ok(Box::new(Lang::<D> { select }))
}

impl<D: Document> Widget<D> for Lang<D> {
    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        if method != "change" {
            return unknown_method(LANG_NAME, method);
        }
        let code = self.select.value().unwrap_or_default();
        let base = self.select.attr(BASE_URL_ATTR).unwrap_or_default();
        if code.is_empty() || base.is_empty() {
            return Effect::None;
        }
        match lang_url(&base, &code) {
            Some(url) => Effect::Navigate(url),
            None => {
                log::warn!("{LANG_NAME}: refusing `{base}` + `{code}`");
                Effect::None
            }
        }
    }
}

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;
