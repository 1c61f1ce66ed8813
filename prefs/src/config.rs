//! Page configuration read from `<body>` data attributes.
//!
//! The server renders these once per page:
//!
//! - `data-grylli-base`: mount path of the application (default `/grylli`)
//! - `data-grylli-theme-mode`: `named` (default) or `class`
//! - `data-grylli-email-poll-ms`: email status poll period (default 15000)
//! - `data-role-change-base`: role form action with a `0` user id placeholder

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DEFAULT_BASE_PATH, DEFAULT_EMAIL_POLL_MS, MIN_POLL_MS};
use crate::error::ConfigError;

pub const BASE_ATTR: &str = "data-grylli-base";
pub const THEME_MODE_ATTR: &str = "data-grylli-theme-mode";
pub const EMAIL_POLL_ATTR: &str = "data-grylli-email-poll-ms";
pub const ROLE_CHANGE_ATTR: &str = "data-role-change-base";

/// How the active theme is expressed on `<html>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// `data-theme="<name>"` from the theme catalog.
    #[default]
    Named,
    /// Boolean `dark` class.
    Class,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    pub base_path: String,
    pub theme_mode: ThemeMode,
    pub email_poll_ms: u32,
    pub role_change_base: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_owned(),
            theme_mode: ThemeMode::Named,
            email_poll_ms: DEFAULT_EMAIL_POLL_MS,
            role_change_base: None,
        }
    }
}

impl UiConfig {
    /// Build from an attribute lookup. Absent attributes take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a present but malformed attribute.
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BASE_ATTR) {
            config.base_path = parse_base_path(&raw)?;
        }
        if let Some(raw) = lookup(THEME_MODE_ATTR) {
            config.theme_mode = match raw.trim() {
                "named" => ThemeMode::Named,
                "class" => ThemeMode::Class,
                _ => return Err(ConfigError::Invalid { key: THEME_MODE_ATTR, raw }),
            };
        }
        if let Some(raw) = lookup(EMAIL_POLL_ATTR) {
            config.email_poll_ms = match raw.trim().parse::<u32>() {
                Ok(ms) if ms >= MIN_POLL_MS => ms,
                _ => return Err(ConfigError::Invalid { key: EMAIL_POLL_ATTR, raw }),
            };
        }
        config.role_change_base = lookup(ROLE_CHANGE_ATTR).filter(|v| !v.trim().is_empty());

        Ok(config)
    }

    /// Theme name list.
    #[must_use]
    pub fn themes_url(&self) -> String {
        format!("{}/static/daisyui-themes.json", self.base_path)
    }

    /// Background pattern descriptor list.
    #[must_use]
    pub fn patterns_url(&self) -> String {
        format!("{}/meta/static/background-patterns.json", self.base_path)
    }

    #[must_use]
    pub fn email_status_url(&self) -> String {
        format!("{}/email/status", self.base_path)
    }

    #[must_use]
    pub fn theme_log_url(&self) -> String {
        format!("{}/meta/log-theme-change", self.base_path)
    }

    /// URL of a file under the static directory.
    #[must_use]
    pub fn static_url(&self, file: &str) -> String {
        format!("{}/static/{file}", self.base_path)
    }
}

fn parse_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let valid = trimmed.starts_with('/')
        && !trimmed.contains("..")
        && trimmed.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'/' | b'-' | b'_'));
    if valid { Ok(trimmed.to_owned()) } else { Err(ConfigError::Invalid { key: BASE_ATTR, raw: raw.to_owned() }) }
}
