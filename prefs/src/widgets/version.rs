//! `version-check`: compare the running release with the latest published one.
//!
//! Only the model lives here. The badge itself is a Leptos component in the
//! client crate, which fetches `status-url` and renders [`VersionStatus`].

use serde::Deserialize;

pub const NAME: &str = "version-check";

/// Body of the version endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VersionInfo {
    #[serde(default)]
    pub current_version: Option<String>,
    #[serde(default)]
    pub latest_version: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

/// What the badge shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionStatus {
    UpToDate { current: String },
    UpdateAvailable { latest: String, releases_url: Option<String> },
    Unavailable,
    Failed,
}

impl VersionStatus {
    /// Classify a fetch result. `Err` covers both transport and decode failures.
    #[must_use]
    pub fn from_response(body: Result<&str, &str>) -> Self {
        let Ok(body) = body else {
            return Self::Failed;
        };
        match serde_json::from_str::<VersionInfo>(body) {
            Ok(info) => Self::from_info(info),
            Err(e) => {
                log::warn!("{NAME}: unreadable version info: {e}");
                Self::Failed
            }
        }
    }

    #[must_use]
    pub fn from_info(info: VersionInfo) -> Self {
        let Some(latest) = info.latest_version.filter(|v| !v.trim().is_empty()) else {
            return Self::Unavailable;
        };
        let latest = latest.trim().trim_start_matches('v').to_owned();
        let current = info.current_version.map(|v| v.trim().trim_start_matches('v').to_owned());
        if current.as_deref() == Some(latest.as_str()) {
            return Self::UpToDate { current: latest };
        }
        let releases_url = info
            .github_url
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| url.starts_with("https://"))
            .map(|url| format!("{url}/releases"));
        Self::UpdateAvailable { latest, releases_url }
    }

    /// Badge text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UpToDate { current } => format!("✔ Grylli is up to date (v{current})"),
            Self::UpdateAvailable { latest, .. } => format!("🚀 New version available: v{latest}"),
            Self::Unavailable => "❓ Version info unavailable".to_owned(),
            Self::Failed => "❌ Version check failed".to_owned(),
        }
    }

    /// Link target for the badge, if any.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::UpdateAvailable { releases_url, .. } => releases_url.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod version_test;
