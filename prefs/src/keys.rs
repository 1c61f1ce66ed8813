//! Known preference keys.
//!
//! Key names are part of the contract with already-deployed browsers: users
//! carry these entries in `localStorage` and the `theme` cookie across
//! releases, so names must never change.

/// Where a preference is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Origin-scoped durable storage only.
    Durable,
    /// Durable storage, mirrored into a cookie the server reads before any
    /// script runs.
    SessionCookie,
}

/// A named preference with its scope and fallback value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefKey {
    pub name: &'static str,
    pub scope: Scope,
    pub default: &'static str,
}

impl PrefKey {
    #[must_use]
    pub const fn durable(name: &'static str, default: &'static str) -> Self {
        Self { name, scope: Scope::Durable, default }
    }

    #[must_use]
    pub const fn session_cookie(name: &'static str, default: &'static str) -> Self {
        Self { name, scope: Scope::SessionCookie, default }
    }
}

pub const THEME: PrefKey = PrefKey::session_cookie("theme", "light");
pub const FONT: PrefKey = PrefKey::durable("grylli-font", "inter");
pub const FONT_SIZE: PrefKey = PrefKey::durable("grylli-font-size", "100");
pub const CONTRAST: PrefKey = PrefKey::durable("grylli-contrast", "default");
pub const ROUNDED: PrefKey = PrefKey::durable("grylli-rounded", "default");
pub const TRACKING: PrefKey = PrefKey::durable("trackingLevel", "tracking-normal");
pub const LINE_HEIGHT: PrefKey = PrefKey::durable("lineHeightLevel", "leading-normal");
pub const BACKGROUND: PrefKey = PrefKey::durable("background", "none");
pub const SIDEBAR_COLLAPSED: PrefKey = PrefKey::durable("sidebarCollapsed", "false");

/// Default list-view key; pages override it per list.
pub const LIST_VIEW: PrefKey = PrefKey::durable("listView", "table");

/// Default key of the webhook list.
pub const WEBHOOK_LIST_VIEW: PrefKey = PrefKey::durable("webhookListView", "table");

/// JSON map of collapsible section id to open state.
pub const SECTION_STATE: &str = "__GrylliSidebar";

/// JSON list of pages offered by the layout debug preview.
pub const DEBUG_PAGES: &str = "__GrylliDebugPages";

/// Prefix of per-section keys read by the pre-paint collapse loader.
pub const COLLAPSE_STATE_PREFIX: &str = "collapse-state-";
