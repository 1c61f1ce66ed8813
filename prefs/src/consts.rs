//! Shared constants for the prefs crate.

// ── Cookies ─────────────────────────────────────────────────────

/// Lifetime of mirrored preference cookies (one year).
pub const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

// ── Root element classes ────────────────────────────────────────

/// Every class the contrast rule may leave on `<html>`.
pub const CONTRAST_CLASSES: [&str; 2] = ["contrast-low", "contrast-high"];

/// Every class the roundedness rule may leave on `<html>`.
pub const ROUNDED_CLASSES: [&str; 3] = ["rounded-none", "rounded-lg", "rounded-xl"];

/// Every class the letter-spacing rule may leave on `<html>`.
pub const TRACKING_CLASSES: [&str; 3] = ["tracking-tight", "tracking-normal", "tracking-wide"];

/// Every class the line-height rule may leave on `<html>`.
pub const LEADING_CLASSES: [&str; 3] = ["leading-tight", "leading-normal", "leading-loose"];

/// Class-mode dark theme marker.
pub const DARK_CLASS: &str = "dark";

/// Attribute used by named (daisyUI-style) themes.
pub const THEME_ATTR: &str = "data-theme";

// ── Widget classes ──────────────────────────────────────────────

pub const HIDDEN: &str = "hidden";
pub const ROTATE_0: &str = "rotate-0";
pub const ROTATE_90: &str = "rotate-90";
pub const ROTATE_180: &str = "rotate-180";

/// Sidebar width when collapsed.
pub const SIDEBAR_NARROW: &str = "w-16";
/// Sidebar width when expanded.
pub const SIDEBAR_WIDE: &str = "w-64";

/// Classes marking the sidebar link for the current location.
pub const NAV_ACTIVE_CLASSES: [&str; 2] = ["bg-base-200", "font-bold"];

/// Classes marking the active tab.
pub const TAB_ACTIVE_CLASSES: [&str; 2] = ["font-bold", "text-primary"];

/// Button classes for the selected list view.
pub const VIEW_BUTTON_ON: [&str; 2] = ["bg-blue-600", "text-white"];
/// Button classes for the unselected list view.
pub const VIEW_BUTTON_OFF: [&str; 2] = ["bg-gray-300", "text-black"];

// ── Limits ──────────────────────────────────────────────────────

/// Smallest accepted root font size, in percent.
pub const FONT_SIZE_MIN: u16 = 50;
/// Largest accepted root font size, in percent.
pub const FONT_SIZE_MAX: u16 = 200;

/// Number of animation frames to wait before layout-sensitive rules run.
pub const LAYOUT_SETTLE_FRAMES: u32 = 2;

// ── Page structure ──────────────────────────────────────────────

/// Element that receives the background pattern.
pub const MAIN_CONTENT_SELECTOR: &str = "#main-content";

/// Theme used when neither the cookie nor the catalog provides one.
pub const FALLBACK_THEME: &str = "light";

/// Application mount point on the server.
pub const DEFAULT_BASE_PATH: &str = "/grylli";

/// Email status polling period.
pub const DEFAULT_EMAIL_POLL_MS: u32 = 15_000;

/// Shortest polling period a page may configure.
pub const MIN_POLL_MS: u32 = 1_000;

/// Delay between the last keystroke and form validation.
pub const DEFAULT_VALIDATE_DEBOUNCE_MS: u32 = 150;
