//! Where an action goes.
//!
//! Style-category pickers (`theme`, `font`, ...) and the sidebar toggle are
//! not widgets: their actions become reconciler events so every change flows
//! through the same validate, apply, persist path. Everything else is handed
//! to the attached widget.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use prefs::reconcile::NAV_CONTROLLER;
use prefs::style::Category;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// User picked `value` for `category`.
    Style { category: Category, value: String },
    /// Flip between the light and dark theme.
    ToggleTheme,
    ToggleSidebar,
    /// Dispatch to the widget bound to the controller element.
    Widget,
    Ignore,
}

/// Decide what `controller#method` does. `value` is the source element's
/// form value, if it has one.
#[must_use]
pub fn route(controller: &str, method: &str, value: Option<&str>) -> Route {
    if controller == NAV_CONTROLLER {
        return Route::Ignore;
    }
    let Some(category) = Category::from_controller(controller) else {
        return Route::Widget;
    };
    match (category, method) {
        (Category::SidebarCollapse, "toggle" | "toggleCollapsed") => Route::ToggleSidebar,
        (Category::SidebarCollapse, _) => Route::Ignore,
        (Category::Theme, "toggle") => Route::ToggleTheme,
        _ => match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => Route::Style { category, value: value.to_owned() },
            None => Route::Ignore,
        },
    }
}

/// Theme after a light/dark toggle from `current`.
#[must_use]
pub fn toggled_theme(current: &str) -> &'static str {
    if current == "dark" { "light" } else { "dark" }
}
