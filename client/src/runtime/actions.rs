//! `data-action` descriptor parsing.
//!
//! A descriptor reads `event->controller#method`. The event part may be left
//! out, in which case the element's default event applies: `submit` for
//! forms, `input` for text fields, `change` for selects and toggles, and
//! `click` for everything else.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

/// One parsed `data-action` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub event: String,
    pub controller: String,
    pub method: String,
}

/// Default event for an element, by tag name and `type` attribute.
#[must_use]
pub fn default_event(tag: &str, input_type: Option<&str>) -> &'static str {
    match tag.to_ascii_lowercase().as_str() {
        "form" => "submit",
        "select" => "change",
        "textarea" => "input",
        "input" => match input_type.map(str::to_ascii_lowercase).as_deref() {
            Some("checkbox" | "radio" | "file") => "change",
            Some("submit" | "button" | "reset") => "click",
            _ => "input",
        },
        _ => "click",
    }
}

/// Parse a whitespace-separated `data-action` attribute. Malformed entries
/// are skipped.
#[must_use]
pub fn parse_actions(raw: &str, default: &str) -> Vec<ActionDescriptor> {
    raw.split_whitespace().filter_map(|entry| parse_one(entry, default)).collect()
}

fn parse_one(entry: &str, default: &str) -> Option<ActionDescriptor> {
    let (event, target) = match entry.split_once("->") {
        Some((event, target)) => (event, target),
        None => (default, entry),
    };
    let (controller, method) = target.split_once('#')?;
    let valid = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_'));
    // `keydown.enter` style filters are accepted and ignored.
    let event = event.split('.').next().unwrap_or(event);
    if !valid(event) || !valid(controller) || !valid(method) {
        return None;
    }
    Some(ActionDescriptor { event: event.to_owned(), controller: controller.to_owned(), method: method.to_owned() })
}
