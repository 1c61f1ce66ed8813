//! `flash-message`: show the first queued server message as a toast.
//!
//! The toast lives on `<body>`, outside the host, so a later flash replaces
//! it instead of stacking. It fades in on the next frame, stays for
//! [`VISIBLE_MS`], fades out and is removed. The toast goes with the widget
//! when the host element is detached.

use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, swap_classes, unknown_method};

pub const NAME: &str = "flash-message";

/// Marker class of every toast on the page.
pub const TOAST_CLASS: &str = "flash-toast";

const TOAST_CLASSES: [&str; 19] = [
    TOAST_CLASS,
    "fixed",
    "bottom-6",
    "left-1/2",
    "transform",
    "-translate-x-1/2",
    "z-50",
    "bg-green-600",
    "text-white",
    "font-medium",
    "text-sm",
    "px-6",
    "py-2",
    "rounded-lg",
    "shadow-lg",
    "max-w-fit",
    "text-center",
    "transition-opacity",
    "duration-500",
];

const VISIBLE: [&str; 1] = ["opacity-100"];
const INVISIBLE: [&str; 1] = ["opacity-0"];

/// Delay before the fade-in starts, about one frame.
pub const SHOW_DELAY_MS: u32 = 16;
/// How long the toast stays fully visible.
pub const VISIBLE_MS: u32 = 5_000;
/// Length of the fade-out transition.
pub const FADE_MS: u32 = 500;

const SHOW: &str = "show";
const FADE: &str = "fade";
const DISMISS: &str = "dismiss";

pub struct FlashMessage<D: Document> {
    doc: D,
    messages: Vec<String>,
    toast: Option<D::Element>,
}

/// # Errors
///
/// [`AttachError::InvalidValue`] when `messages` is not a JSON list of
/// strings.
pub fn attach<D: Document + 'static>(host: Host<D>, _env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    let messages = host.json_value::<Vec<String>>("messages")?.unwrap_or_default();
    Ok(Box::new(FlashMessage { doc: host.doc, messages, toast: None }))
}

impl<D: Document> FlashMessage<D> {
    fn pop_up(&mut self) -> Effect {
        let Some(message) = self.messages.first() else {
            return Effect::None;
        };
        for old in self.doc.query_all(&format!(".{TOAST_CLASS}")) {
            old.remove();
        }
        let Some(toast) = self.doc.create_element("div") else {
            log::warn!("{NAME}: cannot create toast");
            return Effect::None;
        };
        for class in TOAST_CLASSES.iter().chain(&INVISIBLE) {
            toast.add_class(class);
        }
        toast.set_text(message);
        self.doc.append_to_body(&toast);
        self.toast = Some(toast);
        Effect::After { delay_ms: SHOW_DELAY_MS, method: SHOW }
    }

    /// Flip the toast's opacity, then schedule `next`.
    fn fade_to(&self, visible: bool, delay_ms: u32, next: &'static str) -> Effect {
        let Some(toast) = &self.toast else {
            return Effect::None;
        };
        swap_classes(toast, visible, &VISIBLE, &INVISIBLE);
        Effect::After { delay_ms, method: next }
    }
}

impl<D: Document> Widget<D> for FlashMessage<D> {
    fn start(&mut self) -> Effect {
        self.pop_up()
    }

    fn disconnect(&mut self) {
        if let Some(toast) = self.toast.take() {
            toast.remove();
        }
    }

    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        match method {
            SHOW => self.fade_to(true, VISIBLE_MS, FADE),
            FADE => self.fade_to(false, FADE_MS, DISMISS),
            DISMISS => {
                self.disconnect();
                Effect::None
            }
            _ => unknown_method(NAME, method),
        }
    }
}

#[cfg(test)]
#[path = "flash_message_test.rs"]
mod flash_message_test;
