//! `rate-limit-redirect`: counts down on the rate-limit page, then leaves for
//! `url`.
//!
//! The countdown is a chain of one-second [`Effect::After`] steps, so leaving
//! the page or swapping the element out cancels it with the attachment.

use crate::dom::{Document, Element};
use crate::error::AttachError;

use super::{AttachEnv, Effect, Host, Widget, local_url, unknown_method};

pub const NAME: &str = "rate-limit-redirect";

/// Element inside the host showing the seconds left.
pub const DISPLAY_SELECTOR: &str = "#delay";

const TICK: &str = "tick";
const SECOND_MS: u32 = 1_000;

pub struct RateLimitRedirect<D: Document> {
    display: Option<D::Element>,
    url: String,
    remaining: u32,
}

/// # Errors
///
/// [`AttachError::MissingValue`] without `url`, and
/// [`AttachError::InvalidValue`] when `delay` is not a number or `url` leaves
/// the site.
pub fn attach<D: Document + 'static>(host: Host<D>, _env: &AttachEnv) -> Result<Box<dyn Widget<D>>, AttachError> {
    let remaining = host.u32_value("delay")?.unwrap_or(0);
    let raw = host.required_value("url")?;
    let url = local_url(&raw).ok_or_else(|| host.invalid("url", "same-site path", raw.clone()))?.to_owned();
    let display = host.element.query(DISPLAY_SELECTOR);
    Ok(Box::new(RateLimitRedirect::<D> { display, url, remaining }))
}

impl<D: Document> RateLimitRedirect<D> {
    fn render(&self) {
        if let Some(display) = &self.display {
            display.set_text(&self.remaining.to_string());
        }
    }

    fn step(&self) -> Effect {
        if self.remaining == 0 {
            Effect::Navigate(self.url.clone())
        } else {
            Effect::After { delay_ms: SECOND_MS, method: TICK }
        }
    }
}

impl<D: Document> Widget<D> for RateLimitRedirect<D> {
    fn connect(&mut self) {
        self.render();
    }

    fn start(&mut self) -> Effect {
        self.step()
    }

    fn handle(&mut self, method: &str, _source: &D::Element) -> Effect {
        match method {
            TICK => {
                self.remaining = self.remaining.saturating_sub(1);
                self.render();
                self.step()
            }
            _ => unknown_method(NAME, method),
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_redirect_test.rs"]
mod rate_limit_redirect_test;
