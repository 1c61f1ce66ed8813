//! Event plumbing between the live page and the preference engine.
//!
//! ARCHITECTURE
//! ============
//! `actions` and `routing` are pure and tested natively. `page` (browser
//! only) owns the reconciler, the attached widgets, their timers and the
//! document listeners.

pub mod actions;
#[cfg(feature = "hydrate")]
pub mod page;
pub mod routing;
