//! Networking for catalogs, widget polling and the theme-change log.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request is optional: the page renders with defaults while fetches
//! are in flight and keeps those defaults when a fetch fails.

pub mod api;
