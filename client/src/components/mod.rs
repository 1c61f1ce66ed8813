//! Leptos components mounted into server-rendered markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is rendered by the server; components only own small islands a
//! widget mounts them into.

pub mod version_badge;
