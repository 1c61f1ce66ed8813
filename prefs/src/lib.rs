//! Persisted-preference engine for the Grylli web UI.
//!
//! This crate owns everything about UI preferences that does not need a
//! browser: the preference store contract, the per-category style rules that
//! turn a stored value into document mutations, the reconciliation scheduler
//! that decides when those rules re-run, and the small widget controllers that
//! attach to server-rendered markup. The `client` crate supplies the browser
//! implementations of [`store::PreferenceBackend`], [`store::CookieJar`] and
//! [`dom::Document`] and drives everything from DOM events.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Preference store contract, in-memory backends |
//! | [`keys`] | Known preference keys with scope and default |
//! | [`cookie`] | Cookie string formatting and parsing |
//! | [`dom`] | Document/element traits and the in-memory document |
//! | [`catalog`] | Theme, background pattern and font allow-lists |
//! | [`style`] | Style Applicator: one rule per [`style::Category`] |
//! | [`reconcile`] | Reconciliation Scheduler driven by [`reconcile::NavigationEvent`] |
//! | [`widgets`] | Scoped widget controllers |
//! | [`registry`] | Controller name to factory registry and attach lifecycle |
//! | [`config`] | Page-level configuration read from `<body>` attributes |
//! | [`error`] | Error types |
//! | [`consts`] | Class vocabularies and numeric limits |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod cookie;
pub mod dom;
pub mod error;
pub mod keys;
pub mod reconcile;
pub mod registry;
pub mod store;
pub mod style;
pub mod widgets;
