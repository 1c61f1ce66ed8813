//! Error types for the preference engine.
//!
//! None of these errors is fatal to the page. Callers log and skip: storage
//! failures degrade to defaults, rejected values leave the document untouched,
//! and attach failures leave the element without behaviour.

use crate::style::Category;

/// Failure of the persistence backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backend cannot be reached at all (blocked storage, private mode).
    #[error("preference storage is unavailable")]
    Unavailable,
    /// The backend refused a write (quota exceeded and similar).
    #[error("write to `{key}` rejected: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Failure of a single style rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The value is not one the category accepts.
    #[error("rejected {category} value `{value}`")]
    Rejected { category: Category, value: String },
    /// An element the rule mutates is not on the page.
    #[error("no element matches `{selector}`")]
    MissingTarget { selector: String },
    /// The category's value list is fetched and has not arrived.
    #[error("{category} catalog has not loaded")]
    CatalogPending { category: Category },
}

/// Failure to bind a controller to an element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
    #[error("no controller registered as `{0}`")]
    UnknownController(String),
    #[error("`{controller}` requires value `{key}`")]
    MissingValue { controller: String, key: String },
    #[error("`{controller}` value `{key}` is not a valid {expected}: `{raw}`")]
    InvalidValue { controller: String, key: String, expected: &'static str, raw: String },
    #[error("`{controller}` requires target `{target}`")]
    MissingTarget { controller: String, target: String },
}

/// Invalid page configuration attribute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for `{key}`: `{raw}`")]
    Invalid { key: &'static str, raw: String },
}
