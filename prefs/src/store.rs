//! Preference store: a total key-value contract over fallible backends.
//!
//! DESIGN
//! ======
//! Backends report failures honestly through [`StoreError`]; [`Preferences`]
//! is the only place those failures are absorbed. Reads fall back to the
//! caller's default and writes are logged and dropped, so a blocked or full
//! `localStorage` never reaches a style rule or a widget.
//!
//! [`Preferences`] is a cheap `Rc` handle. It is cloned into every controller
//! instead of being reached through a global, which is what lets tests swap in
//! [`MemoryBackend`] and [`MemoryCookies`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cookie::{cookie_names, expire_cookie, find_cookie, format_cookie};
use crate::error::StoreError;
use crate::keys::{PrefKey, Scope};

/// Durable origin-scoped key-value storage (`localStorage` in the browser).
pub trait PreferenceBackend {
    /// Read a value. `Ok(None)` means the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when storage cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when storage is unreachable or refuses the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Every stored entry, in backend order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when storage cannot be reached.
    fn entries(&self) -> Result<Vec<(String, String)>, StoreError>;

    /// Remove every entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when storage cannot be reached.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Access to the raw `document.cookie` string.
pub trait CookieJar {
    /// The full cookie header visible to scripts (`a=1; b=2`).
    fn raw(&self) -> String;

    /// Apply one `document.cookie = ...` assignment.
    fn assign(&self, assignment: &str);
}

/// Injectable preference store handle.
#[derive(Clone)]
pub struct Preferences {
    backend: Rc<dyn PreferenceBackend>,
    cookies: Rc<dyn CookieJar>,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}

impl Preferences {
    #[must_use]
    pub fn new(backend: Rc<dyn PreferenceBackend>, cookies: Rc<dyn CookieJar>) -> Self {
        Self { backend, cookies }
    }

    /// Store backed entirely by memory. Used by tests and as the fallback when
    /// the browser denies storage access.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryBackend::new()), Rc::new(MemoryCookies::new()))
    }

    /// Read `key`, returning `default` when it is absent or storage fails.
    #[must_use]
    pub fn get(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_owned())
    }

    /// Read `key` without a fallback. Storage failures read as absent.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        match self.backend.read(key) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("preference read of `{key}` failed: {e}");
                None
            }
        }
    }

    /// Write `key`. Failures are logged and swallowed.
    pub fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.write(key, value) {
            log::warn!("preference write of `{key}` dropped: {e}");
        }
    }

    /// Read a known preference, honouring its scope.
    ///
    /// Cookie-scoped entries prefer the cookie, which is what the server used
    /// to render the current page, and fall back to durable storage.
    #[must_use]
    pub fn entry(&self, key: &PrefKey) -> String {
        self.find_entry(key).unwrap_or_else(|| key.default.to_owned())
    }

    /// Like [`Self::entry`] but without the fallback, so callers can tell a
    /// stored value from a default.
    #[must_use]
    pub fn find_entry(&self, key: &PrefKey) -> Option<String> {
        if key.scope == Scope::SessionCookie {
            if let Some(value) = self.cookie(key.name) {
                return Some(value);
            }
        }
        self.lookup(key.name)
    }

    /// Persist a known preference, mirroring cookie-scoped entries.
    pub fn store(&self, key: &PrefKey, value: &str) {
        self.set(key.name, value);
        if key.scope == Scope::SessionCookie {
            self.cookies.assign(&format_cookie(key.name, value));
        }
    }

    /// Read and decode a JSON entry. Malformed JSON reads as absent.
    #[must_use]
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.lookup(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring malformed `{key}`: {e}");
                None
            }
        }
    }

    /// Encode and write a JSON entry.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, &raw),
            Err(e) => log::warn!("could not encode `{key}`: {e}"),
        }
    }

    /// Every stored entry. Empty when storage is unavailable.
    #[must_use]
    pub fn get_all(&self) -> BTreeMap<String, String> {
        match self.backend.entries() {
            Ok(entries) => entries.into_iter().collect(),
            Err(e) => {
                log::debug!("preference listing failed: {e}");
                BTreeMap::new()
            }
        }
    }

    /// Remove every stored entry and expire every script-visible cookie.
    pub fn clear_all(&self) {
        if let Err(e) = self.backend.clear() {
            log::warn!("preference reset failed: {e}");
        }
        for name in cookie_names(&self.cookies.raw()) {
            self.cookies.assign(&expire_cookie(&name));
        }
    }

    /// Read a cookie by name.
    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<String> {
        find_cookie(&self.cookies.raw(), name)
    }

    /// The raw cookie string, for diagnostics.
    #[must_use]
    pub fn cookie_header(&self) -> String {
        self.cookies.raw()
    }
}

/// In-memory [`PreferenceBackend`].
#[derive(Debug)]
pub struct MemoryBackend {
    entries: RefCell<BTreeMap<String, String>>,
    available: Cell<bool>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: RefCell::new(BTreeMap::new()), available: Cell::new(true) }
    }

    /// A backend that fails every operation, like storage in a locked-down
    /// private window.
    #[must_use]
    pub fn unavailable() -> Self {
        let backend = Self::new();
        backend.available.set(false);
        backend
    }

    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let backend = Self::new();
        backend
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())));
        backend
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.available.get() { Ok(()) } else { Err(StoreError::Unavailable) }
    }
}

impl PreferenceBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check()?;
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, String)>, StoreError> {
        self.check()?;
        Ok(self.entries.borrow().iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.check()?;
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

/// In-memory [`CookieJar`] that understands the assignments
/// [`Preferences`] produces.
#[derive(Debug, Default)]
pub struct MemoryCookies {
    cookies: RefCell<BTreeMap<String, String>>,
    assignments: RefCell<Vec<String>>,
}

impl MemoryCookies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cookie(name: &str, value: &str) -> Self {
        let jar = Self::new();
        jar.cookies.borrow_mut().insert(name.to_owned(), value.to_owned());
        jar
    }

    /// Every assignment seen, oldest first.
    #[must_use]
    pub fn assignments(&self) -> Vec<String> {
        self.assignments.borrow().clone()
    }
}

impl CookieJar for MemoryCookies {
    fn raw(&self) -> String {
        self.cookies
            .borrow()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn assign(&self, assignment: &str) {
        self.assignments.borrow_mut().push(assignment.to_owned());
        let Some((name, rest)) = assignment.split_once('=') else {
            return;
        };
        let value = rest.split(';').next().unwrap_or_default().trim();
        let mut cookies = self.cookies.borrow_mut();
        if value.is_empty() || assignment.contains("expires=Thu, 01 Jan 1970") {
            cookies.remove(name.trim());
        } else {
            cookies.insert(name.trim().to_owned(), value.to_owned());
        }
    }
}
