//! Browser preference backends: `localStorage` and `document.cookie`.
//!
//! TRADE-OFFS
//! ==========
//! Storage can be missing entirely (blocked by privacy settings, sandboxed
//! frames). [`browser_preferences`] then falls back to in-memory backends so
//! the page still reconciles to defaults.

use std::rc::Rc;

use prefs::error::StoreError;
use prefs::store::{CookieJar, MemoryBackend, MemoryCookies, PreferenceBackend, Preferences};
use wasm_bindgen::JsCast;

/// `window.localStorage`.
pub struct LocalStorageBackend {
    storage: web_sys::Storage,
}

impl LocalStorageBackend {
    #[must_use]
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl PreferenceBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|_| StoreError::Unavailable)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::WriteRejected { key: key.to_owned(), reason: format!("{e:?}") })
    }

    fn entries(&self) -> Result<Vec<(String, String)>, StoreError> {
        let len = self.storage.length().map_err(|_| StoreError::Unavailable)?;
        let mut out = Vec::new();
        for i in 0..len {
            let Some(key) = self.storage.key(i).map_err(|_| StoreError::Unavailable)? else {
                continue;
            };
            if let Some(value) = self.read(&key)? {
                out.push((key, value));
            }
        }
        Ok(out)
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.storage.clear().map_err(|_| StoreError::Unavailable)
    }
}

/// `document.cookie`.
pub struct DocumentCookies {
    doc: web_sys::HtmlDocument,
}

impl DocumentCookies {
    #[must_use]
    pub fn open() -> Option<Self> {
        let doc = web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()?;
        Some(Self { doc })
    }
}

impl CookieJar for DocumentCookies {
    fn raw(&self) -> String {
        self.doc.cookie().unwrap_or_default()
    }

    fn assign(&self, assignment: &str) {
        if let Err(e) = self.doc.set_cookie(assignment) {
            leptos::logging::warn!("cookie write failed: {e:?}");
        }
    }
}

/// Store handle over the browser backends, or memory when they are missing.
#[must_use]
pub fn browser_preferences() -> Preferences {
    let backend: Rc<dyn PreferenceBackend> = match LocalStorageBackend::open() {
        Some(storage) => Rc::new(storage),
        None => {
            leptos::logging::warn!("localStorage unavailable; preferences last for this page only");
            Rc::new(MemoryBackend::new())
        }
    };
    let cookies: Rc<dyn CookieJar> = match DocumentCookies::open() {
        Some(jar) => Rc::new(jar),
        None => Rc::new(MemoryCookies::new()),
    };
    Preferences::new(backend, cookies)
}
