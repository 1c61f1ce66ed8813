//! Browser runtime for Grylli UI preferences.
//!
//! Binds the `prefs` engine to the live page: `localStorage` and cookie
//! backends, a `web-sys` document, delegated `data-action` events, htmx swap
//! notifications and the widget registry. Without the `hydrate` feature only
//! the pure helpers build, which is what the native test suite exercises.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`runtime`] | Action parsing, routing and (browser) the page runtime |
//! | [`net`] | Catalog, status and theme-log requests |
//! | [`components`] | Leptos islands (version badge) |
//! | `dom` | `web-sys` implementation of the document traits (browser) |
//! | `storage` | `localStorage` and cookie backends (browser) |

pub mod components;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod net;
pub mod runtime;
#[cfg(feature = "hydrate")]
pub mod storage;

#[cfg(feature = "hydrate")]
thread_local! {
    static PAGE: std::cell::RefCell<Option<std::rc::Rc<runtime::page::Page>>> =
        const { std::cell::RefCell::new(None) };
}

/// WASM entry point: install logging and boot the page runtime once the
/// document has been parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if doc.ready_state() == "loading" {
        let on_ready = wasm_bindgen::closure::Closure::once_into_js(boot);
        let _ = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        boot();
    }
}

#[cfg(feature = "hydrate")]
fn boot() {
    match runtime::page::Page::boot() {
        Some(page) => PAGE.with(|slot| *slot.borrow_mut() = Some(page)),
        None => leptos::logging::warn!("no document; preference runtime not started"),
    }
}
