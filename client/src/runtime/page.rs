//! Page runtime.
//!
//! DESIGN
//! ======
//! One [`Page`] lives for the lifetime of the document. It listens at the
//! document level and finds the controller for each event by walking up from
//! the event target, so elements swapped in by htmx need no rebinding.
//!
//! Widgets are attached when their element appears (initial scan, mutation
//! observer, `htmx:afterSettle`) and detached when it leaves. A [`Mounted`]
//! entry owns the widget together with its poll interval and pending
//! timeouts (debounced actions and [`Effect::After`] steps), so detaching
//! drops all three.
//!
//! Nothing here holds a `RefCell` borrow across an await or a callback into
//! the browser that could re-enter the page synchronously.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use leptos::task::spawn_local;
use prefs::catalog::font_family;
use prefs::config::UiConfig;
use prefs::consts::LAYOUT_SETTLE_FRAMES;
use prefs::dom::{Document, Element, controller_names};
use prefs::keys;
use prefs::reconcile::{NavigationEvent, Reconciler};
use prefs::registry::{Attached, Registry};
use prefs::style::Category;
use prefs::widgets::{AttachEnv, Effect, collapse, version};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::actions::{ActionDescriptor, default_event, parse_actions};
use super::routing::{Route, route, toggled_theme};
use crate::components::version_badge;
use crate::dom::{BrowserDocument, DomElement};
use crate::net::api;
use crate::storage::browser_preferences;

/// Events delegated from the document to controllers.
const DELEGATED_EVENTS: [&str; 6] = ["click", "change", "input", "submit", "htmx:afterSettle", "htmx:afterOnLoad"];

type Listener = Closure<dyn FnMut(web_sys::Event)>;
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>;

struct Mounted {
    attached: Attached<BrowserDocument>,
    /// Polling stops when this is dropped.
    _poll: Option<Interval>,
    /// Pending timeouts by method name.
    timers: HashMap<String, Timeout>,
}

impl Mounted {
    fn is(&self, controller: &str, element: &DomElement) -> bool {
        self.attached.controller() == controller && self.attached.element().same_node(element)
    }
}

pub struct Page {
    me: Weak<Page>,
    doc: BrowserDocument,
    env: AttachEnv,
    registry: Registry<BrowserDocument>,
    reconciler: RefCell<Reconciler<BrowserDocument>>,
    mounted: RefCell<Vec<Mounted>>,
    listeners: RefCell<Vec<(String, Listener)>>,
    observer: RefCell<Option<(web_sys::MutationObserver, ObserverCallback)>>,
}

impl Page {
    /// Reconcile the document, attach widgets and start listening.
    pub fn boot() -> Option<Rc<Self>> {
        let doc = BrowserDocument::current()?;
        let config = read_config(&doc);
        let prefs = browser_preferences();

        let hints = collapse::preload_classes(&prefs, &doc);
        leptos::logging::debug_warn!("collapse hints: {hints:?}");

        let mut registry = Registry::with_defaults();
        registry.register(version::NAME, version_badge::attach);

        let reconciler = Reconciler::new(doc.clone(), prefs.clone(), &config);
        let page = Rc::new_cyclic(|me| Self {
            me: me.clone(),
            doc,
            env: AttachEnv { prefs, config },
            registry,
            reconciler: RefCell::new(reconciler),
            mounted: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
        });

        page.reconcile(NavigationEvent::InitialLoad);
        page.scan();
        page.listen();
        page.observe();
        page.load_catalogs();
        Some(page)
    }

    // ── Reconciliation ──────────────────────────────────────────

    fn reconcile(&self, event: NavigationEvent) {
        let report = self.reconciler.borrow_mut().handle(event);
        if !report.deferred.is_empty() {
            self.settle_after_layout();
        }
    }

    fn settle_after_layout(&self) {
        let me = self.me.clone();
        after_frames(
            LAYOUT_SETTLE_FRAMES,
            Box::new(move || {
                if let Some(page) = me.upgrade() {
                    page.reconciler.borrow_mut().settle_layout();
                }
            }),
        );
    }

    fn load_catalogs(&self) {
        let me = self.me.clone();
        let themes_url = self.env.config.themes_url();
        let patterns_url = self.env.config.patterns_url();
        spawn_local(async move {
            let (themes, patterns) =
                futures::future::join(api::fetch_themes(&themes_url), api::fetch_patterns(&patterns_url)).await;
            let Some(page) = me.upgrade() else {
                return;
            };
            let mut reconciler = page.reconciler.borrow_mut();
            reconciler.themes_loaded(themes);
            reconciler.patterns_loaded(patterns);
        });
    }

    fn user_change(&self, category: Category, value: String) {
        if category == Category::FontFamily {
            self.load_font(&value);
        }
        let report = self.reconciler.borrow_mut().handle(NavigationEvent::UserChange { category, value });
        if category == Category::Theme {
            if let Some(theme) = report.applied(Category::Theme) {
                let url = self.env.config.theme_log_url();
                let theme = theme.to_owned();
                spawn_local(async move { api::log_theme_change(&url, &theme).await });
            }
        }
    }

    fn load_font(&self, value: &str) {
        let Some(family) = font_family(value) else {
            return;
        };
        let promise = self.doc.raw().fonts().load(&api::font_load_spec(family));
        spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                leptos::logging::debug_warn!("font load failed: {e:?}");
            }
        });
    }

    // ── Widget lifecycle ────────────────────────────────────────

    /// Attach widgets to new controller elements and detach those whose
    /// element left the page.
    fn scan(&self) {
        self.mounted.borrow_mut().retain(|m| {
            let el = m.attached.element();
            el.is_connected()
                && el.attr("data-controller").is_some_and(|raw| controller_names(&raw).contains(&m.attached.controller()))
        });

        for element in self.doc.query_all("[data-controller]") {
            let Some(raw) = element.attr("data-controller") else {
                continue;
            };
            for name in controller_names(&raw) {
                if !self.registry.contains(name) {
                    continue;
                }
                if self.mounted.borrow().iter().any(|m| m.is(name, &element)) {
                    continue;
                }
                self.attach(name, &element);
            }
        }
    }

    fn attach(&self, name: &str, element: &DomElement) {
        let attached = match self.registry.attach(name, self.doc.clone(), element.clone(), &self.env) {
            Ok(attached) => attached,
            Err(e) => {
                leptos::logging::warn!("{e}");
                return;
            }
        };
        let controller = attached.controller();
        let poll = attached.fetch().and_then(|spec| {
            self.fetch_for(controller, element.clone(), spec.url.clone());
            let interval_ms = spec.interval_ms?;
            let me = self.me.clone();
            let element = element.clone();
            Some(Interval::new(interval_ms, move || {
                if let Some(page) = me.upgrade() {
                    page.fetch_for(controller, element.clone(), spec.url.clone());
                }
            }))
        });
        let effect = {
            let mut mounted = self.mounted.borrow_mut();
            mounted.push(Mounted { attached, _poll: poll, timers: HashMap::new() });
            mounted.last_mut().map_or(Effect::None, |m| m.attached.start())
        };
        self.perform(controller, element, effect);
    }

    fn fetch_for(&self, controller: &'static str, element: DomElement, url: String) {
        let me = self.me.clone();
        spawn_local(async move {
            let body = api::fetch_text(&url).await;
            let Some(page) = me.upgrade() else {
                return;
            };
            if let Some(m) = page.mounted.borrow_mut().iter_mut().find(|m| m.is(controller, &element)) {
                m.attached.on_fetched(body);
            }
        });
    }

    // ── Events ──────────────────────────────────────────────────

    fn listen(&self) {
        for kind in DELEGATED_EVENTS {
            let me = self.me.clone();
            let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let Some(page) = me.upgrade() {
                    page.on_event(&event);
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            if self.doc.raw().add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref()).is_ok() {
                self.listeners.borrow_mut().push((kind.to_owned(), listener));
            }
        }
    }

    fn observe(&self) {
        let Some(body) = self.doc.body() else {
            return;
        };
        let me = self.me.clone();
        let callback = Closure::wrap(Box::new(move |_records: js_sys::Array, _observer: web_sys::MutationObserver| {
            if let Some(page) = me.upgrade() {
                page.scan();
            }
        }) as Box<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>);
        let Ok(observer) = web_sys::MutationObserver::new(callback.as_ref().unchecked_ref()) else {
            return;
        };
        let init = web_sys::MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        if observer.observe_with_options(&body.0, &init).is_ok() {
            *self.observer.borrow_mut() = Some((observer, callback));
        }
    }

    fn on_event(&self, event: &web_sys::Event) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()).map(DomElement) else {
            return;
        };
        let kind = event.type_();
        match kind.as_str() {
            "htmx:afterSettle" => {
                self.reconcile(NavigationEvent::PartialSwap);
                for m in self.mounted.borrow_mut().iter_mut() {
                    m.attached.on_partial_swap();
                }
                self.scan();
                return;
            }
            "htmx:afterOnLoad" => {
                let trigger = load_trigger(event).unwrap_or(target);
                for m in self.mounted.borrow_mut().iter_mut() {
                    if m.attached.element().contains(&trigger) {
                        m.attached.on_after_load(&trigger);
                    }
                }
                return;
            }
            "click" => {
                for m in self.mounted.borrow_mut().iter_mut() {
                    m.attached.on_document_click(&target);
                }
            }
            "input" => self.input_actions(&target),
            _ => {}
        }

        let mut node = target.closest("[data-action]");
        while let Some(el) = node {
            let default = default_event(&el.tag(), el.attr("type").as_deref());
            let raw = el.attr("data-action").unwrap_or_default();
            for action in parse_actions(&raw, default).into_iter().filter(|a| a.event == kind) {
                self.run_action(&action, &el);
            }
            node = el.parent().and_then(|p| p.closest("[data-action]"));
        }
    }

    fn run_action(&self, action: &ActionDescriptor, source: &DomElement) {
        match route(&action.controller, &action.method, source.value().as_deref()) {
            Route::Style { category, value } => self.user_change(category, value),
            Route::ToggleTheme => {
                let current = self.env.prefs.find_entry(&keys::THEME).unwrap_or_default();
                self.user_change(Category::Theme, toggled_theme(&current).to_owned());
            }
            Route::ToggleSidebar => {
                self.reconciler.borrow_mut().toggle_sidebar();
            }
            Route::Widget => {
                let selector = format!("[data-controller~=\"{}\"]", action.controller);
                if let Some(host) = source.closest(&selector) {
                    self.dispatch(&action.controller, &host, &action.method, source);
                }
            }
            Route::Ignore => {}
        }
    }

    /// Run the input action of every widget containing `target`.
    fn input_actions(&self, target: &DomElement) {
        let pending: Vec<(&'static str, DomElement, &'static str)> = self
            .mounted
            .borrow()
            .iter()
            .filter(|m| m.attached.element().contains(target))
            .filter_map(|m| Some((m.attached.controller(), m.attached.element().clone(), m.attached.input_action()?)))
            .collect();
        for (controller, host, method) in pending {
            self.dispatch(controller, &host, method, target);
        }
    }

    fn dispatch(&self, controller: &str, host: &DomElement, method: &str, source: &DomElement) {
        let mut mounted = self.mounted.borrow_mut();
        let Some(m) = mounted.iter_mut().find(|m| m.is(controller, host)) else {
            leptos::logging::debug_warn!("{controller}#{method}: controller not attached");
            return;
        };
        let Some(delay) = m.attached.debounce_ms(method) else {
            drop(mounted);
            self.dispatch_now(controller, host, method, source);
            return;
        };
        let me = self.me.clone();
        let (controller, host, method_owned, source) =
            (controller.to_owned(), host.clone(), method.to_owned(), source.clone());
        let timeout = Timeout::new(delay, move || {
            if let Some(page) = me.upgrade() {
                page.dispatch_now(&controller, &host, &method_owned, &source);
            }
        });
        // Replacing the entry drops, and so cancels, the previous timeout.
        m.timers.insert(method.to_owned(), timeout);
    }

    fn dispatch_now(&self, controller: &str, host: &DomElement, method: &str, source: &DomElement) {
        let effect = {
            let mut mounted = self.mounted.borrow_mut();
            let Some(m) = mounted.iter_mut().find(|m| m.is(controller, host)) else {
                return;
            };
            m.timers.remove(method);
            m.attached.handle(method, source)
        };
        self.perform(controller, host, effect);
    }

    fn perform(&self, controller: &str, host: &DomElement, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Reload => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            }
            Effect::Navigate(url) => {
                let Some(window) = web_sys::window() else {
                    return;
                };
                if let Err(e) = window.location().set_href(&url) {
                    leptos::logging::warn!("{controller}: navigation to {url} failed: {e:?}");
                }
            }
            Effect::Download { filename, text } => download(&filename, &text),
            Effect::After { delay_ms, method } => {
                let me = self.me.clone();
                let (owner, target) = (controller.to_owned(), host.clone());
                let timeout = Timeout::new(delay_ms, move || {
                    if let Some(page) = me.upgrade() {
                        page.dispatch_now(&owner, &target, method, &target);
                    }
                });
                // A widget detached in the meantime drops the timeout here.
                if let Some(m) = self.mounted.borrow_mut().iter_mut().find(|m| m.is(controller, host)) {
                    m.timers.insert(method.to_owned(), timeout);
                }
            }
        }
    }
}

fn read_config(doc: &BrowserDocument) -> UiConfig {
    let Some(body) = doc.body() else {
        return UiConfig::default();
    };
    UiConfig::from_attrs(|name| body.attr(name)).unwrap_or_else(|e| {
        leptos::logging::warn!("page configuration rejected: {e}; using defaults");
        UiConfig::default()
    })
}

/// The element that triggered an htmx request, from `event.detail.elt`.
fn load_trigger(event: &web_sys::Event) -> Option<DomElement> {
    let detail = event.dyn_ref::<web_sys::CustomEvent>()?.detail();
    let elt = js_sys::Reflect::get(&detail, &"elt".into()).ok()?;
    elt.dyn_into::<web_sys::Element>().ok().map(DomElement)
}

/// Run `f` after `frames` animation frames.
fn after_frames(frames: u32, f: Box<dyn FnOnce()>) {
    if frames == 0 {
        f();
        return;
    }
    let Some(window) = web_sys::window() else {
        f();
        return;
    };
    let next = Closure::once_into_js(move || after_frames(frames - 1, f));
    if window.request_animation_frame(next.unchecked_ref()).is_err() {
        leptos::logging::warn!("requestAnimationFrame failed; layout rules not applied");
    }
}

fn download(filename: &str, text: &str) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };
    if let Ok(anchor) = doc.create_element("a").and_then(|a| a.dyn_into::<web_sys::HtmlAnchorElement>().map_err(Into::into)) {
        anchor.set_href(&url);
        anchor.set_download(filename);
        if let Some(body) = doc.body() {
            let _ = body.append_child(&anchor);
            anchor.click();
            anchor.remove();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}
