//! Browser implementation of the preference engine's document traits.
//!
//! Thin wrappers over `web-sys` handles. DOM exceptions from class, style and
//! attribute writes on live elements are ignored: the engine already treats
//! every mutation as best-effort.

use prefs::dom::{Document, Element};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, HtmlTextAreaElement};

/// A live page element.
#[derive(Clone, Debug, PartialEq)]
pub struct DomElement(pub web_sys::Element);

impl DomElement {
    #[must_use]
    pub fn tag(&self) -> String {
        self.0.tag_name().to_ascii_lowercase()
    }

    /// Nearest ancestor-or-self matching `selector`.
    #[must_use]
    pub fn closest(&self, selector: &str) -> Option<Self> {
        self.0.closest(selector).ok().flatten().map(Self)
    }

    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(Self)
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.0.is_connected()
    }
}

impl Element for DomElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn classes(&self) -> Vec<String> {
        let list = self.0.class_list();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn remove_attr(&self, name: &str) {
        let _ = self.0.remove_attribute(name);
    }

    fn style(&self, property: &str) -> Option<String> {
        let el = self.0.dyn_ref::<HtmlElement>()?;
        el.style().get_property_value(property).ok().filter(|v| !v.is_empty())
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(el) = self.0.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn value(&self) -> Option<String> {
        if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        self.0.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
    }

    fn set_value(&self, value: &str) {
        if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn set_checked(&self, checked: bool) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }

    fn replace_options(&self, options: &[(String, String)]) {
        let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() else {
            return;
        };
        select.set_inner_html("");
        for (value, label) in options {
            if let Ok(option) = HtmlOptionElement::new_with_text_and_value(label, value) {
                let _ = select.append_child(&option);
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        match self.0.query_selector_all(selector) {
            Ok(list) => collect_elements(&list),
            Err(_) => Vec::new(),
        }
    }

    fn contains(&self, other: &Self) -> bool {
        self.0.contains(Some(other.0.as_ref()))
    }

    fn same_node(&self, other: &Self) -> bool {
        self.0.is_same_node(Some(other.0.as_ref()))
    }

    fn remove(&self) {
        self.0.remove();
    }
}

/// The live page.
#[derive(Clone, Debug)]
pub struct BrowserDocument {
    doc: web_sys::Document,
    root: web_sys::Element,
}

impl BrowserDocument {
    /// The current window's document, if it has a root element.
    #[must_use]
    pub fn current() -> Option<Self> {
        let doc = web_sys::window()?.document()?;
        let root = doc.document_element()?;
        Some(Self { doc, root })
    }

    #[must_use]
    pub fn raw(&self) -> &web_sys::Document {
        &self.doc
    }

    #[must_use]
    pub fn body(&self) -> Option<DomElement> {
        self.doc.body().map(|b| DomElement(b.into()))
    }
}

impl Document for BrowserDocument {
    type Element = DomElement;

    fn root(&self) -> DomElement {
        DomElement(self.root.clone())
    }

    fn query_all(&self, selector: &str) -> Vec<DomElement> {
        match self.doc.query_selector_all(selector) {
            Ok(list) => collect_elements(&list),
            Err(_) => Vec::new(),
        }
    }

    fn title(&self) -> String {
        self.doc.title()
    }

    fn set_title(&self, title: &str) {
        self.doc.set_title(title);
    }

    fn path(&self) -> String {
        self.doc.location().and_then(|l| l.pathname().ok()).unwrap_or_default()
    }

    fn protocol(&self) -> String {
        self.doc.location().and_then(|l| l.protocol().ok()).unwrap_or_default()
    }

    fn hostname(&self) -> String {
        self.doc.location().and_then(|l| l.hostname().ok()).unwrap_or_default()
    }

    fn create_element(&self, tag: &str) -> Option<DomElement> {
        self.doc.create_element(tag).ok().map(DomElement)
    }

    fn append_to_body(&self, element: &DomElement) {
        if let Some(body) = self.doc.body() {
            let _ = body.append_child(&element.0);
        }
    }
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<DomElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(DomElement)
        .collect()
}
