//! In-memory document tree.
//!
//! Mirrors the parts of the DOM the preference engine touches: classes,
//! attributes, inline styles, text, form values and parent/child links.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::selector::Selector;
use super::{Document, Element};

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: Option<String>,
    checked: bool,
    options: Vec<(String, String)>,
    children: Vec<MemoryElement>,
    parent: Weak<RefCell<Node>>,
}

/// Shared handle to an in-memory element.
#[derive(Clone, Debug)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl MemoryElement {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node { tag: tag.to_ascii_lowercase(), ..Node::default() })))
    }

    #[must_use]
    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    #[must_use]
    pub fn with_value(self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn with_child(self, child: MemoryElement) -> Self {
        self.append(&child);
        self
    }

    /// Append `child`, detaching it from any previous parent.
    pub fn append(&self, child: &MemoryElement) {
        child.remove();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Whether the element hangs off a parent.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.0.borrow().parent.upgrade().is_some()
    }

    #[must_use]
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.0.borrow().checked
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.0.borrow().attrs.contains_key("disabled")
    }

    /// `(value, label)` pairs last written by [`Element::replace_options`].
    #[must_use]
    pub fn options(&self) -> Vec<(String, String)> {
        self.0.borrow().options.clone()
    }

    fn matches(&self, selector: &Selector) -> bool {
        let node = self.0.borrow();
        selector.matches(
            &node.tag,
            |name| {
                if name == "class" {
                    Some(node.classes.join(" "))
                } else {
                    node.attrs.get(name).cloned()
                }
            },
            |class| node.classes.iter().any(|c| c == class),
        )
    }

    fn collect(&self, selector: &Selector, include_self: bool, out: &mut Vec<MemoryElement>) {
        if include_self && self.matches(selector) {
            out.push(self.clone());
        }
        let children = self.0.borrow().children.clone();
        for child in &children {
            child.collect(selector, true, out);
        }
    }
}

impl Element for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.0.borrow_mut().attrs.insert(name.to_owned(), value.to_owned());
    }

    fn remove_attr(&self, name: &str) {
        self.0.borrow_mut().attrs.remove(name);
    }

    fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        if value.is_empty() {
            node.styles.remove(property);
        } else {
            node.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.0.borrow_mut().text);
    }

    fn value(&self) -> Option<String> {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = Some(value.to_owned());
    }

    fn set_checked(&self, checked: bool) {
        self.0.borrow_mut().checked = checked;
    }

    fn replace_options(&self, options: &[(String, String)]) {
        self.0.borrow_mut().options = options.to_vec();
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        let Some(selector) = Selector::parse(selector) else {
            log::debug!("unsupported selector `{selector}`");
            return Vec::new();
        };
        let mut out = Vec::new();
        self.collect(&selector, false, &mut out);
        out
    }

    fn contains(&self, other: &Self) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if Rc::ptr_eq(&node.0, &self.0) {
                return true;
            }
            current = node.0.borrow().parent.upgrade().map(MemoryElement);
        }
        false
    }

    fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn remove(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent.borrow_mut().children.retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        }
        self.0.borrow_mut().parent = Weak::new();
    }
}

/// In-memory page: an `<html>` root plus title and location.
///
/// There is no separate `<body>`; elements appended to the body land under
/// the root.
#[derive(Debug)]
pub struct MemoryDocument {
    root: MemoryElement,
    title: RefCell<String>,
    path: RefCell<String>,
    origin: RefCell<(String, String)>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: MemoryElement::new("html"),
            title: RefCell::new(String::new()),
            path: RefCell::new("/".to_owned()),
            origin: RefCell::new(("https:".to_owned(), "localhost".to_owned())),
        }
    }

    /// Append `child` under the root element.
    pub fn append(&self, child: &MemoryElement) {
        self.root.append(child);
    }

    /// Simulate a navigation that changes `location.pathname`.
    pub fn navigate(&self, path: &str) {
        path.clone_into(&mut self.path.borrow_mut());
    }

    /// Serve the page from `protocol` (`http:`) and `hostname`.
    pub fn serve_from(&self, protocol: &str, hostname: &str) {
        *self.origin.borrow_mut() = (protocol.to_owned(), hostname.to_owned());
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn root(&self) -> MemoryElement {
        self.root.clone()
    }

    fn query_all(&self, selector: &str) -> Vec<MemoryElement> {
        let Some(parsed) = Selector::parse(selector) else {
            log::debug!("unsupported selector `{selector}`");
            return Vec::new();
        };
        let mut out = Vec::new();
        self.root.collect(&parsed, true, &mut out);
        out
    }

    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn set_title(&self, title: &str) {
        title.clone_into(&mut self.title.borrow_mut());
    }

    fn path(&self) -> String {
        self.path.borrow().clone()
    }

    fn protocol(&self) -> String {
        self.origin.borrow().0.clone()
    }

    fn hostname(&self) -> String {
        self.origin.borrow().1.clone()
    }

    fn create_element(&self, tag: &str) -> Option<MemoryElement> {
        Some(MemoryElement::new(tag))
    }

    fn append_to_body(&self, element: &MemoryElement) {
        self.root.append(element);
    }
}
