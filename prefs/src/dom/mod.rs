//! Document abstraction shared by style rules and widgets.
//!
//! The browser implementation lives in the `client` crate; [`memory`]
//! provides a small tree that understands the same selectors so rules and
//! widgets are tested without a browser.
//!
//! Mutating methods take `&self`: DOM handles are shared references into a
//! tree the page owns, and the browser reports no useful failure for class or
//! style changes on a live element.

pub mod memory;
mod selector;

pub use memory::{MemoryDocument, MemoryElement};
pub use selector::Selector;

/// One element of the page.
pub trait Element: Clone {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Class list in document order.
    fn classes(&self) -> Vec<String>;

    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);
    fn remove_attr(&self, name: &str);

    /// Inline style property, `None` when unset.
    fn style(&self, property: &str) -> Option<String>;
    fn set_style(&self, property: &str, value: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Form control value (`<select>`, `<input>`).
    fn value(&self) -> Option<String>;
    /// Set a form control value without dispatching `change`.
    fn set_value(&self, value: &str);
    fn set_checked(&self, checked: bool);

    /// Replace the `<option>` children of a `<select>`.
    fn replace_options(&self, options: &[(String, String)]);

    /// Descendants matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self>;
    /// Whether `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;
    /// Whether two handles refer to the same node.
    fn same_node(&self, other: &Self) -> bool;
    /// Detach from the parent. A detached element stays usable.
    fn remove(&self);

    fn toggle_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if disabled {
            self.set_attr("disabled", "");
        } else {
            self.remove_attr("disabled");
        }
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.query_all(selector).into_iter().next()
    }
}

/// The page: root element, title and location.
pub trait Document {
    type Element: Element;

    /// The `<html>` element.
    fn root(&self) -> Self::Element;

    /// Elements matching `selector`, including the root, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn title(&self) -> String;
    fn set_title(&self, title: &str);

    /// `location.pathname`.
    fn path(&self) -> String;
    /// `location.protocol`, with its trailing colon (`https:`).
    fn protocol(&self) -> String;
    /// `location.hostname`.
    fn hostname(&self) -> String;

    /// A new element, not yet in the page.
    fn create_element(&self, tag: &str) -> Option<Self::Element>;
    /// Append `element` to `<body>`.
    fn append_to_body(&self, element: &Self::Element);

    fn query(&self, selector: &str) -> Option<Self::Element> {
        self.query_all(selector).into_iter().next()
    }
}

impl<D: Document> Document for std::rc::Rc<D> {
    type Element = D::Element;

    fn root(&self) -> Self::Element {
        (**self).root()
    }

    fn query_all(&self, selector: &str) -> Vec<Self::Element> {
        (**self).query_all(selector)
    }

    fn title(&self) -> String {
        (**self).title()
    }

    fn set_title(&self, title: &str) {
        (**self).set_title(title);
    }

    fn path(&self) -> String {
        (**self).path()
    }

    fn protocol(&self) -> String {
        (**self).protocol()
    }

    fn hostname(&self) -> String {
        (**self).hostname()
    }

    fn create_element(&self, tag: &str) -> Option<Self::Element> {
        (**self).create_element(tag)
    }

    fn append_to_body(&self, element: &Self::Element) {
        (**self).append_to_body(element);
    }
}

/// Selector for a controller's named target: `[data-<controller>-target~="<name>"]`.
#[must_use]
pub fn target_selector(controller: &str, target: &str) -> String {
    format!("[{}~=\"{target}\"]", target_attr(controller))
}

/// Attribute holding a controller's target names.
#[must_use]
pub fn target_attr(controller: &str) -> String {
    format!("data-{controller}-target")
}

/// Attribute holding a typed controller value: `data-<controller>-<key>-value`.
///
/// `key` is given in camelCase, as markup authors name values, and converted to
/// the kebab-case attribute form.
#[must_use]
pub fn value_attr(controller: &str, key: &str) -> String {
    format!("data-{controller}-{}-value", kebab(key))
}

fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Controller names listed in a `data-controller` attribute.
#[must_use]
pub fn controller_names(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}
