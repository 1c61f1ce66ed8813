//! Compound CSS selector subset understood by [`super::MemoryDocument`].
//!
//! Supports `tag`, `#id`, `.class`, `[attr]`, and `[attr=v]` with the `~=`,
//! `*=` and `^=` operators, combined without whitespace. That covers every
//! selector the style rules and widgets issue; combinators are not needed.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals,
    Word,
    Contains,
    Prefix,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Part {
    Id(String),
    Class(String),
    Attr { name: String, op: AttrOp, value: String },
}

/// Parsed compound selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    parts: Vec<Part>,
}

impl Selector {
    /// Parse `src`. Returns `None` for anything outside the supported subset.
    #[must_use]
    pub fn parse(src: &str) -> Option<Self> {
        let chars: Vec<char> = src.trim().chars().collect();
        let mut i = 0;
        let tag = read_ident(&chars, &mut i).map(|t| t.to_ascii_lowercase());
        let mut parts = Vec::new();

        while i < chars.len() {
            match chars[i] {
                '#' => {
                    i += 1;
                    parts.push(Part::Id(read_ident(&chars, &mut i)?));
                }
                '.' => {
                    i += 1;
                    parts.push(Part::Class(read_ident(&chars, &mut i)?));
                }
                '[' => {
                    i += 1;
                    parts.push(read_attr(&chars, &mut i)?);
                }
                _ => return None,
            }
        }

        if tag.is_none() && parts.is_empty() {
            return None;
        }
        Some(Self { tag, parts })
    }

    /// Test an element described by its tag, attribute lookup and class test.
    pub fn matches(&self, tag: &str, attr: impl Fn(&str) -> Option<String>, has_class: impl Fn(&str) -> bool) -> bool {
        if let Some(want) = &self.tag {
            if !want.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.parts.iter().all(|part| match part {
            Part::Id(id) => attr("id").as_deref() == Some(id.as_str()),
            Part::Class(class) => has_class(class),
            Part::Attr { name, op, value } => {
                let Some(actual) = attr(name) else {
                    return false;
                };
                match op {
                    AttrOp::Exists => true,
                    AttrOp::Equals => actual == *value,
                    AttrOp::Word => actual.split_whitespace().any(|w| w == value),
                    AttrOp::Contains => !value.is_empty() && actual.contains(value.as_str()),
                    AttrOp::Prefix => !value.is_empty() && actual.starts_with(value.as_str()),
                }
            }
        })
    }
}

fn read_ident(chars: &[char], i: &mut usize) -> Option<String> {
    let start = *i;
    while *i < chars.len() && (chars[*i].is_ascii_alphanumeric() || matches!(chars[*i], '-' | '_')) {
        *i += 1;
    }
    (*i > start).then(|| chars[start..*i].iter().collect())
}

fn read_attr(chars: &[char], i: &mut usize) -> Option<Part> {
    let name = read_ident(chars, i)?;
    let op = match (chars.get(*i)?, chars.get(*i + 1)) {
        (']', _) => {
            *i += 1;
            return Some(Part::Attr { name, op: AttrOp::Exists, value: String::new() });
        }
        ('=', _) => {
            *i += 1;
            AttrOp::Equals
        }
        ('~', Some('=')) => {
            *i += 2;
            AttrOp::Word
        }
        ('*', Some('=')) => {
            *i += 2;
            AttrOp::Contains
        }
        ('^', Some('=')) => {
            *i += 2;
            AttrOp::Prefix
        }
        _ => return None,
    };

    let value = match chars.get(*i)? {
        quote @ ('"' | '\'') => {
            let quote = *quote;
            *i += 1;
            let start = *i;
            while *i < chars.len() && chars[*i] != quote {
                *i += 1;
            }
            if *i >= chars.len() {
                return None;
            }
            let value: String = chars[start..*i].iter().collect();
            *i += 1;
            value
        }
        _ => read_ident(chars, i)?,
    };

    if chars.get(*i) != Some(&']') {
        return None;
    }
    *i += 1;
    Some(Part::Attr { name, op, value })
}
