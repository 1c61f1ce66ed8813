//! Allow-lists for enumerated preference values.
//!
//! Stored values are only ever turned into class names, attribute values or
//! asset URLs after a lookup here. Themes and background patterns are fetched
//! once per page from static JSON; fonts are compiled in.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Deserialize;

use crate::consts::FALLBACK_THEME;

/// Fonts offered by the font picker: `(value, family name)`.
pub const FONTS: [(&str, &str); 24] = [
    ("comic", "Comic Neue"),
    ("gloria", "Gloria Hallelujah"),
    ("inter", "Inter"),
    ("noto", "Noto Sans"),
    ("orbitron", "Orbitron"),
    ("pacifico", "Pacifico"),
    ("patrick", "Patrick Hand"),
    ("playfair", "Playfair Display"),
    ("plexmono", "IBM Plex Mono"),
    ("rubikmono", "Rubik Mono One"),
    ("sharetech", "Share Tech Mono"),
    ("vt323", "VT323"),
    ("rocksalt", "Rock Salt"),
    ("audiowide", "Audiowide"),
    ("amaticsc", "Amatic SC"),
    ("schoolbell", "Schoolbell"),
    ("lato", "Lato"),
    ("luckiest", "Luckiest Guy"),
    ("caveat", "Caveat"),
    ("satisfy", "Satisfy"),
    ("reenie", "Reenie Beanie"),
    ("righteous", "Righteous"),
    ("bebas", "Bebas Neue"),
    ("baloo2", "Baloo 2"),
];

/// Family name for an allowed font value.
#[must_use]
pub fn font_family(value: &str) -> Option<&'static str> {
    FONTS.iter().find(|(name, _)| *name == value).map(|(_, family)| *family)
}

/// Root class for an allowed font value.
#[must_use]
pub fn font_class(value: &str) -> Option<String> {
    font_family(value).map(|_| format!("font-{value}"))
}

/// Every class the font rule may leave on `<html>`.
pub fn font_classes() -> impl Iterator<Item = String> {
    FONTS.iter().map(|(name, _)| format!("font-{name}"))
}

/// Theme names, in the order the picker shows them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeCatalog {
    names: Vec<String>,
}

impl ThemeCatalog {
    /// Parse the fetched JSON array of theme names.
    ///
    /// # Errors
    ///
    /// Returns the decode error for anything but an array of strings.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let names: Vec<String> = serde_json::from_str(raw)?;
        Ok(Self::from_names(names))
    }

    /// Build from names, dropping any that are not plain identifiers.
    #[must_use]
    pub fn from_names(names: Vec<String>) -> Self {
        let names = names
            .into_iter()
            .filter(|name| {
                let ok = is_theme_name(name);
                if !ok {
                    log::warn!("dropping malformed theme name `{name}`");
                }
                ok
            })
            .collect();
        Self { names }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// First listed theme, or [`FALLBACK_THEME`] for an empty catalog.
    #[must_use]
    pub fn default_theme(&self) -> &str {
        self.names.first().map_or(FALLBACK_THEME, String::as_str)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `(value, label)` pairs for the theme `<select>`.
    #[must_use]
    pub fn options(&self) -> Vec<(String, String)> {
        self.names.iter().map(|n| (n.clone(), theme_label(n))).collect()
    }
}

/// Whether `name` can be a theme: non-empty ASCII letters, digits and dashes.
///
/// Used before the catalog arrives, when only the shape can be checked.
#[must_use]
pub fn is_theme_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= 64 && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Picker label for a theme: first letter capitalised.
#[must_use]
pub fn theme_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One background pattern descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub file: String,
}

/// Background patterns available on this server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Parse the fetched JSON array of `{name, file}` descriptors.
    ///
    /// # Errors
    ///
    /// Returns the decode error for malformed JSON.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let patterns: Vec<Pattern> = serde_json::from_str(raw)?;
        Ok(Self::from_patterns(patterns))
    }

    /// Build from descriptors, dropping files that could escape the static
    /// directory.
    #[must_use]
    pub fn from_patterns(patterns: Vec<Pattern>) -> Self {
        let patterns = patterns
            .into_iter()
            .filter(|p| {
                let ok = is_asset_file(&p.file);
                if !ok {
                    log::warn!("dropping background pattern with unsafe file `{}`", p.file);
                }
                ok
            })
            .collect();
        Self { patterns }
    }

    #[must_use]
    pub fn contains_file(&self, file: &str) -> bool {
        self.patterns.iter().any(|p| p.file == file)
    }

    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// `(value, label)` pairs for the background `<select>`.
    #[must_use]
    pub fn options(&self) -> Vec<(String, String)> {
        self.patterns.iter().map(|p| (p.file.clone(), pattern_label(&p.name))).collect()
    }
}

/// Picker label for a pattern: separators become spaces, words title-cased.
#[must_use]
pub fn pattern_label(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(theme_label)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_asset_file(file: &str) -> bool {
    !file.is_empty()
        && !file.contains("..")
        && !file.starts_with('/')
        && file.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'/'))
}
