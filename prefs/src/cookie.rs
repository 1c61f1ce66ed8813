//! Cookie string helpers.
//!
//! Values are percent-encoded so that separators (`;`, `=`, spaces) in a
//! preference value cannot split or forge cookie attributes.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use crate::consts::COOKIE_MAX_AGE_SECS;

/// Build the `document.cookie` assignment for a mirrored preference.
#[must_use]
pub fn format_cookie(name: &str, value: &str) -> String {
    format!("{name}={}; path=/; max-age={COOKIE_MAX_AGE_SECS}; samesite=lax", encode(value))
}

/// Build the assignment that expires `name` immediately.
#[must_use]
pub fn expire_cookie(name: &str) -> String {
    format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/")
}

/// Find `name` in a `document.cookie` style string and decode its value.
#[must_use]
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key.trim() == name && !value.is_empty() {
            Some(decode(value))
        } else {
            None
        }
    })
}

/// Names of every cookie in a `document.cookie` style string.
#[must_use]
pub fn cookie_names(raw: &str) -> Vec<String> {
    raw.split(';')
        .filter_map(|pair| {
            let name = pair.split('=').next()?.trim();
            (!name.is_empty()).then(|| name.to_owned())
        })
        .collect()
}

fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Some(byte) = hex_pair(bytes[i + 1], bytes[i + 2]) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_digit(hi)? * 16 + hex_digit(lo)?)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
