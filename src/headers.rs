//! Response header parsing.
//!
//! The service reports most results through response headers, so the raw
//! header block is turned into a map keyed by the capitalized header name.
//! Parsing is best effort and never fails.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};


/// Value(s) recorded for one header name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    /// The header occurred once.
    Single(String),
    /// The header occurred several times; values are in order of appearance.
    Multiple(Vec<String>),
}

impl HeaderValue {
    /// Returns the value if the header occurred exactly once.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            HeaderValue::Single(value) => Some(value),
            HeaderValue::Multiple(_) => None,
        }
    }

    /// Returns the first value seen.
    pub fn first(&self) -> Option<&str> {
        self.values().first().map(String::as_str)
    }

    /// Returns every value seen, in order.
    pub fn values(&self) -> &[String] {
        match self {
            HeaderValue::Single(value) => std::slice::from_ref(value),
            HeaderValue::Multiple(values) => values,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            HeaderValue::Single(existing) => {
                let first = std::mem::take(existing);
                *self = HeaderValue::Multiple(vec![first, value]);
            }
            HeaderValue::Multiple(values) => values.push(value),
        }
    }
}

/// Response headers keyed by normalized name, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHeaders {
    entries: Vec<(String, HeaderValue)>,
}

impl ParsedHeaders {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a header value. The name is normalized first.
    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        let name = normalize_header_name(name);
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => existing.push(value),
            None => self.entries.push((name, HeaderValue::Single(value))),
        }
    }

    /// Looks up a header. The name may be given in any case.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        let name = normalize_header_name(name);
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
    }

    /// Returns the first value of a header.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(HeaderValue::first)
    }

    /// Returns every value of a header, in order of appearance.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.get(name).map(HeaderValue::values).unwrap_or(&[])
    }

    /// Returns `true` if the header was present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over the headers in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no header was parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for ParsedHeaders {
    type Item = (String, HeaderValue);
    type IntoIter = std::vec::IntoIter<(String, HeaderValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ParsedHeaders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Parses a raw HTTP header block.
///
/// Folded continuation lines are joined to the previous line with a single
/// space. Lines that are not `name: value` pairs, such as the status line,
/// are skipped.
#[must_use]
pub fn parse_headers(raw: &str) -> ParsedHeaders {
    let mut headers = ParsedHeaders::new();
    for line in unfold(raw) {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let (name, value) = (name.trim(), value.trim());
        if name.is_empty() || value.is_empty() {
            continue;
        }
        headers.append(name, value);
    }
    headers
}

/// Normalizes a header name to capitalized-word form.
///
/// The name is lower-cased, then the first character and every character
/// following `-`, a space or a tab is upper-cased: `x-foo-bar` becomes
/// `X-Foo-Bar`.
pub fn normalize_header_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut capitalize = true;
    for c in name.trim().chars() {
        if capitalize {
            normalized.extend(c.to_uppercase());
        } else {
            normalized.extend(c.to_lowercase());
        }
        capitalize = matches!(c, '-' | ' ' | '\t');
    }
    normalized
}

/// Splits a header block into logical lines, joining folded continuations.
fn unfold(raw: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for line in raw.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.starts_with([' ', '\t']) {
            if let Some(previous) = lines.last_mut() {
                previous.push(' ');
                previous.push_str(line.trim_start_matches([' ', '\t']));
                continue;
            }
        }
        lines.push(line.to_string());
    }
    lines
}
