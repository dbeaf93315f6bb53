use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// A byte order mark counts as leading whitespace.
static HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s\x{FEFF}]*/\*((?s:.)*?)\*/").unwrap());
static LEADING_HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s\x{FEFF}]*(/\*(?s:.)*?\*/)?\s*").unwrap());
static LIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").unwrap());

const SCALAR_KEYS: [&str; 2] = ["Description", "Language"];

#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(untagged)]
pub enum HeaderValue {
    Scalar(String),
    List(Vec<String>),
}

impl HeaderValue {
    fn parse(key: &str, value: &str) -> Self {
        if SCALAR_KEYS.contains(&key) {
            Self::Scalar(value.into())
        } else {
            Self::List(LIST_SEPARATOR.split(value).map(str::to_string).collect())
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(values) => Some(values),
        }
    }
}

/// Metadata from the `Key: value` lines of a descriptor's leading comment.
#[derive(Serialize, Default, Clone, PartialEq, Eq, Debug)]
#[serde(transparent)]
pub struct Header {
    entries: BTreeMap<String, HeaderValue>,
}

impl Header {
    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.into(), HeaderValue::parse(key, value));
    }

    pub fn language(&self) -> Option<&str> {
        self.get("Language").and_then(HeaderValue::as_scalar)
    }

    pub fn description(&self) -> Option<&str> {
        self.get("Description").and_then(HeaderValue::as_scalar)
    }

    pub fn categories(&self) -> &[String] {
        self.get("Category")
            .and_then(HeaderValue::as_list)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn to_comment(&self) -> String {
        let mut comment = String::from("/*\n");

        for (key, value) in self.iter() {
            comment.push_str(key);
            comment.push_str(": ");

            match value {
                HeaderValue::Scalar(value) => comment.push_str(value),
                HeaderValue::List(values) => comment.push_str(&values.join(", ")),
            }

            comment.push('\n');
        }

        comment.push_str("*/");
        comment
    }
}

/// Returns `None` when `content` doesn't open with a block comment. A comment
/// with no `Key: value` lines gives an empty header instead.
pub fn parse_header(content: &str) -> Option<Header> {
    let captures = HEADER_PATTERN.captures(content)?;
    let mut header = Header::default();

    for line in captures[1].lines() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(": ").unwrap_or((line, ""));

        header.insert(key, value);
    }

    Some(header)
}

/// Removes the leading header comment and the whitespace around it.
pub fn strip_header(content: &str) -> &str {
    match LEADING_HEADER_PATTERN.find(content) {
        Some(header) => &content[header.end()..],
        None => content,
    }
}
