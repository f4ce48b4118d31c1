//! Package manifest (`package.json`) rewriting
//!
//! Only string values at known positions are touched: `name`, `version`,
//! `description`, `author` and `license` at the top level of the manifest,
//! and `url` inside the top-level `repository` object. The rest of the text,
//! including formatting, is kept byte for byte.

use crate::types::ScaffoldParams;
use std::ops::Range;

/// Manifest field that receives a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Version,
    Description,
    Author,
    License,
    RepositoryUrl,
}

impl Field {
    fn top_level(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "version" => Some(Self::Version),
            "description" => Some(Self::Description),
            "author" => Some(Self::Author),
            "license" => Some(Self::License),
            _ => None,
        }
    }

    fn value<'a>(&self, params: &'a ScaffoldParams) -> &'a str {
        match self {
            Self::Name => &params.package_name,
            Self::Version => &params.version,
            Self::Description => &params.description,
            Self::Author => &params.author,
            Self::License => &params.license,
            Self::RepositoryUrl => &params.repository_url,
        }
    }
}

/// Open object or array while scanning
struct Frame {
    is_object: bool,
    /// Key this container is stored under in its parent object
    key: Option<String>,
}

/// Replace the string value of each targeted field
///
/// Fields whose value is not a plain string (e.g. an `author` object) or that
/// are absent are left untouched, as are keys of the same name in nested
/// objects. Applying this twice with the same parameters yields the same
/// text as applying it once.
pub fn rewrite_manifest(content: &str, params: &ScaffoldParams) -> String {
    let mut fields = locate_fields(content);
    fields.sort_by_key(|(_, range)| range.start);

    let mut result = String::with_capacity(content.len());
    let mut cursor = 0;
    for (field, range) in fields {
        result.push_str(&content[cursor..range.start]);
        result.push_str(&json_string(field.value(params)));
        cursor = range.end;
    }
    result.push_str(&content[cursor..]);

    result
}

/// Byte ranges of the string literals holding each targeted field
///
/// Only the first occurrence of a field is reported. Scanning stops at an
/// unterminated string, leaving later fields unmatched.
fn locate_fields(content: &str) -> Vec<(Field, Range<usize>)> {
    let bytes = content.as_bytes();
    let mut found: Vec<(Field, Range<usize>)> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut pending_key: Option<String> = None;
    let mut expecting_key = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let Some(end) = string_end(bytes, i) else {
                    break;
                };
                let literal = &content[i..end];
                let in_object = stack.last().is_some_and(|frame| frame.is_object);

                if in_object && expecting_key {
                    pending_key = serde_json::from_str::<String>(literal).ok();
                    expecting_key = false;
                } else if let Some(key) = pending_key.take() {
                    if let Some(field) = classify(&stack, &key) {
                        if !found.iter().any(|(f, _)| *f == field) {
                            found.push((field, i..end));
                        }
                    }
                }
                i = end;
                continue;
            }
            open @ (b'{' | b'[') => {
                let is_object = open == b'{';
                stack.push(Frame {
                    is_object,
                    key: pending_key.take(),
                });
                expecting_key = is_object;
            }
            b'}' | b']' => {
                stack.pop();
                pending_key = None;
                expecting_key = false;
            }
            b',' => {
                pending_key = None;
                expecting_key = stack.last().is_some_and(|frame| frame.is_object);
            }
            _ => {}
        }
        i += 1;
    }

    found
}

/// Field a string value belongs to, given the containers around it
fn classify(stack: &[Frame], key: &str) -> Option<Field> {
    match stack {
        [root] if root.is_object => Field::top_level(key),
        [root, repository]
            if root.is_object
                && repository.is_object
                && repository.key.as_deref() == Some("repository")
                && key == "url" =>
        {
            Some(Field::RepositoryUrl)
        }
        _ => None,
    }
}

/// Index just past the closing quote of the string starting at `start`
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Encode a value as a JSON string literal
fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
