use std::collections::HashMap;

use serde_yaml::Value;
use thiserror::Error;

use crate::message::Message;

const MAX_CATALOG_ENTRIES: usize = 10_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;

fn is_valid_segment(seg: &str) -> bool {
    let mut it = seg.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// A translation catalog for one locale.
///
/// Source format is a YAML mapping. Nested mappings are flattened into
/// dotted keys, so
///
/// ```yaml
/// camera:
///   modes:
///     leica: Leica
/// ```
///
/// defines `camera.modes.leica`. Values are templates where `{name}` is
/// replaced by the message argument of that name; `{{` and `}}` are literal
/// braces.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn parse(src: &str) -> Result<Self, CatalogParseError> {
        let root: Value = serde_yaml::from_str(src)
            .map_err(|e| CatalogParseError::Yaml(e.to_string()))?;
        let mut cat = Self::new();
        match root {
            Value::Mapping(_) => cat.flatten_into("", &root)?,
            // An empty document is an empty catalog.
            Value::Null => {}
            _ => return Err(CatalogParseError::NotAMapping),
        }
        Ok(cat)
    }

    fn flatten_into(&mut self, prefix: &str, node: &Value) -> Result<(), CatalogParseError> {
        let Value::Mapping(map) = node else {
            return Err(CatalogParseError::NotAMapping);
        };
        for (k, v) in map {
            let Some(seg) = k.as_str() else {
                return Err(CatalogParseError::NonStringKey(prefix.to_string()));
            };
            if !is_valid_segment(seg) {
                return Err(CatalogParseError::InvalidKey(format!("{prefix}{seg}")));
            }
            let key = format!("{prefix}{seg}");
            if key.len() > MAX_KEY_BYTES {
                return Err(CatalogParseError::KeyTooLong(key));
            }

            match v {
                Value::Mapping(_) => self.flatten_into(&format!("{key}."), v)?,
                Value::String(s) => {
                    if s.len() > MAX_VALUE_BYTES {
                        return Err(CatalogParseError::ValueTooLong(key));
                    }
                    if self.entries.len() >= MAX_CATALOG_ENTRIES {
                        return Err(CatalogParseError::TooManyEntries);
                    }
                    self.entries.insert(key, s.clone());
                }
                _ => return Err(CatalogParseError::NonStringValue(key)),
            }
        }
        Ok(())
    }

    pub fn format_message(&self, msg: &Message) -> Option<String> {
        let tmpl = self.get(msg.id.as_ref())?;
        Some(apply_placeholders(tmpl, msg))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogParseError {
    #[error("yaml parse error: {0}")]
    Yaml(String),

    #[error("catalog root must be a mapping")]
    NotAMapping,

    #[error("non-string key under `{0}`")]
    NonStringKey(String),

    #[error("invalid key `{0}` (segments: [A-Za-z0-9][A-Za-z0-9_-]*)")]
    InvalidKey(String),

    #[error("key `{0}` is too long (max {MAX_KEY_BYTES} bytes)")]
    KeyTooLong(String),

    #[error("value for key `{0}` must be a string or mapping")]
    NonStringValue(String),

    #[error("value for key `{0}` is too long (max {MAX_VALUE_BYTES} bytes)")]
    ValueTooLong(String),

    #[error("too many entries (max {MAX_CATALOG_ENTRIES})")]
    TooManyEntries,
}

fn apply_placeholders(tmpl: &str, msg: &Message) -> String {
    if !tmpl.contains('{') && !tmpl.contains('}') {
        return tmpl.to_string();
    }

    let mut out = String::with_capacity(tmpl.len() + 8);
    let mut chars = tmpl.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }
                if !closed {
                    out.push('{');
                    out.push_str(&name);
                    break;
                }
                match msg.lookup_arg(name.trim()) {
                    Some(v) => out.push_str(&v.render()),
                    // Keep unknown placeholders visible.
                    None => {
                        out.push('{');
                        out.push_str(&name);
                        out.push('}');
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_mappings_flatten_to_dotted_keys() {
        let src = r#"
camera:
  modes:
    leica: "Leica"
  retake: Retake
space:
  count: "{count} photos"
"#;
        let cat = Catalog::parse(src).unwrap();
        assert_eq!(cat.len(), 3);
        assert_eq!(cat.get("camera.modes.leica"), Some("Leica"));
        assert_eq!(cat.get("camera.retake"), Some("Retake"));

        let s = cat
            .format_message(&Message::new("space.count").arg("count", 12usize))
            .unwrap();
        assert_eq!(s, "12 photos");
    }

    #[test]
    fn escaped_and_unknown_placeholders() {
        let msg = Message::new("x").arg("name", "Ada");
        assert_eq!(apply_placeholders("Hi {{name}}", &msg), "Hi {name}");
        assert_eq!(apply_placeholders("{{{name}}}", &msg), "{Ada}");
        assert_eq!(apply_placeholders("Hi {who}", &msg), "Hi {who}");
        assert_eq!(apply_placeholders("Hi {name", &msg), "Hi {name");
    }

    #[test]
    fn float_args_drop_trailing_zeros() {
        let msg = Message::new("x").arg("zoom", 2.50f64);
        assert_eq!(apply_placeholders("{zoom}x", &msg), "2.5x");
    }

    #[test]
    fn rejects_non_string_values_and_bad_keys() {
        assert_eq!(
            Catalog::parse("title: 123\n").unwrap_err(),
            CatalogParseError::NonStringValue("title".to_string())
        );
        assert_eq!(
            Catalog::parse("\"bad key\": nope\n").unwrap_err(),
            CatalogParseError::InvalidKey("bad key".to_string())
        );
        assert_eq!(
            Catalog::parse("- a\n- b\n").unwrap_err(),
            CatalogParseError::NotAMapping
        );
    }

    #[test]
    fn empty_document_is_empty_catalog() {
        assert!(Catalog::parse("").unwrap().is_empty());
    }
}
