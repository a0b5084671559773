//! Header field mapping shared by documents and scores.

use indexmap::IndexMap;
use serde::Serialize;

/// Header fields (`key: value`).
///
/// Keys are unique; setting an existing key replaces its value but keeps
/// its original position, so renderers emit headers in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Headers {
    fields: IndexMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header field, overwriting any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (key, value) in iter {
            headers.set(key, value);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_value() {
        let mut headers = Headers::new();
        headers.set("name", "Kyrie");
        headers.set("mode", "1");
        headers.set("name", "Gloria");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("name"), Some("Gloria"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut headers = Headers::new();
        headers.set("a", "1");
        headers.set("b", "2");
        headers.set("a", "3");

        let keys: Vec<&str> = headers.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_from_iter() {
        let headers: Headers = [("title", "Kyrie")].into_iter().collect();

        assert!(headers.contains_key("title"));
        assert!(!headers.is_empty());
    }
}
