//! Captured placeholder values.
//!
//! Kept in template order and serialized as a map, so a match renders as
//! `{"id": "42"}` in JSON output.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Placeholder values captured from a request path, in template order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, key: String, value: String) {
        self.pairs.push((key, value));
    }

    /// Number of captured parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Value captured for placeholder `key`.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in template order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_iter() {
        let mut params = Params::new();
        assert!(params.is_empty());

        params.push("id".into(), "42".into());
        params.push("slug".into(), "hello".into());

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![("id", "42"), ("slug", "hello")]
        );
    }

    #[test]
    fn test_serializes_as_map() {
        let mut params = Params::new();
        params.push("id".into(), "7".into());
        assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"id":"7"}"#);
    }
}
