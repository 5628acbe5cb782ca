//! Insertion-Ordered Object Container
//!
//! Decoded `object` envelopes preserve the key order the daemon sent, so the
//! container backing them must too. [`Object`] is a string-keyed bag with the
//! ordering laws the protocol relies on:
//!
//! - iteration order is insertion order
//! - updating an existing key keeps its position
//! - removal closes the gap without disturbing the remaining order
//!
//! All operations are total: reading an absent key yields `None`, removing an
//! absent key is a no-op.

use indexmap::IndexMap;

use super::Value;

/// An insertion-ordered mapping from string keys to decoded values.
///
/// This is the decoded representation of an `object`-tagged envelope.
///
/// # Example
///
/// ```
/// use vegabch_protocol::value::{Object, Value};
///
/// let mut wallet = Object::new();
/// wallet.set("name", Value::String("savings".into()));
/// wallet.set("type", Value::String("hd".into()));
///
/// assert_eq!(wallet.get("name"), Some(&Value::String("savings".into())));
/// assert_eq!(wallet.get("missing"), None);
/// assert_eq!(wallet.keys().collect::<Vec<_>>(), ["name", "type"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    entries: IndexMap<String, Value>,
}

impl Object {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Look up a key.
    ///
    /// Returns `None` for absent keys; absence is never an error.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Insert a key or update it in place.
    ///
    /// A new key is appended at the end of the iteration order. An existing
    /// key has its value replaced without changing its position.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Remove a key, returning its value if it was present.
    ///
    /// The remaining entries keep their relative order. Removing an absent
    /// key does nothing.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl std::fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.items().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {}", key, value)?;
        }
        f.write_str("}")
    }
}
