//! FIRST-set container.
//!
//! Maps terminal keys to the node that contributed them. Keys are unique,
//! except for the epsilon marker which may be inserted any number of times.
//! Insertion order is kept for lookups; the public ordering is alphabetical
//! so that regenerating from an unchanged grammar is byte-identical.

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;

use crate::grammar::Node;

/// Pseudo-key meaning "this rule may derive nothing".
pub const EPSILON: &str = "<empty>";

/// Duplicate key inserted into a FIRST set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("terminal `{key}` appears twice in first({set})")]
pub struct FirstSetError {
    pub set: String,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FirstSet {
    name: String,
    entries: IndexMap<String, Node>,
}

impl FirstSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    /// Name of the rule (or decision) this set describes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert `key`, failing if it is already present and is not epsilon.
    pub fn insert_unique(&mut self, key: impl Into<String>, node: Node) -> Result<(), FirstSetError> {
        let key = key.into();
        if key != EPSILON && self.entries.contains_key(&key) {
            return Err(FirstSetError {
                set: self.name.clone(),
                key,
            });
        }
        self.entries.insert(key, node);
        Ok(())
    }

    pub fn insert_epsilon(&mut self) {
        self.entries.insert(EPSILON.to_string(), Node::Empty);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn derives_empty(&self) -> bool {
        self.contains(EPSILON)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order, epsilon included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries in insertion order, epsilon excluded.
    pub fn terminals(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.iter().filter(|(k, _)| *k != EPSILON)
    }

    /// Keys in byte-ordinal order.
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort_unstable();
        keys
    }
}

impl Display for FirstSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "first({})=[{}]", self.name, self.sorted_keys().join(", "))
    }
}
