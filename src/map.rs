//! Ordered map type for object nodes.
//!
//! This module provides [`NodeMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object fields. Correctness of the tree
//! builder does not depend on field order, but deterministic output does:
//! building the same record twice must serialize byte-for-byte identically.
//!
//! ## Why IndexMap?
//!
//! `NodeMap` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: fields serialize in the order their headers
//!   first wrote them
//! - **Iteration order**: fields iterate in insertion order
//! - **Compatibility**: predictable output makes testing and diffing easy
//!
//! ## Examples
//!
//! ```rust
//! use unflatten::{Node, NodeMap};
//!
//! let mut map = NodeMap::new();
//! map.insert("name".to_string(), Node::from("Alice"));
//! map.insert("age".to_string(), Node::from("30"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|n| n.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;

use crate::Node;

/// An ordered map of field names to nodes.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion
/// order, which keeps built trees deterministic for a fixed header sequence.
///
/// # Examples
///
/// ```rust
/// use unflatten::{Node, NodeMap};
///
/// let mut map = NodeMap::new();
/// map.insert("first".to_string(), Node::from("1"));
/// map.insert("second".to_string(), Node::from("2"));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeMap(IndexMap<String, Node>);

impl NodeMap {
    /// Creates an empty `NodeMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::NodeMap;
    ///
    /// let map = NodeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        NodeMap(IndexMap::new())
    }

    /// Creates an empty `NodeMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::{Node, NodeMap};
    ///
    /// let mut map = NodeMap::new();
    /// assert!(map.insert("key".to_string(), Node::from("a")).is_none());
    /// assert!(map.insert("key".to_string(), Node::from("b")).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Node) -> Option<Node> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.0.get_mut(key)
    }

    /// Returns a mutable reference to the value for `key`, inserting the
    /// result of `default` if the key is not present.
    pub fn or_insert_with<F>(&mut self, key: String, default: F) -> &mut Node
    where
        F: FnOnce() -> Node,
    {
        self.0.entry(key).or_insert_with(default)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Node> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Node> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion
    /// order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.0.iter()
    }
}

impl IntoIterator for NodeMap {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeMap {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Node)> for NodeMap {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        NodeMap(IndexMap::from_iter(iter))
    }
}
