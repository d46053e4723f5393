//! Dynamic tree representation for built records.
//!
//! This module provides the [`Node`] enum, the runtime shape of every value
//! appearing in a built tree, and [`Kind`], its discriminant used in
//! conflict reporting.
//!
//! ## Core Types
//!
//! - [`Node`]: a tagged union of the four runtime shapes (object, array,
//!   scalar, and the absent marker)
//! - [`Kind`]: the shape tag alone, for reporting which kind a path expected
//!   versus what it found
//!
//! ## The absent marker
//!
//! Growing an array to reach slot `n` allocates slots `0..n`, and any slot
//! never explicitly assigned stays [`Node::Absent`]. Absent is a real tree
//! state, not an error: `items.1.ff` existing without `items.0` ever being
//! written leaves `items[0]` absent. At serialization time absent slots
//! render as null.
//!
//! ## Usage Patterns
//!
//! ### Creating Nodes
//!
//! ```rust
//! use unflatten::{Node, NodeMap};
//!
//! let scalar = Node::from("hello");
//! let array = Node::Array(vec![Node::from("a"), Node::Absent]);
//! let object = Node::Object(NodeMap::new());
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use unflatten::Node;
//!
//! let node = Node::from("42");
//! assert!(node.is_scalar());
//! assert!(!node.is_array());
//! ```
//!
//! ### Reading Built Trees
//!
//! ```rust
//! use unflatten::build_record;
//!
//! let tree = build_record(&["a.b"], &["x"]).unwrap();
//! let leaf = tree.get("a").and_then(|a| a.get("b"));
//! assert_eq!(leaf.and_then(|n| n.as_str()), Some("x"));
//! ```

use crate::NodeMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// The shape of a [`Node`], without its contents.
///
/// Used in conflict errors to say what a path segment expected to find and
/// what was actually there.
///
/// # Examples
///
/// ```rust
/// use unflatten::{Kind, Node};
///
/// assert_eq!(Node::from("x").kind(), Kind::Scalar);
/// assert_eq!(Kind::Array.to_string(), "array");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Object,
    Array,
    Scalar,
    Absent,
}

impl Kind {
    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::Scalar => "scalar",
            Kind::Absent => "absent",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically-shaped value in a built tree.
///
/// Every location in a tree is one of four shapes:
///
/// - `Object`: insertion-ordered mapping from field name to `Node`
/// - `Array`: ordered, index-addressable sequence, absent-filled on growth
/// - `Scalar`: terminal value, stored as the original string with no type
///   coercion
/// - `Absent`: an array slot allocated by growth but never assigned
///
/// # Examples
///
/// ```rust
/// use unflatten::{Kind, Node};
///
/// let node = Node::from("hello");
/// assert!(node.is_scalar());
/// assert_eq!(node.kind(), Kind::Scalar);
/// assert_eq!(node.as_str(), Some("hello"));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Node {
    #[default]
    Absent,
    Scalar(String),
    Array(Vec<Node>),
    Object(NodeMap),
}

impl Node {
    /// Returns the [`Kind`] of this node.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Node::Absent => Kind::Absent,
            Node::Scalar(_) => Kind::Scalar,
            Node::Array(_) => Kind::Array,
            Node::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the node is the absent marker.
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Node::Absent)
    }

    /// Returns `true` if the node is a scalar.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Returns `true` if the node is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// Returns `true` if the node is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// If the node is a scalar, returns its string value. Otherwise returns
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::Node;
    ///
    /// assert_eq!(Node::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Node::Absent.as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// If the node is an array, returns a reference to it. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// If the node is an object, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&NodeMap> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    /// If the node is an object, returns the value under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::build_record;
    ///
    /// let tree = build_record(&["a.b"], &["x"]).unwrap();
    /// assert!(tree.get("a").is_some());
    /// assert!(tree.get("missing").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// If the node is an array, returns the element at `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::build_record;
    ///
    /// let tree = build_record(&["d.1"], &["q"]).unwrap();
    /// let d = tree.get("d").unwrap();
    /// assert!(d.get_index(0).unwrap().is_absent());
    /// assert_eq!(d.get_index(1).and_then(|n| n.as_str()), Some("q"));
    /// ```
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Node> {
        match self {
            Node::Array(items) => items.get(index),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Absent => write!(f, "null"),
            Node::Scalar(s) => write!(f, "{s:?}"),
            Node::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Node::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Absent => serializer.serialize_unit(),
            Node::Scalar(s) => serializer.serialize_str(s),
            Node::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Node::Array(value)
    }
}

impl From<NodeMap> for Node {
    fn from(value: NodeMap) -> Self {
        Node::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Node::Absent.kind(), Kind::Absent);
        assert_eq!(Node::from("x").kind(), Kind::Scalar);
        assert_eq!(Node::Array(vec![]).kind(), Kind::Array);
        assert_eq!(Node::Object(NodeMap::new()).kind(), Kind::Object);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Object.to_string(), "object");
        assert_eq!(Kind::Array.to_string(), "array");
        assert_eq!(Kind::Scalar.to_string(), "scalar");
        assert_eq!(Kind::Absent.to_string(), "absent");
    }

    #[test]
    fn test_accessors() {
        let node = Node::from("hello");
        assert!(node.is_scalar());
        assert_eq!(node.as_str(), Some("hello"));
        assert!(node.as_array().is_none());
        assert!(node.as_object().is_none());

        let array = Node::Array(vec![Node::from("a"), Node::Absent]);
        assert_eq!(array.get_index(0).and_then(Node::as_str), Some("a"));
        assert!(array.get_index(1).unwrap().is_absent());
        assert!(array.get_index(2).is_none());
        assert!(array.get("key").is_none());

        let mut map = NodeMap::new();
        map.insert("key".to_string(), Node::from("v"));
        let object = Node::Object(map);
        assert_eq!(object.get("key").and_then(Node::as_str), Some("v"));
        assert!(object.get("other").is_none());
        assert!(object.get_index(0).is_none());
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Node::from("x"), Node::Scalar("x".to_string()));
        assert_eq!(Node::from("x".to_string()), Node::Scalar("x".to_string()));
        assert_eq!(Node::from(vec![Node::Absent]), Node::Array(vec![Node::Absent]));
        assert_eq!(Node::from(NodeMap::new()), Node::Object(NodeMap::new()));
    }

    #[test]
    fn test_display() {
        let mut map = NodeMap::new();
        map.insert("a".to_string(), Node::from("x"));
        map.insert(
            "d".to_string(),
            Node::Array(vec![Node::Absent, Node::from("q")]),
        );
        let node = Node::Object(map);
        assert_eq!(node.to_string(), r#"{"a": "x", "d": [null, "q"]}"#);
    }

    #[test]
    fn test_default_is_absent() {
        assert!(Node::default().is_absent());
    }
}
