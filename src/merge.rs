//! The tree merger: one (path, value) assignment into a growing tree.
//!
//! [`merge`] walks a parsed path through a mutable tree, creating missing
//! intermediate containers on demand. The kind of each intermediate
//! container is decided by the segment that follows it: an index segment
//! means its parent must be an array, a field segment an object. A slot
//! that already exists with the wrong kind is a hard conflict, never a
//! silent coercion.
//!
//! ## Examples
//!
//! ```rust
//! use unflatten::{merge, Node, NodeMap, Path, PathOptions};
//!
//! let options = PathOptions::new();
//! let mut root = Node::Object(NodeMap::new());
//!
//! merge(&mut root, &Path::parse("a.b", &options).unwrap(), "x").unwrap();
//! merge(&mut root, &Path::parse("d.1", &options).unwrap(), "q").unwrap();
//!
//! let a = root.get("a").unwrap();
//! assert_eq!(a.get("b").and_then(|n| n.as_str()), Some("x"));
//!
//! // d grew to exactly length 2, with the unwritten slot absent.
//! let d = root.get("d").unwrap();
//! assert_eq!(d.as_array().unwrap().len(), 2);
//! assert!(d.get_index(0).unwrap().is_absent());
//! ```

use crate::node::Kind;
use crate::path::{Path, Segment};
use crate::{Error, Node, NodeMap, Result};
use log::trace;

/// Merges one scalar value into `root` at the location named by `path`.
///
/// Intermediate objects and arrays are created as needed; arrays grow to
/// `n + 1` slots when addressed by index `n`, absent-filling the slots in
/// between. The final segment always wins: a field leaf overwrites whatever
/// was at that key, and an index leaf overwrites that slot. Two headers
/// resolving to the same final location are therefore not deduplicated;
/// the later write wins, matching the converters this crate replaces.
///
/// `root` is expected to be an object. A non-object root, or a path whose
/// first segment is an index (which would address the object root as an
/// array), reports a conflict at segment 0.
///
/// # Errors
///
/// Returns [`Error::Conflict`] when an existing node's kind is incompatible
/// with what a segment requires. The tree keeps everything written before
/// the failing segment; partial writes are not rolled back, and the same
/// call against the same tree state always fails the same way.
///
/// # Examples
///
/// ```rust
/// use unflatten::{merge, Error, Node, NodeMap, Path, PathOptions};
///
/// let options = PathOptions::new();
/// let mut root = Node::Object(NodeMap::new());
///
/// merge(&mut root, &Path::parse("x", &options).unwrap(), "1").unwrap();
///
/// // `x` now holds a scalar, so it cannot be addressed as an object.
/// let err = merge(&mut root, &Path::parse("x.y", &options).unwrap(), "2");
/// assert!(matches!(err, Err(Error::Conflict { .. })));
/// ```
pub fn merge(root: &mut Node, path: &Path, value: &str) -> Result<()> {
    let segments = path.segments();
    let (last, inner) = match segments.split_last() {
        Some(split) => split,
        None => return Err(Error::empty_path(path.raw())),
    };

    trace!("merge {} = {:?}", path, value);

    let mut cursor = root;
    for (index, segment) in inner.iter().enumerate() {
        cursor = step(cursor, segment, &segments[index + 1], path, index)?;
    }
    assign(cursor, last, value, path, segments.len() - 1)
}

/// Resolves one intermediate segment: finds or creates the slot it
/// addresses and checks the slot holds the container kind the next segment
/// needs.
fn step<'a>(
    cursor: &'a mut Node,
    segment: &Segment,
    next: &Segment,
    path: &Path,
    index: usize,
) -> Result<&'a mut Node> {
    let want = parent_kind(next);
    let slot = match segment {
        Segment::Field(name) => {
            let map = match cursor {
                Node::Object(map) => map,
                other => return Err(Error::conflict(path, index, Kind::Object, other.kind())),
            };
            map.or_insert_with(name.clone(), || empty_container(next))
        }
        Segment::Index(n) => {
            let items = match cursor {
                Node::Array(items) => items,
                other => return Err(Error::conflict(path, index, Kind::Array, other.kind())),
            };
            if items.len() <= *n {
                items.resize(*n + 1, Node::Absent);
            }
            let slot = &mut items[*n];
            if slot.is_absent() {
                *slot = empty_container(next);
            }
            slot
        }
    };
    if slot.kind() == want {
        Ok(slot)
    } else {
        Err(Error::conflict(path, index, want, slot.kind()))
    }
}

/// Writes the scalar at the final segment. Last write wins; no conflict
/// checking against whatever the leaf previously held.
fn assign(cursor: &mut Node, segment: &Segment, value: &str, path: &Path, index: usize) -> Result<()> {
    match segment {
        Segment::Field(name) => match cursor {
            Node::Object(map) => {
                map.insert(name.clone(), Node::Scalar(value.to_string()));
                Ok(())
            }
            other => Err(Error::conflict(path, index, Kind::Object, other.kind())),
        },
        Segment::Index(n) => match cursor {
            Node::Array(items) => {
                if items.len() <= *n {
                    items.resize(*n + 1, Node::Absent);
                }
                items[*n] = Node::Scalar(value.to_string());
                Ok(())
            }
            other => Err(Error::conflict(path, index, Kind::Array, other.kind())),
        },
    }
}

/// The container kind a segment needs its parent to be: indices live in
/// arrays, fields in objects.
fn parent_kind(segment: &Segment) -> Kind {
    match segment {
        Segment::Field(_) => Kind::Object,
        Segment::Index(_) => Kind::Array,
    }
}

fn empty_container(next: &Segment) -> Node {
    match next {
        Segment::Field(_) => Node::Object(NodeMap::new()),
        Segment::Index(_) => Node::Array(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathOptions;

    fn path(raw: &str) -> Path {
        Path::parse(raw, &PathOptions::new()).unwrap()
    }

    fn root() -> Node {
        Node::Object(NodeMap::new())
    }

    #[test]
    fn test_single_field() {
        let mut tree = root();
        merge(&mut tree, &path("a"), "x").unwrap();
        assert_eq!(tree.get("a").and_then(Node::as_str), Some("x"));
    }

    #[test]
    fn test_deep_field_chain() {
        let mut tree = root();
        merge(&mut tree, &path("a.b.c.d.e"), "deep").unwrap();
        let leaf = tree
            .get("a")
            .and_then(|n| n.get("b"))
            .and_then(|n| n.get("c"))
            .and_then(|n| n.get("d"))
            .and_then(|n| n.get("e"));
        assert_eq!(leaf.and_then(Node::as_str), Some("deep"));
    }

    #[test]
    fn test_array_growth_is_exact() {
        let mut tree = root();
        merge(&mut tree, &path("d.3"), "v").unwrap();
        let d = tree.get("d").and_then(Node::as_array).unwrap();
        assert_eq!(d.len(), 4);
        assert!(d[0].is_absent());
        assert!(d[1].is_absent());
        assert!(d[2].is_absent());
        assert_eq!(d[3].as_str(), Some("v"));
    }

    #[test]
    fn test_array_does_not_shrink_or_overgrow() {
        let mut tree = root();
        merge(&mut tree, &path("d.3"), "a").unwrap();
        merge(&mut tree, &path("d.1"), "b").unwrap();
        let d = tree.get("d").and_then(Node::as_array).unwrap();
        assert_eq!(d.len(), 4);
        assert_eq!(d[1].as_str(), Some("b"));
    }

    #[test]
    fn test_objects_inside_array_slots() {
        let mut tree = root();
        merge(&mut tree, &path("items.0.ff"), "F1").unwrap();
        merge(&mut tree, &path("items.0.qq"), "Q1").unwrap();
        merge(&mut tree, &path("items.1.ff"), "F2").unwrap();

        let items = tree.get("items").and_then(Node::as_array).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get("ff").and_then(Node::as_str), Some("F1"));
        assert_eq!(items[0].get("qq").and_then(Node::as_str), Some("Q1"));
        assert_eq!(items[1].get("ff").and_then(Node::as_str), Some("F2"));
        assert!(items[1].get("qq").is_none());
    }

    #[test]
    fn test_nested_arrays() {
        let mut tree = root();
        merge(&mut tree, &path("m.1.0"), "v").unwrap();
        let inner = tree.get("m").and_then(|n| n.get_index(1)).unwrap();
        assert_eq!(inner.get_index(0).and_then(Node::as_str), Some("v"));
    }

    #[test]
    fn test_scalar_addressed_as_object_conflicts() {
        let mut tree = root();
        merge(&mut tree, &path("x"), "1").unwrap();
        let err = merge(&mut tree, &path("x.y"), "2").unwrap_err();
        match err {
            Error::Conflict {
                segment,
                expected,
                found,
                ..
            } => {
                assert_eq!(segment, 0);
                assert_eq!(expected, Kind::Object);
                assert_eq!(found, Kind::Scalar);
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_array_addressed_as_object_conflicts() {
        let mut tree = root();
        merge(&mut tree, &path("k.0"), "v").unwrap();
        let err = merge(&mut tree, &path("k.name"), "v").unwrap_err();
        assert!(matches!(
            err,
            Error::Conflict {
                expected: Kind::Object,
                found: Kind::Array,
                ..
            }
        ));
    }

    #[test]
    fn test_object_addressed_as_array_conflicts() {
        let mut tree = root();
        merge(&mut tree, &path("k.name"), "v").unwrap();
        let err = merge(&mut tree, &path("k.0"), "v").unwrap_err();
        assert!(matches!(
            err,
            Error::Conflict {
                expected: Kind::Array,
                found: Kind::Object,
                ..
            }
        ));
    }

    #[test]
    fn test_leading_index_conflicts_with_object_root() {
        let mut tree = root();
        let err = merge(&mut tree, &path("0.a"), "v").unwrap_err();
        assert!(matches!(
            err,
            Error::Conflict {
                segment: 0,
                expected: Kind::Array,
                found: Kind::Object,
                ..
            }
        ));
    }

    #[test]
    fn test_scalar_array_slot_addressed_as_container_conflicts() {
        let mut tree = root();
        merge(&mut tree, &path("d.0"), "v").unwrap();
        let err = merge(&mut tree, &path("d.0.x"), "v").unwrap_err();
        assert!(matches!(
            err,
            Error::Conflict {
                segment: 1,
                expected: Kind::Object,
                found: Kind::Scalar,
                ..
            }
        ));
    }

    #[test]
    fn test_leaf_overwrites_without_conflict() {
        let mut tree = root();
        merge(&mut tree, &path("a.b"), "old").unwrap();
        merge(&mut tree, &path("a.b"), "new").unwrap();
        let a = tree.get("a").unwrap();
        assert_eq!(a.get("b").and_then(Node::as_str), Some("new"));

        // A leaf write even replaces a container: last write wins.
        merge(&mut tree, &path("a"), "flat").unwrap();
        assert_eq!(tree.get("a").and_then(Node::as_str), Some("flat"));
    }

    #[test]
    fn test_idempotent_remerge() {
        let mut once = root();
        merge(&mut once, &path("a.0.b"), "v").unwrap();

        let mut twice = root();
        merge(&mut twice, &path("a.0.b"), "v").unwrap();
        merge(&mut twice, &path("a.0.b"), "v").unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_partial_write_remains_after_failure() {
        let mut tree = root();
        merge(&mut tree, &path("a.b"), "kept").unwrap();
        merge(&mut tree, &path("blocker"), "s").unwrap();
        assert!(merge(&mut tree, &path("blocker.x.deep"), "v").is_err());

        // Earlier writes survive, and nothing was rolled back.
        assert_eq!(
            tree.get("a").and_then(|n| n.get("b")).and_then(Node::as_str),
            Some("kept")
        );
        assert_eq!(tree.get("blocker").and_then(Node::as_str), Some("s"));
    }

    #[test]
    fn test_shared_prefix_siblings_independent() {
        let mut tree = root();
        merge(&mut tree, &path("p.left.x"), "1").unwrap();
        merge(&mut tree, &path("p.right.y"), "2").unwrap();

        let p = tree.get("p").unwrap();
        assert_eq!(
            p.get("left").and_then(|n| n.get("x")).and_then(Node::as_str),
            Some("1")
        );
        assert_eq!(
            p.get("right").and_then(|n| n.get("y")).and_then(Node::as_str),
            Some("2")
        );
    }
}
