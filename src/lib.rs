//! # unflatten
//!
//! Build nested, JSON-style documents from flat, path-addressed records.
//!
//! ## What does it do?
//!
//! Tabular inputs (CSV exports, spreadsheet dumps, wide event logs) often
//! encode structure in their column names: `user.name`, `items.0.sku`,
//! `items.1.sku`. This crate turns one row of such a table into a nested
//! tree of objects and arrays, one merge per column, ready to hand to any
//! serde serializer.
//!
//! The interesting part is the path-addressable tree builder: paths are
//! parsed once into typed segments (named fields and numeric array
//! indices), then merged into a growing tree that creates intermediate
//! containers on demand, grows arrays exactly as far as the highest index
//! written, and reports a typed conflict whenever a path contradicts the
//! structure an earlier path established.
//!
//! ## Key Features
//!
//! - **Typed segments**: numeric tokens address array slots, everything
//!   else addresses object fields; classification is configurable
//! - **Deterministic output**: objects keep field insertion order, so the
//!   same headers and values always produce the same document
//! - **Typed conflicts**: addressing an array as an object (or a scalar as
//!   a container) fails with the path, segment, and both kinds, instead of
//!   panicking or silently coercing
//! - **Recoverable per merge**: each merge returns a `Result`, so a
//!   pipeline can skip a bad record and keep going
//! - **No type coercion**: values are stored as the strings they arrived
//!   as; rendering decisions belong to the serializer
//!
//! ## Quick Start
//!
//! ```rust
//! use unflatten::build_record;
//!
//! let headers = ["a.b", "a.c", "d.0", "d.1"];
//! let values = ["x", "y", "p", "q"];
//!
//! let tree = build_record(&headers, &values).unwrap();
//! let json = serde_json::to_string(&tree).unwrap();
//! assert_eq!(json, r#"{"a":{"b":"x","c":"y"},"d":["p","q"]}"#);
//! ```
//!
//! ### Batches
//!
//! Parse the headers once with a [`RecordBuilder`] and reuse it for every
//! row:
//!
//! ```rust
//! use unflatten::{PathOptions, RecordBuilder};
//!
//! let builder = RecordBuilder::new(&["id", "tags.0"], &PathOptions::new()).unwrap();
//! let trees = builder
//!     .build_all(vec![vec!["1", "a"], vec!["2", "b"]])
//!     .unwrap();
//! assert_eq!(trees.len(), 2);
//! ```
//!
//! With the `parallel` feature enabled, [`RecordBuilder::build_all_parallel`]
//! builds independent records across threads and returns them in input
//! order.
//!
//! ### Custom path syntax
//!
//! ```rust
//! use unflatten::{build_record_with_options, PathOptions};
//!
//! let options = PathOptions::new().with_separator('/').with_strip_prefix("/");
//! let tree = build_record_with_options(&["/a/b"], &["x"], &options).unwrap();
//! assert!(tree.get("a").is_some());
//! ```
//!
//! ### Absent array slots
//!
//! Writing `d.2` grows `d` to three slots; the two below it were never
//! assigned and serialize as `null`:
//!
//! ```rust
//! use unflatten::build_record;
//!
//! let tree = build_record(&["d.2"], &["v"]).unwrap();
//! let json = serde_json::to_string(&tree).unwrap();
//! assert_eq!(json, r#"{"d":[null,null,"v"]}"#);
//! ```
//!
//! ## What it is not
//!
//! This is a write-only, single-pass tree constructor. There is no query
//! language: no wildcards, no filters, no lookups. Reading delimited input
//! and rendering the finished tree are left to their own crates; the
//! boundary types here are plain string slices in and a
//! [`serde::Serialize`] tree out.

pub mod error;
pub mod macros;
pub mod map;
pub mod merge;
pub mod node;
pub mod options;
pub mod path;
pub mod record;
pub mod syntax;

pub use error::{Error, Result};
pub use map::NodeMap;
pub use merge::merge;
pub use node::{Kind, Node};
pub use options::PathOptions;
pub use path::{Path, Segment};
pub use record::RecordBuilder;

/// Builds one record's tree with default [`PathOptions`].
///
/// One-shot wrapper over [`RecordBuilder`] for when the headers are not
/// reused. `headers` and `values` must have the same length.
///
/// # Examples
///
/// ```rust
/// use unflatten::build_record;
///
/// let tree = build_record(&["user.name"], &["Alice"]).unwrap();
/// let user = tree.get("user").unwrap();
/// assert_eq!(user.get("name").and_then(|n| n.as_str()), Some("Alice"));
/// ```
///
/// # Errors
///
/// Returns an error if a header fails to parse, the lengths differ, or a
/// merge hits a structural conflict.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn build_record<H, V>(headers: &[H], values: &[V]) -> Result<Node>
where
    H: AsRef<str>,
    V: AsRef<str>,
{
    build_record_with_options(headers, values, &PathOptions::default())
}

/// Builds one record's tree with custom [`PathOptions`].
///
/// # Examples
///
/// ```rust
/// use unflatten::{build_record_with_options, PathOptions};
///
/// let options = PathOptions::new().with_strip_prefix("$.");
/// let tree = build_record_with_options(&["$.a.b"], &["x"], &options).unwrap();
/// assert!(tree.get("a").is_some());
/// ```
///
/// # Errors
///
/// Returns an error if a header fails to parse, the lengths differ, or a
/// merge hits a structural conflict.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn build_record_with_options<H, V>(
    headers: &[H],
    values: &[V],
    options: &PathOptions,
) -> Result<Node>
where
    H: AsRef<str>,
    V: AsRef<str>,
{
    let builder = RecordBuilder::new(headers.iter(), options)?;
    builder.build(values.iter())
}

/// Builds a tree per row with default [`PathOptions`].
///
/// # Examples
///
/// ```rust
/// use unflatten::build_records;
///
/// let trees = build_records(&["k"], &[vec!["1"], vec!["2"]]).unwrap();
/// assert_eq!(trees.len(), 2);
/// ```
///
/// # Errors
///
/// Stops at the first failing record; the error names the record and the
/// column that caused it.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn build_records<H, V>(headers: &[H], rows: &[Vec<V>]) -> Result<Vec<Node>>
where
    H: AsRef<str>,
    V: AsRef<str>,
{
    build_records_with_options(headers, rows, &PathOptions::default())
}

/// Builds a tree per row with custom [`PathOptions`].
///
/// # Errors
///
/// Stops at the first failing record; the error names the record and the
/// column that caused it.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn build_records_with_options<H, V>(
    headers: &[H],
    rows: &[Vec<V>],
    options: &PathOptions,
) -> Result<Vec<Node>>
where
    H: AsRef<str>,
    V: AsRef<str>,
{
    let builder = RecordBuilder::new(headers.iter(), options)?;
    builder.build_all(rows.iter().map(|row| row.iter()))
}
