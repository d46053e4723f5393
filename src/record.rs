//! Record assembly: headers plus one row of values into one tree.
//!
//! A [`RecordBuilder`] parses every header exactly once, then builds one
//! tree per record by merging each (path, value) pair in column order into
//! a fresh object root. Trees are never shared across records, so batches
//! are embarrassingly parallel; with the `parallel` feature enabled,
//! [`RecordBuilder::build_all_parallel`] fans records out across threads
//! and reassembles the output in input order.
//!
//! ## Examples
//!
//! ```rust
//! use unflatten::{PathOptions, RecordBuilder};
//!
//! let options = PathOptions::new();
//! let builder = RecordBuilder::new(&["a.b", "a.c", "d.0", "d.1"], &options).unwrap();
//!
//! let tree = builder.build(&["x", "y", "p", "q"]).unwrap();
//! let a = tree.get("a").unwrap();
//! assert_eq!(a.get("b").and_then(|n| n.as_str()), Some("x"));
//! let d = tree.get("d").unwrap();
//! assert_eq!(d.get_index(1).and_then(|n| n.as_str()), Some("q"));
//! ```

use crate::merge::merge;
use crate::path::Path;
use crate::{Error, Node, NodeMap, PathOptions, Result};
use log::trace;

#[derive(Debug)]
struct Column {
    header: String,
    path: Path,
}

/// Builds trees from flat records against a fixed set of headers.
///
/// Headers are parsed up front, so per-record work is one merge per column.
/// Every failure is wrapped with the column (and, for batches, the record)
/// that triggered it.
///
/// # Examples
///
/// ```rust
/// use unflatten::{PathOptions, RecordBuilder};
///
/// let options = PathOptions::new();
/// let builder = RecordBuilder::new(&["items.0.ff", "items.0.qq", "items.1.ff"], &options).unwrap();
///
/// let tree = builder.build(&["F1", "Q1", "F2"]).unwrap();
/// let items = tree.get("items").unwrap().as_array().unwrap();
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].get("ff").and_then(|n| n.as_str()), Some("F2"));
/// // items[1].qq was never written: simply not present, not an error.
/// assert!(items[1].get("qq").is_none());
/// ```
#[derive(Debug)]
pub struct RecordBuilder {
    columns: Vec<Column>,
}

impl RecordBuilder {
    /// Parses `headers` once against `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Column`] wrapping an [`Error::EmptyPath`] for any
    /// header that yields no segments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::{Error, PathOptions, RecordBuilder};
    ///
    /// let options = PathOptions::new();
    /// let err = RecordBuilder::new(&["a.b", "..."], &options).unwrap_err();
    /// assert!(matches!(err, Error::Column { column: 1, .. }));
    /// ```
    pub fn new<I, S>(headers: I, options: &PathOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(column, header)| {
                let header = header.as_ref();
                Path::parse(header, options)
                    .map(|path| Column {
                        header: header.to_string(),
                        path,
                    })
                    .map_err(|source| Error::column(column, header, source))
            })
            .collect::<Result<Vec<_>>>()?;

        trace!("parsed {} headers", columns.len());
        Ok(RecordBuilder { columns })
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the builder has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the raw headers, in column order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.header.as_str())
    }

    /// Builds one record's tree from one row of values.
    ///
    /// The value count must equal the header count. Merges happen in column
    /// order into a fresh object root; on failure the error names the
    /// offending column and the tree is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnCount`] on a length mismatch, or
    /// [`Error::Column`] wrapping the merge failure.
    pub fn build<I, S>(&self, values: I) -> Result<Node>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<S> = values.into_iter().collect();
        if values.len() != self.columns.len() {
            return Err(Error::ColumnCount {
                expected: self.columns.len(),
                found: values.len(),
            });
        }

        let mut root = Node::Object(NodeMap::new());
        for (index, (column, value)) in self.columns.iter().zip(&values).enumerate() {
            merge(&mut root, &column.path, value.as_ref())
                .map_err(|source| Error::column(index, &column.header, source))?;
        }
        Ok(root)
    }

    /// Builds a tree for every row, sequentially, in input order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing record, wrapping its error with the
    /// record index. Callers that prefer to skip bad records can call
    /// [`RecordBuilder::build`] per row instead.
    pub fn build_all<R, V, S>(&self, rows: R) -> Result<Vec<Node>>
    where
        R: IntoIterator<Item = V>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        rows.into_iter()
            .enumerate()
            .map(|(record, row)| {
                self.build(row)
                    .map_err(|source| Error::record(record, source))
            })
            .collect()
    }

    /// Builds a tree for every row in parallel, reassembling the output in
    /// input order.
    ///
    /// Each record's tree has exactly one writer, so records parallelize
    /// with no shared mutable state.
    #[cfg(feature = "parallel")]
    pub fn build_all_parallel(&self, rows: &[Vec<String>]) -> Result<Vec<Node>> {
        use rayon::prelude::*;

        rows.par_iter()
            .enumerate()
            .map(|(record, row)| {
                self.build(row)
                    .map_err(|source| Error::record(record, source))
            })
            .collect()
    }
}
