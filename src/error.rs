//! Error types for path parsing and tree building.
//!
//! ## Error Categories
//!
//! - **Empty paths**: a header string that yields no segments after prefix
//!   stripping and splitting
//! - **Conflicts**: a path implies a container kind incompatible with what
//!   already exists at that location in the tree
//! - **Record shape**: a record whose value count does not match the header
//!   count
//! - **Context wrappers**: failures tied to the specific column or record
//!   that triggered them
//!
//! ## Error Context
//!
//! Conflict errors report the full raw path, the position and text of the
//! offending segment, and the expected and found node kinds. Builders wrap
//! inner errors with the column index, the raw header, and (for batches) the
//! record index, so a failure in a million-row run points at one cell.
//!
//! ## Examples
//!
//! ```rust
//! use unflatten::{build_record, Error};
//!
//! // `x` is written as a scalar, then addressed as an object: a conflict.
//! let result = build_record(&["x", "x.y"], &["1", "2"]);
//! assert!(matches!(result, Err(Error::Column { .. })));
//! ```

use crate::node::Kind;
use crate::path::Path;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing paths or
/// building trees.
///
/// Merge failures are recoverable per call: the tree keeps whatever was
/// written before the failing segment, and the caller decides whether to
/// skip the record, log, or abort the run.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A path string contained no segments after prefix stripping and
    /// splitting.
    #[error("empty path: {path:?} contains no segments")]
    EmptyPath { path: String },

    /// A path segment expected one container kind but found another.
    #[error("conflict at `{path}`, segment {segment} (`{at}`): expected {expected}, found {found}")]
    Conflict {
        path: String,
        segment: usize,
        at: String,
        expected: Kind,
        found: Kind,
    },

    /// A record supplied a different number of values than there are headers.
    #[error("record has {found} values but {expected} headers")]
    ColumnCount { expected: usize, found: usize },

    /// A failure tied to one column of a record.
    #[error("column {column} ({header:?}): {source}")]
    Column {
        column: usize,
        header: String,
        #[source]
        source: Box<Error>,
    },

    /// A failure tied to one record of a batch.
    #[error("record {record}: {source}")]
    Record {
        record: usize,
        #[source]
        source: Box<Error>,
    },

    /// Custom error message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an empty-path error for a header that yielded no segments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::Error;
    ///
    /// let err = Error::empty_path("...");
    /// assert!(err.to_string().contains("empty path"));
    /// ```
    pub fn empty_path(path: &str) -> Self {
        Error::EmptyPath {
            path: path.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    pub(crate) fn conflict(path: &Path, segment: usize, expected: Kind, found: Kind) -> Self {
        let at = path
            .segments()
            .get(segment)
            .map(|s| s.to_string())
            .unwrap_or_default();
        Error::Conflict {
            path: path.raw().to_string(),
            segment,
            at,
            expected,
            found,
        }
    }

    pub(crate) fn column(column: usize, header: &str, source: Error) -> Self {
        Error::Column {
            column,
            header: header.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn record(record: usize, source: Error) -> Self {
        Error::Record {
            record,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
