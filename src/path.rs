//! Path parsing: raw header strings into typed segments.
//!
//! A path is an ordered sequence of [`Segment`]s describing a route into a
//! nested tree. Parsing is a pure function of the raw string and the
//! configured [`PathOptions`](crate::PathOptions): strip the optional prefix
//! once, split on the separator, drop empty tokens from redundant
//! separators, and classify each token: all-digit tokens become array
//! indices, everything else a field name.
//!
//! Headers are parsed once per run, not once per record.
//!
//! ## Examples
//!
//! ```rust
//! use unflatten::{Path, PathOptions, Segment};
//!
//! let options = PathOptions::new();
//! let path = Path::parse("items.0.name", &options).unwrap();
//!
//! assert_eq!(path.segments().len(), 3);
//! assert_eq!(path.segments()[0], Segment::Field("items".to_string()));
//! assert_eq!(path.segments()[1], Segment::Index(0));
//! assert_eq!(path.segments()[2], Segment::Field("name".to_string()));
//! ```

use crate::{Error, PathOptions, Result};
use log::trace;
use std::fmt;

/// One step of a path: a named field or a numeric array index.
///
/// # Examples
///
/// ```rust
/// use unflatten::{Path, PathOptions, Segment};
///
/// let path = Path::parse("a.1", &PathOptions::new()).unwrap();
/// assert!(path.segments()[0].is_field());
/// assert_eq!(path.segments()[1].as_index(), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Field(String),
    Index(usize),
}

impl Segment {
    /// Returns `true` if this segment names an object field.
    #[inline]
    #[must_use]
    pub const fn is_field(&self) -> bool {
        matches!(self, Segment::Field(_))
    }

    /// Returns `true` if this segment addresses an array slot.
    #[inline]
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }

    /// If this segment is a field, returns its name.
    #[inline]
    #[must_use]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Segment::Field(name) => Some(name),
            _ => None,
        }
    }

    /// If this segment is an index, returns its value.
    #[inline]
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => f.write_str(name),
            Segment::Index(n) => write!(f, "{n}"),
        }
    }
}

/// A parsed path: the raw header it came from plus its typed segments.
///
/// Guaranteed non-empty: parsing a header that yields zero segments fails
/// with [`Error::EmptyPath`].
///
/// # Examples
///
/// ```rust
/// use unflatten::{Path, PathOptions};
///
/// let path = Path::parse("a.b.c", &PathOptions::new()).unwrap();
/// assert_eq!(path.raw(), "a.b.c");
/// assert_eq!(path.segments().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    raw: String,
    segments: Vec<Segment>,
}

impl Path {
    /// Parses a raw header string against the given options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::{Path, PathOptions, Segment};
    ///
    /// let options = PathOptions::new().with_separator('/');
    /// let path = Path::parse("/a/0", &options).unwrap();
    ///
    /// // The leading separator produces an empty token, which is dropped.
    /// assert_eq!(path.segments().len(), 2);
    /// assert_eq!(path.segments()[1], Segment::Index(0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] if no segments remain after prefix
    /// stripping and splitting.
    pub fn parse(raw: &str, options: &PathOptions) -> Result<Self> {
        let mut rest = raw;
        if let Some(prefix) = &options.strip_prefix {
            if !prefix.is_empty() {
                if let Some(stripped) = rest.strip_prefix(prefix.as_str()) {
                    rest = stripped;
                }
            }
        }

        let segments: Vec<Segment> = rest
            .split(options.separator)
            .filter(|token| !token.is_empty())
            .map(|token| classify(token, options.indices))
            .collect();

        if segments.is_empty() {
            return Err(Error::empty_path(raw));
        }

        trace!("parsed {:?} into {} segments", raw, segments.len());
        Ok(Path {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Returns the raw header string this path was parsed from.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments. Never true for a parsed
    /// path; present for completeness alongside [`Path::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// All-digit tokens that fit in `usize` are indices; everything else,
/// including tokens with a sign or an out-of-range value, is a field name.
fn classify(token: &str, indices: bool) -> Segment {
    if indices && token.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = token.parse::<usize>() {
            return Segment::Index(n);
        }
    }
    Segment::Field(token.to_string())
}
