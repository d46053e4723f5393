//! Configuration options for path parsing.
//!
//! This module provides [`PathOptions`], the per-run configuration that the
//! near-duplicate converters this crate replaces used to hard-code: the
//! separator between segments, an optional prefix stripped from every
//! header, and whether numeric tokens address array slots.
//!
//! Options are supplied once for an entire run, never per record.
//!
//! ## Examples
//!
//! ```rust
//! use unflatten::{build_record_with_options, PathOptions};
//!
//! // Slash-separated headers with a leading separator, e.g. "/a/b"
//! let options = PathOptions::new().with_separator('/');
//! let tree = build_record_with_options(&["/a/b"], &["x"], &options).unwrap();
//! assert!(tree.get("a").is_some());
//!
//! // JSONPath-style headers, e.g. "$.a.b"
//! let options = PathOptions::new().with_strip_prefix("$.");
//! let tree = build_record_with_options(&["$.a.b"], &["x"], &options).unwrap();
//! assert!(tree.get("a").is_some());
//! ```

/// Configuration for parsing raw header strings into paths.
///
/// # Examples
///
/// ```rust
/// use unflatten::PathOptions;
///
/// // Default: dot separator, no prefix, numeric tokens are array indices
/// let options = PathOptions::new();
///
/// // Custom configuration
/// let options = PathOptions::new()
///     .with_separator('/')
///     .with_strip_prefix("$.")
///     .with_indices(false);
/// ```
#[derive(Clone, Debug)]
pub struct PathOptions {
    pub separator: char,
    pub strip_prefix: Option<String>,
    pub indices: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        PathOptions {
            separator: '.',
            strip_prefix: None,
            indices: true,
        }
    }
}

impl PathOptions {
    /// Creates default options (dot separator, no prefix, indices enabled).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::PathOptions;
    ///
    /// let options = PathOptions::new();
    /// assert_eq!(options.separator, '.');
    /// assert!(options.indices);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator character between path segments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::PathOptions;
    ///
    /// let options = PathOptions::new().with_separator('/');
    /// assert_eq!(options.separator, '/');
    /// ```
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets a literal prefix removed once from each header before splitting.
    ///
    /// Typical prefixes are a JSONPath-style marker (`$.`) or a leading
    /// separator. Headers that do not start with the prefix are left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::PathOptions;
    ///
    /// let options = PathOptions::new().with_strip_prefix("$.");
    /// assert_eq!(options.strip_prefix.as_deref(), Some("$."));
    /// ```
    #[must_use]
    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefix = Some(prefix.into());
        self
    }

    /// Sets whether all-digit tokens are classified as array indices.
    ///
    /// When disabled, every token addresses an object field, so a header
    /// like `a.0` writes under the field name `"0"` instead of growing an
    /// array. Useful for inputs whose field names are numeric.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unflatten::PathOptions;
    ///
    /// let options = PathOptions::new().with_indices(false);
    /// assert!(!options.indices);
    /// ```
    #[must_use]
    pub fn with_indices(mut self, indices: bool) -> Self {
        self.indices = indices;
        self
    }
}
