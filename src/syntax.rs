//! Path Addressing Syntax
//!
//! This module documents the path syntax accepted by the parser, i.e. the
//! shape of the header strings that drive tree construction.
//!
//! # Overview
//!
//! A path is a flat string naming one location inside a nested document.
//! Splitting it on the configured separator yields an ordered sequence of
//! segments; each segment is either a **field** (addresses an object member)
//! or an **index** (addresses an array slot).
//!
//! ```text
//! items.0.name
//! └─┬─┘ │ └─┬─┘
//! field index field
//! ```
//!
//! # Separators
//!
//! The separator is a single configurable character, `.` by default. Any
//! character works as long as it does not occur inside field names:
//!
//! ```text
//! a.b.c          dot-separated (default)
//! /a/b/c         slash-separated, leading separator tolerated
//! ```
//!
//! Consecutive separators produce empty tokens, which are dropped: `a..b`
//! and `a.b` parse identically. A header that is nothing but separators has
//! no segments at all and is rejected.
//!
//! # Prefixes
//!
//! An optional literal prefix is stripped once before splitting, so
//! JSONPath-flavored headers can be used as-is:
//!
//! ```text
//! $.user.name    with strip_prefix = "$."  →  user.name
//! ```
//!
//! Headers that do not start with the prefix are left untouched; the prefix
//! is never stripped a second time.
//!
//! # Index classification
//!
//! A token is an index when it consists solely of ASCII digits `0-9` and
//! fits the platform's array-index range. Everything else is a field name:
//!
//! | Token | Classified as |
//! |-------|---------------|
//! | `0`, `12`, `007` | index (leading zeros allowed) |
//! | `-1`, `+2` | field (signs are not digits) |
//! | `1x`, `x1` | field |
//! | `99999999999999999999` | field (out of range) |
//!
//! Classification can be disabled wholesale (`indices = false`), in which
//! case every token is a field name and `a.0` writes under the member `"0"`.
//!
//! # Container inference
//!
//! The segment *after* a position decides what container must live there:
//! an index segment needs its parent to be an array, a field segment an
//! object. `items.0.name` therefore makes `items` an array whose slot 0
//! holds an object. Addressing a location with a segment kind incompatible
//! with what an earlier path established is a conflict, reported with the
//! offending segment and both kinds, never silently coerced.
//!
//! # Array growth
//!
//! Writing index `n` into an array of length ≤ n grows it to exactly
//! `n + 1` slots. Slots created by growth but never assigned hold the
//! absent marker and serialize as `null`:
//!
//! ```text
//! d.2 = "v"      →  d: [null, null, "v"]
//! ```
