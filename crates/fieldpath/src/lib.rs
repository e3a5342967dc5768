//! Field-path expressions for addressing nested values in maps, object
//! graphs, and JSON-like documents.
//!
//! A [`FieldPath`] is an immutable, non-empty sequence of [`PathElement`]
//! steps written in a compact textual grammar: `.` separates field names,
//! `[...]` wraps an array index or associative key, and `*` is a wildcard
//! standing for any field or index at its level. Paths support a small
//! construction algebra (`child`, `sibling`, `parent`, `append`) and a
//! wildcard-aware matching relation distinct from structural equality,
//! which makes them suitable for validation-error reporting and
//! partial-update targeting.
//!
//! # Core types
//!
//! - [`FieldPath`] — the immutable path value and its algebra
//! - [`PathElement`] — one step: a field name, an index, or the wildcard
//! - [`PathParser`] — a lazy scanner over the textual grammar
//! - [`PathError`] — construction and parse failures
//!
//! # Example
//!
//! ```
//! use fieldpath::FieldPath;
//!
//! let path = FieldPath::parse("test.some.long[path]")?
//!     .ok_or(fieldpath::PathError::EmptyPath)?;
//! assert_eq!(path.value(), "test.some.long.path");
//! assert_eq!(path.field(), "path");
//! assert!(path.matches_str("test.*.long.path"));
//! # Ok::<(), fieldpath::PathError>(())
//! ```

mod element;
mod error;
mod parser;
mod path;

pub use element::PathElement;
pub use error::PathError;
pub use parser::PathParser;
pub use path::FieldPath;

#[cfg(test)]
mod tests;
