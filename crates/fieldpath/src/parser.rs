//! Single-pass scanner turning a path expression into path elements.
//!
//! The grammar is deliberately small: `.` separates field names, `[...]`
//! wraps an index or an associative key, and `*` is the wildcard in either
//! position. `a.b[2].c` and `variants[*].prices` are typical inputs.

use std::str::CharIndices;

use crate::element::PathElement;
use crate::error::PathError;

/// A lazy parser over a path expression.
///
/// Yields one element per step so a caller may stop early; draining it
/// fully is the common case (see [`FieldPath::parse`](crate::FieldPath::parse)).
/// The scanner has two states, field scanning and bracket scanning, and a
/// private token buffer that never outlives the parse.
///
/// # Example
///
/// ```
/// use fieldpath::{PathElement, PathParser};
///
/// let elements: Result<Vec<_>, _> = PathParser::new("a.b[2]").collect();
/// assert_eq!(
///     elements?,
///     vec![
///         PathElement::field("a")?,
///         PathElement::field("b")?,
///         PathElement::index(2),
///     ],
/// );
/// # Ok::<(), fieldpath::PathError>(())
/// ```
#[derive(Debug)]
pub struct PathParser<'a> {
    input: &'a str,
    chars: CharIndices<'a>,
    token: String,
    in_bracket: bool,
}

impl<'a> PathParser<'a> {
    /// Creates a parser over the given path expression.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            token: String::with_capacity(8),
            in_bracket: false,
        }
    }

    /// Emits the accumulated token as a field element, or the wildcard for
    /// the `*` literal.
    fn emit_field(&self) -> Result<PathElement, PathError> {
        PathElement::field(self.token.as_str())
    }

    /// Emits the accumulated bracket content: an indexed element when the
    /// token is a non-negative base-10 integer, otherwise a field element
    /// (an associative key, e.g. `a[key]`).
    fn emit_bracket(&self) -> Result<PathElement, PathError> {
        match self.token.parse::<usize>() {
            Ok(index) => Ok(PathElement::index(index)),
            Err(_) => self.emit_field(),
        }
    }
}

impl Iterator for PathParser<'_> {
    type Item = Result<PathElement, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.token.clear();
        while let Some((position, ch)) = self.chars.next() {
            match ch {
                '.' => {
                    // An empty token right after a closing bracket, as in
                    // `a[0].b`, makes the separator a no-op.
                    if self.token.is_empty() {
                        continue;
                    }
                    return Some(self.emit_field());
                }
                '[' => {
                    self.in_bracket = true;
                    // Same empty-token rule as `.`, covering `a[0][1]`.
                    if self.token.is_empty() {
                        continue;
                    }
                    return Some(self.emit_field());
                }
                ']' => {
                    if !self.in_bracket {
                        return Some(Err(PathError::unbalanced_bracket(position, self.input)));
                    }
                    self.in_bracket = false;
                    return Some(self.emit_bracket());
                }
                _ => self.token.push(ch),
            }
        }
        if self.token.is_empty() {
            return None;
        }
        Some(self.emit_field())
    }
}
