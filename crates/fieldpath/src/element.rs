//! The atomic unit of a field path: a field name, an array index, or the
//! wildcard.

use std::fmt;

use crate::error::PathError;

/// One step of a [`FieldPath`](crate::FieldPath).
///
/// The variant set is closed: a named field, a non-negative collection
/// index, or the universal wildcard. Structural equality applies, so
/// [`PathElement::Any`] equals only itself and never a concrete element —
/// but it [`matches`](PathElement::matches) anything.
///
/// Prefer the [`field`](PathElement::field) constructor over building the
/// `Field` variant directly: it maps the `*` literal to the wildcard and
/// rejects names the path grammar cannot round-trip.
///
/// # Example
///
/// ```
/// use fieldpath::PathElement;
///
/// let name = PathElement::field("price")?;
/// let index = PathElement::index(3);
/// assert!(PathElement::Any.matches(&name));
/// assert!(PathElement::Any.matches(&index));
/// assert_ne!(PathElement::Any, name);
/// # Ok::<(), fieldpath::PathError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement {
    /// A named field. The name is non-empty and contains no `.` character.
    Field(String),
    /// An index into an array or collection field.
    Index(usize),
    /// The wildcard, matching any field or index at its position.
    Any,
}

impl PathElement {
    /// Creates an element for the given field name.
    ///
    /// The `*` literal yields [`PathElement::Any`].
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidElement`] when the name is empty or
    /// contains the `.` separator character.
    pub fn field(name: impl Into<String>) -> Result<Self, PathError> {
        let text = name.into();
        if text == "*" {
            return Ok(Self::Any);
        }
        if text.is_empty() {
            return Err(PathError::invalid_element(
                "no or empty field name is given",
            ));
        }
        if text.contains('.') {
            return Err(PathError::invalid_element(format!(
                "the '{text}' field contains a dot character which is not allowed"
            )));
        }
        Ok(Self::Field(text))
    }

    /// Creates an element for the given field index.
    ///
    /// Never fails: `usize` makes a negative index unrepresentable.
    #[must_use]
    pub const fn index(index: usize) -> Self {
        Self::Index(index)
    }

    /// Returns the field name when this is a named field element.
    #[must_use]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            Self::Index(_) | Self::Any => None,
        }
    }

    /// Returns the index when this is an indexed element.
    #[must_use]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Field(_) | Self::Any => None,
        }
    }

    /// Returns whether this element is the wildcard.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns whether `other` matches this element.
    ///
    /// Unlike equality, matching treats the wildcard as equal to anything
    /// on either side. Two concrete elements match only when they are the
    /// same kind with the same value.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Any, _) | (_, Self::Any) => true,
            (Self::Field(a), Self::Field(b)) => a == b,
            (Self::Index(a), Self::Index(b)) => a == b,
            (Self::Field(_), Self::Index(_)) | (Self::Index(_), Self::Field(_)) => false,
        }
    }

    /// Appends this element's canonical textual form to `out`.
    ///
    /// Field and wildcard elements prefix a `.` separator when `out` is
    /// non-empty; indexed elements append `[index]` with no separator.
    pub fn print_to(&self, out: &mut String) {
        match self {
            Self::Field(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            Self::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
            Self::Any => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push('*');
            }
        }
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "'{name}'"),
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Any => f.write_str("*"),
        }
    }
}
