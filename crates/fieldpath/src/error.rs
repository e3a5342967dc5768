//! Error types for field path construction and parsing.
//!
//! Every failure in this crate is synchronous and surfaces immediately to
//! the caller; nothing is logged, swallowed, or retried internally.

use thiserror::Error;

/// Errors from building or parsing a field path.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PathError {
    /// A path element failed validation.
    ///
    /// Raised for an empty field name or a field name containing the `.`
    /// separator character.
    #[error("invalid path element: {message}")]
    InvalidElement {
        /// Description of the validation failure.
        message: String,
    },

    /// A closing `]` was encountered with no matching `[`.
    #[error("unbalanced ']' at byte {position} in '{input}': no opening '[' was seen")]
    UnbalancedBracket {
        /// Byte offset of the offending `]` within the expression.
        position: usize,
        /// The full path expression being parsed.
        input: String,
    },

    /// A field path was constructed from zero elements.
    ///
    /// A path must contain at least one element; absence of a path is
    /// represented by `None`, never by an empty instance.
    #[error("at least one element is required to create a field path")]
    EmptyPath,
}

impl PathError {
    /// Creates an invalid element error.
    #[must_use]
    pub fn invalid_element(message: impl Into<String>) -> Self {
        Self::InvalidElement {
            message: message.into(),
        }
    }

    /// Creates an unbalanced bracket error.
    #[must_use]
    pub fn unbalanced_bracket(position: usize, input: impl Into<String>) -> Self {
        Self::UnbalancedBracket {
            position,
            input: input.into(),
        }
    }
}
