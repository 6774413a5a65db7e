//! Error types for the field-list grammar

use thiserror::Error;

/// Grammar errors raised while parsing a field-list selector.
///
/// Every variant carries the 0-based byte position of the offending
/// character within the trimmed input. Parsing does not attempt recovery;
/// the first violation rejects the whole selector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character appeared where the grammar did not allow it.
    #[error("unexpected character `{ch}` at position {pos}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset of the character in the trimmed input.
        pos: usize,
    },
    /// A field name was required but none was present.
    #[error("empty field name at position {pos}")]
    EmptyName {
        /// Byte offset where the name was expected.
        pos: usize,
    },
    /// A parenthesized field set was opened but never closed.
    #[error("missing closing parenthesis for group opened at position {pos}")]
    UnclosedGroup {
        /// Byte offset of the opening `(`.
        pos: usize,
    },
    /// A bare `*` appeared with an empty prefix.
    #[error("wildcard not allowed as a top-level selector at position {pos}")]
    TopLevelWildcard {
        /// Byte offset of the `*`.
        pos: usize,
    },
}

impl ParseError {
    /// Byte position of the offending character in the trimmed input.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedChar { pos, .. }
            | ParseError::EmptyName { pos }
            | ParseError::UnclosedGroup { pos }
            | ParseError::TopLevelWildcard { pos } => *pos,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ParseError>;
