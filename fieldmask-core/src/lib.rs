//! Fieldmask Core - Field-list grammar and path primitives
//!
//! This crate provides the selector-side primitives for fieldmask with no
//! JSON dependencies. It includes:
//!
//! - Field path values (dotted segment sequences, optional wildcard marker)
//! - The recursive-descent parser for the include/exclude field-list grammar
//! - Path-set query utilities (exact, ancestor, descendant, wildcard cover)
//! - Error types
//!
//! The grammar shared by inclusion and exclusion selectors:
//!
//! ```text
//! field-list      ::= field (',' field)*
//! field           ::= name ('.' field | field-set)?
//! field-set       ::= '(' field-set-list ')'
//! field-set-list  ::= '*' (',' field)* | field (',' field)*
//! name            ::= one or more chars excluding whitespace, '.', ',', '(', ')'
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod parser;
pub mod path;
pub mod query;

// Re-export commonly used types
pub use error::{ParseError, Result};
pub use parser::parse_field_list;
pub use path::FieldPath;
