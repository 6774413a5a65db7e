//! Fieldmask Filter - Response tree evaluation
//!
//! This crate applies parsed include/exclude selectors to JSON values:
//!
//! - Filter configuration built once from the raw selector strings
//! - Exclusion trie for O(children) per-node exclusion checks
//! - The recursive evaluator with EXPLICIT-field gating
//!
//! A [`FilterConfig`] is immutable after construction and safe to share
//! across threads; each [`FilterConfig::apply`] call builds a fresh output
//! tree and leaves the input untouched.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod exclude;
mod evaluate;

// Re-export commonly used types
pub use config::{FilterConfig, FilterOptions};
pub use exclude::ExcludeTree;
pub use fieldmask_core::{parse_field_list, FieldPath, ParseError};
