//! Filter configuration
//!
//! Built once from the three raw header-like inputs and reusable across
//! any number of `apply` calls, including from multiple threads.

use crate::evaluate;
use crate::exclude::ExcludeTree;
use fieldmask_core::{parse_field_list, FieldPath, Result};
use serde_json::Value;

/// Raw inputs for a [`FilterConfig`].
///
/// By convention `include` carries the client's `Attributes` header value
/// and `exclude` the `Attributes-Excluded` value; `explicit_fields` names
/// come from static API documentation metadata, never from the request.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Inclusion selector; `None` and the empty string both mean
    /// "unspecified".
    pub include: Option<String>,
    /// Exclusion selector; same grammar as `include`.
    pub exclude: Option<String>,
    /// EXPLICIT field names as flat dotted paths. These are split on `.`
    /// with trimming, never run through the grammar; a `*` here is a
    /// literal segment name, not a wildcard.
    pub explicit_fields: Vec<String>,
}

/// Immutable filtering configuration: the parsed include/exclude/explicit
/// sets plus the precomputed exclusion trie.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    include: Vec<FieldPath>,
    exclude: Vec<FieldPath>,
    explicit: Vec<FieldPath>,
    exclude_tree: ExcludeTree,
}

impl FilterConfig {
    /// Parse the selectors and build the configuration.
    ///
    /// Fails with the first grammar violation in either selector; no tree
    /// is ever touched on the error path.
    pub fn new(options: &FilterOptions) -> Result<Self> {
        let include = match &options.include {
            Some(selector) => parse_field_list(selector)?,
            None => Vec::new(),
        };
        let exclude = match &options.exclude {
            Some(selector) => parse_field_list(selector)?,
            None => Vec::new(),
        };
        let explicit = options
            .explicit_fields
            .iter()
            .filter_map(|entry| FieldPath::from_dotted(entry))
            .collect();
        let exclude_tree = ExcludeTree::build(&exclude);

        Ok(Self {
            include,
            exclude,
            explicit,
            exclude_tree,
        })
    }

    /// Filter `value`, returning the surviving subset or `None` when the
    /// whole value is excluded. The input is never mutated.
    pub fn apply(&self, value: &Value) -> Option<Value> {
        evaluate::apply(self, value)
    }

    /// The parsed inclusion set, in selector order.
    pub fn include_paths(&self) -> &[FieldPath] {
        &self.include
    }

    /// The parsed exclusion set, in selector order.
    pub fn exclude_paths(&self) -> &[FieldPath] {
        &self.exclude
    }

    /// The EXPLICIT field paths.
    pub fn explicit_paths(&self) -> &[FieldPath] {
        &self.explicit
    }

    /// The precomputed exclusion trie.
    pub fn exclude_tree(&self) -> &ExcludeTree {
        &self.exclude_tree
    }
}
