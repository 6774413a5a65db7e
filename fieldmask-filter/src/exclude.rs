//! Exclusion trie
//!
//! The exclude set is folded into a prefix tree once at configuration time
//! so the evaluator checks each object key against its children instead of
//! rescanning the full path list at every node.

use ahash::AHashMap;
use fieldmask_core::FieldPath;

/// A node of the exclusion trie. The root represents the response root.
///
/// A key is vetoed outright when its child node is a leaf (the selector
/// named exactly that path and nothing deeper) or when this node carries a
/// wildcard entry, which vetoes every key at this level. A non-leaf child
/// means only a deeper portion is excluded, so the key survives and the
/// walk continues with the child as the new exclusion context.
#[derive(Debug, Clone, Default)]
pub struct ExcludeTree {
    children: AHashMap<String, ExcludeTree>,
    wildcard: bool,
}

impl ExcludeTree {
    /// Build the trie from a parsed exclude set. Duplicate and overlapping
    /// paths merge; a path that gains descendants through the merge is no
    /// longer a leaf and therefore no longer an outright veto.
    pub fn build(paths: &[FieldPath]) -> Self {
        let mut root = ExcludeTree::default();
        for path in paths {
            let mut node = &mut root;
            for segment in path.segments() {
                node = node.children.entry(segment.clone()).or_default();
            }
            if path.has_wildcard() {
                node.wildcard = true;
            }
        }
        root
    }

    /// Whether this node vetoes every key at its level.
    pub fn vetoes_all_children(&self) -> bool {
        self.wildcard
    }

    /// Exclusion context for `key` beneath this node, if any.
    pub fn child(&self, key: &str) -> Option<&ExcludeTree> {
        self.children.get(key)
    }

    /// A leaf is an exclusion endpoint: the selector named exactly this
    /// path with no deeper sub-path.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && !self.wildcard
    }

    /// Whether the trie holds no exclusions at all.
    pub fn is_empty(&self) -> bool {
        self.is_leaf()
    }
}
