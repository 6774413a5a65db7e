//! Recursive tree evaluator
//!
//! Walks the response value top-down, deciding per object key whether it
//! survives. Three rules interact, in order of force:
//!
//! 1. Exclusion is an absolute veto; an excluded key is dropped even when
//!    the include set names it.
//! 2. EXPLICIT fields and fields below an unopened EXPLICIT gate appear
//!    only when named concretely, never via an ancestor or a wildcard.
//! 3. Everything else follows the include set: an included ancestor or a
//!    wildcard cover suffices.
//!
//! `None` is the Omitted signal: an object whose keys all vanish is itself
//! dropped at its parent, which is also how full exclusion propagates to
//! the root. The walk never errors; all grammar failures were rejected at
//! configuration time.

use crate::config::FilterConfig;
use crate::exclude::ExcludeTree;
use fieldmask_core::query::{
    ancestor_listed, covered_by_wildcard_or_concrete, descendant_or_self_listed, exactly_listed,
};
use serde_json::{Map, Value};

pub(crate) fn apply(config: &FilterConfig, value: &Value) -> Option<Value> {
    let mut path = Vec::new();
    filter_value(config, value, &mut path, Some(config.exclude_tree()))
}

fn filter_value(
    config: &FilterConfig,
    value: &Value,
    path: &mut Vec<String>,
    exclude: Option<&ExcludeTree>,
) -> Option<Value> {
    match value {
        Value::Object(map) => filter_object(config, map, path, exclude),
        // Arrays are transparent to paths: every element is filtered under
        // the array's own path and exclusion context, and omitted elements
        // are dropped rather than nulled. Emptiness never omits an array.
        Value::Array(items) => Some(Value::Array(
            items
                .iter()
                .filter_map(|item| filter_value(config, item, path, exclude))
                .collect(),
        )),
        // Scalars pass through; the decision to reach them happened at the
        // parent.
        scalar => Some(scalar.clone()),
    }
}

fn filter_object(
    config: &FilterConfig,
    map: &Map<String, Value>,
    path: &mut Vec<String>,
    exclude: Option<&ExcludeTree>,
) -> Option<Value> {
    let mut result = Map::new();

    for (key, child) in map {
        let child_exclude = match exclude {
            Some(node) => {
                if node.vetoes_all_children() {
                    continue;
                }
                match node.child(key.as_str()) {
                    Some(sub) if sub.is_leaf() => continue,
                    sub => sub,
                }
            }
            None => None,
        };

        path.push(key.clone());
        let kept = if is_included(config, path) {
            filter_value(config, child, path, child_exclude)
        } else {
            None
        };
        path.pop();

        if let Some(value) = kept {
            result.insert(key.clone(), value);
        }
    }

    if result.is_empty() {
        None
    } else {
        Some(Value::Object(result))
    }
}

/// The inclusion policy for one candidate path.
fn is_included(config: &FilterConfig, path: &[String]) -> bool {
    let include = config.include_paths();
    let explicit = exactly_listed(config.explicit_paths(), path);
    let gated = has_unincluded_explicit_ancestor(config, path);

    if include.is_empty() {
        // No inclusion selector: everything appears except EXPLICIT fields
        // and anything beneath an (inevitably unopened) EXPLICIT gate.
        return !explicit && !gated;
    }

    if explicit || gated {
        // Only a concrete listing of the field or a descendant opens a
        // gate; wildcards and included ancestors never reveal EXPLICIT
        // content.
        return descendant_or_self_listed(include, path);
    }

    ancestor_listed(include, path) || covered_by_wildcard_or_concrete(include, path)
}

/// Whether some strict ancestor of `path` is EXPLICIT without being
/// exactly listed in the include set. Such an ancestor shuts the gate for
/// everything below it, whatever else the include set says.
fn has_unincluded_explicit_ancestor(config: &FilterConfig, path: &[String]) -> bool {
    (1..path.len()).any(|len| {
        let ancestor = &path[..len];
        exactly_listed(config.explicit_paths(), ancestor)
            && !exactly_listed(config.include_paths(), ancestor)
    })
}
