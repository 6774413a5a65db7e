//! Path-set queries
//!
//! Pure predicates over a parsed path set and a concrete target path.
//! The evaluator combines these per JSON node; the tie-break policy lives
//! there, not here. Wildcard paths participate only in
//! [`covered_by_wildcard_or_concrete`]; the other queries ignore them.

use crate::path::FieldPath;

/// True iff some non-wildcard path in `set` equals `target` exactly.
pub fn exactly_listed(set: &[FieldPath], target: &[String]) -> bool {
    set.iter()
        .any(|path| !path.has_wildcard() && path.segments() == target)
}

/// True iff some non-wildcard path in `set` names `target` or a field
/// below it (equal length counts as "self").
pub fn descendant_or_self_listed(set: &[FieldPath], target: &[String]) -> bool {
    set.iter()
        .any(|path| !path.has_wildcard() && is_prefix(target, path.segments()))
}

/// Like [`descendant_or_self_listed`], but a wildcard path also covers
/// `target` when its stem (the path minus the marker) sits at or above
/// `target`, or strictly below it. The latter lets a deep wildcard justify
/// returning the ancestor nodes on the way down to it.
pub fn covered_by_wildcard_or_concrete(set: &[FieldPath], target: &[String]) -> bool {
    set.iter().any(|path| {
        let segments = path.segments();
        if path.has_wildcard() {
            is_prefix(segments, target) || is_prefix(target, segments)
        } else {
            is_prefix(target, segments)
        }
    })
}

/// True iff some non-wildcard path in `set` is a strict prefix of
/// `target`: an included ancestor that, absent gating, grants access to
/// everything beneath it.
pub fn ancestor_listed(set: &[FieldPath], target: &[String]) -> bool {
    set.iter().any(|path| {
        !path.has_wildcard()
            && path.segments().len() < target.len()
            && is_prefix(path.segments(), target)
    })
}

/// Whether `prefix` is a (non-strict) prefix of `longer`.
fn is_prefix(prefix: &[String], longer: &[String]) -> bool {
    prefix.len() <= longer.len() && prefix.iter().zip(longer).all(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_field_list;

    fn set(input: &str) -> Vec<FieldPath> {
        parse_field_list(input).unwrap()
    }

    fn target(dotted: &str) -> Vec<String> {
        dotted.split('.').map(str::to_string).collect()
    }

    #[test]
    fn test_exactly_listed_ignores_wildcards() {
        let paths = set("a.b, c(*)");
        assert!(exactly_listed(&paths, &target("a.b")));
        assert!(!exactly_listed(&paths, &target("a")));
        // `c(*)` parses to the wildcard path c.*, which never matches
        // exactly, not even its own stem.
        assert!(!exactly_listed(&paths, &target("c")));
    }

    #[test]
    fn test_descendant_or_self_listed() {
        let paths = set("a.b.c");
        assert!(descendant_or_self_listed(&paths, &target("a")));
        assert!(descendant_or_self_listed(&paths, &target("a.b")));
        assert!(descendant_or_self_listed(&paths, &target("a.b.c")));
        assert!(!descendant_or_self_listed(&paths, &target("a.b.c.d")));
        assert!(!descendant_or_self_listed(&paths, &target("a.x")));
    }

    #[test]
    fn test_descendant_query_skips_wildcards() {
        let paths = set("a(*)");
        assert!(!descendant_or_self_listed(&paths, &target("a")));
        assert!(!descendant_or_self_listed(&paths, &target("a.b")));
    }

    #[test]
    fn test_wildcard_covers_at_and_below_stem() {
        let paths = set("a(*)");
        assert!(covered_by_wildcard_or_concrete(&paths, &target("a")));
        assert!(covered_by_wildcard_or_concrete(&paths, &target("a.b")));
        assert!(covered_by_wildcard_or_concrete(&paths, &target("a.b.c")));
        assert!(!covered_by_wildcard_or_concrete(&paths, &target("x")));
    }

    #[test]
    fn test_deep_wildcard_reaches_up_to_ancestors() {
        // a(b(*)) parses to a.b.*; the node `a` must still be returned on
        // the way down to the wildcard.
        let paths = set("a(b(*))");
        assert!(covered_by_wildcard_or_concrete(&paths, &target("a")));
        assert!(covered_by_wildcard_or_concrete(&paths, &target("a.b")));
        assert!(covered_by_wildcard_or_concrete(&paths, &target("a.b.c")));
        assert!(!covered_by_wildcard_or_concrete(&paths, &target("a.x")));
    }

    #[test]
    fn test_concrete_cover_is_descendant_or_self() {
        let paths = set("a.b");
        assert!(covered_by_wildcard_or_concrete(&paths, &target("a")));
        assert!(covered_by_wildcard_or_concrete(&paths, &target("a.b")));
        assert!(!covered_by_wildcard_or_concrete(&paths, &target("a.b.c")));
    }

    #[test]
    fn test_ancestor_listed_is_strict_and_concrete() {
        let paths = set("a.b");
        assert!(ancestor_listed(&paths, &target("a.b.c")));
        assert!(!ancestor_listed(&paths, &target("a.b")));
        assert!(!ancestor_listed(&paths, &target("a")));

        let wild = set("a(*)");
        assert!(!ancestor_listed(&wild, &target("a.b.c")));
    }
}
