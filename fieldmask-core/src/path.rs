//! Field path values

use smallvec::SmallVec;
use std::fmt;

/// Inline capacity for path segments; API selectors rarely nest deeper.
type Segments = SmallVec<[String; 4]>;

/// An ordered, non-empty sequence of field name segments, optionally
/// terminated by the wildcard marker `*`.
///
/// The marker may only appear as the final position of a path, which is why
/// it is stored as a flag rather than a segment. A wildcard path is only
/// ever produced by the grammar parser from inside a parenthesized group;
/// paths built from dotted strings are always concrete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Segments,
    wildcard: bool,
}

impl FieldPath {
    /// Build a concrete (non-wildcard) path. Returns `None` for an empty
    /// segment list.
    pub fn concrete<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(segments, false)
    }

    /// Build a path ending in the wildcard marker. The segment list holds
    /// the prefix below which the wildcard selects; it must be non-empty
    /// (a bare top-level wildcard is not a legal path).
    pub fn wildcard<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(segments, true)
    }

    fn new<I, S>(segments: I, wildcard: bool) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Segments = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return None;
        }
        Some(Self { segments, wildcard })
    }

    /// Infallible constructor for callers that already hold a non-empty
    /// segment list, such as the parser.
    pub(crate) fn from_parts<I, S>(segments: I, wildcard: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Segments = segments.into_iter().map(Into::into).collect();
        debug_assert!(!segments.is_empty(), "field path must be non-empty");
        Self { segments, wildcard }
    }

    /// Build a concrete path by naive `.`-splitting with trimming.
    ///
    /// This is the EXPLICIT-field entry form: no grammar, no wildcard
    /// interpretation (`*` stays a literal segment name). Returns `None`
    /// when the trimmed entry is empty.
    pub fn from_dotted(entry: &str) -> Option<Self> {
        let entry = entry.trim();
        if entry.is_empty() {
            return None;
        }
        Self::concrete(entry.split('.').map(str::trim))
    }

    /// The name segments, excluding the wildcard marker.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this path ends in the wildcard marker.
    pub fn has_wildcard(&self) -> bool {
        self.wildcard
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        if self.wildcard {
            f.write_str(".*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_rejects_empty() {
        assert!(FieldPath::concrete(Vec::<String>::new()).is_none());
        assert!(FieldPath::concrete(["a"]).is_some());
    }

    #[test]
    fn test_display_renders_dotted() {
        let path = FieldPath::concrete(["a", "b", "c"]).unwrap();
        assert_eq!(path.to_string(), "a.b.c");

        let wild = FieldPath::wildcard(["a", "b"]).unwrap();
        assert_eq!(wild.to_string(), "a.b.*");
    }

    #[test]
    fn test_from_dotted_trims_segments() {
        let path = FieldPath::from_dotted(" a . b ").unwrap();
        assert_eq!(path.segments(), ["a", "b"]);
        assert!(!path.has_wildcard());
    }

    #[test]
    fn test_from_dotted_star_is_literal() {
        let path = FieldPath::from_dotted("a.*").unwrap();
        assert_eq!(path.segments(), ["a", "*"]);
        assert!(!path.has_wildcard());
    }

    #[test]
    fn test_from_dotted_empty_entry() {
        assert!(FieldPath::from_dotted("").is_none());
        assert!(FieldPath::from_dotted("   ").is_none());
    }
}
