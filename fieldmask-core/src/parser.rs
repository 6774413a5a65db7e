//! Recursive-descent parser for the field-list grammar
//!
//! The grammar is LL(1) once whitespace is skipped, so the parser is a
//! plain cursor over the trimmed input with no backtracking. Parenthesized
//! field sets expand into one path per entry, each prefixed by the
//! enclosing names: `a(b,c)` yields `a.b` and `a.c`.

use crate::error::{ParseError, Result};
use crate::path::FieldPath;

/// Parse an include/exclude selector into its normalized path list.
///
/// Empty or all-whitespace input yields an empty list, meaning
/// "unspecified". Order is preserved and duplicates are retained; the same
/// input always parses to the same list.
pub fn parse_field_list(input: &str) -> Result<Vec<FieldPath>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut cursor = Cursor::new(trimmed);
    let mut paths = Vec::new();
    loop {
        parse_field(&mut cursor, &[], &mut paths, false)?;
        cursor.skip_whitespace();
        match cursor.peek() {
            None => break,
            Some(',') => cursor.bump(),
            Some(ch) => {
                return Err(ParseError::UnexpectedChar {
                    ch,
                    pos: cursor.pos(),
                })
            }
        }
    }
    Ok(paths)
}

/// Parse one `field` production, appending every path it expands to.
///
/// `prefix` holds the enclosing group names; `in_group` is true when this
/// field is a direct entry of a parenthesized set, the only position where
/// a bare `*` is the wildcard marker.
fn parse_field(
    cursor: &mut Cursor<'_>,
    prefix: &[String],
    paths: &mut Vec<FieldPath>,
    in_group: bool,
) -> Result<()> {
    let (name, name_pos) = cursor.parse_name()?;

    if name == "*" {
        if !in_group {
            return Err(ParseError::TopLevelWildcard { pos: name_pos });
        }
        // A wildcard entry is complete by itself; anything but `,` or `)`
        // after it is a grammar violation.
        cursor.skip_whitespace();
        if let Some(ch) = cursor.peek() {
            if ch != ',' && ch != ')' {
                return Err(ParseError::UnexpectedChar {
                    ch,
                    pos: cursor.pos(),
                });
            }
        }
        paths.push(FieldPath::from_parts(prefix.iter().cloned(), true));
        return Ok(());
    }

    let mut segments: Vec<String> = prefix.to_vec();
    segments.push(name);

    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            Some('.') => {
                cursor.bump();
                // `*` after a dot is an ordinary name character, not the
                // wildcard marker.
                let (segment, _) = cursor.parse_name()?;
                segments.push(segment);
            }
            Some('(') => {
                let open_pos = cursor.pos();
                cursor.bump();
                loop {
                    parse_field(cursor, &segments, paths, true)?;
                    cursor.skip_whitespace();
                    match cursor.peek() {
                        Some(',') => cursor.bump(),
                        Some(')') => {
                            cursor.bump();
                            // The field ends with its set; no path is
                            // emitted for the bare prefix.
                            return Ok(());
                        }
                        None => return Err(ParseError::UnclosedGroup { pos: open_pos }),
                        Some(ch) => {
                            return Err(ParseError::UnexpectedChar {
                                ch,
                                pos: cursor.pos(),
                            })
                        }
                    }
                }
            }
            _ => {
                paths.push(FieldPath::from_parts(segments, false));
                return Ok(());
            }
        }
    }
}

/// Byte cursor over the trimmed selector text.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn pos(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.bump();
        }
    }

    /// Consume a maximal run of name characters, skipping leading
    /// whitespace. Whitespace also ends a name, so `a b` is two tokens.
    fn parse_name(&mut self) -> Result<(String, usize)> {
        self.skip_whitespace();
        let start = self.pos;
        while matches!(self.peek(), Some(ch) if is_name_char(ch)) {
            self.bump();
        }
        if self.pos == start {
            return Err(ParseError::EmptyName { pos: start });
        }
        Ok((self.input[start..self.pos].to_string(), start))
    }
}

fn is_name_char(ch: char) -> bool {
    !ch.is_whitespace() && !matches!(ch, '.' | ',' | '(' | ')')
}
