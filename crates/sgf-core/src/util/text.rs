//! SGF text normalization.
//!
//! Raw property values arrive with SGF escaping intact. On read the escape
//! character is stripped except in front of `\` and `]`, escaped line breaks
//! disappear, and whitespace is normalized according to the value kind.

const ESCAPE: char = '\\';

/// Returns true for characters that start a line break.
fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Strips escape characters that SGF does not require.
///
/// `\\` and `\]` are kept verbatim, an escaped line break (`\` followed by
/// `\n`, `\r`, `\r\n` or `\n\r`) is removed entirely, and any other escaped
/// character loses its backslash.
pub fn strip_escapes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next @ (ESCAPE | ']')) => {
                out.push(ESCAPE);
                out.push(next);
            }
            Some(next) if is_line_break(next) => {
                // Soft line break: swallow the second half of a two-char break.
                if let Some(&after) = chars.peek() {
                    if is_line_break(after) && after != next {
                        chars.next();
                    }
                }
            }
            Some(next) => out.push(next),
            // Trailing lone backslash.
            None => {}
        }
    }
    out
}

/// Normalizes a SimpleText value: escapes are stripped and every whitespace
/// character other than space becomes a space. A two-character line break
/// collapses to a single space.
pub fn normalize_simple_text(raw: &str) -> String {
    let stripped = strip_escapes(raw);
    let mut out = String::with_capacity(stripped.len());
    let mut chars = stripped.chars().peekable();

    while let Some(c) = chars.next() {
        if is_line_break(c) {
            if let Some(&after) = chars.peek() {
                if is_line_break(after) && after != c {
                    chars.next();
                }
            }
            out.push(' ');
        } else if c.is_whitespace() {
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Normalizes a Text value: escapes are stripped, line breaks are kept and
/// every other whitespace character becomes a space.
pub fn normalize_text(raw: &str) -> String {
    strip_escapes(raw)
        .chars()
        .map(|c| {
            if c.is_whitespace() && !is_line_break(c) {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Removes the escapes [`strip_escapes`] keeps, producing display text.
pub fn unescape(normalized: &str) -> String {
    let mut out = String::with_capacity(normalized.len());
    let mut chars = normalized.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Adds the escapes SGF requires for a value written back into a property.
///
/// `composed` additionally escapes `:` for values that become one half of a
/// composed value.
pub fn escape(text: &str, composed: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ESCAPE || c == ']' || (composed && c == ':') {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Returns the byte offset of the first `:` not protected by an escape.
pub fn find_composed_separator(raw: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in raw.char_indices() {
        if escaped {
            escaped = false;
        } else if c == ESCAPE {
            escaped = true;
        } else if c == ':' {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_escapes_keeps_required() {
        assert_eq!(strip_escapes(r"a\\b"), r"a\\b");
        assert_eq!(strip_escapes(r"a\]b"), r"a\]b");
        assert_eq!(strip_escapes(r"a\:b"), "a:b");
        assert_eq!(strip_escapes(r"\a\b\c"), "abc");
    }

    #[test]
    fn test_strip_escapes_soft_line_breaks() {
        assert_eq!(strip_escapes("foo\\\nbar"), "foobar");
        assert_eq!(strip_escapes("foo\\\r\nbar"), "foobar");
        assert_eq!(strip_escapes("foo\\\n\rbar"), "foobar");
        assert_eq!(strip_escapes("foo\\\n\nbar"), "foo\nbar");
        assert_eq!(strip_escapes("trailing\\"), "trailing");
    }

    #[test]
    fn test_simple_text_whitespace() {
        assert_eq!(normalize_simple_text("a\tb\nc"), "a b c");
        assert_eq!(normalize_simple_text("a\r\nb"), "a b");
        assert_eq!(normalize_simple_text("a\\\nb"), "ab");
        assert_eq!(normalize_simple_text("a  b"), "a  b");
    }

    #[test]
    fn test_text_whitespace() {
        assert_eq!(normalize_text("a\tb\nc"), "a b\nc");
        assert_eq!(normalize_text("line\\\nbreak"), "linebreak");
        assert_eq!(normalize_text("a\r\nb"), "a\r\nb");
    }

    #[test]
    fn test_unescape_and_escape() {
        assert_eq!(unescape(r"a\\b\]"), r"a\b]");
        assert_eq!(escape(r"a\b]", false), r"a\\b\]");
        assert_eq!(escape("a:b", true), r"a\:b");
        assert_eq!(escape("a:b", false), "a:b");
    }

    #[test]
    fn test_find_composed_separator() {
        assert_eq!(find_composed_separator("aa:bb"), Some(2));
        assert_eq!(find_composed_separator(r"a\:b:c"), Some(4));
        assert_eq!(find_composed_separator(r"a\\:b"), Some(3));
        assert_eq!(find_composed_separator("abc"), None);
    }
}
