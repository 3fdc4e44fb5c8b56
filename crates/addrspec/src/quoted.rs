//! Quoted-string grammar shared by local parts and display names.

use std::borrow::Cow;

use crate::error::Rejection;

/// Returns true if the text is framed by double quotes.
pub(crate) fn is_quoted(s: &str) -> bool {
    s.starts_with('"') && s.ends_with('"')
}

/// Validates a quoted string such as `"john smith"`.
///
/// The content between the framing quotes must be non-empty. A backslash
/// escapes the following character, whatever it is. Unescaped quotes and
/// unescaped control characters (below 0x20, or DEL) are rejected.
pub(crate) fn validate_quoted_string(s: &str) -> Result<(), Rejection> {
    let content = content(s).ok_or(Rejection::QuotedFraming)?;
    if content.is_empty() {
        return Err(Rejection::QuotedEmpty);
    }

    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next().ok_or(Rejection::IncompleteEscape)?;
            }
            '"' => return Err(Rejection::UnescapedQuote),
            c if is_control(c) => return Err(Rejection::QuotedControl(c)),
            _ => {}
        }
    }

    Ok(())
}

/// Removes the framing quotes and resolves quoted pairs.
///
/// Text that is not framed by quotes is returned unchanged.
pub(crate) fn unquote(s: &str) -> Cow<'_, str> {
    let Some(content) = content(s) else {
        return Cow::Borrowed(s);
    };
    if !content.contains('\\') {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Renders text as a quoted string, escaping what the grammar requires.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' || is_control(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn content(s: &str) -> Option<&str> {
    if s.len() < 2 || !is_quoted(s) {
        return None;
    }
    // Both framing quotes are single octets.
    Some(&s[1..s.len() - 1])
}

const fn is_control(c: char) -> bool {
    (c as u32) < 0x20 || c == '\u{7f}'
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_quoted_strings() {
        assert!(validate_quoted_string("\"john smith\"").is_ok());
        assert!(validate_quoted_string("\"user..name\"").is_ok());
        assert!(validate_quoted_string("\"test@test\"").is_ok());
        assert!(validate_quoted_string("\"\\\"\"").is_ok());
        assert!(validate_quoted_string("\"!#$%&'()*+,./:;<=>?@[\\]^_{|}~\"").is_ok());
    }

    #[test]
    fn test_escaped_control_allowed() {
        assert!(validate_quoted_string("\"a\\\tb\"").is_ok());
        assert!(validate_quoted_string("\"a\\\u{7f}\"").is_ok());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(validate_quoted_string("\""), Err(Rejection::QuotedFraming));
        assert_eq!(validate_quoted_string(""), Err(Rejection::QuotedFraming));
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(validate_quoted_string("\"\""), Err(Rejection::QuotedEmpty));
    }

    #[test]
    fn test_incomplete_escape() {
        assert_eq!(
            validate_quoted_string("\"abc\\\""),
            Err(Rejection::IncompleteEscape)
        );
    }

    #[test]
    fn test_unescaped_quote() {
        assert_eq!(
            validate_quoted_string("\"a\"b\""),
            Err(Rejection::UnescapedQuote)
        );
    }

    #[test]
    fn test_unescaped_control() {
        assert_eq!(
            validate_quoted_string("\"a\tb\""),
            Err(Rejection::QuotedControl('\t'))
        );
        assert_eq!(
            validate_quoted_string("\"a\u{7f}\""),
            Err(Rejection::QuotedControl('\u{7f}'))
        );
        assert_eq!(
            validate_quoted_string("\"a\0\""),
            Err(Rejection::QuotedControl('\0'))
        );
    }

    #[test]
    fn test_unicode_content() {
        assert!(validate_quoted_string("\"Jürgen Müller\"").is_ok());
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"John Doe\""), "John Doe");
        assert_eq!(unquote("\"John \\\"JD\\\" Doe\""), "John \"JD\" Doe");
        assert_eq!(unquote("John Doe"), "John Doe");
        assert_eq!(unquote("\""), "\"");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("John Doe"), "\"John Doe\"");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn test_quote_is_valid_and_reversible() {
        for name in ["plain", "with \"quotes\"", "back\\slash", "tab\there"] {
            let quoted = quote(name);
            assert!(validate_quoted_string(&quoted).is_ok(), "{quoted}");
            assert_eq!(unquote(&quoted), name);
        }
    }
}
