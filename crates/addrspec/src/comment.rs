//! Comment removal.
//!
//! RFC 5322 allows parenthesized comments (`CFWS`) almost anywhere in an
//! address. They are removed before any other rule is applied:
//!
//! ```text
//! user(comment)@example.com   ->   user@example.com
//! "a(b)"@example.com          ->   "a(b)"@example.com
//! ```

use std::borrow::Cow;

/// Per-character state while scanning for comments.
#[derive(Debug, Default)]
struct CommentScanner {
    /// Parenthesis nesting depth. Goes negative on a stray `)`.
    depth: isize,
    /// Inside a quoted string opened at depth 0.
    in_quotes: bool,
    /// Previous character was a backslash.
    escaped: bool,
}

impl CommentScanner {
    /// Feeds one character, returning it if it belongs to the output.
    fn feed(&mut self, c: char) -> Option<char> {
        let outside = self.depth == 0;

        if self.escaped {
            self.escaped = false;
            return outside.then_some(c);
        }

        match c {
            '\\' => {
                self.escaped = true;
                outside.then_some(c)
            }
            '(' if !self.in_quotes => {
                self.depth += 1;
                None
            }
            ')' if !self.in_quotes => {
                self.depth -= 1;
                None
            }
            '"' if outside => {
                self.in_quotes = !self.in_quotes;
                Some(c)
            }
            _ => outside.then_some(c),
        }
    }
}

/// Removes parenthesized comments that are not inside a quoted string.
///
/// Nested comments are removed as a whole. Unbalanced parentheses are not
/// an error here; whatever residue remains is rejected by the character
/// rules of the local part or domain.
pub(crate) fn strip_comments(input: &str) -> Cow<'_, str> {
    if !input.contains(['(', ')']) {
        return Cow::Borrowed(input);
    }

    let mut scanner = CommentScanner::default();
    Cow::Owned(input.chars().filter_map(|c| scanner.feed(c)).collect())
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
    fn test_no_comments_borrows() {
        assert!(matches!(
            strip_comments("user@example.com"),
            Cow::Borrowed("user@example.com")
        ));
    }

    #[test]
    fn test_strip_single_comment() {
        assert_eq!(strip_comments("user(comment)@example.com"), "user@example.com");
        assert_eq!(strip_comments("(comment)user@example.com"), "user@example.com");
        assert_eq!(strip_comments("user@example.com(comment)"), "user@example.com");
    }

    #[test]
    fn test_strip_multiple_comments() {
        assert_eq!(
            strip_comments("user(comment)name(anothercomment)@example.com"),
            "username@example.com"
        );
    }

    #[test]
    fn test_strip_nested_comment() {
        assert_eq!(strip_comments("user(a(b)c)@example.com"), "user@example.com");
    }

    #[test]
    fn test_parentheses_in_quotes_preserved() {
        assert_eq!(strip_comments("\"a(b)\"@example.com"), "\"a(b)\"@example.com");
    }

    #[test]
    fn test_escaped_parenthesis_kept() {
        assert_eq!(strip_comments("a\\(b@example.com"), "a\\(b@example.com");
    }

    #[test]
    fn test_escape_inside_comment_dropped() {
        assert_eq!(strip_comments("a(x\\)y)b"), "ab");
    }

    #[test]
    fn test_quote_inside_comment_ignored() {
        assert_eq!(strip_comments("a(\")b"), "ab");
    }

    #[test]
    fn test_unbalanced_open() {
        assert_eq!(strip_comments("user(oops@example.com"), "user");
    }

    #[test]
    fn test_stray_close_drops_rest() {
        assert_eq!(strip_comments("user)@example.com"), "user");
    }
}
