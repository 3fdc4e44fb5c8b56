//! Display names and angle-bracketed addresses.
//!
//! An address may be written as `[display-name] <addr-spec>`:
//!
//! ```text
//! "John Doe" <john.doe@example.com>
//! John Doe <john.doe@example.com>
//! <john.doe@example.com>
//! john.doe@example.com
//! ```

use crate::error::Rejection;
use crate::quoted::{is_quoted, validate_quoted_string};

/// An input split around its angle brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NameAddr<'a> {
    /// Text before `<`, trimmed. Empty when there is none.
    pub display_name: &'a str,
    /// The addr-spec, trimmed.
    pub addr_spec: &'a str,
}

impl<'a> NameAddr<'a> {
    const fn bare(addr_spec: &'a str) -> Self {
        Self {
            display_name: "",
            addr_spec,
        }
    }

    fn around(input: &'a str, open: usize) -> Result<Self, Rejection> {
        let close = input.rfind('>').ok_or(Rejection::AngleBrackets)?;
        if close <= open {
            return Err(Rejection::AngleBrackets);
        }
        Ok(Self {
            display_name: input[..open].trim(),
            addr_spec: input[open + 1..close].trim(),
        })
    }
}

/// Returns true if the input uses the `<addr-spec>` form.
fn has_angle_addr(input: &str) -> bool {
    input.contains('<') && input.ends_with('>')
}

/// Splits an input for validation, using the last `<`.
///
/// A non-empty display name is validated here.
pub(crate) fn split_for_validation(input: &str) -> Result<NameAddr<'_>, Rejection> {
    if !has_angle_addr(input) {
        return Ok(NameAddr::bare(input));
    }

    let open = input.rfind('<').ok_or(Rejection::AngleBrackets)?;
    let parts = NameAddr::around(input, open)?;
    validate_display_name(parts.display_name)?;
    Ok(parts)
}

/// Splits an input for extraction, using the first `<`.
pub(crate) fn split_for_extraction(input: &str) -> Result<NameAddr<'_>, Rejection> {
    if !has_angle_addr(input) {
        return Ok(NameAddr::bare(input));
    }

    let open = input.find('<').ok_or(Rejection::AngleBrackets)?;
    NameAddr::around(input, open)
}

/// Validates a display name.
///
/// Quoted names follow the quoted-string grammar. Unquoted names accept
/// printable ASCII plus any non-ASCII letter or digit; this is looser
/// than the local-part grammar on purpose.
pub(crate) fn validate_display_name(name: &str) -> Result<(), Rejection> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(());
    }

    if is_quoted(name) {
        return validate_quoted_string(name);
    }

    match name.chars().find(|&c| !is_display_char(c)) {
        Some(c) => Err(Rejection::DisplayNameChar(c)),
        None => Ok(()),
    }
}

fn is_display_char(c: char) -> bool {
    matches!(c, ' '..='~') || c.is_alphanumeric()
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
    fn test_bare_address() {
        let parts = split_for_validation("john.doe@example.com").unwrap();
        assert_eq!(parts, NameAddr::bare("john.doe@example.com"));
    }

    #[test]
    fn test_quoted_display_name() {
        let parts = split_for_validation("\"John Doe\" <john.doe@example.com>").unwrap();
        assert_eq!(parts.display_name, "\"John Doe\"");
        assert_eq!(parts.addr_spec, "john.doe@example.com");
    }

    #[test]
    fn test_unquoted_display_name() {
        let parts = split_for_validation("John Doe <john.doe@example.com>").unwrap();
        assert_eq!(parts.display_name, "John Doe");
        assert_eq!(parts.addr_spec, "john.doe@example.com");
    }

    #[test]
    fn test_angle_without_name() {
        let parts = split_for_validation("<john.doe@example.com>").unwrap();
        assert_eq!(parts, NameAddr::bare("john.doe@example.com"));
    }

    #[test]
    fn test_inner_whitespace_trimmed() {
        let parts = split_for_validation("John < john@example.com >").unwrap();
        assert_eq!(parts.addr_spec, "john@example.com");
    }

    #[test]
    fn test_open_without_close_is_bare() {
        let parts = split_for_validation("\"a<b\"@example.com").unwrap();
        assert_eq!(parts, NameAddr::bare("\"a<b\"@example.com"));
    }

    #[test]
    fn test_validation_uses_last_open() {
        let parts = split_for_validation("a<b <c@example.com>").unwrap();
        assert_eq!(parts.display_name, "a<b");
        assert_eq!(parts.addr_spec, "c@example.com");
    }

    #[test]
    fn test_extraction_uses_first_open() {
        let parts = split_for_extraction("a<b <c@example.com>").unwrap();
        assert_eq!(parts.display_name, "a");
        assert_eq!(parts.addr_spec, "b <c@example.com");
    }

    #[test]
    fn test_invalid_display_name_rejected() {
        assert_eq!(
            split_for_validation("Bad\u{1}Name <a@example.com>"),
            Err(Rejection::DisplayNameChar('\u{1}'))
        );
        assert_eq!(
            split_for_validation("\"\" <a@example.com>"),
            Err(Rejection::QuotedEmpty)
        );
    }

    #[test]
    fn test_display_name_rules() {
        assert!(validate_display_name("").is_ok());
        assert!(validate_display_name("John Doe").is_ok());
        assert!(validate_display_name("O'Brien, Jr. (work)").is_ok());
        assert!(validate_display_name("José Müller").is_ok());
        assert!(validate_display_name("山田太郎").is_ok());
        assert!(validate_display_name("\"Doe, John\"").is_ok());
        assert_eq!(
            validate_display_name("Tab\tName"),
            Err(Rejection::DisplayNameChar('\t'))
        );
        assert_eq!(
            validate_display_name("Del\u{7f}"),
            Err(Rejection::DisplayNameChar('\u{7f}'))
        );
        assert_eq!(
            validate_display_name("Smile \u{1F600}"),
            Err(Rejection::DisplayNameChar('\u{1F600}'))
        );
    }
}
