//! Local-part validation.

use crate::error::Rejection;
use crate::quoted::{is_quoted, validate_quoted_string};
use crate::MAX_LOCAL_PART_LENGTH;

/// Punctuation allowed in an unquoted (dot-atom) local part.
const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~.";

/// Validates the part of an address before the `@`.
///
/// A local part is either a quoted string spanning the whole part, or a
/// dot-atom: letters, digits and [`ATEXT_SPECIALS`], with no leading,
/// trailing or doubled dots.
pub(crate) fn validate_local_part(local: &str) -> Result<(), Rejection> {
    if local.is_empty() || local.len() > MAX_LOCAL_PART_LENGTH {
        return Err(Rejection::LocalPartLength {
            max: MAX_LOCAL_PART_LENGTH,
        });
    }

    if is_quoted(local) {
        return validate_quoted_string(local);
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(Rejection::LocalPartDot);
    }

    match local.chars().find(|&c| !is_atext(c)) {
        Some(c) => Err(Rejection::LocalPartChar(c)),
        None => Ok(()),
    }
}

fn is_atext(c: char) -> bool {
    c.is_alphanumeric() || ATEXT_SPECIALS.contains(c)
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
    fn test_valid_dot_atoms() {
        for local in [
            "user",
            "user.name",
            "user.name+tag",
            "user-name",
            "user_name",
            "!name",
            "a/b=c?d^e`f{g|h}i~j",
            "éléonore",
            "用户",
        ] {
            assert!(validate_local_part(local).is_ok(), "{local}");
        }
    }

    #[test]
    fn test_dot_placement() {
        for local in [".user", "user.", "user..name", "."] {
            assert_eq!(validate_local_part(local), Err(Rejection::LocalPartDot), "{local}");
        }
    }

    #[test]
    fn test_forbidden_characters() {
        for c in [' ', '@', '(', ')', '<', '>', '[', ']', ':', ';', ',', '\\', '"', '\0', '\u{7f}'] {
            let local = format!("us{c}er");
            assert_eq!(
                validate_local_part(&local),
                Err(Rejection::LocalPartChar(c)),
                "{local:?}"
            );
        }
    }

    #[test]
    fn test_quoted_local_part() {
        assert!(validate_local_part("\"user..name\"").is_ok());
        assert!(validate_local_part("\"john smith\"").is_ok());
        assert!(validate_local_part("\"test@test\"").is_ok());
        assert_eq!(validate_local_part("\"\""), Err(Rejection::QuotedEmpty));
        assert_eq!(validate_local_part("\""), Err(Rejection::QuotedFraming));
    }

    #[test]
    fn test_length_limit() {
        let max = "a".repeat(MAX_LOCAL_PART_LENGTH);
        assert!(validate_local_part(&max).is_ok());

        let over = "a".repeat(MAX_LOCAL_PART_LENGTH + 1);
        assert_eq!(
            validate_local_part(&over),
            Err(Rejection::LocalPartLength { max: 64 })
        );
        assert!(validate_local_part("").is_err());
    }

    #[test]
    fn test_length_counts_octets() {
        // 32 two-octet characters fill the limit exactly.
        assert!(validate_local_part(&"é".repeat(32)).is_ok());
        assert!(validate_local_part(&"é".repeat(33)).is_err());
    }
}
