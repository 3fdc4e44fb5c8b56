//! Address validation and parsing entry points.
//!
//! Both entry points run the same pipeline:
//!
//! ```text
//! input ─→ whitespace/length checks ─→ strip comments ─→ split <angle-addr>
//!       ─→ split at last '@' ─→ local part ─→ domain (name or IP literal)
//! ```
//!
//! Every stage returns early with a [`Rejection`]. The reason is logged at
//! `debug` level and otherwise discarded: callers only learn whether the
//! input is an address.

use tracing::{debug, trace};

use crate::MAX_ADDRESS_LENGTH;
use crate::address::EmailAddress;
use crate::comment::strip_comments;
use crate::display::{split_for_extraction, split_for_validation};
use crate::domain::validate_domain;
use crate::error::Rejection;
use crate::local::validate_local_part;
use crate::quoted::{is_quoted, unquote};

/// Returns true if the input is a valid email address.
///
/// Accepts a bare addr-spec (`user@example.com`) or a name-addr
/// (`"John Doe" <john.doe@example.com>`), with comments anywhere outside
/// quoted strings. Never panics, whatever the input.
///
/// # Examples
///
/// ```
/// assert!(addrspec::validate("user(comment)@example.com"));
/// assert!(addrspec::validate("\"test@test\"@example.com"));
/// assert!(!addrspec::validate("test@test@example.com"));
/// ```
#[must_use]
pub fn validate(input: &str) -> bool {
    match check(input) {
        Ok(()) => true,
        Err(reason) => {
            debug!(input, %reason, "Rejected email address");
            false
        }
    }
}

/// Parses an email address into its components.
///
/// Returns `None` whenever [`validate`] rejects the input, and also when
/// the components cannot be extracted cleanly (the extraction splits at
/// the first `<`, validation at the last).
///
/// # Examples
///
/// ```
/// let addr = addrspec::parse("\"John Doe\" <john.doe@example.com>").unwrap();
/// assert_eq!(addr.display_name(), "John Doe");
/// assert_eq!(addr.local_part(), "john.doe");
/// assert_eq!(addr.domain(), "example.com");
/// ```
#[must_use]
pub fn parse(input: &str) -> Option<EmailAddress> {
    match check(input).and_then(|()| extract(input)) {
        Ok(addr) => {
            trace!(input, address = %addr.address(), "Parsed email address");
            Some(addr)
        }
        Err(reason) => {
            debug!(input, %reason, "Rejected email address");
            None
        }
    }
}

/// Runs the full grammar over the input.
fn check(input: &str) -> Result<(), Rejection> {
    if input.trim().is_empty() {
        return Err(Rejection::Empty);
    }
    if input.trim() != input {
        return Err(Rejection::SurroundingWhitespace);
    }

    let cleaned = strip_comments(input);
    if cleaned.chars().count() > MAX_ADDRESS_LENGTH {
        return Err(Rejection::TooLong {
            max: MAX_ADDRESS_LENGTH,
        });
    }

    let parts = split_for_validation(&cleaned)?;
    let (local, domain) = split_addr_spec(parts.addr_spec)?;
    validate_local_part(local)?;
    validate_domain(domain)
}

/// Pulls the components out of an input that passed [`check`].
fn extract(input: &str) -> Result<EmailAddress, Rejection> {
    let cleaned = strip_comments(input);
    let parts = split_for_extraction(&cleaned)?;

    let (local, domain) = split_addr_spec(parts.addr_spec)?;
    validate_local_part(local)?;
    validate_domain(domain)?;

    let display_name = if is_quoted(parts.display_name) {
        unquote(parts.display_name).into_owned()
    } else {
        parts.display_name.to_string()
    };

    Ok(EmailAddress::new(
        display_name,
        local.to_string(),
        domain.to_string(),
    ))
}

/// Splits an addr-spec at its last `@`.
fn split_addr_spec(addr_spec: &str) -> Result<(&str, &str), Rejection> {
    match addr_spec.rsplit_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok((local, domain)),
        _ => Err(Rejection::MissingAt),
    }
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
    fn test_check_reasons() {
        assert_eq!(check(""), Err(Rejection::Empty));
        assert_eq!(check(" \t"), Err(Rejection::Empty));
        assert_eq!(
            check(" user@example.com"),
            Err(Rejection::SurroundingWhitespace)
        );
        assert_eq!(check("invalid-email"), Err(Rejection::MissingAt));
        assert_eq!(check("@example.com"), Err(Rejection::MissingAt));
        assert_eq!(check("user@"), Err(Rejection::MissingAt));
        assert_eq!(check("user name@domain.com"), Err(Rejection::LocalPartChar(' ')));
        assert_eq!(check("user@domain"), Err(Rejection::LabelCount(1)));
    }

    #[test]
    fn test_split_addr_spec_uses_last_at() {
        assert_eq!(
            split_addr_spec("\"a@b\"@example.com"),
            Ok(("\"a@b\"", "example.com"))
        );
    }

    #[test]
    fn test_comments_removed_from_parsed_parts() {
        let addr = parse("user(comment)@example.com(trailing)").unwrap();
        assert_eq!(addr.local_part(), "user");
        assert_eq!(addr.domain(), "example.com");
    }

    #[test]
    fn test_parse_unescapes_display_name() {
        let addr = parse("\"John \\\"JD\\\" Doe\" <jd@example.com>").unwrap();
        assert_eq!(addr.display_name(), "John \"JD\" Doe");
        assert_eq!(addr.to_string(), "\"John \\\"JD\\\" Doe\" <jd@example.com>");
    }

    #[test]
    fn test_parse_angle_without_name() {
        let addr = parse("<john@example.com>").unwrap();
        assert_eq!(addr.display_name(), "");
        assert_eq!(addr.address(), "john@example.com");
    }

    #[test]
    fn test_extraction_disagreement_degrades_to_none() {
        // The quoted name hides a '<' that only the last-'<' split skips over.
        let input = "\"a<b\" <c@example.com>";
        assert!(validate(input));
        assert!(parse(input).is_none());
    }

    #[test]
    fn test_parse_rejects_what_validate_rejects() {
        for input in ["", "user@domain.c", " user@example.com", "a@b@example.com"] {
            assert!(!validate(input));
            assert!(parse(input).is_none());
        }
    }
}
