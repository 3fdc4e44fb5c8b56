//! Domain literal (IP address) validation.
//!
//! ```text
//! [192.168.2.1]          IPv4
//! [IPv6:2001:db8::1]     IPv6, prefix matched case-insensitively
//! ```
//!
//! The IPv6 grammar is permissive: the `::` compression marker may appear
//! more than once, and embedded IPv4 tails are not recognised.

use crate::error::Rejection;

const IPV6_TAG: &str = "IPv6:";

/// Validates a bracketed domain literal.
pub(crate) fn validate_ip_literal(literal: &str) -> Result<(), Rejection> {
    let content = literal
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or(Rejection::IpLiteral)?;

    match content.get(..IPV6_TAG.len()) {
        Some(tag) if tag.eq_ignore_ascii_case(IPV6_TAG) => {
            validate_ipv6(&content[IPV6_TAG.len()..])
        }
        _ => validate_ipv4(content),
    }
}

/// Validates a dotted-quad IPv4 address.
///
/// Each octet is plain decimal in `0..=255` with no leading zeros.
pub(crate) fn validate_ipv4(ip: &str) -> Result<(), Rejection> {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return Err(Rejection::Ipv4);
    }

    for part in parts {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Rejection::Ipv4);
        }
        if part.len() > 1 && part.starts_with('0') {
            return Err(Rejection::Ipv4);
        }
        part.parse::<u8>().map_err(|_| Rejection::Ipv4)?;
    }

    Ok(())
}

/// Validates an IPv6 address in full or `::` compressed form.
pub(crate) fn validate_ipv6(ip: &str) -> Result<(), Rejection> {
    if ip == "::" || ip == "::1" {
        return Ok(());
    }
    if ip.is_empty() {
        return Err(Rejection::Ipv6);
    }
    if !ip.chars().all(|c| c.is_ascii_hexdigit() || c == ':') {
        return Err(Rejection::Ipv6);
    }
    if ip.contains(":::") {
        return Err(Rejection::Ipv6);
    }

    let groups: Vec<&str> = ip.split(':').collect();
    if groups.len() > 8 {
        return Err(Rejection::Ipv6);
    }

    let compressed = ip.contains("::");
    if !compressed && (groups.len() != 8 || groups.iter().any(|g| g.is_empty())) {
        return Err(Rejection::Ipv6);
    }

    // Every character is already known to be a hex digit or ':'.
    if groups.iter().any(|g| g.len() > 4) {
        return Err(Rejection::Ipv6);
    }

    Ok(())
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
    fn test_ipv4_valid() {
        for ip in ["192.168.2.1", "0.0.0.0", "255.255.255.255", "10.0.0.1"] {
            assert!(validate_ipv4(ip).is_ok(), "{ip}");
        }
    }

    #[test]
    fn test_ipv4_invalid() {
        for ip in [
            "192.168.1.1.1",
            "192.168.1",
            "256.1.1.1",
            "192.168.01.1",
            "00.1.1.1",
            "1..1.1",
            "+1.1.1.1",
            "-0.1.1.1",
            " 1.1.1.1",
            "a.b.c.d",
            "",
        ] {
            assert_eq!(validate_ipv4(ip), Err(Rejection::Ipv4), "{ip:?}");
        }
    }

    #[test]
    fn test_ipv6_valid() {
        for ip in [
            "::",
            "::1",
            "2001:db8::1",
            "2001:DB8::1",
            "fe80::",
            "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
            "1:2:3:4:5:6:7:8",
        ] {
            assert!(validate_ipv6(ip).is_ok(), "{ip}");
        }
    }

    #[test]
    fn test_ipv6_invalid() {
        for ip in [
            "",
            "invalid",
            "2001:db8:::1",
            "1:2:3:4:5:6:7",
            "1:2:3:4:5:6:7:8:9",
            "1:2:3:4:5:6::7:8:9",
            ":1:2:3:4:5:6:7",
            "2001:db8::12345",
            "2001:db8::g",
            "::ffff:192.0.2.1",
        ] {
            assert_eq!(validate_ipv6(ip), Err(Rejection::Ipv6), "{ip:?}");
        }
    }

    #[test]
    fn test_ipv6_double_compression_tolerated() {
        assert!(validate_ipv6("1::2::3").is_ok());
    }

    #[test]
    fn test_literal_dispatch() {
        assert!(validate_ip_literal("[192.168.2.1]").is_ok());
        assert!(validate_ip_literal("[IPv6:2001:db8::1]").is_ok());
        assert!(validate_ip_literal("[ipv6:2001:db8::1]").is_ok());
        assert_eq!(
            validate_ip_literal("[IPv6:invalid]"),
            Err(Rejection::Ipv6)
        );
        assert_eq!(validate_ip_literal("[2001:db8::1]"), Err(Rejection::Ipv4));
    }

    #[test]
    fn test_literal_framing() {
        assert_eq!(validate_ip_literal("["), Err(Rejection::IpLiteral));
        assert_eq!(validate_ip_literal("]"), Err(Rejection::IpLiteral));
        assert_eq!(validate_ip_literal("[]"), Err(Rejection::Ipv4));
    }

    #[test]
    fn test_literal_multibyte_prefix() {
        assert_eq!(validate_ip_literal("[ééé]"), Err(Rejection::Ipv4));
    }
}
