//! Grammar tests for the public entry points.
//!
//! Cases are grouped the way addresses are usually discussed: quoted local
//! parts, comments, international text, IP literals, display names, and the
//! length limits.

#![allow(clippy::unwrap_used)]

use addrspec::{parse, validate, EmailAddress};

fn assert_valid(cases: &[&str]) {
    for case in cases {
        assert!(validate(case), "expected valid: {case:?}");
    }
}

fn assert_invalid(cases: &[&str]) {
    for case in cases {
        assert!(!validate(case), "expected invalid: {case:?}");
    }
}

#[test]
fn quoted_local_parts() {
    assert_valid(&[
        "\"john smith\"@example.co.za",
        "\"user..name\"@example.com",
        "\"test@test\"@example.com",
        "\"\\\"\"@example.com",
        "\"!#$%&'()*+,./:;<=>?@[\\]^_{|}~\"@example.com",
    ]);
    assert_invalid(&[
        "\"\"@example.com",
        "\"a\"b\"@example.com",
        "\"abc\\\"@example.com",
        "\"tab\there\"@example.com",
    ]);
}

#[test]
fn unquoted_at_is_ambiguous() {
    assert!(!validate("test@test@example.com"));
}

#[test]
fn comments_are_removed() {
    assert_valid(&[
        "user(comment)@example.com",
        "user@example.com(comment)",
        "(comment)user@example.com",
        "user(comment)name(anothercomment)@example.com",
        "user(outer (inner) outer)@example.com",
    ]);
    assert_invalid(&["user(unclosed@example.com", "user)@example.com"]);
}

#[test]
fn international_text() {
    assert_valid(&["éléonore@example.com", "user@münchen.de", "用户@例子.广告"]);
}

#[test]
fn ip_literals() {
    assert_valid(&[
        "user@[192.168.2.1]",
        "user@[0.0.0.0]",
        "user@[IPv6:2001:db8::1]",
        "user@[IPv6:::1]",
        "user@[ipv6:2001:DB8::1]",
    ]);
    assert_invalid(&[
        "user@[192.168.1.1.1]",
        "user@[256.1.1.1]",
        "user@[192.168.01.1]",
        "user@[IPv6:invalid]",
        "user@[IPv6:]",
        "user@[]",
        "user@[",
    ]);
}

#[test]
fn unusual_but_valid() {
    assert_valid(&[
        "!name@place.com",
        "user.name+tag@example.com",
        "user-name@example.com",
        "user_name@example.com",
        "a@b.co",
    ]);
}

#[test]
fn dot_placement() {
    assert_invalid(&[
        ".user@example.com",
        "user.@example.com",
        "user..name@example.com",
        "user@.com",
        "user@domain..com",
        "user@domain.com.",
    ]);
    assert!(validate("\"user..name\"@example.com"));
}

#[test]
fn malformed_addresses() {
    assert_invalid(&[
        "",
        "invalid-email",
        "@example.com",
        "user@",
        "user@domain",
        "user name@domain.com",
        "user@exa_mple.com",
        "user@-example.com",
        "user\0@example.com",
    ]);
}

#[test]
fn top_level_domain_length() {
    assert!(!validate("user@domain.c"));
    assert!(validate("user@domain.co"));
}

#[test]
fn display_names() {
    assert_valid(&[
        "\"John Doe\" <john.doe@example.com>",
        "John Doe <john.doe@example.com>",
        "<john.doe@example.com>",
        "José Müller <jose@example.com>",
        "\"Doe, John\" <john@example.com>",
        "John (work) Doe <john@example.com>",
    ]);
    assert_invalid(&[
        "\"\" <john@example.com>",
        "John\tDoe <john@example.com>",
        "John Doe <>",
        "John Doe <john.doe@example>",
    ]);
}

#[test]
fn parse_quoted_display_name() {
    let addr = parse("\"John Doe\" <john.doe@example.com>").unwrap();
    assert_eq!(addr.display_name(), "John Doe");
    assert_eq!(addr.local_part(), "john.doe");
    assert_eq!(addr.domain(), "example.com");
    assert_eq!(addr.address(), "john.doe@example.com");
    assert_eq!(addr.to_string(), "\"John Doe\" <john.doe@example.com>");
}

#[test]
fn parse_unquoted_display_name() {
    let addr = parse("John Doe <john.doe@example.com>").unwrap();
    assert_eq!(addr.display_name(), "John Doe");
    assert_eq!(addr.address(), "john.doe@example.com");
}

#[test]
fn parse_bare_address() {
    let addr = parse("john.doe@example.com").unwrap();
    assert!(!addr.has_display_name());
    assert_eq!(addr.to_string(), "john.doe@example.com");
}

#[test]
fn parse_quoted_local_part() {
    let addr = parse("\"test@test\"@example.com").unwrap();
    assert_eq!(addr.local_part(), "\"test@test\"");
    assert_eq!(addr.domain(), "example.com");
}

#[test]
fn parse_ip_literal() {
    let addr = parse("user@[IPv6:2001:db8::1]").unwrap();
    assert_eq!(addr.domain(), "[IPv6:2001:db8::1]");
}

#[test]
fn parse_invalid_is_none() {
    assert!(parse("user@domain").is_none());
    assert!(parse("").is_none());
}

#[test]
fn parsed_addresses_compare_case_insensitively() {
    let a = parse("John <John.Doe@Example.com>").unwrap();
    let b = parse("john.doe@example.COM").unwrap();
    assert_eq!(a, b);
}

#[test]
fn from_str_reports_input() {
    let err = "user@domain".parse::<EmailAddress>().unwrap_err();
    assert_eq!(err.to_string(), "Invalid email address: user@domain");
}

#[test]
fn local_part_length_boundary() {
    let local = "a".repeat(64);
    assert!(validate(&format!("{local}@example.com")));

    let local = "a".repeat(65);
    assert!(!validate(&format!("{local}@example.com")));
}

#[test]
fn domain_length_boundary() {
    // Three 63-character labels, then a 61-character label: 253 in all.
    let label = "a".repeat(63);
    let domain = format!("{label}.{label}.{label}.{}", "b".repeat(61));
    assert_eq!(domain.len(), 253);
    assert!(validate(&format!("u@{domain}")));

    let domain = format!("{label}.{label}.{label}.{}", "b".repeat(62));
    assert_eq!(domain.len(), 254);
    assert!(!validate(&format!("u@{domain}")));
}

#[test]
fn address_length_limit_applies_after_comment_removal() {
    let local = "a".repeat(64);
    let label = "b".repeat(63);
    let address = format!("{local}@{label}.{label}.{label}.com");
    assert!(address.len() <= 320);
    assert!(validate(&address));

    let padded = format!("{local}({})@{label}.{label}.{label}.com", "c".repeat(400));
    assert!(validate(&padded));
}

#[test]
fn address_length_limit() {
    // A name-addr whose display name pushes the total past 320 characters.
    let name = "n".repeat(310);
    let input = format!("{name} <user@example.com>");
    assert!(input.len() > 320);
    assert!(!validate(&input));

    let name = "n".repeat(290);
    let input = format!("{name} <user@example.com>");
    assert!(input.len() <= 320);
    assert!(validate(&input));

    let input = format!("{} <user@example.com>", "n".repeat(301));
    assert_eq!(input.len(), 320);
    assert!(validate(&input));

    let input = format!("{} <user@example.com>", "n".repeat(302));
    assert_eq!(input.len(), 321);
    assert!(!validate(&input));
}

#[test]
fn address_length_counts_characters() {
    // 320 characters but 621 octets.
    let input = format!("{} <user@example.com>", "é".repeat(301));
    assert_eq!(input.chars().count(), 320);
    assert!(input.len() > 320);
    assert!(validate(&input));
    assert_eq!(parse(&input).unwrap().display_name(), "é".repeat(301));

    let input = format!("{} <user@example.com>", "é".repeat(302));
    assert_eq!(input.chars().count(), 321);
    assert!(!validate(&input));
}

#[test]
fn label_length_counts_characters() {
    // 22 characters, 66 octets.
    assert!(validate(&format!("user@{}.com", "例".repeat(22))));
    assert!(validate(&format!("user@{}.com", "例".repeat(63))));
    assert!(!validate(&format!("user@{}.com", "例".repeat(64))));
}

#[test]
fn local_part_length_counts_octets() {
    // 32 two-octet characters fill the 64-octet local part.
    assert!(validate(&format!("{}@example.com", "é".repeat(32))));
    assert!(!validate(&format!("{}@example.com", "é".repeat(33))));
}

#[test]
fn surrounding_whitespace_rejected() {
    assert_invalid(&[
        " user@example.com",
        "user@example.com ",
        "\tuser@example.com",
        "user@example.com\n",
        "   ",
    ]);
}
