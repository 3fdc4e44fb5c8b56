//! Property tests over generated inputs.

#![allow(clippy::unwrap_used)]

use addrspec::{parse, validate, MAX_ADDRESS_LENGTH};
use proptest::prelude::*;

/// Dot-atom local parts built from valid atoms.
fn local_part() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]{1,10}", 1..4)
        .prop_map(|atoms| atoms.join("."))
}

/// Domain names with two to four labels and an alphabetic TLD.
fn domain() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[a-zA-Z0-9]([a-zA-Z0-9-]{0,8}[a-zA-Z0-9])?", 1..4),
        "[a-zA-Z]{2,6}",
    )
        .prop_map(|(labels, tld)| format!("{}.{tld}", labels.join(".")))
}

fn address() -> impl Strategy<Value = String> {
    (local_part(), domain()).prop_map(|(local, domain)| format!("{local}@{domain}"))
}

proptest! {
    #[test]
    fn generated_addresses_are_valid(addr in address()) {
        prop_assert!(validate(&addr));
        let parsed = parse(&addr).unwrap();
        prop_assert_eq!(parsed.address(), addr);
    }

    #[test]
    fn never_panics(input in any::<String>()) {
        let valid = validate(&input);
        prop_assert_eq!(parse(&input).is_some() && !valid, false);
    }

    #[test]
    fn never_panics_on_address_like_input(input in r#"[a-z"\\()<>\[\]@.: \t]{0,40}"#) {
        let _ = validate(&input);
        let _ = parse(&input);
    }

    #[test]
    fn surrounding_whitespace_is_rejected(
        addr in address(),
        ws in prop::sample::select(vec![" ", "\t", "\n", "\r\n", "\u{a0}"]),
        leading in any::<bool>(),
    ) {
        let input = if leading { format!("{ws}{addr}") } else { format!("{addr}{ws}") };
        prop_assert!(!validate(&input));
    }

    #[test]
    fn overlong_addresses_are_rejected(local in local_part(), extra in 1usize..200) {
        let label = "a".repeat(63);
        let domain = format!("{label}.{label}.{label}.com");
        let input = format!("{local}@{domain}");
        let padding = (MAX_ADDRESS_LENGTH + extra).saturating_sub(input.chars().count());
        let name = "n".repeat(padding.max(1));
        let input = format!("{name} <{input}>");
        prop_assert!(input.chars().count() > MAX_ADDRESS_LENGTH);
        prop_assert!(!validate(&input));
    }

    #[test]
    fn parse_is_idempotent(addr in address()) {
        let first = parse(&addr).unwrap();
        let second = parse(&first.address()).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.address().to_lowercase(), second.address().to_lowercase());
    }

    #[test]
    fn display_round_trips(
        name in "[A-Za-z][A-Za-z ,.\"\\\\]{0,20}[A-Za-z]",
        addr in address(),
    ) {
        let input = format!("{name} <{addr}>");
        if let Some(parsed) = parse(&input) {
            let rendered = parsed.to_string();
            let reparsed = parse(&rendered).unwrap();
            prop_assert_eq!(reparsed.display_name(), parsed.display_name());
            prop_assert_eq!(reparsed, parsed);
        }
    }
}
