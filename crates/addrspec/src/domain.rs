//! Domain-part validation.

use crate::error::Rejection;
use crate::ip::validate_ip_literal;
use crate::{MAX_DOMAIN_LENGTH, MAX_LABELS, MAX_LABEL_LENGTH, MIN_TLD_LENGTH};

/// Validates the part of an address after the `@`.
///
/// The domain is either a bracketed IP literal (`[192.0.2.1]`,
/// `[IPv6:2001:db8::1]`) or a dotted name of at least two labels whose
/// last label is at least [`MIN_TLD_LENGTH`] characters long.
pub(crate) fn validate_domain(domain: &str) -> Result<(), Rejection> {
    if domain.is_empty() || domain.chars().count() > MAX_DOMAIN_LENGTH {
        return Err(Rejection::DomainLength {
            max: MAX_DOMAIN_LENGTH,
        });
    }

    if domain.starts_with('[') && domain.ends_with(']') {
        return validate_ip_literal(domain);
    }

    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return Err(Rejection::DomainDot);
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if !(2..=MAX_LABELS).contains(&labels.len()) {
        return Err(Rejection::LabelCount(labels.len()));
    }

    let tld = labels.last().copied().unwrap_or_default();
    if tld.chars().count() < MIN_TLD_LENGTH {
        return Err(Rejection::ShortTld {
            min: MIN_TLD_LENGTH,
        });
    }

    labels.iter().try_for_each(|label| validate_label(label))
}

/// Validates a single dot-separated label of a domain name.
///
/// Letters (any script), digits and inner hyphens are allowed.
pub(crate) fn validate_label(label: &str) -> Result<(), Rejection> {
    if label.is_empty() || label.chars().count() > MAX_LABEL_LENGTH {
        return Err(Rejection::LabelLength {
            max: MAX_LABEL_LENGTH,
        });
    }

    if label.starts_with('-') || label.ends_with('-') {
        return Err(Rejection::LabelHyphen);
    }

    match label.chars().find(|&c| !c.is_alphanumeric() && c != '-') {
        Some(c) => Err(Rejection::LabelChar(c)),
        None => Ok(()),
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

    /// Builds an ASCII dotted name of exactly `len` characters out of 63-character labels.
    fn domain_of_length(len: usize) -> String {
        let mut domain = String::new();
        while domain.len() < len {
            if !domain.is_empty() {
                domain.push('.');
            }
            let take = (len - domain.len()).min(MAX_LABEL_LENGTH);
            domain.push_str(&"a".repeat(take));
        }
        domain
    }

    #[test]
    fn test_valid_names() {
        for domain in [
            "example.com",
            "sub.example.com",
            "domain.co",
            "münchen.de",
            "xn--mnchen-3ya.de",
            "a-b.example.org",
            "123.example.com",
        ] {
            assert!(validate_domain(domain).is_ok(), "{domain}");
        }
    }

    #[test]
    fn test_dot_placement() {
        for domain in [".com", "example.com.", "domain..com"] {
            assert_eq!(validate_domain(domain), Err(Rejection::DomainDot), "{domain}");
        }
    }

    #[test]
    fn test_missing_tld() {
        assert_eq!(validate_domain("domain"), Err(Rejection::LabelCount(1)));
    }

    #[test]
    fn test_short_tld() {
        assert_eq!(
            validate_domain("domain.c"),
            Err(Rejection::ShortTld { min: 2 })
        );
    }

    #[test]
    fn test_many_labels() {
        // 126 labels is the most that fits in 253 characters with a 2-character TLD.
        let domain = vec!["a"; 125].join(".") + ".aa";
        assert!(validate_domain(&domain).is_ok());
    }

    #[test]
    fn test_length_limit() {
        let exact = domain_of_length(MAX_DOMAIN_LENGTH);
        assert_eq!(exact.len(), MAX_DOMAIN_LENGTH);
        assert!(validate_domain(&exact).is_ok(), "{exact}");

        let over = domain_of_length(MAX_DOMAIN_LENGTH + 1);
        assert_eq!(over.len(), MAX_DOMAIN_LENGTH + 1);
        assert_eq!(
            validate_domain(&over),
            Err(Rejection::DomainLength { max: 253 })
        );
        assert!(validate_domain("").is_err());
    }

    #[test]
    fn test_label_rules() {
        assert!(validate_label("example").is_ok());
        assert!(validate_label("ex-ample").is_ok());
        assert_eq!(validate_label("-example"), Err(Rejection::LabelHyphen));
        assert_eq!(validate_label("example-"), Err(Rejection::LabelHyphen));
        assert_eq!(validate_label("ex_ample"), Err(Rejection::LabelChar('_')));
        assert_eq!(validate_label("ex ample"), Err(Rejection::LabelChar(' ')));
        assert!(validate_label(&"a".repeat(MAX_LABEL_LENGTH)).is_ok());
        assert_eq!(
            validate_label(&"a".repeat(MAX_LABEL_LENGTH + 1)),
            Err(Rejection::LabelLength { max: 63 })
        );
    }

    #[test]
    fn test_label_length_counts_characters() {
        // 22 characters, 66 octets.
        assert!(validate_label(&"例".repeat(22)).is_ok());
        assert!(validate_label(&"例".repeat(MAX_LABEL_LENGTH)).is_ok());
        assert_eq!(
            validate_label(&"例".repeat(MAX_LABEL_LENGTH + 1)),
            Err(Rejection::LabelLength { max: 63 })
        );
    }

    #[test]
    fn test_domain_length_counts_characters() {
        let label = "é".repeat(MAX_LABEL_LENGTH);
        // 253 characters, well over 253 octets.
        let domain = format!("{label}.{label}.{label}.{}", "é".repeat(61));
        assert_eq!(domain.chars().count(), MAX_DOMAIN_LENGTH);
        assert!(validate_domain(&domain).is_ok());

        let domain = format!("{label}.{label}.{label}.{}", "é".repeat(62));
        assert_eq!(
            validate_domain(&domain),
            Err(Rejection::DomainLength { max: 253 })
        );
    }

    #[test]
    fn test_label_rules_apply_to_every_label() {
        assert_eq!(
            validate_domain("bad_label.example.com"),
            Err(Rejection::LabelChar('_'))
        );
        assert_eq!(
            validate_domain("-bad.example.com"),
            Err(Rejection::LabelHyphen)
        );
    }

    #[test]
    fn test_ip_literal_delegation() {
        assert!(validate_domain("[192.168.2.1]").is_ok());
        assert_eq!(validate_domain("[192.168.1.1.1]"), Err(Rejection::Ipv4));
    }
}
