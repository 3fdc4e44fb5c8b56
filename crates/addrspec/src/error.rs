//! Error types for address validation.

/// Result type alias for address parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Address error types.
///
/// There is a single public failure mode: the input is not an address.
/// Which grammar rule rejected it is only reported through `tracing`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// Grammar rule that rejected an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum Rejection {
    #[error("address is empty")]
    Empty,

    #[error("address has leading or trailing whitespace")]
    SurroundingWhitespace,

    #[error("address exceeds {max} characters")]
    TooLong { max: usize },

    #[error("malformed angle brackets")]
    AngleBrackets,

    #[error("invalid character {0:?} in display name")]
    DisplayNameChar(char),

    #[error("missing local part or domain around '@'")]
    MissingAt,

    #[error("local part must be 1 to {max} octets")]
    LocalPartLength { max: usize },

    #[error("misplaced dot in local part")]
    LocalPartDot,

    #[error("invalid character {0:?} in local part")]
    LocalPartChar(char),

    #[error("quoted string is not framed by quotes")]
    QuotedFraming,

    #[error("quoted string is empty")]
    QuotedEmpty,

    #[error("quoted string ends with an incomplete escape")]
    IncompleteEscape,

    #[error("unescaped quote inside quoted string")]
    UnescapedQuote,

    #[error("control character {0:?} inside quoted string")]
    QuotedControl(char),

    #[error("domain must be 1 to {max} characters")]
    DomainLength { max: usize },

    #[error("misplaced dot in domain")]
    DomainDot,

    #[error("domain has {0} labels")]
    LabelCount(usize),

    #[error("top-level domain is shorter than {min} characters")]
    ShortTld { min: usize },

    #[error("domain label must be 1 to {max} characters")]
    LabelLength { max: usize },

    #[error("domain label starts or ends with a hyphen")]
    LabelHyphen,

    #[error("invalid character {0:?} in domain label")]
    LabelChar(char),

    #[error("malformed IP literal")]
    IpLiteral,

    #[error("invalid IPv4 address literal")]
    Ipv4,

    #[error("invalid IPv6 address literal")]
    Ipv6,
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
    fn test_error_display() {
        let err = Error::InvalidAddress("user@".into());
        assert_eq!(err.to_string(), "Invalid email address: user@");
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(
            Rejection::LocalPartLength { max: 64 }.to_string(),
            "local part must be 1 to 64 octets"
        );
        assert_eq!(
            Rejection::LabelChar('_').to_string(),
            "invalid character '_' in domain label"
        );
    }
}
