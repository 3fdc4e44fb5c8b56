//! Parsed email address type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::quoted::quote;

/// A validated email address with an optional display name.
///
/// Values are only produced by [`parse`](crate::parse) (or the
/// [`FromStr`] and [`TryFrom`] conversions built on it), so the local part
/// and domain are always non-empty and grammatical.
///
/// Equality and hashing compare [`address`](Self::address) case-insensitively
/// and ignore the display name.
#[derive(Debug, Clone)]
pub struct EmailAddress {
    display_name: String,
    local_part: String,
    domain: String,
}

impl EmailAddress {
    pub(crate) const fn new(display_name: String, local_part: String, domain: String) -> Self {
        Self {
            display_name,
            local_part,
            domain,
        }
    }

    /// Returns the display name, or an empty string if there is none.
    ///
    /// Surrounding quotes and backslash escapes have been removed.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns true if the address carries a display name.
    #[must_use]
    pub fn has_display_name(&self) -> bool {
        !self.display_name.is_empty()
    }

    /// Returns the part before the `@`, exactly as written.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Returns the part after the `@`, exactly as written.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the addr-spec, `local-part@domain`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}@{}", self.local_part, self.domain)
    }

    /// Characters of the address folded to lowercase.
    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.local_part
            .chars()
            .chain(std::iter::once('@'))
            .chain(self.domain.chars())
            .flat_map(char::to_lowercase)
    }
}

impl PartialEq for EmailAddress {
    fn eq(&self, other: &Self) -> bool {
        self.folded().eq(other.folded())
    }
}

impl Eq for EmailAddress {}

impl Hash for EmailAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.folded() {
            c.hash(state);
        }
        // Terminate so that prefixes hash differently.
        0xffu8.hash(state);
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_display_name() {
            write!(
                f,
                "{} <{}@{}>",
                quote(&self.display_name),
                self.local_part,
                self.domain
            )
        } else {
            write!(f, "{}@{}", self.local_part, self.domain)
        }
    }
}

impl FromStr for EmailAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s).ok_or_else(|| Error::InvalidAddress(s.to_string()))
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<EmailAddress> for String {
    fn from(addr: EmailAddress) -> Self {
        addr.to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailAddress {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
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
    use std::collections::HashSet;

    fn addr(display: &str, local: &str, domain: &str) -> EmailAddress {
        EmailAddress::new(display.into(), local.into(), domain.into())
    }

    #[test]
    fn test_accessors() {
        let a = addr("John Doe", "john.doe", "example.com");
        assert_eq!(a.display_name(), "John Doe");
        assert!(a.has_display_name());
        assert_eq!(a.local_part(), "john.doe");
        assert_eq!(a.domain(), "example.com");
        assert_eq!(a.address(), "john.doe@example.com");
    }

    #[test]
    fn test_display_bare() {
        let a = addr("", "john.doe", "example.com");
        assert!(!a.has_display_name());
        assert_eq!(a.to_string(), "john.doe@example.com");
    }

    #[test]
    fn test_display_with_name() {
        let a = addr("John Doe", "john.doe", "example.com");
        assert_eq!(a.to_string(), "\"John Doe\" <john.doe@example.com>");
    }

    #[test]
    fn test_display_escapes_quotes() {
        let a = addr("John \"JD\" Doe", "jd", "example.com");
        assert_eq!(a.to_string(), "\"John \\\"JD\\\" Doe\" <jd@example.com>");
    }

    #[test]
    fn test_equality_ignores_case_and_name() {
        let a = addr("John", "John.Doe", "Example.COM");
        let b = addr("", "john.doe", "example.com");
        assert_eq!(a, b);
        assert_ne!(a, addr("", "john.doe", "example.org"));
    }

    #[test]
    fn test_equality_unicode_case() {
        assert_eq!(
            addr("", "ÉLÉONORE", "MÜNCHEN.de"),
            addr("", "éléonore", "münchen.de")
        );
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(addr("A", "User", "Example.com"));
        assert!(set.contains(&addr("B", "user", "example.COM")));
        assert!(!set.insert(addr("", "USER", "EXAMPLE.COM")));
        assert!(set.insert(addr("", "user", "example.co")));
    }

    #[test]
    fn test_from_str() {
        let a: EmailAddress = "John Doe <john.doe@example.com>".parse().unwrap();
        assert_eq!(a.display_name(), "John Doe");
        assert_eq!(a.address(), "john.doe@example.com");

        let err = "not-an-address".parse::<EmailAddress>().unwrap_err();
        assert_eq!(err, Error::InvalidAddress("not-an-address".into()));
    }

    #[test]
    fn test_try_from() {
        assert!(EmailAddress::try_from("user@example.com").is_ok());
        assert!(EmailAddress::try_from(String::from("user@@example.com")).is_err());
    }

    #[test]
    fn test_into_string() {
        let a = addr("Jane", "jane", "example.com");
        let s: String = a.into();
        assert_eq!(s, "\"Jane\" <jane@example.com>");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let a: EmailAddress = "\"Doe, John\" <john@example.com>".parse().unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#""\"Doe, John\" <john@example.com>""#);

        let back: EmailAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
        assert_eq!(back.display_name(), "Doe, John");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<EmailAddress>(r#""user@domain""#).is_err());
    }
}
