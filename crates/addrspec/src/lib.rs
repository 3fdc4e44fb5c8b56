//! # addrspec
//!
//! RFC 5322 email address validation and parsing, without a mail library.
//!
//! ## Features
//!
//! - **Addr-spec grammar**: dot-atom and quoted-string local parts, dotted
//!   domain names, and bracketed IPv4/IPv6 domain literals
//! - **Name-addr form**: `"Display Name" <user@example.com>` with quoted or
//!   unquoted display names
//! - **Comments**: `(comments)` are removed anywhere outside quoted strings,
//!   including nested ones
//! - **International text**: letters and digits of any script are accepted
//!   in local parts, labels and display names
//! - **Total**: every input, however malformed, yields an answer; nothing
//!   panics and no error escapes [`validate`] or [`parse`]
//!
//! ## Quick Start
//!
//! ```
//! use addrspec::{parse, validate, EmailAddress};
//!
//! assert!(validate("user@[IPv6:2001:db8::1]"));
//! assert!(!validate("user..name@example.com"));
//!
//! let addr = parse("John Doe <john.doe@example.com>").unwrap();
//! assert_eq!(addr.display_name(), "John Doe");
//! assert_eq!(addr.address(), "john.doe@example.com");
//!
//! // Equality ignores case and display name.
//! let other: EmailAddress = "JOHN.DOE@EXAMPLE.COM".parse().unwrap();
//! assert_eq!(addr, other);
//! ```
//!
//! ## Limits
//!
//! Lengths are counted in characters, except the local part which counts
//! UTF-8 octets.
//!
//! | Part            | Limit                      |
//! |-----------------|----------------------------|
//! | Whole address   | [`MAX_ADDRESS_LENGTH`]     |
//! | Local part      | [`MAX_LOCAL_PART_LENGTH`]  |
//! | Domain          | [`MAX_DOMAIN_LENGTH`]      |
//! | Domain label    | [`MAX_LABEL_LENGTH`]       |
//! | Label count     | [`MAX_LABELS`]             |
//! | Top-level label | [`MIN_TLD_LENGTH`] minimum |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod address;
mod comment;
mod display;
mod domain;
mod error;
mod ip;
mod local;
mod quoted;
mod validator;

pub use address::EmailAddress;
pub use error::{Error, Result};
pub use validator::{parse, validate};

/// Maximum length, in characters, of a whole address once comments are removed (RFC 5321).
pub const MAX_ADDRESS_LENGTH: usize = 320;

/// Maximum length, in octets, of the local part (RFC 5321).
pub const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Maximum length, in characters, of the domain (RFC 5321).
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum length, in characters, of a single domain label (RFC 1035).
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum number of labels in a domain name.
pub const MAX_LABELS: usize = 127;

/// Minimum length, in characters, of the top-level domain label.
pub const MIN_TLD_LENGTH: usize = 2;
