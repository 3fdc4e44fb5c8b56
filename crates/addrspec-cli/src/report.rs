//! Per-address output.

use addrspec::EmailAddress;
use anyhow::{Context as _, Result};
use serde::Serialize;

/// How a report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One `VALID`/`INVALID` line.
    Verdict,
    /// Verdict followed by the parsed components.
    Parts,
    /// One JSON object.
    Json,
}

/// Outcome of examining one input.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub input: &'a str,
    pub valid: bool,
    /// Whether the components could be extracted; a valid input can still fail extraction.
    pub parsed: bool,
    #[serde(flatten)]
    parts: Option<Parts>,
}

#[derive(Debug, Serialize)]
struct Parts {
    display_name: String,
    local_part: String,
    domain: String,
    address: String,
    mailbox: EmailAddress,
}

impl<'a> Report<'a> {
    pub fn new(input: &'a str) -> Self {
        let parts = addrspec::parse(input).map(|addr| Parts {
            display_name: addr.display_name().to_string(),
            local_part: addr.local_part().to_string(),
            domain: addr.domain().to_string(),
            address: addr.address(),
            mailbox: addr,
        });

        Self {
            input,
            valid: addrspec::validate(input),
            parsed: parts.is_some(),
            parts,
        }
    }

    /// Renders the report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Verdict => Ok(self.verdict()),
            Format::Parts => Ok(self.parts_block()),
            Format::Json => serde_json::to_string(self).context("serialize report"),
        }
    }

    fn verdict(&self) -> String {
        let verdict = if self.valid { "VALID" } else { "INVALID" };
        format!("'{:<40}' is {verdict}", self.input)
    }

    fn parts_block(&self) -> String {
        let mut block = self.verdict();
        if let Some(parts) = &self.parts {
            for (label, value) in [
                ("Display Name", parts.display_name.as_str()),
                ("Local Part", parts.local_part.as_str()),
                ("Domain", parts.domain.as_str()),
                ("Full Address", parts.address.as_str()),
            ] {
                block.push_str(&format!("\n  {label}: '{value}'"));
            }
        } else if self.valid {
            block.push_str("\n  (components could not be extracted)");
        }
        block
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
    fn test_verdict_valid() {
        let line = Report::new("user@example.com").render(Format::Verdict).unwrap();
        assert!(line.starts_with("'user@example.com "));
        assert!(line.ends_with("' is VALID"));
    }

    #[test]
    fn test_verdict_pads_inside_quotes() {
        let line = Report::new("a@b.co").render(Format::Verdict).unwrap();
        assert_eq!(line, format!("'a@b.co{}' is VALID", " ".repeat(34)));

        let long = format!("{}@example.com", "a".repeat(40));
        let line = Report::new(&long).render(Format::Verdict).unwrap();
        assert_eq!(line, format!("'{long}' is VALID"));
    }

    #[test]
    fn test_verdict_invalid() {
        let line = Report::new("user@domain").render(Format::Verdict).unwrap();
        assert!(line.ends_with(" is INVALID"));
    }

    #[test]
    fn test_parts_block() {
        let block = Report::new("\"John Doe\" <john.doe@example.com>")
            .render(Format::Parts)
            .unwrap();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with(" is VALID"));
        assert_eq!(lines[1], "  Display Name: 'John Doe'");
        assert_eq!(lines[2], "  Local Part: 'john.doe'");
        assert_eq!(lines[3], "  Domain: 'example.com'");
        assert_eq!(lines[4], "  Full Address: 'john.doe@example.com'");
    }

    #[test]
    fn test_parts_block_invalid_has_no_parts() {
        let block = Report::new("invalid-email").render(Format::Parts).unwrap();
        assert_eq!(block.lines().count(), 1);
    }

    #[test]
    fn test_json_valid() {
        let json = Report::new("John <john@example.com>")
            .render(Format::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"], "John <john@example.com>");
        assert_eq!(value["valid"], true);
        assert_eq!(value["parsed"], true);
        assert_eq!(value["display_name"], "John");
        assert_eq!(value["local_part"], "john");
        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["address"], "john@example.com");
        assert_eq!(value["mailbox"], "\"John\" <john@example.com>");
    }

    #[test]
    fn test_json_invalid() {
        let json = Report::new("user@domain.c").render(Format::Json).unwrap();
        assert_eq!(
            json,
            r#"{"input":"user@domain.c","valid":false,"parsed":false}"#
        );
    }

    #[test]
    fn test_valid_but_unextractable() {
        let input = "\"a<b\" <c@example.com>";
        let report = Report::new(input);
        assert!(report.valid);
        assert!(!report.parsed);

        let block = report.render(Format::Parts).unwrap();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" is VALID"));
        assert_eq!(lines[1], "  (components could not be extracted)");

        let value: serde_json::Value =
            serde_json::from_str(&report.render(Format::Json).unwrap()).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["parsed"], false);
        assert!(value.get("local_part").is_none());
    }
}
