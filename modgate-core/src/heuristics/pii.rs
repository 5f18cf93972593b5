// modgate-core/src/heuristics/pii.rs
//! Advisory detection of personal information: emails, phone numbers, card
//! numbers, SSNs and street addresses.
//!
//! Every probe runs on every call, there is no short-circuit. The result never
//! blocks content by itself; the engine only records it.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Kinds of personal information the detector can find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiKind {
    Email,
    Phone,
    CreditCard,
    Ssn,
    Address,
}

impl PiiKind {
    /// All kinds, in probe order.
    pub const ALL: [PiiKind; 5] = [
        PiiKind::Email,
        PiiKind::Phone,
        PiiKind::CreditCard,
        PiiKind::Ssn,
        PiiKind::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PiiKind::Email => "email",
            PiiKind::Phone => "phone",
            PiiKind::CreditCard => "credit_card",
            PiiKind::Ssn => "ssn",
            PiiKind::Address => "address",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            PiiKind::Email => &EMAIL_REGEX,
            PiiKind::Phone => &PHONE_REGEX,
            PiiKind::CreditCard => &CREDIT_CARD_REGEX,
            PiiKind::Ssn => &SSN_REGEX,
            PiiKind::Address => &ADDRESS_REGEX,
        }
    }
}

impl fmt::Display for PiiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b")
        .expect("phone pattern is valid")
});

static CREDIT_CARD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\d{4}[-\s]?){3}\d{4}\b").expect("credit card pattern is valid")
});

static SSN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").expect("ssn pattern is valid")
});

static ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b\d{1,5}\s+(?:[a-z][a-z0-9'-]*\.?\s+){1,3}(?:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|court|ct|way|place|pl|terrace|circle)\b",
    )
    .expect("address pattern is valid")
});

/// What the detector found in one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PiiReport {
    pub has_pii: bool,
    /// Kinds found, in probe order, each at most once.
    pub types: Vec<PiiKind>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PiiDetector;

impl PiiDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, text: &str) -> PiiReport {
        let types: Vec<PiiKind> = PiiKind::ALL
            .iter()
            .copied()
            .filter(|kind| kind.pattern().is_match(text))
            .collect();

        PiiReport {
            has_pii: !types.is_empty(),
            types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<PiiKind> {
        PiiDetector::new().detect(text).types
    }

    #[test]
    fn test_no_pii() {
        let report = PiiDetector::new().detect("The weather is nice today.");
        assert!(!report.has_pii);
        assert!(report.types.is_empty());
    }

    #[test]
    fn test_email() {
        assert_eq!(kinds("contact me at a@b.com"), vec![PiiKind::Email]);
    }

    #[test]
    fn test_phone_formats() {
        assert!(kinds("call 555-123-4567").contains(&PiiKind::Phone));
        assert!(kinds("call (555) 123-4567").contains(&PiiKind::Phone));
        assert!(kinds("call +1 555 123 4567").contains(&PiiKind::Phone));
    }

    #[test]
    fn test_credit_card() {
        assert!(kinds("card 4111 1111 1111 1111").contains(&PiiKind::CreditCard));
        assert!(kinds("card 4111-1111-1111-1111").contains(&PiiKind::CreditCard));
    }

    #[test]
    fn test_ssn() {
        assert_eq!(kinds("my ssn is 123-45-6789"), vec![PiiKind::Ssn]);
    }

    #[test]
    fn test_address() {
        assert_eq!(kinds("I live at 742 Evergreen Terrace"), vec![PiiKind::Address]);
        assert_eq!(kinds("drop it at 12 Main St."), vec![PiiKind::Address]);
    }

    #[test]
    fn test_address_needs_street_name() {
        assert!(kinds("In 2024 we went to 3 st places").is_empty());
        assert!(kinds("we need 2 dr visits and 4 rd trips").is_empty());
    }

    #[test]
    fn test_all_probes_run() {
        let found = kinds("mail a@b.com or call 555-123-4567, ssn 123-45-6789, 1 Infinite Loop Way");
        assert_eq!(
            found,
            vec![PiiKind::Email, PiiKind::Phone, PiiKind::Ssn, PiiKind::Address]
        );
    }
}
