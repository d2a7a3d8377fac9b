/// Lead validation rules, shared by the HTTP surface and the relay.
///
/// The same constraints drive inline per-field feedback in the form and the
/// server-side check before anything crosses the wire (defense in depth),
/// so the rules live here once and nowhere else.
use crate::models::{LeadRecord, LeadSubmission};
use regex::Regex;
use std::fmt;

/// A single field that failed validation, with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All fields that failed validation in one pass.
///
/// A lead is accepted or rejected as a whole: every failing field is
/// collected here so the form can render each message inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(field, message)` pairs.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|e| (e.field, e.message))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Validation failed: {}", joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks an email address against a simplified RFC 5322 format.
pub fn is_valid_email(email: &str) -> bool {
    // Matches: local@domain.tld
    let email_regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap();

    email_regex.is_match(email)
}

/// Checks a phone number for E.164-like shape.
///
/// Optional leading `+`, then a non-zero digit, then 1 to 14 more digits.
/// No separators, no leading zero.
pub fn is_valid_phone(phone: &str) -> bool {
    let phone_regex = Regex::new(r"^\+?[1-9]\d{1,14}$").unwrap();
    phone_regex.is_match(phone)
}

/// Validates a raw submission into a [`LeadRecord`].
///
/// Pure function of its input: no I/O, no normalization. All four
/// constraints are checked and every violation is reported, each message
/// attached to the failing field.
pub fn validate(candidate: &LeadSubmission) -> Result<LeadRecord, ValidationErrors> {
    let mut errors = Vec::new();

    if candidate.name.chars().count() < 2 {
        errors.push(FieldError {
            field: "name",
            message: "Name must be at least 2 characters",
        });
    }

    if !is_valid_email(&candidate.email) {
        errors.push(FieldError {
            field: "email",
            message: "Invalid email address",
        });
    }

    if !is_valid_phone(&candidate.phone) {
        errors.push(FieldError {
            field: "phone",
            message: "Invalid phone number (use format: +1234567890)",
        });
    }

    if candidate.company.chars().count() < 2 {
        errors.push(FieldError {
            field: "company",
            message: "Company name must be at least 2 characters",
        });
    }

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    Ok(LeadRecord {
        name: candidate.name.clone(),
        email: candidate.email.clone(),
        phone: candidate.phone.clone(),
        company: candidate.company.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, email: &str, phone: &str, company: &str) -> LeadSubmission {
        LeadSubmission {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            company: company.to_string(),
        }
    }

    #[test]
    fn test_valid_lead_accepted() {
        let result = validate(&candidate(
            "John Doe",
            "john@company.com",
            "+1234567890",
            "Acme Inc.",
        ));

        let record = result.unwrap();
        assert_eq!(record.name, "John Doe");
        assert_eq!(record.phone, "+1234567890");
    }

    #[test]
    fn test_short_name_rejected() {
        let result = validate(&candidate("J", "john@company.com", "+1234567890", "Acme"));

        let errors = result.unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "name");
        assert_eq!(errors.0[0].message, "Name must be at least 2 characters");
    }

    #[test]
    fn test_short_company_rejected() {
        let result = validate(&candidate("John", "john@company.com", "+1234567890", "A"));

        let errors = result.unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "company");
    }

    #[test]
    fn test_all_failures_reported_together() {
        let result = validate(&candidate("", "not-an-email", "abc", ""));

        let errors = result.unwrap_err();
        let fields: Vec<&str> = errors.fields().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["name", "email", "phone", "company"]);
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("john@company.com"));
        assert!(is_valid_email("test.user+tag@subdomain.example.co.uk"));
        assert!(is_valid_email("valid_email-2023@company.org"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("+1234567890"));
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone("+551198765432"));
        // 15 digits after the leading digit is the E.164 ceiling
        assert!(is_valid_phone("+123456789012345"));

        // Leading zero not allowed after the optional +
        assert!(!is_valid_phone("0123456789"));
        assert!(!is_valid_phone("+0123456789"));
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+1"));
        assert!(!is_valid_phone("+1234567890123456"));
        assert!(!is_valid_phone("(11) 98765-4321"));
    }

    #[test]
    fn test_multibyte_names_counted_by_chars() {
        // Two-character names must pass even when multibyte
        let result = validate(&candidate("Éé", "a@b.co", "+1234567890", "木村"));
        assert!(result.is_ok());
    }
}
