use std::str::FromStr;

use crate::domain::login::ports::EmailValidator;

/// Email syntax validation backed by the RFC 5322 parser.
pub struct EmailFormatValidator;

impl EmailFormatValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailFormatValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailValidator for EmailFormatValidator {
    fn is_valid(&self, email: &str) -> bool {
        email_address::EmailAddress::from_str(email).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed_addresses() {
        let validator = EmailFormatValidator::new();

        assert!(validator.is_valid("nicola@example.com"));
        assert!(validator.is_valid("first.last+tag@sub.example.co.uk"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        let validator = EmailFormatValidator::new();

        assert!(!validator.is_valid("not-an-email"));
        assert!(!validator.is_valid("missing-domain@"));
        assert!(!validator.is_valid("@missing-local.com"));
        assert!(!validator.is_valid(""));
    }
}
