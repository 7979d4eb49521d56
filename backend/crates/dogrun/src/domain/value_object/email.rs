//! Email Value Object
//!
//! A validated, normalized (trimmed, lower-cased) email address.
//! The normalized form is what uniqueness and token subjects use.

use derive_more::Display;
use kernel::validation::validate_email;
use std::str::FromStr;

use crate::error::InvalidField;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl AsRef<str>) -> Result<Self, InvalidField> {
        let email = email.as_ref().trim().to_lowercase();

        if email.is_empty() {
            return Err(InvalidField::new("email", "required"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(InvalidField::new(
                "email",
                format!("must be at most {} characters", EMAIL_MAX_LENGTH),
            ));
        }

        if !validate_email(&email) {
            return Err(InvalidField::new("email", "invalid format"));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = InvalidField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("a@b.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("   ").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@@example.com").is_err());
    }

    #[test]
    fn test_email_normalization() {
        let email = Email::new("  Hanako@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "hanako@example.com");
        assert_eq!(email.to_string(), "hanako@example.com");
        assert_eq!(email, "HANAKO@example.com".parse().unwrap());
    }

    #[test]
    fn test_email_error_names_field() {
        let err = Email::new("nope").unwrap_err();
        assert_eq!(err.field, "email");
    }
}
