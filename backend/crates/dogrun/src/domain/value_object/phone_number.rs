//! Phone Number Value Object

use derive_more::Display;
use kernel::validation::validate_phone_number;

use crate::error::InvalidField;

/// Japanese phone number, stored as entered (hyphens allowed)
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(phone: impl AsRef<str>) -> Result<Self, InvalidField> {
        let phone = phone.as_ref().trim();
        if !validate_phone_number(phone) {
            return Err(InvalidField::new("phoneNumber", "invalid format"));
        }
        Ok(Self(phone.to_string()))
    }

    pub fn from_db(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number() {
        assert_eq!(
            PhoneNumber::new(" 090-1234-5678 ").unwrap().as_str(),
            "090-1234-5678"
        );
        assert!(PhoneNumber::new("+819012345678").is_ok());
        assert_eq!(PhoneNumber::new("12345").unwrap_err().field, "phoneNumber");
    }
}
