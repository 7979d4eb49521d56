//! Dog Weight Value Object
//!
//! Kept as the text the owner entered ("5.2kg", "12"); the numeric value
//! is derived on demand.

use derive_more::Display;
use kernel::validation::{MAX_WEIGHT_KG, MIN_WEIGHT_KG, parse_weight_kg, validate_weight};

use crate::error::InvalidField;

#[derive(Debug, Clone, PartialEq, Display)]
#[display("{_0}")]
pub struct Weight(String);

impl Weight {
    pub fn new(weight: impl AsRef<str>) -> Result<Self, InvalidField> {
        let weight = weight.as_ref().trim();
        if !validate_weight(weight) {
            return Err(InvalidField::new(
                "weight",
                format!("must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg"),
            ));
        }
        Ok(Self(weight.to_string()))
    }

    pub fn from_db(weight: impl Into<String>) -> Self {
        Self(weight.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kilograms(&self) -> Option<f64> {
        parse_weight_kg(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight() {
        let weight = Weight::new("5.2kg").unwrap();
        assert_eq!(weight.as_str(), "5.2kg");
        assert_eq!(weight.kilograms(), Some(5.2));

        assert_eq!(Weight::new("120kg").unwrap_err().field, "weight");
        assert!(Weight::new("heavy").is_err());
    }
}
