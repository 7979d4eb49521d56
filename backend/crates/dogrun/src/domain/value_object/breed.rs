//! Dog Breed Value Object

use derive_more::Display;
use kernel::validation::{KNOWN_BREEDS, validate_breed};

use crate::error::InvalidField;

/// One of [`KNOWN_BREEDS`]
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct Breed(String);

impl Breed {
    pub fn new(breed: impl AsRef<str>) -> Result<Self, InvalidField> {
        let breed = breed.as_ref().trim();
        if !validate_breed(breed) {
            return Err(InvalidField::new(
                "breed",
                format!("must be one of: {}", KNOWN_BREEDS.join(", ")),
            ));
        }
        Ok(Self(breed.to_string()))
    }

    pub fn from_db(breed: impl Into<String>) -> Self {
        Self(breed.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::validation::OTHER_BREED;

    #[test]
    fn test_breed() {
        assert_eq!(Breed::new("柴犬").unwrap().as_str(), "柴犬");
        assert!(Breed::new(OTHER_BREED).is_ok());

        let err = Breed::new("ミックス").unwrap_err();
        assert_eq!(err.field, "breed");
        assert!(err.reason.contains(OTHER_BREED));
    }
}
