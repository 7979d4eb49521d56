//! Value Object Module

pub mod breed;
pub mod email;
pub mod entry_pass;
pub mod phone_number;
pub mod user_password;
pub mod weight;

use crate::error::InvalidField;

/// Trimmed, non-empty free text
pub fn required_text(field: &'static str, value: impl AsRef<str>) -> Result<String, InvalidField> {
    let value = value.as_ref().trim();
    if value.is_empty() {
        return Err(InvalidField::new(field, "required"));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("name", "  Pochi ").unwrap(), "Pochi");
        assert_eq!(required_text("name", " \n").unwrap_err().field, "name");
    }
}
