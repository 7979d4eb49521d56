//! User Password Value Object
//!
//! Domain wrapper over `platform::password`.
//!
//! ## Usage
//! ```rust
//! use dogrun::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("walkies2024", 8).unwrap();
//! let hashed = UserPassword::from_raw(&raw, None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use kernel::validation::validate_password;
use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};
use std::fmt;
use thiserror::Error;

use crate::error::{DogrunError, InvalidField};

/// Why a new password was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("must contain at least one digit")]
    MissingDigit,

    #[error("must contain at least one letter")]
    MissingLetter,
}

impl From<PasswordPolicyError> for InvalidField {
    fn from(err: PasswordPolicyError) -> Self {
        InvalidField::new("password", err.to_string())
    }
}

impl From<PasswordPolicyError> for DogrunError {
    fn from(err: PasswordPolicyError) -> Self {
        InvalidField::from(err).into()
    }
}

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input, zeroized on drop
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// A new password, checked against the strength policy
    pub fn new(raw: impl Into<String>, min_length: usize) -> Result<Self, PasswordPolicyError> {
        let clear_text = ClearTextPassword::new(raw);
        let normalized = clear_text.as_str();

        if !validate_password(normalized, min_length) {
            let actual = clear_text.char_count();
            return Err(if actual < min_length {
                PasswordPolicyError::TooShort {
                    min: min_length,
                    actual,
                }
            } else if !normalized.chars().any(char::is_numeric) {
                PasswordPolicyError::MissingDigit
            } else {
                PasswordPolicyError::MissingLetter
            });
        }

        Ok(Self(clear_text))
    }

    /// A password offered at login; never rejected up front
    pub fn for_login(raw: impl Into<String>) -> Self {
        Self(ClearTextPassword::new(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Stored password hash (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(String);

impl UserPassword {
    /// Hash a raw password for storage
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        let hashed = raw.inner().hash(pepper)?;
        Ok(Self(hashed.as_phc_string().to_string()))
    }

    /// Wrap a stored hash as-is; a corrupt value simply never verifies
    pub fn from_db(phc_string: impl Into<String>) -> Self {
        Self(phc_string.into())
    }

    pub fn as_phc_string(&self) -> &str {
        &self.0
    }

    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        match HashedPassword::from_phc_string(self.0.as_str()) {
            Ok(hashed) => hashed.verify(raw.inner(), pepper),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
