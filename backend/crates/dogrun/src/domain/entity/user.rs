//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, phone_number::PhoneNumber, required_text, user_password::UserPassword,
};
use crate::error::InvalidField;

/// Editable part of a user's record
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub full_name: String,
    pub address: String,
    pub phone_number: PhoneNumber,
    /// Free-text residency declaration, display only
    pub residency: String,
}

impl UserProfile {
    pub fn new(
        full_name: &str,
        address: &str,
        phone_number: &str,
        residency: &str,
    ) -> Result<Self, InvalidField> {
        Ok(Self {
            full_name: required_text("fullName", full_name)?,
            address: required_text("address", address)?,
            phone_number: PhoneNumber::new(phone_number)?,
            residency: residency.trim().to_string(),
        })
    }
}

/// Registered park member
///
/// The password hash never leaves the domain and infra layers.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique, normalized
    pub email: Email,
    pub password_hash: UserPassword,
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: Email, password_hash: UserPassword, profile: UserProfile) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            profile,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
        self.updated_at = Utc::now();
    }
}
