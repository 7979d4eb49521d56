//! Application Configuration
//!
//! Built once at startup and shared read-only via `Arc`.

use std::path::PathBuf;
use std::time::Duration;

use kernel::validation::{DEFAULT_MIN_PASSWORD_LENGTH, DEFAULT_VACCINE_VALID_MONTHS};
use platform::token::TokenIssuer;
use platform::upload::UploadPolicy;

/// Dogrun application configuration
#[derive(Debug, Clone)]
pub struct DogrunConfig {
    /// HS256 signing key for access tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Lifetime of issued access tokens (30 minutes)
    pub access_token_ttl: Duration,
    /// Minimum password length for new passwords
    pub min_password_length: usize,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Vaccination validity window in 30-day months
    pub vaccine_valid_months: u32,
    /// Size ceiling and MIME allow-list for dog photos
    pub upload_policy: UploadPolicy,
    /// Directory dog photos are written to
    pub upload_dir: PathBuf,
}

impl Default for DogrunConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            access_token_ttl: Duration::from_secs(30 * 60),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            password_pepper: None,
            vaccine_valid_months: DEFAULT_VACCINE_VALID_MONTHS,
            upload_policy: UploadPolicy::default(),
            upload_dir: PathBuf::from("./uploads"),
        }
    }
}

impl DogrunConfig {
    /// Create config with a random token secret (for development)
    ///
    /// Tokens issued under it do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    pub fn token_issuer(&self) -> TokenIssuer {
        TokenIssuer::new(&self.token_secret).with_default_ttl(self.access_token_ttl)
    }
}
