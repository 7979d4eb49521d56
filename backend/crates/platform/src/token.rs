//! Signed access tokens
//!
//! HS256 JWTs carrying a subject (the user's email), an issue time and an
//! expiry. Verification never errors: anything other than a well-formed,
//! correctly signed, unexpired token yields `None`.

use std::fmt;
use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifetime applied when the caller does not pass one
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Registered claims written into every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
}

/// Issues and verifies access tokens with one process-wide secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            default_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Sign a token for `subject`, expiring after `ttl` (or the default)
    pub fn create_access_token(
        &self,
        subject: &str,
        ttl: Option<Duration>,
    ) -> Result<String, TokenError> {
        self.create_access_token_at(
            subject,
            ttl.unwrap_or(self.default_ttl),
            jsonwebtoken::get_current_timestamp(),
        )
    }

    /// Same as [`Self::create_access_token`] with an explicit issue time (unix seconds)
    pub fn create_access_token_at(
        &self,
        subject: &str,
        ttl: Duration,
        issued_at: u64,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl.as_secs()),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Subject of a valid token, `None` for bad signature, malformed or expired
    pub fn verify_token(&self, token: &str) -> Option<String> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .ok()
            .map(|data| data.claims.sub)
            .filter(|sub| !sub.is_empty())
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"[REDACTED]")
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    #[test]
    fn test_roundtrip_returns_subject() {
        let issuer = TokenIssuer::new(SECRET);
        let token = issuer.create_access_token("hanako@example.com", None).unwrap();
        assert_eq!(issuer.verify_token(&token).as_deref(), Some("hanako@example.com"));
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let an_hour_ago = jsonwebtoken::get_current_timestamp() - 3600;
        let token = issuer
            .create_access_token_at("hanako@example.com", Duration::from_secs(15 * 60), an_hour_ago)
            .unwrap();
        assert_eq!(issuer.verify_token(&token), None);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let other = TokenIssuer::new(b"another secret entirely, 32 byte");
        let token = other.create_access_token("hanako@example.com", None).unwrap();
        assert_eq!(issuer.verify_token(&token), None);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let token = issuer.create_access_token("hanako@example.com", None).unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = issuer.create_access_token("taro@example.com", None).unwrap();
        let forged_payload = forged.split('.').nth(1).unwrap();
        parts[1] = forged_payload;
        let tampered = parts.join(".");

        assert_eq!(issuer.verify_token(&tampered), None);
    }

    #[test]
    fn test_malformed_input_is_none() {
        let issuer = TokenIssuer::new(SECRET);
        assert_eq!(issuer.verify_token(""), None);
        assert_eq!(issuer.verify_token("not.a.jwt"), None);
        assert_eq!(issuer.verify_token("abc"), None);
    }

    #[test]
    fn test_default_and_explicit_ttl() {
        let issuer = TokenIssuer::new(SECRET).with_default_ttl(Duration::from_secs(30 * 60));
        assert_eq!(issuer.default_ttl(), Duration::from_secs(1800));

        let now = 1_700_000_000;
        let token = issuer
            .create_access_token_at("a@b.com", issuer.default_ttl(), now)
            .unwrap();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        let claims = decode::<Claims>(&token, &DecodingKey::from_secret(SECRET), &validation)
            .unwrap()
            .claims;
        assert_eq!(claims.iat, now);
        assert_eq!(claims.exp, now + 1800);
    }

    #[test]
    fn test_debug_hides_secret() {
        let debug = format!("{:?}", TokenIssuer::new(SECRET));
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("0123456789"));
    }
}
