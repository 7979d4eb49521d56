//! Login Use Case
//!
//! Exchanges email + password for an access token. Unknown email and
//! wrong password fail identically.

use std::sync::Arc;

use crate::application::config::DogrunConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{DogrunError, DogrunResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub access_token: String,
    pub expires_in_secs: u64,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<DogrunConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<DogrunConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> DogrunResult<LoginOutput> {
        let email = Email::new(&input.email).map_err(|_| DogrunError::Authentication)?;
        let raw_password = RawPassword::for_login(input.password);

        let user = self
            .repo
            .find_user_by_email(&email)
            .await?
            .ok_or(DogrunError::Authentication)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(DogrunError::Authentication);
        }

        let issuer = self.config.token_issuer();
        let access_token = issuer.create_access_token(user.email.as_str(), None)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            access_token,
            expires_in_secs: issuer.default_ttl().as_secs(),
        })
    }
}
