//! Identify Caller Use Case
//!
//! Resolves a bearer token to the user it was issued for. This is the
//! only way a request acquires an identity.

use std::sync::Arc;

use crate::application::config::DogrunConfig;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{DogrunError, DogrunResult};

/// Identify caller use case
pub struct IdentifyCallerUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<DogrunConfig>,
}

impl<R> IdentifyCallerUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<DogrunConfig>) -> Self {
        Self { repo, config }
    }

    /// Bad token and unknown subject both yield `Authentication`
    pub async fn execute(&self, token: &str) -> DogrunResult<User> {
        let subject = self
            .config
            .token_issuer()
            .verify_token(token)
            .ok_or(DogrunError::Authentication)?;

        let email = Email::new(&subject).map_err(|_| DogrunError::Authentication)?;

        self.repo
            .find_user_by_email(&email)
            .await?
            .ok_or(DogrunError::Authentication)
    }
}
