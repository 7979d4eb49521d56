//! Register Use Case
//!
//! Creates a user together with their first dog and signs them in.

use std::sync::Arc;

use crate::application::config::DogrunConfig;
use crate::domain::entity::{Dog, DogProfile, User, UserProfile};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{DogrunError, DogrunResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    pub residency: String,
    pub dog_name: String,
    pub dog_breed: String,
    pub dog_weight: String,
    pub dog_personality: Vec<String>,
    pub dog_birth_year: Option<i32>,
    pub dog_last_vaccination_date: Option<String>,
}

/// Register output
pub struct RegisterOutput {
    pub access_token: String,
    pub expires_in_secs: u64,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<DogrunConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<DogrunConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> DogrunResult<RegisterOutput> {
        // Validate everything before touching storage
        let email = Email::new(&input.email)?;
        let raw_password = RawPassword::new(input.password, self.config.min_password_length)?;
        let profile = UserProfile::new(
            &input.full_name,
            &input.address,
            &input.phone_number,
            &input.residency,
        )?;
        let dog_profile = DogProfile::new(
            &input.dog_name,
            &input.dog_breed,
            &input.dog_weight,
            input.dog_personality,
            input.dog_birth_year,
            input.dog_last_vaccination_date.as_deref(),
        )?;

        if self.repo.exists_user_by_email(&email).await? {
            return Err(DogrunError::email_taken());
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;
        let user = User::new(email, password_hash, profile);
        let dog = Dog::new(user.user_id, dog_profile);

        // A concurrent registration can still win the race; the store reports it
        self.repo.create_user_with_dog(&user, &dog).await?;

        let issuer = self.config.token_issuer();
        let access_token = issuer.create_access_token(user.email.as_str(), None)?;

        tracing::info!(
            user_id = %user.user_id,
            dog_id = %dog.dog_id,
            "User registered"
        );

        Ok(RegisterOutput {
            access_token,
            expires_in_secs: issuer.default_ttl().as_secs(),
        })
    }
}
