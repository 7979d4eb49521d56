//! Update Profile Use Case

use std::sync::Arc;

use crate::domain::entity::{User, UserProfile};
use crate::domain::repository::UserRepository;
use crate::error::DogrunResult;

/// Update profile input
pub struct UpdateProfileInput {
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    pub residency: String,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, mut user: User, input: UpdateProfileInput) -> DogrunResult<User> {
        let profile = UserProfile::new(
            &input.full_name,
            &input.address,
            &input.phone_number,
            &input.residency,
        )?;

        user.update_profile(profile);
        self.repo.update_user(&user).await?;

        tracing::info!(user_id = %user.user_id, "Profile updated");

        Ok(user)
    }
}
