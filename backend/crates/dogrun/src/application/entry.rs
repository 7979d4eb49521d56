//! Entry Pass Use Cases
//!
//! The owner issues a pass naming the dogs they bring; the gate scans it
//! back into user and dog ids.

use std::sync::Arc;

use kernel::id::{DogId, UserId};

use crate::domain::repository::{DogRepository, UserRepository};
use crate::domain::value_object::entry_pass::EntryPass;
use crate::error::{DogrunError, DogrunResult};

/// Issued pass with its encoded payload
pub struct IssuedEntryPass {
    pub pass: EntryPass,
    pub payload: String,
}

/// Issue entry pass use case
pub struct IssueEntryPassUseCase<R>
where
    R: DogRepository,
{
    repo: Arc<R>,
}

impl<R> IssueEntryPassUseCase<R>
where
    R: DogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: UserId, dog_ids: Vec<DogId>) -> DogrunResult<IssuedEntryPass> {
        if dog_ids.is_empty() {
            return Err(DogrunError::invalid("dogIds", "at least one dog is required"));
        }

        for dog_id in &dog_ids {
            if self.repo.find_dog_for_owner(dog_id, &owner_id).await?.is_none() {
                return Err(DogrunError::NotFound("Dog"));
            }
        }

        let pass = EntryPass::new(owner_id, dog_ids);
        let payload = pass.encode()?;

        tracing::info!(user_id = %owner_id, dogs = pass.dog_ids.len(), "Entry pass issued");

        Ok(IssuedEntryPass { pass, payload })
    }
}

/// Scan entry pass use case
pub struct ScanEntryPassUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ScanEntryPassUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A pass for a user that no longer exists is rejected like a malformed one
    pub async fn execute(&self, payload: &str) -> DogrunResult<EntryPass> {
        let pass = EntryPass::decode(payload)?;

        if self.repo.find_user_by_id(&pass.user_id).await?.is_none() {
            return Err(DogrunError::invalid("qrData", "Unknown user"));
        }

        tracing::info!(
            user_id = %pass.user_id,
            dogs = pass.dog_ids.len(),
            issued_at = %pass.timestamp,
            "Entry pass scanned"
        );

        Ok(pass)
    }
}
