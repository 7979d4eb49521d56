//! Dog Use Cases
//!
//! Every operation is scoped to the calling owner. A dog that exists but
//! belongs to someone else is reported exactly like a missing one.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{DogId, UserId};

use crate::application::config::DogrunConfig;
use crate::domain::entity::{Dog, DogProfile};
use crate::domain::repository::DogRepository;
use crate::error::{DogrunError, DogrunResult};

/// Dog fields as submitted by clients
pub struct DogInput {
    pub name: String,
    pub breed: String,
    pub weight: String,
    pub personality: Vec<String>,
    pub birth_year: Option<i32>,
    pub last_vaccination_date: Option<String>,
}

impl DogInput {
    fn into_profile(self) -> DogrunResult<DogProfile> {
        Ok(DogProfile::new(
            &self.name,
            &self.breed,
            &self.weight,
            self.personality,
            self.birth_year,
            self.last_vaccination_date.as_deref(),
        )?)
    }
}

fn dog_not_found() -> DogrunError {
    DogrunError::NotFound("Dog")
}

/// List dogs use case
pub struct ListDogsUseCase<R>
where
    R: DogRepository,
{
    repo: Arc<R>,
}

impl<R> ListDogsUseCase<R>
where
    R: DogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: &UserId) -> DogrunResult<Vec<Dog>> {
        self.repo.list_dogs_by_owner(owner_id).await
    }
}

/// Add dog use case
pub struct AddDogUseCase<R>
where
    R: DogRepository,
{
    repo: Arc<R>,
}

impl<R> AddDogUseCase<R>
where
    R: DogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: UserId, input: DogInput) -> DogrunResult<Dog> {
        let dog = Dog::new(owner_id, input.into_profile()?);
        self.repo.insert_dog(&dog).await?;

        tracing::info!(dog_id = %dog.dog_id, owner_id = %owner_id, "Dog added");

        Ok(dog)
    }
}

/// Update dog use case
pub struct UpdateDogUseCase<R>
where
    R: DogRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateDogUseCase<R>
where
    R: DogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        owner_id: &UserId,
        dog_id: &DogId,
        input: DogInput,
    ) -> DogrunResult<Dog> {
        let profile = input.into_profile()?;

        let mut dog = self
            .repo
            .find_dog_for_owner(dog_id, owner_id)
            .await?
            .ok_or_else(dog_not_found)?;

        dog.update_profile(profile);

        if !self.repo.update_dog(&dog).await? {
            return Err(dog_not_found());
        }

        tracing::info!(dog_id = %dog.dog_id, "Dog updated");

        Ok(dog)
    }
}

/// Delete dog use case
pub struct DeleteDogUseCase<R>
where
    R: DogRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteDogUseCase<R>
where
    R: DogRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: &UserId, dog_id: &DogId) -> DogrunResult<()> {
        if !self.repo.delete_dog(dog_id, owner_id).await? {
            return Err(dog_not_found());
        }

        tracing::info!(dog_id = %dog_id, owner_id = %owner_id, "Dog deleted");

        Ok(())
    }
}

/// Photo upload input
pub struct PhotoUpload {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Upload dog photo use case
pub struct UploadDogPhotoUseCase<R>
where
    R: DogRepository,
{
    repo: Arc<R>,
    config: Arc<DogrunConfig>,
}

impl<R> UploadDogPhotoUseCase<R>
where
    R: DogRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<DogrunConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        owner_id: &UserId,
        dog_id: &DogId,
        upload: PhotoUpload,
    ) -> DogrunResult<Dog> {
        let extension = self
            .config
            .upload_policy
            .validate(upload.content_type.as_deref(), upload.bytes.len())?;

        let mut dog = self
            .repo
            .find_dog_for_owner(dog_id, owner_id)
            .await?
            .ok_or_else(dog_not_found)?;

        let file_name = unique_file_name(extension);
        let dir = &self.config.upload_dir;
        let file_path = dir.join(&file_name);
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&file_path, &upload.bytes).await?;

        let previous = dog.photo_path.clone();
        dog.set_photo(file_path.to_string_lossy().into_owned());

        let recorded = match self.repo.update_dog(&dog).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(dog_not_found()),
            Err(err) => Err(err),
        };
        if let Err(err) = recorded {
            // Nothing points at the new file
            discard_file(&file_path).await;
            return Err(err);
        }

        if let Some(previous) = previous {
            discard_file(Path::new(&previous)).await;
        }

        tracing::info!(
            dog_id = %dog.dog_id,
            size = upload.bytes.len(),
            file = %file_name,
            "Dog photo stored"
        );

        Ok(dog)
    }
}

/// `{YYYYmmdd_HHMMSS}_{8 hex}.{ext}`
pub(crate) fn unique_file_name(extension: &str) -> String {
    format!(
        "{}_{}.{}",
        Utc::now().format("%Y%m%d_%H%M%S"),
        platform::crypto::random_hex(4),
        extension
    )
}

/// Best effort: a leftover file is logged, never surfaced to the caller
async fn discard_file(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), error = %err, "Could not remove photo file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_file_name_shape() {
        let name = unique_file_name("png");
        let (stem, ext) = name.rsplit_once('.').unwrap();
        assert_eq!(ext, "png");

        let parts: Vec<&str> = stem.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 8);
        assert_eq!(parts[1].len(), 6);
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_unique_file_names_differ() {
        assert_ne!(unique_file_name("jpg"), unique_file_name("jpg"));
    }
}
