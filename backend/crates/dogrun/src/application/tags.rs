//! List Tags Use Case

use std::sync::Arc;

use crate::domain::entity::Tag;
use crate::domain::repository::TagRepository;
use crate::error::DogrunResult;

pub struct ListTagsUseCase<R>
where
    R: TagRepository,
{
    repo: Arc<R>,
}

impl<R> ListTagsUseCase<R>
where
    R: TagRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> DogrunResult<Vec<Tag>> {
        self.repo.list_tags().await
    }
}
