//! Notice Use Cases

use std::sync::Arc;

use kernel::id::NoticeId;

use crate::domain::entity::Notice;
use crate::domain::repository::NoticeRepository;
use crate::error::{DogrunError, DogrunResult};

/// List notices use case
pub struct ListNoticesUseCase<R>
where
    R: NoticeRepository,
{
    repo: Arc<R>,
}

impl<R> ListNoticesUseCase<R>
where
    R: NoticeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> DogrunResult<Vec<Notice>> {
        self.repo.list_notices().await
    }
}

/// Mark notice read use case
///
/// Marking an already-read notice succeeds and leaves it read.
pub struct MarkNoticeReadUseCase<R>
where
    R: NoticeRepository,
{
    repo: Arc<R>,
}

impl<R> MarkNoticeReadUseCase<R>
where
    R: NoticeRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, notice_id: &NoticeId) -> DogrunResult<()> {
        if !self.repo.mark_notice_read(notice_id).await? {
            return Err(DogrunError::NotFound("Notice"));
        }
        Ok(())
    }
}
