//! Event Use Cases

use std::sync::Arc;

use crate::domain::entity::Event;
use crate::domain::entity::event::month_range;
use crate::domain::repository::EventRepository;
use crate::error::DogrunResult;

/// List events use case
pub struct ListEventsUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> ListEventsUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> DogrunResult<Vec<Event>> {
        self.repo.list_events().await
    }
}

/// Calendar use case: the events of one month
pub struct CalendarUseCase<R>
where
    R: EventRepository,
{
    repo: Arc<R>,
}

impl<R> CalendarUseCase<R>
where
    R: EventRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, year: i32, month: u32) -> DogrunResult<Vec<Event>> {
        let (from, until) = month_range(year, month)?;
        self.repo.list_events_between(from, until).await
    }
}
