//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.
//! Every traversal between entities is an explicit query here.

use chrono::NaiveDate;
use kernel::id::{DogId, NoticeId, PostId, UserId};

use crate::domain::entity::{
    Comment, Dog, Event, Notice, Post, PostFilter, PostSummary, Tag, User,
};
use crate::domain::value_object::email::Email;
use crate::error::DogrunResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and their first dog in one transaction
    ///
    /// Fails with `Conflict` when the email is already registered.
    async fn create_user_with_dog(&self, user: &User, dog: &Dog) -> DogrunResult<()>;

    async fn find_user_by_id(&self, user_id: &UserId) -> DogrunResult<Option<User>>;

    async fn find_user_by_email(&self, email: &Email) -> DogrunResult<Option<User>>;

    async fn exists_user_by_email(&self, email: &Email) -> DogrunResult<bool>;

    /// Update profile fields
    async fn update_user(&self, user: &User) -> DogrunResult<()>;
}

/// Dog repository trait; every lookup is scoped to an owner
#[trait_variant::make(DogRepository: Send)]
pub trait LocalDogRepository {
    async fn insert_dog(&self, dog: &Dog) -> DogrunResult<()>;

    async fn list_dogs_by_owner(&self, owner_id: &UserId) -> DogrunResult<Vec<Dog>>;

    /// `None` when the dog does not exist or belongs to someone else
    async fn find_dog_for_owner(
        &self,
        dog_id: &DogId,
        owner_id: &UserId,
    ) -> DogrunResult<Option<Dog>>;

    /// Returns false when no row owned by `dog.owner_id` was updated
    async fn update_dog(&self, dog: &Dog) -> DogrunResult<bool>;

    /// Returns false when nothing owned by `owner_id` was deleted
    async fn delete_dog(&self, dog_id: &DogId, owner_id: &UserId) -> DogrunResult<bool>;
}

/// Post and comment repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    async fn insert_post(&self, post: &Post) -> DogrunResult<()>;

    /// Newest first
    async fn list_posts(&self, filter: &PostFilter) -> DogrunResult<Vec<PostSummary>>;

    async fn post_exists(&self, post_id: &PostId) -> DogrunResult<bool>;

    /// Add one like; returns the new count, `None` if the post is missing
    async fn increment_likes(&self, post_id: &PostId) -> DogrunResult<Option<i32>>;

    async fn insert_comment(&self, comment: &Comment) -> DogrunResult<()>;
}

/// Event repository trait
#[trait_variant::make(EventRepository: Send)]
pub trait LocalEventRepository {
    async fn list_events(&self) -> DogrunResult<Vec<Event>>;

    /// Events dated in `[from, until)`, earliest first
    async fn list_events_between(&self, from: NaiveDate, until: NaiveDate)
    -> DogrunResult<Vec<Event>>;
}

/// Notice repository trait
#[trait_variant::make(NoticeRepository: Send)]
pub trait LocalNoticeRepository {
    /// Newest first
    async fn list_notices(&self) -> DogrunResult<Vec<Notice>>;

    /// Set the read flag; returns false if the notice does not exist
    async fn mark_notice_read(&self, notice_id: &NoticeId) -> DogrunResult<bool>;
}

/// Tag repository trait
#[trait_variant::make(TagRepository: Send)]
pub trait LocalTagRepository {
    async fn list_tags(&self) -> DogrunResult<Vec<Tag>>;
}

/// Everything the HTTP layer needs from one store
pub trait DogrunRepository:
    UserRepository
    + DogRepository
    + PostRepository
    + EventRepository
    + NoticeRepository
    + TagRepository
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> DogrunRepository for T where
    T: UserRepository
        + DogRepository
        + PostRepository
        + EventRepository
        + NoticeRepository
        + TagRepository
        + Clone
        + Send
        + Sync
        + 'static
{
}
