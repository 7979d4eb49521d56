//! In-Memory Repository Implementation
//!
//! Same contracts as the PostgreSQL store, kept in process memory. Used by
//! tests and for running the API without a database.

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::{DogId, NoticeId, PostId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::{
    Comment, Dog, Event, Notice, Post, PostFilter, PostSummary, Tag, User,
};
use crate::domain::repository::{
    DogRepository, EventRepository, NoticeRepository, PostRepository, TagRepository,
    UserRepository,
};
use crate::domain::value_object::email::Email;
use crate::error::{DogrunError, DogrunResult};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    dogs: Vec<Dog>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    events: Vec<Event>,
    notices: Vec<Notice>,
    tags: Vec<Tag>,
}

impl Tables {
    fn summarize(&self, post: &Post) -> PostSummary {
        let author_name = self
            .users
            .iter()
            .find(|u| u.user_id == post.author_id)
            .map(|u| u.profile.full_name.clone())
            .unwrap_or_default();
        let comments_count = self
            .comments
            .iter()
            .filter(|c| c.post_id == post.post_id)
            .count() as i64;

        PostSummary {
            post: post.clone(),
            author_name,
            comments_count,
        }
    }
}

/// In-memory dogrun repository
#[derive(Clone, Default)]
pub struct InMemoryDogrunRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryDogrunRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed_event(&self, event: Event) {
        self.tables.write().await.events.push(event);
    }

    pub async fn seed_notice(&self, notice: Notice) {
        self.tables.write().await.notices.push(notice);
    }

    pub async fn seed_tag(&self, tag: Tag) {
        self.tables.write().await.tags.push(tag);
    }

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }
}

impl UserRepository for InMemoryDogrunRepository {
    async fn create_user_with_dog(&self, user: &User, dog: &Dog) -> DogrunResult<()> {
        // Single write guard: both rows land or neither does
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(DogrunError::email_taken());
        }

        tables.users.push(user.clone());
        tables.dogs.push(dog.clone());

        Ok(())
    }

    async fn find_user_by_id(&self, user_id: &UserId) -> DogrunResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| &u.user_id == user_id).cloned())
    }

    async fn find_user_by_email(&self, email: &Email) -> DogrunResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn exists_user_by_email(&self, email: &Email) -> DogrunResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().any(|u| &u.email == email))
    }

    async fn update_user(&self, user: &User) -> DogrunResult<()> {
        let mut tables = self.tables.write().await;
        if let Some(stored) = tables.users.iter_mut().find(|u| u.user_id == user.user_id) {
            *stored = user.clone();
        }
        Ok(())
    }
}

impl DogRepository for InMemoryDogrunRepository {
    async fn insert_dog(&self, dog: &Dog) -> DogrunResult<()> {
        self.tables.write().await.dogs.push(dog.clone());
        Ok(())
    }

    async fn list_dogs_by_owner(&self, owner_id: &UserId) -> DogrunResult<Vec<Dog>> {
        let tables = self.tables.read().await;
        Ok(tables
            .dogs
            .iter()
            .filter(|d| &d.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_dog_for_owner(
        &self,
        dog_id: &DogId,
        owner_id: &UserId,
    ) -> DogrunResult<Option<Dog>> {
        let tables = self.tables.read().await;
        Ok(tables
            .dogs
            .iter()
            .find(|d| &d.dog_id == dog_id && &d.owner_id == owner_id)
            .cloned())
    }

    async fn update_dog(&self, dog: &Dog) -> DogrunResult<bool> {
        let mut tables = self.tables.write().await;
        match tables
            .dogs
            .iter_mut()
            .find(|d| d.dog_id == dog.dog_id && d.owner_id == dog.owner_id)
        {
            Some(stored) => {
                *stored = dog.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_dog(&self, dog_id: &DogId, owner_id: &UserId) -> DogrunResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.dogs.len();
        tables
            .dogs
            .retain(|d| !(&d.dog_id == dog_id && &d.owner_id == owner_id));
        Ok(tables.dogs.len() < before)
    }
}

impl PostRepository for InMemoryDogrunRepository {
    async fn insert_post(&self, post: &Post) -> DogrunResult<()> {
        self.tables.write().await.posts.push(post.clone());
        Ok(())
    }

    async fn list_posts(&self, filter: &PostFilter) -> DogrunResult<Vec<PostSummary>> {
        let tables = self.tables.read().await;

        let mut posts: Vec<&Post> = tables.posts.iter().filter(|p| filter.matches(p)).collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(posts.into_iter().map(|p| tables.summarize(p)).collect())
    }

    async fn post_exists(&self, post_id: &PostId) -> DogrunResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().any(|p| &p.post_id == post_id))
    }

    async fn increment_likes(&self, post_id: &PostId) -> DogrunResult<Option<i32>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .posts
            .iter_mut()
            .find(|p| &p.post_id == post_id)
            .map(|p| {
                p.likes += 1;
                p.likes
            }))
    }

    async fn insert_comment(&self, comment: &Comment) -> DogrunResult<()> {
        self.tables.write().await.comments.push(comment.clone());
        Ok(())
    }
}

impl EventRepository for InMemoryDogrunRepository {
    async fn list_events(&self) -> DogrunResult<Vec<Event>> {
        let mut events = self.tables.read().await.events.clone();
        events.sort_by(|a, b| {
            (a.event_date, &a.event_time).cmp(&(b.event_date, &b.event_time))
        });
        Ok(events)
    }

    async fn list_events_between(
        &self,
        from: NaiveDate,
        until: NaiveDate,
    ) -> DogrunResult<Vec<Event>> {
        let mut events = self.list_events().await?;
        events.retain(|e| e.event_date >= from && e.event_date < until);
        Ok(events)
    }
}

impl NoticeRepository for InMemoryDogrunRepository {
    async fn list_notices(&self) -> DogrunResult<Vec<Notice>> {
        let mut notices = self.tables.read().await.notices.clone();
        notices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notices)
    }

    async fn mark_notice_read(&self, notice_id: &NoticeId) -> DogrunResult<bool> {
        let mut tables = self.tables.write().await;
        match tables.notices.iter_mut().find(|n| &n.notice_id == notice_id) {
            Some(notice) => {
                notice.mark_read();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl TagRepository for InMemoryDogrunRepository {
    async fn list_tags(&self) -> DogrunResult<Vec<Tag>> {
        let mut tags = self.tables.read().await.tags.clone();
        tags.sort_by(|a, b| a.tag_id.cmp(&b.tag_id));
        Ok(tags)
    }
}
