//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{CommentId, DogId, EventId, NoticeId, PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::application::{DogInput, RegisterInput, UpdateProfileInput};
use crate::domain::entity::{Comment, Dog, Event, Notice, PostSummary, Tag, User};

// ============================================================================
// Auth
// ============================================================================

/// Register request: the member and their first dog
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub residency: String,
    pub dog_name: String,
    pub dog_breed: String,
    pub dog_weight: String,
    #[serde(default)]
    pub dog_personality: Vec<String>,
    pub dog_birth_year: Option<i32>,
    pub dog_last_vaccination_date: Option<String>,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            full_name: req.full_name,
            address: req.address,
            phone_number: req.phone_number,
            residency: req.residency,
            dog_name: req.dog_name,
            dog_breed: req.dog_breed,
            dog_weight: req.dog_weight,
            dog_personality: req.dog_personality,
            dog_birth_year: req.dog_birth_year,
            dog_last_vaccination_date: req.dog_last_vaccination_date,
        }
    }
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Bearer token response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    /// Always "bearer"
    pub token_type: &'static str,
    /// Seconds until the token expires
    pub expires_in: u64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_in: u64) -> Self {
        Self {
            access_token,
            token_type: "bearer",
            expires_in,
        }
    }
}

// ============================================================================
// Users
// ============================================================================

/// Profile update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    #[serde(default)]
    pub residency: String,
}

impl From<UpdateProfileRequest> for UpdateProfileInput {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            full_name: req.full_name,
            address: req.address,
            phone_number: req.phone_number,
            residency: req.residency,
        }
    }
}

/// User profile; never carries the password hash
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    pub residency: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id,
            email: user.email.as_str().to_string(),
            full_name: user.profile.full_name.clone(),
            address: user.profile.address.clone(),
            phone_number: user.profile.phone_number.as_str().to_string(),
            residency: user.profile.residency.clone(),
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Dogs
// ============================================================================

/// Add / update dog request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogRequest {
    pub name: String,
    pub breed: String,
    pub weight: String,
    #[serde(default)]
    pub personality: Vec<String>,
    pub birth_year: Option<i32>,
    pub last_vaccination_date: Option<String>,
}

impl From<DogRequest> for DogInput {
    fn from(req: DogRequest) -> Self {
        Self {
            name: req.name,
            breed: req.breed,
            weight: req.weight,
            personality: req.personality,
            birth_year: req.birth_year,
            last_vaccination_date: req.last_vaccination_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DogResponse {
    pub id: DogId,
    pub name: String,
    pub breed: String,
    pub weight: String,
    pub personality: Vec<String>,
    pub birth_year: Option<i32>,
    pub last_vaccination_date: Option<NaiveDate>,
    pub vaccine_up_to_date: bool,
    pub photo_path: Option<String>,
}

impl DogResponse {
    pub fn from_dog(dog: &Dog, vaccine_valid_months: u32) -> Self {
        Self {
            id: dog.dog_id,
            name: dog.profile.name.clone(),
            breed: dog.profile.breed.as_str().to_string(),
            weight: dog.profile.weight.as_str().to_string(),
            personality: dog.profile.personality.clone(),
            birth_year: dog.profile.birth_year,
            last_vaccination_date: dog.profile.last_vaccination_date,
            vaccine_up_to_date: dog.is_vaccine_up_to_date(vaccine_valid_months),
            photo_path: dog.photo_path.clone(),
        }
    }
}

// ============================================================================
// Posts
// ============================================================================

/// Post listing query (`?tag=&search=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostListQuery {
    pub tag: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    pub category: String,
    pub hashtags: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: PostId,
    pub author_id: UserId,
    pub author_name: String,
    pub content: String,
    pub category: String,
    pub hashtags: Option<String>,
    pub likes: i32,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<PostSummary> for PostResponse {
    fn from(summary: PostSummary) -> Self {
        let post = summary.post;
        Self {
            id: post.post_id,
            author_id: post.author_id,
            author_name: summary.author_name,
            content: post.content,
            category: post.category,
            hashtags: post.hashtags,
            likes: post.likes,
            comments_count: summary.comments_count,
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub message: String,
    pub likes: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub author_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl CommentResponse {
    pub fn new(comment: Comment, author_name: String) -> Self {
        Self {
            id: comment.comment_id,
            post_id: comment.post_id,
            author_id: comment.author_id,
            author_name,
            text: comment.text,
            created_at: comment.created_at,
        }
    }
}

// ============================================================================
// Events / Notices / Tags
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub participants: i32,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.event_id,
            title: event.title,
            date: event.event_date,
            time: event.event_time,
            participants: event.participants,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub events: Vec<EventResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeResponse {
    pub id: NoticeId,
    pub title: String,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notice> for NoticeResponse {
    fn from(notice: Notice) -> Self {
        Self {
            id: notice.notice_id,
            title: notice.title,
            content: notice.content,
            is_read: notice.is_read,
            created_at: notice.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    pub id: String,
    pub label: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.tag_id,
            label: tag.label,
        }
    }
}

// ============================================================================
// Entry
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPassRequest {
    pub dog_ids: Vec<DogId>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPassResponse {
    /// Text to render as the QR code
    pub qr_data: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryScanRequest {
    pub qr_data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryScanResponse {
    pub user_id: UserId,
    pub dog_ids: Vec<DogId>,
    pub issued_at: DateTime<Utc>,
}

// ============================================================================
// Misc
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
