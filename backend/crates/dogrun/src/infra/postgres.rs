//! PostgreSQL Repository Implementation

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{DogId, EventId, NoticeId, PostId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    Comment, Dog, DogProfile, Event, Notice, Post, PostFilter, PostSummary, Tag, User, UserProfile,
};
use crate::domain::repository::{
    DogRepository, EventRepository, NoticeRepository, PostRepository, TagRepository,
    UserRepository,
};
use crate::domain::value_object::{
    breed::Breed, email::Email, phone_number::PhoneNumber, user_password::UserPassword,
    weight::Weight,
};
use crate::error::{DogrunError, DogrunResult};

/// PostgreSQL-backed dogrun repository
#[derive(Clone)]
pub struct PgDogrunRepository {
    pool: PgPool,
}

impl PgDogrunRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Unique violations become `Conflict`; anything else stays a database error
fn map_unique_violation(err: sqlx::Error) -> DogrunError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => DogrunError::email_taken(),
        _ => DogrunError::Database(err),
    }
}

const USER_COLUMNS: &str = r#"
    user_id,
    email,
    password_hash,
    full_name,
    address,
    phone_number,
    residency,
    created_at,
    updated_at
"#;

const DOG_COLUMNS: &str = r#"
    dog_id,
    owner_id,
    name,
    breed,
    weight,
    personality,
    birth_year,
    last_vaccination_date,
    photo_path,
    created_at,
    updated_at
"#;

const POST_SUMMARY_SELECT: &str = r#"
    SELECT
        p.post_id,
        p.author_id,
        p.content,
        p.category,
        p.hashtags,
        p.likes,
        p.created_at,
        p.updated_at,
        u.full_name AS author_name,
        (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.post_id) AS comments_count
    FROM posts p
    JOIN users u ON u.user_id = p.author_id
"#;

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgDogrunRepository {
    async fn create_user_with_dog(&self, user: &User, dog: &Dog) -> DogrunResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                password_hash,
                full_name,
                address,
                phone_number,
                residency,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(&user.profile.full_name)
        .bind(&user.profile.address)
        .bind(user.profile.phone_number.as_str())
        .bind(&user.profile.residency)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        insert_dog_query(dog).execute(&mut *tx).await?;

        // Dropping an uncommitted transaction rolls it back
        tx.commit().await?;

        Ok(())
    }

    async fn find_user_by_id(&self, user_id: &UserId) -> DogrunResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_user_by_email(&self, email: &Email) -> DogrunResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn exists_user_by_email(&self, email: &Email) -> DogrunResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update_user(&self, user: &User) -> DogrunResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                full_name = $2,
                address = $3,
                phone_number = $4,
                residency = $5,
                updated_at = $6
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.profile.full_name)
        .bind(&user.profile.address)
        .bind(user.profile.phone_number.as_str())
        .bind(&user.profile.residency)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Dog Repository Implementation
// ============================================================================

fn insert_dog_query(dog: &Dog) -> sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments> {
    sqlx::query(
        r#"
        INSERT INTO dogs (
            dog_id,
            owner_id,
            name,
            breed,
            weight,
            personality,
            birth_year,
            last_vaccination_date,
            photo_path,
            created_at,
            updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(dog.dog_id.as_uuid())
    .bind(dog.owner_id.as_uuid())
    .bind(&dog.profile.name)
    .bind(dog.profile.breed.as_str())
    .bind(dog.profile.weight.as_str())
    .bind(&dog.profile.personality)
    .bind(dog.profile.birth_year)
    .bind(dog.profile.last_vaccination_date)
    .bind(&dog.photo_path)
    .bind(dog.created_at)
    .bind(dog.updated_at)
}

impl DogRepository for PgDogrunRepository {
    async fn insert_dog(&self, dog: &Dog) -> DogrunResult<()> {
        insert_dog_query(dog).execute(&self.pool).await?;
        Ok(())
    }

    async fn list_dogs_by_owner(&self, owner_id: &UserId) -> DogrunResult<Vec<Dog>> {
        let rows = sqlx::query_as::<_, DogRow>(&format!(
            "SELECT {DOG_COLUMNS} FROM dogs WHERE owner_id = $1 ORDER BY created_at"
        ))
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DogRow::into_dog).collect())
    }

    async fn find_dog_for_owner(
        &self,
        dog_id: &DogId,
        owner_id: &UserId,
    ) -> DogrunResult<Option<Dog>> {
        let row = sqlx::query_as::<_, DogRow>(&format!(
            "SELECT {DOG_COLUMNS} FROM dogs WHERE dog_id = $1 AND owner_id = $2"
        ))
        .bind(dog_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(DogRow::into_dog))
    }

    async fn update_dog(&self, dog: &Dog) -> DogrunResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE dogs SET
                name = $3,
                breed = $4,
                weight = $5,
                personality = $6,
                birth_year = $7,
                last_vaccination_date = $8,
                photo_path = $9,
                updated_at = $10
            WHERE dog_id = $1 AND owner_id = $2
            "#,
        )
        .bind(dog.dog_id.as_uuid())
        .bind(dog.owner_id.as_uuid())
        .bind(&dog.profile.name)
        .bind(dog.profile.breed.as_str())
        .bind(dog.profile.weight.as_str())
        .bind(&dog.profile.personality)
        .bind(dog.profile.birth_year)
        .bind(dog.profile.last_vaccination_date)
        .bind(&dog.photo_path)
        .bind(dog.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete_dog(&self, dog_id: &DogId, owner_id: &UserId) -> DogrunResult<bool> {
        let deleted = sqlx::query("DELETE FROM dogs WHERE dog_id = $1 AND owner_id = $2")
            .bind(dog_id.as_uuid())
            .bind(owner_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgDogrunRepository {
    async fn insert_post(&self, post: &Post) -> DogrunResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                author_id,
                content,
                category,
                hashtags,
                likes,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.author_id.as_uuid())
        .bind(&post.content)
        .bind(&post.category)
        .bind(&post.hashtags)
        .bind(post.likes)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_posts(&self, filter: &PostFilter) -> DogrunResult<Vec<PostSummary>> {
        let rows = sqlx::query_as::<_, PostSummaryRow>(&format!(
            r#"{POST_SUMMARY_SELECT}
            WHERE ($1::text IS NULL OR p.category = $1)
              AND ($2::text IS NULL OR strpos(p.content, $2) > 0)
            ORDER BY p.created_at DESC
            "#
        ))
        .bind(filter.category())
        .bind(filter.search())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostSummaryRow::into_summary).collect())
    }

    async fn post_exists(&self, post_id: &PostId) -> DogrunResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE post_id = $1)")
                .bind(post_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn increment_likes(&self, post_id: &PostId) -> DogrunResult<Option<i32>> {
        let likes = sqlx::query_scalar::<_, i32>(
            "UPDATE posts SET likes = likes + 1 WHERE post_id = $1 RETURNING likes",
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(likes)
    }

    async fn insert_comment(&self, comment: &Comment) -> DogrunResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                post_id,
                author_id,
                text,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.post_id.as_uuid())
        .bind(comment.author_id.as_uuid())
        .bind(&comment.text)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Event / Notice / Tag Repository Implementations
// ============================================================================

impl EventRepository for PgDogrunRepository {
    async fn list_events(&self) -> DogrunResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT event_id, title, event_date, event_time, participants
            FROM events
            ORDER BY event_date, event_time
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EventRow::into_event).collect())
    }

    async fn list_events_between(
        &self,
        from: NaiveDate,
        until: NaiveDate,
    ) -> DogrunResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT event_id, title, event_date, event_time, participants
            FROM events
            WHERE event_date >= $1 AND event_date < $2
            ORDER BY event_date, event_time
            "#,
        )
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EventRow::into_event).collect())
    }
}

impl NoticeRepository for PgDogrunRepository {
    async fn list_notices(&self) -> DogrunResult<Vec<Notice>> {
        let rows = sqlx::query_as::<_, NoticeRow>(
            r#"
            SELECT notice_id, title, content, is_read, created_at
            FROM notices
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(NoticeRow::into_notice).collect())
    }

    async fn mark_notice_read(&self, notice_id: &NoticeId) -> DogrunResult<bool> {
        let updated = sqlx::query("UPDATE notices SET is_read = TRUE WHERE notice_id = $1")
            .bind(notice_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(updated > 0)
    }
}

impl TagRepository for PgDogrunRepository {
    async fn list_tags(&self) -> DogrunResult<Vec<Tag>> {
        let tags = sqlx::query_as::<_, TagRow>("SELECT tag_id, label FROM tags ORDER BY tag_id")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(|row| Tag {
                tag_id: row.tag_id,
                label: row.label,
            })
            .collect();

        Ok(tags)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    password_hash: String,
    full_name: String,
    address: String,
    phone_number: String,
    residency: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            password_hash: UserPassword::from_db(self.password_hash),
            profile: UserProfile {
                full_name: self.full_name,
                address: self.address,
                phone_number: PhoneNumber::from_db(self.phone_number),
                residency: self.residency,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct DogRow {
    dog_id: Uuid,
    owner_id: Uuid,
    name: String,
    breed: String,
    weight: String,
    personality: Vec<String>,
    birth_year: Option<i32>,
    last_vaccination_date: Option<NaiveDate>,
    photo_path: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DogRow {
    fn into_dog(self) -> Dog {
        Dog {
            dog_id: DogId::from_uuid(self.dog_id),
            owner_id: UserId::from_uuid(self.owner_id),
            profile: DogProfile {
                name: self.name,
                breed: Breed::from_db(self.breed),
                weight: Weight::from_db(self.weight),
                personality: self.personality,
                birth_year: self.birth_year,
                last_vaccination_date: self.last_vaccination_date,
            },
            photo_path: self.photo_path,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostSummaryRow {
    post_id: Uuid,
    author_id: Uuid,
    content: String,
    category: String,
    hashtags: Option<String>,
    likes: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_name: String,
    comments_count: i64,
}

impl PostSummaryRow {
    fn into_summary(self) -> PostSummary {
        PostSummary {
            post: Post {
                post_id: PostId::from_uuid(self.post_id),
                author_id: UserId::from_uuid(self.author_id),
                content: self.content,
                category: self.category,
                hashtags: self.hashtags,
                likes: self.likes,
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author_name: self.author_name,
            comments_count: self.comments_count,
        }
    }
}

#[derive(sqlx::FromRow)]
struct EventRow {
    event_id: Uuid,
    title: String,
    event_date: NaiveDate,
    event_time: String,
    participants: i32,
}

impl EventRow {
    fn into_event(self) -> Event {
        Event {
            event_id: EventId::from_uuid(self.event_id),
            title: self.title,
            event_date: self.event_date,
            event_time: self.event_time,
            participants: self.participants,
        }
    }
}

#[derive(sqlx::FromRow)]
struct NoticeRow {
    notice_id: Uuid,
    title: String,
    content: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl NoticeRow {
    fn into_notice(self) -> Notice {
        Notice {
            notice_id: NoticeId::from_uuid(self.notice_id),
            title: self.title,
            content: self.content,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TagRow {
    tag_id: String,
    label: String,
}
