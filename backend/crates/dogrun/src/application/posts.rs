//! Post Use Cases

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entity::{Comment, Post, PostFilter, PostSummary, User};
use crate::domain::repository::PostRepository;
use crate::error::{DogrunError, DogrunResult};

fn post_not_found() -> DogrunError {
    DogrunError::NotFound("Post")
}

/// List posts use case
pub struct ListPostsUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, filter: PostFilter) -> DogrunResult<Vec<PostSummary>> {
        self.repo.list_posts(&filter).await
    }
}

/// Create post input
pub struct CreatePostInput {
    pub content: String,
    pub category: String,
    pub hashtags: Option<String>,
}

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, author: &User, input: CreatePostInput) -> DogrunResult<PostSummary> {
        let post = Post::new(
            author.user_id,
            &input.content,
            &input.category,
            input.hashtags.as_deref(),
        )?;

        self.repo.insert_post(&post).await?;

        tracing::info!(post_id = %post.post_id, author_id = %author.user_id, "Post created");

        Ok(PostSummary {
            post,
            author_name: author.profile.full_name.clone(),
            comments_count: 0,
        })
    }
}

/// Like post use case
///
/// Not idempotent: each call adds one like.
pub struct LikePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> LikePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the like count after this call
    pub async fn execute(&self, post_id: &PostId) -> DogrunResult<i32> {
        let likes = self
            .repo
            .increment_likes(post_id)
            .await?
            .ok_or_else(post_not_found)?;

        tracing::debug!(post_id = %post_id, likes, "Post liked");

        Ok(likes)
    }
}

/// Add comment use case
pub struct AddCommentUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> AddCommentUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, author: &User, post_id: PostId, text: &str) -> DogrunResult<Comment> {
        let comment = Comment::new(post_id, author.user_id, text)?;

        if !self.repo.post_exists(&post_id).await? {
            return Err(post_not_found());
        }

        self.repo.insert_comment(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            post_id = %post_id,
            author_id = %author.user_id,
            "Comment added"
        );

        Ok(comment)
    }
}
