//! Comment Entity

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};

use crate::domain::value_object::required_text;
use crate::error::InvalidField;

#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: PostId, author_id: UserId, text: &str) -> Result<Self, InvalidField> {
        Ok(Self {
            comment_id: CommentId::new(),
            post_id,
            author_id,
            text: required_text("text", text)?,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_requires_text() {
        assert!(Comment::new(PostId::new(), UserId::new(), "nice!").is_ok());
        assert_eq!(
            Comment::new(PostId::new(), UserId::new(), "").unwrap_err().field,
            "text"
        );
    }
}
