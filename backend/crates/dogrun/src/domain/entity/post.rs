//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use kernel::validation::extract_hashtags;

use crate::domain::value_object::required_text;
use crate::error::InvalidField;

/// Category value meaning "no filter"
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: String,
    /// Tag id by convention, not enforced
    pub category: String,
    /// Space-separated `#tags`
    pub hashtags: Option<String>,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Without an explicit hashtag string, tags found in the content are used
    pub fn new(
        author_id: UserId,
        content: &str,
        category: &str,
        hashtags: Option<&str>,
    ) -> Result<Self, InvalidField> {
        let content = required_text("content", content)?;
        let category = required_text("category", category)?;

        let hashtags = match hashtags.map(str::trim).filter(|h| !h.is_empty()) {
            Some(explicit) => Some(explicit.to_string()),
            None => {
                let found = extract_hashtags(&content);
                (!found.is_empty()).then(|| found.join(" "))
            }
        };

        let now = Utc::now();
        Ok(Self {
            post_id: PostId::new(),
            author_id,
            content,
            category,
            hashtags,
            likes: 0,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Post joined with what its listing shows
#[derive(Debug, Clone)]
pub struct PostSummary {
    pub post: Post,
    pub author_name: String,
    pub comments_count: i64,
}

/// Listing filter
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl PostFilter {
    /// Category to match exactly; `None` for absent, blank or "all"
    pub fn category(&self) -> Option<&str> {
        self.tag
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty() && *t != ALL_CATEGORIES)
    }

    /// Content substring; `None` for absent or blank
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.category().is_none_or(|c| post.category == c)
            && self.search().is_none_or(|s| post.content.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_starts_with_zero_likes() {
        let post = Post::new(UserId::new(), "hello", "general", None).unwrap();
        assert_eq!(post.likes, 0);
        assert_eq!(post.hashtags, None);
    }

    #[test]
    fn test_hashtags_extracted_when_absent() {
        let post = Post::new(UserId::new(), "run #shiba #park #shiba", "general", None).unwrap();
        assert_eq!(post.hashtags.as_deref(), Some("#park #shiba"));

        let post = Post::new(UserId::new(), "run #shiba", "general", Some("#mine")).unwrap();
        assert_eq!(post.hashtags.as_deref(), Some("#mine"));
    }

    #[test]
    fn test_empty_content_rejected() {
        let err = Post::new(UserId::new(), "   ", "general", None).unwrap_err();
        assert_eq!(err.field, "content");
    }

    #[test]
    fn test_filter() {
        let post = Post::new(UserId::new(), "morning walk", "event", None).unwrap();

        assert!(PostFilter::default().matches(&post));
        assert!(
            PostFilter {
                tag: Some(ALL_CATEGORIES.into()),
                search: None
            }
            .matches(&post)
        );
        assert!(
            PostFilter {
                tag: Some("event".into()),
                search: Some("walk".into())
            }
            .matches(&post)
        );
        assert!(
            !PostFilter {
                tag: Some("question".into()),
                search: None
            }
            .matches(&post)
        );
        assert!(
            !PostFilter {
                tag: None,
                search: Some("evening".into())
            }
            .matches(&post)
        );
    }
}
