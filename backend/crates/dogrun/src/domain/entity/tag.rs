//! Tag Entity

/// Post category; `tag_id` is what `Post::category` holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub tag_id: String,
    pub label: String,
}
