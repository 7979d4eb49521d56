//! Notice Entity

use chrono::{DateTime, Utc};
use kernel::id::NoticeId;

/// Announcement from the park administrators
#[derive(Debug, Clone)]
pub struct Notice {
    pub notice_id: NoticeId,
    pub title: String,
    pub content: String,
    /// Only ever goes false → true
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            notice_id: NoticeId::new(),
            title: title.into(),
            content: content.into(),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}
