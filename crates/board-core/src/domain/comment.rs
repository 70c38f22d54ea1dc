use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity. Always owned by exactly one post, referenced by `post_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i32,
    pub content: String,
    pub author: String,
}

impl Comment {
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = super::next_timestamp(self.updated_at);
    }
}
