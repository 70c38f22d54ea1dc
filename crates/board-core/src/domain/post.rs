use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Comment;

/// Post entity - a top-level board entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post that has not been persisted yet. Id and timestamps come from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// The editable part of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
}

/// A post loaded together with every comment it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithComments {
    pub post: Post,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Replace title and content, moving `updated_at` forward.
    /// Id, author and `created_at` never change after creation.
    pub fn apply(&mut self, changes: PostChanges) {
        self.title = changes.title;
        self.content = changes.content;
        self.updated_at = super::next_timestamp(self.updated_at);
    }
}
