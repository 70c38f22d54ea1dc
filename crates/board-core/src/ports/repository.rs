use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{Comment, NewComment, NewPost, Page, PageRequest, Post, PostWithComments};
use crate::error::RepoError;

/// Post repository.
///
/// Lookups by id return `Ok(None)` when nothing matches, and listings return
/// an empty page rather than an error.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    async fn find_all(&self, page: &PageRequest) -> Result<Page<Post>, RepoError>;

    /// Exact match on the author name.
    async fn find_by_author(&self, author: &str) -> Result<Vec<Post>, RepoError>;

    /// Case-insensitive substring match on the title.
    async fn find_by_title_containing(
        &self,
        keyword: &str,
        page: &PageRequest,
    ) -> Result<Page<Post>, RepoError>;

    /// Case-insensitive substring match on title or content.
    async fn search_by_keyword(
        &self,
        keyword: &str,
        page: &PageRequest,
    ) -> Result<Page<Post>, RepoError>;

    /// Loads the post and all of its comments in a single query.
    async fn find_by_id_with_comments(&self, id: i32)
    -> Result<Option<PostWithComments>, RepoError>;

    async fn exists_by_id(&self, id: i32) -> Result<bool, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    /// Persist a new post; the store assigns id and timestamps.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Write back title, content and `updated_at` of an existing post.
    async fn update(&self, post: &Post) -> Result<Post, RepoError>;

    /// Returns `false` when no row had that id.
    async fn delete(&self, id: i32) -> Result<bool, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_comment_by_id(&self, id: i32) -> Result<Option<Comment>, RepoError>;

    /// Comments of a post, oldest first.
    async fn find_comments_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError>;

    /// Number of comments per post. Posts without comments are absent from the map.
    async fn count_comments_by_post_ids(
        &self,
        post_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, RepoError>;

    async fn insert_comment(&self, comment: NewComment) -> Result<Comment, RepoError>;

    /// Write back content and `updated_at`.
    async fn update_comment(&self, comment: &Comment) -> Result<Comment, RepoError>;

    async fn delete_comment(&self, id: i32) -> Result<bool, RepoError>;

    async fn delete_comments_by_post_id(&self, post_id: i32) -> Result<u64, RepoError>;
}
