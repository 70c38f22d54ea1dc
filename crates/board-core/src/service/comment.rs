use std::sync::Arc;

use board_shared::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use crate::domain::Comment;
use crate::error::DomainError;
use crate::mapping;
use crate::ports::{BoardStore, CommentRepository, PostRepository, Transaction};

/// Comment use cases. Comments are always addressed through their post.
pub struct CommentService<S> {
    store: Arc<S>,
}

impl<S> Clone for CommentService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: BoardStore> CommentService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn list_comments(&self, post_id: i32) -> Result<Vec<CommentResponse>, DomainError> {
        if !self.store.exists_by_id(post_id).await? {
            return Err(DomainError::post_not_found(post_id));
        }

        let comments = self.store.find_comments_by_post_id(post_id).await?;
        Ok(comments.iter().map(mapping::to_comment_response).collect())
    }

    pub async fn add_comment(
        &self,
        post_id: i32,
        request: &CreateCommentRequest,
    ) -> Result<CommentResponse, DomainError> {
        let tx = self.store.begin().await?;
        if !tx.exists_by_id(post_id).await? {
            return Err(DomainError::post_not_found(post_id));
        }

        let comment = tx
            .insert_comment(mapping::to_new_comment(post_id, request))
            .await?;
        tx.commit().await?;

        tracing::info!(post_id, comment_id = comment.id, "Comment added");
        Ok(mapping::to_comment_response(&comment))
    }

    pub async fn update_comment(
        &self,
        post_id: i32,
        comment_id: i32,
        request: &UpdateCommentRequest,
    ) -> Result<CommentResponse, DomainError> {
        let tx = self.store.begin().await?;
        let mut comment = owned_comment(&tx, post_id, comment_id).await?;

        comment.edit(request.content.clone());
        let saved = tx.update_comment(&comment).await?;
        tx.commit().await?;

        tracing::info!(post_id, comment_id, "Comment updated");
        Ok(mapping::to_comment_response(&saved))
    }

    pub async fn remove_comment(&self, post_id: i32, comment_id: i32) -> Result<(), DomainError> {
        let tx = self.store.begin().await?;
        owned_comment(&tx, post_id, comment_id).await?;

        tx.delete_comment(comment_id).await?;
        tx.commit().await?;

        tracing::info!(post_id, comment_id, "Comment removed");
        Ok(())
    }
}

/// A comment under another post is reported as missing.
async fn owned_comment<R: CommentRepository>(
    repo: &R,
    post_id: i32,
    comment_id: i32,
) -> Result<Comment, DomainError> {
    repo.find_comment_by_id(comment_id)
        .await?
        .filter(|c| c.post_id == post_id)
        .ok_or_else(|| DomainError::comment_not_found(comment_id))
}
