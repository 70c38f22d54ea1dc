use std::sync::Arc;

use board_shared::dto::{
    CreatePostRequest, PostDetailResponse, PostListResponse, PostResponse, UpdatePostRequest,
};

use crate::domain::{Page, PageRequest, Post, Sort};
use crate::error::DomainError;
use crate::mapping;
use crate::ports::{BoardStore, CommentRepository, PostRepository, Transaction};

/// Post use cases.
pub struct PostService<S> {
    store: Arc<S>,
}

impl<S> Clone for PostService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: BoardStore> PostService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn list_posts(&self, request: PageRequest) -> Result<PostListResponse, DomainError> {
        let page = self.store.find_all(&request).await?;
        self.summarize(&page).await
    }

    pub async fn get_post(&self, id: i32) -> Result<PostDetailResponse, DomainError> {
        let loaded = self
            .store
            .find_by_id_with_comments(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        Ok(mapping::to_post_detail(&loaded))
    }

    /// Matches title or content, newest first.
    pub async fn search_posts(
        &self,
        keyword: &str,
        page: u64,
        size: u64,
    ) -> Result<PostListResponse, DomainError> {
        let request = PageRequest::new(page, size, Sort::newest_first());
        let page = self.store.search_by_keyword(keyword, &request).await?;
        self.summarize(&page).await
    }

    pub async fn find_by_author(&self, author: &str) -> Result<Vec<PostResponse>, DomainError> {
        let posts = self.store.find_by_author(author).await?;
        let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
        let counts = self.store.count_comments_by_post_ids(&ids).await?;

        Ok(posts
            .iter()
            .map(|p| mapping::to_post_response(p, counts.get(&p.id).copied().unwrap_or(0)))
            .collect())
    }

    pub async fn create_post(
        &self,
        request: &CreatePostRequest,
    ) -> Result<PostResponse, DomainError> {
        let tx = self.store.begin().await?;
        let post = tx.insert(mapping::to_new_post(request)).await?;
        tx.commit().await?;

        tracing::info!(post_id = post.id, author = %post.author, "Post created");
        Ok(mapping::to_post_response(&post, 0))
    }

    pub async fn update_post(
        &self,
        id: i32,
        request: &UpdatePostRequest,
    ) -> Result<PostResponse, DomainError> {
        let tx = self.store.begin().await?;
        let mut post = tx
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;

        post.apply(mapping::to_post_changes(request));
        let saved = tx.update(&post).await?;
        let counts = tx.count_comments_by_post_ids(&[id]).await?;
        tx.commit().await?;

        tracing::info!(post_id = id, "Post updated");
        Ok(mapping::to_post_response(
            &saved,
            counts.get(&id).copied().unwrap_or(0),
        ))
    }

    /// Removes the post and every comment it owns.
    pub async fn delete_post(&self, id: i32) -> Result<(), DomainError> {
        let tx = self.store.begin().await?;
        if !tx.exists_by_id(id).await? {
            return Err(DomainError::post_not_found(id));
        }

        let comments = tx.delete_comments_by_post_id(id).await?;
        tx.delete(id).await?;
        tx.commit().await?;

        tracing::info!(post_id = id, comments, "Post deleted");
        Ok(())
    }

    async fn summarize(&self, page: &Page<Post>) -> Result<PostListResponse, DomainError> {
        let ids: Vec<i32> = page.items.iter().map(|p| p.id).collect();
        let counts = self.store.count_comments_by_post_ids(&ids).await?;
        Ok(mapping::to_post_list(page, &counts))
    }
}
