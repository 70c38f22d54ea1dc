//! Conversions between domain entities and API shapes.
//!
//! Every function here is pure: inputs are borrowed, never mutated, and no
//! store access happens.

use std::collections::HashMap;

use board_shared::dto::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, PostDetailResponse,
    PostListResponse, PostResponse, UpdatePostRequest,
};

use crate::domain::{Comment, NewComment, NewPost, Page, Post, PostChanges, PostWithComments};

pub fn to_new_post(request: &CreatePostRequest) -> NewPost {
    NewPost {
        title: request.title.clone(),
        content: request.content.clone(),
        author: request.author.clone(),
    }
}

pub fn to_post_changes(request: &UpdatePostRequest) -> PostChanges {
    PostChanges {
        title: request.title.clone(),
        content: request.content.clone(),
    }
}

pub fn to_new_comment(post_id: i32, request: &CreateCommentRequest) -> NewComment {
    NewComment {
        post_id,
        content: request.content.clone(),
        author: request.author.clone(),
    }
}

pub fn to_post_response(post: &Post, comment_count: u64) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        author: post.author.clone(),
        created_at: post.created_at,
        updated_at: post.updated_at,
        comment_count,
    }
}

pub fn to_post_detail(loaded: &PostWithComments) -> PostDetailResponse {
    let post = &loaded.post;
    PostDetailResponse {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        author: post.author.clone(),
        created_at: post.created_at,
        updated_at: post.updated_at,
        comments: loaded.comments.iter().map(to_comment_response).collect(),
    }
}

pub fn to_comment_response(comment: &Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        post_id: comment.post_id,
        content: comment.content.clone(),
        author: comment.author.clone(),
        created_at: comment.created_at,
        updated_at: comment.updated_at,
    }
}

/// Posts missing from `comment_counts` are reported with zero comments.
pub fn to_post_list(page: &Page<Post>, comment_counts: &HashMap<i32, u64>) -> PostListResponse {
    PostListResponse {
        items: page
            .items
            .iter()
            .map(|post| to_post_response(post, comment_counts.get(&post.id).copied().unwrap_or(0)))
            .collect(),
        total_elements: page.total_elements,
        total_pages: page.total_pages,
        current_page: page.current_page,
        size: page.size,
    }
}
