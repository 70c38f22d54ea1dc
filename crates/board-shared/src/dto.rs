//! Data Transfer Objects - request/response types for the API.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(
            ValidationError::new("not_blank").with_message(Cow::Borrowed("must not be blank")),
        );
    }
    Ok(())
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 200, message = "must be at most 200 characters")
    )]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 50, message = "must be at most 50 characters")
    )]
    pub author: String,
}

/// Request to edit a post. Author is fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(
        custom(function = "not_blank"),
        length(max = 200, message = "must be at most 200 characters")
    )]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 50, message = "must be at most 50 characters")
    )]
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(custom(function = "not_blank"))]
    pub content: String,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    "createdAt".to_string()
}

fn default_direction() -> String {
    "DESC".to_string()
}

/// Query string of `GET /posts`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = MAX_PAGE_SIZE, message = "must be between 1 and 100"))]
    pub size: u64,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_direction")]
    pub direction: String,
}

impl Default for ListPostsParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: default_sort_by(),
            direction: default_direction(),
        }
    }
}

/// Query string of `GET /posts/search`. Results are always newest first.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchPostsParams {
    #[validate(custom(function = "not_blank"))]
    pub keyword: String,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = MAX_PAGE_SIZE, message = "must be between 1 and 100"))]
    pub size: u64,
}

/// Summary of a post as returned by list, search, create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comment_count: u64,
}

/// A post together with all of its comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i32,
    pub post_id: i32,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of post summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub items: Vec<PostResponse>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(title: &str, content: &str, author: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn test_valid_create_request() {
        assert!(create_request("Hello", "World", "kim").validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let errors = create_request("  ", "", "kim").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("content"));
        assert!(!fields.contains_key("author"));
    }

    #[test]
    fn test_length_limits_count_characters() {
        let title = "가".repeat(200);
        assert!(create_request(&title, "body", "kim").validate().is_ok());

        let too_long = "a".repeat(201);
        let errors = create_request(&too_long, "body", &"b".repeat(51))
            .validate()
            .unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("author"));
    }

    #[test]
    fn test_list_params_defaults() {
        let params: ListPostsParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 0);
        assert_eq!(params.size, 10);
        assert_eq!(params.sort_by, "createdAt");
        assert_eq!(params.direction, "DESC");
    }

    #[test]
    fn test_page_size_bounds() {
        let mut params = ListPostsParams::default();
        params.size = 0;
        assert!(params.validate().is_err());
        params.size = MAX_PAGE_SIZE + 1;
        assert!(params.validate().is_err());
        params.size = MAX_PAGE_SIZE;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_list_response_uses_camel_case() {
        let response = PostListResponse {
            items: vec![],
            total_elements: 15,
            total_pages: 2,
            current_page: 0,
            size: 10,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totalElements"], 15);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["currentPage"], 0);
    }
}
