//! Comment handlers, nested under their post.

use actix_web::{HttpResponse, web};

use board_shared::dto::{CreateCommentRequest, UpdateCommentRequest};

use crate::middleware::error::{AppResult, validated};
use crate::state::AppState;

/// GET /api/posts/{id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let response = state.comments.list_comments(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/posts/{id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let request = validated(body.into_inner())?;
    let response = state
        .comments
        .add_comment(path.into_inner(), &request)
        .await?;
    Ok(HttpResponse::Created().json(response))
}

/// PUT /api/posts/{id}/comments/{comment_id}
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<(i32, i32)>,
    body: web::Json<UpdateCommentRequest>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let request = validated(body.into_inner())?;
    let response = state
        .comments
        .update_comment(post_id, comment_id, &request)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// DELETE /api/posts/{id}/comments/{comment_id}
pub async fn remove_comment(
    state: web::Data<AppState>,
    path: web::Path<(i32, i32)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    state.comments.remove_comment(post_id, comment_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
