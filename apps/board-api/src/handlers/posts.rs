//! Post handlers.

use actix_web::{HttpResponse, web};

use board_core::domain::{PageRequest, Sort};
use board_shared::dto::{CreatePostRequest, ListPostsParams, SearchPostsParams, UpdatePostRequest};

use crate::middleware::error::{AppResult, validated};
use crate::state::AppState;

/// GET /api/posts?page&size&sortBy&direction
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsParams>,
) -> AppResult<HttpResponse> {
    let params = validated(query.into_inner())?;
    let sort = Sort::from_params(&params.sort_by, &params.direction)?;

    let response = state
        .posts
        .list_posts(PageRequest::new(params.page, params.size, sort))
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let response = state.posts.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/posts/search?keyword&page&size
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchPostsParams>,
) -> AppResult<HttpResponse> {
    let params = validated(query.into_inner())?;

    let response = state
        .posts
        .search_posts(&params.keyword, params.page, params.size)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let request = validated(body.into_inner())?;
    let response = state.posts.create_post(&request).await?;
    Ok(HttpResponse::Created().json(response))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let request = validated(body.into_inner())?;
    let response = state.posts.update_post(path.into_inner(), &request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.posts.delete_post(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
