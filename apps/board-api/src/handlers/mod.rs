//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::{json_error_handler, path_error_handler, query_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(posts::list_posts))
                        .route("", web::post().to(posts::create_post))
                        .route("/search", web::get().to(posts::search_posts))
                        .route("/{id}", web::get().to(posts::get_post))
                        .route("/{id}", web::put().to(posts::update_post))
                        .route("/{id}", web::delete().to(posts::delete_post))
                        // Comments
                        .route("/{id}/comments", web::get().to(comments::list_comments))
                        .route("/{id}/comments", web::post().to(comments::add_comment))
                        .route(
                            "/{id}/comments/{comment_id}",
                            web::put().to(comments::update_comment),
                        )
                        .route(
                            "/{id}/comments/{comment_id}",
                            web::delete().to(comments::remove_comment),
                        ),
                ),
        );
}
