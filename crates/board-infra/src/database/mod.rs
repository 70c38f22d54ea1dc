//! Database connection management and repositories.

mod base;
mod comment_repo;
mod connections;
mod post_repo;
mod schema;

pub mod entity;

pub use base::{SeaOrmRepository, SeaOrmStore, SeaOrmTransaction};
pub use connections::{DatabaseConfig, connect};
pub use schema::create_schema;
