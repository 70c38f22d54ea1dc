//! SeaORM entities for the `post` and `comment` tables.

pub mod comment;
pub mod post;
