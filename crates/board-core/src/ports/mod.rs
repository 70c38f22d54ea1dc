//! Ports - trait definitions for the persistence the services depend on.
//! Infrastructure provides the implementations.

mod repository;
mod store;

pub use repository::{CommentRepository, PostRepository};
pub use store::{BoardStore, Transaction};
