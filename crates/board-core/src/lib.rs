//! # Board Core
//!
//! The domain layer of the board backend: entities, ports, mapping and services.
//! Nothing here knows which database sits behind the ports.

pub mod domain;
pub mod error;
pub mod mapping;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::{CommentService, PostService};
