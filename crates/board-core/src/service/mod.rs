//! Services - orchestrate repositories and apply the board's rules.
//!
//! Every mutating operation runs inside exactly one store transaction;
//! an early return drops the transaction, which rolls it back.

mod comment;
mod post;

pub use comment::CommentService;
pub use post::PostService;
