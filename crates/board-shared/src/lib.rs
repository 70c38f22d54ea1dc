//! # Board Shared
//!
//! Request and response shapes of the board API.
//! Kept free of server dependencies so a client can reuse them as-is.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
