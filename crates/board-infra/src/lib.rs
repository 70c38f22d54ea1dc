//! # Board Infrastructure
//!
//! SeaORM implementations of the ports defined in `board-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL driver
//! - `sqlite` (default) - SQLite driver, also used by the test suites

pub mod database;

pub use database::{DatabaseConfig, SeaOrmRepository, SeaOrmStore, SeaOrmTransaction};
