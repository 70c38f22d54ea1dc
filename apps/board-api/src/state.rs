//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::{CommentService, PostService};
use board_infra::database::connect;
use board_infra::{DatabaseConfig, SeaOrmStore};

/// Shared application state. Services are wired explicitly over one store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SeaOrmStore>,
    pub posts: PostService<SeaOrmStore>,
    pub comments: CommentService<SeaOrmStore>,
}

impl AppState {
    pub fn new(store: Arc<SeaOrmStore>) -> Self {
        Self {
            posts: PostService::new(Arc::clone(&store)),
            comments: CommentService::new(Arc::clone(&store)),
            store,
        }
    }

    /// Connect to the configured database and build the services on top of it.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let db = connect(config).await?;
        tracing::info!("Application state initialized");
        Ok(Self::new(Arc::new(SeaOrmStore::new(db))))
    }

    #[cfg(test)]
    pub async fn in_memory() -> Self {
        Self::connect(&DatabaseConfig::in_memory())
            .await
            .expect("in-memory database")
    }
}
