use async_trait::async_trait;

use super::{CommentRepository, PostRepository};
use crate::error::RepoError;

/// Repositories bound to one open transaction.
///
/// Dropping a transaction without calling [`Transaction::commit`] rolls it back.
#[async_trait]
pub trait Transaction: PostRepository + CommentRepository {
    async fn commit(self) -> Result<(), RepoError>;
}

/// The board's persistence: non-transactional reads directly, writes through
/// [`BoardStore::begin`].
#[async_trait]
pub trait BoardStore: PostRepository + CommentRepository + 'static {
    type Tx: Transaction;

    async fn begin(&self) -> Result<Self::Tx, RepoError>;
}
