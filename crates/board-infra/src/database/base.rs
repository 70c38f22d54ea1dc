use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use board_core::error::RepoError;
use board_core::ports::{BoardStore, Transaction};

/// Repository over any SeaORM connection.
///
/// The same query code serves pooled reads (`C = DatabaseConnection`) and
/// transactional writes (`C = DatabaseTransaction`).
pub struct SeaOrmRepository<C> {
    pub(crate) conn: C,
}

/// Repositories over the connection pool.
pub type SeaOrmStore = SeaOrmRepository<DatabaseConnection>;

/// Repositories inside one open transaction.
pub type SeaOrmTransaction = SeaOrmRepository<DatabaseTransaction>;

impl<C> SeaOrmRepository<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

impl SeaOrmStore {
    /// Check that the database answers.
    pub async fn ping(&self) -> Result<(), RepoError> {
        self.conn.ping().await.map_err(map_db_err)
    }
}

#[async_trait]
impl BoardStore for SeaOrmStore {
    type Tx = SeaOrmTransaction;

    async fn begin(&self) -> Result<Self::Tx, RepoError> {
        let txn = self.conn.begin().await.map_err(map_db_err)?;
        Ok(SeaOrmRepository::new(txn))
    }
}

#[async_trait]
impl Transaction for SeaOrmTransaction {
    async fn commit(self) -> Result<(), RepoError> {
        self.conn.commit().await.map_err(map_db_err)
    }
}

/// Translate SeaORM failures into the repository error taxonomy.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    let message = err.to_string();
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(message),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        _ if message.contains("constraint") || message.contains("duplicate") => {
            RepoError::Constraint(message)
        }
        _ => RepoError::Query(message),
    }
}
