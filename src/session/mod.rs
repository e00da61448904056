//! Scoped database sessions
//!
//! Every persistent operation runs inside one `Session`: a transaction
//! opened from the shared pool. `commit` finalizes it; a session dropped
//! without commit (early return, `?`, panic) is rolled back and its
//! connection goes back to the pool.

use crate::Injectable;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use std::sync::Arc;

#[derive(Injectable, Clone)]
pub struct SessionFactory {
    conn: Arc<DatabaseConnection>,
}

impl SessionFactory {
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Self { conn }
    }

    pub async fn open(&self) -> Result<Session, DbErr> {
        let txn = self.conn.begin().await?;
        tracing::trace!("session opened");
        Ok(Session { txn })
    }
}

/// One unit of work against the database
pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    pub fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await?;
        tracing::trace!("session committed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::entity;
    use sea_orm::{ConnectionTrait, Database, EntityTrait, PaginatorTrait};
    use tempfile::TempDir;

    async fn factory(dir: &TempDir) -> SessionFactory {
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("session.db").display());
        let conn = Database::connect(url).await.unwrap();
        conn.execute_unprepared(
            "CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)",
        )
        .await
        .unwrap();
        SessionFactory::new(Arc::new(conn))
    }

    async fn count(factory: &SessionFactory) -> u64 {
        let session = factory.open().await.unwrap();
        entity::Entity::find()
            .count(session.connection())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_committed_session_persists() {
        let dir = TempDir::new().unwrap();
        let factory = factory(&dir).await;

        let session = factory.open().await.unwrap();
        session
            .connection()
            .execute_unprepared("INSERT INTO users (name) VALUES ('kept')")
            .await
            .unwrap();
        session.commit().await.unwrap();

        assert_eq!(count(&factory).await, 1);
    }

    #[tokio::test]
    async fn test_dropped_session_rolls_back() {
        let dir = TempDir::new().unwrap();
        let factory = factory(&dir).await;

        {
            let session = factory.open().await.unwrap();
            session
                .connection()
                .execute_unprepared("INSERT INTO users (name) VALUES ('discarded')")
                .await
                .unwrap();
        }

        assert_eq!(count(&factory).await, 0);
    }
}
