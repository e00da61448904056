//! Database provider
//!
//! Owns the connection pool. On init the `users` table is created when
//! missing; on destroy the pool is closed.

use crate::config::DatabaseSettings;
use crate::lifecycle::{LifecycleError, OnModuleDestroy, OnModuleInit};
use crate::modules::user::entity;
use async_trait::async_trait;
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
use std::time::Duration;

#[derive(Clone)]
pub struct Database {
    conn: DatabaseConnection,
}

impl Database {
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(settings.url.clone());
        options
            .max_connections(settings.max_connections)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(settings.echo);

        let conn = sea_orm::Database::connect(options).await?;
        tracing::info!(
            max_connections = settings.max_connections,
            echo = settings.echo,
            "Database: connection pool opened"
        );
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Create the tables of every registered entity that does not exist yet
    pub async fn sync_schema(&self) -> Result<(), DbErr> {
        self.conn
            .get_schema_builder()
            .register(entity::Entity)
            .sync(&self.conn)
            .await
    }
}

#[async_trait]
impl OnModuleInit for Database {
    async fn on_module_init(&mut self) -> Result<(), LifecycleError> {
        self.sync_schema()
            .await
            .map_err(|e| LifecycleError::init_failed(format!("schema sync failed: {e}")))?;
        tracing::info!("Database: schema ready");
        Ok(())
    }
}

#[async_trait]
impl OnModuleDestroy for Database {
    async fn on_module_destroy(&mut self) -> Result<(), LifecycleError> {
        self.conn
            .clone()
            .close()
            .await
            .map_err(|e| LifecycleError::shutdown_failed(e.to_string()))?;
        tracing::info!("Database: connection pool closed");
        Ok(())
    }
}
