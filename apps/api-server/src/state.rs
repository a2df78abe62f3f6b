//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{PostRepository, UserRepository};
use quill_infra::database::{self, DatabaseConfig, DbConn, DbErr};
use quill_infra::{PostgresPostRepository, PostgresUserRepository};

/// Shared application state.
///
/// Repositories share the one connection pool opened at startup; the raw
/// handle is kept so the pool can be closed at shutdown.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub db: DbConn,
}

impl AppState {
    /// Open the database and build the repositories.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = database::connect(config).await?;

        let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(db.clone()));
        let posts: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(db.clone()));

        tracing::info!("Application state initialized");

        Ok(Self { users, posts, db })
    }

    /// Close the database pool. Called once, at shutdown.
    pub async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }
}
