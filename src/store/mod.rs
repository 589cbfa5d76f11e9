use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::common::config::Config;
use crate::common::Item;

pub mod memory;
pub mod postgres;

pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Item not found")]
    NotFound,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for to-do items. Every operation is scoped to `owner`; an item
/// owned by someone else behaves exactly like a missing one.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Items of `owner`, incomplete first, then by creation time.
    async fn list(&self, owner: &str) -> StoreResult<Vec<Item>>;

    async fn create(&self, owner: &str, title: &str) -> StoreResult<Item>;

    /// Flips `completed` in a single step and returns the stored item.
    async fn toggle(&self, owner: &str, id: Uuid) -> StoreResult<Item>;

    async fn delete(&self, owner: &str, id: Uuid) -> StoreResult<()>;
}

/// Postgres when `DATABASE_URL` is set, otherwise an in-process store.
pub fn from_config(config: &Config) -> Result<Arc<dyn ItemStore>, StoreError> {
    match config.database_url.as_deref() {
        Some(url) => {
            info!("Using postgres store");
            Ok(Arc::new(PgItemStore::connect_lazy(url, config.max_connections)?))
        }
        None => {
            warn!("DATABASE_URL not set, items are kept in memory");
            Ok(Arc::new(MemoryItemStore::default()))
        }
    }
}

/// Postgres only; for binaries that must not silently run without a database.
pub fn postgres_from_config(config: &Config) -> Result<PgItemStore, lambda_http::Error> {
    let url = config.require_database_url()?;
    Ok(PgItemStore::connect_lazy(url, config.max_connections)?)
}
