use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::debug;
use uuid::Uuid;

use super::{ItemStore, StoreError, StoreResult};
use crate::common::Item;

const ITEM_COLUMNS: &str = "id, title, completed, owner_id, created_at, updated_at";

#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds the pool without connecting. A warm Lambda container reuses it
    /// across invocations; the first query opens the connection.
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(database_url)?;

        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list(&self, owner: &str) -> StoreResult<Vec<Item>> {
        debug!("Listing items for owner: {}", owner);

        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE owner_id = $1 \
             ORDER BY completed ASC, created_at ASC, id ASC"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn create(&self, owner: &str, title: &str) -> StoreResult<Item> {
        let item = Item::new(owner, title);
        debug!("Creating item: {} (owner: {})", item.id, owner);

        let item = sqlx::query_as::<_, Item>(&format!(
            r#"
            INSERT INTO items (id, title, completed, owner_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {ITEM_COLUMNS}
            "#
        ))
        .bind(item.id)
        .bind(&item.title)
        .bind(item.completed)
        .bind(&item.owner_id)
        .bind(item.created_at)
        .bind(item.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn toggle(&self, owner: &str, id: Uuid) -> StoreResult<Item> {
        debug!("Toggling item: {} (owner: {})", id, owner);

        sqlx::query_as::<_, Item>(&format!(
            r#"
            UPDATE items
            SET completed = NOT completed, updated_at = $3
            WHERE id = $1 AND owner_id = $2
            RETURNING {ITEM_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(owner)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, owner: &str, id: Uuid) -> StoreResult<()> {
        debug!("Deleting item: {} (owner: {})", id, owner);

        let result = sqlx::query("DELETE FROM items WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
