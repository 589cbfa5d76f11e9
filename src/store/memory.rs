use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ItemStore, StoreError, StoreResult};
use crate::common::Item;

/// Process-local store. Items live as long as the value does.
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self, owner: &str) -> StoreResult<Vec<Item>> {
        let mut items: Vec<Item> = self
            .items
            .read()
            .await
            .iter()
            .filter(|item| item.owner_id == owner)
            .cloned()
            .collect();

        items.sort_by(Item::list_order);
        Ok(items)
    }

    async fn create(&self, owner: &str, title: &str) -> StoreResult<Item> {
        let item = Item::new(owner, title);
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn toggle(&self, owner: &str, id: Uuid) -> StoreResult<Item> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == id && item.owner_id == owner)
            .ok_or(StoreError::NotFound)?;

        item.completed = !item.completed;
        item.updated_at = Utc::now();
        Ok(item.clone())
    }

    async fn delete(&self, owner: &str, id: Uuid) -> StoreResult<()> {
        let mut items = self.items.write().await;
        let position = items
            .iter()
            .position(|item| item.id == id && item.owner_id == owner)
            .ok_or(StoreError::NotFound)?;

        items.remove(position);
        Ok(())
    }
}
