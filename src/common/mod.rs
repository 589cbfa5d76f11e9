use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod config;
pub mod errors;
pub mod logging;
pub mod utils;

pub const OWNER_ID_DEFAULT: &str = "demo";
pub const DB_MAX_CONNECTIONS_DEFAULT: u32 = 5;
pub const API_URL_DEFAULT: &str = "http://localhost:9000";

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    pub fn new(owner_id: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
            owner_id: owner_id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Incomplete items first, then oldest first within each group. Equal
    /// timestamps fall back to the id, as the database does.
    pub fn list_order(a: &Item, b: &Item) -> Ordering {
        a.completed
            .cmp(&b.completed)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn serializes_camel_case() {
        let item = Item::new("demo", "Buy milk");
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["title"], "Buy milk");
        assert_eq!(value["completed"], false);
        assert_eq!(value["ownerId"], "demo");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("owner_id").is_none());
    }

    #[test]
    fn list_order_puts_incomplete_first_then_oldest() {
        let mut old_done = Item::new("demo", "old done");
        old_done.completed = true;
        let mut new_open = Item::new("demo", "new open");
        new_open.created_at = old_done.created_at + Duration::seconds(10);
        let mut old_open = Item::new("demo", "old open");
        old_open.created_at = old_done.created_at - Duration::seconds(10);

        let mut items = vec![old_done.clone(), new_open.clone(), old_open.clone()];
        items.sort_by(Item::list_order);

        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["old open", "new open", "old done"]);
    }

    #[test]
    fn list_order_breaks_timestamp_ties_by_id() {
        let first = Item::new("demo", "first");
        let mut second = Item::new("demo", "second");
        second.created_at = first.created_at;

        let (low, high) = if first.id < second.id {
            (first, second)
        } else {
            (second, first)
        };
        let mut items = vec![high.clone(), low.clone()];
        items.sort_by(Item::list_order);
        assert_eq!(items, vec![low.clone(), high.clone()]);

        let mut items = vec![low.clone(), high.clone()];
        items.sort_by(Item::list_order);
        assert_eq!(items, vec![low, high]);
    }
}
