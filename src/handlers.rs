//! The four to-do operations as gateway request handlers.
//!
//! Each handler runs a single store call and turns the result into a response
//! carrying the CORS headers. A missing or foreign item becomes a 404; store
//! failures propagate as [`Error::LambdaError`].

use lambda_http::http::StatusCode;
use lambda_http::{Request, Response};
use tracing::info;
use uuid::Uuid;

use crate::common::errors::Error;
use crate::common::utils::{empty_response, extract_request, json_response};
use crate::common::CreateItemRequest;
use crate::store::ItemStore;

pub const EMPTY_TITLE_ERROR: &str = "Title must not be empty";

#[tracing::instrument(skip(store))]
pub async fn list_todos(store: &dyn ItemStore, owner: &str) -> Result<Response<String>, Error> {
    let items = store.list(owner).await?;
    info!("Listed {} items", items.len());

    json_response(StatusCode::OK, &items)
}

#[tracing::instrument(skip(request, store))]
pub async fn create_todo(
    request: &Request,
    store: &dyn ItemStore,
    owner: &str,
) -> Result<Response<String>, Error> {
    let request = extract_request::<CreateItemRequest>(request)?;
    if request.title.trim().is_empty() {
        return Err(Error::bad_request(EMPTY_TITLE_ERROR));
    }

    let item = store.create(owner, &request.title).await?;
    info!("Created item: {}", item.id);

    json_response(StatusCode::CREATED, &item)
}

#[tracing::instrument(skip(store))]
pub async fn toggle_todo(
    id: Option<&str>,
    store: &dyn ItemStore,
    owner: &str,
) -> Result<Response<String>, Error> {
    let id = parse_item_id(id)?;
    let item = store.toggle(owner, id).await?;
    info!("Toggled item: {} (completed: {})", item.id, item.completed);

    json_response(StatusCode::OK, &item)
}

#[tracing::instrument(skip(store))]
pub async fn delete_todo(
    id: Option<&str>,
    store: &dyn ItemStore,
    owner: &str,
) -> Result<Response<String>, Error> {
    let id = parse_item_id(id)?;
    store.delete(owner, id).await?;
    info!("Deleted item: {}", id);

    empty_response(StatusCode::NO_CONTENT)
}

/// Ids are UUIDs; anything else cannot name a stored item.
fn parse_item_id(id: Option<&str>) -> Result<Uuid, Error> {
    id.and_then(|id| Uuid::parse_str(id).ok())
        .ok_or_else(Error::not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Item;
    use crate::store::MemoryItemStore;
    use lambda_http::Body;

    const OWNER: &str = "demo";

    fn post_json(body: &str) -> Request {
        lambda_http::http::Request::builder()
            .method("POST")
            .uri("/todo")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn unwrap_http(result: Result<Response<String>, Error>) -> Response<String> {
        match result {
            Ok(response) | Err(Error::HttpError(response)) => response,
            Err(Error::LambdaError(err)) => panic!("unexpected lambda error: {}", err),
        }
    }

    async fn list(store: &MemoryItemStore) -> Vec<Item> {
        let response = list_todos(store, OWNER).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(response.body()).unwrap()
    }

    #[tokio::test]
    async fn list_is_empty_array_without_items() {
        let store = MemoryItemStore::default();
        let response = list_todos(&store, OWNER).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), "[]");
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn create_returns_201_with_item() {
        let store = MemoryItemStore::default();
        let response = create_todo(&post_json(r#"{"title":"Buy milk"}"#), &store, OWNER)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let item: Item = serde_json::from_str(response.body()).unwrap();
        assert_eq!(item.title, "Buy milk");
        assert!(!item.completed);
        assert_eq!(item.owner_id, OWNER);
        assert_eq!(list(&store).await, vec![item]);
    }

    #[tokio::test]
    async fn create_accepts_json_body_without_content_type() {
        let store = MemoryItemStore::default();
        let request = lambda_http::http::Request::builder()
            .method("POST")
            .uri("/todo")
            .body(Body::from(r#"{"title":"Buy milk"}"#))
            .unwrap();

        let response = unwrap_http(create_todo(&request, &store, OWNER).await);

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(list(&store).await.len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_blank_and_missing_titles() {
        let store = MemoryItemStore::default();

        let blank = unwrap_http(create_todo(&post_json(r#"{"title":"   "}"#), &store, OWNER).await);
        assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
        assert!(blank.body().contains(EMPTY_TITLE_ERROR));

        let missing = unwrap_http(create_todo(&post_json("{}"), &store, OWNER).await);
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let malformed = unwrap_http(create_todo(&post_json("not json"), &store, OWNER).await);
        assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);

        assert!(list(&store).await.is_empty());
    }

    #[tokio::test]
    async fn toggle_and_delete_unknown_ids_are_404() {
        let store = MemoryItemStore::default();
        let unknown = Uuid::new_v4().to_string();

        for id in [Some(unknown.as_str()), Some("not-a-uuid"), None] {
            let toggled = unwrap_http(toggle_todo(id, &store, OWNER).await);
            assert_eq!(toggled.status(), StatusCode::NOT_FOUND);
            assert_eq!(toggled.body(), r#"{"message":"Not found"}"#);
            assert_eq!(toggled.headers()["access-control-allow-origin"], "*");

            let deleted = unwrap_http(delete_todo(id, &store, OWNER).await);
            assert_eq!(deleted.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn foreign_items_are_404() {
        let store = MemoryItemStore::default();
        let foreign = store.create("mallory", "not yours").await.unwrap();
        let id = foreign.id.to_string();

        let toggled = unwrap_http(toggle_todo(Some(&id), &store, OWNER).await);
        assert_eq!(toggled.status(), StatusCode::NOT_FOUND);
        let deleted = unwrap_http(delete_todo(Some(&id), &store, OWNER).await);
        assert_eq!(deleted.status(), StatusCode::NOT_FOUND);

        assert_eq!(store.list("mallory").await.unwrap(), vec![foreign]);
    }

    #[tokio::test]
    async fn buy_milk_lifecycle() {
        let store = MemoryItemStore::default();

        let created = create_todo(&post_json(r#"{"title":"Buy milk"}"#), &store, OWNER)
            .await
            .unwrap();
        let created: Item = serde_json::from_str(created.body()).unwrap();
        let listed = list(&store).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Buy milk");
        assert!(!listed[0].completed);

        let id = created.id.to_string();
        let toggled = toggle_todo(Some(&id), &store, OWNER).await.unwrap();
        assert_eq!(toggled.status(), StatusCode::OK);
        let toggled: Item = serde_json::from_str(toggled.body()).unwrap();
        assert!(toggled.completed);

        let other = store.create(OWNER, "Walk dog").await.unwrap();
        let listed = list(&store).await;
        assert_eq!(listed.iter().map(|i| i.id).collect::<Vec<_>>(), vec![other.id, created.id]);

        let deleted = delete_todo(Some(&id), &store, OWNER).await.unwrap();
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
        assert!(deleted.body().is_empty());
        assert_eq!(list(&store).await, vec![other]);

        let again = unwrap_http(toggle_todo(Some(&id), &store, OWNER).await);
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
        let again = unwrap_http(delete_todo(Some(&id), &store, OWNER).await);
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }
}
