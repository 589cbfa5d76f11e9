//! Maps method + path onto the four operations, the way the REST gateway
//! wires them to separate functions:
//!
//! | Method | Path                | Operation |
//! |--------|---------------------|-----------|
//! | GET    | `/todos`            | list      |
//! | POST   | `/todo`             | create    |
//! | POST   | `/todo/{id}/toggle` | toggle    |
//! | DELETE | `/todo/{id}`        | delete    |
//!
//! `OPTIONS` on any path answers the CORS preflight.

use lambda_http::http::{Method, StatusCode};
use lambda_http::{Request, Response};
use tracing::info;

use crate::common::errors::Error;
use crate::common::utils::{empty_response, message_response, path_id};
use crate::handlers;
use crate::store::ItemStore;

const ROUTE_NOT_FOUND_ERROR: &str = "Route not found";
const METHOD_NOT_ALLOWED_ERROR: &str = "Method not allowed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Toggle(String),
    Delete(String),
    Preflight,
    MethodNotAllowed,
    NotFound,
}

impl Route {
    pub fn resolve(method: &Method, path: &str) -> Self {
        if method == Method::OPTIONS {
            return Route::Preflight;
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["todos"] if method == Method::GET => Route::List,
            ["todo"] if method == Method::POST => Route::Create,
            ["todo", id, "toggle"] if method == Method::POST => Route::Toggle(id.to_string()),
            ["todo", id] if method == Method::DELETE => Route::Delete(id.to_string()),
            ["todos"] | ["todo"] | ["todo", _] | ["todo", _, "toggle"] => Route::MethodNotAllowed,
            _ => Route::NotFound,
        }
    }
}

/// Single entry point serving every route.
#[tracing::instrument(skip(request, store), fields(method = %request.method(), path = %request.uri().path()))]
pub async fn dispatch(
    request: Request,
    store: &dyn ItemStore,
    owner: &str,
) -> Result<Response<String>, Error> {
    let route = Route::resolve(request.method(), request.uri().path());
    info!("Resolved route: {:?}", route);

    match route {
        Route::List => handlers::list_todos(store, owner).await,
        Route::Create => handlers::create_todo(&request, store, owner).await,
        Route::Toggle(id) => {
            let id = path_id(&request).unwrap_or(id);
            handlers::toggle_todo(Some(&id), store, owner).await
        }
        Route::Delete(id) => {
            let id = path_id(&request).unwrap_or(id);
            handlers::delete_todo(Some(&id), store, owner).await
        }
        Route::Preflight => empty_response(StatusCode::NO_CONTENT),
        Route::MethodNotAllowed => Err(Error::HttpError(message_response(
            StatusCode::METHOD_NOT_ALLOWED,
            METHOD_NOT_ALLOWED_ERROR,
        ))),
        Route::NotFound => Err(Error::HttpError(message_response(
            StatusCode::NOT_FOUND,
            ROUTE_NOT_FOUND_ERROR,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Item;
    use crate::store::MemoryItemStore;
    use lambda_http::Body;

    fn request(method: &str, path: &str, body: Option<&str>) -> Request {
        let builder = lambda_http::http::Request::builder().method(method).uri(path);
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::Empty).unwrap(),
        }
    }

    async fn call(store: &MemoryItemStore, method: &str, path: &str, body: Option<&str>) -> Response<String> {
        match dispatch(request(method, path, body), store, "demo").await {
            Ok(response) | Err(Error::HttpError(response)) => response,
            Err(Error::LambdaError(err)) => panic!("unexpected lambda error: {}", err),
        }
    }

    #[test]
    fn resolves_known_routes() {
        assert_eq!(Route::resolve(&Method::GET, "/todos"), Route::List);
        assert_eq!(Route::resolve(&Method::GET, "/todos/"), Route::List);
        assert_eq!(Route::resolve(&Method::POST, "/todo"), Route::Create);
        assert_eq!(
            Route::resolve(&Method::POST, "/todo/abc/toggle"),
            Route::Toggle("abc".into())
        );
        assert_eq!(
            Route::resolve(&Method::DELETE, "/todo/abc"),
            Route::Delete("abc".into())
        );
        assert_eq!(Route::resolve(&Method::OPTIONS, "/anything"), Route::Preflight);
    }

    #[test]
    fn distinguishes_wrong_method_from_unknown_path() {
        assert_eq!(Route::resolve(&Method::POST, "/todos"), Route::MethodNotAllowed);
        assert_eq!(Route::resolve(&Method::GET, "/todo/abc"), Route::MethodNotAllowed);
        assert_eq!(Route::resolve(&Method::DELETE, "/todo/abc/toggle"), Route::MethodNotAllowed);
        assert_eq!(Route::resolve(&Method::GET, "/"), Route::NotFound);
        assert_eq!(Route::resolve(&Method::GET, "/todo/abc/archive"), Route::NotFound);
    }

    #[tokio::test]
    async fn preflight_is_204_with_cors() {
        let store = MemoryItemStore::default();
        let response = call(&store, "OPTIONS", "/todo", None).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(
            response.headers()["access-control-allow-methods"],
            "GET,POST,DELETE,OPTIONS"
        );
    }

    #[tokio::test]
    async fn unknown_routes_are_rejected() {
        let store = MemoryItemStore::default();

        assert_eq!(call(&store, "GET", "/nope", None).await.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            call(&store, "PUT", "/todo", None).await.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[tokio::test]
    async fn routes_full_lifecycle() {
        let store = MemoryItemStore::default();

        let created = call(&store, "POST", "/todo", Some(r#"{"title":"Buy milk"}"#)).await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let item: Item = serde_json::from_str(created.body()).unwrap();

        let toggled = call(&store, "POST", &format!("/todo/{}/toggle", item.id), None).await;
        assert_eq!(toggled.status(), StatusCode::OK);
        let toggled: Item = serde_json::from_str(toggled.body()).unwrap();
        assert!(toggled.completed);

        let listed = call(&store, "GET", "/todos", None).await;
        let items: Vec<Item> = serde_json::from_str(listed.body()).unwrap();
        assert_eq!(items, vec![toggled]);

        let deleted = call(&store, "DELETE", &format!("/todo/{}", item.id), None).await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let listed = call(&store, "GET", "/todos", None).await;
        assert_eq!(listed.body(), "[]");
    }
}
