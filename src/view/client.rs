use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use thiserror::Error;
use uuid::Uuid;

use crate::common::Item;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Backend answered {0}")]
    Status(StatusCode),
}

impl ClientError {
    /// The request got an answer, so the backend may have changed meanwhile.
    pub fn reached_backend(&self) -> bool {
        matches!(self, ClientError::Status(_))
    }
}

/// The backend as seen by the view.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Item>, ClientError>;

    async fn create(&self, title: &str) -> Result<Item, ClientError>;

    async fn toggle(&self, id: Uuid) -> Result<Item, ClientError>;

    async fn delete(&self, id: Uuid) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpTodoClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTodoClient {
    pub fn new_w_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self::new_w_client(reqwest::Client::new(), base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(status))
    }
}

#[async_trait]
impl TodoApi for HttpTodoClient {
    async fn list(&self) -> Result<Vec<Item>, ClientError> {
        let response = self.client.get(self.url("/todos")).send().await?;
        let items = check_status(response)?.json::<Vec<Item>>().await?;

        Ok(items)
    }

    async fn create(&self, title: &str) -> Result<Item, ClientError> {
        let response = self
            .client
            .post(self.url("/todo"))
            .json(&serde_json::json!({ "title": title }))
            .send()
            .await?;
        let item = check_status(response)?.json::<Item>().await?;

        Ok(item)
    }

    async fn toggle(&self, id: Uuid) -> Result<Item, ClientError> {
        let response = self
            .client
            .post(self.url(&format!("/todo/{id}/toggle")))
            .send()
            .await?;
        let item = check_status(response)?.json::<Item>().await?;

        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/todo/{id}")))
            .send()
            .await?;
        check_status(response)?;

        Ok(())
    }
}
