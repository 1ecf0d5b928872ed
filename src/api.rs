//! Client for the remote todo API.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{NewTodo, Todo, TodoPatch};
use crate::validation::Title;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base url '{0}'")]
    InvalidBase(String),

    #[error("todo '{0}' not found")]
    NotFound(String),

    #[error("remote API answered {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("request to remote API failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Handle to the `/todos` collection. Cheap to clone.
#[derive(Debug, Clone)]
pub struct TodoApi {
    client: Client,
    base: Url,
}

impl TodoApi {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base = Url::parse(base).map_err(|_| ApiError::InvalidBase(base.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBase(base.to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let request = self.client.get(self.base.clone());
        let todos: Vec<Todo> = send_json(request, None).await?;
        debug!(count = todos.len(), "fetched todos");
        Ok(todos)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Todo, ApiError> {
        let request = self.client.get(self.item_url(id)?);
        send_json(request, Some(id)).await
    }

    #[instrument(skip(self, title), fields(title = %title))]
    pub async fn create(&self, title: &Title) -> Result<Todo, ApiError> {
        let request = self
            .client
            .post(self.base.clone())
            .json(&NewTodo::new(title));
        send_json(request, None).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: &str, patch: &TodoPatch<'_>) -> Result<Todo, ApiError> {
        let request = self
            .client
            .request(Method::PATCH, self.item_url(id)?)
            .json(patch);
        send_json(request, Some(id)).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let request = self.client.delete(self.item_url(id)?);
        send(request, Some(id)).await?;
        Ok(())
    }

    fn item_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBase(self.base.to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

async fn send(request: RequestBuilder, id: Option<&str>) -> Result<reqwest::Response, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(ApiError::NotFound(id.to_string()));
        }
    }

    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, message })
}

async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    id: Option<&str>,
) -> Result<T, ApiError> {
    Ok(send(request, id).await?.json().await?)
}
