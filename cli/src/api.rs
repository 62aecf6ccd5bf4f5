//! HTTP client for the relay's JSON API.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wire::{ChatReply, ChatRequest, ErrorBody, HealthReply, ImageReply, ImageRequest};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {error}")]
    Server { status: u16, error: String, details: Option<String> },
}

impl ClientError {
    /// Best human-readable reason: the relay's `details` when it sent one,
    /// otherwise this error's own description.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::Server { details: Some(details), .. } if !details.is_empty() => details.clone(),
            other => other.to_string(),
        }
    }
}

/// The two generation calls a chat session needs. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Relay: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-2xx reply.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError>;

    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-2xx reply.
    async fn generate_image(&self, request: &ImageRequest) -> Result<ImageReply, ClientError>;
}

pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not http(s) or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base_url.to_owned()));
        }
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { http: builder.build()?, base_url: base_url.to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/health`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on transport failure or a non-2xx reply.
    pub async fn health(&self) -> Result<HealthReply, ClientError> {
        let response = self.http.get(self.url(wire::HEALTH_PATH)).send().await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        decode(response).await
    }
}

#[async_trait::async_trait]
impl Relay for RelayClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ClientError> {
        self.post_json(wire::CHAT_PATH, request).await
    }

    async fn generate_image(&self, request: &ImageRequest) -> Result<ImageReply, ClientError> {
        self.post_json(wire::IMAGE_PATH, request).await
    }
}

/// Parse a 2xx body as `R`, anything else as an [`ErrorBody`].
async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<R>().await?);
    }

    let text = response.text().await?;
    let body = serde_json::from_str::<ErrorBody>(&text).unwrap_or(ErrorBody { error: text, details: None });
    Err(ClientError::Server { status: status.as_u16(), error: body.error, details: body.details })
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
