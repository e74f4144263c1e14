use reqwest::{Client, Url};
use serde_json::Value;
use std::future::Future;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Reqwest error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Issues one GET and decodes the body as JSON. Implementations must not retry.
pub trait Transport: Send + Sync {
    fn get_json(&self, path: &str) -> impl Future<Output = Result<Value, RequestError>> + Send;
}

pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Resolves `path` (which may carry a query) below the base URL, keeping
    /// any path prefix the base URL has.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

impl Transport for HttpTransport {
    async fn get_json(&self, path: &str) -> Result<Value, RequestError> {
        let url = self.url_for(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RequestError::Body(e.to_string()))?;
        debug!("{} answered {} ({} bytes)", url, status, body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}
