//! Raw HTTP client for the Reader Service.
//!
//! No panel awareness — just issues calls via reqwest.

use reqwest::Client;

use super::types::{Command, Envelope};

/// Default service address, matching the reference backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Errors from Reader Service calls.
///
/// A decoded envelope with `success=false` is not an error at this layer:
/// the service reported an outcome and the panel surfaces its message.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// HTTP client bound to one Reader Service base URL.
#[derive(Debug, Clone)]
pub struct ReaderClient {
    http: Client,
    base_url: String,
}

impl ReaderClient {
    /// Create a client against the default base URL.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.into())
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a one-shot command: POST with no body.
    pub async fn command(&self, command: Command) -> Result<Envelope, ReaderError> {
        let url = format!("{}{}", self.base_url, command.path());
        let response = self.http.post(&url).send().await?;
        decode(response).await
    }

    /// Poll accumulated tag reads: GET, a read rather than a mutating command.
    pub async fn inventory_data(&self) -> Result<Envelope, ReaderError> {
        let url = format!("{}/inventory/data", self.base_url);
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }
}

impl Default for ReaderClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn decode(response: reqwest::Response) -> Result<Envelope, ReaderError> {
    let status = response.status().as_u16();
    if status >= 400 {
        let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
        return Err(ReaderError::InvalidResponse(format!(
            "status {status}: {body}"
        )));
    }

    response
        .json()
        .await
        .map_err(|e| ReaderError::InvalidResponse(format!("failed to parse envelope: {e}")))
}
