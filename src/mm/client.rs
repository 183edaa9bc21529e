//! Mattermost HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::api;
use crate::error::{MmError, Result};

/// Error body returned by the server on failed requests
#[derive(Deserialize, Debug, Default)]
struct ServerError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    detailed_error: String,
}

impl ServerError {
    fn describe(&self) -> String {
        match (self.message.is_empty(), self.detailed_error.is_empty()) {
            (false, false) => format!("{}, {}", self.message, self.detailed_error),
            (false, true) => self.message.clone(),
            (true, false) => self.detailed_error.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Mattermost API client
pub struct MmClient {
    client: Client,
    token: String,
    server_url: String,
}

impl MmClient {
    /// Create a new client for `server_url` authenticated with `token`
    pub fn new(token: String, server_url: String) -> Self {
        let client = Client::builder()
            .user_agent(concat!("mmctl/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            server_url: normalize_server_url(&server_url),
        }
    }

    /// Server URL this client talks to (normalized)
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        format!("{}{}", self.server_url, api::BASE_PATH)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
    }

    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    pub(crate) fn put(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.put(url))
    }

    /// Turn a non-success response into `MmError::Api`
    ///
    /// Uses the server's error body when it can be parsed, `fallback` otherwise.
    pub(crate) async fn api_error(response: reqwest::Response, fallback: &str) -> MmError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ServerError>(&body)
            .map(|e| e.describe())
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        MmError::Api { status, message }
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::api_error(response, &format!("Failed to {}", error_context)).await);
        }
        Ok(response.json().await?)
    }

    /// Fetch a single resource by API path
    ///
    /// Returns `None` for 404 and an error for other non-success status codes.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/teams/abc123")
    /// * `resource_label` - Human-readable label for error messages (e.g., "team 'abc123'")
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let item: T = response.json().await.map_err(|e| MmError::Api {
                    status: 200,
                    message: format!("Failed to parse {}: {}", resource_label, e),
                })?;
                Ok(Some(item))
            }
            404 => Ok(None),
            _ => {
                let fallback = format!("Failed to fetch {}", resource_label);
                Err(Self::api_error(response, &fallback).await)
            }
        }
    }
}

/// Normalize a user-supplied server URL: add https:// when no scheme is given
/// and strip trailing slashes
pub fn normalize_server_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

#[cfg(test)]
impl MmClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url.to_string())
    }
}
