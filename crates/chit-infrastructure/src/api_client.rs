//! Shared REST client for the committee backend.
//!
//! One reqwest client, base URL, and bearer-token injection point for all
//! directory implementations. Requests follow the same shape everywhere:
//! send with a timeout, check the status, then decode JSON.

use crate::config::ApiConfig;
use crate::token_store::TokenStore;
use chit_core::error::{ChitError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the committee backend API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    token_store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Creates a client from configuration and a token store.
    ///
    /// The token store is consulted per request, so a login or logout takes
    /// effect without rebuilding the client.
    pub fn new(config: &ApiConfig, token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
            token_store,
        }
    }

    /// Issues a GET request and decodes the JSON response body.
    ///
    /// `path` is appended to the base URL and must start with `/`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_json_with_query(path, &[]).await
    }

    /// Issues a GET request with query parameters and decodes the JSON
    /// response body.
    ///
    /// Parameter values are percent-encoded by the request builder.
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(&url).timeout(self.timeout);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Ok(Some(snapshot)) = self.token_store.load().await {
            request = request.header(
                "Authorization",
                format!("Bearer {}", snapshot.access_token),
            );
        }

        tracing::debug!(%url, "GET");
        let response = request
            .send()
            .await
            .map_err(|e| ChitError::api(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChitError::api_status(
                status.as_u16(),
                format!("{url} answered {status}: {body}"),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ChitError::api(format!("failed to decode response from {url}: {e}")))
    }
}
