//! Common utilities for NetBox API client
//!
//! Provides the authenticated HTTP plumbing shared by every API method.

use crate::error::NetBoxError;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// HTTP client wrapper with authentication
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
    }

    /// Map a non-success response onto the error taxonomy
    ///
    /// 404 is `NotFound`, 401/403 are `Authentication`, 400 is `InvalidRequest`
    /// and everything else is a generic `Api` error carrying status and body.
    async fn check_status(method: &str, path: &str, response: Response) -> Result<Response, NetBoxError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(match status.as_u16() {
            404 => NetBoxError::NotFound(format!(
                "Resource not found: {} - {}",
                path, body
            )),
            401 | 403 => NetBoxError::Authentication(format!(
                "{} {} rejected: {} - {}",
                method, path, status, body
            )),
            400 => NetBoxError::InvalidRequest(format!(
                "{} {} rejected: {}",
                method, path, body
            )),
            _ => NetBoxError::Api(format!(
                "{} {} failed: {} - {}",
                method, path, status, body
            )),
        })
    }

    /// Decode a JSON body, keeping the start of the payload for diagnostics
    async fn decode<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, NetBoxError> {
        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            NetBoxError::Api(format!(
                "error decoding response body: {} - Response (first 500 chars): {}",
                e,
                response_text.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Make a GET request
    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, NetBoxError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self.authorized(self.client.get(&url))
            .send()
            .await
            .map_err(NetBoxError::Http)?;

        let response = Self::check_status("GET", path, response).await?;
        Self::decode(response).await
    }

    /// Make a POST request
    pub async fn post<B: Serialize + ?Sized, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, NetBoxError> {
        let url = self.build_url(path);
        debug!("POST {} with body: {}", url, serde_json::to_string(body).unwrap_or_default());

        let response = self.authorized(self.client.post(&url))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(NetBoxError::Http)?;

        let response = Self::check_status("POST", path, response).await?;
        Self::decode(response).await
    }

    /// Make a PUT request (full replacement)
    pub async fn put<B: Serialize + ?Sized, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, NetBoxError> {
        let url = self.build_url(path);
        debug!("PUT {} with body: {}", url, serde_json::to_string(body).unwrap_or_default());

        let response = self.authorized(self.client.put(&url))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(NetBoxError::Http)?;

        let response = Self::check_status("PUT", path, response).await?;
        Self::decode(response).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<(), NetBoxError> {
        let url = self.build_url(path);
        debug!("DELETE {}", url);

        let response = self.authorized(self.client.delete(&url))
            .send()
            .await
            .map_err(NetBoxError::Http)?;

        Self::check_status("DELETE", path, response).await?;
        Ok(())
    }
}
