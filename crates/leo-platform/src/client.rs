//! Shared HTTP plumbing for the platform REST API

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{PlatformError, PlatformResult};

/// HTTP client bound to one platform project and API key
#[derive(Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PlatformClient {
    /// Create a client for `base_url` (e.g. `https://<ref>.supabase.co`)
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Request authorized with the API key itself
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_as(method, path, &self.api_key)
    }

    /// Request on behalf of a user access token
    pub(crate) fn request_as(&self, method: Method, path: &str, bearer: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
    }

    /// Return the response on 2xx, or the platform's error otherwise
    pub(crate) async fn ensure_success(response: Response) -> PlatformResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(PlatformError::from_body(status.as_u16(), &body))
    }

    /// Parse a successful JSON response body
    pub(crate) async fn parse_response<T: DeserializeOwned>(response: Response) -> PlatformResult<T> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlatformError::Decode(e.to_string()))
    }

    /// Check for a 2xx status, discarding the body
    pub(crate) async fn check_status(response: Response) -> PlatformResult<()> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

impl std::fmt::Debug for PlatformClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
