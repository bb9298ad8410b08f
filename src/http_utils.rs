//! HTTP utilities for the idcli client.
//!
//! One thin wrapper around `reqwest` is shared by every API operation. It
//! injects the authorization header, applies the default headers and the
//! timeout, and hands back the response body without interpreting it.

use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::admin_v1::{ApiError, ApiResponse};

/// Header scheme used for org API tokens.
const AUTH_SCHEME: &str = "SSWS";

/// Configuration for HTTP requests with common settings
#[derive(Debug, Clone)]
pub struct HttpRequestConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Default headers to include with all requests
    pub default_headers: HashMap<String, String>,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl HttpRequestConfig {
    pub fn new(base_url: String) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), "idcli".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            base_url,
            default_headers,
            timeout: 60,
        }
    }
}

/// HTTP client wrapper with common request handling logic
#[derive(Clone)]
pub struct HttpClient {
    client: Arc<Client>,
    config: HttpRequestConfig,
}

impl HttpClient {
    /// Get a reference to the HTTP client configuration
    pub fn config(&self) -> &HttpRequestConfig {
        &self.config
    }

    /// Create a new HTTP client with the given configuration
    pub fn new(config: HttpRequestConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Make a GET request to the specified path
    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        token: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.execute(Method::GET, path, query, None, token).await
    }

    /// Make a POST request to the specified path with an optional JSON body
    pub async fn post(
        &self,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        token: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.execute(Method::POST, path, query, body, token).await
    }

    /// Make a PUT request to the specified path with an optional JSON body
    pub async fn put(
        &self,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        token: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.execute(Method::PUT, path, query, body, token).await
    }

    /// Make a PATCH request to the specified path with an optional JSON body
    pub async fn patch(
        &self,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        token: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.execute(Method::PATCH, path, query, body, token).await
    }

    /// Make a DELETE request to the specified path
    pub async fn delete(
        &self,
        path: &str,
        query: &[(String, String)],
        token: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.execute(Method::DELETE, path, query, None, token).await
    }

    /// Execute an HTTP request and return the raw response body.
    ///
    /// Non-2xx responses become `ApiError::Api` carrying the status and the
    /// body as received; no retries, no classification beyond that.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        token: &str,
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        trace!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("{} {}", AUTH_SCHEME, token));

        for (key, value) in &self.config.default_headers {
            request = request.header(key, value);
        }

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        trace!("Response status {} ({} bytes)", status, body.len());

        if status.is_success() {
            Ok(ApiResponse { status, body })
        } else {
            debug!("Request to {} failed with status {}", url, status);
            Err(ApiError::Api { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_carries_default_headers() {
        let config = HttpRequestConfig::new("https://org.identity.test".to_string());
        assert_eq!(config.base_url, "https://org.identity.test");
        assert_eq!(
            config.default_headers.get("User-Agent"),
            Some(&"idcli".to_string())
        );
        assert_eq!(
            config.default_headers.get("Accept"),
            Some(&"application/json".to_string())
        );
        assert_eq!(config.timeout, 60);
    }

    #[test]
    fn client_builds_from_config() {
        let config = HttpRequestConfig::new("https://org.identity.test".to_string());
        let client = HttpClient::new(config).unwrap();
        assert_eq!(client.config().base_url, "https://org.identity.test");
    }
}
