//! HTTP client for the aggregation server's REST boundary.
//!
//! All requests go to `{base_url}/api/...` and every response body is the
//! JSON [`Envelope`]. The client enforces a per-request timeout and a
//! bounded body read so a misbehaving server cannot exhaust memory.

use super::Envelope;
use futures::StreamExt;
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Maximum envelope body size. List endpoints return at most a few hundred
/// rows; anything past this is a server bug.
const MAX_BODY_SIZE: usize = 2 * 1024 * 1024; // 2MB

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out after {0}s")]
    Timeout(u64),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    #[error("invalid envelope in response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid server URL: {0}")]
    BadBaseUrl(String),
}

/// Thin wrapper around a pooled `reqwest::Client` bound to one server.
///
/// Cloning is cheap (the inner client is an `Arc` pool handle), so spawned
/// tasks clone the whole `ApiClient`.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl ApiClient {
    /// Build a client for `base_url` (scheme + host, no trailing slash
    /// required). The URL is validated up front so misconfiguration fails
    /// at startup rather than on the first keypress.
    pub fn new(http: reqwest::Client, base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let parsed =
            url::Url::parse(base_url).map_err(|e| ApiError::BadBaseUrl(e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ApiError::BadBaseUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<Envelope, ApiError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Envelope, ApiError> {
        self.request(Method::POST, path, body).await
    }

    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Envelope, ApiError> {
        self.request(Method::PUT, path, body).await
    }

    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Envelope, ApiError> {
        self.request(Method::PATCH, path, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<Envelope, ApiError> {
        self.request(Method::DELETE, path, None).await
    }

    /// Issue one request and decode the envelope.
    ///
    /// Non-2xx statuses map to `ApiError::HttpStatus` without attempting to
    /// parse a body — the server only guarantees the envelope shape on
    /// success paths it controls.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Envelope, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "API request");

        let mut request = self.http.request(method, &url);
        if let Some(json) = body {
            request = request.json(json);
        }

        let response = tokio::time::timeout(Duration::from_secs(self.timeout_secs), request.send())
            .await
            .map_err(|_| ApiError::Timeout(self.timeout_secs))?
            .map_err(ApiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "API request failed");
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let bytes = read_limited(response, MAX_BODY_SIZE).await?;
        let envelope: Envelope = serde_json::from_slice(&bytes)?;
        Ok(envelope)
    }
}

/// Read a response body with a hard size cap, checking Content-Length first
/// to fail fast when the server declares an oversized body.
async fn read_limited(response: reqwest::Response, limit: usize) -> Result<Vec<u8>, ApiError> {
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(ApiError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(ApiError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(ApiError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
