//! HTTP client abstraction for the Twitch API
//!
//! This module provides a trait-based HTTP client that can be easily mocked for testing.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Trait for making HTTP requests
///
/// Implementations only move bytes. Status codes are interpreted by the caller,
/// so a non-2xx response is still `Ok`; `Err` means the request never completed.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends a request without a body and returns the raw response
    async fn send(&self, method: Method, url: &str, headers: &HeaderMap) -> Result<HttpResponse>;
}

/// Response from an HTTP request
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Error body returned by the API, e.g. `{"error":"Not Found","status":404,"message":"..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl HttpResponse {
    /// Returns true if status is in 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns true if status is 204
    pub fn is_no_content(&self) -> bool {
        self.status == 204
    }

    /// Returns true if status is 401
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Returns true if status is 404
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Deserializes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).context("Failed to parse JSON response")
    }

    /// Best-effort human readable message for an error response
    ///
    /// Prefers the `message` field of a JSON error body, then `error`,
    /// then the raw body.
    pub fn error_message(&self) -> String {
        match serde_json::from_str::<ErrorBody>(&self.body) {
            Ok(ErrorBody {
                message: Some(message),
                ..
            }) if !message.is_empty() => message,
            Ok(ErrorBody {
                error: Some(error), ..
            }) if !error.is_empty() => error,
            _ => self.body.clone(),
        }
    }
}

/// Production HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new reqwest-based HTTP client
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a client that gives up on requests after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { inner })
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, method: Method, url: &str, headers: &HeaderMap) -> Result<HttpResponse> {
        let response = self
            .inner
            .request(method, url)
            .headers(headers.clone())
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
