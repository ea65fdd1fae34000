//! JSON-over-HTTP client shared by every domain service
//!
//! Requests are described as plain [`ApiRequest`] values and handed to a
//! [`Transport`]. [`HttpTransport`] talks to the real backend; tests swap in an
//! in-memory fake. The bearer token is read from the cookie store on every
//! call so a fresh login takes effect immediately.

use crate::model::session::{CookieStore, ACCESS_TOKEN};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Failure of a backend call
///
/// Callers never branch on the variant; it only reaches the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The body did not have the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A backend request relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, params: Vec<(String, String)>) -> Self {
        self.query = params;
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Status and raw body of a response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Moves a request over the wire
pub trait Transport: Send + Sync {
    fn send(&self, request: &ApiRequest, token: Option<&str>) -> ApiResult<RawResponse>;
}

/// Blocking reqwest transport against a base URL
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest, token: Option<&str>) -> ApiResult<RawResponse> {
        let url = self.url(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

/// Transport plus the cookie store holding the token
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    cookies: CookieStore,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, cookies: CookieStore) -> Self {
        Self { transport, cookies }
    }

    /// Send a request and decode the JSON body
    pub fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let token = self.cookies.get(ACCESS_TOKEN);
        debug!(
            method = request.method.as_str(),
            path = %request.path,
            authorized = token.is_some(),
            "api request"
        );

        let response = self.transport.send(&request, token.as_deref())?;
        if !(200..300).contains(&response.status) {
            return Err(ApiError::Status {
                status: response.status,
                message: error_message(&response.body),
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// The backend's `message` field when present, otherwise the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}
