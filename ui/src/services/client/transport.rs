use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::errors::{ApiError, ApiResult};
use crate::services::config::ApiConfig;

/// HTTP methods the API surface uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A single outgoing request: method, path, headers, optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: &str, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.to_string(),
            headers: Vec::new(),
            body: Some(body),
        }
    }

    /// Set a header, replacing any previous value for the same name.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(existing, _)| existing != name);
        self.headers.push((name.to_string(), value.to_string()));
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }
}

/// A received response. Existence of this value means the server answered;
/// transport-level failures never produce one.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the response body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_value(self.body.clone()).map_err(|e| ApiError::ServerError {
            status: self.status,
            message: format!("Unexpected response shape: {}", e),
        })
    }
}

/// Raised only when no response was received at all.
#[derive(Debug, Error, Clone)]
#[error("no response received: {message}")]
pub struct TransportError {
    pub message: String,
}

/// Transport seam the request client sends through.
///
/// WASM-first: no Send/Sync bounds, implementations run on the browser's
/// event loop. Tests substitute a scripted transport.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// `reqwest`-backed transport against the fixed API origin
pub struct ReqwestTransport {
    http_client: reqwest::Client,
    base_url: String,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    timeout_secs: u64,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .user_agent("servicehub-web-client/1.0")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            Method::Get => self.http_client.get(&url),
            Method::Post => self.http_client.post(&url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .json(body);
        }

        // The browser governs in-flight request lifetime on wasm; the
        // overall timeout only applies on native targets.
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(std::time::Duration::from_secs(self.timeout_secs));
        }

        let response = builder.send().await.map_err(|e| TransportError {
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        // Non-JSON and empty bodies read as null; the caller decides what
        // that means for its status code.
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        Ok(ApiResponse { status, body })
    }
}
