//! API Client
//!
//! Async bindings for the reports REST API and the chat-completion
//! endpoint, organized by domain. With the `mock` feature (the local
//! development default) reports traffic is routed through the in-repo
//! mock backend instead of the network; chat traffic always goes out.

mod chat;
#[cfg(feature = "mock")]
mod mock;
mod reports;

pub use chat::*;

use gloo_net::http::Request;
use thiserror::Error;

use crate::config::Config;

/// Transport-level failure taxonomy. Pages collapse these to a single
/// human-readable string; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("no chat credential configured")]
    NoCredential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// HTTP client carried in [`crate::context::AppContext`]
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    openai_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_url.clone(),
            openai_token: config.openai_token.clone(),
        }
    }

    fn reports_url(&self, suffix: &str) -> String {
        format!("{}/reports{}", self.base_url, suffix)
    }

    /// Dispatch a reports-API request, through the mock backend when it is
    /// compiled in. Returns the raw status and body text.
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "mock")]
        if let Some(path) = url.strip_prefix(&self.base_url) {
            gloo_timers::future::TimeoutFuture::new(mock::LATENCY_MS).await;
            let (status, json) = mock::respond(method.as_str(), path, body.as_ref());
            return Ok((status, json.to_string()));
        }

        self.fetch(method, url, None, body).await
    }

    /// Plain fetch, no mock interception.
    async fn fetch(
        &self,
        method: Method,
        url: &str,
        bearer: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, String), ApiError> {
        let mut builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
        };
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = match body {
            Some(json) => builder
                .json(&json)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok((status, text))
    }
}

/// Decode a JSON body into `T`
fn parse_json<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map a non-2xx response to [`ApiError::Status`], pulling the server's
/// `{ error }` envelope when it has one.
fn status_error(status: u16, text: &str) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorEnvelope {
        error: String,
    }
    let message = serde_json::from_str::<ErrorEnvelope>(text)
        .map(|e| e.error)
        .unwrap_or_else(|_| text.to_string());
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_uses_envelope_when_present() {
        let err = status_error(422, r#"{"error":"Submitted data not in valid format."}"#);
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "Submitted data not in valid format.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_error_falls_back_to_raw_body() {
        let err = status_error(500, "boom");
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert!(err.to_string().contains("boom"));
    }
}
