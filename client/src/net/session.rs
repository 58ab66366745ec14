//! Session client: every backend call in the portal goes through here.
//!
//! DESIGN
//! ======
//! The session credential is a cookie owned by the transport (the browser
//! cookie store, or a reqwest cookie jar in the CLI). `SessionClient` never
//! reads or attaches it. It only joins URLs, serializes JSON bodies, turns
//! non-2xx responses into [`ApiError::Server`], and decodes success bodies.
//!
//! No retries: one failed attempt is returned to the caller as-is.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// HTTP verbs used by the portal API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Fully resolved outbound request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL (base URL joined with the endpoint path).
    pub url: String,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

/// Raw response as seen by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Server-supplied `message` (or `error`) string from a JSON body.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(Value::as_str))
            .map(str::to_owned)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `R`.
    pub fn json<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends one request and returns the raw response.
///
/// Implementations must include the session cookie automatically and send
/// `Content-Type: application/json`. `Err` carries the transport's own error
/// text and means no response was received.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, String>>;
}

/// Cookie-session REST client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct SessionClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> SessionClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Join `path` onto the base URL with exactly one `/`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue a request and require a 2xx status.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] when no response arrived, [`ApiError::Server`]
    /// for non-2xx statuses (carrying the body's `message`), and
    /// [`ApiError::Decode`] if `body` cannot be serialized.
    pub async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<ApiResponse, ApiError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = ApiRequest { method, url: self.url(path), body };
        let response = self.transport.send(request).await.map_err(ApiError::Network)?;
        if !response.is_success() {
            return Err(ApiError::Server { status: response.status, message: response.server_message() });
        }
        Ok(response)
    }

    /// `GET` a JSON body.
    ///
    /// # Errors
    ///
    /// See [`SessionClient::request`]; also [`ApiError::Decode`] on shape mismatch.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Get, path, None).await?.json()
    }

    /// Serialize `payload` and send it as the JSON request body.
    ///
    /// # Errors
    ///
    /// See [`SessionClient::request`].
    pub async fn send<B: Serialize + ?Sized>(&self, method: Method, path: &str, payload: &B) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(method, path, Some(&body)).await
    }
}
