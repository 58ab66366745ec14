//! Native transport for the portal session client.
//!
//! The reqwest cookie jar plays the browser's part: the session cookie set by
//! `/login` is replayed on every later request from the same process.

use std::time::Duration;

use portal_client::net::session::{ApiRequest, ApiResponse, Method, Transport};

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().cookie_store(true).timeout(timeout).build()?;
        Ok(Self { client })
    }
}

pub(crate) fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "request");
        let mut builder = self
            .client
            .request(to_reqwest(request.method), &request.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status, "response");
        Ok(ApiResponse { status, body })
    }
}
