//! Concrete transports for the session client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with
//! `credentials: include`, so the browser attaches the session cookie.
//! Server-side (SSR): a transport that always fails, since there is no
//! browser session to forward during server rendering.

use super::session::{ApiRequest, ApiResponse, SessionClient, Transport};
use crate::config;

/// Error text reported by [`ServerTransport`].
pub const SERVER_TRANSPORT_UNAVAILABLE: &str = "not available on server";

/// Transport used outside the browser bundle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerTransport;

impl Transport for ServerTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        let _ = request;
        Err(SERVER_TRANSPORT_UNAVAILABLE.to_owned())
    }
}

/// `fetch`-backed transport. The browser cookie store carries the session.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        use gloo_net::http::{Request, RequestBuilder};
        use super::session::Method;

        let builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let builder = builder
            .credentials(web_sys::RequestCredentials::Include)
            .header("Content-Type", "application/json");
        let outgoing = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| e.to_string())?;

        let resp = outgoing.send().await.map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}

#[cfg(feature = "hydrate")]
pub type DefaultTransport = BrowserTransport;
#[cfg(not(feature = "hydrate"))]
pub type DefaultTransport = ServerTransport;

/// Session client for the configured backend using the build's transport.
pub fn default_client() -> SessionClient<DefaultTransport> {
    SessionClient::new(config::api_base_url(), DefaultTransport::default())
}
