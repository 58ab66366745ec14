//! REST endpoints of the portal backend.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; callers decide whether to show
//! `user_message()` inline (forms) or swallow it (session checks, logout).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::session::{Method, SessionClient, Transport};
use super::types::{Credentials, Registration, Resource, UserProfile, decode_list, decode_record};
use crate::error::ApiError;

pub const LOGIN_ENDPOINT: &str = "/login";
pub const REGISTER_ENDPOINT: &str = "/register";
pub const CHECK_AUTH_ENDPOINT: &str = "/check-auth";
pub const PROFILE_ENDPOINT: &str = "/profile";
pub const LOGOUT_ENDPOINT: &str = "/logout";

fn resource_endpoint<R: Resource>(id: &str) -> String {
    format!("{}/{id}", R::PATH)
}

/// Sign in with `POST /login`. The backend sets the session cookie.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`]; a 401 carries the backend's message.
pub async fn login<T: Transport>(client: &SessionClient<T>, credentials: &Credentials) -> Result<(), ApiError> {
    client.send(Method::Post, LOGIN_ENDPOINT, credentials).await.map(drop)
}

/// Create an account with `POST /register`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn register<T: Transport>(client: &SessionClient<T>, registration: &Registration) -> Result<(), ApiError> {
    client.send(Method::Post, REGISTER_ENDPOINT, registration).await.map(drop)
}

/// `GET /check-auth`: succeeds only while the session cookie is valid.
///
/// # Errors
///
/// Any non-2xx status or transport failure.
pub async fn check_auth<T: Transport>(client: &SessionClient<T>) -> Result<(), ApiError> {
    client.request(Method::Get, CHECK_AUTH_ENDPOINT, None).await.map(drop)
}

/// Fetch the signed-in user's profile from `GET /profile` (`{"user": {...}}`).
///
/// # Errors
///
/// Non-2xx, transport failure, or a body without a decodable profile.
pub async fn fetch_profile<T: Transport>(client: &SessionClient<T>) -> Result<UserProfile, ApiError> {
    let response = client.request(Method::Get, PROFILE_ENDPOINT, None).await?;
    decode_record(&response.body)
}

/// End the session with `POST /logout`.
///
/// # Errors
///
/// Any non-2xx status or transport failure.
pub async fn logout<T: Transport>(client: &SessionClient<T>) -> Result<(), ApiError> {
    client.request(Method::Post, LOGOUT_ENDPOINT, None).await.map(drop)
}

/// `GET {R::PATH}`.
///
/// # Errors
///
/// Non-2xx, transport failure, or an undecodable list body.
pub async fn list_resources<R: Resource, T: Transport>(client: &SessionClient<T>) -> Result<Vec<R>, ApiError> {
    let response = client.request(Method::Get, R::PATH, None).await?;
    decode_list(&response.body)
}

/// `GET {R::PATH}/{id}`.
///
/// # Errors
///
/// Non-2xx, transport failure, or an undecodable record body.
pub async fn fetch_resource<R: Resource, T: Transport>(client: &SessionClient<T>, id: &str) -> Result<R, ApiError> {
    let response = client.request(Method::Get, &resource_endpoint::<R>(id), None).await?;
    decode_record(&response.body)
}

/// `POST {R::PATH}` with `payload`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn create_resource<R: Resource, T: Transport, B: serde::Serialize>(
    client: &SessionClient<T>,
    payload: &B,
) -> Result<(), ApiError> {
    client.send(Method::Post, R::PATH, payload).await.map(drop)
}

/// `PUT {R::PATH}/{id}` with `payload`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn update_resource<R: Resource, T: Transport, B: serde::Serialize>(
    client: &SessionClient<T>,
    id: &str,
    payload: &B,
) -> Result<(), ApiError> {
    client.send(Method::Put, &resource_endpoint::<R>(id), payload).await.map(drop)
}

/// `DELETE {R::PATH}/{id}`.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`].
pub async fn delete_resource<R: Resource, T: Transport>(client: &SessionClient<T>, id: &str) -> Result<(), ApiError> {
    client.request(Method::Delete, &resource_endpoint::<R>(id), None).await.map(drop)
}
