//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one [`AuthStore`] and provides it through context. Route
//! guards, the sidebar, and pages read it; only the store itself writes it,
//! through [`AuthStore::refresh`] and [`AuthStore::sign_out`].
//!
//! The session check itself lives in [`resolve_session`], a plain async
//! function over any [`Transport`], so the check-then-profile sequence can be
//! exercised without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::error::StateError;
use crate::net::api;
use crate::net::session::{SessionClient, Transport};
use crate::net::types::UserProfile;
use crate::util::role::Role;

/// Coarse session status derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Authentication state tracking the current user and loading status.
///
/// Status flags are derived from these two fields and never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Initial mount state: a session check is about to run.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user.with_default_role()), loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        match (self.loading, &self.user) {
            (true, _) => AuthStatus::Loading,
            (false, Some(_)) => AuthStatus::Authenticated,
            (false, None) => AuthStatus::Unauthenticated,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::Authenticated
    }

    #[must_use]
    pub fn is_unauthenticated(&self) -> bool {
        self.status() == AuthStatus::Unauthenticated
    }

    /// Role as tagged on the profile; `None` when signed out or unrecognized.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(UserProfile::role_kind)
    }

    /// Role used for access decisions. Missing or unknown tags resolve to
    /// [`Role::LOWEST_PRIVILEGE`].
    #[must_use]
    pub fn effective_role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| Role::resolve(u.role.as_deref()))
    }
}

/// Run one session check: `/check-auth`, then `/profile` on success.
///
/// Never fails. Any error (transport, non-2xx, undecodable profile) yields
/// [`AuthState::signed_out`]. `/profile` is only called after a successful
/// `/check-auth`.
pub async fn resolve_session<T: Transport>(client: &SessionClient<T>) -> AuthState {
    if let Err(err) = api::check_auth(client).await {
        leptos::logging::log!("session check failed: {err}");
        return AuthState::signed_out();
    }
    match api::fetch_profile(client).await {
        Ok(profile) => AuthState::signed_in(profile),
        Err(err) => {
            leptos::logging::warn!("profile fetch failed: {err}");
            AuthState::signed_out()
        }
    }
}

/// Call `/logout` and return the signed-out state whatever the outcome.
pub async fn end_session<T: Transport>(client: &SessionClient<T>) -> AuthState {
    if let Err(err) = api::logout(client).await {
        leptos::logging::warn!("logout failed, clearing local session anyway: {err}");
    }
    AuthState::signed_out()
}

/// Single-writer handle over the shared [`AuthState`] signal.
#[derive(Clone, Copy, Debug)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    /// Read-only view for components that need the whole state reactively.
    #[must_use]
    pub fn state(self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Current state, tracked.
    #[must_use]
    pub fn get(self) -> AuthState {
        self.state.get()
    }

    #[must_use]
    pub fn user(self) -> Option<UserProfile> {
        self.state.with(|s| s.user.clone())
    }

    #[must_use]
    pub fn loading(self) -> bool {
        self.state.with(|s| s.loading)
    }

    #[must_use]
    pub fn authenticated(self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    #[must_use]
    pub fn unauthenticated(self) -> bool {
        self.state.with(AuthState::is_unauthenticated)
    }

    /// Re-run the session check and replace the state with its result.
    ///
    /// Called once when `App` mounts and again after sign-in or a profile
    /// edit. Overlapping refreshes are not sequenced; whichever resolves last
    /// wins.
    pub fn refresh(self) {
        self.state.update(|s| s.loading = true);
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                let client = crate::net::transport::default_client();
                let next = resolve_session(&client).await;
                state.set(next);
            });
        }
    }

    /// Log out on the backend, then clear local state regardless of the result.
    pub fn sign_out(self) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                let client = crate::net::transport::default_client();
                let next = end_session(&client).await;
                state.set(next);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        self.state.set(AuthState::signed_out());
    }
}

/// Create the app-wide store and provide it to descendants.
pub fn provide_auth() -> AuthStore {
    let store = AuthStore::new();
    provide_context(store);
    store
}

/// Fetch the store provided by `App`.
///
/// # Panics
///
/// Panics with [`StateError::MissingContext`] when called outside `App`.
pub fn use_auth() -> AuthStore {
    use_context::<AuthStore>().unwrap_or_else(|| panic!("{}", StateError::MissingContext("AuthStore")))
}
