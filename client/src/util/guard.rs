//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards only shape the UI: they hide pages and redirect, they never protect
//! data. The backend must still reject requests a role is not entitled to.
//! Decisions are pure functions of [`AuthState`]; the components in
//! `components::guards` apply them.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::{AuthState, AuthStatus};
use crate::util::role::{LOGIN_PATH, Role};

/// How long the access-denied notice stays up before redirecting.
pub const DENIED_REDIRECT_DELAY_MS: u32 = 1500;

pub const DASHBOARD_ROLES: &[Role] = &[Role::Admin];
pub const USERS_ROLES: &[Role] = &[Role::Admin, Role::Instructor];
pub const ROLES_ROLES: &[Role] = &[Role::Admin];
pub const COURSES_ROLES: &[Role] = &Role::ALL;
pub const TRANSACTIONS_ROLES: &[Role] = &[Role::Admin, Role::Parent, Role::Donor];
pub const PROFILE_ROLES: &[Role] = &Role::ALL;

/// What a guard should do for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session check still running.
    Wait,
    /// Show the guarded content.
    Render,
    /// Navigate away immediately.
    Redirect(&'static str),
    /// Show the access-denied notice, then navigate after
    /// [`DENIED_REDIRECT_DELAY_MS`].
    Deny { redirect: &'static str },
}

/// Roles allowed on a top-level route, `None` for unknown paths.
pub fn allowed_roles_for(path: &str) -> Option<&'static [Role]> {
    let top = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    match top {
        "dashboard" => Some(DASHBOARD_ROLES),
        "users" => Some(USERS_ROLES),
        "roles" => Some(ROLES_ROLES),
        "courses" => Some(COURSES_ROLES),
        "transactions" => Some(TRANSACTIONS_ROLES),
        "profile" => Some(PROFILE_ROLES),
        _ => None,
    }
}

/// Where a signed-in user lands: their role's home route.
pub fn default_path(state: &AuthState) -> &'static str {
    if state.is_authenticated() {
        state.effective_role().map_or(LOGIN_PATH, Role::home_path)
    } else {
        LOGIN_PATH
    }
}

/// Guest-only pages (login, register): shown unless already signed in.
pub fn guest_decision(state: &AuthState) -> GuardDecision {
    if state.is_authenticated() {
        GuardDecision::Redirect(default_path(state))
    } else {
        GuardDecision::Render
    }
}

/// Signed-in pages restricted to `allowed` roles.
pub fn role_decision(state: &AuthState, allowed: &[Role]) -> GuardDecision {
    match state.status() {
        AuthStatus::Loading => GuardDecision::Wait,
        AuthStatus::Unauthenticated => GuardDecision::Redirect(LOGIN_PATH),
        AuthStatus::Authenticated => match state.effective_role() {
            Some(role) if allowed.contains(&role) => GuardDecision::Render,
            _ => GuardDecision::Deny { redirect: default_path(state) },
        },
    }
}

/// The bare `/` route: wait for the session, then send the user home.
pub fn landing_decision(state: &AuthState) -> GuardDecision {
    match state.status() {
        AuthStatus::Loading => GuardDecision::Wait,
        AuthStatus::Authenticated | AuthStatus::Unauthenticated => GuardDecision::Redirect(default_path(state)),
    }
}
