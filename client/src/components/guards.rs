//! Route guard components.
//!
//! These improve UX only: they hide pages a role should not see and redirect.
//! Real access control lives in the backend.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::auth::install_guard_redirect;
use crate::util::guard::{GuardDecision, guest_decision, landing_decision, role_decision};
use crate::util::role::Role;

/// Renders children for visitors who are not signed in; signed-in users are
/// sent to their role's home route.
#[component]
pub fn GuestGuard(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| guest_decision(&auth.get()));
    install_guard_redirect(decision, use_navigate());

    view! {
        {move || match decision.get() {
            GuardDecision::Render => children().into_any(),
            _ => view! { <GuardNotice text="Redirecting..."/> }.into_any(),
        }}
    }
}

/// Renders children only for signed-in users whose role is in `allowed`.
#[component]
pub fn RoleGuard(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| role_decision(&auth.get(), allowed));
    install_guard_redirect(decision, use_navigate());

    view! {
        {move || match decision.get() {
            GuardDecision::Render => children().into_any(),
            GuardDecision::Wait => view! { <GuardNotice text="Loading..."/> }.into_any(),
            GuardDecision::Redirect(_) => view! { <GuardNotice text="Redirecting to login..."/> }.into_any(),
            GuardDecision::Deny { .. } => view! { <AccessDenied/> }.into_any(),
        }}
    }
}

/// `/`: waits for the session check, then forwards to login or the role home.
#[component]
pub fn LandingRedirect() -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| landing_decision(&auth.get()));
    install_guard_redirect(decision, use_navigate());

    view! { <GuardNotice text="Loading..."/> }
}

/// Brief notice shown before a denied route redirects.
#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="guard guard--denied" role="alert">
            <h2>"Access denied"</h2>
            <p>"You do not have permission to view this page. Taking you back..."</p>
        </div>
    }
}

#[component]
fn GuardNotice(text: &'static str) -> impl IntoView {
    view! {
        <div class="guard">
            <p class="guard__text">{text}</p>
        </div>
    }
}
