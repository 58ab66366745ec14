//! Shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies identical redirect behavior: immediate for
//! `Redirect`, delayed for `Deny` so the notice can be read first.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::util::guard::{DENIED_REDIRECT_DELAY_MS, GuardDecision};

/// Navigation implied by a guard decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectPlan {
    Now(&'static str),
    After { path: &'static str, delay_ms: u32 },
}

/// `None` when the decision keeps the user where they are.
pub fn redirect_plan(decision: GuardDecision) -> Option<RedirectPlan> {
    match decision {
        GuardDecision::Redirect(path) => Some(RedirectPlan::Now(path)),
        GuardDecision::Deny { redirect } => {
            Some(RedirectPlan::After { path: redirect, delay_ms: DENIED_REDIRECT_DELAY_MS })
        }
        GuardDecision::Wait | GuardDecision::Render => None,
    }
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Whether a delayed redirect to `path` should still fire.
///
/// `current` is `None` once the guard has been unmounted (the user navigated
/// away during the delay); any decision other than the same denial means the
/// session changed and the guard has already re-decided.
pub fn delayed_redirect_applies(current: Option<GuardDecision>, path: &str) -> bool {
    matches!(current, Some(GuardDecision::Deny { redirect }) if redirect == path)
}

/// Navigate whenever `decision` resolves to a redirect or a denial.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || match redirect_plan(decision.get()) {
        Some(RedirectPlan::Now(path)) => navigate(path, replace_options()),
        Some(RedirectPlan::After { path, delay_ms }) => {
            leptos::logging::log!("access denied, redirecting to {path}");
            let navigate = navigate.clone();
            navigate_after_delay(delay_ms, move || {
                if delayed_redirect_applies(decision.try_get_untracked(), path) {
                    navigate(path, replace_options());
                }
            });
        }
        None => {}
    });
}

fn navigate_after_delay<G>(delay_ms: u32, go: G)
where
    G: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        go();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay_ms;
        go();
    }
}
