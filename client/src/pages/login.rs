//! Login page: email + password against the session backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::guards::GuestGuard;
use crate::net::types::Credentials;
use crate::state::auth::use_auth;

const MISSING_FIELDS: &str = "Enter your email and password.";

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = crate::net::transport::default_client();
            match crate::net::api::login(&client, &credentials).await {
                Ok(()) => {
                    password.set(String::new());
                    auth.refresh();
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, auth);
    };

    view! {
        <GuestGuard>
            <div class="login-page">
                <div class="login-card">
                    <h1>"School Portal"</h1>
                    <p class="login-card__subtitle">"Sign in to continue"</p>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="email"
                            autocomplete="username"
                            placeholder="you@school.org"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <div class="login-divider"></div>
                    <p class="login-card__subtitle">
                        "No account yet? "
                        <a href="/register">"Create one"</a>
                    </p>
                </div>
            </div>
        </GuestGuard>
    }
}
