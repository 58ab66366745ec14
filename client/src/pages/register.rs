//! Self-service account registration.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::guards::GuestGuard;
use crate::net::types::Registration;
use crate::util::role::Role;

pub(crate) const MIN_PASSWORD_LEN: usize = 8;

/// Raw form values before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub role: String,
}

pub(crate) fn validate_registration(form: &RegistrationForm) -> Result<Registration, &'static str> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
        return Err("Enter your name and email.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    let role = Role::parse(&form.role)
        .filter(|r| Role::REGISTERABLE.contains(r))
        .ok_or("Choose an account type.")?;
    Ok(Registration {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        role: role.as_str().to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm { role: Role::Student.as_str().to_owned(), ..Default::default() });
    let message = RwSignal::new(None::<(bool, String)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match validate_registration(&form.get_untracked()) {
            Ok(registration) => registration,
            Err(text) => {
                message.set(Some((false, text.to_owned())));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = crate::net::transport::default_client();
            match crate::net::api::register(&client, &registration).await {
                Ok(()) => {
                    form.set(RegistrationForm { role: registration.role.clone(), ..Default::default() });
                    message.set(Some((true, "Account created. You can sign in now.".to_owned())));
                }
                Err(err) => message.set(Some((false, err.user_message()))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = registration;
    };

    let message_class = move || {
        if message.get().is_some_and(|(ok, _)| !ok) { "login-message login-message--error" } else { "login-message" }
    };

    view! {
        <GuestGuard>
            <div class="login-page">
                <div class="login-card">
                    <h1>"Create Account"</h1>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            placeholder="First name"
                            prop:value=move || form.get().first_name
                            on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            placeholder="Last name"
                            prop:value=move || form.get().last_name
                            on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@school.org"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="Password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="Confirm password"
                            prop:value=move || form.get().confirm
                            on:input=move |ev| form.update(|f| f.confirm = event_target_value(&ev))
                        />
                        <select
                            class="login-input"
                            prop:value=move || form.get().role
                            on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                        >
                            {Role::REGISTERABLE
                                .into_iter()
                                .map(|role| view! { <option value=role.as_str()>{role.as_str()}</option> })
                                .collect_view()}
                        </select>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                    </form>
                    <Show when=move || message.get().is_some()>
                        <p class=message_class role="status">
                            {move || message.get().map(|(_, text)| text).unwrap_or_default()}
                        </p>
                    </Show>
                    <p class="login-card__subtitle">
                        "Already registered? "
                        <a href="/login">"Sign in"</a>
                    </p>
                </div>
            </div>
        </GuestGuard>
    }
}
