//! Signed-in user's profile with a name editor.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::guards::RoleGuard;
use crate::components::layout::PortalLayout;
use crate::net::types::{ProfileUpdate, UserProfile};
use crate::state::auth::use_auth;
use crate::util::format::or_dash;
use crate::util::guard::PROFILE_ROLES;

/// Shown when the backend's profile carried no id to address the update to.
pub(crate) const PROFILE_WITHOUT_ID: &str = "Your profile cannot be edited right now.";

/// Id to send the `PUT /users/{id}` to.
pub(crate) fn update_target(user: Option<&UserProfile>) -> Result<String, &'static str> {
    match user {
        Some(user) if !user.id.trim().is_empty() => Ok(user.id.clone()),
        _ => Err(PROFILE_WITHOUT_ID),
    }
}

pub(crate) fn validate_profile_update(first_name: &str, last_name: &str) -> Result<ProfileUpdate, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err("First and last name are required.");
    }
    Ok(ProfileUpdate { first_name: first_name.to_owned(), last_name: last_name.to_owned() })
}

/// Extra profile fields as `(label, value)`, scalars only, sorted by key.
pub(crate) fn extra_fields(user: &UserProfile) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = user
        .extra
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.clone(), text))
        })
        .collect();
    fields.sort();
    fields
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RoleGuard allowed=PROFILE_ROLES>
            <PortalLayout title="Profile">
                <ProfileCard/>
            </PortalLayout>
        </RoleGuard>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let auth = use_auth();
    let editing = RwSignal::new(false);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let start_edit = move |_| {
        if let Some(user) = auth.state().get_untracked().user {
            first_name.set(user.first_name);
            last_name.set(user.last_name);
            message.set(None);
            editing.set(true);
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user_id = match update_target(auth.state().get_untracked().user.as_ref()) {
            Ok(id) => id,
            Err(text) => {
                message.set(Some(text.to_owned()));
                return;
            }
        };
        let update = match validate_profile_update(&first_name.get_untracked(), &last_name.get_untracked()) {
            Ok(update) => update,
            Err(text) => {
                message.set(Some(text.to_owned()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = crate::net::transport::default_client();
            match crate::net::api::update_resource::<UserProfile, _, _>(&client, &user_id, &update).await {
                Ok(()) => {
                    editing.set(false);
                    message.set(None);
                    auth.refresh();
                }
                Err(err) => message.set(Some(err.user_message())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user_id, update);
    };

    view! {
        {move || {
            auth.user()
                .map(|user| {
                    let role = auth.get().effective_role().map_or("", |r| r.as_str());
                    view! {
                        <article class="detail-card">
                            <h2>{user.display_name()}</h2>
                            <dl class="detail-card__facts">
                                <dt>"Email"</dt>
                                <dd>{or_dash(Some(user.email.as_str()))}</dd>
                                <dt>"Role"</dt>
                                <dd>{role}</dd>
                                {extra_fields(&user)
                                    .into_iter()
                                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                    .collect_view()}
                            </dl>
                        </article>
                    }
                })
        }}
        <Show
            when=move || editing.get()
            fallback=move || view! { <button class="btn" on:click=start_edit>"Edit name"</button> }
        >
            <form class="inline-form" on:submit=on_save>
                <input
                    class="inline-form__input"
                    placeholder="First name"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
                <input
                    class="inline-form__input"
                    placeholder="Last name"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
                <button class="btn" type="button" on:click=move |_| editing.set(false)>
                    "Cancel"
                </button>
            </form>
        </Show>
        {move || message.get().map(|text| view! { <p class="list-status list-status--error">{text}</p> })}
    }
}
