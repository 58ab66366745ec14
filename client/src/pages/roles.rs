//! Role catalogue, admin only.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use leptos::prelude::*;

use crate::components::guards::RoleGuard;
use crate::components::layout::PortalLayout;
use crate::components::list_status::ListStatus;
use crate::net::types::{NewRole, RoleRecord};
use crate::state::auth::use_auth;
use crate::state::resources::{ListState, create_item, delete_item, load_list};
use crate::util::format::or_dash;
use crate::util::guard::ROLES_ROLES;
use crate::util::role::Action;

pub(crate) fn validate_new_role(name: &str, description: &str) -> Result<NewRole, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Role name is required.");
    }
    Ok(NewRole { name: name.to_owned(), description: description.trim().to_owned() })
}

#[component]
pub fn RolesPage() -> impl IntoView {
    view! {
        <RoleGuard allowed=ROLES_ROLES>
            <PortalLayout title="Roles">
                <RolesTable/>
            </PortalLayout>
        </RoleGuard>
    }
}

#[component]
fn RolesTable() -> impl IntoView {
    let auth = use_auth();
    let roles = RwSignal::new(ListState::<RoleRecord>::default());
    load_list(roles);

    let can_manage = move || auth.get().effective_role().is_some_and(|r| r.can(Action::ManageRoles));

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if roles.get_untracked().pending {
            return;
        }
        match validate_new_role(&name.get_untracked(), &description.get_untracked()) {
            Ok(payload) => {
                form_error.set(None);
                create_item(roles, payload, move || {
                    name.set(String::new());
                    description.set(String::new());
                });
            }
            Err(text) => form_error.set(Some(text)),
        }
    };

    view! {
        <Show when=can_manage>
            <form class="inline-form" on:submit=on_create>
                <input
                    class="inline-form__input"
                    placeholder="Role name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="inline-form__input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || roles.get().pending>
                    "Add role"
                </button>
                {move || form_error.get().map(|text| view! { <span class="inline-form__error">{text}</span> })}
            </form>
        </Show>
        <ListStatus list=roles/>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Description"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let manage = can_manage();
                    roles
                        .get()
                        .items
                        .into_iter()
                        .map(|role| {
                            let id = role.id.clone();
                            view! {
                                <tr>
                                    <td>{role.name.clone()}</td>
                                    <td>{or_dash(role.description.as_deref())}</td>
                                    <td class="data-table__actions">
                                        {manage
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| delete_item(roles, id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            })}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
