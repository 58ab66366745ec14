//! User directory for admins and instructors.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::guards::RoleGuard;
use crate::components::layout::PortalLayout;
use crate::components::list_status::ListStatus;
use crate::net::types::UserProfile;
use crate::state::auth::use_auth;
use crate::state::resources::{ListState, delete_item, load_list};
use crate::util::format::EMPTY_CELL;
use crate::util::guard::USERS_ROLES;
use crate::util::role::{Action, Role};

/// Role column text; unknown tags are shown as sent.
pub(crate) fn role_cell(user: &UserProfile) -> String {
    match (user.role_kind(), user.role.as_deref()) {
        (Some(role), _) => role.as_str().to_owned(),
        (None, Some(raw)) if !raw.trim().is_empty() => raw.trim().to_owned(),
        _ => EMPTY_CELL.to_owned(),
    }
}

/// Admins may delete anyone but themselves.
pub(crate) fn can_delete_user(viewer: Option<&UserProfile>, row: &UserProfile) -> bool {
    viewer.is_some_and(|me| {
        me.id != row.id && Role::resolve(me.role.as_deref()).can(Action::DeleteUsers)
    })
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RoleGuard allowed=USERS_ROLES>
            <PortalLayout title="Users">
                <UsersTable/>
            </PortalLayout>
        </RoleGuard>
    }
}

#[component]
fn UsersTable() -> impl IntoView {
    let auth = use_auth();
    let users = RwSignal::new(ListState::<UserProfile>::default());
    load_list(users);

    view! {
        <ListStatus list=users/>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let viewer = auth.user();
                    users
                        .get()
                        .items
                        .into_iter()
                        .map(|user| {
                            let deletable = can_delete_user(viewer.as_ref(), &user);
                            let id = user.id.clone();
                            view! {
                                <tr>
                                    <td>{user.display_name()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{role_cell(&user)}</td>
                                    <td class="data-table__actions">
                                        {deletable
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| delete_item(users, id.clone())
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
