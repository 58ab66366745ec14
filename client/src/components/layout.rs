//! Page chrome for signed-in views: header, sidebar, content area.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::state::auth::use_auth;

/// Wraps a signed-in page with the header and role sidebar.
#[component]
pub fn PortalLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let auth = use_auth();

    let user_name = move || auth.user().map_or_else(|| "—".to_owned(), |u| u.display_name());
    let role_label = move || auth.get().effective_role().map_or("", |r| r.as_str());

    let on_logout = move |_| auth.sign_out();

    view! {
        <div class="portal">
            <header class="portal__header">
                <span class="portal__brand">"School Portal"</span>
                <span class="portal__spacer"></span>
                <a class="portal__user" href="/profile">{user_name}</a>
                <span class="badge portal__role">{role_label}</span>
                <button class="btn portal__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <div class="portal__body">
                <Sidebar/>
                <main class="portal__content">
                    <h1 class="portal__title">{title}</h1>
                    {children()}
                </main>
            </div>
        </div>
    }
}
