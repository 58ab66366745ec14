//! Role-aware sidebar navigation.

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::util::nav::{NavItem, nav_data_by_role};

/// Sidebar rendered from the current user's role menu.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let sections = move || nav_data_by_role(auth.get().role());

    view! {
        <nav class="sidebar" aria-label="Main">
            {move || {
                sections()
                    .iter()
                    .map(|section| {
                        view! {
                            <div class="sidebar__section">
                                <p class="sidebar__title">{section.title}</p>
                                <ul class="sidebar__items">
                                    {section.items.iter().copied().map(nav_link).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

fn nav_link(item: NavItem) -> impl IntoView {
    let target = if item.external { "_blank" } else { "_self" };
    let rel = item.external.then_some("noopener noreferrer");
    view! {
        <li class="sidebar__item">
            <a class="sidebar__link" href=item.path target=target rel=rel>
                <span class="material-icons sidebar__icon" aria-hidden="true">{item.icon}</span>
                <span class="sidebar__label">{item.title}</span>
            </a>
        </li>
    }
}
