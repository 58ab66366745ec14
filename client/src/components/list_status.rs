//! Loading, error, and empty notices shared by the CRUD tables.

use leptos::prelude::*;

use crate::net::types::Resource;
use crate::state::resources::ListState;

/// Status line above a resource table. Renders nothing once rows are shown.
#[component]
pub fn ListStatus<R: Resource>(list: RwSignal<ListState<R>>) -> impl IntoView {
    move || {
        let state = list.get();
        if let Some(error) = state.error {
            view! { <p class="list-status list-status--error" role="alert">{error}</p> }.into_any()
        } else if state.loading {
            view! { <p class="list-status">"Loading..."</p> }.into_any()
        } else if state.items.is_empty() {
            view! { <p class="list-status">{format!("No {} yet.", R::LABEL.to_lowercase())}</p> }.into_any()
        } else {
            ().into_any()
        }
    }
}
