use leptos::prelude::*;

/// Fallback for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="guard guard--denied">
            <h2>"Page not found"</h2>
            <p>
                "The page you asked for does not exist. "
                <a href="/">"Go home"</a>
            </p>
        </div>
    }
}
