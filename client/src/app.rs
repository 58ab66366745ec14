//! Root application component with routing and the auth provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::LandingRedirect;
use crate::pages::{
    courses::{CourseDetailsPage, CoursesPage},
    dashboard::DashboardPage,
    login::LoginPage,
    not_found::NotFoundPage,
    profile::ProfilePage,
    register::RegisterPage,
    roles::RolesPage,
    transactions::TransactionsPage,
    users::UsersPage,
};
use crate::state::auth::provide_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="https://fonts.googleapis.com/icon?family=Material+Icons"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth store, kicks off the first session check, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = provide_auth();
    Effect::new(move || auth.refresh());

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="School Portal"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=LandingRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("roles") view=RolesPage/>
                <Route path=StaticSegment("courses") view=CoursesPage/>
                <Route path=(StaticSegment("courses"), ParamSegment("id")) view=CourseDetailsPage/>
                <Route path=StaticSegment("transactions") view=TransactionsPage/>
            </Routes>
        </Router>
    }
}
