//! Admin dashboard: headline counts for every managed collection.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::guards::RoleGuard;
use crate::components::layout::PortalLayout;
use crate::net::types::{Course, Resource, RoleRecord, Transaction, UserProfile};
use crate::state::auth::use_auth;
use crate::state::resources::{ListState, load_list};
use crate::util::format::{EMPTY_CELL, format_amount};
use crate::util::guard::DASHBOARD_ROLES;

/// Count shown on a stat card; a dash until the list arrives.
pub(crate) fn count_label<R: Resource>(state: &ListState<R>) -> String {
    if state.loading || state.error.is_some() { EMPTY_CELL.to_owned() } else { state.items.len().to_string() }
}

/// Sum of all transaction amounts.
pub(crate) fn donation_total(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RoleGuard allowed=DASHBOARD_ROLES>
            <PortalLayout title="Dashboard">
                <DashboardStats/>
            </PortalLayout>
        </RoleGuard>
    }
}

#[component]
fn DashboardStats() -> impl IntoView {
    let auth = use_auth();
    let users = RwSignal::new(ListState::<UserProfile>::default());
    let courses = RwSignal::new(ListState::<Course>::default());
    let roles = RwSignal::new(ListState::<RoleRecord>::default());
    let transactions = RwSignal::new(ListState::<Transaction>::default());
    load_list(users);
    load_list(courses);
    load_list(roles);
    load_list(transactions);

    let total = move || {
        let state = transactions.get();
        if state.loading { EMPTY_CELL.to_owned() } else { format_amount(donation_total(&state.items)) }
    };

    view! {
        <p class="welcome">
            "Welcome back, " {move || auth.user().map(|u| u.display_name()).unwrap_or_default()}
        </p>
        <div class="stats">
            <StatCard label=UserProfile::LABEL href="/users" value=Signal::derive(move || count_label(&users.get()))/>
            <StatCard label=Course::LABEL href="/courses" value=Signal::derive(move || count_label(&courses.get()))/>
            <StatCard label=RoleRecord::LABEL href="/roles" value=Signal::derive(move || count_label(&roles.get()))/>
            <StatCard
                label=Transaction::LABEL
                href="/transactions"
                value=Signal::derive(move || count_label(&transactions.get()))
            />
            <StatCard label="Donations" href="/transactions" value=Signal::derive(total)/>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, href: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <a class="stat-card" href=href>
            <span class="stat-card__value">{move || value.get()}</span>
            <span class="stat-card__label">{label}</span>
        </a>
    }
}
