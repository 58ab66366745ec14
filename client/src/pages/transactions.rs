//! Donations and payments ledger.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;

use crate::components::guards::RoleGuard;
use crate::components::layout::PortalLayout;
use crate::components::list_status::ListStatus;
use crate::net::types::{NewTransaction, Transaction};
use crate::state::auth::use_auth;
use crate::state::resources::{ListState, create_item, delete_item, load_list};
use crate::util::format::{format_amount, format_date, or_dash};
use crate::util::guard::TRANSACTIONS_ROLES;
use crate::util::role::Action;

/// Parse a positive amount; accepts `$` and thousands separators.
pub(crate) fn validate_new_transaction(amount: &str, description: &str) -> Result<NewTransaction, &'static str> {
    let cleaned: String = amount.trim().chars().filter(|c| *c != '$' && *c != ',').collect();
    let amount = cleaned.parse::<f64>().map_err(|_| "Enter an amount.")?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than zero.");
    }
    Ok(NewTransaction { amount, description: description.trim().to_owned() })
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    view! {
        <RoleGuard allowed=TRANSACTIONS_ROLES>
            <PortalLayout title="Transactions">
                <TransactionsTable/>
            </PortalLayout>
        </RoleGuard>
    }
}

#[component]
fn TransactionsTable() -> impl IntoView {
    let auth = use_auth();
    let transactions = RwSignal::new(ListState::<Transaction>::default());
    load_list(transactions);

    let can_record = move || auth.get().effective_role().is_some_and(|r| r.can(Action::RecordTransactions));
    let can_delete = move || auth.get().effective_role().is_some_and(|r| r.can(Action::DeleteTransactions));

    let amount = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if transactions.get_untracked().pending {
            return;
        }
        match validate_new_transaction(&amount.get_untracked(), &description.get_untracked()) {
            Ok(payload) => {
                form_error.set(None);
                create_item(transactions, payload, move || {
                    amount.set(String::new());
                    description.set(String::new());
                });
            }
            Err(text) => form_error.set(Some(text)),
        }
    };

    view! {
        <Show when=can_record>
            <form class="inline-form" on:submit=on_create>
                <input
                    class="inline-form__input"
                    inputmode="decimal"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <input
                    class="inline-form__input"
                    placeholder="Note"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || transactions.get().pending>
                    "Record donation"
                </button>
                {move || form_error.get().map(|text| view! { <span class="inline-form__error">{text}</span> })}
            </form>
        </Show>
        <ListStatus list=transactions/>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Description"</th>
                    <th>"Status"</th>
                    <th class="data-table__num">"Amount"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let deletable = can_delete();
                    transactions
                        .get()
                        .items
                        .into_iter()
                        .map(|tx| {
                            let id = tx.id.clone();
                            view! {
                                <tr>
                                    <td>{format_date(tx.date.as_deref())}</td>
                                    <td>{or_dash(tx.description.as_deref())}</td>
                                    <td>{or_dash(tx.status.as_deref())}</td>
                                    <td class="data-table__num">{format_amount(tx.amount)}</td>
                                    <td class="data-table__actions">
                                        {deletable
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| delete_item(transactions, id.clone())
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
