//! Ledger Table Component
//!
//! Per-item breakdown of the loaded menu. The "taken" column is editable;
//! each edit is applied at once and saved in the background.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LedgerTable() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    // Rows are keyed by position and name so typing keeps input focus
    let rows = move || {
        store
            .items()
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index, item.name))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="card ledger">
            <h5>{move || {
                let name = store.menu_name().get();
                if name.is_empty() { "Menu Breakdown".to_string() } else { format!("{} Breakdown", name) }
            }}</h5>
            <table class="ledger-table">
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Initial Qty"</th>
                        <th>"Taken Qty"</th>
                        <th>"Leftovers"</th>
                        <th>"Wasted Qty"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|row| row.clone()
                        children=move |(index, name)| {
                            let item = move || store.items().get().get(index).cloned();
                            view! {
                                <tr>
                                    <td>{name}</td>
                                    <td>{move || item().map(|i| i.quantity)}</td>
                                    <td>
                                        <input
                                            type="number"
                                            min="0"
                                            max=move || item().map(|i| i.quantity.to_string()).unwrap_or_default()
                                            prop:value=move || item().map(|i| i.taken.to_string()).unwrap_or_default()
                                            on:input=move |ev| ctx.edit_taken(index, &event_target_value(&ev))
                                        />
                                    </td>
                                    <td>{move || item().map(|i| i.leftovers())}</td>
                                    <td>{move || item().map(|i| i.wasted)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || store.items().get().is_empty() && !store.loading().get()>
                <p class="empty-hint">"No items on this menu."</p>
            </Show>
            <Show when=move || store.sync().get().is_saving()>
                <small class="sync-status">"Saving changes..."</small>
            </Show>
            {move || store.sync().get().last_error.map(|e| view! {
                <small class="sync-error">{format!("Changes not saved: {}", e)}</small>
            })}
        </div>
    }
}
