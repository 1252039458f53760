//! Edit Menu Form Component
//!
//! Rename the selected menu, change its meal period and rework its items.
//! Prefilled from the dashboard when opened.

use dashboard_sync::{NewMenu, NewMenuItem};
use leptos::prelude::*;

use super::{MealPeriodSelector, MenuItemsEditor};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn EditMenuForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let selected = store.selected().get_untracked();
    let period = selected
        .as_ref()
        .and_then(|id| store.menus().get_untracked().into_iter().find(|m| &m.id == id))
        .map(|m| m.meal_period)
        .unwrap_or_default();

    let (name, set_name) = signal(store.menu_name().get_untracked());
    let (meal_period, set_meal_period) = signal(period);
    let items = RwSignal::new(
        store
            .items()
            .get_untracked()
            .into_iter()
            .map(|item| NewMenuItem { name: item.name, quantity: i64::from(item.quantity) })
            .collect::<Vec<_>>(),
    );
    let (message, set_message) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = selected.clone() else {
            return;
        };
        if submitting.get() {
            return;
        }
        let menu = NewMenu {
            name: name.get(),
            meal_period: meal_period.get(),
            items: items.get(),
        };
        set_submitting.set(true);
        set_message.set(None);
        ctx.edit_menu(id, menu, move |result| {
            set_submitting.set(false);
            match result {
                Ok(()) => on_close.run(()),
                Err(e) => set_message.set(Some(e)),
            }
        });
    };

    view! {
        <form class="card edit-menu-form" on:submit=submit>
            <h5>"Edit Menu"</h5>
            <input
                type="text"
                placeholder="Menu name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <MealPeriodSelector current=meal_period on_change=move |period| set_meal_period.set(period) />
            <MenuItemsEditor items=items />

            {move || message.get().map(|m| view! { <div class="form-error">{m}</div> })}

            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Save Menu" }}
                </button>
            </div>
        </form>
    }
}
