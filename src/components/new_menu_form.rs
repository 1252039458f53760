//! New Menu Form Component
//!
//! Collects a name, meal period and item list, then creates the menu and
//! switches the dashboard to it. Validation messages show inline.

use dashboard_sync::{MealPeriod, NewMenu, NewMenuItem};
use leptos::prelude::*;

use super::{MealPeriodSelector, MenuItemsEditor};
use crate::context::AppContext;

#[component]
pub fn NewMenuForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (name, set_name) = signal(String::new());
    let (meal_period, set_meal_period) = signal(MealPeriod::default());
    let items = RwSignal::new(Vec::<NewMenuItem>::new());
    let (message, set_message) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
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
        ctx.create_menu(menu, move |result| {
            set_submitting.set(false);
            match result {
                Ok(_) => {
                    set_name.set(String::new());
                    items.set(Vec::new());
                }
                Err(e) => set_message.set(Some(e)),
            }
        });
    };

    view! {
        <form class="card new-menu-form" on:submit=submit>
            <h5>"New Menu"</h5>
            <input
                type="text"
                placeholder="Menu name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <MealPeriodSelector current=meal_period on_change=move |period| set_meal_period.set(period) />
            <MenuItemsEditor items=items />

            {move || message.get().map(|m| view! { <div class="form-error">{m}</div> })}

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Creating..." } else { "Create Menu" }}
            </button>
        </form>
    }
}
