//! Menu Selector Component
//!
//! Dropdown of all menus; choosing one switches the dashboard to it.

use dashboard_sync::MenuId;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MenuSelector() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let on_change = move |ev| {
        let value = event_target_value(&ev);
        if !value.is_empty() {
            ctx.select_menu(MenuId::new(value));
        }
    };

    view! {
        <div class="menu-selector">
            <label for="menu-select">"Select Menu"</label>
            <select id="menu-select" on:change=on_change>
                <option value="" disabled=true selected=move || store.selected().get().is_none()>
                    "Choose a menu..."
                </option>
                <For
                    each=move || store.menus().get()
                    key=|menu| (menu.id.clone(), menu.name.clone())
                    children=move |menu| {
                        let id = menu.id.clone();
                        let is_selected = move || store.selected().get().as_ref() == Some(&id);
                        view! {
                            <option value=menu.id.to_string() selected=is_selected>
                                {format!("{} ({})", menu.name, menu.meal_period.as_str())}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
