//! Menu Header Component
//!
//! Title of the selected menu with its edit and delete actions.

use leptos::prelude::*;

use super::{DeleteConfirmButton, EditMenuForm};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MenuHeader() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let (delete_error, set_delete_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal(false);

    // A different menu closes the edit form
    Effect::new(move |_| {
        store.selected().track();
        set_editing.set(false);
    });

    let delete_current = move |_| {
        let Some(id) = store.selected().get_untracked() else {
            return;
        };
        set_delete_error.set(None);
        ctx.delete_menu(id, move |result| {
            if let Err(e) = result {
                set_delete_error.set(Some(e));
            }
        });
    };

    view! {
        <Show when=move || store.selected().get().is_some()>
            <div class="menu-header">
                <h2>{move || store.menu_name().get()}</h2>
                <button
                    type="button"
                    class="edit-btn"
                    disabled=move || store.loading().get()
                    on:click=move |_| set_editing.update(|open| *open = !*open)
                >
                    "Edit"
                </button>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=delete_current />
                {move || delete_error.get().map(|e| view! { <small class="form-error">{e}</small> })}
            </div>
            <Show when=move || editing.get()>
                <EditMenuForm on_close=move |_| set_editing.set(false) />
            </Show>
        </Show>
    }
}
