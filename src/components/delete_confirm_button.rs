//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second confirms.

use leptos::prelude::*;

/// Shows a × button; once clicked, "Delete?" with confirm and cancel.
///
/// # Arguments
/// * `button_class` - CSS class for the initial button
/// * `on_confirm` - run when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || {
                let button_class = button_class.clone();
                view! {
                    <button
                        type="button"
                        class=button_class
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(true);
                        }
                    >
                        "×"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
