//! Summary Panel Component
//!
//! Narrative summary for the selected menu with scope picker and refresh.

use dashboard_sync::Scope;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::markdown::render_summary;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SummaryPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let loading = move || store.summary().get().loading;

    let on_scope_change = move |ev| match event_target_value(&ev).parse::<Scope>() {
        Ok(scope) => ctx.set_scope(scope),
        Err(e) => log::warn!("[SUMMARY] {}", e),
    };

    view! {
        <div class="card summary">
            <div class="summary-header">
                <h5>"Summary"</h5>
                <select class="scope-select" on:change=on_scope_change>
                    {Scope::ALL.iter().map(|scope| {
                        let scope = *scope;
                        view! {
                            <option value=scope.as_str() selected=move || store.scope().get() == scope>
                                {scope.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <button
                    class="refresh-btn"
                    disabled=move || loading() || store.selected().get().is_none()
                    on:click=move |_| ctx.refresh_summary()
                >
                    {move || if loading() { "Updating..." } else { "Refresh" }}
                </button>
            </div>
            {move || if loading() {
                view! { <div class="summary-loading">"Generating summary..."</div> }.into_any()
            } else {
                let html = render_summary(store.summary().get().text.as_deref());
                view! { <div class="summary-body" inner_html=html></div> }.into_any()
            }}
        </div>
    }
}
