//! Waste-Watch Dashboard App
//!
//! Builds the controller, mirrors its state into the view store and lays
//! out the dashboard panels.

use dashboard_sync::DashboardController;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpBackend;
use crate::browser::{self, HistoryLocation, LocalSelectionStorage};
use crate::components::{LedgerTable, MenuHeader, MenuSelector, NewMenuForm, SummaryPanel, WasteReportPanel};
use crate::config::AppConfig;
use crate::context::{AppContext, Controller};
use crate::route;
use crate::store::{store_apply, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("[APP] Starting with API base {}", config.api_base);

    let store = Store::new(AppState::default());
    provide_context(store);

    let controller: &'static Controller = Box::leak(Box::new(DashboardController::new(
        HttpBackend::new(config.api_base.as_str()),
        LocalSelectionStorage::new(config.storage_key.as_str()),
        HistoryLocation,
    )));
    controller.subscribe(move |state| store_apply(&store, state));

    let ctx = AppContext::new(controller);
    provide_context(ctx);

    // Load menus and resolve the starting selection once on mount
    Effect::new(move |_| {
        let route_param = browser::current_path().as_deref().and_then(route::parse_dashboard_path);
        ctx.initialize(route_param);
    });

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Waste Watch"</h1>
                <MenuSelector />
            </header>

            {move || store.error().get().map(|e| view! { <div class="alert alert-error">{e}</div> })}

            <main class="dashboard-body">
                <Show
                    when=move || store.selected().get().is_some()
                    fallback=move || view! {
                        <p class="empty-hint">
                            {move || {
                                if store.loading().get() { "Loading menus..." } else { "Create a menu to get started." }
                            }}
                        </p>
                    }
                >
                    <MenuHeader />
                    <Show
                        when=move || !store.loading().get()
                        fallback=|| view! { <div class="loading">"Loading menu..."</div> }
                    >
                        <LedgerTable />
                    </Show>
                    <div class="dashboard-insights">
                        <SummaryPanel />
                        <WasteReportPanel />
                    </div>
                </Show>
            </main>

            <aside class="dashboard-sidebar">
                <NewMenuForm />
            </aside>
        </div>
    }
}
