//! Dashboard View Store
//!
//! Mirrors the controller's state into a reactive_stores `Store` so views
//! re-render per field. Fields are written only when their value changed.

use dashboard_sync::{DashboardState, Item, MenuId, MenuSummary, ReportView, Scope, SummaryView, SyncStatus};
use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub menus: Vec<MenuSummary>,
    pub selected: Option<MenuId>,
    pub scope: Scope,
    pub menu_name: String,
    /// Ledger items of the loaded menu
    pub items: Vec<Item>,
    pub loading: bool,
    pub error: Option<String>,
    pub sync: SyncStatus,
    pub summary: SummaryView,
    pub report: ReportView,
}

pub type AppStore = Store<AppState>;

pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

macro_rules! sync_field {
    ($store:expr, $field:ident, $value:expr) => {{
        let value = $value;
        if $store.$field().get_untracked() != value {
            *$store.$field().write() = value;
        }
    }};
}

/// Copy a controller snapshot into the store
pub fn store_apply(store: &AppStore, state: &DashboardState) {
    sync_field!(store, menus, state.menus.clone());
    sync_field!(store, selected, state.selection.menu_id.clone());
    sync_field!(store, scope, state.selection.scope);
    sync_field!(store, menu_name, state.menu_name.clone());
    sync_field!(store, items, state.ledger.items().to_vec());
    sync_field!(store, loading, state.loading);
    sync_field!(store, error, state.error.clone());
    sync_field!(store, sync, state.sync.clone());
    sync_field!(store, summary, state.summary.clone());
    sync_field!(store, report, state.report.clone());
}
