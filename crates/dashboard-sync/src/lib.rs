//! Waste-Watch Dashboard Synchronization
//!
//! Layered like the dashboard itself:
//! - model / ledger: menu records and the in-memory item ledger
//! - store: backend access traits
//! - generation / summary / reconciler / selection: the ordering rules
//! - controller: composes them over one session's state

mod controller;
mod error;
mod generation;
mod ledger;
mod model;
mod reconciler;
mod selection;
mod store;
mod summary;


pub use controller::{DashboardController, DashboardState};
pub use error::{ModelError, StoreError, StoreResult, ValidationError};
pub use generation::{Generation, Ticket};
pub use ledger::{coerce_quantity, ItemLedger};
pub use model::{
    Item, ItemWaste, MealPeriod, MenuId, MenuPayload, MenuRecord, MenuSummary, NewMenu, NewMenuItem, Scope,
    WasteReport,
};
pub use reconciler::{Acknowledgement, EditPhase, EditReconciler, SyncStatus};
pub use selection::{resolve_initial_selection, Location, Selection, SelectionStorage};
pub use store::{MenuStore, SummarySource};
pub use summary::{ReportCoordinator, ReportView, SummaryCoordinator, SummaryView, SUMMARY_ERROR_TEXT};
