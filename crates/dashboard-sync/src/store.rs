//! Backend Access - Core Traits
//!
//! Abstract interfaces for the menu store and the summary service.
//! The browser build talks HTTP; tests use an in-memory fake.
//!
//! Every call is a single attempt. Failures are returned, never retried.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::{MenuId, MenuPayload, MenuRecord, MenuSummary, NewMenu, Scope, WasteReport};

/// Read/write access to menu records
///
/// Futures are `?Send`: the dashboard runs on a single-threaded event loop.
#[async_trait(?Send)]
pub trait MenuStore {
    /// List all menus
    async fn list_menus(&self) -> StoreResult<Vec<MenuSummary>>;

    /// Load one menu with its items
    async fn get_menu(&self, id: &MenuId) -> StoreResult<MenuRecord>;

    /// Replace a menu wholesale; returns the server's authoritative copy
    async fn replace_menu(&self, id: &MenuId, payload: &MenuPayload) -> StoreResult<MenuRecord>;

    /// Create a menu from an already validated submission
    async fn create_menu(&self, menu: &NewMenu) -> StoreResult<MenuSummary>;

    /// Delete a menu
    async fn delete_menu(&self, id: &MenuId) -> StoreResult<()>;
}

/// Narrative and structured waste summaries for a (menu, scope) pair
#[async_trait(?Send)]
pub trait SummarySource {
    async fn fetch_summary(&self, id: &MenuId, scope: Scope) -> StoreResult<String>;

    async fn fetch_waste_report(&self, id: &MenuId, scope: Scope) -> StoreResult<WasteReport>;
}
