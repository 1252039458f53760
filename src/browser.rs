//! Browser Adapters
//!
//! `localStorage` persistence of the last selected menu and history-based
//! location updates.

use dashboard_sync::{Location, MenuId, SelectionStorage};
use wasm_bindgen::JsValue;

use crate::route;

pub fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

// ========================
// Selection Storage
// ========================

pub struct LocalSelectionStorage {
    key: String,
}

impl LocalSelectionStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SelectionStorage for LocalSelectionStorage {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, id: &MenuId) {
        let Some(storage) = Self::storage() else {
            log::warn!("[STORAGE] localStorage unavailable, selection not remembered");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, id.as_str()) {
            log::warn!("[STORAGE] Failed to save selection: {:?}", e);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                log::warn!("[STORAGE] Failed to clear selection: {:?}", e);
            }
        }
    }
}

// ========================
// Location
// ========================

/// Rewrites the address bar in place; never adds a history entry
pub struct HistoryLocation;

impl Location for HistoryLocation {
    fn replace_menu(&self, id: &MenuId) {
        let path = route::dashboard_path(id);
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            log::warn!("[LOCATION] History API unavailable");
            return;
        };
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&path)) {
            log::warn!("[LOCATION] Failed to replace location with {}: {:?}", path, e);
        }
    }
}
