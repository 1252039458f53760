//! Application Context
//!
//! Hands the dashboard controller to components via the Leptos Context API.
//! Every action is started synchronously and driven by `spawn_local`, so
//! request order matches the order the user acted in.

use dashboard_sync::{DashboardController, MenuId, NewMenu, Scope};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpBackend;
use crate::browser::{HistoryLocation, LocalSelectionStorage};

pub type Controller = DashboardController<HttpBackend, LocalSelectionStorage, HistoryLocation>;

#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<&'static Controller, LocalStorage>,
}

impl AppContext {
    /// The controller lives for the whole page
    pub fn new(controller: &'static Controller) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    fn controller(&self) -> &'static Controller {
        self.controller.get_value()
    }

    pub fn initialize(&self, route_param: Option<String>) {
        let controller = self.controller();
        spawn_local(async move { controller.initialize(route_param.as_deref()).await });
    }

    pub fn select_menu(&self, id: MenuId) {
        spawn_local(self.controller().select_menu(id));
    }

    pub fn set_scope(&self, scope: Scope) {
        spawn_local(self.controller().set_scope(scope));
    }

    pub fn refresh_summary(&self) {
        spawn_local(self.controller().refresh_summary());
    }

    /// Raw input text of the "taken" cell at `index`
    pub fn edit_taken(&self, index: usize, raw_value: &str) {
        spawn_local(self.controller().edit_taken(index, raw_value));
    }

    pub fn create_menu(&self, menu: NewMenu, on_done: impl FnOnce(Result<MenuId, String>) + 'static) {
        let controller = self.controller();
        spawn_local(async move { on_done(controller.create_menu(menu).await) });
    }

    pub fn edit_menu(&self, id: MenuId, menu: NewMenu, on_done: impl FnOnce(Result<(), String>) + 'static) {
        let controller = self.controller();
        spawn_local(async move { on_done(controller.edit_menu(id, menu).await) });
    }

    pub fn delete_menu(&self, id: MenuId, on_done: impl FnOnce(Result<(), String>) + 'static) {
        let controller = self.controller();
        spawn_local(async move { on_done(controller.delete_menu(id).await) });
    }
}
