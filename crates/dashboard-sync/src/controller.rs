//! Dashboard Controller
//!
//! Owns the session state of the dashboard and sequences every backend call
//! that changes it. Runs on one event loop: operations interleave only at
//! network awaits, and state is never borrowed across an await.
//!
//! Operations that race (menu switches, scope switches, edits, refreshes)
//! take their tickets synchronously when called and hand back a future that
//! performs the I/O. The issue order is therefore the call order, whatever
//! order the caller later drives the futures in.

use std::cell::{Cell, RefCell};
use std::future::Future;

use crate::error::StoreResult;
use crate::generation::{Generation, Ticket};
use crate::ledger::ItemLedger;
use crate::model::{Item, MealPeriod, MenuId, MenuPayload, MenuRecord, MenuSummary, NewMenu, Scope, WasteReport};
use crate::reconciler::{Acknowledgement, EditReconciler, SyncStatus};
use crate::selection::{resolve_initial_selection, Location, Selection, SelectionStorage};
use crate::store::{MenuStore, SummarySource};
use crate::summary::{ReportCoordinator, ReportView, SummaryCoordinator, SummaryView};

/// Snapshot handed to the view layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub menus: Vec<MenuSummary>,
    pub selection: Selection,
    pub menu_name: String,
    pub ledger: ItemLedger,
    /// Menu the ledger was loaded from; edits persist to this id
    pub ledger_menu: Option<MenuId>,
    /// A menu load is outstanding
    pub loading: bool,
    pub error: Option<String>,
    pub sync: SyncStatus,
    pub summary: SummaryView,
    pub report: ReportView,
}

#[derive(Default)]
struct Inner {
    menus: Vec<MenuSummary>,
    selection: Selection,
    menu_name: String,
    ledger: ItemLedger,
    ledger_menu: Option<MenuId>,
    loading: bool,
    error: Option<String>,
    loads: Generation,
    reconciler: EditReconciler,
    summaries: SummaryCoordinator,
    reports: ReportCoordinator,
}

impl Inner {
    fn snapshot(&self) -> DashboardState {
        DashboardState {
            menus: self.menus.clone(),
            selection: self.selection.clone(),
            menu_name: self.menu_name.clone(),
            ledger: self.ledger.clone(),
            ledger_menu: self.ledger_menu.clone(),
            loading: self.loading,
            error: self.error.clone(),
            sync: self.reconciler.status().clone(),
            summary: self.summaries.view().clone(),
            report: self.reports.view().clone(),
        }
    }

    fn meal_period_of(&self, id: &MenuId) -> MealPeriod {
        self.menus
            .iter()
            .find(|m| &m.id == id)
            .map(|m| m.meal_period)
            .unwrap_or_default()
    }

    fn begin_load(&mut self) -> Ticket {
        self.loading = true;
        self.error = None;
        self.reconciler.reset();
        self.loads.issue()
    }

    fn edited_payload(&self, id: &MenuId, menu: &NewMenu) -> MenuPayload {
        let loaded: &[Item] = if self.ledger_menu.as_ref() == Some(id) { self.ledger.items() } else { &[] };
        let items = menu
            .items
            .iter()
            .map(|entry| {
                let mut item = Item::new(entry.name.clone(), u32::try_from(entry.quantity).unwrap_or(u32::MAX));
                if let Some(previous) = loaded.iter().find(|i| i.name == entry.name) {
                    item.taken = previous.taken.min(item.quantity);
                    item.wasted = previous.wasted;
                }
                item
            })
            .collect();
        MenuPayload { name: menu.name.clone(), meal_period: menu.meal_period, items }
    }

    fn clear_selection(&mut self) {
        self.selection.menu_id = None;
        self.menu_name.clear();
        self.ledger = ItemLedger::default();
        self.ledger_menu = None;
        self.loading = false;
        self.loads.invalidate();
        self.reconciler.reset();
        self.summaries.clear();
        self.reports.clear();
    }
}

/// Tickets for one summary + report round
struct SummaryRound {
    id: MenuId,
    scope: Scope,
    summary: Ticket,
    report: Ticket,
}

type Listener = Box<dyn Fn(&DashboardState)>;

pub struct DashboardController<B, S, L> {
    backend: B,
    storage: S,
    location: L,
    inner: RefCell<Inner>,
    initialized: Cell<bool>,
    listeners: RefCell<Vec<Listener>>,
}

impl<B, S, L> DashboardController<B, S, L>
where
    B: MenuStore + SummarySource,
    S: SelectionStorage,
    L: Location,
{
    pub fn new(backend: B, storage: S, location: L) -> Self {
        Self {
            backend,
            storage,
            location,
            inner: RefCell::new(Inner::default()),
            initialized: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
        }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> DashboardState {
        self.inner.borrow().snapshot()
    }

    /// Register a callback run after every visible state change
    pub fn subscribe(&self, listener: impl Fn(&DashboardState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn notify(&self) {
        let snapshot = self.state();
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }

    // ========================
    // Selection
    // ========================

    /// Resolve the initial menu and load it. Runs at most once per
    /// controller; later calls return immediately.
    pub async fn initialize(&self, route_param: Option<&str>) {
        if self.initialized.replace(true) {
            log::debug!("[SELECTION] Already initialized, skipping");
            return;
        }

        {
            let mut inner = self.inner.borrow_mut();
            inner.loading = true;
            inner.error = None;
        }
        self.notify();

        let menus = match self.backend.list_menus().await {
            Ok(menus) => menus,
            Err(e) => {
                log::error!("[SELECTION] Failed to list menus: {}", e);
                let mut inner = self.inner.borrow_mut();
                inner.loading = false;
                inner.error = Some(e.to_string());
                drop(inner);
                self.notify();
                return;
            }
        };

        let stored = self.storage.load();
        let resolved = resolve_initial_selection(&menus, route_param, stored.as_deref());
        log::info!(
            "[SELECTION] {} menus, route={:?}, stored={:?} -> {:?}",
            menus.len(),
            route_param,
            stored,
            resolved
        );
        self.inner.borrow_mut().menus = menus;

        match resolved {
            None => {
                self.inner.borrow_mut().clear_selection();
                self.notify();
            }
            Some(id) => {
                self.storage.save(&id);
                if route_param != Some(id.as_str()) {
                    self.location.replace_menu(&id);
                }
                self.switch_to(id).await;
            }
        }
    }

    /// Explicit menu switch: persist the choice, reload items, re-fetch
    /// the summary
    pub fn select_menu(&self, id: MenuId) -> impl Future<Output = ()> + '_ {
        log::info!("[SELECTION] Switching to menu {}", id);
        self.storage.save(&id);
        self.location.replace_menu(&id);
        self.switch_to(id)
    }

    /// Scope switch: summary and report only, items untouched
    pub fn set_scope(&self, scope: Scope) -> impl Future<Output = ()> + '_ {
        self.inner.borrow_mut().selection.scope = scope;
        self.refresh_summary()
    }

    fn switch_to(&self, id: MenuId) -> impl Future<Output = ()> + '_ {
        let (load, round) = {
            let mut inner = self.inner.borrow_mut();
            inner.selection.menu_id = Some(id.clone());
            let load = inner.begin_load();
            let round = SummaryRound {
                id: id.clone(),
                scope: inner.selection.scope,
                summary: inner.summaries.begin(),
                report: inner.reports.begin(),
            };
            (load, round)
        };
        self.notify();

        async move {
            tokio::join!(self.run_load(load, id), self.run_summary_round(round));
        }
    }

    async fn run_load(&self, ticket: Ticket, id: MenuId) {
        let result = self.backend.get_menu(&id).await;
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.loads.is_current(ticket) {
                log::debug!("[LEDGER] Dropping stale load of menu {}", id);
                return;
            }
            inner.loading = false;
            match result {
                Ok(menu) => {
                    log::debug!("[LEDGER] Loaded {} items for menu {}", menu.items.len(), id);
                    inner.ledger = ItemLedger::from_menu(&menu);
                    inner.menu_name = menu.name;
                    inner.ledger_menu = Some(id);
                }
                Err(e) => {
                    log::error!("[LEDGER] Failed to load menu {}: {}", id, e);
                    inner.ledger = ItemLedger::default();
                    inner.menu_name.clear();
                    inner.ledger_menu = None;
                    inner.error = Some(e.to_string());
                }
            }
        }
        self.notify();
    }

    // ========================
    // Summary
    // ========================

    /// Re-issue summary and report for the current (menu, scope) with new
    /// tags. Does nothing while no menu is selected.
    pub fn refresh_summary(&self) -> impl Future<Output = ()> + '_ {
        let round = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            inner.selection.menu_id.clone().map(|id| SummaryRound {
                id,
                scope: inner.selection.scope,
                summary: inner.summaries.begin(),
                report: inner.reports.begin(),
            })
        };
        if round.is_some() {
            self.notify();
        }

        async move {
            if let Some(round) = round {
                self.run_summary_round(round).await;
            }
        }
    }

    async fn run_summary_round(&self, round: SummaryRound) {
        let SummaryRound { id, scope, summary, report } = round;
        tokio::join!(self.run_summary(summary, &id, scope), self.run_report(report, &id, scope));
    }

    async fn run_summary(&self, ticket: Ticket, id: &MenuId, scope: Scope) {
        let result: StoreResult<String> = self.backend.fetch_summary(id, scope).await;
        let applied = self.inner.borrow_mut().summaries.complete(ticket, result);
        if applied {
            self.notify();
        }
    }

    async fn run_report(&self, ticket: Ticket, id: &MenuId, scope: Scope) {
        let result: StoreResult<WasteReport> = self.backend.fetch_waste_report(id, scope).await;
        let applied = self.inner.borrow_mut().reports.complete(ticket, result);
        if applied {
            self.notify();
        }
    }

    // ========================
    // Quantity Edits
    // ========================

    /// Apply a "taken" edit to the ledger now and return the future that
    /// persists the full item list.
    pub fn edit_taken(&self, index: usize, raw_value: &str) -> impl Future<Output = ()> + '_ {
        let request = self.apply_edit(index, raw_value);

        async move {
            let Some((ticket, id, payload)) = request else {
                return;
            };
            let result = self.backend.replace_menu(&id, &payload).await;
            self.finish_edit(ticket, &id, result);
        }
    }

    fn apply_edit(&self, index: usize, raw_value: &str) -> Option<(Ticket, MenuId, MenuPayload)> {
        let (ticket, id) = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            if inner.loading {
                log::warn!("[LEDGER] Ignoring edit while a menu is loading");
                return None;
            }
            let Some(id) = inner.ledger_menu.clone() else {
                log::warn!("[LEDGER] Ignoring edit with no menu loaded");
                return None;
            };
            let (ledger, ticket) = inner.reconciler.apply(&inner.ledger, index, raw_value)?;
            inner.ledger = ledger;
            (ticket, id)
        };
        // Optimistic value is visible before the request leaves
        self.notify();

        let payload = {
            let mut inner = self.inner.borrow_mut();
            inner.reconciler.begin_persist();
            MenuPayload {
                name: inner.menu_name.clone(),
                meal_period: inner.meal_period_of(&id),
                items: inner.ledger.items().to_vec(),
            }
        };
        self.notify();
        Some((ticket, id, payload))
    }

    fn finish_edit(&self, ticket: Ticket, id: &MenuId, result: StoreResult<MenuRecord>) {
        let failed = {
            let mut inner = self.inner.borrow_mut();
            match result {
                Ok(menu) => {
                    if inner.reconciler.confirm(ticket) == Acknowledgement::Apply {
                        inner.ledger = ItemLedger::from_menu(&menu);
                        inner.menu_name = menu.name;
                    } else {
                        log::debug!("[LEDGER] Save of menu {} superseded, keeping local items", id);
                    }
                    false
                }
                Err(e) => {
                    log::error!("[LEDGER] Failed to save menu {}: {}", id, e);
                    inner.reconciler.fail(&e);
                    true
                }
            }
        };
        self.notify();

        if failed {
            self.inner.borrow_mut().reconciler.settle();
            self.notify();
        }
    }

    // ========================
    // Menu Management
    // ========================

    /// Validate and create a menu, then switch to it. Validation and
    /// backend failures are returned as the form's inline message.
    pub async fn create_menu(&self, menu: NewMenu) -> Result<MenuId, String> {
        let menu = menu.validate().map_err(|e| e.to_string())?;
        let created = self.backend.create_menu(&menu).await.map_err(|e| {
            log::error!("[MENUS] Failed to create menu: {}", e);
            e.to_string()
        })?;

        let id = created.id.clone();
        log::info!("[MENUS] Created menu {} ({})", created.name, id);
        self.inner.borrow_mut().menus.push(created);
        self.select_menu(id.clone()).await;
        Ok(id)
    }

    /// Replace a menu's name, meal period and item list. Items that stay on
    /// the loaded menu keep their taken and wasted counts. The dashboard
    /// reloads if the edited menu is the selected one.
    pub async fn edit_menu(&self, id: MenuId, menu: NewMenu) -> Result<(), String> {
        let menu = menu.validate().map_err(|e| e.to_string())?;
        let payload = self.inner.borrow().edited_payload(&id, &menu);

        let saved = self.backend.replace_menu(&id, &payload).await.map_err(|e| {
            log::error!("[MENUS] Failed to update menu {}: {}", id, e);
            e.to_string()
        })?;
        log::info!("[MENUS] Updated menu {} ({} items)", id, saved.items.len());

        let is_current = {
            let mut inner = self.inner.borrow_mut();
            if let Some(entry) = inner.menus.iter_mut().find(|m| m.id == id) {
                entry.name = saved.name.clone();
                entry.meal_period = saved.meal_period;
                entry.item_count = saved.items.len();
            }
            inner.selection.menu_id.as_ref() == Some(&id)
        };
        self.notify();

        if is_current {
            self.switch_to(id).await;
        }
        Ok(())
    }

    /// Delete a menu. If it was current, fall back to the first remaining
    /// menu or clear the selection.
    pub async fn delete_menu(&self, id: MenuId) -> Result<(), String> {
        self.backend.delete_menu(&id).await.map_err(|e| {
            log::error!("[MENUS] Failed to delete menu {}: {}", id, e);
            e.to_string()
        })?;

        let next = {
            let mut inner = self.inner.borrow_mut();
            inner.menus.retain(|m| m.id != id);
            if inner.selection.menu_id.as_ref() != Some(&id) {
                None
            } else {
                match inner.menus.first() {
                    Some(first) => Some(first.id.clone()),
                    None => {
                        inner.clear_selection();
                        self.storage.clear();
                        None
                    }
                }
            }
        };
        self.notify();

        if let Some(next) = next {
            self.select_menu(next).await;
        }
        Ok(())
    }
}
