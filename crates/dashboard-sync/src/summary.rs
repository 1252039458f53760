//! Summary Fetch Coordinator
//!
//! Last-issued-wins fetching of the narrative summary and the structured
//! waste report for the current (menu, scope). Every request is tagged when
//! issued; a response whose tag is no longer the latest is discarded
//! without touching visible state, whatever order the network delivers in.

use crate::error::StoreResult;
use crate::generation::{Generation, Ticket};
use crate::model::WasteReport;

/// Shown in place of the summary when the latest request failed
pub const SUMMARY_ERROR_TEXT: &str = "Error fetching summary";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SummaryView {
    pub text: Option<String>,
    /// Asserted only while the latest request is outstanding
    pub loading: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SummaryCoordinator {
    generation: Generation,
    view: SummaryView,
}

impl SummaryCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &SummaryView {
        &self.view
    }

    pub fn begin(&mut self) -> Ticket {
        self.view.loading = true;
        self.generation.issue()
    }

    /// Returns `true` if the result was applied, `false` if it was stale
    pub fn complete(&mut self, ticket: Ticket, result: StoreResult<String>) -> bool {
        if !self.generation.is_current(ticket) {
            log::debug!("[SUMMARY] Dropping stale response #{}", ticket.value());
            return false;
        }
        self.view.loading = false;
        self.view.text = Some(match result {
            Ok(text) => text,
            Err(e) => {
                log::error!("[SUMMARY] Fetch failed: {}", e);
                SUMMARY_ERROR_TEXT.to_string()
            }
        });
        true
    }

    /// Nothing selected anymore: supersede outstanding requests and clear
    pub fn clear(&mut self) {
        self.generation.invalidate();
        self.view = SummaryView::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportView {
    pub report: Option<WasteReport>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Same discipline as [`SummaryCoordinator`] for the waste report
#[derive(Debug, Clone, Default)]
pub struct ReportCoordinator {
    generation: Generation,
    view: ReportView,
}

impl ReportCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ReportView {
        &self.view
    }

    pub fn begin(&mut self) -> Ticket {
        self.view.loading = true;
        self.view.error = None;
        self.generation.issue()
    }

    pub fn complete(&mut self, ticket: Ticket, result: StoreResult<WasteReport>) -> bool {
        if !self.generation.is_current(ticket) {
            log::debug!("[REPORT] Dropping stale response #{}", ticket.value());
            return false;
        }
        self.view.loading = false;
        match result {
            Ok(report) => {
                self.view.report = Some(report);
                self.view.error = None;
            }
            Err(e) => {
                log::error!("[REPORT] Fetch failed: {}", e);
                self.view.report = None;
                self.view.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.generation.invalidate();
        self.view = ReportView::default();
    }
}
