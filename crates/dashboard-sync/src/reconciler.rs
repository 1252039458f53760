//! Quantity Edit Reconciler
//!
//! Optimistic-update-then-reconcile policy for "taken" edits:
//!
//! `Idle -> Applying -> Persisting -> Idle`, or `Persisting -> PersistFailed
//! -> Idle`. A failed persist is not retried and not rolled back: the edited
//! value stays visible and the ledger stays dirty until a later persist is
//! confirmed.

use crate::error::StoreError;
use crate::generation::{Generation, Ticket};
use crate::ledger::ItemLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    #[default]
    Idle,
    Applying,
    Persisting,
    PersistFailed,
}

/// Sync state of the ledger against the backend
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncStatus {
    pub phase: EditPhase,
    /// Local values not yet confirmed by the server
    pub dirty: bool,
    /// Persist requests issued and not yet resolved
    pub in_flight: u32,
    pub last_error: Option<String>,
}

impl SyncStatus {
    pub fn is_saving(&self) -> bool {
        self.in_flight > 0
    }
}

/// What to do with a persist response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    /// Latest edit confirmed: replace the ledger with the server copy
    Apply,
    /// Superseded by a newer edit or a menu reload: keep local state
    Ignore,
}

#[derive(Debug, Clone, Default)]
pub struct EditReconciler {
    edits: Generation,
    status: SyncStatus,
}

impl EditReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    /// Apply an edit optimistically. Returns the tentative ledger and the
    /// ticket its persist request must carry, or `None` for an invalid index.
    pub fn apply(&mut self, ledger: &ItemLedger, index: usize, raw_value: &str) -> Option<(ItemLedger, Ticket)> {
        self.status.phase = EditPhase::Applying;
        match ledger.with_taken_quantity(index, raw_value) {
            Some(updated) => {
                self.status.dirty = true;
                Some((updated, self.edits.issue()))
            }
            None => {
                self.settle();
                None
            }
        }
    }

    pub fn begin_persist(&mut self) {
        self.status.in_flight += 1;
        self.status.phase = EditPhase::Persisting;
    }

    /// Server accepted the write issued under `ticket`
    pub fn confirm(&mut self, ticket: Ticket) -> Acknowledgement {
        self.finish_request();
        if self.edits.is_current(ticket) {
            self.status.dirty = false;
            self.status.last_error = None;
            self.settle();
            Acknowledgement::Apply
        } else {
            self.settle();
            Acknowledgement::Ignore
        }
    }

    /// Server write failed; local values stay and remain dirty
    pub fn fail(&mut self, error: &StoreError) {
        self.finish_request();
        self.status.phase = EditPhase::PersistFailed;
        self.status.last_error = Some(error.to_string());
    }

    /// Leave a terminal phase once nothing is outstanding
    pub fn settle(&mut self) {
        self.status.phase = if self.status.in_flight > 0 {
            EditPhase::Persisting
        } else {
            EditPhase::Idle
        };
    }

    /// A different (or reloaded) menu replaces the ledger: outstanding
    /// persists may still resolve but must not touch the new ledger.
    pub fn reset(&mut self) {
        self.edits.invalidate();
        self.status.dirty = false;
        self.status.last_error = None;
        self.settle();
    }

    fn finish_request(&mut self) {
        self.status.in_flight = self.status.in_flight.saturating_sub(1);
    }
}
