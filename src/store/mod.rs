//! Canonical entry/transaction state and the reconciliation tracker.

pub mod entry_store;
pub mod reconciliation;

pub use entry_store::EntryStore;
pub use reconciliation::ReconciliationService;
