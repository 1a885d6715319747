//! Links future entries to realized transactions and drives the
//! pending ⇄ reconciled status transitions.

use tracing::debug;
use uuid::Uuid;

use crate::errors::ProjectionError;
use crate::schedule::EntryStatus;
use crate::store::EntryStore;

/// Provides validated status transitions for future entries.
///
/// The only legal transitions are `Pending -> Reconciled` via [`reconcile`]
/// and `Reconciled -> Pending` via [`unreconcile`]; a reconciled entry never
/// reverts on its own.
///
/// [`reconcile`]: ReconciliationService::reconcile
/// [`unreconcile`]: ReconciliationService::unreconcile
pub struct ReconciliationService;

impl ReconciliationService {
    /// Links a pending entry to an existing transaction and marks it
    /// reconciled.
    ///
    /// The transaction is looked up first so a reconcile racing a delete
    /// fails with not-found instead of creating a dangling link. A repeat
    /// call on an already-reconciled entry returns
    /// [`ProjectionError::AlreadyReconciled`]; retried callers treat that as
    /// success.
    pub fn reconcile(
        store: &mut EntryStore,
        entry_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<(), ProjectionError> {
        if store.transaction(transaction_id).is_none() {
            return Err(ProjectionError::TransactionNotFound(transaction_id));
        }
        let entry = store
            .entry_mut(entry_id)
            .ok_or(ProjectionError::EntryNotFound(entry_id))?;
        if entry.is_reconciled() {
            return Err(ProjectionError::AlreadyReconciled(entry_id));
        }
        entry.status = EntryStatus::Reconciled;
        entry.linked_transaction_id = Some(transaction_id);
        store.touch();
        debug!(entry_id = %entry_id, transaction_id = %transaction_id, "reconciled entry");
        Ok(())
    }

    /// Clears the transaction link and returns the entry to pending.
    pub fn unreconcile(store: &mut EntryStore, entry_id: Uuid) -> Result<(), ProjectionError> {
        let entry = store
            .entry_mut(entry_id)
            .ok_or(ProjectionError::EntryNotFound(entry_id))?;
        if !entry.is_reconciled() {
            return Err(ProjectionError::NotReconciled(entry_id));
        }
        entry.status = EntryStatus::Pending;
        entry.linked_transaction_id = None;
        store.touch();
        debug!(entry_id = %entry_id, "unreconciled entry");
        Ok(())
    }
}
