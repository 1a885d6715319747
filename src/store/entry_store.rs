use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::ProjectionError;
use crate::schedule::{EntryPatch, EntryStatus, FutureEntry, Transaction};

/// Sole owner of future-entry and transaction state.
///
/// Single-writer, read-mostly: the bucketizer and the reconciliation tracker
/// operate on snapshots or short-lived borrows handed out by the store.
/// Every mutation bumps a monotonic revision, so callers poll [`revision`]
/// instead of diffing entry sets.
///
/// [`revision`]: EntryStore::revision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryStore {
    #[serde(default)]
    pub entries: Vec<FutureEntry>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(skip)]
    revision: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntryStore {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            entries: Vec::new(),
            transactions: Vec::new(),
            revision: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_entry(&mut self, entry: FutureEntry) -> Uuid {
        let id = entry.id;
        self.entries.push(entry);
        self.touch();
        id
    }

    pub fn entry(&self, id: Uuid) -> Option<&FutureEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub(crate) fn entry_mut(&mut self, id: Uuid) -> Option<&mut FutureEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    /// Applies user edits to an entry. Status and the transaction link stay
    /// under the reconciliation tracker's control.
    pub fn update_entry(&mut self, id: Uuid, patch: EntryPatch) -> Result<(), ProjectionError> {
        let entry = self
            .entry_mut(id)
            .ok_or(ProjectionError::EntryNotFound(id))?;
        patch.apply(entry);
        self.touch();
        Ok(())
    }

    pub fn remove_entry(&mut self, id: Uuid) -> Result<FutureEntry, ProjectionError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(ProjectionError::EntryNotFound(id))?;
        let removed = self.entries.remove(index);
        self.touch();
        debug!(entry_id = %id, "removed future entry");
        Ok(removed)
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Removes a transaction and reverts any entry reconciled against it to
    /// pending, so the entry reappears in the projection on the next read.
    pub fn remove_transaction(&mut self, id: Uuid) -> Result<Transaction, ProjectionError> {
        let index = self
            .transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or(ProjectionError::TransactionNotFound(id))?;
        let removed = self.transactions.remove(index);
        for entry in self
            .entries
            .iter_mut()
            .filter(|entry| entry.linked_transaction_id == Some(id))
        {
            entry.status = EntryStatus::Pending;
            entry.linked_transaction_id = None;
            debug!(entry_id = %entry.id, transaction_id = %id,
                "reverted entry to pending after linked transaction delete");
        }
        self.touch();
        Ok(removed)
    }

    /// Snapshot of one owner's entries, ordered by due date. The clones keep
    /// readers decoupled from subsequent writes.
    pub fn entries_for_owner(&self, owner_id: Uuid) -> Vec<FutureEntry> {
        let mut snapshot: Vec<FutureEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.owner_id == owner_id)
            .cloned()
            .collect();
        snapshot.sort_by_key(|entry| (entry.due_date, entry.id));
        snapshot
    }

    /// Monotonic change counter; bumps on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn has_changed_since(&self, revision: u64) -> bool {
        self.revision != revision
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.revision += 1;
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn due(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn update_patches_only_user_fields() {
        let mut store = EntryStore::new();
        let owner = Uuid::new_v4();
        let id = store.add_entry(FutureEntry::new(owner, "Gym", -9_900, due(2024, 6, 3)));

        store
            .update_entry(
                id,
                EntryPatch {
                    amount_cents: Some(-10_900),
                    ..EntryPatch::default()
                },
            )
            .unwrap();

        let entry = store.entry(id).unwrap();
        assert_eq!(entry.amount_cents, -10_900);
        assert!(entry.is_pending());
    }

    #[test]
    fn update_missing_entry_fails_with_not_found() {
        let mut store = EntryStore::new();
        let missing = Uuid::new_v4();
        let err = store
            .update_entry(missing, EntryPatch::default())
            .expect_err("update must fail for unknown id");
        assert_eq!(err, ProjectionError::EntryNotFound(missing));
    }

    #[test]
    fn remove_returns_the_deleted_entry() {
        let mut store = EntryStore::new();
        let owner = Uuid::new_v4();
        let id = store.add_entry(FutureEntry::new(owner, "Gym", -9_900, due(2024, 6, 3)));

        let removed = store.remove_entry(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(store.entry(id).is_none());
    }

    #[test]
    fn owner_snapshot_is_filtered_and_ordered() {
        let mut store = EntryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.add_entry(FutureEntry::new(alice, "Late", -100, due(2024, 6, 20)));
        store.add_entry(FutureEntry::new(bob, "Other", -100, due(2024, 6, 1)));
        store.add_entry(FutureEntry::new(alice, "Early", -100, due(2024, 6, 2)));

        let snapshot = store.entries_for_owner(alice);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].description, "Early");
        assert_eq!(snapshot[1].description, "Late");
    }

    #[test]
    fn every_mutation_bumps_the_revision() {
        let mut store = EntryStore::new();
        let owner = Uuid::new_v4();
        let seen = store.revision();
        assert!(!store.has_changed_since(seen));

        let id = store.add_entry(FutureEntry::new(owner, "Gym", -9_900, due(2024, 6, 3)));
        assert!(store.has_changed_since(seen));

        let after_add = store.revision();
        store.remove_entry(id).unwrap();
        assert!(store.has_changed_since(after_add));
    }
}
