use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled, not-yet-settled financial movement with a due date.
///
/// Negative amounts are expenses, positive amounts are income. Amounts are
/// signed minor units so totals stay exact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FutureEntry {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub due_date: NaiveDate,
    pub category_id: Option<Uuid>,
    pub status: EntryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_transaction_id: Option<Uuid>,
}

impl FutureEntry {
    /// Creates a pending entry with no category or linked transaction.
    pub fn new(
        owner_id: Uuid,
        description: impl Into<String>,
        amount_cents: i64,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            description: description.into(),
            amount_cents,
            due_date,
            category_id: None,
            status: EntryStatus::Pending,
            linked_transaction_id: None,
        }
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, EntryStatus::Pending)
    }

    pub fn is_reconciled(&self) -> bool {
        matches!(self.status, EntryStatus::Reconciled)
    }
}

/// Lifecycle of a future entry. Entries start pending and only the
/// reconciliation tracker moves them between states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EntryStatus {
    #[default]
    Pending,
    Reconciled,
}

/// User-editable fields of a future entry. Status and the transaction link
/// are owned by the reconciliation tracker and cannot be patched.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub description: Option<String>,
    pub amount_cents: Option<i64>,
    pub due_date: Option<NaiveDate>,
    /// `Some(None)` clears the category reference.
    pub category_id: Option<Option<Uuid>>,
}

impl EntryPatch {
    pub fn apply(&self, entry: &mut FutureEntry) {
        if let Some(description) = &self.description {
            entry.description = description.clone();
        }
        if let Some(amount_cents) = self.amount_cents {
            entry.amount_cents = amount_cents;
        }
        if let Some(due_date) = self.due_date {
            entry.due_date = due_date;
        }
        if let Some(category_id) = self.category_id {
            entry.category_id = category_id;
        }
    }
}
