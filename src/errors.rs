use thiserror::Error;
use uuid::Uuid;

/// Error type that captures entry-store and reconciliation failures.
///
/// Every variant is recoverable and scoped to a single operation. Callers
/// retrying a reconcile should treat [`ProjectionError::AlreadyReconciled`]
/// as success rather than retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Future entry not found: {0}")]
    EntryNotFound(Uuid),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Entry {0} is already reconciled")]
    AlreadyReconciled(Uuid),
    #[error("Entry {0} is not reconciled")]
    NotReconciled(Uuid),
}
