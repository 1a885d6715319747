//! Scheduled-entry domain models shared by the store and the projection.

pub mod category;
pub mod entry;
pub mod transaction;

pub use category::{Category, CategoryBook, CategoryLookup};
pub use entry::{EntryPatch, EntryStatus, FutureEntry};
pub use transaction::Transaction;
