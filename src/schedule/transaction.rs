use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A realized, posted financial movement. Future entries reconcile against
/// transactions by id; the link is weak in both directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub posted_date: NaiveDate,
    pub category_id: Option<Uuid>,
}

impl Transaction {
    pub fn new(
        owner_id: Uuid,
        description: impl Into<String>,
        amount_cents: i64,
        posted_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            description: description.into(),
            amount_cents,
            posted_date,
            category_id: None,
        }
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }
}
