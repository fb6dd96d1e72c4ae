use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A one-off planned cash-flow event anchored to a specific month.
///
/// Inactive scenarios are retained for the user to toggle back on but
/// never affect projections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioItem {
    pub id: Uuid,
    pub name: String,
    /// Signed cents; positive inflow, negative outflow.
    pub amount_cents: i64,
    pub date: NaiveDate,
    pub is_active: bool,
}

impl ScenarioItem {
    pub fn new(name: impl Into<String>, amount_cents: i64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount_cents,
            date,
            is_active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
