use serde::{Deserialize, Serialize};

use super::{RecurringItem, ScenarioItem};

/// One projected month. Produced by the projector, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineMonth {
    /// 0-based offset from the projection start.
    pub index: usize,
    /// Two-digit-year dash two-digit-month label, e.g. "25-04".
    pub name: String,
    /// Running balance after this month's effects, in cents.
    pub balance_cents: i64,
    /// Active scenarios realized this month.
    pub scenarios: Vec<ScenarioItem>,
    /// Quarterly/yearly items that fell due this month.
    pub irregular_costs: Vec<RecurringItem>,
    /// The running balance went negative.
    pub is_critical: bool,
}
