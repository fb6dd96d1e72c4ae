use serde::{Deserialize, Serialize};

/// Per-user forecast parameters. Handlers load these from storage and pass
/// them explicitly; the projector keeps no ambient state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastSettings {
    /// Number of months to project.
    pub month_count: u32,
    /// Estimated discretionary spend per month, in cents, on top of the
    /// explicit monthly recurring expenses.
    pub variable_costs_cents: i64,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            month_count: 24,
            variable_costs_cents: 0,
        }
    }
}
