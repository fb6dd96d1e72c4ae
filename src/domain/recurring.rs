use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Repeat cadence of a recurring income or expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecurringInterval {
    Monthly,
    Quarterly,
    Yearly,
}

/// A regularly repeating income (positive amount) or expense (negative).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecurringItem {
    pub id: Uuid,
    pub name: String,
    /// Signed cents; the sign encodes direction.
    pub amount_cents: i64,
    pub interval: RecurringInterval,
    /// Month of year (1-12) a quarterly/yearly item first falls due.
    /// Ignored for monthly items; treated as January when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_month: Option<u32>,
}

impl RecurringItem {
    pub fn new(name: impl Into<String>, amount_cents: i64, interval: RecurringInterval) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount_cents,
            interval,
            due_month: None,
        }
    }

    pub fn with_due_month(mut self, due_month: u32) -> Self {
        self.due_month = Some(due_month);
        self
    }

    /// Due month with the January default applied.
    pub fn due_month_or_default(&self) -> u32 {
        self.due_month.unwrap_or(1)
    }

    pub fn is_monthly(&self) -> bool {
        matches!(self.interval, RecurringInterval::Monthly)
    }

    /// Quarterly and yearly items are "irregular": they hit specific
    /// months instead of every month.
    pub fn is_irregular(&self) -> bool {
        !self.is_monthly()
    }

    /// True when the item falls due in the given month of year (1-12).
    /// Monthly items are due every month; quarterly items repeat at
    /// `due_month`, `+3`, `+6`, `+9`, wrapped back into 1-12.
    pub fn is_due_in(&self, month_of_year: u32) -> bool {
        let due = self.due_month_or_default();
        match self.interval {
            RecurringInterval::Monthly => true,
            RecurringInterval::Yearly => month_of_year == due,
            RecurringInterval::Quarterly => [0u32, 3, 6, 9].iter().any(|offset| {
                let mut candidate = due + offset;
                if candidate > 12 {
                    candidate -= 12;
                }
                candidate == month_of_year
            }),
        }
    }
}
