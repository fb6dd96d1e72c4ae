use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal mirror of the persistence layer's account row, carried here as
/// a plain value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub balance_cents: i64,
}

impl Account {
    pub fn new(name: impl Into<String>, balance_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance_cents,
        }
    }
}

/// Point-in-time record of one account's balance, anchored to the first
/// day of a month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetSnapshot {
    pub id: Uuid,
    pub account_id: Uuid,
    /// First day of the snapshot month.
    pub month: NaiveDate,
    pub balance_cents: i64,
}

impl AssetSnapshot {
    pub fn for_account(account: &Account, month: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id: account.id,
            month,
            balance_cents: account.balance_cents,
        }
    }
}
