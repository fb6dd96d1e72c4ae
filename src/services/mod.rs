//! Thin service layer the hosting application's request handlers call
//! into. Validation failures and policy violations come back as typed
//! errors so handlers can branch on messaging instead of crashing.

pub mod forecast_service;
pub mod snapshot_service;

pub use forecast_service::{ForecastService, MonthlyFigures};
pub use snapshot_service::{calculate_approvable, SnapshotService};

use chrono::NaiveDate;

use crate::errors::BalanceInputError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Per-field validation failure; the message is rendered inline.
    #[error(transparent)]
    Validation(#[from] BalanceInputError),
    /// Snapshot cadence not yet satisfied.
    #[error("Snapshot not approvable before {earliest}; last snapshot was {last_snapshot}")]
    SnapshotTooEarly {
        last_snapshot: NaiveDate,
        earliest: NaiveDate,
    },
    /// Nothing to snapshot.
    #[error("No accounts are configured")]
    NoAccounts,
}
