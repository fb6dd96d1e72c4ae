use chrono::NaiveDate;

use crate::currency;
use crate::domain::{Account, AssetSnapshot};
use crate::forecast::calendar::add_months;

use super::{ServiceError, ServiceResult};

/// Months that must pass before another snapshot may be approved.
const SNAPSHOT_COOLDOWN_MONTHS: u32 = 2;

/// True when enough time has passed since the last snapshot to approve a
/// new one. The boundary is inclusive: exactly two months later counts.
pub fn calculate_approvable(last_snapshot: NaiveDate, now: NaiveDate) -> bool {
    now >= add_months(last_snapshot, SNAPSHOT_COOLDOWN_MONTHS)
}

/// Snapshot workflow the settings and forecast handlers call into.
pub struct SnapshotService;

impl SnapshotService {
    /// Gate for the "create snapshot" action. A first-ever snapshot is
    /// always approvable.
    pub fn ensure_approvable(
        last_snapshot: Option<NaiveDate>,
        now: NaiveDate,
    ) -> ServiceResult<()> {
        match last_snapshot {
            None => Ok(()),
            Some(last) if calculate_approvable(last, now) => Ok(()),
            Some(last) => Err(ServiceError::SnapshotTooEarly {
                last_snapshot: last,
                earliest: add_months(last, SNAPSHOT_COOLDOWN_MONTHS),
            }),
        }
    }

    /// Materializes one snapshot per account for the given month.
    pub fn build_snapshots(
        accounts: &[Account],
        month: NaiveDate,
    ) -> ServiceResult<Vec<AssetSnapshot>> {
        if accounts.is_empty() {
            return Err(ServiceError::NoAccounts);
        }
        tracing::debug!(accounts = accounts.len(), %month, "building snapshots");
        Ok(accounts
            .iter()
            .map(|account| AssetSnapshot::for_account(account, month))
            .collect())
    }

    /// Parses a raw balance form value into cents, lifting validation
    /// failures into the service error taxonomy.
    pub fn parse_balance(raw: &str) -> ServiceResult<i64> {
        Ok(currency::parse_current_balance_value(raw)?)
    }
}
