use chrono::NaiveDate;
use forecast_core::domain::Account;
use forecast_core::services::{calculate_approvable, ServiceError, SnapshotService};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn approvable_exactly_at_the_two_month_boundary() {
    let last = date(2023, 1, 1);
    assert!(!calculate_approvable(last, date(2023, 2, 28)));
    assert!(calculate_approvable(last, date(2023, 3, 1)));
    assert!(calculate_approvable(last, date(2023, 3, 2)));
}

#[test]
fn approvable_three_months_later() {
    assert!(calculate_approvable(date(2023, 1, 1), date(2023, 4, 1)));
}

#[test]
fn not_approvable_one_day_early() {
    let last = date(2025, 4, 15);
    assert!(!calculate_approvable(last, date(2025, 6, 14)));
    assert!(calculate_approvable(last, date(2025, 6, 15)));
}

#[test]
fn boundary_clamps_when_the_target_month_is_shorter() {
    // Dec 31 + 2 months clamps to the end of February.
    let last = date(2024, 12, 31);
    assert!(!calculate_approvable(last, date(2025, 2, 27)));
    assert!(calculate_approvable(last, date(2025, 2, 28)));
}

#[test]
fn ensure_approvable_branches_match_the_pure_check() {
    let last = date(2025, 1, 10);
    assert!(SnapshotService::ensure_approvable(Some(last), date(2025, 3, 10)).is_ok());
    let err = SnapshotService::ensure_approvable(Some(last), date(2025, 3, 9)).unwrap_err();
    assert!(matches!(err, ServiceError::SnapshotTooEarly { .. }));
    assert!(SnapshotService::ensure_approvable(None, date(2025, 1, 1)).is_ok());
}

#[test]
fn snapshot_creation_flow_for_a_configured_household() {
    let accounts = vec![
        Account::new("Checking", 214_500),
        Account::new("Savings", 3_000_000),
        Account::new("Cash", 8_050),
    ];
    let month = date(2025, 5, 1);
    let snapshots = SnapshotService::build_snapshots(&accounts, month).unwrap();
    assert_eq!(snapshots.len(), accounts.len());
    let total: i64 = snapshots.iter().map(|s| s.balance_cents).sum();
    assert_eq!(total, 3_222_550);
    assert!(snapshots.iter().all(|s| s.month == month));
}

#[test]
fn snapshot_creation_fails_without_accounts() {
    let err = SnapshotService::build_snapshots(&[], date(2025, 5, 1)).unwrap_err();
    assert_eq!(err.to_string(), "No accounts are configured");
}
