use chrono::{Datelike, Duration, NaiveDate};

/// Adds whole months, clamping the day to the target month's length.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    shift_months(date, months as i32)
}

pub(crate) fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

/// First day of the month immediately after the month containing `date`.
/// This is month 0 of every projection.
pub fn first_forecast_month(date: NaiveDate) -> NaiveDate {
    shift_months(date.with_day(1).unwrap_or(date), 1)
}

/// Year+month equality; days are ignored.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Two-digit-year dash two-digit-month label, e.g. "25-04".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%y-%m").to_string()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}
