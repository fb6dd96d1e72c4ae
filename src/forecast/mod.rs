//! Deterministic balance projection over a monthly calendar.

pub mod calendar;
pub mod timeline;

pub use calendar::{add_months, first_forecast_month, month_label, same_month};
pub use timeline::{base_monthly_income, calculate_monthly_burn, calculate_timeline};
