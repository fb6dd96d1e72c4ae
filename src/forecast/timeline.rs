use chrono::{Datelike, NaiveDate};

use crate::domain::{ForecastSettings, RecurringItem, ScenarioItem, TimelineMonth};

use super::calendar::{add_months, first_forecast_month, month_label, same_month};

/// Sum of the positive monthly recurring amounts, in cents.
pub fn base_monthly_income(recurring_items: &[RecurringItem]) -> i64 {
    recurring_items
        .iter()
        .filter(|item| item.is_monthly() && item.amount_cents > 0)
        .map(|item| item.amount_cents)
        .sum()
}

/// Expected monthly outflow, in cents: estimated variable costs plus the
/// absolute sum of the negative monthly recurring amounts. Agrees exactly
/// with the deduction [`calculate_timeline`] applies each month.
pub fn calculate_monthly_burn(recurring_items: &[RecurringItem], variable_costs_cents: i64) -> i64 {
    let fixed_expenses: i64 = recurring_items
        .iter()
        .filter(|item| item.is_monthly() && item.amount_cents < 0)
        .map(|item| item.amount_cents)
        .sum();
    variable_costs_cents + fixed_expenses.abs()
}

/// Projects the balance month by month across the configured horizon.
///
/// Month 0 is the month after the one containing `start_date`. Each month
/// applies, in order: base monthly income, monthly burn, quarterly/yearly
/// items falling due that month, then active scenarios dated anywhere in
/// that month. Irregular items and scenarios apply sign-aware, so an
/// expense (negative cents) lowers the balance and an income raises it.
/// The projector is total: any well-typed input yields a projection, and
/// a zero-month horizon yields an empty one.
pub fn calculate_timeline(
    settings: &ForecastSettings,
    start_balance_cents: i64,
    recurring_items: &[RecurringItem],
    scenarios: &[ScenarioItem],
    start_date: NaiveDate,
) -> Vec<TimelineMonth> {
    let base_income = base_monthly_income(recurring_items);
    let monthly_burn = calculate_monthly_burn(recurring_items, settings.variable_costs_cents);
    let first_month = first_forecast_month(start_date);

    let mut running_balance = start_balance_cents;
    let mut months = Vec::with_capacity(settings.month_count as usize);

    for index in 0..settings.month_count {
        running_balance += base_income;
        running_balance -= monthly_burn;

        let current_month = add_months(first_month, index);

        let irregular_costs: Vec<RecurringItem> = recurring_items
            .iter()
            .filter(|item| item.is_irregular() && item.is_due_in(current_month.month()))
            .cloned()
            .collect();
        let costs_total: i64 = irregular_costs.iter().map(|item| item.amount_cents).sum();
        running_balance += costs_total;

        let month_scenarios: Vec<ScenarioItem> = scenarios
            .iter()
            .filter(|scenario| scenario.is_active && same_month(scenario.date, current_month))
            .cloned()
            .collect();
        let scenarios_total: i64 = month_scenarios
            .iter()
            .map(|scenario| scenario.amount_cents)
            .sum();
        running_balance += scenarios_total;

        months.push(TimelineMonth {
            index: index as usize,
            name: month_label(current_month),
            balance_cents: running_balance,
            scenarios: month_scenarios,
            irregular_costs,
            is_critical: running_balance < 0,
        });
    }

    months
}
