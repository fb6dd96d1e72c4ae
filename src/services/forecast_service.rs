use chrono::NaiveDate;

use crate::domain::{ForecastSettings, RecurringItem, ScenarioItem, TimelineMonth};
use crate::forecast;

/// Headline figures for the forecast dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyFigures {
    pub base_income_cents: i64,
    pub monthly_burn_cents: i64,
}

/// Projection entry points used by the forecast page handlers.
pub struct ForecastService;

impl ForecastService {
    /// Full timeline across the configured horizon.
    pub fn timeline(
        settings: &ForecastSettings,
        start_balance_cents: i64,
        recurring_items: &[RecurringItem],
        scenarios: &[ScenarioItem],
        start_date: NaiveDate,
    ) -> Vec<TimelineMonth> {
        tracing::debug!(
            month_count = settings.month_count,
            start_balance_cents,
            recurring = recurring_items.len(),
            scenarios = scenarios.len(),
            %start_date,
            "calculating timeline"
        );
        forecast::calculate_timeline(
            settings,
            start_balance_cents,
            recurring_items,
            scenarios,
            start_date,
        )
    }

    /// Monthly income and burn, shown above the timeline.
    pub fn monthly_figures(
        settings: &ForecastSettings,
        recurring_items: &[RecurringItem],
    ) -> MonthlyFigures {
        MonthlyFigures {
            base_income_cents: forecast::base_monthly_income(recurring_items),
            monthly_burn_cents: forecast::calculate_monthly_burn(
                recurring_items,
                settings.variable_costs_cents,
            ),
        }
    }
}
