//! Rate of weight change under each estimation method
//!
//! Rates are signed kg/day; negative means losing weight.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::models::{DailyLog, EstimationMethod, WeightEntry};

use super::window::{average_intake, logs_between, trend_span};
use super::{EngineInput, HABITS_WINDOW_DAYS, KCAL_PER_KG};

/// Rate for `method` over the given snapshot
pub fn estimate_rate(method: EstimationMethod, input: &EngineInput<'_>) -> Option<f64> {
    let settings = input.settings;
    let rate = match method {
        EstimationMethod::WeightTrend30Day => weight_trend_rate(input.weights, input.today),
        EstimationMethod::CurrentEatingHabits => {
            eating_habits_rate(input.logs, settings.maintenance_calories, input.today)
        }
        EstimationMethod::PerfectGoalAdherence => Some(goal_adherence_rate(
            settings.daily_goal,
            settings.maintenance_calories,
        )),
    };

    if rate.is_none() {
        debug!(method = method.as_str(), "rate not computable from current history");
    }
    rate
}

/// Slope between the first and last weigh-in of the last 30 days
///
/// Deliberately a two-point slope rather than a regression, so it follows
/// the most recent measured trend.
pub fn weight_trend_rate(weights: &[WeightEntry], today: NaiveDate) -> Option<f64> {
    trend_span(weights, today).map(|span| span.slope())
}

/// Average intake over `[today - 7, today)` against maintenance
///
/// Today is left out because the day is presumed incomplete.
pub fn eating_habits_rate(
    logs: &[DailyLog],
    maintenance_calories: i32,
    today: NaiveDate,
) -> Option<f64> {
    let start = today - Duration::days(HABITS_WINDOW_DAYS);
    let recent = logs_between(logs, start, today);
    let avg = average_intake(&recent)?;
    Some((avg - maintenance_calories as f64) / KCAL_PER_KG)
}

/// Rate if the daily goal were hit exactly every day
pub fn goal_adherence_rate(daily_goal: i32, maintenance_calories: i32) -> f64 {
    (daily_goal - maintenance_calories) as f64 / KCAL_PER_KG
}
