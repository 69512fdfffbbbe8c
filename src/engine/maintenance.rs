//! Maintenance calorie estimate from energy balance
//!
//! avg_intake = maintenance + weight_change * 7700 / days, solved for
//! maintenance over the span between the first and last weigh-in of the
//! trailing 30-day window.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{DailyLog, WeightEntry};

use super::window::{average_intake, logs_between, trend_span};
use super::KCAL_PER_KG;

/// Estimated maintenance calories (kcal/day), truncated toward zero
///
/// Intake is averaged over `[first weigh-in day, today)`; only days with
/// intake logged count, and today is left out. The result is advisory; it is never written back into settings.
pub fn estimate_maintenance(
    weights: &[WeightEntry],
    logs: &[DailyLog],
    today: NaiveDate,
) -> Option<i32> {
    let span = trend_span(weights, today)?;

    let window = logs_between(logs, span.first.day(), today);
    let eaten: Vec<&DailyLog> = window.into_iter().filter(|log| log.has_intake()).collect();
    let Some(avg_intake) = average_intake(&eaten) else {
        debug!("no logged intake in the trend window");
        return None;
    };

    let daily_balance = span.weight_change() * KCAL_PER_KG / span.days as f64;
    let maintenance = avg_intake - daily_balance;

    debug!(
        avg_intake,
        weight_change = span.weight_change(),
        days = span.days,
        maintenance,
        "estimated maintenance"
    );
    Some(maintenance as i32)
}
