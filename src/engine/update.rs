//! One-shot recomputation of every engine output

use serde::Serialize;
use tracing::debug;

use crate::models::{ProjectionPoint, WeightChangeMetric};

use super::goal::GoalEstimate;
use super::maintenance::estimate_maintenance;
use super::projection::generate_projection;
use super::summary::summarize_weight_changes;
use super::EngineInput;

/// Everything the engine knows about the current snapshot
///
/// Built wholesale on every call; a new snapshot replaces the old one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub estimated_maintenance: Option<i32>,
    pub days_remaining: Option<i64>,
    pub logic_description: String,
    pub progress_warning_message: String,
    pub projection_points: Vec<ProjectionPoint>,
    pub weight_change_metrics: Vec<WeightChangeMetric>,
}

/// Recompute all metrics from one input snapshot
///
/// The maintenance estimate is suppressed while calorie counting is off,
/// since it depends on logged intake.
pub fn update_metrics(input: &EngineInput<'_>) -> MetricsSnapshot {
    let settings = input.settings;

    let estimated_maintenance = if settings.is_calorie_counting_enabled {
        estimate_maintenance(input.weights, input.logs, input.today)
    } else {
        None
    };

    let goal = GoalEstimate::project(input);

    let projection_points = input
        .latest_weight()
        .map(|latest| generate_projection(latest.weight, input))
        .unwrap_or_default();

    let weight_change_metrics = summarize_weight_changes(input.weights, input.today);

    debug!(
        weights = input.weights.len(),
        logs = input.logs.len(),
        method = goal.method.as_str(),
        days_remaining = ?goal.days_remaining,
        points = projection_points.len(),
        "metrics updated"
    );

    MetricsSnapshot {
        estimated_maintenance,
        days_remaining: goal.days_remaining,
        logic_description: goal.logic_description.to_string(),
        progress_warning_message: goal.warning_message,
        projection_points,
        weight_change_metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyLog, EstimationMethod, GoalType, Settings, WeightEntry};
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn weights() -> Vec<WeightEntry> {
        vec![
            WeightEntry::on_day(today() - Duration::days(14), 81.0),
            WeightEntry::on_day(today() - Duration::days(4), 80.0),
        ]
    }

    fn logs() -> Vec<DailyLog> {
        (1..=20)
            .map(|d| DailyLog::new(today() - Duration::days(d), 2000))
            .collect()
    }

    #[test]
    fn test_idempotent() {
        let settings = Settings::default();
        let (w, l) = (weights(), logs());
        let input = EngineInput::new(&w, &l, &settings, today());

        assert_eq!(update_metrics(&input), update_metrics(&input));
    }

    #[test]
    fn test_full_snapshot() {
        let settings = Settings {
            target_weight: 75.0,
            goal_type: GoalType::Cutting,
            estimation_method: EstimationMethod::WeightTrend30Day,
            ..Settings::default()
        };
        let (w, l) = (weights(), logs());
        let input = EngineInput::new(&w, &l, &settings, today());

        let snapshot = update_metrics(&input);
        assert_eq!(snapshot.estimated_maintenance, Some(2770));
        // 5 kg at 0.1 kg/day
        assert_eq!(snapshot.days_remaining, Some(50));
        assert!(snapshot.progress_warning_message.is_empty());
        assert_eq!(snapshot.logic_description, "Based on 30-day weight trend");
        assert_eq!(snapshot.projection_points.len(), 3 * 61);
        assert_eq!(snapshot.weight_change_metrics.len(), 4);
    }

    #[test]
    fn test_calorie_counting_disabled_suppresses_maintenance() {
        let settings = Settings {
            is_calorie_counting_enabled: false,
            estimation_method: EstimationMethod::PerfectGoalAdherence,
            ..Settings::default()
        };
        let (w, l) = (weights(), logs());
        let input = EngineInput::new(&w, &l, &settings, today());

        let snapshot = update_metrics(&input);
        assert_eq!(snapshot.estimated_maintenance, None);
        assert_eq!(snapshot.logic_description, "Based on 30-day weight trend");
        assert_eq!(snapshot.projection_points.len(), 61);
    }

    #[test]
    fn test_empty_inputs() {
        let settings = Settings::default();
        let input = EngineInput::new(&[], &[], &settings, today());

        let snapshot = update_metrics(&input);
        assert_eq!(snapshot.estimated_maintenance, None);
        assert_eq!(snapshot.days_remaining, None);
        assert!(!snapshot.progress_warning_message.is_empty());
        assert!(snapshot.projection_points.is_empty());
        assert!(snapshot.weight_change_metrics.is_empty());
    }
}
