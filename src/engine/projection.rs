//! Forecast series, one per estimation method

use chrono::Duration;

use crate::models::ProjectionPoint;

use super::rate::estimate_rate;
use super::{EngineInput, PROJECTION_HORIZON_DAYS};

/// Straight-line forecasts from `start_weight`, day 0 through day 60
///
/// Day 0 is `input.today`. Each method with a computable rate contributes
/// 61 points tagged with its label; methods without a rate contribute
/// nothing. The rate is held fixed over the whole horizon.
pub fn generate_projection(start_weight: f64, input: &EngineInput<'_>) -> Vec<ProjectionPoint> {
    let methods = input.settings.projected_methods();
    let mut points = Vec::with_capacity(methods.len() * (PROJECTION_HORIZON_DAYS as usize + 1));

    for &method in methods {
        let Some(rate) = estimate_rate(method, input) else {
            continue;
        };

        points.extend((0..=PROJECTION_HORIZON_DAYS).map(|offset| {
            ProjectionPoint::new(
                input.today + Duration::days(offset),
                start_weight + rate * offset as f64,
                method,
            )
        }));
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EstimationMethod, Settings, WeightEntry};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_only_goal_adherence_without_history() {
        let settings = Settings {
            daily_goal: 1730,
            maintenance_calories: 2500,
            ..Settings::default()
        };
        let input = EngineInput::new(&[], &[], &settings, date(2024, 6, 15));

        let points = generate_projection(80.0, &input);
        assert_eq!(points.len(), 61);
        assert!(points
            .iter()
            .all(|p| p.method_label == EstimationMethod::PerfectGoalAdherence.label()));
        assert_eq!(points[0].projected_weight, 80.0);
        assert_eq!(points[0].date, date(2024, 6, 15));
        assert_eq!(points[60].date, date(2024, 8, 14));
        assert!((points[60].projected_weight - 74.0).abs() < 1e-9);
    }

    #[test]
    fn test_series_per_method() {
        let today = date(2024, 6, 15);
        let settings = Settings::default();
        let weights = vec![
            WeightEntry::on_day(date(2024, 6, 1), 80.0),
            WeightEntry::on_day(date(2024, 6, 11), 78.0),
        ];
        let logs = vec![crate::models::DailyLog::new(date(2024, 6, 14), 2100)];
        let input = EngineInput::new(&weights, &logs, &settings, today);

        let points = generate_projection(78.0, &input);
        assert_eq!(points.len(), 3 * 61);

        for method in EstimationMethod::ALL {
            let series: Vec<_> = points
                .iter()
                .filter(|p| p.method_label == method.label())
                .collect();
            assert_eq!(series.len(), 61);
            assert_eq!(series[0].projected_weight, 78.0);
            assert!(series.windows(2).all(|w| w[0].date < w[1].date));
        }
    }

    #[test]
    fn test_trend_only_when_calorie_counting_disabled() {
        let today = date(2024, 6, 15);
        let settings = Settings {
            estimation_method: EstimationMethod::PerfectGoalAdherence,
            is_calorie_counting_enabled: false,
            ..Settings::default()
        };
        let weights = vec![
            WeightEntry::on_day(date(2024, 6, 1), 80.0),
            WeightEntry::on_day(date(2024, 6, 11), 78.0),
        ];
        let input = EngineInput::new(&weights, &[], &settings, today);

        let points = generate_projection(78.0, &input);
        assert_eq!(points.len(), 61);
        assert!((points[10].projected_weight - 76.0).abs() < 1e-9);
        assert!(points
            .iter()
            .all(|p| p.method_label == EstimationMethod::WeightTrend30Day.label()));
    }

    #[test]
    fn test_no_rate_no_points() {
        let settings = Settings {
            is_calorie_counting_enabled: false,
            ..Settings::default()
        };
        let input = EngineInput::new(&[], &[], &settings, date(2024, 6, 15));
        assert!(generate_projection(80.0, &input).is_empty());
    }
}
