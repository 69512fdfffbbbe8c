//! Weight deltas over fixed lookback periods

use chrono::{Duration, NaiveDate};

use crate::models::{ChangePeriod, WeightChangeMetric, WeightEntry};

/// Most recent weigh-in on or before `target`
pub fn nearest_prior_sample(weights: &[WeightEntry], target: NaiveDate) -> Option<&WeightEntry> {
    weights
        .iter()
        .filter(|w| w.day() <= target)
        .max_by_key(|w| w.date)
}

fn oldest_sample(weights: &[WeightEntry]) -> Option<&WeightEntry> {
    weights.iter().min_by_key(|w| w.date)
}

/// Reference weigh-in for a period
///
/// Looks for the nearest prior sample first and falls back to the oldest
/// entry, so a short history still yields a best-effort delta.
fn reference_sample(
    weights: &[WeightEntry],
    period: ChangePeriod,
    today: NaiveDate,
) -> Option<&WeightEntry> {
    let exact = period
        .lookback_days()
        .and_then(|days| nearest_prior_sample(weights, today - Duration::days(days)));

    exact.or_else(|| oldest_sample(weights))
}

/// Deltas for 7, 30, 90 days and all time; empty without any weigh-ins
pub fn summarize_weight_changes(weights: &[WeightEntry], today: NaiveDate) -> Vec<WeightChangeMetric> {
    let Some(latest) = weights.iter().max_by_key(|w| w.date) else {
        return Vec::new();
    };

    ChangePeriod::ALL
        .iter()
        .map(|&period| {
            let delta = reference_sample(weights, period, today).map(|r| latest.weight - r.weight);
            WeightChangeMetric::new(period, delta)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn delta_for(metrics: &[WeightChangeMetric], period: ChangePeriod) -> Option<f64> {
        metrics.iter().find(|m| m.period == period).and_then(|m| m.delta)
    }

    #[test]
    fn test_empty_history() {
        assert!(summarize_weight_changes(&[], date(2024, 6, 15)).is_empty());
    }

    #[test]
    fn test_single_entry_reports_zero_everywhere() {
        let weights = vec![WeightEntry::on_day(date(2024, 6, 14), 80.0)];
        let metrics = summarize_weight_changes(&weights, date(2024, 6, 15));

        assert_eq!(metrics.len(), 4);
        for metric in &metrics {
            assert_eq!(metric.delta, Some(0.0), "{}", metric.period_label);
        }
    }

    #[test]
    fn test_nearest_prior_sample() {
        let today = date(2024, 6, 15);
        let weights = vec![
            WeightEntry::on_day(date(2024, 1, 1), 90.0),
            WeightEntry::on_day(date(2024, 5, 1), 84.0),
            WeightEntry::on_day(date(2024, 6, 1), 82.0),
            WeightEntry::on_day(date(2024, 6, 7), 81.0),
            WeightEntry::on_day(date(2024, 6, 8), 80.5),
            WeightEntry::on_day(date(2024, 6, 15), 80.0),
        ];
        let metrics = summarize_weight_changes(&weights, today);

        // 7 days back is 6/8
        assert_eq!(delta_for(&metrics, ChangePeriod::Week), Some(-0.5));
        // 30 days back is 5/16, nearest prior is 5/1
        assert_eq!(delta_for(&metrics, ChangePeriod::Month), Some(-4.0));
        // 90 days back is 3/17, nearest prior is 1/1
        assert_eq!(delta_for(&metrics, ChangePeriod::Quarter), Some(-10.0));
        assert_eq!(delta_for(&metrics, ChangePeriod::AllTime), Some(-10.0));
    }

    #[test]
    fn test_falls_back_to_oldest() {
        let today = date(2024, 6, 15);
        let weights = vec![
            WeightEntry::on_day(date(2024, 6, 10), 81.0),
            WeightEntry::on_day(date(2024, 6, 14), 80.0),
        ];
        let metrics = summarize_weight_changes(&weights, today);

        assert_eq!(delta_for(&metrics, ChangePeriod::Week), Some(-1.0));
        assert_eq!(delta_for(&metrics, ChangePeriod::Quarter), Some(-1.0));
    }

    #[test]
    fn test_labels_in_order() {
        let weights = vec![WeightEntry::on_day(date(2024, 6, 14), 80.0)];
        let labels: Vec<_> = summarize_weight_changes(&weights, date(2024, 6, 15))
            .iter()
            .map(|m| m.period_label)
            .collect();
        assert_eq!(labels, vec!["7 Days", "30 Days", "90 Days", "All Time"]);
    }

    #[test]
    fn test_nearest_prior_prefers_latest_time_of_day() {
        let day = date(2024, 6, 8);
        let weights = vec![
            WeightEntry::new(day.and_hms_opt(7, 0, 0).unwrap(), 81.0),
            WeightEntry::new(day.and_hms_opt(20, 0, 0).unwrap(), 82.0),
        ];
        assert_eq!(nearest_prior_sample(&weights, day).unwrap().weight, 82.0);
    }
}
