//! Windowing shared by the trend rate and the maintenance estimate

use chrono::{Duration, NaiveDate};

use crate::models::{DailyLog, WeightEntry};

use super::TREND_WINDOW_DAYS;

/// First and last weigh-in of the trailing trend window
#[derive(Debug, Clone, Copy)]
pub struct TrendSpan<'a> {
    pub first: &'a WeightEntry,
    pub last: &'a WeightEntry,
    /// Whole calendar days between the two, always >= 1
    pub days: i64,
}

impl TrendSpan<'_> {
    /// last - first, in kg
    pub fn weight_change(&self) -> f64 {
        self.last.weight - self.first.weight
    }

    /// Two-point slope in kg/day
    pub fn slope(&self) -> f64 {
        self.weight_change() / self.days as f64
    }
}

/// First day of the trailing trend window
pub(crate) fn trend_window_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(TREND_WINDOW_DAYS)
}

/// Weigh-ins on or after `today - 30 days`, oldest first
///
/// The sort is stable, so same-timestamp entries keep their slice order.
pub(crate) fn recent_weights(weights: &[WeightEntry], today: NaiveDate) -> Vec<&WeightEntry> {
    let start = trend_window_start(today);
    let mut recent: Vec<&WeightEntry> = weights.iter().filter(|w| w.day() >= start).collect();
    recent.sort_by_key(|w| w.date);
    recent
}

/// Oldest and newest weigh-in of the trend window
///
/// Needs two separate entries at least one calendar day apart. Entries are
/// told apart by position, so two identical readings still count as two.
pub fn trend_span(weights: &[WeightEntry], today: NaiveDate) -> Option<TrendSpan<'_>> {
    let recent = recent_weights(weights, today);
    if recent.len() < 2 {
        return None;
    }

    let first = recent[0];
    let last = recent[recent.len() - 1];
    let days = (last.day() - first.day()).num_days();
    if days < 1 {
        return None;
    }

    Some(TrendSpan { first, last, days })
}

/// Logs with `start <= date < end`
pub(crate) fn logs_between(logs: &[DailyLog], start: NaiveDate, end: NaiveDate) -> Vec<&DailyLog> {
    logs.iter()
        .filter(|log| log.date >= start && log.date < end)
        .collect()
}

/// Mean `calories_consumed`, `None` for an empty slice
pub(crate) fn average_intake(logs: &[&DailyLog]) -> Option<f64> {
    if logs.is_empty() {
        return None;
    }
    let total: f64 = logs.iter().map(|log| log.calories_consumed as f64).sum();
    Some(total / logs.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_span_requires_two_entries() {
        let today = date(2024, 3, 31);
        let weights = vec![WeightEntry::on_day(date(2024, 3, 20), 80.0)];
        assert!(trend_span(&weights, today).is_none());
    }

    #[test]
    fn test_span_requires_a_full_day() {
        let today = date(2024, 3, 31);
        let day = date(2024, 3, 20);
        let weights = vec![
            WeightEntry::new(day.and_hms_opt(7, 0, 0).unwrap(), 80.0),
            WeightEntry::new(day.and_hms_opt(21, 0, 0).unwrap(), 81.0),
        ];
        assert!(trend_span(&weights, today).is_none());
    }

    #[test]
    fn test_span_counts_identical_readings_separately() {
        let today = date(2024, 3, 31);
        let weights = vec![
            WeightEntry::on_day(date(2024, 3, 20), 80.0),
            WeightEntry::on_day(date(2024, 3, 21), 80.0),
        ];
        let span = trend_span(&weights, today).unwrap();
        assert_eq!(span.days, 1);
        assert_eq!(span.slope(), 0.0);
    }

    #[test]
    fn test_span_ignores_entries_before_window() {
        let today = date(2024, 3, 31);
        let weights = vec![
            WeightEntry::on_day(date(2024, 2, 1), 90.0),
            WeightEntry::on_day(date(2024, 3, 1), 82.0),
            WeightEntry::on_day(date(2024, 3, 11), 80.0),
        ];
        let span = trend_span(&weights, today).unwrap();
        assert_eq!(span.first.weight, 82.0);
        assert_eq!(span.days, 10);
    }

    #[test]
    fn test_span_sorts_unordered_input() {
        let today = date(2024, 3, 31);
        let weights = vec![
            WeightEntry::on_day(date(2024, 3, 25), 79.0),
            WeightEntry::on_day(date(2024, 3, 15), 80.0),
        ];
        let span = trend_span(&weights, today).unwrap();
        assert_eq!(span.first.weight, 80.0);
        assert_eq!(span.last.weight, 79.0);
    }

    #[test]
    fn test_span_uses_calendar_days_not_hours() {
        let today = date(2024, 3, 31);
        let weights = vec![
            WeightEntry::new(date(2024, 3, 20).and_hms_opt(23, 30, 0).unwrap(), 80.0),
            WeightEntry::new(date(2024, 3, 21).and_time(NaiveTime::MIN), 79.0),
        ];
        assert_eq!(trend_span(&weights, today).unwrap().days, 1);
    }

    #[test]
    fn test_logs_between_excludes_end() {
        let logs = vec![
            DailyLog::new(date(2024, 3, 24), 2000),
            DailyLog::new(date(2024, 3, 30), 2100),
            DailyLog::new(date(2024, 3, 31), 500),
        ];
        let selected = logs_between(&logs, date(2024, 3, 24), date(2024, 3, 31));
        assert_eq!(selected.len(), 2);
        assert_eq!(average_intake(&selected), Some(2050.0));
    }

    #[test]
    fn test_average_intake_empty() {
        assert_eq!(average_intake(&[]), None);
    }
}
