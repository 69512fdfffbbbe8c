//! Engine output records
//!
//! Forecast points and period deltas. Never persisted.

use chrono::NaiveDate;
use serde::Serialize;

use super::EstimationMethod;

/// One day of a projected weight trajectory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub date: NaiveDate,
    pub projected_weight: f64, // kg
    pub method_label: &'static str,
}

impl ProjectionPoint {
    pub fn new(date: NaiveDate, projected_weight: f64, method: EstimationMethod) -> Self {
        Self {
            date,
            projected_weight,
            method_label: method.label(),
        }
    }
}

/// Fixed lookback windows for weight-change summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangePeriod {
    Week,
    Month,
    Quarter,
    AllTime,
}

impl ChangePeriod {
    pub const ALL: [ChangePeriod; 4] = [
        ChangePeriod::Week,
        ChangePeriod::Month,
        ChangePeriod::Quarter,
        ChangePeriod::AllTime,
    ];

    /// Days to look back, `None` for the whole history
    pub fn lookback_days(&self) -> Option<i64> {
        match self {
            ChangePeriod::Week => Some(7),
            ChangePeriod::Month => Some(30),
            ChangePeriod::Quarter => Some(90),
            ChangePeriod::AllTime => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangePeriod::Week => "7 Days",
            ChangePeriod::Month => "30 Days",
            ChangePeriod::Quarter => "90 Days",
            ChangePeriod::AllTime => "All Time",
        }
    }
}

/// Weight delta over one lookback period
///
/// `delta` is `None` only when there is no history to compare against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightChangeMetric {
    pub period: ChangePeriod,
    pub period_label: &'static str,
    pub delta: Option<f64>, // kg
}

impl WeightChangeMetric {
    pub fn new(period: ChangePeriod, delta: Option<f64>) -> Self {
        Self {
            period,
            period_label: period.label(),
            delta,
        }
    }
}
