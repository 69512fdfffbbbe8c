//! Weight entry model
//!
//! A single body-weight measurement, always in kilograms.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A body-weight measurement
///
/// `date` may carry a time of day; several entries on the same day are
/// allowed and are treated as separate samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDateTime,
    pub weight: f64, // kg
}

impl WeightEntry {
    pub fn new(date: NaiveDateTime, weight: f64) -> Self {
        Self { date, weight }
    }

    /// Entry recorded at midnight of `day`
    pub fn on_day(day: NaiveDate, weight: f64) -> Self {
        Self::new(day.and_time(NaiveTime::MIN), weight)
    }

    /// Calendar day of the measurement, time of day discarded
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}
