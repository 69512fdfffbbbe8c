//! Goal projection and metabolic estimation engine
//!
//! Pure, synchronous calculations over a snapshot of weigh-ins, nutrition
//! logs and goal settings. Nothing here performs I/O, mutates its inputs or
//! knows about display units: every weight is kilograms, every rate is kg/day.
//!
//! "Cannot compute" is always an absent value (`None`), never an error.
//! Insufficient history is the normal state for new users.

mod goal;
mod maintenance;
mod projection;
mod rate;
mod summary;
mod update;
mod window;

use chrono::NaiveDate;

use crate::models::{DailyLog, Settings, WeightEntry};

pub use goal::{days_remaining, logic_description, warning_message, GoalEstimate};
pub use maintenance::estimate_maintenance;
pub use projection::generate_projection;
pub use rate::{eating_habits_rate, estimate_rate, goal_adherence_rate, weight_trend_rate};
pub use summary::{nearest_prior_sample, summarize_weight_changes};
pub use update::{update_metrics, MetricsSnapshot};
pub use window::{trend_span, TrendSpan};

// === Constants ===

/// Energy content of one kilogram of body-mass change (kcal).
pub const KCAL_PER_KG: f64 = 7700.0;

/// Lookback for the weight trend and the maintenance estimate (days).
pub const TREND_WINDOW_DAYS: i64 = 30;

/// Lookback for average intake, today excluded (days).
pub const HABITS_WINDOW_DAYS: i64 = 7;

/// Days projected forward from the latest weigh-in.
pub const PROJECTION_HORIZON_DAYS: i64 = 60;

/// One immutable snapshot of everything the engine reads
#[derive(Debug, Clone, Copy)]
pub struct EngineInput<'a> {
    pub weights: &'a [WeightEntry],
    pub logs: &'a [DailyLog],
    pub settings: &'a Settings,
    /// Reference calendar day; windows are measured back from here
    pub today: NaiveDate,
}

impl<'a> EngineInput<'a> {
    pub fn new(
        weights: &'a [WeightEntry],
        logs: &'a [DailyLog],
        settings: &'a Settings,
        today: NaiveDate,
    ) -> Self {
        Self {
            weights,
            logs,
            settings,
            today,
        }
    }

    /// Most recent weigh-in; on equal timestamps the later one in the slice wins
    pub fn latest_weight(&self) -> Option<&'a WeightEntry> {
        self.weights.iter().max_by_key(|w| w.date)
    }
}
