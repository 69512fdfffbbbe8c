//! Data models
//!
//! Plain value types passed into and out of the engine.

mod daily_log;
mod metrics;
mod settings;
mod weight_entry;

pub use daily_log::DailyLog;
pub use metrics::{ChangePeriod, ProjectionPoint, WeightChangeMetric};
pub use settings::{EstimationMethod, GoalType, Settings};
pub use weight_entry::WeightEntry;
