//! Days-to-goal projection and the messages shown alongside it

use serde::Serialize;
use tracing::debug;

use crate::models::{EstimationMethod, GoalType};

use super::rate::estimate_rate;
use super::EngineInput;

const TREND_WARNING: &str =
    "Need more weight data over 30 days, or trend is moving away from goal.";
const MAINTAINING_MESSAGE: &str = "Maintaining: no target date is projected";

/// Headline estimate for the effective method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalEstimate {
    pub method: EstimationMethod,
    pub rate: Option<f64>, // kg/day
    pub days_remaining: Option<i64>,
    pub logic_description: &'static str,
    /// Empty when `days_remaining` is present
    pub warning_message: String,
}

impl GoalEstimate {
    /// Estimate days to goal with the method the settings allow
    pub fn project(input: &EngineInput<'_>) -> Self {
        let settings = input.settings;
        let method = settings.effective_method();
        let rate = estimate_rate(method, input);

        let days = input.latest_weight().and_then(|latest| {
            days_remaining(latest.weight, settings.target_weight, settings.goal_type, rate)
        });

        let warning_message = match days {
            Some(_) => String::new(),
            None => warning_message(method, settings.goal_type, settings.maintenance_calories),
        };

        Self {
            method,
            rate,
            days_remaining: days,
            logic_description: logic_description(method),
            warning_message,
        }
    }
}

/// Whole days until `target` at `rate`, if the rate actually heads there
///
/// Cutting needs a negative rate and bulking a positive one; a flat rate
/// counts as the wrong direction for both. Maintaining is never projected.
pub fn days_remaining(
    current: f64,
    target: f64,
    goal_type: GoalType,
    rate: Option<f64>,
) -> Option<i64> {
    let rate = rate?;

    let heading_to_goal = match goal_type {
        GoalType::Cutting => rate < 0.0,
        GoalType::Bulking => rate > 0.0,
        GoalType::Maintaining => false,
    };
    if !heading_to_goal {
        debug!(rate, goal = goal_type.as_str(), "rate does not move toward goal");
        return None;
    }

    let days = (target - current) / rate;
    if !days.is_finite() || days <= 0.0 {
        return None;
    }
    Some(days as i64)
}

/// Short explanation of how `method` arrives at its rate
pub fn logic_description(method: EstimationMethod) -> &'static str {
    match method {
        EstimationMethod::WeightTrend30Day => "Based on 30-day weight trend",
        EstimationMethod::CurrentEatingHabits => {
            "Based on your average intake over the last 7 days"
        }
        EstimationMethod::PerfectGoalAdherence => "Based on hitting your daily goal every day",
    }
}

/// Why no estimate could be shown for `method` and `goal_type`
///
/// The weight trend has one message for every goal. The calorie-based
/// methods have none of their own for maintaining, which is never projected.
pub fn warning_message(
    method: EstimationMethod,
    goal_type: GoalType,
    maintenance_calories: i32,
) -> String {
    match (method, goal_type) {
        (EstimationMethod::WeightTrend30Day, _) => TREND_WARNING.to_string(),
        (_, GoalType::Maintaining) => MAINTAINING_MESSAGE.to_string(),
        (EstimationMethod::CurrentEatingHabits, GoalType::Cutting) => {
            "Eat less than maintenance on average to see estimate".to_string()
        }
        (EstimationMethod::CurrentEatingHabits, GoalType::Bulking) => {
            "Eat more than maintenance on average to see estimate".to_string()
        }
        (EstimationMethod::PerfectGoalAdherence, GoalType::Cutting) => format!(
            "Your daily goal must be lower than your maintenance ({})",
            maintenance_calories
        ),
        (EstimationMethod::PerfectGoalAdherence, GoalType::Bulking) => format!(
            "Your daily goal must be higher than your maintenance ({})",
            maintenance_calories
        ),
    }
}
