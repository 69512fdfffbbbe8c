//! Goal settings model
//!
//! The user's current goal configuration, supplied fresh on every
//! recomputation.

use serde::{Deserialize, Serialize};

/// Intended direction of weight change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Cutting,
    Bulking,
    Maintaining,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Cutting => "cutting",
            GoalType::Bulking => "bulking",
            GoalType::Maintaining => "maintaining",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cutting" | "cut" | "lose" => Some(GoalType::Cutting),
            "bulking" | "bulk" | "gain" => Some(GoalType::Bulking),
            "maintaining" | "maintain" | "maintenance" => Some(GoalType::Maintaining),
            _ => None,
        }
    }
}

/// Model used to predict the rate of weight change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimationMethod {
    /// Two-point slope of the last 30 days of weigh-ins
    WeightTrend30Day,
    /// Average intake over the last 7 days against maintenance
    CurrentEatingHabits,
    /// Daily goal against maintenance, no history needed
    PerfectGoalAdherence,
}

impl EstimationMethod {
    /// Every method, in display order
    pub const ALL: [EstimationMethod; 3] = [
        EstimationMethod::WeightTrend30Day,
        EstimationMethod::CurrentEatingHabits,
        EstimationMethod::PerfectGoalAdherence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EstimationMethod::WeightTrend30Day => "weight_trend_30_day",
            EstimationMethod::CurrentEatingHabits => "current_eating_habits",
            EstimationMethod::PerfectGoalAdherence => "perfect_goal_adherence",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "weight_trend_30_day" | "weight_trend" | "trend" => {
                Some(EstimationMethod::WeightTrend30Day)
            }
            "current_eating_habits" | "eating_habits" | "habits" => {
                Some(EstimationMethod::CurrentEatingHabits)
            }
            "perfect_goal_adherence" | "goal_adherence" | "adherence" => {
                Some(EstimationMethod::PerfectGoalAdherence)
            }
            _ => None,
        }
    }

    /// Stable label used to tag projection series
    pub fn label(&self) -> &'static str {
        match self {
            EstimationMethod::WeightTrend30Day => "30-Day Trend",
            EstimationMethod::CurrentEatingHabits => "Current Habits",
            EstimationMethod::PerfectGoalAdherence => "Perfect Adherence",
        }
    }

    /// Whether the method reads nutrition logs or calorie settings
    pub fn needs_calorie_counting(&self) -> bool {
        !matches!(self, EstimationMethod::WeightTrend30Day)
    }
}

/// Current goal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub daily_goal: i32,
    pub target_weight: f64, // kg
    pub goal_type: GoalType,
    pub maintenance_calories: i32,
    pub estimation_method: EstimationMethod,
    pub maintenance_tolerance: f64, // kg
    pub is_calorie_counting_enabled: bool,
}

impl Settings {
    /// Method that actually drives the headline estimate
    ///
    /// Nutrition-based methods are meaningless without logging, so the weight
    /// trend is forced when calorie counting is off.
    pub fn effective_method(&self) -> EstimationMethod {
        if self.is_calorie_counting_enabled {
            self.estimation_method
        } else {
            EstimationMethod::WeightTrend30Day
        }
    }

    /// Methods whose projections are worth drawing
    pub fn projected_methods(&self) -> &'static [EstimationMethod] {
        const TREND_ONLY: [EstimationMethod; 1] = [EstimationMethod::WeightTrend30Day];

        if self.is_calorie_counting_enabled {
            &EstimationMethod::ALL
        } else {
            &TREND_ONLY
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_goal: 2000,
            target_weight: 70.0,
            goal_type: GoalType::Cutting,
            maintenance_calories: 2500,
            estimation_method: EstimationMethod::WeightTrend30Day,
            maintenance_tolerance: 1.0,
            is_calorie_counting_enabled: true,
        }
    }
}
