//! Daily log model
//!
//! One day's nutrition totals as handed to the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nutrition totals for a single calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub calories_consumed: u32,
    #[serde(default)]
    pub calories_burned: u32,
    pub protein: Option<u32>, // grams
    pub carbs: Option<u32>,   // grams
    pub fat: Option<u32>,     // grams
}

impl DailyLog {
    /// A log with only intake recorded
    pub fn new(date: NaiveDate, calories_consumed: u32) -> Self {
        Self {
            date,
            calories_consumed,
            calories_burned: 0,
            protein: None,
            carbs: None,
            fat: None,
        }
    }

    /// Attach macro totals (grams); any of them may be unrecorded
    pub fn with_macros(
        mut self,
        protein: Option<u32>,
        carbs: Option<u32>,
        fat: Option<u32>,
    ) -> Self {
        self.protein = protein;
        self.carbs = carbs;
        self.fat = fat;
        self
    }

    /// Attach calories burned through activity
    pub fn with_burned(mut self, calories_burned: u32) -> Self {
        self.calories_burned = calories_burned;
        self
    }

    /// Whether any food was logged for the day
    pub fn has_intake(&self) -> bool {
        self.calories_consumed > 0
    }
}
