//! Request payloads and their validation
//!
//! Callers send dates as ISO strings and weights in their display unit.
//! Everything is parsed and converted to kilograms here, before the engine
//! sees it.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rmcp::schemars;
use serde::Deserialize;
use thiserror::Error;

use crate::config::ServiceConfig;
use crate::engine::EngineInput;
use crate::models::{DailyLog, EstimationMethod, GoalType, Settings, WeightEntry};
use crate::units::WeightUnit;

/// Input validation errors
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS")]
    InvalidDate(String),

    #[error("Weight on {date} must be a positive number, got {value}")]
    InvalidWeight { date: String, value: f64 },

    #[error("Target weight must be a positive number, got {0}")]
    InvalidTargetWeight(f64),

    #[error("Maintenance tolerance cannot be negative, got {0}")]
    NegativeTolerance(f64),

    #[error("Unknown unit '{0}': use kg or lbs")]
    UnknownUnit(String),

    #[error("Unknown goal type '{0}': use cutting, bulking or maintaining")]
    UnknownGoalType(String),

    #[error("Unknown estimation method '{0}': use weight_trend_30_day, current_eating_habits or perfect_goal_adherence")]
    UnknownMethod(String),

    #[error("More than one daily log for {0}")]
    DuplicateLogDate(NaiveDate),
}

/// A weigh-in as sent by the caller
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct WeightRecord {
    /// Date (YYYY-MM-DD) or timestamp (YYYY-MM-DDTHH:MM:SS, RFC 3339 also accepted)
    pub date: String,
    /// Body weight in the request's unit
    pub weight: f64,
}

/// One day of nutrition totals
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct LogRecord {
    /// Date (YYYY-MM-DD); any time of day is discarded
    pub date: String,
    /// Total calories eaten that day
    pub calories_consumed: u32,
    /// Calories burned through activity
    #[serde(default)]
    pub calories_burned: u32,
    pub protein: Option<u32>,
    pub carbs: Option<u32>,
    pub fat: Option<u32>,
}

/// Goal configuration as sent by the caller
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct SettingsRecord {
    /// Target daily calories
    pub daily_goal: i32,
    /// Target weight in the request's unit
    pub target_weight: f64,
    /// cutting, bulking or maintaining
    pub goal_type: String,
    /// Declared (or previously estimated) maintenance calories
    pub maintenance_calories: i32,
    /// weight_trend_30_day (default), current_eating_habits or perfect_goal_adherence
    #[serde(default = "default_method")]
    pub estimation_method: String,
    /// Allowed drift around the target when maintaining, in the request's unit
    #[serde(default)]
    pub maintenance_tolerance: f64,
    /// When false only the weight trend is used (default true)
    #[serde(default = "default_calorie_counting")]
    pub is_calorie_counting_enabled: bool,
}

fn default_method() -> String {
    EstimationMethod::WeightTrend30Day.as_str().to_string()
}

fn default_calorie_counting() -> bool {
    true
}

/// Full snapshot sent with every engine tool call
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct EngineRequest {
    /// Weigh-in history
    #[serde(default)]
    pub weights: Vec<WeightRecord>,
    /// Daily nutrition logs, at most one per date
    #[serde(default)]
    pub logs: Vec<LogRecord>,
    pub settings: SettingsRecord,
    /// kg or lbs for all weights in and out (defaults to the server setting)
    pub unit: Option<String>,
    /// Reference date YYYY-MM-DD (defaults to the server's today)
    pub today: Option<String>,
}

/// A validated snapshot, weights in kilograms
#[derive(Debug, Clone)]
pub struct ParsedRequest {
    pub weights: Vec<WeightEntry>,
    pub logs: Vec<DailyLog>,
    pub settings: Settings,
    pub unit: WeightUnit,
    pub today: NaiveDate,
}

impl ParsedRequest {
    /// Borrow as engine input
    pub fn input(&self) -> EngineInput<'_> {
        EngineInput::new(&self.weights, &self.logs, &self.settings, self.today)
    }

    /// Most recent weigh-in, in kg
    pub fn latest_weight(&self) -> Option<f64> {
        self.input().latest_weight().map(|w| w.weight)
    }
}

impl EngineRequest {
    /// Validate and convert to engine types
    pub fn parse(&self, config: &ServiceConfig) -> Result<ParsedRequest, InputError> {
        let unit = match self.unit.as_deref() {
            Some(raw) => parse_unit(raw)?,
            None => config.default_unit,
        };

        let today = match self.today.as_deref() {
            Some(raw) => parse_day(raw)?,
            None => config.today(),
        };

        let weights = self
            .weights
            .iter()
            .map(|record| parse_weight(record, unit))
            .collect::<Result<Vec<_>, _>>()?;

        let logs = parse_logs(&self.logs)?;
        let settings = parse_settings(&self.settings, unit)?;

        Ok(ParsedRequest {
            weights,
            logs,
            settings,
            unit,
            today,
        })
    }
}

pub fn parse_unit(raw: &str) -> Result<WeightUnit, InputError> {
    WeightUnit::from_str(raw).ok_or_else(|| InputError::UnknownUnit(raw.to_string()))
}

pub fn parse_method(raw: &str) -> Result<EstimationMethod, InputError> {
    EstimationMethod::from_str(raw).ok_or_else(|| InputError::UnknownMethod(raw.to_string()))
}

/// Parse a calendar day, dropping any time component
pub fn parse_day(raw: &str) -> Result<NaiveDate, InputError> {
    parse_timestamp(raw).map(|ts| ts.date())
}

/// Parse a date or timestamp; bare dates land on midnight
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, InputError> {
    let s = raw.trim();

    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(day.and_time(NaiveTime::MIN));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(ts);
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.naive_local());
    }

    Err(InputError::InvalidDate(raw.to_string()))
}

fn parse_weight(record: &WeightRecord, unit: WeightUnit) -> Result<WeightEntry, InputError> {
    if !record.weight.is_finite() || record.weight <= 0.0 {
        return Err(InputError::InvalidWeight {
            date: record.date.clone(),
            value: record.weight,
        });
    }
    let date = parse_timestamp(&record.date)?;
    Ok(WeightEntry::new(date, unit.to_kg(record.weight)))
}

fn parse_logs(records: &[LogRecord]) -> Result<Vec<DailyLog>, InputError> {
    let mut seen = HashSet::new();
    let mut logs = Vec::with_capacity(records.len());

    for record in records {
        let date = parse_day(&record.date)?;
        if !seen.insert(date) {
            return Err(InputError::DuplicateLogDate(date));
        }
        logs.push(
            DailyLog::new(date, record.calories_consumed)
                .with_macros(record.protein, record.carbs, record.fat)
                .with_burned(record.calories_burned),
        );
    }

    Ok(logs)
}

fn parse_settings(record: &SettingsRecord, unit: WeightUnit) -> Result<Settings, InputError> {
    if !record.target_weight.is_finite() || record.target_weight <= 0.0 {
        return Err(InputError::InvalidTargetWeight(record.target_weight));
    }
    if record.maintenance_tolerance.is_nan() || record.maintenance_tolerance < 0.0 {
        return Err(InputError::NegativeTolerance(record.maintenance_tolerance));
    }

    let goal_type = GoalType::from_str(&record.goal_type)
        .ok_or_else(|| InputError::UnknownGoalType(record.goal_type.clone()))?;

    Ok(Settings {
        daily_goal: record.daily_goal,
        target_weight: unit.to_kg(record.target_weight),
        goal_type,
        maintenance_calories: record.maintenance_calories,
        estimation_method: parse_method(&record.estimation_method)?,
        maintenance_tolerance: unit.to_kg(record.maintenance_tolerance),
        is_calorie_counting_enabled: record.is_calorie_counting_enabled,
    })
}
