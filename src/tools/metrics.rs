//! Engine MCP Tools
//!
//! Each tool validates one request snapshot, runs the engine on it and
//! converts weights back into the caller's unit.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::info;

use crate::config::ServiceConfig;
use crate::engine::{self, GoalEstimate};
use crate::models::{ChangePeriod, EstimationMethod, GoalType, ProjectionPoint, WeightChangeMetric};
use crate::units::WeightUnit;

use super::inputs::{parse_method, EngineRequest, ParsedRequest};

/// Projection point in the caller's unit
#[derive(Debug, Serialize)]
pub struct ProjectionPointOut {
    pub date: NaiveDate,
    pub projected_weight: f64,
    pub method_label: &'static str,
}

/// Weight change metric in the caller's unit
#[derive(Debug, Serialize)]
pub struct WeightChangeOut {
    pub period: ChangePeriod,
    pub period_label: &'static str,
    pub delta: Option<f64>,
}

/// Response for update_metrics
#[derive(Debug, Serialize)]
pub struct UpdateMetricsResponse {
    pub today: NaiveDate,
    pub unit: &'static str,
    pub estimated_maintenance: Option<i32>,
    pub days_remaining: Option<i64>,
    pub logic_description: String,
    pub progress_warning_message: String,
    /// Only set for maintaining goals
    pub within_maintenance_tolerance: Option<bool>,
    pub projection_points: Vec<ProjectionPointOut>,
    pub weight_change_metrics: Vec<WeightChangeOut>,
}

/// Response for estimate_rate
#[derive(Debug, Serialize)]
pub struct EstimateRateResponse {
    pub method: &'static str,
    pub method_label: &'static str,
    pub unit: &'static str,
    pub rate_per_day: Option<f64>,
    pub rate_per_week: Option<f64>,
    pub logic_description: &'static str,
    /// True when the method was requested but calorie counting is off
    pub calorie_counting_required: bool,
}

/// Response for estimate_maintenance
#[derive(Debug, Serialize)]
pub struct EstimateMaintenanceResponse {
    pub estimated_maintenance: Option<i32>,
    pub declared_maintenance: i32,
    /// estimated - declared
    pub difference: Option<i32>,
}

/// Response for days_remaining
#[derive(Debug, Serialize)]
pub struct DaysRemainingResponse {
    pub method: &'static str,
    pub days_remaining: Option<i64>,
    pub estimated_goal_date: Option<NaiveDate>,
    pub logic_description: &'static str,
    pub warning_message: String,
    /// Only set for maintaining goals
    pub within_maintenance_tolerance: Option<bool>,
}

/// Response for weight_change_summary
#[derive(Debug, Serialize)]
pub struct WeightChangeSummaryResponse {
    pub unit: &'static str,
    pub current_weight: Option<f64>,
    pub metrics: Vec<WeightChangeOut>,
}

/// One forecast series
#[derive(Debug, Serialize)]
pub struct ProjectionSeries {
    pub method_label: &'static str,
    pub points: Vec<ProjectionPointOut>,
}

/// Response for projection_series
#[derive(Debug, Serialize)]
pub struct ProjectionSeriesResponse {
    pub unit: &'static str,
    pub start_weight: Option<f64>,
    pub series: Vec<ProjectionSeries>,
}

// ============================================================================
// Conversion Helpers
// ============================================================================

fn convert_points(points: &[ProjectionPoint], unit: WeightUnit) -> Vec<ProjectionPointOut> {
    points
        .iter()
        .map(|p| ProjectionPointOut {
            date: p.date,
            projected_weight: unit.from_kg(p.projected_weight),
            method_label: p.method_label,
        })
        .collect()
}

fn convert_metrics(metrics: &[WeightChangeMetric], unit: WeightUnit) -> Vec<WeightChangeOut> {
    metrics
        .iter()
        .map(|m| WeightChangeOut {
            period: m.period,
            period_label: m.period_label,
            delta: m.delta.map(|d| unit.from_kg(d)),
        })
        .collect()
}

/// Tolerance check for maintaining goals, left to the caller by the engine
fn within_tolerance(parsed: &ParsedRequest) -> Option<bool> {
    let settings = &parsed.settings;
    if settings.goal_type != GoalType::Maintaining {
        return None;
    }
    parsed
        .latest_weight()
        .map(|current| (current - settings.target_weight).abs() <= settings.maintenance_tolerance)
}

fn parse(config: &ServiceConfig, request: &EngineRequest) -> Result<ParsedRequest, String> {
    request
        .parse(config)
        .map_err(|e| format!("Invalid request: {}", e))
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Recompute the full metrics snapshot
pub fn update_metrics(
    config: &ServiceConfig,
    request: &EngineRequest,
) -> Result<UpdateMetricsResponse, String> {
    let parsed = parse(config, request)?;
    let snapshot = engine::update_metrics(&parsed.input());

    info!(
        weights = parsed.weights.len(),
        logs = parsed.logs.len(),
        days_remaining = ?snapshot.days_remaining,
        "update_metrics"
    );

    Ok(UpdateMetricsResponse {
        today: parsed.today,
        unit: parsed.unit.as_str(),
        estimated_maintenance: snapshot.estimated_maintenance,
        days_remaining: snapshot.days_remaining,
        within_maintenance_tolerance: within_tolerance(&parsed),
        projection_points: convert_points(&snapshot.projection_points, parsed.unit),
        weight_change_metrics: convert_metrics(&snapshot.weight_change_metrics, parsed.unit),
        logic_description: snapshot.logic_description,
        progress_warning_message: snapshot.progress_warning_message,
    })
}

/// Rate of change for one method (defaults to the settings' effective method)
pub fn estimate_rate(
    config: &ServiceConfig,
    request: &EngineRequest,
    method: Option<&str>,
) -> Result<EstimateRateResponse, String> {
    let parsed = parse(config, request)?;
    let method = match method {
        Some(raw) => parse_method(raw).map_err(|e| e.to_string())?,
        None => parsed.settings.effective_method(),
    };

    let blocked = method.needs_calorie_counting() && !parsed.settings.is_calorie_counting_enabled;
    let rate = if blocked {
        None
    } else {
        engine::estimate_rate(method, &parsed.input())
    };
    let rate = rate.map(|r| parsed.unit.from_kg(r));

    Ok(EstimateRateResponse {
        method: method.as_str(),
        method_label: method.label(),
        unit: parsed.unit.as_str(),
        rate_per_day: rate,
        rate_per_week: rate.map(|r| r * 7.0),
        logic_description: engine::logic_description(method),
        calorie_counting_required: blocked,
    })
}

/// Maintenance calories implied by recent weight change and intake
pub fn estimate_maintenance(
    config: &ServiceConfig,
    request: &EngineRequest,
) -> Result<EstimateMaintenanceResponse, String> {
    let parsed = parse(config, request)?;
    let declared = parsed.settings.maintenance_calories;

    let estimated = if parsed.settings.is_calorie_counting_enabled {
        engine::estimate_maintenance(&parsed.weights, &parsed.logs, parsed.today)
    } else {
        None
    };

    Ok(EstimateMaintenanceResponse {
        estimated_maintenance: estimated,
        declared_maintenance: declared,
        difference: estimated.map(|e| e - declared),
    })
}

/// Days until the target weight at the effective method's rate
pub fn days_remaining(
    config: &ServiceConfig,
    request: &EngineRequest,
) -> Result<DaysRemainingResponse, String> {
    let parsed = parse(config, request)?;
    let estimate = GoalEstimate::project(&parsed.input());

    Ok(DaysRemainingResponse {
        method: estimate.method.as_str(),
        days_remaining: estimate.days_remaining,
        estimated_goal_date: estimate
            .days_remaining
            .map(|days| parsed.today + Duration::days(days)),
        logic_description: estimate.logic_description,
        warning_message: estimate.warning_message,
        within_maintenance_tolerance: within_tolerance(&parsed),
    })
}

/// Weight deltas over 7, 30, 90 days and all time
pub fn weight_change_summary(
    config: &ServiceConfig,
    request: &EngineRequest,
) -> Result<WeightChangeSummaryResponse, String> {
    let parsed = parse(config, request)?;
    let metrics = engine::summarize_weight_changes(&parsed.weights, parsed.today);

    Ok(WeightChangeSummaryResponse {
        unit: parsed.unit.as_str(),
        current_weight: parsed.latest_weight().map(|w| parsed.unit.from_kg(w)),
        metrics: convert_metrics(&metrics, parsed.unit),
    })
}

/// 60-day forecasts from the latest weigh-in, grouped by method
pub fn projection_series(
    config: &ServiceConfig,
    request: &EngineRequest,
) -> Result<ProjectionSeriesResponse, String> {
    let parsed = parse(config, request)?;
    let Some(start) = parsed.latest_weight() else {
        return Ok(ProjectionSeriesResponse {
            unit: parsed.unit.as_str(),
            start_weight: None,
            series: Vec::new(),
        });
    };

    let points = engine::generate_projection(start, &parsed.input());
    let series = EstimationMethod::ALL
        .iter()
        .filter_map(|method| {
            let label = method.label();
            let own: Vec<ProjectionPoint> = points
                .iter()
                .filter(|p| p.method_label == label)
                .cloned()
                .collect();
            if own.is_empty() {
                return None;
            }
            Some(ProjectionSeries {
                method_label: label,
                points: convert_points(&own, parsed.unit),
            })
        })
        .collect();

    Ok(ProjectionSeriesResponse {
        unit: parsed.unit.as_str(),
        start_weight: Some(parsed.unit.from_kg(start)),
        series,
    })
}
