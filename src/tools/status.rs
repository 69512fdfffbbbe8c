//! Weightcast Status Tool
//!
//! Runtime status of the service and the usage guide served to assistants.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::ServiceConfig;

/// Usage guide for AI assistants calling the engine tools
pub const ENGINE_INSTRUCTIONS: &str = r#"
# Weightcast Engine Instructions

Weightcast projects progress toward a target body weight. It stores nothing:
every call carries the full snapshot of weigh-ins, daily logs and settings.

## Request Shape

All engine tools take the same payload:

```
{
  "weights": [{"date": "2026-01-02T07:15:00", "weight": 81.4}, ...],
  "logs": [{"date": "2026-01-02", "calories_consumed": 2150}, ...],
  "settings": {
    "daily_goal": 1900,
    "target_weight": 75,
    "goal_type": "cutting",
    "maintenance_calories": 2500,
    "estimation_method": "weight_trend_30_day",
    "maintenance_tolerance": 1.0,
    "is_calorie_counting_enabled": true
  },
  "unit": "kg",
  "today": "2026-01-20"
}
```

- `unit` applies to every weight in and out (`kg` or `lbs`).
- `today` defaults to the server date. Today's log is always treated as incomplete.
- At most one log per date.

## Estimation Methods

| Method | Rate comes from | Needs |
|--------|-----------------|-------|
| weight_trend_30_day | first vs last weigh-in of the last 30 days | 2 weigh-ins at least a day apart |
| current_eating_habits | average intake of the last 7 days vs maintenance | 1 log in the last 7 days |
| perfect_goal_adherence | daily goal vs maintenance | nothing |

With `is_calorie_counting_enabled: false` only the weight trend is used.

## Tools

- `update_metrics` - everything at once
- `days_remaining` - days to target plus a message when no estimate exists
- `estimate_rate` - rate for one method
- `estimate_maintenance` - maintenance implied by the last 30 days
- `weight_change_summary` - change over 7, 30, 90 days and all time
- `projection_series` - 60-day straight-line forecasts per method

## Reading Results

- A missing `days_remaining` is normal. Show `progress_warning_message` instead.
- `estimated_maintenance` is advisory. Ask before saving it as the user's maintenance.
- For maintaining goals use `within_maintenance_tolerance`; no date is projected.
"#;

/// Runtime status of the Weightcast service
#[derive(Debug, Clone, Serialize)]
pub struct WeightcastStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Configuration in effect
    pub default_unit: &'static str,
    pub fixed_today: Option<String>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    config: ServiceConfig,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            start_time: Instant::now(),
            config,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> WeightcastStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        WeightcastStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_unit: self.config.default_unit.as_str(),
            fixed_today: self.config.fixed_today.map(|d| d.to_string()),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
