//! Service configuration
//!
//! Read once at startup from the environment.

use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::units::WeightUnit;

/// Environment variable selecting the default display unit
pub const UNIT_ENV: &str = "WEIGHTCAST_UNIT";

/// Environment variable pinning the reference date (YYYY-MM-DD)
pub const TODAY_ENV: &str = "WEIGHTCAST_TODAY";

/// Runtime configuration for the MCP service
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Unit used when a request does not name one
    pub default_unit: WeightUnit,
    /// Fixed reference date, for reproducible runs
    pub fixed_today: Option<NaiveDate>,
}

impl ServiceConfig {
    /// Build from `WEIGHTCAST_UNIT` and `WEIGHTCAST_TODAY`
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let default_unit = match std::env::var(UNIT_ENV) {
            Ok(raw) => WeightUnit::from_str(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "unknown {}, using kg", UNIT_ENV);
                WeightUnit::Kg
            }),
            Err(_) => WeightUnit::Kg,
        };

        let fixed_today = std::env::var(TODAY_ENV).ok().and_then(|raw| {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|e| warn!(value = %raw, error = %e, "ignoring {}", TODAY_ENV))
                .ok()
        });

        Self {
            default_unit,
            fixed_today,
        }
    }

    /// Reference date for a computation
    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Local::now().date_naive())
    }
}
