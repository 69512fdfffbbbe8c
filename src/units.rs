//! Display units for body weight
//!
//! The engine only ever sees kilograms. These helpers convert at the edges:
//! caller input into kg before a computation, results back out afterwards.

use serde::{Deserialize, Serialize};

/// Kilograms per pound (exact, international avoirdupois pound)
pub const KG_PER_LB: f64 = 0.453_592_37;

/// Unit a caller reads and writes weights in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.trim() {
            "kg" | "kgs" | "kilogram" | "kilograms" | "metric" => Some(WeightUnit::Kg),
            "lb" | "lbs" | "pound" | "pounds" | "imperial" => Some(WeightUnit::Lbs),
            _ => None,
        }
    }

    /// Kilograms in one of this unit
    pub fn kg_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Kg => 1.0,
            WeightUnit::Lbs => KG_PER_LB,
        }
    }

    /// Convert a value in this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        value * self.kg_per_unit()
    }

    /// Convert kilograms to this unit
    ///
    /// Also valid for deltas and kg/day rates, which scale the same way.
    pub fn from_kg(&self, kg: f64) -> f64 {
        kg / self.kg_per_unit()
    }
}
