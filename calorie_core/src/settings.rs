//! # Calculator Settings
//!
//! Constants the engine uses to turn a daily calorie deficit into projected
//! weight change. Defaults match the classic rule of thumb (7700 kcal per kg
//! of body fat, 3500 kcal per lb) and a four-week month.
//!
//! Settings serialize to JSON; missing fields fall back to their defaults.
//!
//! ```rust
//! use calorie_core::settings::CalculatorSettings;
//!
//! let settings = CalculatorSettings::from_json(r#"{ "weeks_per_month": 4.345 }"#).unwrap();
//! assert_eq!(settings.kcal_per_kg, 7700.0);
//! assert_eq!(settings.weeks_per_month, 4.345);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

/// Energy stored in one kilogram of body fat (kcal)
pub const DEFAULT_KCAL_PER_KG: f64 = 7700.0;

/// Energy stored in one pound of body fat (kcal)
pub const DEFAULT_KCAL_PER_LB: f64 = 3500.0;

pub const DEFAULT_DAYS_PER_WEEK: f64 = 7.0;

pub const DEFAULT_WEEKS_PER_MONTH: f64 = 4.0;

/// Tunable constants for weight-change projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// kcal deficit per kilogram lost (metric profiles)
    pub kcal_per_kg: f64,

    /// kcal deficit per pound lost (imperial profiles)
    pub kcal_per_lb: f64,

    /// Days in a projection week
    pub days_per_week: f64,

    /// Weeks in a projection month
    pub weeks_per_month: f64,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            kcal_per_kg: DEFAULT_KCAL_PER_KG,
            kcal_per_lb: DEFAULT_KCAL_PER_LB,
            days_per_week: DEFAULT_DAYS_PER_WEEK,
            weeks_per_month: DEFAULT_WEEKS_PER_MONTH,
        }
    }
}

impl CalculatorSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: CalculatorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Every constant must be a finite, strictly positive number.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("kcal_per_kg", self.kcal_per_kg),
            ("kcal_per_lb", self.kcal_per_lb),
            ("days_per_week", self.days_per_week),
            ("weeks_per_month", self.weeks_per_month),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Setting must be a positive number",
                ));
            }
        }
        Ok(())
    }

    /// kcal per unit of body mass for the given unit system.
    ///
    /// Tracks the unit of the weight fields: kg for metric, lb for imperial.
    pub fn kcal_per_mass_unit(&self, unit_system: UnitSystem) -> f64 {
        match unit_system {
            UnitSystem::Metric => self.kcal_per_kg,
            UnitSystem::Imperial => self.kcal_per_lb,
        }
    }
}
