//! Calculation output types.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::units::UnitSystem;

/// Projected time to reach the goal weight.
///
/// A valid profile with no calorie deficit never reaches its goal; that case
/// is reported as `Unreachable` instead of a division-by-zero artifact.
///
/// ## JSON
///
/// ```json
/// { "status": "weeks", "value": 7.4 }
/// { "status": "unreachable" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum GoalEstimate {
    /// Goal reached after this many weeks at the current deficit
    Weeks(f64),
    /// Weekly weight change is zero; goal cannot be reached at current intake
    Unreachable,
}

impl GoalEstimate {
    /// Weeks to goal, or `None` when unreachable
    pub fn as_weeks(&self) -> Option<f64> {
        match self {
            GoalEstimate::Weeks(weeks) => Some(*weeks),
            GoalEstimate::Unreachable => None,
        }
    }

    /// Weeks to goal as a float, with `f64::INFINITY` for unreachable
    pub fn as_f64(&self) -> f64 {
        self.as_weeks().unwrap_or(f64::INFINITY)
    }

    /// Calendar date the goal is reached when starting on `start`.
    ///
    /// Partial days round up. Returns `None` when unreachable or when the
    /// date falls outside the representable calendar.
    ///
    /// ```rust
    /// use calorie_core::calculations::GoalEstimate;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let target = GoalEstimate::Weeks(2.0).target_date(start).unwrap();
    /// assert_eq!(target, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    /// ```
    pub fn target_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        let weeks = self.as_weeks()?;
        let days = (weeks * 7.0).ceil();
        if !days.is_finite() || days < 0.0 {
            return None;
        }
        start.checked_add_days(Days::new(days as u64))
    }
}

/// Derived calorie balance and projected weight change for one profile.
///
/// Weight-change fields are in the profile's weight unit (kg for metric,
/// lb for imperial); `unit_system` records which.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bmr": 1864.04,
///   "tdee": 2889.262,
///   "calorie_deficit": 1189.262,
///   "daily_weight_change": 0.15445,
///   "weekly_weight_change": 1.08115,
///   "monthly_weight_change": 4.32461,
///   "weeks_to_goal": { "status": "weeks", "value": 7.3996 },
///   "unit_system": "Metric"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,

    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,

    /// Daily calorie deficit, never negative (kcal/day)
    pub calorie_deficit: f64,

    /// Projected weight loss per day
    pub daily_weight_change: f64,

    /// Projected weight loss per week
    pub weekly_weight_change: f64,

    /// Projected weight loss per month
    pub monthly_weight_change: f64,

    pub weeks_to_goal: GoalEstimate,

    pub unit_system: UnitSystem,
}

impl CalculationResult {
    /// The not-computable result: every figure is zero.
    pub fn zero(unit_system: UnitSystem) -> Self {
        CalculationResult {
            bmr: 0.0,
            tdee: 0.0,
            calorie_deficit: 0.0,
            daily_weight_change: 0.0,
            weekly_weight_change: 0.0,
            monthly_weight_change: 0.0,
            weeks_to_goal: GoalEstimate::Weeks(0.0),
            unit_system,
        }
    }

    /// Whether every derived figure is zero
    pub fn is_zero(&self) -> bool {
        *self == CalculationResult::zero(self.unit_system)
    }

    /// Display label for the weight-change figures ("kg" or "lbs")
    pub fn weight_label(&self) -> &'static str {
        self.unit_system.weight_label()
    }
}
