//! # Calculation Engine
//!
//! Converts a [`UserProfile`] into BMR, TDEE, calorie deficit and projected
//! weight change. Every operation is pure: no I/O, no shared state, safe to
//! call from any thread.
//!
//! ## Chain
//!
//! ```text
//! validate ─► normalize_to_metric ─► BMR ─► TDEE ─► deficit ─► daily ─► weekly ─► monthly
//!                                                                        └──► weeks to goal
//! ```
//!
//! A profile that fails [`CalculationEngine::validate`] short-circuits every
//! figure to zero. That is a defined result, not an error.
//!
//! ## Example
//!
//! ```rust
//! use calorie_core::calculations::engine::CalculationEngine;
//! use calorie_core::profile::{ActivityLevel, Sex, UserProfile};
//! use calorie_core::units::UnitSystem;
//!
//! let profile = UserProfile::new(UnitSystem::Metric, Sex::Male)
//!     .with_weights(80.0, 72.0)
//!     .with_height(180.0)
//!     .with_age(30)
//!     .with_calories(2000.0, 300.0)
//!     .with_activity_level(ActivityLevel::ModeratelyActive);
//!
//! let result = CalculationEngine::default().calculate(&profile);
//!
//! assert!((result.bmr - 1864.04).abs() < 1e-9);
//! assert!((result.weekly_weight_change - 1.0811).abs() < 1e-3);
//! println!("Weeks to goal: {:.1}", result.weeks_to_goal.as_f64());
//! ```

use tracing::{debug, trace};

use crate::errors::CalcResult;
use crate::profile::{Sex, UserProfile};
use crate::settings::CalculatorSettings;
use crate::units::{Centimeters, Inches, Kilograms, Pounds, UnitSystem};

use super::result::{CalculationResult, GoalEstimate};

/// Coefficients of the Harris-Benedict style BMR equation:
/// `base + weight × kg + height × cm − age × years`.
///
/// The values differ slightly from the commonly published Harris-Benedict
/// constants and are kept as they are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmrCoefficients {
    pub base: f64,
    pub weight: f64,
    pub height: f64,
    pub age: f64,
}

impl BmrCoefficients {
    pub const MALE: BmrCoefficients = BmrCoefficients {
        base: 66.0,
        weight: 13.75,
        height: 5.003,
        age: 6.75,
    };

    pub const FEMALE: BmrCoefficients = BmrCoefficients {
        base: 655.0,
        weight: 9.563,
        height: 1.850,
        age: 4.676,
    };

    pub fn for_sex(sex: Sex) -> Self {
        match sex {
            Sex::Male => Self::MALE,
            Sex::Female => Self::FEMALE,
        }
    }

    /// Evaluate the equation (kcal/day)
    pub fn evaluate(&self, body: MetricBody, age: u32) -> f64 {
        self.base + (self.weight * body.weight_kg.0) + (self.height * body.height_cm.0)
            - (self.age * f64::from(age))
    }
}

/// Current weight and height expressed in the units the BMR equation expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricBody {
    pub weight_kg: Kilograms,
    pub height_cm: Centimeters,
}

#[derive(Debug, Clone, Copy)]
struct EnergyBalance {
    bmr: f64,
    tdee: f64,
    calorie_deficit: f64,
}

/// Pure calculation engine parameterized by [`CalculatorSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalculationEngine {
    settings: CalculatorSettings,
}

impl CalculationEngine {
    /// Create an engine with custom settings.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidInput` if any setting is not a positive number.
    pub fn new(settings: CalculatorSettings) -> CalcResult<Self> {
        settings.validate()?;
        Ok(CalculationEngine { settings })
    }

    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Whether the profile is computable.
    ///
    /// True iff current weight, goal weight, height and calories consumed are
    /// finite and strictly positive, calories burned is finite and not
    /// negative, and none exceeds [`MAX_INPUT_MAGNITUDE`](crate::profile::MAX_INPUT_MAGNITUDE).
    pub fn validate(&self, profile: &UserProfile) -> bool {
        profile.is_valid()
    }

    /// Same predicate as [`validate`](Self::validate), reporting the first
    /// failing field. The engine never returns this error from a calculation.
    pub fn check(&self, profile: &UserProfile) -> CalcResult<()> {
        profile.check()
    }

    /// Convert current weight and height to kg and cm.
    ///
    /// Metric profiles pass through unchanged.
    pub fn normalize_to_metric(&self, profile: &UserProfile) -> MetricBody {
        match profile.unit_system {
            UnitSystem::Metric => MetricBody {
                weight_kg: Kilograms(profile.current_weight),
                height_cm: Centimeters(profile.height),
            },
            UnitSystem::Imperial => MetricBody {
                weight_kg: Pounds(profile.current_weight).into(),
                height_cm: Inches(profile.height).into(),
            },
        }
    }

    /// Basal metabolic rate (kcal/day), 0 for a non-computable profile
    pub fn compute_bmr(&self, profile: &UserProfile) -> f64 {
        if !self.validate(profile) {
            return 0.0;
        }
        self.energy_balance(profile).bmr
    }

    /// Total daily energy expenditure: BMR × activity multiplier
    pub fn compute_tdee(&self, profile: &UserProfile) -> f64 {
        if !self.validate(profile) {
            return 0.0;
        }
        self.energy_balance(profile).tdee
    }

    /// `max(0, TDEE − (consumed − burned))`.
    ///
    /// A calorie surplus clamps to zero; weight gain is not modeled.
    pub fn compute_calorie_deficit(&self, profile: &UserProfile) -> f64 {
        if !self.validate(profile) {
            return 0.0;
        }
        self.energy_balance(profile).calorie_deficit
    }

    /// Deficit divided by kcal per unit of body mass, in the profile's weight unit
    pub fn compute_daily_weight_change(&self, profile: &UserProfile) -> f64 {
        if !self.validate(profile) {
            return 0.0;
        }
        self.daily_weight_change(profile, self.energy_balance(profile).calorie_deficit)
    }

    pub fn compute_weekly_weight_change(&self, profile: &UserProfile) -> f64 {
        self.compute_daily_weight_change(profile) * self.settings.days_per_week
    }

    pub fn compute_monthly_weight_change(&self, profile: &UserProfile) -> f64 {
        self.compute_weekly_weight_change(profile) * self.settings.weeks_per_month
    }

    /// Weeks until goal weight at the current weekly change.
    ///
    /// Non-computable profiles give `Weeks(0.0)`; a zero weekly change on a
    /// computable profile gives [`GoalEstimate::Unreachable`].
    pub fn compute_weeks_to_goal(&self, profile: &UserProfile) -> GoalEstimate {
        if !self.validate(profile) {
            return GoalEstimate::Weeks(0.0);
        }
        self.goal_estimate(profile, self.compute_weekly_weight_change(profile))
    }

    /// Run the whole chain once and collect every figure.
    pub fn calculate(&self, profile: &UserProfile) -> CalculationResult {
        if let Err(err) = self.check(profile) {
            debug!(error = %err, "profile not computable, returning zero result");
            return CalculationResult::zero(profile.unit_system);
        }

        let EnergyBalance {
            bmr,
            tdee,
            calorie_deficit,
        } = self.energy_balance(profile);
        let daily_weight_change = self.daily_weight_change(profile, calorie_deficit);
        let weekly_weight_change = daily_weight_change * self.settings.days_per_week;
        let monthly_weight_change = weekly_weight_change * self.settings.weeks_per_month;

        trace!(bmr, tdee, calorie_deficit, daily_weight_change, "calculated energy balance");

        CalculationResult {
            bmr,
            tdee,
            calorie_deficit,
            daily_weight_change,
            weekly_weight_change,
            monthly_weight_change,
            weeks_to_goal: self.goal_estimate(profile, weekly_weight_change),
            unit_system: profile.unit_system,
        }
    }

    /// BMR through deficit for a profile already known to be computable.
    fn energy_balance(&self, profile: &UserProfile) -> EnergyBalance {
        let body = self.normalize_to_metric(profile);
        let bmr = BmrCoefficients::for_sex(profile.sex).evaluate(body, profile.age);
        let tdee = bmr * profile.activity_level.multiplier();
        let net_intake = profile.calories_consumed_today - profile.calories_burned_from_exercise;
        EnergyBalance {
            bmr,
            tdee,
            calorie_deficit: (tdee - net_intake).max(0.0),
        }
    }

    fn daily_weight_change(&self, profile: &UserProfile, calorie_deficit: f64) -> f64 {
        calorie_deficit / self.settings.kcal_per_mass_unit(profile.unit_system)
    }

    fn goal_estimate(&self, profile: &UserProfile, weekly_weight_change: f64) -> GoalEstimate {
        if weekly_weight_change == 0.0 {
            debug!(
                consumed = profile.calories_consumed_today,
                burned = profile.calories_burned_from_exercise,
                "no calorie deficit, goal unreachable"
            );
            return GoalEstimate::Unreachable;
        }
        GoalEstimate::Weeks(profile.weight_to_goal() / weekly_weight_change)
    }
}

// ============================================================================
// Free functions over the default engine
// ============================================================================

/// See [`CalculationEngine::validate`]
pub fn validate(profile: &UserProfile) -> bool {
    CalculationEngine::default().validate(profile)
}

/// See [`CalculationEngine::normalize_to_metric`]
pub fn normalize_to_metric(profile: &UserProfile) -> MetricBody {
    CalculationEngine::default().normalize_to_metric(profile)
}

/// See [`CalculationEngine::compute_bmr`]
pub fn compute_bmr(profile: &UserProfile) -> f64 {
    CalculationEngine::default().compute_bmr(profile)
}

/// See [`CalculationEngine::compute_tdee`]
pub fn compute_tdee(profile: &UserProfile) -> f64 {
    CalculationEngine::default().compute_tdee(profile)
}

/// See [`CalculationEngine::compute_calorie_deficit`]
pub fn compute_calorie_deficit(profile: &UserProfile) -> f64 {
    CalculationEngine::default().compute_calorie_deficit(profile)
}

/// See [`CalculationEngine::compute_daily_weight_change`]
pub fn compute_daily_weight_change(profile: &UserProfile) -> f64 {
    CalculationEngine::default().compute_daily_weight_change(profile)
}

/// See [`CalculationEngine::compute_weekly_weight_change`]
pub fn compute_weekly_weight_change(profile: &UserProfile) -> f64 {
    CalculationEngine::default().compute_weekly_weight_change(profile)
}

/// See [`CalculationEngine::compute_monthly_weight_change`]
pub fn compute_monthly_weight_change(profile: &UserProfile) -> f64 {
    CalculationEngine::default().compute_monthly_weight_change(profile)
}

/// See [`CalculationEngine::compute_weeks_to_goal`]
pub fn compute_weeks_to_goal(profile: &UserProfile) -> GoalEstimate {
    CalculationEngine::default().compute_weeks_to_goal(profile)
}

/// Calculate every figure with the default settings.
pub fn calculate(profile: &UserProfile) -> CalculationResult {
    CalculationEngine::default().calculate(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ActivityLevel;
    use crate::units::{CM_PER_INCH, KG_PER_LB};
    use proptest::prelude::*;

    fn scenario_a() -> UserProfile {
        UserProfile::new(UnitSystem::Metric, Sex::Male)
            .with_weights(80.0, 72.0)
            .with_height(180.0)
            .with_age(30)
            .with_calories(2000.0, 300.0)
            .with_activity_level(ActivityLevel::ModeratelyActive)
    }

    fn scenario_a_imperial() -> UserProfile {
        UserProfile {
            current_weight: 80.0 / KG_PER_LB,
            goal_weight: 72.0 / KG_PER_LB,
            height: 180.0 / CM_PER_INCH,
            unit_system: UnitSystem::Imperial,
            ..scenario_a()
        }
    }

    #[test]
    fn test_male_scenario() {
        let profile = scenario_a();
        assert!((compute_bmr(&profile) - 1864.04).abs() < 1e-9);
        assert!((compute_tdee(&profile) - 2889.262).abs() < 1e-6);
        assert!((compute_calorie_deficit(&profile) - 1189.262).abs() < 1e-6);
        assert!((compute_daily_weight_change(&profile) - 0.154449).abs() < 1e-6);
        assert!((compute_weekly_weight_change(&profile) - 1.081147).abs() < 1e-6);
        assert!((compute_monthly_weight_change(&profile) - 4.324587).abs() < 1e-5);

        let weeks = compute_weeks_to_goal(&profile).as_weeks().unwrap();
        assert!((weeks - 8.0 / 1.081147).abs() < 1e-4);
    }

    #[test]
    fn test_female_formula() {
        let profile = UserProfile::new(UnitSystem::Metric, Sex::Female)
            .with_weights(60.0, 55.0)
            .with_height(165.0)
            .with_age(40)
            .with_calories(1500.0, 0.0);

        // 655 + 9.563*60 + 1.850*165 - 4.676*40
        let expected = 655.0 + 573.78 + 305.25 - 187.04;
        assert!((compute_bmr(&profile) - expected).abs() < 1e-9);
        assert!((compute_tdee(&profile) - expected * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_profile_is_all_zero() {
        let profile = scenario_a().with_height(0.0);
        assert!(!validate(&profile));
        assert_eq!(compute_bmr(&profile), 0.0);
        assert_eq!(compute_tdee(&profile), 0.0);
        assert_eq!(compute_calorie_deficit(&profile), 0.0);
        assert_eq!(compute_daily_weight_change(&profile), 0.0);
        assert_eq!(compute_weekly_weight_change(&profile), 0.0);
        assert_eq!(compute_monthly_weight_change(&profile), 0.0);
        assert_eq!(compute_weeks_to_goal(&profile), GoalEstimate::Weeks(0.0));
        assert!(calculate(&profile).is_zero());
    }

    #[test]
    fn test_overflowing_weight_is_not_computable() {
        let profile = scenario_a().with_weights(1e308, 72.0);
        let result = calculate(&profile);
        assert!(result.is_zero());
        assert_eq!(result.weeks_to_goal, GoalEstimate::Weeks(0.0));

        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("null"));
        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    #[test]
    fn test_infinite_burned_is_not_computable() {
        let profile = scenario_a().with_calories(2000.0, f64::INFINITY);
        assert!(!validate(&profile));
        assert!(calculate(&profile).is_zero());
    }

    #[test]
    fn test_zero_deficit_is_unreachable() {
        let profile = scenario_a().with_calories(5000.0, 300.0);
        assert_eq!(compute_calorie_deficit(&profile), 0.0);
        assert_eq!(compute_weeks_to_goal(&profile), GoalEstimate::Unreachable);

        let result = calculate(&profile);
        assert_eq!(result.weeks_to_goal, GoalEstimate::Unreachable);
        assert!(result.bmr > 0.0);
        assert_eq!(result.weekly_weight_change, 0.0);
    }

    #[test]
    fn test_surplus_clamps_deficit() {
        let profile = scenario_a().with_calories(9000.0, 0.0);
        assert_eq!(compute_calorie_deficit(&profile), 0.0);
        assert_eq!(compute_daily_weight_change(&profile), 0.0);
    }

    #[test]
    fn test_imperial_normalization() {
        let body = normalize_to_metric(&scenario_a_imperial());
        assert!((body.weight_kg.0 - 80.0).abs() < 1e-9);
        assert!((body.height_cm.0 - 180.0).abs() < 1e-9);

        let metric = normalize_to_metric(&scenario_a());
        assert_eq!(metric.weight_kg, Kilograms(80.0));
        assert_eq!(metric.height_cm, Centimeters(180.0));
    }

    #[test]
    fn test_imperial_reproduces_metric_daily_change() {
        let metric = calculate(&scenario_a());
        let imperial = calculate(&scenario_a_imperial());

        assert!((metric.bmr - imperial.bmr).abs() < 1e-9);
        assert_eq!(imperial.unit_system, UnitSystem::Imperial);

        // 3500 kcal/lb is ~7716 kcal/kg, so the two paths agree to ~0.2%
        let imperial_daily_kg = imperial.daily_weight_change * KG_PER_LB;
        assert!((imperial_daily_kg - metric.daily_weight_change).abs() < 1e-3);
        assert!(
            (imperial_daily_kg - metric.daily_weight_change).abs() / metric.daily_weight_change
                < 0.003
        );
    }

    #[test]
    fn test_goal_above_current_uses_distance() {
        let profile = scenario_a().with_weights(72.0, 80.0);
        let weeks = compute_weeks_to_goal(&profile).as_weeks().unwrap();
        let weekly = compute_weekly_weight_change(&profile);
        assert!((weeks - 8.0 / weekly).abs() < 1e-9);
    }

    #[test]
    fn test_custom_settings() {
        let settings = CalculatorSettings {
            weeks_per_month: 4.345,
            ..Default::default()
        };
        let engine = CalculationEngine::new(settings).unwrap();
        let profile = scenario_a();
        let weekly = engine.compute_weekly_weight_change(&profile);
        assert_eq!(engine.compute_monthly_weight_change(&profile), weekly * 4.345);
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let settings = CalculatorSettings {
            kcal_per_kg: -1.0,
            ..Default::default()
        };
        assert!(CalculationEngine::new(settings).is_err());
    }

    #[test]
    fn test_check_matches_validate() {
        let engine = CalculationEngine::default();
        let bad = scenario_a().with_weights(0.0, 72.0);
        assert!(!engine.validate(&bad));
        assert_eq!(engine.check(&bad).unwrap_err().field(), Some("current_weight"));
        assert!(engine.check(&scenario_a()).is_ok());
    }

    fn arb_profile() -> impl Strategy<Value = UserProfile> {
        (
            (1.0f64..300.0, 1.0f64..300.0, 50.0f64..230.0, 0u32..110),
            prop_oneof![Just(Sex::Male), Just(Sex::Female)],
            (1.0f64..8000.0, 0.0f64..3000.0),
            prop::sample::select(ActivityLevel::ALL.to_vec()),
            prop_oneof![Just(UnitSystem::Metric), Just(UnitSystem::Imperial)],
        )
            .prop_map(
                |((current, goal, height, age), sex, (consumed, burned), activity, units)| {
                    UserProfile::new(units, sex)
                        .with_weights(current, goal)
                        .with_height(height)
                        .with_age(age)
                        .with_calories(consumed, burned)
                        .with_activity_level(activity)
                },
            )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_deficit_never_negative(profile in arb_profile()) {
            prop_assert!(compute_calorie_deficit(&profile) >= 0.0);
        }

        #[test]
        fn prop_weekly_and_monthly_are_exact_multiples(profile in arb_profile()) {
            let daily = compute_daily_weight_change(&profile);
            let weekly = compute_weekly_weight_change(&profile);
            prop_assert_eq!(weekly, 7.0 * daily);
            prop_assert_eq!(compute_monthly_weight_change(&profile), 4.0 * weekly);
        }

        #[test]
        fn prop_calculate_matches_individual_operations(profile in arb_profile()) {
            let result = calculate(&profile);
            prop_assert_eq!(result.bmr, compute_bmr(&profile));
            prop_assert_eq!(result.tdee, compute_tdee(&profile));
            prop_assert_eq!(result.calorie_deficit, compute_calorie_deficit(&profile));
            prop_assert_eq!(result.daily_weight_change, compute_daily_weight_change(&profile));
            prop_assert_eq!(result.monthly_weight_change, compute_monthly_weight_change(&profile));
            prop_assert_eq!(result.weeks_to_goal, compute_weeks_to_goal(&profile));
        }

        #[test]
        fn prop_invalid_profiles_are_zero(
            profile in arb_profile(),
            field in 0usize..5,
            bad_value in prop_oneof![
                -200.0f64..-1e-6,
                Just(f64::NAN),
                Just(f64::INFINITY),
                Just(f64::NEG_INFINITY),
                1.0e10f64..1.0e308,
            ],
        ) {
            let mut profile = profile;
            match field {
                0 => profile.current_weight = bad_value,
                1 => profile.goal_weight = bad_value,
                2 => profile.height = bad_value,
                3 => profile.calories_consumed_today = bad_value,
                _ => profile.calories_burned_from_exercise = bad_value,
            }
            prop_assert!(!validate(&profile));
            prop_assert!(calculate(&profile).is_zero());
        }

        #[test]
        fn prop_valid_results_are_finite(profile in arb_profile()) {
            let result = calculate(&profile);
            prop_assert!(result.bmr.is_finite() && result.tdee.is_finite());
            prop_assert!(result.monthly_weight_change.is_finite());
            if let GoalEstimate::Weeks(weeks) = result.weeks_to_goal {
                prop_assert!(weeks.is_finite());
            }
        }

        #[test]
        fn prop_unreachable_only_without_deficit(profile in arb_profile()) {
            let estimate = compute_weeks_to_goal(&profile);
            let deficit = compute_calorie_deficit(&profile);
            prop_assert_eq!(estimate == GoalEstimate::Unreachable, deficit == 0.0);
        }

        #[test]
        fn prop_metric_and_imperial_agree(profile in arb_profile()) {
            let metric = UserProfile { unit_system: UnitSystem::Metric, ..profile.clone() };
            let imperial = UserProfile {
                current_weight: profile.current_weight / KG_PER_LB,
                goal_weight: profile.goal_weight / KG_PER_LB,
                height: profile.height / CM_PER_INCH,
                unit_system: UnitSystem::Imperial,
                ..profile
            };

            let metric_daily = compute_daily_weight_change(&metric);
            let imperial_daily_kg = compute_daily_weight_change(&imperial) * KG_PER_LB;
            let tolerance = metric_daily * 0.003 + 1e-6;
            prop_assert!((metric_daily - imperial_daily_kg).abs() <= tolerance,
                "metric {} vs imperial {}", metric_daily, imperial_daily_kg);
        }
    }
}
