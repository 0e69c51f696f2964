//! # User Profile
//!
//! The immutable snapshot of user-entered fields that every calculation
//! starts from. A new `UserProfile` is built on each recalculation; nothing
//! here is shared or mutated by the engine.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "current_weight": 80.0,
//!   "goal_weight": 72.0,
//!   "height": 180.0,
//!   "age": 30,
//!   "sex": "Male",
//!   "calories_consumed_today": 2000.0,
//!   "calories_burned_from_exercise": 300.0,
//!   "activity_level": "ModeratelyActive",
//!   "unit_system": "Metric"
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calorie_core::profile::{ActivityLevel, Sex, UserProfile};
//! use calorie_core::units::UnitSystem;
//!
//! let profile = UserProfile::new(UnitSystem::Metric, Sex::Female)
//!     .with_weights(68.0, 60.0)
//!     .with_height(165.0)
//!     .with_age(42)
//!     .with_calories(1600.0, 250.0)
//!     .with_activity_level(ActivityLevel::LightlyActive);
//!
//! assert!(profile.is_valid());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

// ============================================================================
// Sex
// ============================================================================

/// Biological sex, which selects the BMR equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Sex {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(CalcError::invalid_input("sex", s, "Expected 'male' or 'female'")),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level used to scale BMR into total daily energy expenditure.
///
/// # Example
/// ```
/// use calorie_core::profile::ActivityLevel;
///
/// let level = ActivityLevel::ModeratelyActive;
/// assert_eq!(level.multiplier(), 1.55);
/// assert_eq!(level.label(), "Moderately Active");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little to no exercise (x1.2)
    #[default]
    Sedentary,
    /// Exercise 1-3 times per week (x1.375)
    LightlyActive,
    /// Exercise 4-5 times per week (x1.55)
    ModeratelyActive,
    /// Daily exercise or intense workouts (x1.725)
    VeryActive,
}

impl ActivityLevel {
    /// All activity levels, least to most active
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }

    /// One-line definition shown next to the activity picker
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little to no exercise.",
            ActivityLevel::LightlyActive => "Exercise 1–3 times per week.",
            ActivityLevel::ModeratelyActive => "Exercise 4–5 times per week.",
            ActivityLevel::VeryActive => "Daily exercise or intense workouts.",
        }
    }

    /// Map a raw multiplier (1.2, 1.375, 1.55, 1.725) back to its level.
    ///
    /// # Example
    /// ```
    /// use calorie_core::profile::ActivityLevel;
    ///
    /// assert_eq!(ActivityLevel::from_multiplier(1.375).unwrap(), ActivityLevel::LightlyActive);
    /// assert!(ActivityLevel::from_multiplier(1.9).is_err());
    /// ```
    pub fn from_multiplier(multiplier: f64) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.multiplier() - multiplier).abs() < 1e-9)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "activity_level",
                    multiplier.to_string(),
                    "Multiplier must be one of 1.2, 1.375, 1.55, 1.725",
                )
            })
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityLevel {
    type Err = CalcError;

    /// Accepts display labels ("Lightly Active"), snake/kebab case
    /// ("lightly_active", "lightly-active") and raw multipliers ("1.375").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightlyactive" | "light" => Ok(ActivityLevel::LightlyActive),
            "moderatelyactive" | "moderate" => Ok(ActivityLevel::ModeratelyActive),
            "veryactive" | "very" => Ok(ActivityLevel::VeryActive),
            other => match other.parse::<f64>() {
                Ok(multiplier) => ActivityLevel::from_multiplier(multiplier),
                Err(_) => Err(CalcError::invalid_input(
                    "activity_level",
                    s,
                    "Expected sedentary, lightly-active, moderately-active or very-active",
                )),
            },
        }
    }
}

// ============================================================================
// User Profile
// ============================================================================

/// Largest accepted weight, height or calorie value
pub const MAX_INPUT_MAGNITUDE: f64 = 1.0e9;

fn check_magnitude(field: &str, value: f64) -> CalcResult<()> {
    if value > MAX_INPUT_MAGNITUDE {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Value exceeds {}", MAX_INPUT_MAGNITUDE),
        ));
    }
    Ok(())
}

/// Snapshot of user-entered biometric and intake fields.
///
/// Weight fields are in kg or lb and height in cm or inches, as selected by
/// `unit_system`. `Default` mirrors an untouched form: every magnitude is
/// zero, so the default profile is not computable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Current body weight (kg or lb)
    pub current_weight: f64,

    /// Target body weight (same unit as `current_weight`)
    pub goal_weight: f64,

    /// Height (cm or inches)
    pub height: f64,

    /// Age in whole years
    pub age: u32,

    pub sex: Sex,

    /// Food energy eaten today (kcal)
    pub calories_consumed_today: f64,

    /// Energy burned through exercise today (kcal)
    #[serde(default)]
    pub calories_burned_from_exercise: f64,

    #[serde(default)]
    pub activity_level: ActivityLevel,

    #[serde(default)]
    pub unit_system: UnitSystem,
}

impl UserProfile {
    /// Start an empty profile in the given unit system.
    pub fn new(unit_system: UnitSystem, sex: Sex) -> Self {
        UserProfile {
            sex,
            unit_system,
            ..Default::default()
        }
    }

    /// Set current and goal weight
    pub fn with_weights(mut self, current_weight: f64, goal_weight: f64) -> Self {
        self.current_weight = current_weight;
        self.goal_weight = goal_weight;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Set calories consumed today and calories burned from exercise
    pub fn with_calories(mut self, consumed: f64, burned_from_exercise: f64) -> Self {
        self.calories_consumed_today = consumed;
        self.calories_burned_from_exercise = burned_from_exercise;
        self
    }

    pub fn with_activity_level(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Parse a profile from JSON.
    ///
    /// Only the JSON shape is checked here; an out-of-range profile still
    /// parses and simply computes to zero.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every field against the computability invariant.
    ///
    /// Returns the first failing field. Magnitudes must be finite, strictly
    /// positive and no larger than [`MAX_INPUT_MAGNITUDE`]; calories burned
    /// may be zero. The upper bound keeps every derived figure finite.
    pub fn check(&self) -> CalcResult<()> {
        let positive = [
            ("current_weight", self.current_weight, "Current weight must be positive"),
            ("goal_weight", self.goal_weight, "Goal weight must be positive"),
            ("height", self.height, "Height must be positive"),
            (
                "calories_consumed_today",
                self.calories_consumed_today,
                "Calories consumed today must be positive",
            ),
        ];

        for (field, value, reason) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), reason));
            }
            check_magnitude(field, value)?;
        }

        let burned = self.calories_burned_from_exercise;
        if !burned.is_finite() || burned < 0.0 {
            return Err(CalcError::invalid_input(
                "calories_burned_from_exercise",
                burned.to_string(),
                "Calories burned cannot be negative",
            ));
        }
        check_magnitude("calories_burned_from_exercise", burned)
    }

    /// Whether this profile can be computed (see [`UserProfile::check`]).
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Distance between current and goal weight, in the profile's weight unit
    pub fn weight_to_goal(&self) -> f64 {
        (self.current_weight - self.goal_weight).abs()
    }
}
