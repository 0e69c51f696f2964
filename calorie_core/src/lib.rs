//! # calorie_core - Calorie Balance Calculation Engine
//!
//! `calorie_core` turns a snapshot of user-entered biometrics into basal
//! metabolic rate, total daily energy expenditure, calorie deficit and
//! projected weight loss. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take a profile and return results
//! - **Total**: A profile that cannot be computed yields an all-zero result, never an error
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Unit-aware**: Metric and imperial inputs are normalized before any energy math
//!
//! ## Quick Start
//!
//! ```rust
//! use calorie_core::{calculate, ActivityLevel, Sex, UnitSystem, UserProfile};
//!
//! let profile = UserProfile::new(UnitSystem::Imperial, Sex::Female)
//!     .with_weights(165.0, 150.0)
//!     .with_height(64.0)
//!     .with_age(35)
//!     .with_calories(1500.0, 200.0)
//!     .with_activity_level(ActivityLevel::LightlyActive);
//!
//! let result = calculate(&profile);
//! assert!(result.calorie_deficit > 0.0);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The calculation engine and result types
//! - [`profile`] - User profile, sex and activity level
//! - [`units`] - Unit system and type-safe unit wrappers
//! - [`settings`] - Tunable projection constants
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod profile;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalculationEngine, CalculationResult, GoalEstimate};
pub use errors::{CalcError, CalcResult};
pub use profile::{ActivityLevel, Sex, UserProfile};
pub use settings::CalculatorSettings;
pub use units::UnitSystem;
