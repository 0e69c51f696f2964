//! # Calculations
//!
//! The calculation engine and its output types. The pattern follows the rest
//! of the crate:
//!
//! - [`UserProfile`](crate::profile::UserProfile) - input (JSON-serializable)
//! - [`CalculationResult`] - output (JSON-serializable)
//! - [`calculate`] - pure function from one to the other
//!
//! Individual steps of the chain (`compute_bmr`, `compute_tdee`, ...) are
//! exposed both on [`CalculationEngine`] and as free functions in [`engine`]
//! that use the default settings.

pub mod engine;
pub mod result;

pub use engine::{calculate, BmrCoefficients, CalculationEngine, MetricBody};
pub use result::{CalculationResult, GoalEstimate};
