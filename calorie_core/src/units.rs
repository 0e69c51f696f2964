//! # Unit Types
//!
//! Type-safe wrappers for the body-measurement units the calculator accepts.
//! They remain lightweight (just f64 wrappers) and serialize as bare numbers.
//!
//! ## Unit Systems
//!
//! Profiles are entered in one of two systems:
//! - Metric: weight in kilograms (kg), height in centimeters (cm)
//! - Imperial: weight in pounds (lbs), height in inches
//!
//! BMR constants assume kilograms and centimeters, so imperial inputs are
//! converted with the factors below before any energy math.
//!
//! ## Example
//!
//! ```rust
//! use calorie_core::units::{Centimeters, Inches, Kilograms, Pounds};
//!
//! let height: Centimeters = Inches(70.0).into();
//! assert!((height.0 - 177.8).abs() < 1e-9);
//!
//! let weight: Kilograms = Pounds(100.0).into();
//! assert!((weight.0 - 45.3592).abs() < 1e-9);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

// ============================================================================
// Unit System
// ============================================================================

/// Measurement system the weight and height fields of a profile are entered in.
///
/// The unit system also decides which fat-energy constant converts a calorie
/// deficit into mass (kcal per kg or kcal per lb).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl UnitSystem {
    /// Display label for weight values ("kg" or "lbs")
    pub fn weight_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    /// Display label for height values ("cm" or "inches")
    pub fn height_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "inches",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "Metric"),
            UnitSystem::Imperial => write!(f, "Imperial"),
        }
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 * KG_PER_LB)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_INCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds_to_kilograms() {
        let kg: Kilograms = Pounds(176.0).into();
        assert!((kg.0 - 79.832192).abs() < 1e-9);
    }

    #[test]
    fn test_inches_to_centimeters() {
        let cm: Centimeters = Inches(10.0).into();
        assert!((cm.0 - 25.4).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let kg = Kilograms(72.5);
        let json = serde_json::to_string(&kg).unwrap();
        assert_eq!(json, "72.5");

        let roundtrip: Kilograms = serde_json::from_str(&json).unwrap();
        assert_eq!(kg, roundtrip);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(UnitSystem::Metric.weight_label(), "kg");
        assert_eq!(UnitSystem::Imperial.weight_label(), "lbs");
        assert_eq!(UnitSystem::Metric.height_label(), "cm");
        assert_eq!(UnitSystem::Imperial.height_label(), "inches");
        assert_eq!(UnitSystem::Imperial.to_string(), "Imperial");
    }
}
