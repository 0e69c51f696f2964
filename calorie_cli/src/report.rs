//! Plain-text rendering of a calculation.

use std::fmt::{self, Write};

use calorie_core::{ActivityLevel, CalcError, CalculationResult, GoalEstimate, UserProfile};
use chrono::NaiveDate;

const RULE: &str = "═══════════════════════════════════════";

/// Render the full report for one profile.
///
/// `note` explains why a non-computable profile shows zeroes. `today` anchors
/// the projected goal date.
pub fn render(
    profile: &UserProfile,
    result: &CalculationResult,
    note: Option<&CalcError>,
    today: NaiveDate,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, profile, result, note, today)?;
    Ok(out)
}

fn write_report(
    out: &mut impl Write,
    profile: &UserProfile,
    result: &CalculationResult,
    note: Option<&CalcError>,
    today: NaiveDate,
) -> fmt::Result {
    let weight = profile.unit_system.weight_label();

    writeln!(out, "{}", RULE)?;
    writeln!(out, "  CALORIE COUNTER")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "Input:")?;
    writeln!(out, "  Sex / Age:  {}, {} years", profile.sex, profile.age)?;
    writeln!(
        out,
        "  Weight:     {:.1} {} (goal {:.1} {})",
        profile.current_weight, weight, profile.goal_weight, weight
    )?;
    writeln!(
        out,
        "  Height:     {:.1} {}",
        profile.height,
        profile.unit_system.height_label()
    )?;
    writeln!(
        out,
        "  Activity:   {} (x{})",
        profile.activity_level,
        profile.activity_level.multiplier()
    )?;
    writeln!(
        out,
        "  Calories:   {:.0} kcal consumed, {:.0} kcal burned",
        profile.calories_consumed_today, profile.calories_burned_from_exercise
    )?;
    writeln!(out)?;

    if let Some(err) = note {
        writeln!(out, "Note: {} - showing zero results", err)?;
        writeln!(out)?;
    }

    writeln!(out, "Energy:")?;
    writeln!(out, "  BMR:        {:.0} kcal/day", result.bmr)?;
    writeln!(out, "  TDEE:       {:.0} kcal/day", result.tdee)?;
    writeln!(out, "  Deficit:    {:.0} kcal/day", result.calorie_deficit)?;
    writeln!(out)?;

    writeln!(out, "Projected Weight Loss:")?;
    writeln!(
        out,
        "  Weekly Weight Loss:  {:.2} {}",
        result.weekly_weight_change,
        result.weight_label()
    )?;
    writeln!(
        out,
        "  Monthly Weight Loss: {:.2} {}",
        result.monthly_weight_change,
        result.weight_label()
    )?;
    writeln!(out, "  Estimated Time to Goal: {}", goal_line(&result.weeks_to_goal, today))?;
    writeln!(out, "{}", RULE)
}

fn goal_line(estimate: &GoalEstimate, today: NaiveDate) -> String {
    match estimate {
        GoalEstimate::Unreachable => "unreachable at current intake".to_string(),
        GoalEstimate::Weeks(weeks) => match estimate.target_date(today) {
            Some(date) if *weeks > 0.0 => format!("{:.1} weeks (around {})", weeks, date),
            _ => format!("{:.1} weeks", weeks),
        },
    }
}

/// Definitions of each activity level.
pub fn activity_info() -> String {
    let mut out = String::from("Activity Level Definitions\n");
    for level in ActivityLevel::ALL {
        out.push_str(&format!(
            "  • {} (x{}): {}\n",
            level.label(),
            level.multiplier(),
            level.description()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_core::{calculate, Sex, UnitSystem};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile::new(UnitSystem::Metric, Sex::Male)
            .with_weights(80.0, 72.0)
            .with_height(180.0)
            .with_age(30)
            .with_calories(2000.0, 300.0)
            .with_activity_level(ActivityLevel::ModeratelyActive)
    }

    #[test]
    fn test_report_shows_projection() {
        let profile = profile();
        let report = render(&profile, &calculate(&profile), None, today()).unwrap();

        assert!(report.contains("BMR:        1864 kcal/day"));
        assert!(report.contains("Weekly Weight Loss:  1.08 kg"));
        assert!(report.contains("Monthly Weight Loss: 4.32 kg"));
        // 7.3996 weeks = 51.8 days -> 52 days after Jan 1
        assert!(report.contains("7.4 weeks (around 2025-02-22)"));
        assert!(!report.contains("Note:"));
    }

    #[test]
    fn test_report_unreachable_goal() {
        let profile = profile().with_calories(6000.0, 0.0);
        let report = render(&profile, &calculate(&profile), None, today()).unwrap();
        assert!(report.contains("Estimated Time to Goal: unreachable at current intake"));
    }

    #[test]
    fn test_report_invalid_profile_note() {
        let profile = profile().with_height(0.0);
        let note = profile.check().err();
        let report = render(&profile, &calculate(&profile), note.as_ref(), today()).unwrap();

        assert!(report.contains("Note: Invalid input for 'height'"));
        assert!(report.contains("Weekly Weight Loss:  0.00 kg"));
        assert!(report.contains("Estimated Time to Goal: 0.0 weeks\n"));
    }

    #[test]
    fn test_report_imperial_labels() {
        let profile = UserProfile {
            unit_system: UnitSystem::Imperial,
            current_weight: 176.0,
            goal_weight: 160.0,
            height: 71.0,
            ..profile()
        };
        let report = render(&profile, &calculate(&profile), None, today()).unwrap();
        assert!(report.contains("176.0 lbs (goal 160.0 lbs)"));
        assert!(report.contains("71.0 inches"));
        assert!(report.contains(" lbs\n"));
    }

    #[test]
    fn test_activity_info_lists_every_level() {
        let info = activity_info();
        assert!(info.contains("Sedentary (x1.2): Little to no exercise."));
        assert!(info.contains("Very Active (x1.725): Daily exercise or intense workouts."));
        assert_eq!(info.lines().count(), 5);
    }
}
