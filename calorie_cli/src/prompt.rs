//! Interactive field-by-field profile entry.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use calorie_core::{ActivityLevel, Sex, UnitSystem, UserProfile};
use tracing::warn;

/// Reads answers from `input`, writing prompts to `output`.
///
/// Unreadable or unparsable answers fall back to the prompt's default, the
/// same way an untouched form field keeps its placeholder.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    fn read_answer(&mut self, prompt: &str) -> Option<String> {
        write!(self.output, "{}", prompt).ok()?;
        self.output.flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let trimmed = line.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }

    /// Ask for a value, showing `default` in brackets.
    pub fn ask<T>(&mut self, label: &str, default: T) -> T
    where
        T: FromStr + Display,
    {
        let Some(answer) = self.read_answer(&format!("{} [{}]: ", label, default)) else {
            return default;
        };

        match answer.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(field = label, answer = %answer, "could not parse answer, keeping default");
                default
            }
        }
    }

    pub fn ask_yes_no(&mut self, label: &str, default: bool) -> bool {
        let hint = if default { "Y/n" } else { "y/N" };
        match self.read_answer(&format!("{} [{}]: ", label, hint)) {
            Some(answer) => match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => true,
                "n" | "no" => false,
                _ => default,
            },
            None => default,
        }
    }

    /// Walk through every profile field in form order.
    pub fn read_profile(&mut self) -> UserProfile {
        let unit_system = if self.ask_yes_no("Use Metric System?", true) {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        };
        let weight = unit_system.weight_label();

        let age: u32 = self.ask("Age", 25);
        let sex: Sex = self.ask("Sex (male/female)", Sex::Male);
        let current_weight: f64 = self.ask(&format!("Current Weight ({})", weight), 0.0);
        let goal_weight: f64 = self.ask(&format!("Goal Weight ({})", weight), 0.0);
        let height: f64 = self.ask(&format!("Height ({})", unit_system.height_label()), 0.0);
        let consumed: f64 = self.ask("Calories Consumed Today", 0.0);
        let burned: f64 = self.ask("Calories Burned from Exercise", 0.0);
        let activity_level: ActivityLevel = self.ask(
            "Activity Level (sedentary/lightly-active/moderately-active/very-active)",
            ActivityLevel::Sedentary,
        );

        UserProfile::new(unit_system, sex)
            .with_weights(current_weight, goal_weight)
            .with_height(height)
            .with_age(age)
            .with_calories(consumed, burned)
            .with_activity_level(activity_level)
    }
}
