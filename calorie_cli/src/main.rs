//! # Calorie Counter CLI
//!
//! Terminal front end for `calorie_core`. Collects a profile (interactively
//! or from a JSON file), runs the calculation engine and prints either a
//! report or the raw JSON result.
//!
//! ```bash
//! # Prompt for every field
//! calorie-cli
//!
//! # Read a profile file and emit JSON (for scripts/LLMs)
//! calorie-cli --profile me.json --json
//!
//! # Override projection constants
//! calorie-cli --profile me.json --settings settings.json
//!
//! # Show what each activity level means
//! calorie-cli --activity-info
//! ```

mod prompt;
mod report;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use calorie_core::{CalcError, CalcResult, CalculationEngine, CalculatorSettings, UserProfile};
use chrono::Local;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use prompt::Prompter;

#[derive(Parser)]
#[command(
    name = "calorie-cli",
    about = "Calorie balance and projected weight loss calculator",
    long_about = "Computes BMR, TDEE, calorie deficit and projected weight loss from your biometrics and today's intake."
)]
struct Cli {
    /// Read the profile from a JSON file instead of prompting
    #[arg(long, short = 'p')]
    profile: Option<PathBuf>,

    /// JSON file overriding projection constants (kcal per kg/lb, weeks per month)
    #[arg(long, short = 's')]
    settings: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print activity level definitions and exit
    #[arg(long)]
    activity_info: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Logs go to stderr so stdout stays clean for `--json`.
///
/// `RUST_LOG` wins over `--verbose` when set.
fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

fn read_file(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
}

fn load_settings(path: &Path) -> CalcResult<CalculatorSettings> {
    debug!(path = %path.display(), "loading settings");
    CalculatorSettings::from_json(&read_file(path)?)
}

fn load_profile(path: &Path) -> CalcResult<UserProfile> {
    debug!(path = %path.display(), "loading profile");
    UserProfile::from_json(&read_file(path)?)
}

fn prompt_profile() -> UserProfile {
    println!("Calorie Counter");
    println!("===============");
    println!();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let profile = prompter.read_profile();
    println!();
    profile
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    if cli.activity_info {
        print!("{}", report::activity_info());
        return Ok(());
    }

    let settings = match &cli.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("invalid settings file {}", path.display()))?,
        None => CalculatorSettings::default(),
    };
    let engine = CalculationEngine::new(settings)?;

    let profile = match &cli.profile {
        Some(path) => load_profile(path)
            .with_context(|| format!("invalid profile file {}", path.display()))?,
        None => prompt_profile(),
    };

    let result = engine.calculate(&profile);
    info!(
        unit_system = %profile.unit_system,
        deficit = result.calorie_deficit,
        "calculation complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let note = if result.is_zero() {
            engine.check(&profile).err()
        } else {
            None
        };
        let report = report::render(&profile, &result, note.as_ref(), Local::now().date_naive())?;
        print!("{}", report);
    }

    Ok(())
}
