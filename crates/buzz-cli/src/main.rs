//! Weather buzzer
//!
//! Generates one set of scenario conditions for a theater and prints the
//! report as JSON on stdout. Logs go to stderr.

mod config;

use anyhow::{Context, Result};
use buzz_cli::Buzzer;
use buzz_config::BuzzConfig;
use tracing::info;

use crate::config::RunConfig;

fn main() -> Result<()> {
    buzz_obs::init("buzz");

    let run = RunConfig::from_env()?;
    info!(?run, "Loaded run configuration");

    let settings = BuzzConfig::load().context("Failed to load settings")?;
    let buzzer = Buzzer::new(settings)?;

    let today = chrono::Local::now().date_naive();
    let scenario = buzzer.buzz(&run.theater, run.clear_weather, today)?;

    let report = serde_json::to_string_pretty(&scenario.report())
        .context("Failed to serialize report")?;
    println!("{}", report);
    Ok(())
}
