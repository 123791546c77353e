//! Per-run options from environment variables

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Theater whose seasonal profile drives the weather
    pub theater: String,

    /// Force clear skies (default: false)
    pub clear_weather: bool,
}

impl RunConfig {
    pub fn from_env() -> Result<Self> {
        let theater = env::var("BUZZ_THEATER").context("BUZZ_THEATER environment variable not set")?;

        let clear_weather = parse_flag(&env::var("BUZZ_CLEAR_WEATHER").unwrap_or_default())
            .context("Invalid BUZZ_CLEAR_WEATHER")?;

        Ok(Self {
            theater,
            clear_weather,
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" => Ok(false),
        "1" | "true" | "yes" => Ok(true),
        other => anyhow::bail!("expected a boolean, got {:?}", other),
    }
}
