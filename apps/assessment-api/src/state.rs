//! Application state

use anyhow::{Context, Result};
use eligibility_engine::{table, EligibilityEngine, LimitsConfig};
use tracing::info;

pub struct AppState {
    pub engine: EligibilityEngine,
}

impl AppState {
    pub fn new() -> Result<Self> {
        // Malformed rule tables are a configuration defect; refuse to start.
        table::validate_all().context("rule table validation failed")?;

        let mut limits = LimitsConfig::default();
        if let Some(v) = env_f64("MAX_HEIGHT_M")? {
            limits.max_height_m = v;
        }
        if let Some(v) = env_f64("SETBACK_URBAN_M")? {
            limits.urban_setback_m = v;
        }
        if let Some(v) = env_f64("SETBACK_RURAL_M")? {
            limits.rural_setback_m = v;
        }
        info!(
            "Thresholds: height <= {}m, setbacks urban >= {}m / rural >= {}m",
            limits.max_height_m, limits.urban_setback_m, limits.rural_setback_m
        );

        Ok(Self {
            engine: EligibilityEngine::with_limits(limits),
        })
    }
}

fn env_f64(name: &str) -> Result<Option<f64>> {
    match std::env::var(name) {
        Ok(raw) => {
            let value: f64 = raw
                .parse()
                .with_context(|| format!("{} must be a number, got `{}`", name, raw))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}
