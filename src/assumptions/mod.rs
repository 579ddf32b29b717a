//! Planning assumptions: classification thresholds and economic rates
//!
//! Every value has a default matching the advisor screens. Assumptions can be
//! loaded from a JSON file (missing fields keep their defaults) and then
//! overridden from the environment.

mod diagnosis;
mod economic;

pub use diagnosis::{DiagnosisThresholds, RecommendationRule};
pub use economic::EconomicAssumptions;

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::Result;

/// Container for all planning assumptions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    pub diagnosis: DiagnosisThresholds,
    pub recommendation: RecommendationRule,
    pub economic: EconomicAssumptions,
}

impl Assumptions {
    /// Default assumptions used by the advisor screens
    pub fn default_planning() -> Self {
        Self::default()
    }

    /// Load assumptions from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let assumptions = serde_json::from_reader(file)?;
        log::debug!("loaded assumptions from {}", path.display());
        Ok(assumptions)
    }

    /// Apply `PLANNER_*` environment overrides; unparseable values are ignored
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(rate) = env_f64("PLANNER_INFLATION_RATE") {
            self.economic.inflation_rate = rate;
        }
        if let Some(rate) = env_f64("PLANNER_SAFE_WITHDRAWAL_RATE") {
            self.economic.safe_withdrawal_rate = rate;
        }
        if let Some(rate) = env_f64("PLANNER_HIGH_INTEREST_RATE") {
            self.recommendation.high_interest_rate = rate;
        }
        if let Some(share) = env_f64("PLANNER_AVALANCHE_SHARE") {
            self.recommendation.avalanche_share = share;
        }
        self
    }
}

fn env_f64(key: &str) -> Option<f64> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}
