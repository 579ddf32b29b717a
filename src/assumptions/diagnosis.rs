//! Debt diagnosis bands and payoff recommendation rule

use serde::{Deserialize, Serialize};

/// Lower bounds (inclusive) of each debt-to-income band, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosisThresholds {
    pub critical: f64,
    pub high: f64,
    pub moderate: f64,
}

impl Default for DiagnosisThresholds {
    fn default() -> Self {
        Self {
            critical: 50.0,
            high: 30.0,
            moderate: 15.0,
        }
    }
}

/// Rule choosing avalanche over snowball
///
/// Avalanche is recommended when the share of active debts whose rate is
/// strictly above `high_interest_rate` is strictly above `avalanche_share`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRule {
    /// Percent per period
    pub high_interest_rate: f64,
    /// Fraction in [0, 1]
    pub avalanche_share: f64,
}

impl Default for RecommendationRule {
    fn default() -> Self {
        Self {
            high_interest_rate: 3.0,
            avalanche_share: 0.6,
        }
    }
}
