//! Economic rates used by projections

use serde::{Deserialize, Serialize};

use crate::projection::DEFAULT_INFLATION_RATE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicAssumptions {
    /// Assumed inflation, percent a.a.
    pub inflation_rate: f64,

    /// Annual withdrawal rate used to size a retirement nest egg, percent a.a.
    pub safe_withdrawal_rate: f64,
}

impl Default for EconomicAssumptions {
    fn default() -> Self {
        Self {
            inflation_rate: DEFAULT_INFLATION_RATE,
            safe_withdrawal_rate: 4.0,
        }
    }
}
