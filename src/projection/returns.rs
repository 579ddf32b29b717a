//! Rate conversions

use crate::error::{PlannerError, Result};

/// Assumed inflation when none is configured, percent a.a.
pub const DEFAULT_INFLATION_RATE: f64 = 4.0;

/// Inflation-adjusted return in percent
///
/// Fisher relation: (1 + real) = (1 + nominal) / (1 + inflation)
pub fn real_return(nominal_pct: f64, inflation_pct: f64) -> Result<f64> {
    let inflation_factor = 1.0 + inflation_pct / 100.0;
    if inflation_factor <= 0.0 {
        return Err(PlannerError::DegenerateInflation(inflation_pct));
    }

    Ok(((1.0 + nominal_pct / 100.0) / inflation_factor - 1.0) * 100.0)
}

/// Equivalent monthly rate (decimal) for an annual percent rate
///
/// A loss of 100% or more maps to -1 (everything lost).
pub fn monthly_rate(annual_pct: f64) -> f64 {
    let factor = 1.0 + annual_pct / 100.0;
    if factor <= 0.0 {
        return -1.0;
    }
    factor.powf(1.0 / 12.0) - 1.0
}
