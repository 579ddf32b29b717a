//! Asset value at maturity and portfolio allocation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::months_between;
use crate::records::Asset;

/// Projected value of an asset at its maturity date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetProjection {
    /// Whole calendar months from today to maturity
    pub months_to_maturity: u32,
    pub years_to_maturity: f64,
    pub projected_value: f64,

    /// `projected_value - current_value`
    pub monetary_return: f64,
}

/// `current_value * (1 + annual_return_pct/100) ^ years`
///
/// The exponent may be fractional: annual compounding applied over a partial
/// year, not monthly compounding.
pub fn projected_value(current_value: f64, annual_return_pct: f64, years: f64) -> f64 {
    current_value * (1.0 + annual_return_pct / 100.0).powf(years)
}

/// Project an asset to maturity
///
/// Returns `None` when there is no positive expected return, no maturity date,
/// or the maturity falls in the current month or earlier.
pub fn project_asset(asset: &Asset, today: NaiveDate) -> Option<AssetProjection> {
    let expected_return = match asset.expected_return {
        Some(rate) if rate > 0.0 => rate,
        _ => {
            log::debug!("asset '{}' has no positive expected return, no projection", asset.description);
            return None;
        }
    };

    let Some(maturity) = asset.maturity_date else {
        log::debug!("asset '{}' has no maturity date, no projection", asset.description);
        return None;
    };

    let months = months_between(today, maturity);
    if months <= 0 {
        log::debug!("asset '{}' matured {} months ago, no projection", asset.description, -months);
        return None;
    }

    let years = months as f64 / 12.0;
    let projected = projected_value(asset.current_value, expected_return, years);

    Some(AssetProjection {
        months_to_maturity: months as u32,
        years_to_maturity: years,
        projected_value: projected,
        monetary_return: projected - asset.current_value,
    })
}

/// Share of the portfolio held in one asset type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSlice {
    pub asset_type: String,
    pub total_value: f64,
    /// Percent of the whole portfolio; 0 when the portfolio is empty
    pub share_percent: f64,
}

/// Group assets by type in first-seen order
pub fn portfolio_allocation(assets: &[Asset]) -> Vec<PortfolioSlice> {
    let mut slices: Vec<PortfolioSlice> = Vec::new();

    for asset in assets {
        match slices.iter_mut().find(|s| s.asset_type == asset.asset_type) {
            Some(slice) => slice.total_value += asset.current_value,
            None => slices.push(PortfolioSlice {
                asset_type: asset.asset_type.clone(),
                total_value: asset.current_value,
                share_percent: 0.0,
            }),
        }
    }

    let total: f64 = slices.iter().map(|s| s.total_value).sum();
    if total > 0.0 {
        for slice in &mut slices {
            slice.share_percent = slice.total_value / total * 100.0;
        }
    }

    slices
}
