//! Estate distribution across heirs

use serde::{Deserialize, Serialize};

use crate::records::{Heir, SuccessionAsset};

/// Shares summing within this distance of 100 are treated as complete
const SHARE_TOLERANCE: f64 = 0.01;

/// Amount one heir receives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeirAllocation {
    pub name: String,
    pub share_percent: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessionDistribution {
    pub estate_value: f64,

    /// Sum of heir shares, percent
    pub share_total: f64,

    /// Estate value not covered by any share; negative when over-allocated
    pub unallocated: f64,

    pub allocations: Vec<HeirAllocation>,
}

impl SuccessionDistribution {
    pub fn is_fully_allocated(&self) -> bool {
        (self.share_total - 100.0).abs() <= SHARE_TOLERANCE
    }
}

/// Split the estate by heir share
pub fn distribute(heirs: &[Heir], assets: &[SuccessionAsset]) -> SuccessionDistribution {
    let estate_value: f64 = assets.iter().map(|a| a.value).sum();
    let share_total: f64 = heirs.iter().map(|h| h.share_percent).sum();

    let allocations: Vec<HeirAllocation> = heirs
        .iter()
        .map(|heir| HeirAllocation {
            name: heir.name.clone(),
            share_percent: heir.share_percent,
            amount: estate_value * heir.share_percent / 100.0,
        })
        .collect();

    let allocated: f64 = allocations.iter().map(|a| a.amount).sum();

    let distribution = SuccessionDistribution {
        estate_value,
        share_total,
        unallocated: estate_value - allocated,
        allocations,
    };

    if !heirs.is_empty() && !distribution.is_fully_allocated() {
        log::warn!("heir shares sum to {:.2}%, not 100%", share_total);
    }

    distribution
}
