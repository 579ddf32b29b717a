//! Growth projections for assets, goals and retirement savings

mod annuity;
mod asset;
mod goal;
mod retirement;
mod returns;

pub use annuity::{fv_level_contributions, fv_lump_sum, pv_annuity_due};
pub use asset::{portfolio_allocation, project_asset, projected_value, AssetProjection, PortfolioSlice};
pub use goal::{goal_progress, months_in_span, pace_goal, GoalPacing, GoalProgress};
pub use retirement::{project_retirement, RetirementProjection};
pub use returns::{monthly_rate, real_return, DEFAULT_INFLATION_RATE};
