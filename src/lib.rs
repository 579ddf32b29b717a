//! Financial Planner - calculation core for advisor planning screens
//!
//! This library provides:
//! - Debt diagnosis against income and snowball/avalanche payoff ordering
//! - Asset growth to maturity, real returns, goal pacing and progress
//! - Monthly budget totals, variance and month closure snapshots
//! - Retirement and succession projections
//! - pt-BR formatting of the results
//!
//! All calculations are pure functions over record values. Loading and
//! saving records is left to the caller.

pub mod assumptions;
pub mod budget;
pub mod calendar;
pub mod debt;
pub mod error;
pub mod format;
pub mod planner;
pub mod projection;
pub mod records;
pub mod succession;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use calendar::MonthKey;
pub use error::{PlannerError, Result};
pub use planner::{ClientOverview, ClientRecords, Planner};
pub use records::{Asset, BudgetClosure, BudgetItem, CategoryKind, Debt, DebtStatus, FinancialGoal, PayoffMethod};
