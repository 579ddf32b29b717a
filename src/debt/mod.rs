//! Debt diagnosis and payoff ordering
//!
//! Only debts with status `active` take part in any of these calculations.

mod diagnosis;
mod ordering;

pub use diagnosis::{
    debt_to_income_ratio, diagnose, recommend_method, DebtDiagnosis, DiagnosisLevel,
};
pub use ordering::{avalanche_order, payoff_order, payoff_plan, snowball_order, PayoffStep};
