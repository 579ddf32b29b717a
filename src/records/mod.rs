//! Client record types and CSV loading

mod data;
pub mod loader;

pub use data::{
    Asset, BudgetClosure, BudgetItem, CategoryKind, Debt, DebtStatus, FinancialGoal, Heir,
    PayoffMethod, RetirementPlan, SuccessionAsset,
};
pub use loader::{load_assets, load_budget_items, load_debts, load_goals};
