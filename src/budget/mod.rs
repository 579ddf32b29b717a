//! Monthly budget aggregation, variance and month closure

mod closure;
mod summary;

pub use closure::{carry_forward, close_month};
pub use summary::{
    expense_progress, progress_vs_budget, savings_rate, summarize, variance, BudgetSummary,
    ExpenseProgress,
};
