//! Planned versus actual totals for one month of budget items

use serde::{Deserialize, Serialize};

use crate::records::{BudgetItem, CategoryKind};

/// Totals and derived rates for a set of budget items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_planned_income: f64,
    pub total_actual_income: f64,
    pub total_planned_expenses: f64,
    pub total_actual_expenses: f64,

    /// Planned income minus planned expenses
    pub planned_balance: f64,
    /// Actual income minus actual expenses
    pub actual_balance: f64,

    /// Actual balance as percent of actual income; 0 without income
    pub savings_rate: f64,

    /// Signed variance of actual against planned income
    pub income_variance: f64,
    /// Signed variance of actual against planned expenses
    pub expense_variance: f64,

    /// Actual expenses on items marked fixed
    pub fixed_expenses: f64,
    /// Actual expenses on the remaining items
    pub variable_expenses: f64,
}

/// Per-item spending against its planned amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseProgress {
    pub name: String,
    pub planned_amount: f64,
    pub actual_amount: f64,

    /// Percent of the planned amount spent; above 100 means overspend
    pub progress: f64,
    pub variance: f64,
}

/// `(actual - planned) / planned * 100`, or 0 when nothing was planned
///
/// Positive means actual exceeded plan: favorable for income, unfavorable
/// for expenses.
pub fn variance(planned: f64, actual: f64) -> f64 {
    if planned != 0.0 {
        (actual - planned) / planned * 100.0
    } else {
        0.0
    }
}

/// `actual / planned * 100` when planned is positive, else 0; not clamped
pub fn progress_vs_budget(planned: f64, actual: f64) -> f64 {
    if planned > 0.0 {
        actual / planned * 100.0
    } else {
        0.0
    }
}

/// `balance / income * 100` when income is positive, else 0
pub fn savings_rate(actual_balance: f64, total_actual_income: f64) -> f64 {
    if total_actual_income > 0.0 {
        actual_balance / total_actual_income * 100.0
    } else {
        0.0
    }
}

/// Aggregate budget items
pub fn summarize(items: &[BudgetItem]) -> BudgetSummary {
    let mut summary = BudgetSummary::default();

    for item in items {
        match item.category {
            CategoryKind::Income => {
                summary.total_planned_income += item.planned_amount;
                summary.total_actual_income += item.actual_amount;
            }
            CategoryKind::Expense => {
                summary.total_planned_expenses += item.planned_amount;
                summary.total_actual_expenses += item.actual_amount;
                if item.is_fixed {
                    summary.fixed_expenses += item.actual_amount;
                } else {
                    summary.variable_expenses += item.actual_amount;
                }
            }
        }
    }

    summary.planned_balance = summary.total_planned_income - summary.total_planned_expenses;
    summary.actual_balance = summary.total_actual_income - summary.total_actual_expenses;
    summary.savings_rate = savings_rate(summary.actual_balance, summary.total_actual_income);
    summary.income_variance = variance(summary.total_planned_income, summary.total_actual_income);
    summary.expense_variance = variance(summary.total_planned_expenses, summary.total_actual_expenses);

    summary
}

/// Progress lines for expense items, in input order
pub fn expense_progress(items: &[BudgetItem]) -> Vec<ExpenseProgress> {
    items
        .iter()
        .filter(|item| item.category == CategoryKind::Expense)
        .map(|item| ExpenseProgress {
            name: item.name.clone(),
            planned_amount: item.planned_amount,
            actual_amount: item.actual_amount,
            progress: progress_vs_budget(item.planned_amount, item.actual_amount),
            variance: variance(item.planned_amount, item.actual_amount),
        })
        .collect()
}
