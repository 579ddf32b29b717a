//! Month closure snapshots and next-month carry-forward
//!
//! Both functions only build values. Persisting the closure, reopening a
//! month and inserting next month's items belong to the caller.

use super::summary::summarize;
use crate::calendar::MonthKey;
use crate::records::{BudgetClosure, BudgetItem};

fn items_in_month(items: &[BudgetItem], month: MonthKey) -> Vec<BudgetItem> {
    let (in_month, other): (Vec<&BudgetItem>, Vec<&BudgetItem>) =
        items.iter().partition(|item| item.month_year == month);

    if !other.is_empty() {
        log::debug!("ignoring {} budget items outside {}", other.len(), month);
    }

    in_month.into_iter().cloned().collect()
}

/// Snapshot the four totals of a month
///
/// Items belonging to other months are ignored.
pub fn close_month(items: &[BudgetItem], month: MonthKey) -> BudgetClosure {
    let summary = summarize(&items_in_month(items, month));

    BudgetClosure {
        month_year: month,
        total_planned_income: summary.total_planned_income,
        total_actual_income: summary.total_actual_income,
        total_planned_expenses: summary.total_planned_expenses,
        total_actual_expenses: summary.total_actual_expenses,
    }
}

/// Items for the month after `month`: planned amounts kept, actuals reset
pub fn carry_forward(items: &[BudgetItem], month: MonthKey) -> Vec<BudgetItem> {
    let next = month.succ();

    items_in_month(items, month)
        .into_iter()
        .map(|item| BudgetItem {
            actual_amount: 0.0,
            month_year: next,
            ..item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::CategoryKind;

    fn month(y: i32, m: u32) -> MonthKey {
        MonthKey::new(y, m).unwrap()
    }

    fn items() -> Vec<BudgetItem> {
        vec![
            BudgetItem::new("Salário", CategoryKind::Income, 5000.0, 5200.0, month(2024, 12)).fixed(),
            BudgetItem::new("Aluguel", CategoryKind::Expense, 1500.0, 1500.0, month(2024, 12)).fixed(),
            BudgetItem::new("Mercado", CategoryKind::Expense, 800.0, 950.0, month(2024, 12)),
            BudgetItem::new("Mercado", CategoryKind::Expense, 800.0, 700.0, month(2024, 11)),
        ]
    }

    #[test]
    fn test_close_month_totals() {
        let closure = close_month(&items(), month(2024, 12));

        assert_eq!(closure.month_year, month(2024, 12));
        assert_eq!(closure.total_planned_income, 5000.0);
        assert_eq!(closure.total_actual_income, 5200.0);
        assert_eq!(closure.total_planned_expenses, 2300.0);
        assert_eq!(closure.total_actual_expenses, 2450.0);
    }

    #[test]
    fn test_close_empty_month() {
        let closure = close_month(&items(), month(2025, 3));
        assert_eq!(closure.total_planned_income, 0.0);
        assert_eq!(closure.total_actual_expenses, 0.0);
    }

    #[test]
    fn test_close_month_is_repeatable() {
        let source = items();
        assert_eq!(close_month(&source, month(2024, 12)), close_month(&source, month(2024, 12)));
    }

    #[test]
    fn test_carry_forward_resets_actuals() {
        let next = carry_forward(&items(), month(2024, 12));

        assert_eq!(next.len(), 3);
        assert!(next.iter().all(|i| i.month_year == month(2025, 1)));
        assert!(next.iter().all(|i| i.actual_amount == 0.0));
        assert_eq!(next[0].planned_amount, 5000.0);
        assert!(next[0].is_fixed);
        assert!(!next[2].is_fixed);
    }
}
