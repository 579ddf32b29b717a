//! Snowball and avalanche payoff ordering
//!
//! Both orderings use a stable sort, so debts with equal keys keep the order
//! they were given in.

use serde::Serialize;

use crate::records::{Debt, PayoffMethod};

/// One position in a payoff plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoffStep<'a> {
    /// 1-based position
    pub rank: usize,
    pub debt: &'a Debt,
}

fn active(debts: &[Debt]) -> Vec<&Debt> {
    debts.iter().filter(|d| d.is_active()).collect()
}

/// Active debts by ascending balance
pub fn snowball_order(debts: &[Debt]) -> Vec<&Debt> {
    let mut ordered = active(debts);
    ordered.sort_by(|a, b| a.total_amount.total_cmp(&b.total_amount));
    ordered
}

/// Active debts by descending interest rate
pub fn avalanche_order(debts: &[Debt]) -> Vec<&Debt> {
    let mut ordered = active(debts);
    ordered.sort_by(|a, b| b.interest_rate.total_cmp(&a.interest_rate));
    ordered
}

pub fn payoff_order(debts: &[Debt], method: PayoffMethod) -> Vec<&Debt> {
    match method {
        PayoffMethod::Snowball => snowball_order(debts),
        PayoffMethod::Avalanche => avalanche_order(debts),
    }
}

/// Payoff order with explicit 1-based ranks
pub fn payoff_plan(debts: &[Debt], method: PayoffMethod) -> Vec<PayoffStep<'_>> {
    payoff_order(debts, method)
        .into_iter()
        .enumerate()
        .map(|(i, debt)| PayoffStep { rank: i + 1, debt })
        .collect()
}
