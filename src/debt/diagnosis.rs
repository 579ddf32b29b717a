//! Debt-to-income diagnosis and payoff method recommendation

use serde::{Deserialize, Serialize};

use crate::assumptions::{Assumptions, DiagnosisThresholds, RecommendationRule};
use crate::records::{Debt, PayoffMethod};

/// Severity band of the debt-to-income ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl DiagnosisLevel {
    /// Classify a ratio (percent). Each band includes its lower bound.
    pub fn classify(ratio: f64, thresholds: &DiagnosisThresholds) -> Self {
        if ratio >= thresholds.critical {
            DiagnosisLevel::Critical
        } else if ratio >= thresholds.high {
            DiagnosisLevel::High
        } else if ratio >= thresholds.moderate {
            DiagnosisLevel::Moderate
        } else {
            DiagnosisLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosisLevel::Low => "low",
            DiagnosisLevel::Moderate => "moderate",
            DiagnosisLevel::High => "high",
            DiagnosisLevel::Critical => "critical",
        }
    }
}

/// Aggregate picture of a client's active debts against income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtDiagnosis {
    /// Sum of outstanding balances
    pub total_debt: f64,

    /// Sum of installments due each month
    pub total_monthly_payment: f64,

    /// Payment as percent of income; not clamped, may exceed 100
    pub debt_to_income_ratio: f64,

    pub diagnosis_level: DiagnosisLevel,

    pub active_count: usize,

    /// Active debts with rate above the high-interest threshold
    pub high_interest_count: usize,

    /// `None` when there are no active debts
    pub recommended_method: Option<PayoffMethod>,

    /// Sum of all remaining installments
    pub total_commitment: f64,
}

/// `payment / income * 100`, or 0 when income is not positive
pub fn debt_to_income_ratio(total_monthly_payment: f64, monthly_income: f64) -> f64 {
    if monthly_income > 0.0 {
        total_monthly_payment / monthly_income * 100.0
    } else {
        0.0
    }
}

/// Recommend avalanche when high-rate debts dominate, snowball otherwise
pub fn recommend_method(debts: &[Debt], rule: &RecommendationRule) -> Option<PayoffMethod> {
    let active: Vec<&Debt> = debts.iter().filter(|d| d.is_active()).collect();
    if active.is_empty() {
        log::debug!("no active debts, skipping payoff recommendation");
        return None;
    }

    let high_interest = count_high_interest(&active, rule);
    let share = high_interest as f64 / active.len() as f64;

    if share > rule.avalanche_share {
        Some(PayoffMethod::Avalanche)
    } else {
        Some(PayoffMethod::Snowball)
    }
}

fn count_high_interest(active: &[&Debt], rule: &RecommendationRule) -> usize {
    active
        .iter()
        .filter(|d| d.interest_rate > rule.high_interest_rate)
        .count()
}

/// Diagnose a client's debts against monthly income
pub fn diagnose(debts: &[Debt], monthly_income: f64, assumptions: &Assumptions) -> DebtDiagnosis {
    let active: Vec<&Debt> = debts.iter().filter(|d| d.is_active()).collect();

    let total_debt: f64 = active.iter().map(|d| d.total_amount).sum();
    let total_monthly_payment: f64 = active.iter().map(|d| d.installment_value).sum();
    let total_commitment: f64 = active.iter().map(|d| d.remaining_commitment()).sum();

    if monthly_income <= 0.0 {
        log::debug!("monthly income is {}, debt-to-income ratio falls back to 0", monthly_income);
    }
    let ratio = debt_to_income_ratio(total_monthly_payment, monthly_income);

    DebtDiagnosis {
        total_debt,
        total_monthly_payment,
        debt_to_income_ratio: ratio,
        diagnosis_level: DiagnosisLevel::classify(ratio, &assumptions.diagnosis),
        active_count: active.len(),
        high_interest_count: count_high_interest(&active, &assumptions.recommendation),
        recommended_method: recommend_method(debts, &assumptions.recommendation),
        total_commitment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::DebtStatus;
    use approx::assert_relative_eq;

    fn debt(id: &str, total: f64, installment: f64, rate: f64) -> Debt {
        Debt::new(id, id, total, installment, 10, rate)
    }

    #[test]
    fn test_totals_only_count_active() {
        let debts = vec![
            debt("a", 1000.0, 100.0, 2.0),
            debt("b", 500.0, 50.0, 2.0).with_status(DebtStatus::Paid),
            debt("c", 700.0, 70.0, 2.0).with_status(DebtStatus::Negotiated),
        ];

        let d = diagnose(&debts, 1000.0, &Assumptions::default_planning());
        assert_eq!(d.total_debt, 1000.0);
        assert_eq!(d.total_monthly_payment, 100.0);
        assert_eq!(d.active_count, 1);
        assert_eq!(d.total_commitment, 1000.0);
        assert_relative_eq!(d.debt_to_income_ratio, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_income_gives_zero_ratio() {
        let debts = vec![debt("a", 1000.0, 900.0, 2.0)];
        let d = diagnose(&debts, 0.0, &Assumptions::default_planning());
        assert_eq!(d.debt_to_income_ratio, 0.0);
        assert_eq!(d.diagnosis_level, DiagnosisLevel::Low);
    }

    #[test]
    fn test_ratio_is_not_clamped() {
        assert_relative_eq!(debt_to_income_ratio(3000.0, 2000.0), 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_level_boundaries_are_inclusive() {
        let t = DiagnosisThresholds::default();
        assert_eq!(DiagnosisLevel::classify(50.0, &t), DiagnosisLevel::Critical);
        assert_eq!(DiagnosisLevel::classify(49.999, &t), DiagnosisLevel::High);
        assert_eq!(DiagnosisLevel::classify(30.0, &t), DiagnosisLevel::High);
        assert_eq!(DiagnosisLevel::classify(29.999, &t), DiagnosisLevel::Moderate);
        assert_eq!(DiagnosisLevel::classify(15.0, &t), DiagnosisLevel::Moderate);
        assert_eq!(DiagnosisLevel::classify(14.999, &t), DiagnosisLevel::Low);
    }

    #[test]
    fn test_recommendation_thresholds() {
        let rule = RecommendationRule::default();

        // 2 of 3 above 3% -> 0.667 > 0.6
        let mostly_high = vec![debt("a", 1.0, 1.0, 5.0), debt("b", 1.0, 1.0, 4.0), debt("c", 1.0, 1.0, 1.0)];
        assert_eq!(recommend_method(&mostly_high, &rule), Some(PayoffMethod::Avalanche));

        // 3 of 5 -> exactly 0.6 is not enough; a rate of exactly 3% is not high
        let borderline = vec![
            debt("a", 1.0, 1.0, 5.0),
            debt("b", 1.0, 1.0, 5.0),
            debt("c", 1.0, 1.0, 5.0),
            debt("d", 1.0, 1.0, 3.0),
            debt("e", 1.0, 1.0, 0.0),
        ];
        assert_eq!(recommend_method(&borderline, &rule), Some(PayoffMethod::Snowball));
    }

    #[test]
    fn test_no_active_debts_has_no_recommendation() {
        let debts = vec![debt("a", 1000.0, 100.0, 9.0).with_status(DebtStatus::Paid)];
        let d = diagnose(&debts, 5000.0, &Assumptions::default_planning());

        assert_eq!(d.recommended_method, None);
        assert_eq!(d.total_debt, 0.0);
        assert_eq!(d.high_interest_count, 0);
        assert_eq!(diagnose(&[], 0.0, &Assumptions::default_planning()).recommended_method, None);
    }

    #[test]
    fn test_diagnose_is_deterministic() {
        let debts = vec![debt("a", 1234.56, 321.0, 4.2), debt("b", 99.9, 12.3, 0.7)];
        let a = Assumptions::default_planning();
        let first = diagnose(&debts, 4321.0, &a);
        let second = diagnose(&debts, 4321.0, &a);
        assert_eq!(first.debt_to_income_ratio.to_bits(), second.debt_to_income_ratio.to_bits());
        assert_eq!(first, second);
    }
}
