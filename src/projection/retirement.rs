//! Retirement savings projection in today's money

use serde::{Deserialize, Serialize};

use super::annuity::{fv_level_contributions, fv_lump_sum, pv_annuity_due};
use super::returns::{monthly_rate, real_return};
use crate::assumptions::EconomicAssumptions;
use crate::error::Result;
use crate::records::RetirementPlan;

/// Savings at retirement against the capital needed to fund the desired income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementProjection {
    pub months_to_retirement: u32,
    pub months_in_retirement: u32,

    /// Real annual return used for every value below, percent
    pub real_annual_return: f64,

    /// Savings plus contributions grown to retirement
    pub projected_savings: f64,

    /// PV at retirement of the desired income until life expectancy
    pub required_capital: f64,

    /// Capital whose safe withdrawal pays the desired income indefinitely
    pub perpetual_capital: f64,

    pub shortfall: f64,

    /// `projected / required * 100`; not clamped
    pub coverage: f64,
}

/// Project a retirement plan
///
/// Fails only when the configured inflation leaves the real return undefined.
pub fn project_retirement(plan: &RetirementPlan, economic: &EconomicAssumptions) -> Result<RetirementProjection> {
    let real = real_return(plan.expected_return, economic.inflation_rate)?;
    let rate = monthly_rate(real);

    let months_to_retirement = plan.retirement_age.saturating_sub(plan.current_age) * 12;
    let months_in_retirement = plan.life_expectancy.saturating_sub(plan.retirement_age) * 12;

    let projected_savings = fv_lump_sum(plan.current_savings, months_to_retirement, rate)
        + fv_level_contributions(plan.monthly_contribution, months_to_retirement, rate);

    let required_capital = pv_annuity_due(plan.desired_monthly_income, months_in_retirement, rate);

    let perpetual_capital = if economic.safe_withdrawal_rate > 0.0 {
        plan.desired_monthly_income * 12.0 / (economic.safe_withdrawal_rate / 100.0)
    } else {
        0.0
    };

    let coverage = if required_capital > 0.0 {
        projected_savings / required_capital * 100.0
    } else {
        0.0
    };

    Ok(RetirementProjection {
        months_to_retirement,
        months_in_retirement,
        real_annual_return: real,
        projected_savings,
        required_capital,
        perpetual_capital,
        shortfall: (required_capital - projected_savings).max(0.0),
        coverage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use approx::assert_abs_diff_eq;

    fn plan() -> RetirementPlan {
        RetirementPlan {
            current_age: 40,
            retirement_age: 65,
            life_expectancy: 85,
            current_savings: 100_000.0,
            monthly_contribution: 1_000.0,
            expected_return: 4.0,
            desired_monthly_income: 5_000.0,
        }
    }

    #[test]
    fn test_zero_real_return_is_plain_arithmetic() {
        // nominal equal to inflation -> real 0%
        let p = project_retirement(&plan(), &EconomicAssumptions::default()).unwrap();

        assert_eq!(p.months_to_retirement, 300);
        assert_eq!(p.months_in_retirement, 240);
        assert_abs_diff_eq!(p.real_annual_return, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.projected_savings, 400_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.required_capital, 1_200_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.shortfall, 800_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.coverage, 100.0 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.perpetual_capital, 1_500_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_positive_real_return_grows_savings() {
        let mut richer = plan();
        richer.expected_return = 10.0;
        let p = project_retirement(&richer, &EconomicAssumptions::default()).unwrap();

        assert!(p.projected_savings > 400_000.0);
        assert!(p.required_capital < 1_200_000.0);
    }

    #[test]
    fn test_already_retired() {
        let mut retired = plan();
        retired.current_age = 70;
        let p = project_retirement(&retired, &EconomicAssumptions::default()).unwrap();

        assert_eq!(p.months_to_retirement, 0);
        assert_abs_diff_eq!(p.projected_savings, 100_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_no_income_needed() {
        let mut frugal = plan();
        frugal.desired_monthly_income = 0.0;
        let p = project_retirement(&frugal, &EconomicAssumptions::default()).unwrap();

        assert_eq!(p.required_capital, 0.0);
        assert_eq!(p.coverage, 0.0);
        assert_eq!(p.shortfall, 0.0);
    }

    #[test]
    fn test_total_loss_return() {
        let mut doomed = plan();
        doomed.expected_return = -100.0;
        let p = project_retirement(&doomed, &EconomicAssumptions::default()).unwrap();

        assert_abs_diff_eq!(p.real_annual_return, -100.0, epsilon = 1e-9);
        // only the final contribution survives; only the first payment is needed
        assert_abs_diff_eq!(p.projected_savings, 1_000.0, epsilon = 1e-9);
        assert!(p.required_capital.is_finite());
        assert_abs_diff_eq!(p.required_capital, 5_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.shortfall, 4_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.coverage, 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_inflation_is_rejected() {
        let economic = EconomicAssumptions { inflation_rate: -100.0, ..Default::default() };
        assert!(matches!(project_retirement(&plan(), &economic), Err(PlannerError::DegenerateInflation(_))));
    }
}
