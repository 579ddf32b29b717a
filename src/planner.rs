//! Planner: runs every calculation for a client with one set of assumptions
//!
//! The planner holds no client state. Each call reads the records it is given
//! and returns new values, so one planner can serve many clients at once.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::Assumptions;
use crate::budget::{summarize, BudgetSummary};
use crate::calendar::MonthKey;
use crate::debt::{diagnose, payoff_plan, recommend_method, DebtDiagnosis, PayoffStep};
use crate::error::Result;
use crate::projection::{
    goal_progress, pace_goal, portfolio_allocation, project_asset, project_retirement, real_return,
    AssetProjection, GoalPacing, GoalProgress, PortfolioSlice, RetirementProjection,
};
use crate::records::{
    Asset, BudgetItem, Debt, FinancialGoal, Heir, PayoffMethod, RetirementPlan, SuccessionAsset,
};
use crate::succession::{distribute, SuccessionDistribution};

/// Everything known about one client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientRecords {
    pub client_id: String,
    pub monthly_income: f64,
    pub debts: Vec<Debt>,
    pub budget_items: Vec<BudgetItem>,
    pub assets: Vec<Asset>,
    pub goals: Vec<FinancialGoal>,
    pub retirement: Option<RetirementPlan>,
    pub heirs: Vec<Heir>,
    pub succession_assets: Vec<SuccessionAsset>,
}

/// An asset with its projection and inflation-adjusted return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetOverview {
    pub asset: Asset,
    /// `None` when no projection is available
    pub projection: Option<AssetProjection>,
    /// `None` when the asset has no expected return
    pub real_return: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalOverview {
    pub name: String,
    pub pacing: GoalPacing,
    pub progress: GoalProgress,
}

/// Combined results for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientOverview {
    pub client_id: String,
    pub month: MonthKey,
    pub debts: DebtDiagnosis,
    pub budget: BudgetSummary,
    pub assets: Vec<AssetOverview>,
    pub portfolio: Vec<PortfolioSlice>,
    pub goals: Vec<GoalOverview>,
    pub retirement: Option<RetirementProjection>,
    pub succession: Option<SuccessionDistribution>,
}

/// Runs calculations against a fixed set of assumptions
#[derive(Debug, Clone, Default)]
pub struct Planner {
    assumptions: Assumptions,
}

impl Planner {
    /// Planner with default assumptions
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default_planning())
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }

    pub fn diagnose_debts(&self, debts: &[Debt], monthly_income: f64) -> DebtDiagnosis {
        diagnose(debts, monthly_income, &self.assumptions)
    }

    /// Payoff plan using `method`, or the recommended method when `None`
    ///
    /// Empty when there are no active debts and no method was given.
    pub fn payoff_plan<'a>(&self, debts: &'a [Debt], method: Option<PayoffMethod>) -> Vec<PayoffStep<'a>> {
        let method = method.or_else(|| recommend_method(debts, &self.assumptions.recommendation));
        match method {
            Some(method) => payoff_plan(debts, method),
            None => Vec::new(),
        }
    }

    /// Nominal return adjusted by the configured inflation
    pub fn real_return(&self, nominal_pct: f64) -> Result<f64> {
        real_return(nominal_pct, self.assumptions.economic.inflation_rate)
    }

    pub fn asset_overview(&self, asset: &Asset, today: NaiveDate) -> Result<AssetOverview> {
        let real = asset.expected_return.map(|r| self.real_return(r)).transpose()?;

        Ok(AssetOverview {
            asset: asset.clone(),
            projection: project_asset(asset, today),
            real_return: real,
        })
    }

    pub fn goal_overview(&self, goal: &FinancialGoal) -> GoalOverview {
        GoalOverview {
            name: goal.name.clone(),
            pacing: pace_goal(goal),
            progress: goal_progress(goal.current_value, goal.target_value),
        }
    }

    pub fn retirement(&self, plan: &RetirementPlan) -> Result<RetirementProjection> {
        project_retirement(plan, &self.assumptions.economic)
    }

    /// Run every calculation for a client
    ///
    /// The budget summary covers only items dated in `month`.
    pub fn overview(&self, records: &ClientRecords, month: MonthKey, today: NaiveDate) -> Result<ClientOverview> {
        let month_items: Vec<BudgetItem> = records
            .budget_items
            .iter()
            .filter(|item| item.month_year == month)
            .cloned()
            .collect();

        let assets = records
            .assets
            .iter()
            .map(|asset| self.asset_overview(asset, today))
            .collect::<Result<Vec<_>>>()?;

        let retirement = records.retirement.as_ref().map(|plan| self.retirement(plan)).transpose()?;

        let succession = if records.heirs.is_empty() && records.succession_assets.is_empty() {
            None
        } else {
            Some(distribute(&records.heirs, &records.succession_assets))
        };

        log::debug!(
            "overview for client {}: {} debts, {} budget items in {}, {} assets, {} goals",
            records.client_id,
            records.debts.len(),
            month_items.len(),
            month,
            records.assets.len(),
            records.goals.len()
        );

        Ok(ClientOverview {
            client_id: records.client_id.clone(),
            month,
            debts: self.diagnose_debts(&records.debts, records.monthly_income),
            budget: summarize(&month_items),
            assets,
            portfolio: portfolio_allocation(&records.assets),
            goals: records.goals.iter().map(|g| self.goal_overview(g)).collect(),
            retirement,
            succession,
        })
    }

    /// Overviews for many clients, computed in parallel, in input order
    pub fn overviews(&self, clients: &[ClientRecords], month: MonthKey, today: NaiveDate) -> Vec<Result<ClientOverview>> {
        clients
            .par_iter()
            .map(|records| self.overview(records, month, today))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::DiagnosisLevel;
    use crate::error::PlannerError;
    use crate::records::{CategoryKind, DebtStatus};
    use approx::assert_abs_diff_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn june() -> MonthKey {
        MonthKey::new(2024, 6).unwrap()
    }

    fn client(id: &str) -> ClientRecords {
        ClientRecords {
            client_id: id.to_string(),
            monthly_income: 10_000.0,
            debts: vec![
                Debt::new("d1", "Cartão", 4000.0, 2000.0, 2, 14.0),
                Debt::new("d2", "Carro", 30_000.0, 1500.0, 20, 1.8),
                Debt::new("d3", "Antigo", 9000.0, 900.0, 0, 5.0).with_status(DebtStatus::Paid),
            ],
            budget_items: vec![
                BudgetItem::new("Salário", CategoryKind::Income, 10_000.0, 10_000.0, june()),
                BudgetItem::new("Aluguel", CategoryKind::Expense, 3000.0, 3000.0, june()),
                BudgetItem::new("Aluguel", CategoryKind::Expense, 3000.0, 3100.0, MonthKey::new(2024, 5).unwrap()),
            ],
            assets: vec![Asset {
                asset_type: "CDB".to_string(),
                description: "Banco A".to_string(),
                current_value: 1000.0,
                expected_return: Some(10.0),
                maturity_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            }],
            goals: vec![FinancialGoal {
                name: "Viagem".to_string(),
                target_value: 3000.0,
                current_value: 600.0,
                start_month: june(),
                end_month: MonthKey::new(2024, 11).unwrap(),
                monthly_contribution: None,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_overview_composes_all_parts() {
        let planner = Planner::new();
        let o = planner.overview(&client("c1"), june(), today()).unwrap();

        assert_eq!(o.client_id, "c1");
        assert_abs_diff_eq!(o.debts.total_debt, 34_000.0);
        assert_abs_diff_eq!(o.debts.debt_to_income_ratio, 35.0, epsilon = 1e-9);
        assert_eq!(o.debts.diagnosis_level, DiagnosisLevel::High);

        // May item excluded
        assert_abs_diff_eq!(o.budget.total_actual_expenses, 3000.0);
        assert_abs_diff_eq!(o.budget.savings_rate, 70.0, epsilon = 1e-9);

        let projection = o.assets[0].projection.as_ref().unwrap();
        assert_abs_diff_eq!(projection.projected_value, 1100.0, epsilon = 0.005);
        assert!(o.assets[0].real_return.unwrap() > 5.7);

        assert_eq!(o.goals[0].pacing.months, 6);
        assert_abs_diff_eq!(o.goals[0].pacing.monthly_average, 400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(o.goals[0].progress.progress, 20.0, epsilon = 1e-9);

        assert!(o.retirement.is_none());
        assert!(o.succession.is_none());
    }

    #[test]
    fn test_payoff_plan_defaults_to_recommendation() {
        let planner = Planner::new();
        let records = client("c1");

        // one of two active debts above 3% -> snowball
        let plan = planner.payoff_plan(&records.debts, None);
        assert_eq!(plan[0].debt.id, "d1");

        let plan = planner.payoff_plan(&records.debts, Some(PayoffMethod::Avalanche));
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[1].debt.id, "d2");

        assert!(planner.payoff_plan(&[], None).is_empty());
    }

    #[test]
    fn test_batch_preserves_order() {
        let planner = Planner::new();
        let clients: Vec<_> = (0..8).map(|i| client(&format!("c{}", i))).collect();

        let results = planner.overviews(&clients, june(), today());
        assert_eq!(results.len(), 8);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.as_ref().unwrap().client_id, format!("c{}", i));
        }
    }

    #[test]
    fn test_degenerate_inflation_surfaces_as_error() {
        let mut planner = Planner::new();
        planner.assumptions_mut().economic.inflation_rate = -100.0;

        let err = planner.overview(&client("c1"), june(), today()).unwrap_err();
        assert!(matches!(err, PlannerError::DegenerateInflation(_)));
    }

    #[test]
    fn test_overview_is_deterministic() {
        let planner = Planner::new();
        let records = client("c1");
        let first = planner.overview(&records, june(), today()).unwrap();
        let second = planner.overview(&records, june(), today()).unwrap();
        assert_eq!(first, second);
    }
}
