//! Client record value types consumed by the calculations
//!
//! These mirror the rows kept by the persistence layer. The core only reads
//! them; creating, editing and deleting records happens elsewhere.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::MonthKey;
use crate::error::PlannerError;

/// Lifecycle status of a debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    /// Still being paid; the only status that enters diagnosis and ordering
    Active,
    /// Renegotiated with the creditor
    Negotiated,
    Paid,
}

impl std::str::FromStr for DebtStatus {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(DebtStatus::Active),
            "negotiated" => Ok(DebtStatus::Negotiated),
            "paid" => Ok(DebtStatus::Paid),
            other => Err(PlannerError::UnknownVariant {
                field: "debt status",
                value: other.to_string(),
            }),
        }
    }
}

/// Debt payoff ordering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffMethod {
    /// Smallest outstanding balance first
    Snowball,
    /// Highest interest rate first
    Avalanche,
}

impl PayoffMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffMethod::Snowball => "snowball",
            PayoffMethod::Avalanche => "avalanche",
        }
    }
}

impl std::str::FromStr for PayoffMethod {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snowball" => Ok(PayoffMethod::Snowball),
            "avalanche" => Ok(PayoffMethod::Avalanche),
            other => Err(PlannerError::UnknownVariant {
                field: "payoff method",
                value: other.to_string(),
            }),
        }
    }
}

/// A client debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub institution: Option<String>,

    /// Outstanding balance
    pub total_amount: f64,

    /// Value of each installment
    pub installment_value: f64,

    pub remaining_installments: u32,

    /// Interest rate in percent per period (may be 0)
    pub interest_rate: f64,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    pub status: DebtStatus,

    /// Payoff method hint chosen by the advisor
    #[serde(default)]
    pub payoff_method: Option<PayoffMethod>,
}

impl Debt {
    /// Create an active debt with no institution, due date or method hint
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        total_amount: f64,
        installment_value: f64,
        remaining_installments: u32,
        interest_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            institution: None,
            total_amount,
            installment_value,
            remaining_installments,
            interest_rate,
            due_date: None,
            status: DebtStatus::Active,
            payoff_method: None,
        }
    }

    pub fn with_status(mut self, status: DebtStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == DebtStatus::Active
    }

    /// Sum of all installments still to be paid
    pub fn remaining_commitment(&self) -> f64 {
        self.installment_value * self.remaining_installments as f64
    }
}

/// Whether a budget category holds income or expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl std::str::FromStr for CategoryKind {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(CategoryKind::Income),
            "expense" => Ok(CategoryKind::Expense),
            other => Err(PlannerError::UnknownVariant {
                field: "category",
                value: other.to_string(),
            }),
        }
    }
}

/// One planned/actual line of a monthly budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub name: String,
    pub category: CategoryKind,
    #[serde(default)]
    pub planned_amount: f64,
    #[serde(default)]
    pub actual_amount: f64,
    #[serde(default)]
    pub is_fixed: bool,
    pub month_year: MonthKey,
}

impl BudgetItem {
    pub fn new(
        name: impl Into<String>,
        category: CategoryKind,
        planned_amount: f64,
        actual_amount: f64,
        month_year: MonthKey,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            planned_amount,
            actual_amount,
            is_fixed: false,
            month_year,
        }
    }

    pub fn fixed(mut self) -> Self {
        self.is_fixed = true;
        self
    }
}

/// An investment or holding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset class, e.g. "CDB", "Tesouro", "Imóvel"
    pub asset_type: String,
    #[serde(default)]
    pub description: String,
    pub current_value: f64,

    /// Expected annual return in percent; `None` or `<= 0` means no projection
    #[serde(default)]
    pub expected_return: Option<f64>,

    #[serde(default)]
    pub maturity_date: Option<NaiveDate>,
}

/// A savings goal with a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub name: String,
    pub target_value: f64,
    #[serde(default)]
    pub current_value: f64,
    pub start_month: MonthKey,

    /// Deadline month (inclusive)
    pub end_month: MonthKey,

    /// Contribution set by the advisor, if any
    #[serde(default)]
    pub monthly_contribution: Option<f64>,
}

/// Totals recorded when a budget month is closed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetClosure {
    pub month_year: MonthKey,
    pub total_planned_income: f64,
    pub total_actual_income: f64,
    pub total_planned_expenses: f64,
    pub total_actual_expenses: f64,
}

/// A beneficiary of a succession plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heir {
    pub name: String,
    #[serde(default)]
    pub relationship: Option<String>,

    /// Share of the estate in percent
    pub share_percent: f64,
}

/// An estate item included in a succession plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessionAsset {
    pub description: String,
    pub value: f64,
}

/// Retirement savings plan inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlan {
    pub current_age: u32,
    pub retirement_age: u32,

    /// Age up to which retirement income must be funded
    pub life_expectancy: u32,

    pub current_savings: f64,
    pub monthly_contribution: f64,

    /// Expected nominal return in percent a.a.
    pub expected_return: f64,

    /// Desired income in today's money
    pub desired_monthly_income: f64,
}
