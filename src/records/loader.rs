//! Load client records from CSV exports
//!
//! Each file carries one record type with a header row. Optional columns may
//! be left empty.

use csv::Reader;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

use super::{Asset, BudgetItem, Debt, FinancialGoal, PayoffMethod};
use crate::calendar::{parse_date, MonthKey};
use crate::error::Result;

/// Raw debt row
#[derive(Debug, serde::Deserialize)]
struct DebtRow {
    id: String,
    name: String,
    institution: Option<String>,
    total_amount: f64,
    installment_value: f64,
    remaining_installments: u32,
    interest_rate: Option<f64>,
    due_date: Option<String>,
    status: String,
    payoff_method: Option<String>,
}

impl DebtRow {
    fn into_debt(self) -> Result<Debt> {
        Ok(Debt {
            id: self.id,
            name: self.name,
            institution: self.institution.filter(|s| !s.trim().is_empty()),
            total_amount: self.total_amount,
            installment_value: self.installment_value,
            remaining_installments: self.remaining_installments,
            interest_rate: self.interest_rate.unwrap_or(0.0),
            due_date: self.due_date.as_deref().map(parse_date).transpose()?,
            status: self.status.parse()?,
            payoff_method: self.payoff_method.as_deref().map(str::parse::<PayoffMethod>).transpose()?,
        })
    }
}

/// Raw budget row; missing amounts load as 0
#[derive(Debug, serde::Deserialize)]
struct BudgetRow {
    name: String,
    category: String,
    planned_amount: Option<f64>,
    actual_amount: Option<f64>,
    is_fixed: Option<bool>,
    month_year: String,
}

impl BudgetRow {
    fn into_item(self) -> Result<BudgetItem> {
        Ok(BudgetItem {
            name: self.name,
            category: self.category.parse()?,
            planned_amount: self.planned_amount.unwrap_or(0.0),
            actual_amount: self.actual_amount.unwrap_or(0.0),
            is_fixed: self.is_fixed.unwrap_or(false),
            month_year: self.month_year.parse::<MonthKey>()?,
        })
    }
}

/// Raw asset row
#[derive(Debug, serde::Deserialize)]
struct AssetRow {
    #[serde(rename = "type")]
    asset_type: String,
    description: Option<String>,
    current_value: f64,
    expected_return: Option<f64>,
    maturity_date: Option<String>,
}

impl AssetRow {
    fn into_asset(self) -> Result<Asset> {
        Ok(Asset {
            asset_type: self.asset_type,
            description: self.description.unwrap_or_default(),
            current_value: self.current_value,
            expected_return: self.expected_return,
            maturity_date: self.maturity_date.as_deref().map(parse_date).transpose()?,
        })
    }
}

/// Raw goal row
#[derive(Debug, serde::Deserialize)]
struct GoalRow {
    name: String,
    target_value: f64,
    current_value: Option<f64>,
    start_month: String,
    end_month: String,
    monthly_contribution: Option<f64>,
}

impl GoalRow {
    fn into_goal(self) -> Result<FinancialGoal> {
        Ok(FinancialGoal {
            name: self.name,
            target_value: self.target_value,
            current_value: self.current_value.unwrap_or(0.0),
            start_month: self.start_month.parse()?,
            end_month: self.end_month.parse()?,
            monthly_contribution: self.monthly_contribution,
        })
    }
}

fn read_rows<R, Row, T>(reader: R, convert: impl Fn(Row) -> Result<T>) -> Result<Vec<T>>
where
    R: Read,
    Row: DeserializeOwned,
{
    let mut csv_reader = Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let row: Row = result?;
        records.push(convert(row)?);
    }

    Ok(records)
}

fn open<P: AsRef<Path>>(path: P) -> Result<std::fs::File> {
    Ok(std::fs::File::open(path)?)
}

/// Load debts from any reader
pub fn load_debts_from_reader<R: Read>(reader: R) -> Result<Vec<Debt>> {
    read_rows(reader, DebtRow::into_debt)
}

/// Load debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>> {
    load_debts_from_reader(open(path)?)
}

/// Load budget items from any reader
pub fn load_budget_items_from_reader<R: Read>(reader: R) -> Result<Vec<BudgetItem>> {
    read_rows(reader, BudgetRow::into_item)
}

/// Load budget items from a CSV file
pub fn load_budget_items<P: AsRef<Path>>(path: P) -> Result<Vec<BudgetItem>> {
    load_budget_items_from_reader(open(path)?)
}

/// Load assets from any reader
pub fn load_assets_from_reader<R: Read>(reader: R) -> Result<Vec<Asset>> {
    read_rows(reader, AssetRow::into_asset)
}

/// Load assets from a CSV file
pub fn load_assets<P: AsRef<Path>>(path: P) -> Result<Vec<Asset>> {
    load_assets_from_reader(open(path)?)
}

/// Load goals from any reader
pub fn load_goals_from_reader<R: Read>(reader: R) -> Result<Vec<FinancialGoal>> {
    read_rows(reader, GoalRow::into_goal)
}

/// Load goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Vec<FinancialGoal>> {
    load_goals_from_reader(open(path)?)
}
