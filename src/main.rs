//! Financial Planner CLI
//!
//! Runs the planning calculations over CSV exports of client records

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use financial_planner::budget::{close_month, expense_progress, summarize, BudgetSummary, ExpenseProgress};
use financial_planner::debt::{DebtDiagnosis, PayoffStep};
use financial_planner::format::{format_currency, format_month, format_optional_currency, format_percent};
use financial_planner::planner::{AssetOverview, GoalOverview};
use financial_planner::records::{load_assets, load_budget_items, load_debts, load_goals};
use financial_planner::{Assumptions, BudgetClosure, MonthKey, PayoffMethod, Planner};

#[derive(Parser)]
#[command(name = "financial-planner", version, about = "Planning calculations over client record exports")]
struct Cli {
    /// JSON file with planning assumptions
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Diagnose debts and print the payoff order
    Debts {
        file: PathBuf,
        /// Monthly income
        #[arg(long)]
        income: f64,
        /// snowball or avalanche; defaults to the recommended method
        #[arg(long)]
        method: Option<PayoffMethod>,
    },
    /// Summarize and close one budget month
    Budget {
        file: PathBuf,
        /// Month key, YYYY-MM-01
        #[arg(long)]
        month: MonthKey,
    },
    /// Project assets to maturity
    Assets {
        file: PathBuf,
        /// Reference date, YYYY-MM-DD; defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Monthly pacing and progress for goals
    Goals { file: PathBuf },
}

#[derive(Serialize)]
struct DebtReport<'a> {
    diagnosis: DebtDiagnosis,
    payoff_plan: Vec<PayoffStep<'a>>,
}

#[derive(Serialize)]
struct BudgetReport {
    summary: BudgetSummary,
    expenses: Vec<ExpenseProgress>,
    closure: BudgetClosure,
}

fn load_planner(path: Option<&Path>) -> Result<Planner> {
    let assumptions = match path {
        Some(path) => Assumptions::from_json_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => Assumptions::default_planning(),
    };
    Ok(Planner::with_assumptions(assumptions.with_env_overrides()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let planner = load_planner(cli.assumptions.as_deref())?;

    match cli.command {
        Command::Debts { file, income, method } => {
            let debts = load_debts(&file).with_context(|| format!("reading debts from {}", file.display()))?;
            let report = DebtReport {
                diagnosis: planner.diagnose_debts(&debts, income),
                payoff_plan: planner.payoff_plan(&debts, method),
            };

            if cli.json {
                return print_json(&report);
            }

            let d = &report.diagnosis;
            println!("Debt Diagnosis ({} active)", d.active_count);
            println!("{}", "=".repeat(40));
            println!("  Total Debt:        {}", format_currency(d.total_debt));
            println!("  Monthly Payment:   {}", format_currency(d.total_monthly_payment));
            println!("  Debt-to-Income:    {}", format_percent(d.debt_to_income_ratio, 1));
            println!("  Level:             {}", d.diagnosis_level.as_str());
            println!(
                "  Recommended:       {}",
                d.recommended_method.map(|m| m.as_str()).unwrap_or("-")
            );
            println!();

            println!("{:>4} {:<24} {:>16} {:>10}", "#", "Debt", "Balance", "Rate");
            println!("{}", "-".repeat(57));
            for step in &report.payoff_plan {
                println!(
                    "{:>4} {:<24} {:>16} {:>10}",
                    step.rank,
                    step.debt.name,
                    format_currency(step.debt.total_amount),
                    format_percent(step.debt.interest_rate, 2),
                );
            }
        }

        Command::Budget { file, month } => {
            let items = load_budget_items(&file)
                .with_context(|| format!("reading budget items from {}", file.display()))?;
            let month_items: Vec<_> = items.iter().filter(|i| i.month_year == month).cloned().collect();

            let report = BudgetReport {
                summary: summarize(&month_items),
                expenses: expense_progress(&month_items),
                closure: close_month(&items, month),
            };

            if cli.json {
                return print_json(&report);
            }

            let s = &report.summary;
            println!("Budget {}", format_month(month));
            println!("{}", "=".repeat(40));
            println!("{:<12} {:>16} {:>16} {:>10}", "", "Planned", "Actual", "Var");
            println!(
                "{:<12} {:>16} {:>16} {:>10}",
                "Income",
                format_currency(s.total_planned_income),
                format_currency(s.total_actual_income),
                format_percent(s.income_variance, 1),
            );
            println!(
                "{:<12} {:>16} {:>16} {:>10}",
                "Expenses",
                format_currency(s.total_planned_expenses),
                format_currency(s.total_actual_expenses),
                format_percent(s.expense_variance, 1),
            );
            println!(
                "{:<12} {:>16} {:>16}",
                "Balance",
                format_currency(s.planned_balance),
                format_currency(s.actual_balance),
            );
            println!("  Savings Rate: {}", format_percent(s.savings_rate, 1));
            println!();

            for line in &report.expenses {
                println!(
                    "  {:<24} {:>16} / {:>16} {:>8}",
                    line.name,
                    format_currency(line.actual_amount),
                    format_currency(line.planned_amount),
                    format_percent(line.progress, 0),
                );
            }
        }

        Command::Assets { file, today } => {
            let assets = load_assets(&file).with_context(|| format!("reading assets from {}", file.display()))?;
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());

            let overviews = assets
                .iter()
                .map(|asset| planner.asset_overview(asset, today))
                .collect::<Result<Vec<AssetOverview>, _>>()?;

            if cli.json {
                return print_json(&overviews);
            }

            println!("{:<12} {:<20} {:>16} {:>8} {:>16} {:>8}", "Type", "Description", "Current", "Months", "At Maturity", "Real");
            println!("{}", "-".repeat(85));
            for o in &overviews {
                println!(
                    "{:<12} {:<20} {:>16} {:>8} {:>16} {:>8}",
                    o.asset.asset_type,
                    o.asset.description,
                    format_currency(o.asset.current_value),
                    o.projection.as_ref().map(|p| p.months_to_maturity.to_string()).unwrap_or_else(|| "-".to_string()),
                    format_optional_currency(o.projection.as_ref().map(|p| p.projected_value)),
                    o.real_return.map(|r| format_percent(r, 2)).unwrap_or_else(|| "-".to_string()),
                );
            }
        }

        Command::Goals { file } => {
            let goals = load_goals(&file).with_context(|| format!("reading goals from {}", file.display()))?;
            let overviews: Vec<GoalOverview> = goals.iter().map(|g| planner.goal_overview(g)).collect();

            if cli.json {
                return print_json(&overviews);
            }

            println!("{:<24} {:>8} {:>16} {:>16} {:>8}", "Goal", "Months", "Missing", "Per Month", "Done");
            println!("{}", "-".repeat(76));
            for o in &overviews {
                println!(
                    "{:<24} {:>8} {:>16} {:>16} {:>8}",
                    o.name,
                    o.pacing.months,
                    format_currency(o.progress.remaining_value),
                    format_currency(o.pacing.monthly_average),
                    format_percent(o.progress.progress, 0),
                );
            }
        }
    }

    Ok(())
}
