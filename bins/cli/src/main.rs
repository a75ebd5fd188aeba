//! FlowCash command-line driver.
//!
//! Loads a JSON snapshot of accounts, transactions, and settings, runs one
//! report, and prints it as JSON on stdout. Logs go to stderr.
//!
//! ```bash
//! flowcash --snapshot book.json consolidate --year 2024 --status paid
//! flowcash consolidate --year 2024 --override-amount 2000 --override-month 6
//! flowcash summary --start 2024-03-01 --end 31/03/2024
//! flowcash balance --as-of 2024-12-31
//! flowcash transactions --search rent --type expense --status pending
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowcash_core::consolidation::{AnnualTotals, BalanceOverride, ConsolidationEngine, MonthEntry};
use flowcash_core::domain::{AccountType, StatusFilter, parse_date};
use flowcash_core::integrity::{DanglingReference, TypeDivergence, dangling_references, type_divergences};
use flowcash_core::query::{
    compute_current_balance, compute_dashboard, compute_monthly_consolidation, compute_monthly_trend,
    compute_period_summary, filter_transactions,
};
use flowcash_core::store::{InMemoryStore, SettingsRepository, Snapshot};
use flowcash_core::summary::{DashboardSummary, TrendPoint};
use flowcash_shared::{AppConfig, AppError, AppResult};

/// Cash-flow reports from a FlowCash snapshot.
#[derive(Parser, Debug)]
#[command(name = "flowcash", author, version, about, long_about = None)]
struct Args {
    /// Snapshot file (defaults to `data.snapshot_path` from configuration)
    #[arg(short, long, global = true, env = "FLOWCASH_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Report to run
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Month-by-month cash-flow table for one year
    Consolidate {
        /// Calendar year
        #[arg(short, long)]
        year: i32,
        /// Which transactions the totals include (all, paid, pending)
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,
        /// What-if balance added at the start of the override month
        #[arg(long, requires = "override_month", allow_hyphen_values = true)]
        override_amount: Option<Decimal>,
        /// Month (1-12) the what-if balance applies from
        #[arg(long, requires = "override_amount")]
        override_month: Option<u32>,
        /// Year of the override (defaults to --year)
        #[arg(long)]
        override_year: Option<i32>,
        /// Append year-level totals
        #[arg(long)]
        totals: bool,
    },
    /// Realized and pending totals within a date range
    Summary {
        /// First day, inclusive
        #[arg(long, value_parser = parse_date)]
        start: NaiveDate,
        /// Last day, inclusive
        #[arg(long, value_parser = parse_date)]
        end: NaiveDate,
    },
    /// Realized balance at the end of a day
    Balance {
        /// Cutoff day, inclusive
        #[arg(long, value_parser = parse_date)]
        as_of: NaiveDate,
    },
    /// Period summary, current balance, and the trailing monthly trend
    Dashboard {
        /// First day, inclusive
        #[arg(long, value_parser = parse_date)]
        start: NaiveDate,
        /// Last day, inclusive
        #[arg(long, value_parser = parse_date)]
        end: NaiveDate,
        /// Trend length (defaults to `report.trend_months`)
        #[arg(long)]
        trend_months: Option<u32>,
    },
    /// List transactions, newest first
    Transactions {
        /// Text matched against description or account name
        #[arg(long, default_value = "")]
        search: String,
        /// Only this account type (income, expense)
        #[arg(short = 't', long = "type")]
        account_type: Option<AccountType>,
        /// Only this status (all, paid, pending)
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,
    },
    /// Report data-integrity findings
    Check,
}

#[derive(Serialize)]
struct ConsolidationView {
    months: Vec<MonthEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    totals: Option<AnnualTotals>,
}

#[derive(Serialize)]
struct DashboardView {
    #[serde(flatten)]
    summary: DashboardSummary,
    trend: Vec<TrendPoint>,
}

#[derive(Serialize)]
struct IntegrityView {
    type_divergences: Vec<TypeDivergence>,
    dangling_references: Vec<DanglingReference>,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().map_err(AppError::from)?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let store = load_store(&args, &config)?;

    match args.command {
        Command::Consolidate {
            year,
            status,
            override_amount,
            override_month,
            override_year,
            totals,
        } => {
            let what_if = override_amount
                .zip(override_month)
                .map(|(amount, month)| BalanceOverride::new(amount, month, override_year.unwrap_or(year)));
            let months = compute_monthly_consolidation(
                store.transactions(),
                store.accounts(),
                &store.settings(),
                year,
                status,
                what_if,
            );
            let totals = if totals {
                ConsolidationEngine::annual_totals(&months)
            } else {
                None
            };
            print_json(&ConsolidationView { months, totals })
        }
        Command::Summary { start, end } => {
            print_json(&compute_period_summary(store.transactions(), start, end))
        }
        Command::Balance { as_of } => {
            print_json(&compute_current_balance(store.transactions(), &store.settings(), as_of))
        }
        Command::Dashboard {
            start,
            end,
            trend_months,
        } => {
            let summary = compute_dashboard(store.transactions(), &store.settings(), start, end);
            let trend = compute_monthly_trend(
                store.transactions(),
                end.year(),
                end.month(),
                trend_months.unwrap_or(config.report.trend_months),
            );
            print_json(&DashboardView { summary, trend })
        }
        Command::Transactions {
            search,
            account_type,
            status,
        } => print_json(&filter_transactions(
            store.transactions(),
            store.accounts(),
            &search,
            account_type,
            status,
        )),
        Command::Check => print_json(&IntegrityView {
            type_divergences: type_divergences(store.transactions(), store.accounts()),
            dangling_references: dangling_references(store.transactions(), store.accounts()),
        }),
    }
}

fn load_store(args: &Args, config: &AppConfig) -> Result<InMemoryStore> {
    let path = args
        .snapshot
        .clone()
        .or_else(|| config.data.snapshot_path.as_ref().map(PathBuf::from))
        .context("No snapshot given: pass --snapshot or set FLOWCASH__DATA__SNAPSHOT_PATH")?;

    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let store = parse_snapshot(&json, config.report.earliest_year)
        .with_context(|| format!("Invalid snapshot {}", path.display()))?;

    info!(
        path = %path.display(),
        accounts = store.accounts().len(),
        transactions = store.transactions().len(),
        "Snapshot ready"
    );
    Ok(store)
}

fn parse_snapshot(json: &str, earliest_report_year: Option<i32>) -> AppResult<InMemoryStore> {
    Ok(Snapshot::from_json(json)?.into_store(earliest_report_year)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
