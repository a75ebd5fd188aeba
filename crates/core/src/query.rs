//! Report queries exposed to callers.
//!
//! Each query is a pure function of its inputs: no caching, no shared state.
//! Inputs are assumed valid (they come through the repositories).

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::consolidation::{BalanceOverride, ConsolidationEngine, MonthEntry};
use crate::domain::{Account, AccountType, Settings, StatusFilter, Transaction};
use crate::summary::{DashboardSummary, PeriodSummary, SummaryService, TrendPoint};

/// Realized balance at the end of `as_of`.
#[must_use]
pub fn compute_current_balance(transactions: &[Transaction], settings: &Settings, as_of: NaiveDate) -> Decimal {
    SummaryService::current_balance(transactions, settings, as_of)
}

/// Realized and pending totals within `[start, end]`.
#[must_use]
pub fn compute_period_summary(transactions: &[Transaction], start: NaiveDate, end: NaiveDate) -> PeriodSummary {
    SummaryService::period_summary(transactions, start, end)
}

/// The twelve monthly rows of `year`, January first.
///
/// `what_if` is the caller's transient balance override; it is never
/// persisted.
#[must_use]
pub fn compute_monthly_consolidation(
    transactions: &[Transaction],
    accounts: &[Account],
    settings: &Settings,
    year: i32,
    filter: StatusFilter,
    what_if: Option<BalanceOverride>,
) -> Vec<MonthEntry> {
    ConsolidationEngine::run(transactions, accounts, settings, year, filter, what_if)
}

/// Period summary plus the current balance at `end`.
#[must_use]
pub fn compute_dashboard(
    transactions: &[Transaction],
    settings: &Settings,
    start: NaiveDate,
    end: NaiveDate,
) -> DashboardSummary {
    SummaryService::dashboard(transactions, settings, start, end)
}

/// Trailing `months` of realized activity ending with `through_month`.
#[must_use]
pub fn compute_monthly_trend(
    transactions: &[Transaction],
    through_year: i32,
    through_month: u32,
    months: u32,
) -> Vec<TrendPoint> {
    SummaryService::monthly_trend(transactions, through_year, through_month, months)
}

/// Transactions matching a listing filter, newest first.
///
/// `search` matches case-insensitively against the description or the
/// account name; an empty search matches everything. `account_type` of
/// `None` admits both types and compares against the stamped type. Equal
/// dates keep their input order.
#[must_use]
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    accounts: &[Account],
    search: &str,
    account_type: Option<AccountType>,
    status: StatusFilter,
) -> Vec<&'a Transaction> {
    let needle = search.to_lowercase();
    let account_name = |tx: &Transaction| {
        accounts
            .iter()
            .find(|a| a.id == tx.account_id())
            .map(|a| a.name.to_lowercase())
    };

    let mut listed: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| account_type.is_none_or(|t| tx.account_type() == t))
        .filter(|tx| status.matches(tx.status()))
        .filter(|tx| {
            needle.is_empty()
                || tx
                    .description()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
                || account_name(tx).is_some_and(|n| n.contains(&needle))
        })
        .collect();

    listed.sort_by(|a, b| b.date().cmp(&a.date()));
    listed
}
