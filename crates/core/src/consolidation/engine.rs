//! Consolidation engine: the month-by-month running-balance fold.

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::types::{AnnualTotals, BalanceOverride, MonthEntry};
use crate::aggregation::{group_by_account, sum_where};
use crate::balance::BalanceCalculator;
use crate::domain::{Account, AccountType, Settings, StatusFilter, Transaction, year_end};

/// Number of rows in a consolidation table.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Engine for building the yearly cash-flow table.
///
/// Stateless: every call recomputes from its inputs.
pub struct ConsolidationEngine;

impl ConsolidationEngine {
    /// Builds the twelve rows (January to December) for `year`.
    ///
    /// 1. The carry-forward is the realized balance at Dec 31 of `year - 1`,
    ///    independent of `filter`.
    /// 2. For each month, the override (if it targets this month of `year`)
    ///    is added to the running balance before the opening is recorded.
    /// 3. Totals, net, and breakdown cover the month's transactions that pass
    ///    `filter`.
    /// 4. The running balance advances by the month's realized net, so
    ///    forecasts never reach `opening` or `closing`.
    #[must_use]
    pub fn run(
        transactions: &[Transaction],
        accounts: &[Account],
        settings: &Settings,
        year: i32,
        filter: StatusFilter,
        what_if: Option<BalanceOverride>,
    ) -> Vec<MonthEntry> {
        let anchor = settings.initial_balance_date;
        let carry = BalanceCalculator::from_settings(settings, transactions, year_end(year.saturating_sub(1)));
        let injection = Self::resolve_override(what_if, year);

        debug!(
            year,
            ?filter,
            transactions = transactions.len(),
            accounts = accounts.len(),
            %carry,
            has_override = injection.is_some(),
            "Building monthly consolidation"
        );

        let buckets = Self::bucket_by_month(transactions, year);
        let mut running = carry;
        let mut entries = Vec::with_capacity(buckets.len());

        for (month, bucket) in (1..=MONTHS_PER_YEAR).zip(&buckets) {
            if let Some(adjustment) = injection.filter(|o| o.month == month) {
                running += adjustment.amount;
            }
            let opening = running;

            let selected = || bucket.iter().copied().filter(|tx| filter.matches(tx.status()));
            let total_income = sum_where(selected(), |tx| tx.account_type() == AccountType::Income);
            let total_expense = sum_where(selected(), |tx| tx.account_type() == AccountType::Expense);
            let net = total_income - total_expense;

            let realized_net: Decimal = bucket
                .iter()
                .filter(|tx| BalanceCalculator::moves_balance(tx, anchor))
                .map(|tx| tx.signed_amount())
                .sum();
            let closing = opening + realized_net;

            entries.push(MonthEntry {
                month,
                year,
                opening,
                total_income,
                total_expense,
                net,
                closing,
                projected_closing: opening + net,
                breakdown: group_by_account(selected(), accounts),
            });

            running = closing;
        }

        entries
    }

    /// Sums a consolidation table into year-level totals.
    ///
    /// Returns `None` for an empty table.
    #[must_use]
    pub fn annual_totals(entries: &[MonthEntry]) -> Option<AnnualTotals> {
        let first = entries.first()?;
        let last = entries.last()?;

        Some(AnnualTotals {
            year: first.year,
            opening: first.opening,
            total_income: entries.iter().map(|e| e.total_income).sum(),
            total_expense: entries.iter().map(|e| e.total_expense).sum(),
            net: entries.iter().map(|e| e.net).sum(),
            closing: last.closing,
        })
    }

    /// Keeps the override only when it changes something in `year`.
    fn resolve_override(what_if: Option<BalanceOverride>, year: i32) -> Option<BalanceOverride> {
        let candidate = what_if?;
        if candidate.year == year && !candidate.has_valid_month() {
            warn!(
                month = candidate.month,
                year = candidate.year,
                "Balance override month out of range, ignoring"
            );
        }
        candidate.applies_to_year(year).then_some(candidate)
    }

    /// Splits the year's transactions into twelve month buckets, preserving
    /// input order within each bucket.
    fn bucket_by_month(transactions: &[Transaction], year: i32) -> [Vec<&Transaction>; 12] {
        let mut buckets: [Vec<&Transaction>; 12] = std::array::from_fn(|_| Vec::new());
        for tx in transactions.iter().filter(|tx| tx.date().year() == year) {
            if let Some(bucket) = buckets.get_mut(tx.date().month0() as usize) {
                bucket.push(tx);
            }
        }
        buckets
    }
}
