//! Period summary service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{DashboardSummary, PeriodSummary, TrendPoint};
use crate::aggregation::{filter_by_date_range, is_kind, sum_where};
use crate::balance::BalanceCalculator;
use crate::domain::date::{in_month, months_back};
use crate::domain::{AccountType, Settings, Transaction, TransactionStatus};

/// Service for date-range totals and dashboard figures.
pub struct SummaryService;

impl SummaryService {
    /// Totals the transactions dated within `[start, end]`.
    ///
    /// A reversed range yields all zeros.
    #[must_use]
    pub fn period_summary(transactions: &[Transaction], start: NaiveDate, end: NaiveDate) -> PeriodSummary {
        let total = |account_type, status| {
            sum_where(
                filter_by_date_range(transactions, start, end),
                is_kind(account_type, status),
            )
        };

        PeriodSummary {
            realized_income: total(AccountType::Income, TransactionStatus::Paid),
            realized_expense: total(AccountType::Expense, TransactionStatus::Paid),
            pending_income: total(AccountType::Income, TransactionStatus::Pending),
            pending_expense: total(AccountType::Expense, TransactionStatus::Pending),
        }
    }

    /// Realized balance at the end of `as_of`, from the persisted settings.
    ///
    /// Never sees a what-if override.
    #[must_use]
    pub fn current_balance(transactions: &[Transaction], settings: &Settings, as_of: NaiveDate) -> Decimal {
        BalanceCalculator::from_settings(settings, transactions, as_of)
    }

    /// Period summary for `[start, end]` plus the current balance at `end`.
    #[must_use]
    pub fn dashboard(
        transactions: &[Transaction],
        settings: &Settings,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DashboardSummary {
        debug!(%start, %end, transactions = transactions.len(), "Building dashboard summary");

        DashboardSummary {
            start,
            end,
            period: Self::period_summary(transactions, start, end),
            current_balance: Self::current_balance(transactions, settings, end),
        }
    }

    /// Realized income, expense and net for the `months` calendar months
    /// ending with `(through_year, through_month)`, oldest first.
    ///
    /// `through_month` is 1-based. Zero months yields an empty trend.
    #[must_use]
    pub fn monthly_trend(
        transactions: &[Transaction],
        through_year: i32,
        through_month: u32,
        months: u32,
    ) -> Vec<TrendPoint> {
        (0..months)
            .rev()
            .map(|back| {
                let (year, month) = months_back(through_year, through_month, back);
                let in_period = || {
                    transactions
                        .iter()
                        .filter(move |tx| in_month(tx.date(), year, month))
                };
                let income = sum_where(in_period(), is_kind(AccountType::Income, TransactionStatus::Paid));
                let expense = sum_where(in_period(), is_kind(AccountType::Expense, TransactionStatus::Paid));

                TrendPoint {
                    year,
                    month,
                    income,
                    expense,
                    net: income - expense,
                }
            })
            .collect()
    }
}
