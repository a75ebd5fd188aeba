//! Point-in-time balance calculation.
//!
//! balance(cutoff) = initial balance
//!     + realized income dated in [anchor, cutoff]
//!     - realized expense dated in [anchor, cutoff]
//!
//! With no anchor the initial balance applies from the beginning of time.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::aggregation::{filter_by_date_range, is_kind, sum_where};
use crate::domain::{AccountType, Settings, Transaction, TransactionStatus};

/// Computes balances from an anchored initial balance and realized activity.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Balance at the end of `cutoff`.
    ///
    /// Only PAID transactions dated within `[anchor, cutoff]` contribute. A
    /// cutoff before the anchor yields the initial balance unchanged.
    #[must_use]
    pub fn balance_at(
        initial_balance: Decimal,
        anchor: Option<NaiveDate>,
        transactions: &[Transaction],
        cutoff: NaiveDate,
    ) -> Decimal {
        let start = anchor.unwrap_or(NaiveDate::MIN);
        if cutoff < start {
            return initial_balance;
        }

        let income = sum_where(
            filter_by_date_range(transactions, start, cutoff),
            is_kind(AccountType::Income, TransactionStatus::Paid),
        );
        let expense = sum_where(
            filter_by_date_range(transactions, start, cutoff),
            is_kind(AccountType::Expense, TransactionStatus::Paid),
        );

        initial_balance + income - expense
    }

    /// Balance at the end of `cutoff` using the persisted settings.
    #[must_use]
    pub fn from_settings(settings: &Settings, transactions: &[Transaction], cutoff: NaiveDate) -> Decimal {
        Self::balance_at(
            settings.initial_balance,
            settings.initial_balance_date,
            transactions,
            cutoff,
        )
    }

    /// Returns true if `tx` moves the balance at all: realized and not dated
    /// before the anchor.
    #[must_use]
    pub fn moves_balance(tx: &Transaction, anchor: Option<NaiveDate>) -> bool {
        tx.is_paid() && anchor.is_none_or(|start| tx.date() >= start)
    }
}
