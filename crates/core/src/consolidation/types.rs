//! Consolidation data types.

use std::collections::BTreeMap;

use flowcash_shared::types::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A hypothetical balance injected at the start of one month.
///
/// Supplied per report call and never persisted. It shifts the opening
/// balance of its month and of every later month of the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceOverride {
    /// Amount added to the running balance. May be negative.
    pub amount: Decimal,
    /// Target month, 1 (January) to 12 (December).
    pub month: u32,
    /// Target calendar year.
    pub year: i32,
}

impl BalanceOverride {
    /// Creates an override.
    #[must_use]
    pub const fn new(amount: Decimal, month: u32, year: i32) -> Self {
        Self {
            amount,
            month,
            year,
        }
    }

    /// Returns true if the month is a real calendar month.
    #[must_use]
    pub const fn has_valid_month(&self) -> bool {
        self.month >= 1 && self.month <= 12
    }

    /// Returns true if the override changes anything in a report for `year`.
    #[must_use]
    pub fn applies_to_year(&self, year: i32) -> bool {
        self.year == year && self.has_valid_month() && !self.amount.is_zero()
    }
}

/// One row of the consolidation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEntry {
    /// Calendar month, 1 to 12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Balance at the first instant of the month, override included.
    pub opening: Decimal,
    /// Income under the status filter.
    pub total_income: Decimal,
    /// Expense under the status filter.
    pub total_expense: Decimal,
    /// `total_income - total_expense`.
    pub net: Decimal,
    /// Realized balance at the last instant of the month. Equals
    /// `opening + net` only when the filter admits exactly the paid rows.
    pub closing: Decimal,
    /// `opening + net`: the close implied by the filtered totals, forecasts
    /// included when the filter admits them.
    pub projected_closing: Decimal,
    /// Filtered total per account. Every account in the chart is present.
    pub breakdown: BTreeMap<AccountId, Decimal>,
}

/// Year-level totals over the twelve rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualTotals {
    /// Calendar year.
    pub year: i32,
    /// January's opening balance.
    pub opening: Decimal,
    /// Sum of monthly income.
    pub total_income: Decimal,
    /// Sum of monthly expense.
    pub total_expense: Decimal,
    /// Sum of monthly net.
    pub net: Decimal,
    /// December's closing balance.
    pub closing: Decimal,
}
