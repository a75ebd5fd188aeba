//! Period summary types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income and expense totals over a date range, split by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// PAID income.
    pub realized_income: Decimal,
    /// PAID expense.
    pub realized_expense: Decimal,
    /// PENDING income.
    pub pending_income: Decimal,
    /// PENDING expense.
    pub pending_expense: Decimal,
}

impl PeriodSummary {
    /// Realized income minus realized expense.
    #[must_use]
    pub fn realized_net(&self) -> Decimal {
        self.realized_income - self.realized_expense
    }

    /// Pending income minus pending expense.
    #[must_use]
    pub fn pending_net(&self) -> Decimal {
        self.pending_income - self.pending_expense
    }
}

/// Dashboard view: a period summary plus the balance at the period end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period.
    pub end: NaiveDate,
    /// Totals within the period.
    pub period: PeriodSummary,
    /// Realized balance at the end of `end`.
    pub current_balance: Decimal,
}

/// One calendar month of realized activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar year.
    pub year: i32,
    /// Month, 1-based.
    pub month: u32,
    /// PAID income in the month.
    pub income: Decimal,
    /// PAID expense in the month.
    pub expense: Decimal,
    /// `income - expense`.
    pub net: Decimal,
}
