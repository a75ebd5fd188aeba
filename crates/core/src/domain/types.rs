//! Enumerations shared by accounts, transactions, and reports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Direction of cash movement for an account.
///
/// Income adds to the balance, expense subtracts from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Money coming in.
    #[serde(rename = "INCOME", alias = "income", alias = "Entrada")]
    Income,
    /// Money going out.
    #[serde(rename = "EXPENSE", alias = "expense", alias = "Saída")]
    Expense,
}

impl AccountType {
    /// Returns the stable wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "INCOME" | "income" | "Entrada" => Ok(Self::Income),
            "EXPENSE" | "expense" | "Saída" => Ok(Self::Expense),
            other => Err(DomainError::InvalidSnapshot(format!(
                "unknown account type {other:?}"
            ))),
        }
    }
}

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Realized: the cash movement has happened.
    #[serde(rename = "PAID", alias = "SIM", alias = "realized")]
    Paid,
    /// Forecast: expected but not yet settled.
    #[serde(rename = "PENDING", alias = "NÃO", alias = "forecast")]
    Pending,
}

impl TransactionStatus {
    /// Returns the stable wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Pending => "PENDING",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PAID" | "SIM" | "realized" => Ok(Self::Paid),
            "PENDING" | "NÃO" | "forecast" => Ok(Self::Pending),
            other => Err(DomainError::InvalidSnapshot(format!(
                "unknown transaction status {other:?}"
            ))),
        }
    }
}

/// Which transactions a report's totals and breakdown include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    /// Both realized and forecast transactions.
    #[default]
    All,
    /// Realized transactions only.
    Paid,
    /// Forecast transactions only.
    Pending,
}

impl StatusFilter {
    /// Returns true if a transaction with `status` passes the filter.
    #[must_use]
    pub const fn matches(self, status: TransactionStatus) -> bool {
        match self {
            Self::All => true,
            Self::Paid => matches!(status, TransactionStatus::Paid),
            Self::Pending => matches!(status, TransactionStatus::Pending),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "paid" | "realized" => Ok(Self::Paid),
            "pending" | "forecast" => Ok(Self::Pending),
            other => Err(DomainError::InvalidSnapshot(format!(
                "unknown status filter {other:?}"
            ))),
        }
    }
}
