//! Twelve-month cash-flow consolidation.
//!
//! This module builds the yearly cash-flow table:
//! - Carry-forward of realized activity up to the end of the prior year
//! - A running balance folded month by month, January to December
//! - Per-month income, expense, and net under a status filter
//! - Per-account breakdown covering the whole chart of accounts
//! - An optional what-if balance injected at one month

pub mod engine;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::{ConsolidationEngine, MONTHS_PER_YEAR};
pub use types::{AnnualTotals, BalanceOverride, MonthEntry};
