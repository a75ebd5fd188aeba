//! Company settings and the anchored initial balance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::date::year_end;
use super::error::DomainError;

/// Persisted company settings.
///
/// Only `initial_balance` and `initial_balance_date` feed the calculations;
/// the remaining fields are display-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Company display name.
    #[serde(default)]
    pub company_name: String,
    /// Contact e-mail.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Tax registration document.
    #[serde(default)]
    pub document: Option<String>,
    /// Balance as of `initial_balance_date`. May be negative.
    #[serde(default)]
    pub initial_balance: Decimal,
    /// Day the initial balance applies from. `None` means from the beginning
    /// of time: every realized transaction counts.
    #[serde(default)]
    pub initial_balance_date: Option<NaiveDate>,
}

impl Settings {
    /// Creates settings with just a company name and a zero balance.
    #[must_use]
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Self::default()
        }
    }

    /// Checks the initial balance date against the earliest report year.
    ///
    /// When `earliest_report_year` is `Some(y)`, the date must fall on or
    /// before the last day of `y - 1`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInitialBalanceDate` if the date is later.
    pub fn validate(&self, earliest_report_year: Option<i32>) -> Result<(), DomainError> {
        let (Some(date), Some(year)) = (self.initial_balance_date, earliest_report_year) else {
            return Ok(());
        };

        let latest = year_end(year.saturating_sub(1));
        if date > latest {
            return Err(DomainError::InvalidInitialBalanceDate { date, latest });
        }
        Ok(())
    }
}
