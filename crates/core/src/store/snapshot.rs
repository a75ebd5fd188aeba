//! JSON snapshots of a whole book.
//!
//! Dates are carried as strings and normalized with [`parse_date`], so the
//! layouts written by older exports load unchanged. Loading goes through the
//! same validating paths as live mutations.

use flowcash_shared::types::{AccountId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::memory::InMemoryStore;
use super::repository::SettingsRepository;
use crate::domain::{Account, DomainError, Settings, TransactionDraft, TransactionStatus, parse_date};

/// A stored transaction before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Kept when present; a fresh ID is assigned otherwise.
    #[serde(default)]
    pub id: Option<TransactionId>,
    /// Date in any layout [`parse_date`] accepts.
    pub date: String,
    /// Referenced account.
    #[serde(alias = "accountId")]
    pub account_id: AccountId,
    /// Free text.
    #[serde(default)]
    pub description: Option<String>,
    /// Positive magnitude.
    pub amount: Decimal,
    /// Realized or forecast.
    pub status: TransactionStatus,
}

/// Stored company settings before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    /// Company display name.
    #[serde(default, alias = "companyName")]
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
    /// Opening balance.
    #[serde(default, alias = "initialBalance")]
    pub initial_balance: Decimal,
    /// Date in any layout [`parse_date`] accepts; empty means unset.
    #[serde(default, alias = "initialBalanceDate")]
    pub initial_balance_date: Option<String>,
}

impl SettingsRecord {
    fn into_settings(self) -> Result<Settings, DomainError> {
        let initial_balance_date = self
            .initial_balance_date
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(parse_date)
            .transpose()?;

        Ok(Settings {
            company_name: self.company_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            document: self.document,
            initial_balance: self.initial_balance,
            initial_balance_date,
        })
    }
}

/// Everything needed to compute reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Chart of accounts.
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Transactions in any order.
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    /// Company settings.
    #[serde(default)]
    pub settings: SettingsRecord,
}

impl Snapshot {
    /// Parses a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSnapshot` if the JSON is malformed or does
    /// not match the expected shape.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidSnapshot(e.to_string()))
    }

    /// Validates every record and loads it into a fresh store.
    ///
    /// Accounts load first so transactions can resolve them.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered: `InvalidDate`,
    /// `InvalidAmount`, `DanglingAccountReference`, `AccountLimitReached`,
    /// `DuplicateAccountId`, `DuplicateTransactionId`, or
    /// `InvalidInitialBalanceDate`.
    pub fn into_store(self, earliest_report_year: Option<i32>) -> Result<InMemoryStore, DomainError> {
        let mut store = InMemoryStore::new(earliest_report_year);

        for account in self.accounts {
            store.insert_account(account)?;
        }
        for record in self.transactions {
            let draft = TransactionDraft {
                date: parse_date(&record.date)?,
                account_id: record.account_id,
                description: record.description,
                amount: record.amount,
                status: record.status,
            };
            store.insert_transaction(record.id.unwrap_or_default(), draft)?;
        }
        store.update_settings(self.settings.into_settings()?)?;

        info!(
            accounts = store.accounts().len(),
            transactions = store.transactions().len(),
            "Snapshot loaded"
        );
        Ok(store)
    }
}
