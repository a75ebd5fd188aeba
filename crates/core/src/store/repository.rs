//! Repository traits.
//!
//! Implementations own persistence. Every mutation validates its input and
//! fails fast; nothing is silently coerced.

use flowcash_shared::types::{AccountId, TransactionId};

use crate::domain::{Account, AccountType, DomainError, Settings, Transaction, TransactionDraft};

/// Chart of accounts persistence.
pub trait AccountRepository {
    /// Lists every account in insertion order.
    fn list_accounts(&self) -> Vec<Account>;

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AccountLimitReached` if the chart already holds
    /// the maximum number of accounts of this type.
    fn create_account(&mut self, name: &str, account_type: AccountType) -> Result<Account, DomainError>;

    /// Renames an account.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AccountNotFound` if the account does not exist.
    fn rename_account(&mut self, id: AccountId, name: &str) -> Result<Account, DomainError>;

    /// Changes an account's type. Referencing transactions keep the type they
    /// were stamped with.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AccountNotFound` if the account does not exist,
    /// or `DomainError::AccountLimitReached` if the target type is full.
    fn retype_account(&mut self, id: AccountId, account_type: AccountType) -> Result<Account, DomainError>;

    /// Deletes an account that no transaction references.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AccountNotFound` if the account does not exist,
    /// or `DomainError::AccountInUse` if any transaction references it.
    fn delete_account(&mut self, id: AccountId) -> Result<(), DomainError>;
}

/// Transaction persistence.
pub trait TransactionRepository {
    /// Lists every transaction, newest first.
    fn list_transactions(&self) -> Vec<Transaction>;

    /// Fetches one transaction.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TransactionNotFound` if it does not exist.
    fn get_transaction(&self, id: TransactionId) -> Result<Transaction, DomainError>;

    /// Creates a transaction, stamping its account's type.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` for a non-positive amount, or
    /// `DomainError::DanglingAccountReference` for an unknown account.
    fn create_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction, DomainError>;

    /// Replaces a transaction's editable fields and re-stamps its type.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TransactionNotFound` if it does not exist, or
    /// any error of [`TransactionRepository::create_transaction`].
    fn update_transaction(&mut self, id: TransactionId, draft: TransactionDraft) -> Result<Transaction, DomainError>;

    /// Deletes a transaction.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TransactionNotFound` if it does not exist.
    fn delete_transaction(&mut self, id: TransactionId) -> Result<(), DomainError>;
}

/// Company settings persistence.
pub trait SettingsRepository {
    /// Current settings.
    fn settings(&self) -> Settings;

    /// Replaces the settings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInitialBalanceDate` if the initial balance
    /// date is later than the configured bound.
    fn update_settings(&mut self, settings: Settings) -> Result<Settings, DomainError>;
}
