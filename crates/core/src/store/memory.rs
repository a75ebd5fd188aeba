//! In-memory store.

use flowcash_shared::types::{AccountId, TransactionId};
use tracing::{info, warn};

use super::repository::{AccountRepository, SettingsRepository, TransactionRepository};
use crate::domain::{
    Account, AccountType, DomainError, MAX_ACCOUNTS_PER_TYPE, Settings, Transaction, TransactionDraft,
    default_chart, type_lookup,
};

/// Accounts, transactions, and settings held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    settings: Settings,
    earliest_report_year: Option<i32>,
}

impl InMemoryStore {
    /// Creates an empty store.
    ///
    /// `earliest_report_year` bounds the initial balance date; see
    /// [`Settings::validate`].
    #[must_use]
    pub fn new(earliest_report_year: Option<i32>) -> Self {
        Self {
            earliest_report_year,
            ..Self::default()
        }
    }

    /// Creates a store seeded with the starter chart of accounts.
    #[must_use]
    pub fn with_default_chart(earliest_report_year: Option<i32>) -> Self {
        Self {
            accounts: default_chart(),
            ..Self::new(earliest_report_year)
        }
    }

    /// Accounts in insertion order, borrowed for report computation.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Transactions in insertion order, borrowed for report computation.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Adds an existing account, keeping its ID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateAccountId` if the ID is taken, or
    /// `DomainError::AccountLimitReached` if the type is full.
    pub fn insert_account(&mut self, account: Account) -> Result<Account, DomainError> {
        if self.accounts.iter().any(|a| a.id == account.id) {
            return Err(DomainError::DuplicateAccountId(account.id));
        }
        self.ensure_capacity(account.account_type)?;
        if self.accounts.iter().any(|a| a.name == account.name) {
            warn!(name = %account.name, "Account name already in use");
        }

        info!(account_id = %account.id, name = %account.name, account_type = %account.account_type, "Account created");
        self.accounts.push(account.clone());
        Ok(account)
    }

    /// Adds a transaction under a caller-chosen ID.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateTransactionId` if the ID is taken,
    /// otherwise the same as [`TransactionRepository::create_transaction`].
    pub fn insert_transaction(&mut self, id: TransactionId, draft: TransactionDraft) -> Result<Transaction, DomainError> {
        if self.transactions.iter().any(|tx| tx.id() == id) {
            return Err(DomainError::DuplicateTransactionId(id));
        }
        let tx = Transaction::create(id, draft, type_lookup(&self.accounts))?;

        info!(
            transaction_id = %tx.id(),
            account_id = %tx.account_id(),
            amount = %tx.amount(),
            status = %tx.status(),
            "Transaction created"
        );
        self.transactions.push(tx.clone());
        Ok(tx)
    }

    fn ensure_capacity(&self, account_type: AccountType) -> Result<(), DomainError> {
        let count = self
            .accounts
            .iter()
            .filter(|a| a.account_type == account_type)
            .count();
        if count >= MAX_ACCOUNTS_PER_TYPE {
            return Err(DomainError::AccountLimitReached {
                account_type,
                limit: MAX_ACCOUNTS_PER_TYPE,
            });
        }
        Ok(())
    }

    fn references(&self, id: AccountId) -> usize {
        self.transactions
            .iter()
            .filter(|tx| tx.account_id() == id)
            .count()
    }

    fn account_mut(&mut self, id: AccountId) -> Result<&mut Account, DomainError> {
        self.accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(DomainError::AccountNotFound(id))
    }

    fn transaction_index(&self, id: TransactionId) -> Result<usize, DomainError> {
        self.transactions
            .iter()
            .position(|tx| tx.id() == id)
            .ok_or(DomainError::TransactionNotFound(id))
    }
}

impl AccountRepository for InMemoryStore {
    fn list_accounts(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    fn create_account(&mut self, name: &str, account_type: AccountType) -> Result<Account, DomainError> {
        self.insert_account(Account::new(name, account_type))
    }

    fn rename_account(&mut self, id: AccountId, name: &str) -> Result<Account, DomainError> {
        if !self.accounts.iter().any(|a| a.id == id) {
            return Err(DomainError::AccountNotFound(id));
        }
        if self.accounts.iter().any(|a| a.id != id && a.name == name) {
            warn!(name, "Account name already in use");
        }

        let account = self.account_mut(id)?;
        account.name = name.to_string();
        info!(account_id = %id, name, "Account renamed");
        Ok(account.clone())
    }

    fn retype_account(&mut self, id: AccountId, account_type: AccountType) -> Result<Account, DomainError> {
        let account = self.account_mut(id)?;
        let current = account.account_type;
        if current == account_type {
            return Ok(account.clone());
        }
        self.ensure_capacity(account_type)?;

        let references = self.references(id);
        if references > 0 {
            warn!(
                account_id = %id,
                from = %current,
                to = %account_type,
                references,
                "Account retyped while referenced; existing transactions keep their type"
            );
        }

        let account = self.account_mut(id)?;
        account.account_type = account_type;
        info!(account_id = %id, account_type = %account_type, "Account retyped");
        Ok(account.clone())
    }

    fn delete_account(&mut self, id: AccountId) -> Result<(), DomainError> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or(DomainError::AccountNotFound(id))?;

        let references = self.references(id);
        if references > 0 {
            return Err(DomainError::AccountInUse {
                account_id: id,
                references,
            });
        }

        self.accounts.remove(index);
        info!(account_id = %id, "Account deleted");
        Ok(())
    }
}

impl TransactionRepository for InMemoryStore {
    fn list_transactions(&self) -> Vec<Transaction> {
        let mut listed = self.transactions.clone();
        listed.sort_by(|a, b| b.date().cmp(&a.date()));
        listed
    }

    fn get_transaction(&self, id: TransactionId) -> Result<Transaction, DomainError> {
        let index = self.transaction_index(id)?;
        Ok(self.transactions[index].clone())
    }

    fn create_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction, DomainError> {
        self.insert_transaction(TransactionId::new(), draft)
    }

    fn update_transaction(&mut self, id: TransactionId, draft: TransactionDraft) -> Result<Transaction, DomainError> {
        let index = self.transaction_index(id)?;
        let lookup = type_lookup(&self.accounts);
        let tx = &mut self.transactions[index];
        tx.revise(draft, lookup)?;

        info!(transaction_id = %id, amount = %tx.amount(), status = %tx.status(), "Transaction updated");
        Ok(tx.clone())
    }

    fn delete_transaction(&mut self, id: TransactionId) -> Result<(), DomainError> {
        let index = self.transaction_index(id)?;
        self.transactions.remove(index);
        info!(transaction_id = %id, "Transaction deleted");
        Ok(())
    }
}

impl SettingsRepository for InMemoryStore {
    fn settings(&self) -> Settings {
        self.settings.clone()
    }

    fn update_settings(&mut self, settings: Settings) -> Result<Settings, DomainError> {
        settings.validate(self.earliest_report_year)?;

        info!(
            initial_balance = %settings.initial_balance,
            initial_balance_date = ?settings.initial_balance_date,
            "Settings updated"
        );
        self.settings = settings;
        Ok(self.settings.clone())
    }
}
