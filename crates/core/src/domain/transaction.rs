//! Cash-flow transactions.

use chrono::NaiveDate;
use flowcash_shared::types::{AccountId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::types::{AccountType, TransactionStatus};

/// Caller input for creating or editing a transaction.
///
/// The transaction type is not part of the input; it is stamped from the
/// referenced account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    /// Calendar date of the movement.
    pub date: NaiveDate,
    /// Account the movement is booked against.
    pub account_id: AccountId,
    /// Optional free text.
    #[serde(default)]
    pub description: Option<String>,
    /// Positive magnitude; the sign comes from the account type.
    pub amount: Decimal,
    /// Realized or forecast.
    pub status: TransactionStatus,
}

impl TransactionDraft {
    /// Validates the draft and resolves the account type it will carry.
    fn resolve<L>(&self, lookup: L) -> Result<AccountType, DomainError>
    where
        L: Fn(AccountId) -> Option<AccountType>,
    {
        if self.amount <= Decimal::ZERO {
            return Err(DomainError::InvalidAmount(self.amount));
        }

        lookup(self.account_id).ok_or(DomainError::DanglingAccountReference(self.account_id))
    }
}

/// A dated income or expense entry.
///
/// Fields are read-only. The only ways to obtain or change a transaction are
/// [`Transaction::create`] and [`Transaction::revise`], which both validate
/// the amount and stamp the account's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: TransactionId,
    date: NaiveDate,
    account_id: AccountId,
    description: Option<String>,
    amount: Decimal,
    status: TransactionStatus,
    account_type: AccountType,
}

impl Transaction {
    /// Creates a transaction, stamping the type of the referenced account.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the amount is not positive.
    /// Returns `DomainError::DanglingAccountReference` if `lookup` does not
    /// know the account.
    pub fn create<L>(id: TransactionId, draft: TransactionDraft, lookup: L) -> Result<Self, DomainError>
    where
        L: Fn(AccountId) -> Option<AccountType>,
    {
        let account_type = draft.resolve(lookup)?;

        Ok(Self {
            id,
            date: draft.date,
            account_id: draft.account_id,
            description: draft.description,
            amount: draft.amount,
            status: draft.status,
            account_type,
        })
    }

    /// Replaces every editable field and re-stamps the type. The ID is kept.
    ///
    /// On error the transaction is left unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`Transaction::create`].
    pub fn revise<L>(&mut self, draft: TransactionDraft, lookup: L) -> Result<(), DomainError>
    where
        L: Fn(AccountId) -> Option<AccountType>,
    {
        let account_type = draft.resolve(lookup)?;

        self.date = draft.date;
        self.account_id = draft.account_id;
        self.description = draft.description;
        self.amount = draft.amount;
        self.status = draft.status;
        self.account_type = account_type;
        Ok(())
    }

    /// Transaction ID.
    #[must_use]
    pub const fn id(&self) -> TransactionId {
        self.id
    }

    /// Calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Referenced account.
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Unsigned amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Settlement status.
    #[must_use]
    pub const fn status(&self) -> TransactionStatus {
        self.status
    }

    /// Type stamped from the account at creation or last edit.
    #[must_use]
    pub const fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// Returns true if the movement has been realized.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        matches!(self.status, TransactionStatus::Paid)
    }

    /// Amount with the sign implied by the type: income positive, expense negative.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.account_type {
            AccountType::Income => self.amount,
            AccountType::Expense => -self.amount,
        }
    }

    /// Returns the current field values as a draft, for editing.
    #[must_use]
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            date: self.date,
            account_id: self.account_id,
            description: self.description.clone(),
            amount: self.amount,
            status: self.status,
        }
    }
}
