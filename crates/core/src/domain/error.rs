//! Domain error types for rejected mutations.
//!
//! The computations in this crate never fail. Every error here is a caller
//! input rejected at the mutation boundary (account, transaction, and
//! settings repositories) or while loading a snapshot.

use chrono::NaiveDate;
use flowcash_shared::AppError;
use flowcash_shared::types::{AccountId, TransactionId};
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::AccountType;

/// Errors that can occur when creating or mutating domain records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // ========== Validation Errors ==========
    /// Transaction amount must be strictly positive.
    #[error("Transaction amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    /// Date string could not be normalized to a calendar date.
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// Initial balance date is later than the configured bound.
    #[error("Initial balance date {date} must be on or before {latest}")]
    InvalidInitialBalanceDate {
        /// The rejected date.
        date: NaiveDate,
        /// Latest date allowed.
        latest: NaiveDate,
    },

    /// Snapshot document is malformed.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    // ========== Reference Errors ==========
    /// Transaction references an account that does not exist.
    #[error("Transaction references unknown account {0}")]
    DanglingAccountReference(AccountId),

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    // ========== State Errors ==========
    /// An account with this ID already exists.
    #[error("Account ID already in use: {0}")]
    DuplicateAccountId(AccountId),

    /// A transaction with this ID already exists.
    #[error("Transaction ID already in use: {0}")]
    DuplicateTransactionId(TransactionId),

    /// Account still has transactions pointing at it.
    #[error("Account {account_id} is used by {references} transaction(s) and cannot be deleted")]
    AccountInUse {
        /// The account that was to be deleted.
        account_id: AccountId,
        /// Number of referencing transactions.
        references: usize,
    },

    /// Chart of accounts is full for this account type.
    #[error("Cannot create more than {limit} {account_type} accounts")]
    AccountLimitReached {
        /// The account type that is full.
        account_type: AccountType,
        /// Maximum accounts per type.
        limit: usize,
    },
}

impl DomainError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidInitialBalanceDate { .. } => "INVALID_INITIAL_BALANCE_DATE",
            Self::InvalidSnapshot(_) => "INVALID_SNAPSHOT",
            Self::DanglingAccountReference(_) => "DANGLING_ACCOUNT_REFERENCE",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
            Self::DuplicateAccountId(_) => "DUPLICATE_ACCOUNT_ID",
            Self::DuplicateTransactionId(_) => "DUPLICATE_TRANSACTION_ID",
            Self::AccountInUse { .. } => "ACCOUNT_IN_USE",
            Self::AccountLimitReached { .. } => "ACCOUNT_LIMIT_REACHED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::InvalidAmount(_)
            | Self::InvalidDate(_)
            | Self::InvalidInitialBalanceDate { .. }
            | Self::InvalidSnapshot(_)
            | Self::DanglingAccountReference(_) => 400,

            // 404 Not Found
            Self::AccountNotFound(_) | Self::TransactionNotFound(_) => 404,

            // 409 Conflict
            Self::DuplicateAccountId(_)
            | Self::DuplicateTransactionId(_)
            | Self::AccountInUse { .. } => 409,

            // 422 Unprocessable - business rules
            Self::AccountLimitReached { .. } => 422,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err.http_status_code() {
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            422 => Self::BusinessRule(message),
            _ => Self::Validation(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::InvalidAmount(dec!(0)).error_code(), "INVALID_AMOUNT");
        assert_eq!(
            DomainError::DanglingAccountReference(AccountId::new()).error_code(),
            "DANGLING_ACCOUNT_REFERENCE"
        );
        assert_eq!(
            DomainError::AccountInUse {
                account_id: AccountId::new(),
                references: 1,
            }
            .error_code(),
            "ACCOUNT_IN_USE"
        );
        assert_eq!(
            DomainError::InvalidDate("31/02/2024".into()).error_code(),
            "INVALID_DATE"
        );
        assert_eq!(
            DomainError::DuplicateTransactionId(TransactionId::new()).error_code(),
            "DUPLICATE_TRANSACTION_ID"
        );
    }

    #[test]
    fn test_http_status_codes() {
        assert_eq!(DomainError::InvalidAmount(dec!(-1)).http_status_code(), 400);
        assert_eq!(
            DomainError::AccountNotFound(AccountId::new()).http_status_code(),
            404
        );
        assert_eq!(
            DomainError::AccountInUse {
                account_id: AccountId::new(),
                references: 3,
            }
            .http_status_code(),
            409
        );
        assert_eq!(
            DomainError::AccountLimitReached {
                account_type: AccountType::Income,
                limit: 17,
            }
            .http_status_code(),
            422
        );
    }

    #[test]
    fn test_converts_into_app_error() {
        let app: AppError = DomainError::TransactionNotFound(TransactionId::new()).into();
        assert_eq!(app.status_code(), 404);

        let app: AppError = DomainError::AccountInUse {
            account_id: AccountId::new(),
            references: 2,
        }
        .into();
        assert_eq!(app.error_code(), "CONFLICT");

        let app: AppError = DomainError::DuplicateAccountId(AccountId::new()).into();
        assert_eq!(app.status_code(), 409);

        let app: AppError = DomainError::InvalidAmount(dec!(0)).into();
        assert_eq!(app.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::InvalidAmount(dec!(-5.50)).to_string(),
            "Transaction amount must be greater than zero, got -5.50"
        );
        assert_eq!(
            DomainError::AccountLimitReached {
                account_type: AccountType::Expense,
                limit: 17,
            }
            .to_string(),
            "Cannot create more than 17 EXPENSE accounts"
        );
    }
}
