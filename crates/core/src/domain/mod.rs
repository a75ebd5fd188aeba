//! Domain model for cash-flow tracking.
//!
//! This module defines the entities the consolidation engine computes over:
//! - Accounts (the chart of accounts, each either income or expense)
//! - Transactions (dated cash movements stamped with their account's type)
//! - Settings (company details and the anchored initial balance)
//! - Calendar date normalization
//! - Error types for rejected mutations

pub mod account;
pub mod date;
pub mod error;
pub mod settings;
pub mod transaction;
pub mod types;

pub use account::{Account, MAX_ACCOUNTS_PER_TYPE, default_chart, type_lookup};
pub use date::{parse_date, year_end};
pub use error::DomainError;
pub use settings::Settings;
pub use transaction::{Transaction, TransactionDraft};
pub use types::{AccountType, StatusFilter, TransactionStatus};
