//! Data-integrity checks over a loaded book.
//!
//! Findings are reported, never corrected. A transaction keeps the type it
//! was stamped with even after its account is retyped.

use std::collections::HashMap;

use flowcash_shared::types::{AccountId, TransactionId};
use serde::Serialize;
use tracing::warn;

use crate::domain::{Account, AccountType, Transaction};

/// A transaction whose stamped type disagrees with its account's current type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeDivergence {
    /// Offending transaction.
    pub transaction_id: TransactionId,
    /// Account it references.
    pub account_id: AccountId,
    /// Type stamped on the transaction.
    pub stamped: AccountType,
    /// Type the account has now.
    pub current: AccountType,
}

/// A transaction pointing at an account that no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    /// Offending transaction.
    pub transaction_id: TransactionId,
    /// Missing account.
    pub account_id: AccountId,
}

/// Lists transactions whose stamped type differs from their account's type.
///
/// Transactions with an unknown account are not reported here; see
/// [`dangling_references`].
#[must_use]
pub fn type_divergences(transactions: &[Transaction], accounts: &[Account]) -> Vec<TypeDivergence> {
    let types: HashMap<AccountId, AccountType> = accounts.iter().map(|a| (a.id, a.account_type)).collect();

    let found: Vec<TypeDivergence> = transactions
        .iter()
        .filter_map(|tx| {
            let current = *types.get(&tx.account_id())?;
            (current != tx.account_type()).then_some(TypeDivergence {
                transaction_id: tx.id(),
                account_id: tx.account_id(),
                stamped: tx.account_type(),
                current,
            })
        })
        .collect();

    if !found.is_empty() {
        warn!(count = found.len(), "Transactions diverge from their account type");
    }
    found
}

/// Lists transactions whose account is not in `accounts`.
#[must_use]
pub fn dangling_references(transactions: &[Transaction], accounts: &[Account]) -> Vec<DanglingReference> {
    let found: Vec<DanglingReference> = transactions
        .iter()
        .filter(|tx| !accounts.iter().any(|a| a.id == tx.account_id()))
        .map(|tx| DanglingReference {
            transaction_id: tx.id(),
            account_id: tx.account_id(),
        })
        .collect();

    if !found.is_empty() {
        warn!(count = found.len(), "Transactions reference missing accounts");
    }
    found
}
