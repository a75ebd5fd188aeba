//! Pure reducers over transaction lists.
//!
//! Every report in this crate is built from these three primitives. They are
//! O(n) in the number of transactions and allocate only their result.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use flowcash_shared::types::AccountId;
use rust_decimal::Decimal;

use crate::domain::{Account, AccountType, Transaction, TransactionStatus};

/// Sums `amount` over the transactions satisfying `predicate`.
pub fn sum_where<'a, I, P>(transactions: I, predicate: P) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
    P: Fn(&Transaction) -> bool,
{
    transactions
        .into_iter()
        .filter(|&tx| predicate(tx))
        .map(Transaction::amount)
        .sum()
}

/// Yields the transactions dated within `[start, end]`, both ends inclusive.
///
/// A reversed range yields nothing.
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = &Transaction> {
    transactions
        .iter()
        .filter(move |tx| tx.date() >= start && tx.date() <= end)
}

/// Sums amounts per account.
///
/// Every listed account appears in the result, with zero when nothing matched.
/// Transactions whose account is not listed are ignored.
pub fn group_by_account<'a, I>(transactions: I, accounts: &[Account]) -> BTreeMap<AccountId, Decimal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: BTreeMap<AccountId, Decimal> = accounts
        .iter()
        .map(|account| (account.id, Decimal::ZERO))
        .collect();

    for tx in transactions {
        if let Some(total) = totals.get_mut(&tx.account_id()) {
            *total += tx.amount();
        }
    }

    totals
}

/// Predicate matching one (type, status) cell of the summary grid.
pub fn is_kind(account_type: AccountType, status: TransactionStatus) -> impl Fn(&Transaction) -> bool {
    move |tx| tx.account_type() == account_type && tx.status() == status
}
