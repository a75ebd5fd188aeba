//! Chart of accounts.

use flowcash_shared::types::AccountId;
use serde::{Deserialize, Serialize};

use super::types::AccountType;

/// Maximum number of accounts of a single type in the chart.
pub const MAX_ACCOUNTS_PER_TYPE: usize = 17;

const DEFAULT_INCOME_ACCOUNTS: [&str; 5] = [
    "Product Sales",
    "Services",
    "Card Receipts",
    "Investment Income",
    "Other Income",
];

const DEFAULT_EXPENSE_ACCOUNTS: [&str; 9] = [
    "Suppliers",
    "Payroll and Charges",
    "Rent",
    "Power and Water",
    "Internet and Phone",
    "Marketing",
    "Taxes",
    "Maintenance",
    "Owner Withdrawals",
];

/// An entry in the chart of accounts.
///
/// Names carry no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Whether transactions on this account add or subtract.
    #[serde(alias = "type")]
    pub account_type: AccountType,
}

impl Account {
    /// Creates an account with a fresh ID.
    #[must_use]
    pub fn new(name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
        }
    }
}

/// The starter chart of accounts, income accounts first.
#[must_use]
pub fn default_chart() -> Vec<Account> {
    let income = DEFAULT_INCOME_ACCOUNTS
        .iter()
        .map(|name| Account::new(*name, AccountType::Income));
    let expense = DEFAULT_EXPENSE_ACCOUNTS
        .iter()
        .map(|name| Account::new(*name, AccountType::Expense));
    income.chain(expense).collect()
}

/// Builds an account-type lookup over a slice of accounts.
///
/// This is the resolver `Transaction::create` expects.
pub fn type_lookup(accounts: &[Account]) -> impl Fn(AccountId) -> Option<AccountType> + '_ {
    move |id| {
        accounts
            .iter()
            .find(|account| account.id == id)
            .map(|account| account.account_type)
    }
}
