//! Property-based tests for the consolidation engine.

use chrono::{Days, NaiveDate};
use flowcash_shared::types::TransactionId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::ConsolidationEngine;
use super::types::{BalanceOverride, MonthEntry};
use crate::domain::{
    Account, AccountType, Settings, StatusFilter, Transaction, TransactionDraft, TransactionStatus,
    type_lookup,
};

/// Raw transaction: (cents, account index, paid, days after 2023-01-01).
type RawTx = (i64, usize, bool, u64);

struct Book {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    settings: Settings,
}

fn origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

fn build(raw: &[RawTx], initial_cents: i64, anchor_day: Option<u64>) -> Book {
    let accounts = vec![
        Account::new("Sales", AccountType::Income),
        Account::new("Services", AccountType::Income),
        Account::new("Rent", AccountType::Expense),
        Account::new("Payroll", AccountType::Expense),
        Account::new("Unused", AccountType::Expense),
    ];
    let transactions = raw
        .iter()
        .map(|&(cents, account, paid, day)| {
            Transaction::create(
                TransactionId::new(),
                TransactionDraft {
                    date: origin() + Days::new(day),
                    account_id: accounts[account].id,
                    description: None,
                    amount: Decimal::new(cents, 2),
                    status: if paid {
                        TransactionStatus::Paid
                    } else {
                        TransactionStatus::Pending
                    },
                },
                type_lookup(&accounts),
            )
            .unwrap()
        })
        .collect();
    let settings = Settings {
        initial_balance: Decimal::new(initial_cents, 2),
        initial_balance_date: anchor_day.map(|d| origin() + Days::new(d)),
        ..Settings::new("Acme")
    };

    Book {
        accounts,
        transactions,
        settings,
    }
}

fn run(book: &Book, year: i32, filter: StatusFilter, what_if: Option<BalanceOverride>) -> Vec<MonthEntry> {
    ConsolidationEngine::run(
        &book.transactions,
        &book.accounts,
        &book.settings,
        year,
        filter,
        what_if,
    )
}

/// Transactions spread over 2023..=2025; account 4 never used.
fn raw_transactions() -> impl Strategy<Value = Vec<RawTx>> {
    prop::collection::vec((1i64..5_000_000, 0usize..4, any::<bool>(), 0u64..1095), 0..60)
}

fn status_filter() -> impl Strategy<Value = StatusFilter> {
    prop_oneof![
        Just(StatusFilter::All),
        Just(StatusFilter::Paid),
        Just(StatusFilter::Pending),
    ]
}

fn anchor() -> impl Strategy<Value = Option<u64>> {
    prop::option::of(0u64..1095)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Feature: consolidation, Property 1: Balance Continuity
    /// closing[m] == opening[m + 1] within a year, and December closes where
    /// the next January opens.
    #[test]
    fn prop_balance_continuity(
        raw in raw_transactions(),
        initial in -1_000_000i64..1_000_000,
        anchor_day in anchor(),
        filter in status_filter(),
        year in 2023i32..=2025,
    ) {
        let book = build(&raw, initial, anchor_day);
        let rows = run(&book, year, filter, None);
        let next = run(&book, year + 1, filter, None);

        for pair in rows.windows(2) {
            prop_assert_eq!(pair[0].closing, pair[1].opening);
        }
        prop_assert_eq!(rows[11].closing, next[0].opening);
    }

    /// Feature: consolidation, Property 2: Override Injection Point
    /// An override of X at month M shifts opening and closing of M..=12 by
    /// exactly X and leaves earlier months untouched.
    #[test]
    fn prop_override_injection_point(
        raw in raw_transactions(),
        initial in -1_000_000i64..1_000_000,
        filter in status_filter(),
        amount_cents in -10_000_000i64..10_000_000,
        month in 1u32..=12,
    ) {
        prop_assume!(amount_cents != 0);
        let book = build(&raw, initial, None);
        let amount = Decimal::new(amount_cents, 2);

        let base = run(&book, 2024, filter, None);
        let shifted = run(&book, 2024, filter, Some(BalanceOverride::new(amount, month, 2024)));

        for (i, (b, s)) in base.iter().zip(&shifted).enumerate() {
            let delta = if (i as u32) + 1 >= month { amount } else { Decimal::ZERO };
            prop_assert_eq!(s.opening - b.opening, delta);
            prop_assert_eq!(s.closing - b.closing, delta);
            prop_assert_eq!(s.net, b.net);
            prop_assert_eq!(&s.breakdown, &b.breakdown);
        }
    }

    /// Feature: consolidation, Property 3: Status Exclusivity
    /// Adding or removing pending transactions never changes any opening or
    /// closing balance, under any filter.
    #[test]
    fn prop_pending_never_moves_balances(
        raw in raw_transactions(),
        initial in -1_000_000i64..1_000_000,
        anchor_day in anchor(),
        filter in status_filter(),
        year in 2023i32..=2025,
    ) {
        let full = build(&raw, initial, anchor_day);
        let realized_only: Vec<RawTx> = raw.iter().copied().filter(|&(_, _, paid, _)| paid).collect();
        let paid = build(&realized_only, initial, anchor_day);

        let with_pending = run(&full, year, filter, None);
        let without_pending = run(&paid, year, filter, None);

        for (a, b) in with_pending.iter().zip(&without_pending) {
            prop_assert_eq!(a.opening, b.opening);
            prop_assert_eq!(a.closing, b.closing);
        }
    }

    /// Feature: consolidation, Property 4: Idempotence
    #[test]
    fn prop_idempotent(
        raw in raw_transactions(),
        initial in -1_000_000i64..1_000_000,
        anchor_day in anchor(),
        filter in status_filter(),
        month in 1u32..=12,
    ) {
        let book = build(&raw, initial, anchor_day);
        let what_if = Some(BalanceOverride::new(Decimal::new(12_345, 2), month, 2024));

        let first = run(&book, 2024, filter, what_if);
        let second = run(&book, 2024, filter, what_if);

        prop_assert_eq!(first, second);
    }

    /// Feature: consolidation, Property 5: Breakdown Completeness
    /// Every account is a key in every month, and the breakdown sums to the
    /// month's filtered income plus expense.
    #[test]
    fn prop_breakdown_complete(
        raw in raw_transactions(),
        filter in status_filter(),
        year in 2023i32..=2025,
    ) {
        let book = build(&raw, 0, None);
        let rows = run(&book, year, filter, None);

        for row in &rows {
            prop_assert_eq!(row.breakdown.len(), book.accounts.len());
            for account in &book.accounts {
                prop_assert!(row.breakdown.contains_key(&account.id));
            }
            prop_assert_eq!(row.breakdown[&book.accounts[4].id], Decimal::ZERO);

            let breakdown_total: Decimal = row.breakdown.values().copied().sum();
            prop_assert_eq!(breakdown_total, row.total_income + row.total_expense);
            prop_assert_eq!(row.net, row.total_income - row.total_expense);
            prop_assert_eq!(row.projected_closing, row.opening + row.net);
        }
    }

    /// Feature: consolidation, Property 6: Realized Filter Closes Exactly
    /// Under the PAID filter with no anchor, closing == opening + net.
    #[test]
    fn prop_paid_filter_closing_equation(
        raw in raw_transactions(),
        initial in -1_000_000i64..1_000_000,
        year in 2023i32..=2025,
    ) {
        let book = build(&raw, initial, None);
        for row in run(&book, year, StatusFilter::Paid, None) {
            prop_assert_eq!(row.closing, row.opening + row.net);
        }
    }
}
