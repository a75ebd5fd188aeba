//! Property-based tests for summary module.

use chrono::{Days, NaiveDate};
use flowcash_shared::types::TransactionId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::SummaryService;
use crate::consolidation::ConsolidationEngine;
use crate::domain::{
    Account, AccountType, Settings, StatusFilter, Transaction, TransactionDraft, TransactionStatus,
    type_lookup,
};

fn origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn transactions(raw: &[(i64, bool, bool, u64)]) -> (Vec<Account>, Vec<Transaction>) {
    let accounts = vec![
        Account::new("Sales", AccountType::Income),
        Account::new("Rent", AccountType::Expense),
    ];
    let txs = raw
        .iter()
        .map(|&(cents, income, paid, day)| {
            Transaction::create(
                TransactionId::new(),
                TransactionDraft {
                    date: origin() + Days::new(day),
                    account_id: accounts[usize::from(!income)].id,
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
    (accounts, txs)
}

fn raw_transactions() -> impl Strategy<Value = Vec<(i64, bool, bool, u64)>> {
    prop::collection::vec((1i64..5_000_000, any::<bool>(), any::<bool>(), 0u64..366), 0..50)
}

proptest! {
    /// Feature: summary, Property 1: Four Cells Partition The Range
    /// The four totals add up to every amount dated within the range.
    #[test]
    fn prop_cells_partition_range(
        raw in raw_transactions(),
        start_day in 0u64..366,
        len in 0u64..366,
    ) {
        let (_, txs) = transactions(&raw);
        let start = origin() + Days::new(start_day);
        let end = start + Days::new(len);

        let summary = SummaryService::period_summary(&txs, start, end);
        let expected: Decimal = txs
            .iter()
            .filter(|t| t.date() >= start && t.date() <= end)
            .map(Transaction::amount)
            .sum();

        prop_assert_eq!(
            summary.realized_income + summary.realized_expense + summary.pending_income + summary.pending_expense,
            expected
        );
    }

    /// Feature: summary, Property 2: Current Balance Agrees With Consolidation
    /// The balance at Dec 31 equals December's closing in the yearly table.
    #[test]
    fn prop_current_balance_matches_december_closing(
        raw in raw_transactions(),
        initial in -1_000_000i64..1_000_000,
    ) {
        let (accounts, txs) = transactions(&raw);
        let settings = Settings {
            initial_balance: Decimal::new(initial, 2),
            ..Settings::new("Acme")
        };
        let year_end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let rows = ConsolidationEngine::run(&txs, &accounts, &settings, 2024, StatusFilter::All, None);
        prop_assert_eq!(
            SummaryService::current_balance(&txs, &settings, year_end),
            rows[11].closing
        );
    }

    /// Feature: summary, Property 3: Trend Matches Realized Period Totals
    #[test]
    fn prop_trend_matches_period_summary(raw in raw_transactions()) {
        let (_, txs) = transactions(&raw);

        let trend = SummaryService::monthly_trend(&txs, 2024, 12, 12);
        let year = SummaryService::period_summary(
            &txs,
            origin(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        );

        let income: Decimal = trend.iter().map(|p| p.income).sum();
        let expense: Decimal = trend.iter().map(|p| p.expense).sum();
        prop_assert_eq!(income, year.realized_income);
        prop_assert_eq!(expense, year.realized_expense);
    }
}
