//! Core business logic for FlowCash.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `domain` - Accounts, transactions, settings, and date normalization
//! - `aggregation` - Sum, filter, and group-by reducers over transactions
//! - `balance` - Point-in-time balance from the anchored initial balance
//! - `consolidation` - Month-by-month cash-flow table with what-if override
//! - `summary` - Date-range totals, current balance, and monthly trend
//! - `integrity` - Detection of type divergence and dangling references
//! - `store` - Repository traits, in-memory store, and JSON snapshots
//! - `query` - The report entry points

pub mod aggregation;
pub mod balance;
pub mod consolidation;
pub mod domain;
pub mod integrity;
pub mod query;
pub mod store;
pub mod summary;
