//! Record keeping for accounts, transactions, and settings.
//!
//! This module provides:
//! - Repository traits enforcing the mutation-boundary invariants
//! - An in-memory implementation
//! - JSON snapshot loading into the in-memory store

pub mod memory;
pub mod repository;
pub mod snapshot;


pub use memory::InMemoryStore;
pub use repository::{AccountRepository, SettingsRepository, TransactionRepository};
pub use snapshot::{SettingsRecord, Snapshot, TransactionRecord};
