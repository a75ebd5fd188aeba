//! Period summaries for dashboard-style views.
//!
//! This module provides:
//! - Realized and pending totals over an arbitrary date range
//! - The current balance as of a date
//! - The trailing monthly trend of realized activity

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::SummaryService;
pub use types::*;
